//! リスティング詳細パネルからのレコード抽出

use base64::Engine;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::parse::{parse_coordinates, parse_review_average, parse_review_count, place_slug};
use super::selectors;
use super::types::BusinessRecord;
use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::traits::MapsPage;
use crate::wait::poll_until;

/// リスティングを開いて1件分のレコードを読む。
///
/// どのフィールドの読み取りに失敗してもエラーを返す（部分的なレコードは作らない）。
pub async fn extract_record<P: MapsPage>(
    page: &P,
    listing: &P::Listing,
    config: &ScraperConfig,
) -> Result<BusinessRecord, ScraperError> {
    let name = page.listing_name(listing).await?.trim().to_string();
    let href = page.listing_href(listing).await?;
    let before = page.current_url().await?;

    page.open_listing(listing).await?;
    wait_for_detail(page, &name, &href, &before, config).await?;
    sleep(config.detail_settle).await;

    let address = read_text(page, selectors::ADDRESS).await?;
    let website = read_text(page, selectors::WEBSITE).await?;
    let phone_number = read_text(page, selectors::PHONE).await?;
    let reviews_count = parse_review_count(&read_text(page, selectors::REVIEW_COUNT).await?)?;
    let reviews_average = parse_review_average(
        &page
            .attribute(selectors::REVIEW_AVERAGE, selectors::ARIA_LABEL)
            .await?,
    )?;

    // 詳細パネルが開くとURLに座標が入る
    let url = page.current_url().await?;
    let (latitude, longitude) = parse_coordinates(&url)?;

    Ok(BusinessRecord {
        name,
        address,
        website,
        phone_number,
        reviews_count,
        reviews_average,
        latitude,
        longitude,
    })
}

/// 全リスティングを順に抽出する。失敗したリスティングはログを出して飛ばす。
pub async fn extract_records<P: MapsPage>(
    page: &P,
    listings: &[P::Listing],
    config: &ScraperConfig,
) -> Vec<BusinessRecord> {
    let mut records = Vec::with_capacity(listings.len());

    for (i, listing) in listings.iter().enumerate() {
        match extract_record(page, listing, config).await {
            Ok(record) => {
                debug!("Extracted listing {}/{}: {}", i + 1, listings.len(), record.name);
                records.push(record);
            }
            Err(e) => {
                warn!("Failed to extract listing {}/{}: {}", i + 1, listings.len(), e);
                if config.debug {
                    log_screenshot(page).await;
                }
            }
        }
    }

    info!(
        "Extracted {} of {} listings",
        records.len(),
        listings.len()
    );
    records
}

/// 詳細パネルがこのリスティングを表示するまで待つ。
///
/// URLが座標を含み、かつ見出しが店名と一致すること。パネルの中身はURLより
/// 遅れて切り替わるので、URLだけでは前の店舗の項目を読んでしまう。
/// 直前と同じ店舗（広告枠と通常枠の重複など）はURLが変わらないので、
/// その場合は href と直前URLの場所が同じなら変化なしでもよい。
async fn wait_for_detail<P: MapsPage>(
    page: &P,
    name: &str,
    href: &str,
    before: &str,
    config: &ScraperConfig,
) -> Result<(), ScraperError> {
    let already_open = place_slug(before).is_some() && place_slug(before) == place_slug(href);

    let opened = poll_until(config.detail_timeout, config.poll_interval, move || async move {
        let url = page.current_url().await?;
        if !url.contains("/@") || (url == before && !already_open) {
            return Ok(None);
        }
        let title = page.detail_title().await?;
        Ok::<_, ScraperError>((title.as_deref() == Some(name)).then_some(()))
    })
    .await?;

    opened.ok_or_else(|| {
        ScraperError::Timeout(format!(
            "{} の詳細パネルが{:?}以内に開きませんでした",
            name, config.detail_timeout
        ))
    })
}

async fn read_text<P: MapsPage>(page: &P, selector: &str) -> Result<String, ScraperError> {
    Ok(page.text_content(selector).await?.trim().to_string())
}

async fn log_screenshot<P: MapsPage>(page: &P) {
    match page.screenshot().await {
        Ok(png) => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
            debug!("Failure screenshot: data:image/png;base64,{}", encoded);
        }
        Err(e) => debug!("Failed to capture screenshot: {}", e),
    }
}
