//! 検索結果のスクロール収集

use tracing::{debug, info, warn};

use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::traits::MapsPage;
use crate::wait::poll_until;

/// 結果パネルをスクロールしながら最大 `config.total` 件のリスティングを集める。
///
/// スクロール後に件数が増えなければ打ち切る。スクロール回数は
/// `config.max_scrolls` で頭打ち。戻り値の長さは常に上限以下。
pub async fn collect_listings<P: MapsPage>(
    page: &P,
    config: &ScraperConfig,
) -> Result<Vec<P::Listing>, ScraperError> {
    let limit = config.listing_limit();
    let mut listings: Vec<P::Listing> = Vec::new();
    let mut previously_counted = 0usize;
    let mut scrolls = 0usize;

    while listings.len() < limit {
        if scrolls >= config.max_scrolls {
            warn!(
                "Reached scroll limit ({}), stopping with {} listings",
                config.max_scrolls,
                listings.len()
            );
            break;
        }
        scrolls += 1;

        page.scroll_results().await?;

        let previous = previously_counted;
        let changed = poll_until(config.scroll_settle, config.poll_interval, move || async move {
            let count = page.count_listings().await?;
            Ok::<_, ScraperError>((count != previous).then_some(count))
        })
        .await?;

        let Some(current_count) = changed else {
            debug!("Listing count stable at {} after {} scrolls", previous, scrolls);
            break;
        };

        previously_counted = current_count;
        listings = page.listings().await?;
        listings.truncate(limit);
        info!("Total scraped: {}", listings.len());
    }

    Ok(listings)
}
