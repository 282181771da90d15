//! Google Maps スクレイパー実装
//!
//! 検索語ごとに 検索 → 収集 → 抽出 → 出力 を順に行う

use tracing::{info, warn};

use super::collector::collect_listings;
use super::extractor::extract_records;
use super::types::{RecordBatch, TermExport};
use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::traits::MapsPage;
use crate::wait::poll_until;

/// Google Maps スクレイパー
pub struct GoogleMapsScraper {
    config: ScraperConfig,
}

impl GoogleMapsScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// 開始ページを開き、全検索語を順に処理する
    pub async fn run<P: MapsPage>(
        &self,
        page: &P,
        terms: &[String],
    ) -> Result<Vec<TermExport>, ScraperError> {
        page.open(&self.config.start_url).await?;

        let mut exports = Vec::with_capacity(terms.len());
        for term in terms {
            let term = term.trim();
            if term.is_empty() {
                continue;
            }
            exports.push(self.scrape_term(page, term).await?);
        }

        info!("Finished {} search terms", exports.len());
        Ok(exports)
    }

    /// 1検索語分を処理して XLSX / CSV に出力する
    pub async fn scrape_term<P: MapsPage>(
        &self,
        page: &P,
        term: &str,
    ) -> Result<TermExport, ScraperError> {
        info!("Scraping for: {}", term);

        page.search(term).await?;

        let appeared = poll_until(
            self.config.search_timeout,
            self.config.poll_interval,
            move || async move {
                let count = page.count_listings().await?;
                Ok::<_, ScraperError>((count > 0).then_some(count))
            },
        )
        .await?;

        match appeared {
            Some(count) => {
                info!("{} listings visible for {:?}", count, term);
                page.prime_results().await?;
            }
            None => warn!("No listings appeared for {:?}", term),
        }

        let listings = collect_listings(page, &self.config).await?;
        let records = extract_records(page, &listings, &self.config).await;

        let batch = RecordBatch::new(&self.config.output_dir).with_records(records);
        let files = batch.export(term)?;

        Ok(TermExport {
            term: term.to_string(),
            record_count: batch.len(),
            xlsx_path: files.xlsx,
            csv_path: files.csv,
        })
    }
}
