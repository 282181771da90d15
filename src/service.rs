use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::Service;
use tracing::{info, warn};

use crate::browser::BrowserSession;
use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::gmaps::{GoogleMapsPage, GoogleMapsScraper, TermExport};

/// スクレイピングリクエスト
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub terms: Vec<String>,
    pub config: ScraperConfig,
}

impl ScrapeRequest {
    pub fn new(terms: Vec<String>) -> Self {
        Self {
            terms,
            config: ScraperConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_dir = path.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    pub fn with_total(mut self, total: Option<usize>) -> Self {
        self.config.total = total;
        self
    }
}

/// スクレイピング結果
#[derive(Debug)]
pub struct ScrapeResult {
    pub exports: Vec<TermExport>,
}

impl ScrapeResult {
    pub fn total_records(&self) -> usize {
        self.exports.iter().map(|e| e.record_count).sum()
    }
}

/// tower::Serviceを実装したスクレイパーサービス
///
/// 1リクエストにつきブラウザを1つ起動し、成否にかかわらず必ず閉じる。
#[derive(Debug, Clone, Default)]
pub struct ScraperService {}

impl ScraperService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<ScrapeRequest> for ScraperService {
    type Response = ScrapeResult;
    type Error = ScraperError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ScrapeRequest) -> Self::Future {
        info!("スクレイピングリクエスト受信: terms={}", req.terms.len());

        Box::pin(async move {
            if req.terms.iter().all(|t| t.trim().is_empty()) {
                return Err(ScraperError::EmptyRequest);
            }

            let session = BrowserSession::launch(&req.config).await?;
            let page = GoogleMapsPage::new(session.page().clone(), req.config.clone());
            let scraper = GoogleMapsScraper::new(req.config);

            let outcome = scraper.run(&page, &req.terms).await;

            if let Err(e) = session.close().await {
                warn!("ブラウザ終了に失敗: {}", e);
            }

            let result = ScrapeResult { exports: outcome? };
            info!(
                "スクレイピング完了: terms={}, records={}",
                result.exports.len(),
                result.total_records()
            );
            Ok(result)
        })
    }
}
