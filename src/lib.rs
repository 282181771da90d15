//! Google Maps スクレイパーライブラリ
//!
//! - 検索語ごとに Google Maps を検索し、結果リストをスクロールして収集
//! - 各店舗の詳細パネルから名前・住所・サイト・電話・レビュー・座標を抽出
//! - 検索語ごとに Excel (.xlsx) と CSV に出力
//!
//! # 使用例
//!
//! ```rust,ignore
//! use gmaps_scraper::{ScraperService, ScrapeRequest};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut service = ScraperService::new();
//!
//!     let request = ScrapeRequest::new(vec!["coffee shops".to_string()])
//!         .with_output_dir("./output")
//!         .with_total(Some(20))
//!         .with_headless(false);
//!
//!     let result = service.call(request).await.unwrap();
//!     for export in &result.exports {
//!         println!("{}: {} records -> {:?}", export.term, export.record_count, export.csv_path);
//!     }
//! }
//! ```
//!
//! # ページ操作を差し替える
//!
//! 収集・抽出は [`MapsPage`] トレイト越しに行うため、
//! 任意の実装を [`GoogleMapsScraper::run`] に渡せる。

pub mod browser;
pub mod config;
pub mod error;
pub mod export;
pub mod gmaps;
pub mod service;
pub mod terms;
pub mod traits;
pub mod wait;

// 主要な型をリエクスポート
pub use browser::BrowserSession;
pub use config::ScraperConfig;
pub use error::ScraperError;
pub use export::{export_file_stem, ExportedFiles};
pub use service::{ScrapeRequest, ScrapeResult, ScraperService};
pub use terms::resolve_search_terms;
pub use traits::MapsPage;

pub use gmaps::{
    BusinessRecord, GoogleMapsPage, GoogleMapsScraper, ParseError, RecordBatch, TermExport,
};
