//! Google Maps スクレイパーモジュール
//!
//! 検索結果をスクロールして集め、各店舗の詳細パネルからレコードを抽出する

mod collector;
mod extractor;
mod page;
mod parse;
mod scraper;
pub mod selectors;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use collector::collect_listings;
pub use extractor::{extract_record, extract_records};
pub use page::GoogleMapsPage;
pub use parse::{
    parse_coordinates, parse_review_average, parse_review_count, place_slug, ParseError,
};
pub use scraper::GoogleMapsScraper;
pub use types::{BusinessRecord, RecordBatch, TermExport};
