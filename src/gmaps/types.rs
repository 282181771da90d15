//! Google Maps 関連の型定義

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 店舗1件分のデータ
///
/// フィールド名がそのまま CSV / Excel のヘッダになる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    pub address: String,
    pub website: String,
    pub phone_number: String,
    pub reviews_count: u32,
    pub reviews_average: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl BusinessRecord {
    /// 出力ヘッダ（フィールド順）
    pub const HEADERS: [&'static str; 8] = [
        "name",
        "address",
        "website",
        "phone_number",
        "reviews_count",
        "reviews_average",
        "latitude",
        "longitude",
    ];
}

/// 1検索語分のレコード（発見順）と出力先
#[derive(Debug, Clone)]
pub struct RecordBatch {
    pub records: Vec<BusinessRecord>,
    pub save_at: PathBuf,
}

impl RecordBatch {
    pub fn new(save_at: impl Into<PathBuf>) -> Self {
        Self {
            records: Vec::new(),
            save_at: save_at.into(),
        }
    }

    pub fn with_records(mut self, records: Vec<BusinessRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn push(&mut self, record: BusinessRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 検索語ごとの出力結果
#[derive(Debug, Clone)]
pub struct TermExport {
    pub term: String,
    pub record_count: usize,
    pub xlsx_path: PathBuf,
    pub csv_path: PathBuf,
}
