//! レコードを Excel / CSV に出力

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::error::ScraperError;
use crate::gmaps::{BusinessRecord, RecordBatch};

const FILE_PREFIX: &str = "google_maps_data_";

/// 検索語から拡張子なしのファイル名を作る（空白とパス区切りは `_`）
pub fn export_file_stem(term: &str) -> String {
    let sanitized: String = term
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{}{}", FILE_PREFIX, sanitized)
}

/// 出力したファイルのパス
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFiles {
    pub xlsx: PathBuf,
    pub csv: PathBuf,
}

impl RecordBatch {
    /// `save_at` 以下に `<stem>.xlsx` と `<stem>.csv` を書き出す
    pub fn export(&self, term: &str) -> Result<ExportedFiles, ScraperError> {
        let stem = export_file_stem(term);
        let xlsx = self.save_to_excel(&stem)?;
        let csv = self.save_to_csv(&stem)?;
        Ok(ExportedFiles { xlsx, csv })
    }

    pub fn save_to_excel(&self, stem: &str) -> Result<PathBuf, ScraperError> {
        std::fs::create_dir_all(&self.save_at)?;
        let path = self.save_at.join(format!("{}.xlsx", stem));
        write_xlsx(&self.records, &path)?;
        info!("Saved {} records to {:?}", self.records.len(), path);
        Ok(path)
    }

    pub fn save_to_csv(&self, stem: &str) -> Result<PathBuf, ScraperError> {
        std::fs::create_dir_all(&self.save_at)?;
        let path = self.save_at.join(format!("{}.csv", stem));
        write_csv(&self.records, &path)?;
        info!("Saved {} records to {:?}", self.records.len(), path);
        Ok(path)
    }
}

/// CSVに書き出す。レコードが0件でもヘッダ行は出力する。
pub fn write_csv(records: &[BusinessRecord], path: &Path) -> Result<(), ScraperError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(BusinessRecord::HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Excel (Sheet1) に書き出す。レコードが0件でもヘッダ行は出力する。
pub fn write_xlsx(records: &[BusinessRecord], path: &Path) -> Result<(), ScraperError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in BusinessRecord::HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &record.name)?;
        worksheet.write_string(row, 1, &record.address)?;
        worksheet.write_string(row, 2, &record.website)?;
        worksheet.write_string(row, 3, &record.phone_number)?;
        worksheet.write_number(row, 4, record.reviews_count)?;
        worksheet.write_number(row, 5, record.reviews_average)?;
        worksheet.write_number(row, 6, record.latitude)?;
        worksheet.write_number(row, 7, record.longitude)?;
    }

    workbook.save(path)?;
    Ok(())
}
