use thiserror::Error;

use crate::gmaps::ParseError;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("ブラウザ初期化エラー: {0}")]
    BrowserInit(String),

    #[error("ナビゲーションエラー: {0}")]
    Navigation(String),

    #[error("タイムアウト: {0}")]
    Timeout(String),

    #[error("要素が見つかりません: {0}")]
    ElementNotFound(String),

    #[error("JavaScript実行エラー: {0}")]
    JavaScript(String),

    #[error("解析エラー: {0}")]
    Parse(#[from] ParseError),

    #[error("検索語がありません: -s で指定するか {0} に記入してください")]
    NoSearchTerms(String),

    #[error("リクエストに検索語が含まれていません")]
    EmptyRequest,

    #[error("ファイル操作エラー: {0}")]
    FileIO(#[from] std::io::Error),

    #[error("CSV出力エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel出力エラー: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
