//! 検索語の読み込み

use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::ScraperError;

pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// 検索語を決める。
///
/// `search` があればそれだけを使う。なければ `input_path` の空でない行を使う。
/// どちらからも得られなければ `ScraperError::NoSearchTerms`。
pub fn resolve_search_terms(
    search: Option<&str>,
    input_path: &Path,
) -> Result<Vec<String>, ScraperError> {
    if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(vec![term.to_string()]);
    }

    let content = match std::fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let terms = parse_terms(&content);
    if terms.is_empty() {
        return Err(ScraperError::NoSearchTerms(
            input_path.display().to_string(),
        ));
    }

    info!("Loaded {} search terms from {:?}", terms.len(), input_path);
    Ok(terms)
}

/// 1行1検索語。前後の空白を除き、空行は飛ばす。
pub fn parse_terms(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
