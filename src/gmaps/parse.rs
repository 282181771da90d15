//! 画面テキスト・URLから型付きの値を取り出す

use thiserror::Error;

const COORDINATE_MARKER: &str = "/@";
const PLACE_MARKER: &str = "/maps/place/";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("URLに座標マーカー '/@' がありません: {0}")]
    MissingCoordinateMarker(String),

    #[error("座標が2つそろっていません: {0}")]
    IncompleteCoordinates(String),

    #[error("数値に変換できません: {0:?}")]
    InvalidNumber(String),

    #[error("空のテキストです")]
    Empty,
}

/// 地図URL `.../@<lat>,<lon>,<zoom>...` から (緯度, 経度) を取り出す。
///
/// 最後の `/@` 以降、最初の `/` までを `,` で区切った先頭2要素を使う。
/// 3つ目以降（ズーム等）は無視する。
pub fn parse_coordinates(url: &str) -> Result<(f64, f64), ParseError> {
    let (_, tail) = url
        .rsplit_once(COORDINATE_MARKER)
        .ok_or_else(|| ParseError::MissingCoordinateMarker(url.to_string()))?;

    let segment = tail.split('/').next().unwrap_or_default();
    let mut tokens = segment.split(',');

    let (lat, lon) = match (tokens.next(), tokens.next()) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(ParseError::IncompleteCoordinates(segment.to_string())),
    };

    Ok((parse_float(lat)?, parse_float(lon)?))
}

/// 場所URL `.../maps/place/<slug>/...` の slug 部分。
///
/// リスティングの href と詳細パネル表示後のURLで同じ値になる。
pub fn place_slug(url: &str) -> Option<&str> {
    let (_, tail) = url.split_once(PLACE_MARKER)?;
    tail.split(['/', '?']).next().filter(|slug| !slug.is_empty())
}

/// レビュー件数テキスト（例: `"1,234 reviews"`, `"(1,234)"`）を件数に変換
pub fn parse_review_count(text: &str) -> Result<u32, ParseError> {
    let token = leading_token(text)?;
    let digits: String = token
        .trim_matches(|c| c == '(' || c == ')')
        .chars()
        .filter(|c| !matches!(c, ',' | '.' | '\u{202f}' | '\u{a0}'))
        .collect();

    digits
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

/// 評価のアクセシブルラベル（例: `"4.5 stars"`, `"4,5 estrellas"`）を平均値に変換
///
/// 小数点のカンマは `.` に正規化する。
pub fn parse_review_average(label: &str) -> Result<f64, ParseError> {
    let token = leading_token(label)?;
    parse_float(&token.replace(',', "."))
}

fn leading_token(text: &str) -> Result<&str, ParseError> {
    text.split_whitespace().next().ok_or(ParseError::Empty)
}

fn parse_float(token: &str) -> Result<f64, ParseError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}
