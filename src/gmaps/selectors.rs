//! Google Maps の DOM セレクタ

pub const SEARCH_INPUT: &str = "input#searchboxinput";

/// 検索結果のリスティングリンク
pub const LISTING_LINK: &str = r#"a[href*="https://www.google.com/maps/place"]"#;

/// 検索結果のスクロール可能なフィード
pub const RESULTS_FEED: &str = r#"div[role="feed"]"#;

/// 詳細パネルの店名見出し
pub const PLACE_TITLE: &str = r#"div[role="main"] h1"#;

pub const ADDRESS: &str = r#"button[data-item-id="address"] div.fontBodyMedium"#;
pub const WEBSITE: &str = r#"a[data-item-id="authority"] div.fontBodyMedium"#;
pub const PHONE: &str = r#"button[data-item-id^="phone:tel:"] div.fontBodyMedium"#;

pub const REVIEW_COUNT: &str = r#"button[jsaction="pane.reviewChart.moreReviews"] span"#;
pub const REVIEW_AVERAGE: &str = r#"div[jsaction="pane.reviewChart.moreReviews"] div[role="img"]"#;

pub const ARIA_LABEL: &str = "aria-label";
pub const HREF: &str = "href";
