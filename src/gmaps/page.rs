//! chromiumoxide による Google Maps ページ操作

use async_trait::async_trait;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::{Element, Page};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::selectors;
use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::traits::MapsPage;
use crate::wait::poll_until;

/// マウスホイール1回分のスクロール量
const SCROLL_DELTA: u32 = 10_000;

/// Google Maps を開いている1ページ
#[derive(Clone)]
pub struct GoogleMapsPage {
    page: Page,
    config: ScraperConfig,
}

impl GoogleMapsPage {
    pub fn new(page: Page, config: ScraperConfig) -> Self {
        Self { page, config }
    }

    async fn evaluate<T: DeserializeOwned>(&self, script: &str) -> Result<Option<T>, ScraperError> {
        let result = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| ScraperError::JavaScript(e.to_string()))?;
        decode_value(result.value().cloned())
    }

    /// スクリプトが値を返すまで `field_timeout` の間ポーリングする
    async fn wait_for_value(&self, script: String, what: &str) -> Result<String, ScraperError> {
        let script = script.as_str();
        let found = poll_until(
            self.config.field_timeout,
            self.config.poll_interval,
            move || async move { self.evaluate::<String>(script).await },
        )
        .await?;

        found.ok_or_else(|| ScraperError::ElementNotFound(what.to_string()))
    }
}

/// `evaluate` の戻り値を変換する。`null` / `undefined` は `None`。
///
/// 型が合わない値はエラーにする（`None` 扱いにはしない）。
fn decode_value<T: DeserializeOwned>(
    value: Option<serde_json::Value>,
) -> Result<Option<T>, ScraperError> {
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ScraperError::JavaScript(format!("戻り値の変換: {}", e))),
    }
}

/// セレクタを JavaScript の文字列リテラルにする
fn js_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[async_trait]
impl MapsPage for GoogleMapsPage {
    type Listing = Element;

    async fn open(&self, url: &str) -> Result<(), ScraperError> {
        info!("Navigating to {}", url);

        tokio::time::timeout(self.config.navigation_timeout, self.page.goto(url))
            .await
            .map_err(|_| {
                ScraperError::Timeout(format!(
                    "{} の読み込みが{:?}以内に完了しませんでした",
                    url, self.config.navigation_timeout
                ))
            })?
            .map_err(|e| ScraperError::Navigation(e.to_string()))?;

        let script = format!(
            "document.querySelector({}) !== null || null",
            js_literal(selectors::SEARCH_INPUT)
        );
        let script = script.as_str();
        let ready = poll_until(
            self.config.page_settle,
            self.config.poll_interval,
            move || async move { self.evaluate::<bool>(script).await },
        )
        .await?;

        if ready.is_none() {
            return Err(ScraperError::ElementNotFound(format!(
                "検索ボックス ({})",
                selectors::SEARCH_INPUT
            )));
        }

        debug!("Search box ready");
        Ok(())
    }

    async fn search(&self, term: &str) -> Result<(), ScraperError> {
        let input = self
            .page
            .find_element(selectors::SEARCH_INPUT)
            .await
            .map_err(|e| ScraperError::ElementNotFound(format!("検索ボックス: {}", e)))?;

        input
            .click()
            .await
            .map_err(|e| ScraperError::JavaScript(format!("検索ボックスクリック: {}", e)))?;

        // 前回の検索語を消す
        input
            .call_js_fn("function() { this.value = ''; }", false)
            .await
            .map_err(|e| ScraperError::JavaScript(format!("検索ボックスクリア: {}", e)))?;

        input
            .type_str(term)
            .await
            .map_err(|e| ScraperError::JavaScript(format!("検索語入力: {}", e)))?;

        input
            .press_key("Enter")
            .await
            .map_err(|e| ScraperError::JavaScript(format!("検索送信: {}", e)))?;

        debug!("Submitted search: {}", term);
        Ok(())
    }

    async fn prime_results(&self) -> Result<(), ScraperError> {
        self.page
            .find_element(selectors::LISTING_LINK)
            .await
            .map_err(|e| ScraperError::ElementNotFound(format!("リスティング: {}", e)))?
            .hover()
            .await
            .map_err(|e| ScraperError::JavaScript(format!("リスティングホバー: {}", e)))?;
        Ok(())
    }

    async fn scroll_results(&self) -> Result<(), ScraperError> {
        let script = format!(
            r#"
            (function() {{
                var feed = document.querySelector({feed});
                if (feed) {{
                    feed.scrollBy(0, {delta});
                    return true;
                }}
                window.scrollBy(0, {delta});
                return false;
            }})()
            "#,
            feed = js_literal(selectors::RESULTS_FEED),
            delta = SCROLL_DELTA
        );

        let scrolled_feed = self.evaluate::<bool>(&script).await?.unwrap_or(false);
        if !scrolled_feed {
            debug!("Results feed not found, scrolled window instead");
        }
        Ok(())
    }

    async fn count_listings(&self) -> Result<usize, ScraperError> {
        let script = format!(
            "document.querySelectorAll({}).length",
            js_literal(selectors::LISTING_LINK)
        );
        Ok(self.evaluate::<usize>(&script).await?.unwrap_or(0))
    }

    async fn listings(&self) -> Result<Vec<Element>, ScraperError> {
        self.page
            .find_elements(selectors::LISTING_LINK)
            .await
            .map_err(|e| ScraperError::ElementNotFound(format!("リスティング: {}", e)))
    }

    async fn open_listing(&self, listing: &Element) -> Result<(), ScraperError> {
        // カード全体を覆うリンクの中心を CDP のマウスイベントでクリックする
        listing
            .scroll_into_view()
            .await
            .map_err(|e| ScraperError::JavaScript(format!("リスティングスクロール: {}", e)))?
            .click()
            .await
            .map_err(|e| ScraperError::JavaScript(format!("リスティングクリック: {}", e)))?;
        Ok(())
    }

    async fn listing_name(&self, listing: &Element) -> Result<String, ScraperError> {
        let label = listing
            .attribute(selectors::ARIA_LABEL)
            .await
            .map_err(|e| ScraperError::JavaScript(format!("aria-label取得: {}", e)))?;
        Ok(label.unwrap_or_default())
    }

    async fn listing_href(&self, listing: &Element) -> Result<String, ScraperError> {
        let href = listing
            .attribute(selectors::HREF)
            .await
            .map_err(|e| ScraperError::JavaScript(format!("href取得: {}", e)))?;
        Ok(href.unwrap_or_default())
    }

    async fn detail_title(&self) -> Result<Option<String>, ScraperError> {
        let script = format!(
            r#"
            (function() {{
                var el = document.querySelector({});
                return el ? el.textContent.trim() : null;
            }})()
            "#,
            js_literal(selectors::PLACE_TITLE)
        );
        self.evaluate::<String>(&script).await
    }

    async fn text_content(&self, selector: &str) -> Result<String, ScraperError> {
        let script = format!(
            r#"
            (function() {{
                var el = document.querySelector({});
                return el ? el.textContent : null;
            }})()
            "#,
            js_literal(selector)
        );
        self.wait_for_value(script, selector).await
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<String, ScraperError> {
        let script = format!(
            r#"
            (function() {{
                var el = document.querySelector({});
                return el ? el.getAttribute({}) : null;
            }})()
            "#,
            js_literal(selector),
            js_literal(name)
        );
        self.wait_for_value(script, &format!("{}[{}]", selector, name))
            .await
    }

    async fn current_url(&self) -> Result<String, ScraperError> {
        Ok(self
            .evaluate::<String>("window.location.href")
            .await?
            .unwrap_or_default())
    }

    async fn screenshot(&self) -> Result<Vec<u8>, ScraperError> {
        self.page
            .screenshot(ScreenshotParams::builder().full_page(true).build())
            .await
            .map_err(|e| ScraperError::JavaScript(format!("スクリーンショット: {}", e)))
    }
}
