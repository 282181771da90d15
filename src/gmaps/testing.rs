//! テスト用の MapsPage 実装

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::selectors;
use crate::error::ScraperError;
use crate::traits::MapsPage;

pub const SEARCH_URL: &str = "https://www.google.com/maps/search/test/@40.0,-74.0,12z";

/// `fail_on` に指定するとクリック自体が失敗する
pub const FAIL_CLICK: &str = "click";
/// `fail_on` に指定するとクリックしても詳細パネルが開かない
pub const FAIL_OPEN: &str = "open";

#[derive(Debug, Clone)]
pub struct FakePlace {
    pub name: String,
    pub address: String,
    pub website: String,
    pub phone: String,
    pub reviews_text: String,
    pub rating_label: String,
    pub href: String,
    pub url: String,
    pub fail_on: Option<&'static str>,
}

impl FakePlace {
    pub fn numbered(i: usize) -> Self {
        Self {
            name: format!("Place {}", i),
            address: format!("{} Main St, Springfield", i),
            website: format!("place{}.example.com", i),
            phone: format!("+1 555-010{}", i),
            reviews_text: "(1,234)".to_string(),
            rating_label: "4.5 stars".to_string(),
            href: format!("https://www.google.com/maps/place/Place+{}/data=!4m7!3m6", i),
            url: format!(
                "https://www.google.com/maps/place/Place+{i}/@40.{i},-74.{i},17z/data=!3m1",
                i = i
            ),
            fail_on: None,
        }
    }

    pub fn failing_on(mut self, what: &'static str) -> Self {
        self.fail_on = Some(what);
        self
    }
}

enum Feed {
    Growing { step: usize },
    Flapping { base: usize },
}

pub struct FakeMapsPage {
    places: Vec<FakePlace>,
    feed: Feed,
    fail_scroll: bool,
    panel_lag: usize,
    lag_left: AtomicUsize,
    scrolls: AtomicUsize,
    primes: AtomicUsize,
    selected: Mutex<Option<usize>>,
    panel: Mutex<Option<usize>>,
    opened: Mutex<Option<String>>,
    searches: Mutex<Vec<String>>,
}

impl FakeMapsPage {
    fn build(places: Vec<FakePlace>, feed: Feed) -> Self {
        Self {
            places,
            feed,
            fail_scroll: false,
            panel_lag: 0,
            lag_left: AtomicUsize::new(0),
            scrolls: AtomicUsize::new(0),
            primes: AtomicUsize::new(0),
            selected: Mutex::new(None),
            panel: Mutex::new(None),
            opened: Mutex::new(None),
            searches: Mutex::new(Vec::new()),
        }
    }

    /// 最初に `step` 件、以後1スクロールごとに `step` 件ずつ、`available` 件まで現れる
    pub fn growing(available: usize, step: usize) -> Self {
        Self::build((0..available).map(FakePlace::numbered).collect(), Feed::Growing { step })
    }

    /// 件数が `base` と `base + 1` を交互に報告し続ける
    pub fn flapping(base: usize) -> Self {
        Self::build(
            (0..=base).map(FakePlace::numbered).collect(),
            Feed::Flapping { base },
        )
    }

    pub fn failing_scroll() -> Self {
        let mut page = Self::growing(10, 10);
        page.fail_scroll = true;
        page
    }

    /// 検索直後に全件が現れる
    pub fn with_places(places: Vec<FakePlace>) -> Self {
        let step = places.len().max(1);
        Self::build(places, Feed::Growing { step })
    }

    /// クリック後、パネルの読み取り `reads` 回分は前の店舗を表示し続ける
    /// （URLはクリック直後に切り替わる）
    pub fn with_panel_lag(mut self, reads: usize) -> Self {
        self.panel_lag = reads;
        self
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.load(Ordering::SeqCst)
    }

    pub fn primes(&self) -> usize {
        self.primes.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    pub fn opened_url(&self) -> Option<String> {
        self.opened.lock().unwrap().clone()
    }

    fn visible(&self) -> usize {
        let scrolls = self.scrolls();
        match self.feed {
            Feed::Growing { step } => (step * (scrolls + 1)).min(self.places.len()),
            Feed::Flapping { base } => base + scrolls % 2,
        }
    }

    /// 詳細パネルに表示中の店舗。読み取りごとに遅延を1つ消化する
    fn panel_place(&self) -> Option<&FakePlace> {
        let selected = *self.selected.lock().unwrap();
        let mut panel = self.panel.lock().unwrap();
        let lagging = self
            .lag_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if !lagging {
            *panel = selected;
        }
        let shown = *panel;
        shown.and_then(|i| self.places.get(i))
    }

    fn selected_place(&self) -> Result<&FakePlace, ScraperError> {
        self.panel_place()
            .ok_or_else(|| ScraperError::ElementNotFound("no detail panel".into()))
    }

    fn field(&self, selector: &str) -> Result<String, ScraperError> {
        let place = self.selected_place()?;
        if place.fail_on == Some(selector) {
            return Err(ScraperError::ElementNotFound(selector.to_string()));
        }
        let value = match selector {
            selectors::ADDRESS => &place.address,
            selectors::WEBSITE => &place.website,
            selectors::PHONE => &place.phone,
            selectors::REVIEW_COUNT => &place.reviews_text,
            _ => return Err(ScraperError::ElementNotFound(selector.to_string())),
        };
        Ok(value.clone())
    }
}

#[async_trait]
impl MapsPage for FakeMapsPage {
    type Listing = usize;

    async fn open(&self, url: &str) -> Result<(), ScraperError> {
        *self.opened.lock().unwrap() = Some(url.to_string());
        Ok(())
    }

    async fn search(&self, term: &str) -> Result<(), ScraperError> {
        self.searches.lock().unwrap().push(term.to_string());
        self.scrolls.store(0, Ordering::SeqCst);
        *self.selected.lock().unwrap() = None;
        *self.panel.lock().unwrap() = None;
        Ok(())
    }

    async fn prime_results(&self) -> Result<(), ScraperError> {
        self.primes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn scroll_results(&self) -> Result<(), ScraperError> {
        if self.fail_scroll {
            return Err(ScraperError::JavaScript("scroll failed".into()));
        }
        self.scrolls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn count_listings(&self) -> Result<usize, ScraperError> {
        Ok(self.visible())
    }

    async fn listings(&self) -> Result<Vec<usize>, ScraperError> {
        Ok((0..self.visible()).collect())
    }

    async fn open_listing(&self, listing: &usize) -> Result<(), ScraperError> {
        let place = self
            .places
            .get(*listing)
            .ok_or_else(|| ScraperError::ElementNotFound(format!("listing {}", listing)))?;
        match place.fail_on {
            Some(FAIL_CLICK) => Err(ScraperError::JavaScript("click failed".into())),
            Some(FAIL_OPEN) => Ok(()),
            _ => {
                *self.selected.lock().unwrap() = Some(*listing);
                self.lag_left.store(self.panel_lag, Ordering::SeqCst);
                Ok(())
            }
        }
    }

    async fn listing_name(&self, listing: &usize) -> Result<String, ScraperError> {
        Ok(self
            .places
            .get(*listing)
            .map(|p| p.name.clone())
            .unwrap_or_default())
    }

    async fn listing_href(&self, listing: &usize) -> Result<String, ScraperError> {
        Ok(self
            .places
            .get(*listing)
            .map(|p| p.href.clone())
            .unwrap_or_default())
    }

    async fn detail_title(&self) -> Result<Option<String>, ScraperError> {
        Ok(self.panel_place().map(|p| p.name.clone()))
    }

    async fn text_content(&self, selector: &str) -> Result<String, ScraperError> {
        self.field(selector)
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<String, ScraperError> {
        let place = self.selected_place()?;
        if place.fail_on == Some(selector) {
            return Err(ScraperError::ElementNotFound(selector.to_string()));
        }
        if selector == selectors::REVIEW_AVERAGE && name == selectors::ARIA_LABEL {
            Ok(place.rating_label.clone())
        } else {
            Err(ScraperError::ElementNotFound(format!("{}[{}]", selector, name)))
        }
    }

    async fn current_url(&self) -> Result<String, ScraperError> {
        let selected = *self.selected.lock().unwrap();
        Ok(selected
            .and_then(|i| self.places.get(i))
            .map(|p| p.url.clone())
            .unwrap_or_else(|| SEARCH_URL.to_string()))
    }

    async fn screenshot(&self) -> Result<Vec<u8>, ScraperError> {
        Ok(vec![0x89, b'P', b'N', b'G'])
    }
}
