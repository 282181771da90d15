use std::path::PathBuf;
use std::time::Duration;

pub const GOOGLE_MAPS_URL: &str = "https://www.google.com/maps";

/// スクレイパー設定
///
/// 待機はすべて上限付きポーリング（`poll_interval` 間隔）で行う。
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// 最初に開くURL
    pub start_url: String,
    /// XLSX/CSV の出力先
    pub output_dir: PathBuf,
    pub headless: bool,
    /// 失敗時スクリーンショットとChromeログを有効化
    pub debug: bool,
    /// 未指定なら CHROME_PATH / CHROMIUM_PATH、それもなければ chromiumoxide の自動検出
    pub chrome_executable: Option<PathBuf>,
    /// 検索語ごとの最大取得件数（None = 無制限）
    pub total: Option<usize>,
    /// スクロール回数の上限
    pub max_scrolls: usize,
    pub navigation_timeout: Duration,
    /// 初回ロード後に検索ボックスが現れるまでの待機上限
    pub page_settle: Duration,
    /// 検索送信後にリスティングが現れるまでの待機上限
    pub search_timeout: Duration,
    /// スクロール後に件数が増えるまでの待機上限
    pub scroll_settle: Duration,
    /// 詳細パネルが開く（URLが変わる）までの待機上限
    pub detail_timeout: Duration,
    /// 詳細パネルが開いた後の固定待機
    pub detail_settle: Duration,
    /// 各フィールド要素が現れるまでの待機上限
    pub field_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            start_url: GOOGLE_MAPS_URL.to_string(),
            output_dir: PathBuf::from("./output"),
            headless: true,
            debug: false,
            chrome_executable: None,
            total: None,
            max_scrolls: 200,
            navigation_timeout: Duration::from_secs(60),
            page_settle: Duration::from_secs(5),
            search_timeout: Duration::from_secs(5),
            scroll_settle: Duration::from_secs(3),
            detail_timeout: Duration::from_secs(5),
            detail_settle: Duration::from_millis(500),
            field_timeout: Duration::from_secs(3),
            poll_interval: Duration::from_millis(250),
        }
    }
}

impl ScraperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_chrome_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_executable = Some(path.into());
        self
    }

    pub fn with_total(mut self, total: Option<usize>) -> Self {
        self.total = total;
        self
    }

    pub fn with_max_scrolls(mut self, max_scrolls: usize) -> Self {
        self.max_scrolls = max_scrolls;
        self
    }

    pub fn with_navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    pub fn with_detail_timeout(mut self, timeout: Duration) -> Self {
        self.detail_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// 全ての待機を同じ値にそろえる（テスト・高速回線向け）
    pub fn with_uniform_waits(mut self, wait: Duration) -> Self {
        self.page_settle = wait;
        self.search_timeout = wait;
        self.scroll_settle = wait;
        self.detail_timeout = wait;
        self.detail_settle = wait;
        self.field_timeout = wait;
        self
    }

    /// 取得件数の上限（無制限なら usize::MAX）
    pub fn listing_limit(&self) -> usize {
        self.total.unwrap_or(usize::MAX)
    }

    /// 設定値、なければ環境変数から Chrome 実行ファイルを決定
    pub fn resolve_chrome_executable(&self) -> Option<PathBuf> {
        self.chrome_executable.clone().or_else(|| {
            std::env::var("CHROME_PATH")
                .or_else(|_| std::env::var("CHROMIUM_PATH"))
                .ok()
                .map(PathBuf::from)
        })
    }
}
