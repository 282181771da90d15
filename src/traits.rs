use async_trait::async_trait;

use crate::error::ScraperError;

/// 地図サービスのページ操作
///
/// 収集・抽出ロジックはこのトレイト越しにページを触る。
/// 実ブラウザ実装は [`crate::gmaps::GoogleMapsPage`]。
#[async_trait]
pub trait MapsPage: Send + Sync {
    /// リスティング（検索結果1件）へのハンドル
    type Listing: Send + Sync;

    /// 開始ページへ移動し、検索ボックスが使えるまで待つ
    async fn open(&self, url: &str) -> Result<(), ScraperError>;

    /// 検索ボックスをクリアして検索語を入力し、送信する
    async fn search(&self, term: &str) -> Result<(), ScraperError>;

    /// 先頭リスティングにホバーして遅延ロードを促す
    async fn prime_results(&self) -> Result<(), ScraperError>;

    /// 結果パネルをスクロール
    async fn scroll_results(&self) -> Result<(), ScraperError>;

    /// 現在表示されているリスティング数
    async fn count_listings(&self) -> Result<usize, ScraperError>;

    /// 現在表示されている全リスティング（表示順）
    async fn listings(&self) -> Result<Vec<Self::Listing>, ScraperError>;

    /// リスティングをクリックして詳細パネルを開く
    async fn open_listing(&self, listing: &Self::Listing) -> Result<(), ScraperError>;

    /// リスティングのアクセシブルラベル（店名）
    async fn listing_name(&self, listing: &Self::Listing) -> Result<String, ScraperError>;

    /// リスティングのリンク先URL
    async fn listing_href(&self, listing: &Self::Listing) -> Result<String, ScraperError>;

    /// 詳細パネルに今表示されている店名。パネルがなければ `None`（待たない）
    async fn detail_title(&self) -> Result<Option<String>, ScraperError>;

    /// セレクタに一致する要素のテキスト
    async fn text_content(&self, selector: &str) -> Result<String, ScraperError>;

    /// セレクタに一致する要素の属性値
    async fn attribute(&self, selector: &str, name: &str) -> Result<String, ScraperError>;

    async fn current_url(&self) -> Result<String, ScraperError>;

    /// デバッグ用スクリーンショット (PNG)
    async fn screenshot(&self) -> Result<Vec<u8>, ScraperError>;
}
