//! 上限付きポーリング待機

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::time::sleep;

use crate::error::ScraperError;

/// `check` が `Some` を返すまで `interval` 間隔で繰り返す。
///
/// 少なくとも1回は評価する。`timeout` を過ぎたら `Ok(None)`。
/// `check` のエラーはそのまま返す。
pub async fn poll_until<T, F, Fut>(
    timeout: Duration,
    interval: Duration,
    mut check: F,
) -> Result<Option<T>, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, ScraperError>>,
{
    let start = Instant::now();

    loop {
        if let Some(value) = check().await? {
            return Ok(Some(value));
        }

        if start.elapsed() >= timeout {
            return Ok(None);
        }

        sleep(interval).await;
    }
}
