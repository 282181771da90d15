use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gmaps_scraper::terms::DEFAULT_INPUT_FILE;
use gmaps_scraper::{resolve_search_terms, ScrapeRequest, ScraperConfig, ScraperService};
use tower::Service;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "gmaps-scraper")]
#[command(about = "Google Maps の検索結果を XLSX / CSV に出力する")]
struct Cli {
    /// 検索語（指定時は入力ファイルを使わない）
    #[arg(short, long)]
    search: Option<String>,

    /// 検索語ごとの最大取得件数（省略時は無制限）
    #[arg(short, long)]
    total: Option<usize>,

    /// 検索語ファイル（1行1検索語）
    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// 出力ディレクトリ
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// ブラウザを表示せずに実行
    #[arg(long, env = "GMAPS_HEADLESS")]
    headless: bool,

    /// スクロール回数の上限
    #[arg(long)]
    max_scrolls: Option<usize>,

    /// 失敗時のスクリーンショットとChromeログを有効化
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let terms = resolve_search_terms(cli.search.as_deref(), &cli.input)?;

    let mut config = ScraperConfig::new()
        .with_output_dir(&cli.output)
        .with_headless(cli.headless)
        .with_debug(cli.debug)
        .with_total(cli.total);
    if let Some(max_scrolls) = cli.max_scrolls {
        config = config.with_max_scrolls(max_scrolls);
    }

    let mut service = ScraperService::new();
    let result = service
        .call(ScrapeRequest::new(terms).with_config(config))
        .await
        .context("スクレイピングに失敗しました")?;

    for export in &result.exports {
        info!(
            "{}: {} records -> {:?}, {:?}",
            export.term, export.record_count, export.xlsx_path, export.csv_path
        );
    }

    Ok(())
}
