use anyhow::Result;
use clap::Parser;
use proxy_harvest::{
    FetcherConfig, LiveOutcome, MubengChecker, Pipeline, PipelineConfig, ProxyFetcher,
    DEFAULT_CHECKER_PROGRAM, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_DIR, DEFAULT_SOCKS4_URL,
    DEFAULT_SOCKS5_URL,
};
use std::path::PathBuf;
use std::time::Duration;

/// Fetch public SOCKS proxy lists, normalize them and keep the live ones
#[derive(Parser)]
#[command(name = "proxy-harvest")]
#[command(about = "Fetch public SOCKS proxy lists, normalize them and keep the live ones")]
struct Cli {
    /// Directory for raw, filtered and live lists
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Source of the raw SOCKS4 list
    #[arg(long, default_value = DEFAULT_SOCKS4_URL)]
    socks4_url: String,

    /// Source of the raw SOCKS5 list
    #[arg(long, default_value = DEFAULT_SOCKS5_URL)]
    socks5_url: String,

    /// Concurrency passed to the liveness checker
    #[arg(short = 'c', long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Liveness checker executable
    #[arg(long, default_value = DEFAULT_CHECKER_PROGRAM)]
    checker: String,

    /// Timeout in seconds for list downloads
    #[arg(long)]
    timeout: Option<u64>,

    /// User agent sent with list downloads
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = PipelineConfig::new()
        .with_output_dir(cli.output_dir)
        .with_socks4_url(cli.socks4_url)
        .with_socks5_url(cli.socks5_url)
        .with_concurrency(cli.concurrency);

    let mut fetcher_config = FetcherConfig::new();
    if let Some(timeout) = cli.timeout {
        fetcher_config = fetcher_config.with_timeout(Duration::from_secs(timeout));
    }
    if let Some(user_agent) = cli.user_agent {
        fetcher_config = fetcher_config.with_user_agent(user_agent);
    }

    let pipeline = Pipeline::new(
        config,
        ProxyFetcher::with_config(fetcher_config)?,
        MubengChecker::with_program(cli.checker),
    );

    let report = pipeline.run().await?;

    for entry in &report.protocols {
        match &entry.live {
            LiveOutcome::Saved(path) => log::info!(
                "{}: {} of {} entries kept, live list at {}",
                entry.protocol,
                entry.filter.kept,
                entry.filter.total_lines,
                path.display()
            ),
            LiveOutcome::Failed(_) => log::warn!(
                "{}: {} of {} entries kept, no live list produced",
                entry.protocol,
                entry.filter.kept,
                entry.filter.total_lines
            ),
        }
    }

    if report.has_check_failures() {
        log::warn!("Liveness check failed for some protocols, see errors above");
    }

    Ok(())
}
