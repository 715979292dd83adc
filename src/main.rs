use clap::Parser;
use explainer::Strategy;
use explainer::core::config::{CliOverrides, ExplainerConfig, load_config, resolve};
use explainer::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "explainer", about = "Explain a concept at the difficulty you pick")]
struct Args {
    /// Explanation strategy to use
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Origin of the explanation service (remote strategy only)
    #[arg(long)]
    base_url: Option<String>,

    /// Seconds to wait for an explanation (0 waits forever)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Config file to read instead of ~/.explainer/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to explainer.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("explainer.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        ExplainerConfig::default()
    });
    let cli = CliOverrides {
        strategy: args.strategy,
        base_url: args.base_url,
        timeout_secs: args.timeout_secs,
    };
    let config = resolve(&file_config, &cli);

    log::info!(
        "Explainer starting up with strategy: {}",
        config.strategy.as_str()
    );

    tui::run(config)
}
