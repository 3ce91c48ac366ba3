use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use talentboard::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "talentboard", about = "Browse opportunities for refugees from the terminal")]
struct Args {
    /// Base URL of the catalogue API (programs are fetched from <url>/programs)
    #[arg(short, long)]
    source: Option<String>,

    /// Read programs from a local JSON file instead of the API
    #[arg(short, long, conflicts_with = "source")]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to talentboard.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("talentboard.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::TalentboardConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            source_url: args.source,
            source_file: args.file,
        },
    );

    log::info!("Talentboard starting up with source: {:?}", resolved.source);

    talentboard::tui::run(resolved)
}
