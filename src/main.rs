use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use comments_search::core::config;
use comments_search::tui;

#[derive(Parser)]
#[command(
    name = "comments-search",
    about = "Search and paginate comments from the terminal"
)]
struct Args {
    /// Comments API base URL (overrides config file and COMMENTS_API_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to comments-search.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("comments-search.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        config::FileConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("comments-search starting (base URL: {})", resolved.base_url);

    tui::run(resolved)
}
