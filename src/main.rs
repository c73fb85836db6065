use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use modscout::services::checker;
use modscout::services::config::{self, AppConfig};
use modscout::services::report;

#[derive(Parser)]
#[command(name = "modscout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Identify local mod archives against the Modrinth and CurseForge catalogs")]
struct Cli {
    /// Directory containing the mod files to check
    #[arg(default_value = "mods")]
    directory: PathBuf,

    /// Timeout in seconds for each catalog request
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbose logging (repeat for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config = AppConfig::from_env()?.with_timeout(Duration::from_secs(cli.timeout));
    let (modrinth, curseforge) = checker::build_clients(&config)?;

    let outcome = checker::run(&modrinth, &curseforge, &cli.directory).await?;
    report::print(&outcome);

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
