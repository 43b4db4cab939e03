use clap::Parser;
use copang::core::config::{self, CliOverrides, CopangConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "copang", about = "Shop navigation demo for the terminal")]
struct Args {
    /// Disable slide transitions between screens
    #[arg(long)]
    no_animations: bool,

    /// Transition length in milliseconds
    #[arg(long, value_name = "MS")]
    transition_ms: Option<u64>,

    /// How long the splash screen stays up, in milliseconds
    #[arg(long, value_name = "MS")]
    splash_delay_ms: Option<u64>,

    /// Log file path
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        CliOverrides {
            no_animations: args.no_animations,
            transition_ms: args.transition_ms,
            splash_delay_ms: args.splash_delay_ms,
            log_file: args.log_file,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli: CliOverrides = Args::parse().into();

    // The log file location is itself configurable, so errors are held
    // until the logger exists
    let (file_config, load_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (CopangConfig::default(), Some(e)),
    };
    let config = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if let Some(e) = load_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Copang starting up with {:?}", config);

    copang::tui::run(config)
}
