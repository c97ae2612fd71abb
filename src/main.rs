use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use playtab::core::config::{self, CliOverrides};
use playtab::core::tabs::TabKind;
use playtab::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "playtab", about = "Tabbed, paginated terminal front-end for a music player")]
struct Args {
    /// Config file to use instead of ~/.playtab/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tab to start on
    #[arg(short, long, value_enum)]
    tab: Option<TabKind>,

    /// Show layout numbers in the status line
    #[arg(long)]
    stats: bool,

    /// Where to write the log
    #[arg(long, default_value = "playtab.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    log::info!("Playtab starting up");

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = match file_config {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            eprintln!("playtab: {e}");
            return ExitCode::FAILURE;
        }
    };

    let overrides = CliOverrides {
        initial_tab: args.tab,
        show_layout_stats: args.stats,
    };
    let resolved = config::resolve(&file_config, &overrides);

    match tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("playtab: {e}");
            ExitCode::FAILURE
        }
    }
}
