//! Far Away - packing list, disclosure panels and step wizard
//!
//! This is the binary entry point. All logic lives in the library.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use faraway_app::config::{config_path, init_config_dir, load_settings, resolve_project_path};
use faraway_app::AppState;

/// Far Away - drive the trip planner state machines from stdin
#[derive(Parser, Debug)]
#[command(name = "faraway")]
#[command(about = "Packing list, disclosure panels and step wizard over NDJSON", long_about = None)]
struct Args {
    /// Project directory holding .faraway/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Write a default .faraway/config.toml and exit
    #[arg(long)]
    init: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_path = resolve_project_path(args.path)?;

    if args.init {
        init_config_dir(&base_path)?;
        eprintln!("Config written to {}", config_path(&base_path).display());
        return Ok(());
    }

    faraway_core::logging::init()?;

    let settings = load_settings(&base_path);
    let mut state = AppState::from_settings(&settings)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    far_away::run_headless(&mut state, stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
