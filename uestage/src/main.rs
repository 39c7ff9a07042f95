use anyhow::Result;
use clap::Parser;

mod args;
mod ops;

use args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = std::str::FromStr::from_str(&cli.log_level).unwrap_or(log::LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Resolve {
            platform,
            target_type,
            engine_dir,
            format,
        } => ops::run_resolve(platform, target_type, engine_dir, format),

        Commands::Check {
            platform,
            target_type,
            engine_dir,
        } => ops::run_check(platform, target_type, engine_dir),

        Commands::Modules {
            platform,
            target_type,
            engine_dir,
        } => ops::run_modules(platform, target_type, engine_dir),

        Commands::Describe { path } => ops::run_describe(&path),
    }
}
