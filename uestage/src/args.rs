use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uerules::{TargetPlatform, TargetType};

#[derive(Parser)]
#[command(name = "uestage")]
#[command(about = "Evaluate build rules and stage browser runtime dependencies", long_about = None)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the runtime files staged for the browser subprocess
    Resolve {
        /// Target platform (Win64, Win32, Mac, Linux, Android, IOS)
        #[arg(long)]
        platform: TargetPlatform,

        /// Target type (Game, Editor, Client, Server, Program)
        #[arg(long, default_value = "Game")]
        target_type: TargetType,

        /// Engine root directory (auto-detected if not provided)
        #[arg(long)]
        engine_dir: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Verify every staged runtime file exists on disk
    Check {
        /// Target platform (Win64, Win32, Mac, Linux, Android, IOS)
        #[arg(long)]
        platform: TargetPlatform,

        /// Target type (Game, Editor, Client, Server, Program)
        #[arg(long, default_value = "Game")]
        target_type: TargetType,

        /// Engine root directory (auto-detected if not provided)
        #[arg(long)]
        engine_dir: Option<PathBuf>,
    },

    /// Print the browser module's evaluated build rules
    Modules {
        /// Target platform (Win64, Win32, Mac, Linux, Android, IOS)
        #[arg(long)]
        platform: TargetPlatform,

        /// Target type (Game, Editor, Client, Server, Program)
        #[arg(long, default_value = "Game")]
        target_type: TargetType,

        /// Engine root directory (auto-detected if not provided)
        #[arg(long)]
        engine_dir: Option<PathBuf>,
    },

    /// Summarize a .uproject or .uplugin descriptor
    Describe {
        /// Path to the descriptor file
        path: PathBuf,
    },
}
