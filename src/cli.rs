use clap::{Args, Parser, Subcommand};
use reelname::config::RenameConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelname")]
#[command(
    author,
    version,
    about = "Rename movie and TV episode files using canonical IMDb titles"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up media files and rename them
    Rename {
        /// Files or directories to process
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        options: RenameArgs,
    },

    /// Show the signals extracted from file paths (no network access)
    Parse {
        /// Paths to parse
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Probe a media file and display its properties
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        #[arg(value_name = "CONFIG")]
        path: Option<PathBuf>,
    },
}

/// Command-line overrides for the `[rename]` config section.
#[derive(Args, Debug, Default)]
pub struct RenameArgs {
    /// Use only advanced search
    #[arg(short = 'a', long, conflicts_with = "basic_search")]
    pub advanced_search: bool,

    /// Use only basic search
    #[arg(short = 'b', long)]
    pub basic_search: bool,

    /// Show what would be renamed without renaming
    #[arg(short, long)]
    pub simulate: bool,

    /// Add this number to every episode number (may be negative)
    #[arg(short, long, allow_negative_numbers = true)]
    pub offset: Option<i64>,

    /// Never prompt; ambiguous results are skipped
    #[arg(long)]
    pub no_interactive: bool,
}

impl RenameArgs {
    /// Apply the flags on top of the loaded config.
    pub fn apply(&self, config: &mut RenameConfig) {
        if self.advanced_search {
            config.advanced_search = true;
            config.basic_search = false;
        }
        if self.basic_search {
            config.advanced_search = false;
            config.basic_search = true;
        }
        if self.simulate {
            config.simulate = true;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        if self.no_interactive {
            config.interactive = false;
        }
    }
}
