mod config;
mod listing;
mod render;

pub use config::handle_config;
pub use listing::{handle_formats, handle_timezones};
pub use render::{RenderArgs, handle_block, handle_preview, handle_render, handle_shortcode};

use crate::console::VerbosityLevel;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Increase verbosity (-v verbose, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode - only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", global = true)]
    pub quiet: bool,

    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a greeting and/or date fragment
    Render(RenderArgs),
    /// Expand [time_greeting] shortcodes in text (reads stdin without TEXT)
    Shortcode {
        text: Option<String>,
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },
    /// Render the block from a JSON attribute object
    Block {
        attributes: String,
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },
    /// Show the current greeting and date as the settings page would
    Preview {
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,
    },
    /// List timezone identifiers
    Timezones {
        /// Only show identifiers containing this text
        #[arg(long)]
        filter: Option<String>,
    },
    /// List the preset date formats
    Formats,
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    Show,
    Set { key: String, value: String },
    /// Revert the greeting settings to their defaults
    Reset,
}

/// Accepts RFC 3339, e.g. `2024-01-15T14:30:00-06:00`.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {}", e))
}

impl Cli {
    pub fn get_verbosity(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else {
            match self.verbose {
                0 => VerbosityLevel::Normal,
                1 => VerbosityLevel::Verbose,
                _ => VerbosityLevel::Debug,
            }
        }
    }

    pub fn get_effective_verbosity(&self, config_verbosity: VerbosityLevel) -> VerbosityLevel {
        if self.quiet || self.verbose > 0 {
            self.get_verbosity()
        } else {
            config_verbosity
        }
    }
}
