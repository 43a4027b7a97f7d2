//! Command-line arguments

use std::path::PathBuf;

use boardcount_domain::{ActivationPolicy, FilterMode, SlotNumber, SlotStatus};
use clap::{Args, Parser, Subcommand};

/// Dining-hall boarder roster
#[derive(Parser, Debug)]
#[command(name = "boardcount")]
#[command(about = "Keep the boarder roster and print the meal report", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (JSON or TOML)
    #[arg(short, long, env = "BOARDCOUNT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// How `active`/`inactive` commands treat their slot numbers
    #[arg(short, long, global = true)]
    pub policy: Option<ActivationPolicy>,

    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List slots with their names and statuses
    Show {
        /// all, active or inactive
        #[arg(short, long, default_value = "all")]
        filter: FilterMode,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Flip slots between active and inactive
    Toggle {
        #[arg(required = true)]
        numbers: Vec<SlotNumber>,

        /// Set this status instead of flipping
        #[arg(long, value_name = "STATUS")]
        to: Option<SlotStatus>,
    },

    /// Name a slot; with no name, clear it
    Name {
        number: SlotNumber,

        name: Vec<String>,
    },

    /// Append an active slot for a new boarder
    Add {
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Remove every slot with this exact name
    Remove {
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Show or edit the report header fields
    Meta(MetaArgs),

    /// Run one free-text command, e.g. `active 3 7 12` or `add john smith`
    #[command(name = "command", alias = "cmd")]
    Run {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Read commands line by line from stdin until end of input
    Listen,

    /// Print the paginated meal report
    Report {
        /// Date printed in the header (defaults to today)
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct MetaArgs {
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub manager: Option<String>,

    #[arg(long)]
    pub net_meal: Option<String>,

    #[arg(long)]
    pub market: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}
