use std::path::PathBuf;

use clap::Parser;

/// Generate passwords from selected character classes.
///
/// Run without options for the interactive menu.
#[derive(Debug, Default, Parser)]
#[command(name = "passgen", version, about)]
pub struct Args {
    /// Characters per password (default: saved setting)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Include uppercase letters (A-Z)
    #[arg(short = 'U', long)]
    pub upper: bool,

    /// Include lowercase letters (a-z)
    #[arg(short = 'L', long)]
    pub lower: bool,

    /// Include digits (0-9)
    #[arg(short = 'D', long)]
    pub digits: bool,

    /// Include symbols
    #[arg(short = 'S', long)]
    pub symbols: bool,

    /// Include all four character classes
    #[arg(short, long)]
    pub all: bool,

    /// Custom symbol set, replacing the default one
    #[arg(long, value_name = "CHARS")]
    pub special: Option<String>,

    /// Copy to clipboard instead of printing
    #[arg(short, long)]
    pub board: bool,

    /// Print passwords only, no strength line or notices
    #[arg(short, long)]
    pub quiet: bool,

    /// Save the effective length, classes and symbol set as defaults
    #[arg(long)]
    pub save: bool,

    /// Print history, newest first, and exit
    #[arg(long, conflicts_with = "clear_history")]
    pub history: bool,

    /// Clear history and exit
    #[arg(long)]
    pub clear_history: bool,

    /// Set how many passwords history keeps
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,

    /// Preference file
    #[arg(short, long, env = "PASSGEN_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// True when any option asks for CLI behavior. `--config` alone does not.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.any_class()
            || self.special.is_some()
            || self.board
            || self.quiet
            || self.save
            || self.history
            || self.clear_history
            || self.history_limit.is_some()
    }

    pub fn any_class(&self) -> bool {
        self.upper || self.lower || self.digits || self.symbols || self.all
    }
}
