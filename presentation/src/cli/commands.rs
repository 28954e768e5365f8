//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for evaluation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with classification and box sketch
    Full,
    /// Only the verdict line
    Verdict,
    /// JSON report
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(OutputFormat::Full),
            "verdict" => Ok(OutputFormat::Verdict),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// CLI arguments for euler-brick
#[derive(Parser, Debug)]
#[command(name = "euler-brick")]
#[command(author, version, about = "Check whether two Pythagorean triples fit an Euler brick")]
#[command(long_about = r#"
euler-brick reads two Pythagorean triples, each describing one face of a
rectangular box (two edges plus the face diagonal), and checks whether the
faces can sit on the same box: they must share exactly one edge, and that
edge must be a leg — never the diagonal — in both.

Triples can be written as 3,4,5 or (3,4,5) or [3,4,5] or 3 4 5.

By default the diagonal of the third face is not verified; pass --strict
to require it to be an integer as well.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./eulerbrick.toml   Project-level config
3. ~/.config/euler-brick/config.toml   Global config

Example:
  euler-brick "44,117,125" "117,240,267"
  euler-brick --strict "(6, 8, 10)" "[8, 15, 17]"
  euler-brick --interactive
"#)]
pub struct Cli {
    /// The first triple (not required in interactive mode)
    pub first: Option<String>,

    /// The second triple (not required in interactive mode)
    pub second: Option<String>,

    /// Start interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Also require the third face diagonal to be an integer
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
