/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

/// awsops — run a small AWS script with the standard flag set.
#[derive(Debug, Parser)]
#[command(
    name = "awsops",
    about = "Skeleton driver for small AWS command-line scripts",
    version
)]
pub struct Cli {
    /// AWS profile to use (default: environment/default profile).
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// AWS region (default: profile/environment region).
    #[arg(long, value_name = "NAME")]
    pub region: Option<String>,

    /// Output format for the result records.
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    pub output: OutputFormat,

    /// Preview actions without making changes.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(long)]
    pub verbose: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Aligned table with a "Results" heading (human-readable).
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}
