use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scamlens",
    version,
    about = "Rule-based scam risk analysis for job postings"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Analyze(AnalyzeCommand),
    Batch(BatchCommand),
    Serve(ServeCommand),
}

/// Analyze a single posting from a file, stdin, or an inline argument.
#[derive(Args)]
pub struct AnalyzeCommand {
    /// File containing the posting text, or `-` to read stdin
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    pub path: Option<PathBuf>,

    /// Posting text passed inline instead of a file
    #[arg(long)]
    pub text: Option<String>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

/// Analyze every `*.txt` posting under a directory.
#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

/// Run the HTTP analysis endpoint.
#[derive(Args)]
pub struct ServeCommand {
    /// Bind address, e.g. 127.0.0.1:3000 (overrides config)
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Text,
}
