mod analyze;
mod cli;
mod config;
mod error;
mod report;
mod scan;
mod server;
mod types;

use crate::error::ScamlensError;
use crate::types::analysis::RiskLevel;
use clap::Parser;
use std::io::Read;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const ELEVATED: i32 = 1;
    pub const HIGH_RISK: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn level_exit_code(level: RiskLevel) -> i32 {
    match level {
        RiskLevel::Low => exit_code::SUCCESS,
        RiskLevel::Medium => exit_code::ELEVATED,
        RiskLevel::High => exit_code::HIGH_RISK,
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Text => report::OutputFormat::Text,
    }
}

fn read_posting(cmd: &cli::AnalyzeCommand) -> Result<String, ScamlensError> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }
    // clap guarantees path is present when --text is absent
    let path = cmd.path.as_deref().unwrap_or(Path::new("-"));
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    if !path.exists() {
        return Err(ScamlensError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn run() -> Result<i32, ScamlensError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let root = std::env::current_dir()?;
    let cfg = config::load_config(&root)?.unwrap_or_default();

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let text = read_posting(&cmd)?;
            if text.trim().is_empty() {
                return Err(ScamlensError::EmptyInput(
                    "posting text is empty".to_string(),
                ));
            }
            if text.trim().chars().count() < cfg.min_length() {
                eprintln!(
                    "warning: posting is shorter than {} characters; results may be unreliable",
                    cfg.min_length()
                );
            }

            let result = analyze::analyze(&text);
            let rendered = report::render(&result, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(level_exit_code(result.risk_level))
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.dir.exists() {
                return Err(ScamlensError::PathNotFound(cmd.dir.display().to_string()));
            }

            let entries = scan::analyze_postings(&cmd.dir)?;
            if entries.is_empty() {
                println!("batch: no .txt postings found in {}", cmd.dir.display());
                return Ok(exit_code::SUCCESS);
            }

            let rendered = report::render_batch(&entries, output_format(&cmd.format))?;
            println!("{rendered}");

            let highest = entries
                .iter()
                .map(|entry| entry.result.risk_level)
                .max()
                .unwrap_or(RiskLevel::Low);
            Ok(level_exit_code(highest))
        }
        cli::Commands::Serve(cmd) => {
            let bind = cmd.bind.unwrap_or_else(|| cfg.bind());
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::serve(&bind, cfg.min_length()))?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
