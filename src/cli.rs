//! Defines command-line interface options using `clap` for the enrollment statistics application.

use clap::{Parser, ValueEnum};

use crate::report::DEFAULT_THRESHOLD;

/// A CLI tool for high-school enrollment statistics
#[derive(Parser, Debug)]
#[command(
    version,
    name = "enrollment-stats",
    about = "Descriptive statistics over ten years of high-school grade enrollment"
)]
pub struct Args {
    /// School name or school code. If not set, prompts until a valid school is entered.
    #[arg(short, long)]
    pub school: Option<String>,

    /// Report the median of all single-grade enrollments strictly above this value
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, value_parser = parse_threshold)]
    pub threshold: f64,

    /// Output format for the reports
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List all schools with their codes and exit
    #[arg(long)]
    pub list_schools: bool,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("Invalid threshold '{s}': expected a finite number")),
    }
}
