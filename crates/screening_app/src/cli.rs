//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Resume screening: intake, batch processing and export from the terminal.
#[derive(Parser, Debug)]
#[command(name = "screening")]
#[command(version)]
#[command(about = "Screen a batch of resumes and export the results", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (RON). Defaults to ./screening.ron when present.
    #[arg(long, global = true, env = "SCREENING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the export service.
    #[arg(long, global = true, env = "SCREENING_SERVER")]
    pub server: Option<String>,

    /// Directory exported spreadsheets are saved to.
    #[arg(long, global = true)]
    pub download_dir: Option<PathBuf>,

    /// Also write logs to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Screen resume files (PDF, DOC, DOCX); other files are skipped
    Process(ProcessArgs),

    /// Estimate savings against manual screening
    Roi(RoiArgs),

    /// Show or change the persisted color theme
    Theme(ThemeArgs),
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Files to screen
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Show the full record of one candidate (by id)
    #[arg(long)]
    pub select: Option<usize>,

    /// Download the spreadsheet export after processing
    #[arg(long)]
    pub export: bool,

    /// Override the simulated processing delay, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

#[derive(Args, Debug)]
pub struct RoiArgs {
    /// Resumes screened per month
    #[arg(long, default_value_t = 1000)]
    pub monthly_resumes: u32,

    /// Minutes a person spends per resume
    #[arg(long, default_value_t = 15)]
    pub minutes_per_resume: u32,

    /// Hourly cost of that person
    #[arg(long, default_value_t = 75)]
    pub hourly_rate: u32,
}

#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[arg(value_enum, default_value_t = ThemeAction::Show)]
    pub action: ThemeAction,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Light,
    Dark,
}
