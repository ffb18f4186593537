use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_SNAPSHOT_PATH: &str = "seo_data.json";
pub const DEFAULT_REPORT_PATH: &str = "seo_insights_report.html";

#[derive(Debug, Parser)]
#[command(name = "seoinsight", about = "On-page SEO signal extraction and insight reporting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one page and write its SEO snapshot as JSON
    Scan {
        /// Page URL to analyze
        url: String,
        /// Snapshot output path
        #[arg(short, long, default_value = DEFAULT_SNAPSHOT_PATH)]
        output: PathBuf,
    },
    /// Render an HTML insight report from a snapshot file
    Report {
        /// Snapshot JSON produced by `scan`
        snapshot: PathBuf,
        /// Report output path
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },
    /// Scan a page and render its report in one step
    Audit {
        /// Page URL to analyze
        url: String,
        /// Report output path
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },
}
