// src/main.rs

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;

use seoinsight::config::{Cli, Command};
use seoinsight::domain::SeoSnapshot;
use seoinsight::error::Result;
use seoinsight::insight::derive_insights;
use seoinsight::report::render_report;
use seoinsight::service::SiteAnalyzer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Scan { url, output } => scan(&url, &output).await?,
        Command::Report { snapshot, output } => report(&snapshot, &output)?,
        Command::Audit { url, output } => audit(&url, &output).await?,
    }
    Ok(())
}

async fn scan(url: &str, output: &Path) -> Result<()> {
    let analyzer = SiteAnalyzer::new()?;
    let snapshot = analyzer.analyze(url).await?;

    let json = serde_json::to_string_pretty(&snapshot)
        .context("Failed to serialize snapshot")?;
    fs::write(output, json)?;

    tracing::info!("Snapshot saved to {}", output.display());
    Ok(())
}

fn report(snapshot_path: &Path, output: &Path) -> Result<()> {
    let json = fs::read_to_string(snapshot_path)?;
    let snapshot = SeoSnapshot::from_json(&json)?;

    write_report(&snapshot, output)
}

async fn audit(url: &str, output: &Path) -> Result<()> {
    let analyzer = SiteAnalyzer::new()?;
    let snapshot = analyzer.analyze(url).await?;

    write_report(&snapshot, output)
}

fn write_report(snapshot: &SeoSnapshot, output: &Path) -> Result<()> {
    let insights = derive_insights(snapshot);
    let report = render_report(&insights);

    fs::write(output, &report.html)?;
    tracing::info!(
        "Report with {} insights saved to {} ({} empty categories omitted)",
        insights.len(),
        output.display(),
        report.empty_categories
    );
    Ok(())
}
