pub mod cli;
pub mod collector;
pub mod config;
pub mod models;
pub mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use self::cli::Cli;
use self::collector::Collector;
use self::models::CollectConfig;
use self::report::ReportWriter;

pub fn run() -> Result<()> {
    let _cli = Cli::parse();
    let config = config::stripe_migration_config();

    log::info!("🔍 Starting file collection...");

    let output_path = collect_to_file(&config)?;

    log::info!("🎉 File collection complete!");
    log::info!("   All contents saved to: {}", output_path.display());
    Ok(())
}

/// Writes the full report for `config`, truncating any previous run's output.
/// Failure to create the report file is the one fatal error; per-file
/// failures are recorded inside the report instead.
pub fn collect_to_file(config: &CollectConfig) -> Result<PathBuf> {
    let output_path = config.output_path();

    let file = File::create(&output_path).with_context(|| {
        format!(
            "Failed to create report file at {}",
            output_path.display()
        )
    })?;

    let mut report = ReportWriter::new(BufWriter::new(file));
    Collector::new(config).collect(&mut report)?;
    report.flush()?;

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn second_run_overwrites_instead_of_appending() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();
        let config = CollectConfig {
            root: dir.path().to_path_buf(),
            output_name: "report.txt".to_string(),
            files: vec!["a.txt".to_string()],
        };

        let first = collect_to_file(&config).unwrap();
        let first_contents = fs::read_to_string(&first).unwrap();

        let second = collect_to_file(&config).unwrap();
        let second_contents = fs::read_to_string(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_contents, second_contents);
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempdir().unwrap();
        let config = CollectConfig {
            root: dir.path().join("no-such-dir"),
            output_name: "report.txt".to_string(),
            files: Vec::new(),
        };

        let err = collect_to_file(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to create report file"));
    }

    #[test]
    fn report_lands_at_derived_path() {
        let dir = tempdir().unwrap();
        let config = CollectConfig {
            root: dir.path().to_path_buf(),
            output_name: "report.txt".to_string(),
            files: vec!["nope.txt".to_string()],
        };

        let path = collect_to_file(&config).unwrap();
        assert_eq!(path, dir.path().join("report.txt"));
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("=== Stripe Migration Report ===\n\n"));
        assert!(contents.contains("[FILE NOT FOUND]"));
    }
}
