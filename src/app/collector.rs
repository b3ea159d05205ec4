use crate::app::models::{CollectConfig, Section, SectionBody};
use crate::app::report::ReportWriter;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Runs the single sequential pass over the manifest, streaming one section
/// per listed path to the report in list order.
pub struct Collector<'a> {
    config: &'a CollectConfig,
}

impl<'a> Collector<'a> {
    pub fn new(config: &'a CollectConfig) -> Self {
        Self { config }
    }

    pub fn collect<W: Write>(&self, report: &mut ReportWriter<W>) -> io::Result<()> {
        report.write_title()?;

        for relative in &self.config.files {
            let section = collect_file(&self.config.root, relative);
            report.write_section(&section)?;

            // The console line follows the existence check only: a file that
            // existed but failed to read is still reported as added, and the
            // error is visible in the report body instead.
            match section.body {
                SectionBody::NotFound => log::warn!("⚠️ Skipped (not found): {}", relative),
                _ => log::info!("✅ Added: {}", relative),
            }
        }

        Ok(())
    }
}

/// Resolves one relative path and turns whatever happens into a section body.
/// The input handle is scoped to this call; failures become values rather
/// than errors.
fn collect_file(root: &Path, relative: &str) -> Section {
    let full_path = root.join(relative);

    let body = if full_path.exists() {
        match fs::read_to_string(&full_path) {
            Ok(content) => SectionBody::Content(content),
            Err(err) => SectionBody::ReadError(err.to_string()),
        }
    } else {
        SectionBody::NotFound
    };

    Section {
        relative_path: relative.to_string(),
        body,
    }
}
