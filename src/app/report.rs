use crate::app::models::{Section, SectionBody};
use std::io::{self, Write};

pub const REPORT_TITLE: &str = "=== Stripe Migration Report ===";

/// Serializes the report onto a single output handle. The layout is fixed:
/// a title block up front, then one section per collected path, each bounded
/// by its header line above and a blank line below.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Written once, before any section.
    pub fn write_title(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}\n", REPORT_TITLE)
    }

    pub fn write_section(&mut self, section: &Section) -> io::Result<()> {
        match &section.body {
            SectionBody::Content(content) => {
                write!(self.out, "\n--- {} ---\n\n", section.relative_path)?;
                self.out.write_all(content.as_bytes())?;
                self.out.write_all(b"\n")
            }
            SectionBody::ReadError(message) => {
                write!(self.out, "\n--- {} ---\n\n", section.relative_path)?;
                write!(self.out, "[ERROR READING FILE]: {}\n\n", message)
            }
            SectionBody::NotFound => {
                write!(self.out, "\n--- {} ---\n", section.relative_path)?;
                write!(self.out, "[FILE NOT FOUND]\n\n")
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
