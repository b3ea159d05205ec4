use std::path::PathBuf;

/// The fixed inputs for one collection run: the root directory, the name of
/// the report file written under it, and the ordered list of relative paths
/// to gather. List order is report order.
#[derive(Debug, Clone)]
pub struct CollectConfig {
    pub root: PathBuf,
    pub output_name: String,
    pub files: Vec<String>,
}

impl CollectConfig {
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_name)
    }
}

/// One unit of the report: a relative path plus whatever was found there.
#[derive(Debug)]
pub struct Section {
    pub relative_path: String,
    pub body: SectionBody,
}

/// Per-file outcome. Read failures are carried as values so that a bad file
/// never aborts the pass.
#[derive(Debug)]
pub enum SectionBody {
    /// File existed and was read as UTF-8 text.
    Content(String),
    /// Path did not exist; no read was attempted.
    NotFound,
    /// Path existed but opening, reading, or decoding failed.
    ReadError(String),
}
