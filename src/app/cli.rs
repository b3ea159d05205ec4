use clap::Parser;

/// The root directory and file list are fixed at authoring time, so the
/// command takes no options. Parsing still rejects stray arguments and
/// provides the usual --help / --version surface.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Collect backend source files into a single Stripe migration report"
)]
pub struct Cli {}
