mod app;

use anyhow::Result;

/// Console output is plain progress text, so log records are printed bare.
fn init_logging() {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    app::run()
}
