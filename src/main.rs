use std::io::stdout;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Markers own stdout, logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() {
    init_tracing();

    if let Err(err) = callbox::demo::run(stdout().lock()) {
        tracing::error!(%err, "Demonstration output failed");
    }
}
