use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Compact stderr logging. `RUST_LOG` wins over the configured level.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|err| {
            eprintln!("invalid log level '{default_level}': {err}; using warn");
            EnvFilter::new("warn")
        });

    let terminal_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(terminal_layer)
        .try_init()
    {
        eprintln!("logging initialization skipped: {err}");
    }
}
