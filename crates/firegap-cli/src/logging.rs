use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins; otherwise `-v` selects `debug`, `-vv` and more `trace`,
/// and the default is `warn` so stdout stays clean JSON.
pub fn init(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
