use tracing_subscriber::EnvFilter;

/// Install the stderr tracing subscriber.
///
/// WARN by default, DEBUG with `--verbose`. `RUST_LOG` overrides both:
///
/// ```sh
/// RUST_LOG=uu_env=trace uu-env --list
/// ```
pub fn init(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // A subscriber may already be set when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
