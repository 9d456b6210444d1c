use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber with a standard `fmt` layer.
///
/// Respects the `RUST_LOG` environment variable. Falls back to `info` when
/// `RUST_LOG` is not set.
///
/// Call this once, at the very start of `main`, before any tracing macro.
/// Library code in this workspace never installs a subscriber on its own.
pub fn init_tracing() {
    init_tracing_with("info");
}

/// Like [`init_tracing`], with `default_filter` used when `RUST_LOG` is unset
/// (e.g. `"entigen_core=trace,info"` to see every accepted column).
pub fn init_tracing_with(default_filter: &str) {
    init_tracing_to(default_filter, std::io::stdout);
}

/// Like [`init_tracing_with`], writing formatted events to `writer` instead
/// of stdout.
pub fn init_tracing_to<W>(default_filter: &str, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(writer)
        .init();
}
