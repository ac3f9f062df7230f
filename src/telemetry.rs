use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;

/// Pretty stdout plus an hourly rolling file under `./logs`; JSON stdout as well outside debug mode.
/// `RUST_LOG` overrides the default level.
pub fn get_subscriber(debug: bool) -> (impl tracing::Subscriber + Send + Sync, WorkerGuard) {
    let default_level = if debug { "trace" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let json_log = (!debug).then(|| tracing_subscriber::fmt::layer().json());

    let file_appender = tracing_appender::rolling::hourly("./logs", "reservation-backend.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking);

    let stdout_log = tracing_subscriber::fmt::layer().pretty();
    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(stdout_log)
        .with(json_log)
        .with(file_log);

    (subscriber, guard)
}

/// The returned guard flushes the file writer when dropped, so keep it alive for the whole run.
pub fn init_subscriber(debug: bool) -> Result<WorkerGuard, tracing::subscriber::SetGlobalDefaultError> {
    let (subscriber, guard) = get_subscriber(debug);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}
