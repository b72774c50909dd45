use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use taglog::{kv, LogBridge};

fn main() -> Result<()> {
    init_tracing()?;

    let logger = taglog::from_env()?;
    tracing::info!(threshold = %logger.threshold(), "taglog demo starting");

    LogBridge::new(logger.clone()).install()?;

    logger.info("root logger ready");
    taglog::infof!(logger, "threshold is {}", logger.threshold());

    let request = logger.with(kv!["request_id", 42, "path", "/health"]);
    request.warn("slow upstream");
    request.errorw("upstream failed", kv!["status", 502]);

    // Malformed pairs are reported and dropped
    let _ = logger.with(kv![7, "not a key", "dangling"]);

    log::warn!("routed through the log facade");

    Ok(())
}

/// Installs the subscriber without claiming the global `log` logger,
/// which belongs to the bridge.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
