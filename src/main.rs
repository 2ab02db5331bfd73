use anyhow::{Context, Result};
use arkham_cards::{build_and_write, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) convert ──────────────────────────────────────────────────
    let config = Config::default();
    let table = build_and_write(&config).with_context(|| {
        format!(
            "converting {} to {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    info!(rows = table.len(), "all done");
    Ok(())
}
