// src/cli.rs
use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repl;
use crate::services::openai::OpenAiClient;
use crate::services::task::Task;

/// Runs `task` on a runtime built here rather than by `#[tokio::main]`.
///
/// The stdin reader sits in a blocking read that cannot be cancelled, so after
/// an interrupt the runtime is shut down without waiting for it.
pub fn main(task: Task) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    let outcome = runtime.block_on(start(task));
    runtime.shutdown_background();
    outcome
}

pub async fn start(task: Task) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install tracing subscriber")?;

    let config = Config::from_env();
    tracing::debug!(?config, ?task, "starting");

    let client = OpenAiClient::new(&config).context("failed to initialize HTTP client")?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let shutdown = interrupt()?;

    repl::run(&client, task, stdin, &mut stdout, shutdown)
        .await
        .context("console I/O failed")
}

// Registered before the first prompt is printed, so an early Ctrl-C is not lost.
#[cfg(unix)]
fn interrupt() -> Result<impl std::future::Future<Output = ()>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt()).context("cannot listen for Ctrl-C")?;
    Ok(async move {
        sigint.recv().await;
    })
}

#[cfg(not(unix))]
fn interrupt() -> Result<impl std::future::Future<Output = ()>> {
    Ok(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    })
}
