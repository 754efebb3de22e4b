// src/repl.rs
use std::future::Future;
use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::services::client::ChatClient;
use crate::services::relay::relay;
use crate::services::task::Task;

/// Read-relay-print until an exit word, end of input, or `shutdown` resolves.
pub async fn run<C, R, W, S>(
    client: &C,
    task: Task,
    input: R,
    output: &mut W,
    shutdown: S,
) -> io::Result<()>
where
    C: ChatClient + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut lines = input.lines();

    output.write_all(task.banner().as_bytes()).await?;

    loop {
        output.write_all(task.prompt_label().as_bytes()).await?;
        output.flush().await?;

        let next = tokio::select! {
            _ = &mut shutdown => return interrupted(task, output).await,
            next = lines.next_line() => next,
        };

        let line = match next {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("input exhausted");
                break;
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(error = %e, "discarding unreadable input line");
                output
                    .write_all(b"Error: input is not valid UTF-8\n\n")
                    .await?;
                continue;
            }
            Err(e) => return Err(e),
        };

        let line = line.trim();
        if Task::is_exit(line) {
            break;
        }

        if let Some(notice) = task.working_notice() {
            output.write_all(notice.as_bytes()).await?;
            output.flush().await?;
        }

        let outcome = tokio::select! {
            _ = &mut shutdown => return interrupted(task, output).await,
            outcome = relay(client, task, line) => outcome,
        };

        if let Err(e) = &outcome {
            warn!(error = %e, local = e.is_local(), "relay failed");
        }
        output.write_all(task.render(&outcome).as_bytes()).await?;
    }

    output.write_all(task.farewell().as_bytes()).await?;
    output.flush().await
}

async fn interrupted<W: AsyncWrite + Unpin>(task: Task, output: &mut W) -> io::Result<()> {
    info!("interrupted");
    output.write_all(task.interrupted().as_bytes()).await?;
    output.flush().await
}
