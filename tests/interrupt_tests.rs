#![cfg(unix)]

use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::process::Command;

#[tokio::test]
async fn test_sigint_at_prompt_exits_process() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_national-capitals"))
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .env_remove("OPENAI_API_KEY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .unwrap();

    // Held open so the process stays parked on its stdin read.
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    let mut seen = Vec::new();
    let mut chunk = [0u8; 256];
    tokio::time::timeout(Duration::from_secs(10), async {
        while !String::from_utf8_lossy(&seen).contains("Country: ") {
            let n = stdout.read(&mut chunk).await.unwrap();
            assert!(n > 0, "stdout closed before the prompt");
            seen.extend_from_slice(&chunk[..n]);
        }
    })
    .await
    .expect("prompt never appeared");

    let pid = child.id().unwrap().to_string();
    let killed = std::process::Command::new("kill")
        .args(["-INT", &pid])
        .status()
        .unwrap();
    assert!(killed.success());

    let status = tokio::time::timeout(Duration::from_secs(5), child.wait())
        .await
        .expect("process still running after SIGINT")
        .unwrap();
    assert!(status.success());

    stdout.read_to_end(&mut seen).await.unwrap();
    assert!(String::from_utf8_lossy(&seen).ends_with("Interrupted. Goodbye!\n"));
}
