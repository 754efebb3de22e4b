//! Summarize a UTF-8 text file in one paragraph.

use prompt_relay::services::task::Task;

fn main() -> anyhow::Result<()> {
    prompt_relay::cli::main(Task::Summary)
}
