//! Answer questions as Portuguese sonnets.

use prompt_relay::services::task::Task;

fn main() -> anyhow::Result<()> {
    prompt_relay::cli::main(Task::Sonnet)
}
