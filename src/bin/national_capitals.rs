//! Look up a country's capital city.

use prompt_relay::services::task::Task;

fn main() -> anyhow::Result<()> {
    prompt_relay::cli::main(Task::Capital)
}
