use tracing::debug;

use super::client::ChatClient;
use super::task::Task;
use crate::error::Result;
use crate::message::Exchange;

/// One exchange, one reply. The reply is returned exactly as the model sent it.
pub async fn relay<C>(client: &C, task: Task, input: &str) -> Result<String>
where
    C: ChatClient + ?Sized,
{
    let user = task.user_message(input).await?;
    let exchange = Exchange::new(task.system_prompt(), user);
    let options = task.options();

    debug!(?task, model = options.model, "relaying prompt");
    client.complete(&exchange, &options).await
}
