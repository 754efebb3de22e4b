use async_trait::async_trait;

use crate::error::Result;
use crate::message::{Exchange, ModelOptions};

/// Sends one exchange to a chat model and returns the reply text.
///
/// The relay only sees this trait, so tests can swap the HTTP client for a
/// scripted one.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, exchange: &Exchange, options: &ModelOptions) -> Result<String>;
}

