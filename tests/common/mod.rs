#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use prompt_relay::error::{RelayError, Result};
use prompt_relay::message::{Exchange, ModelOptions};
use prompt_relay::services::client::ChatClient;

/// Hands out queued replies in order and records every exchange it receives.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String>>>,
    pub calls: Mutex<Vec<(Exchange, ModelOptions)>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, err: RelayError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_exchange(&self) -> Option<Exchange> {
        self.calls.lock().unwrap().last().map(|(e, _)| e.clone())
    }
}

#[async_trait]
impl ChatClient for ScriptedClient {
    async fn complete(&self, exchange: &Exchange, options: &ModelOptions) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((exchange.clone(), *options));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RelayError::Other("no scripted reply left".into())))
    }
}

/// Never answers.
pub struct StalledClient;

#[async_trait]
impl ChatClient for StalledClient {
    async fn complete(&self, _exchange: &Exchange, _options: &ModelOptions) -> Result<String> {
        std::future::pending().await
    }
}
