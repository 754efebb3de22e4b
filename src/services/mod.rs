// src/services/mod.rs
pub mod client;
pub mod openai;
pub mod relay;
pub mod task;
