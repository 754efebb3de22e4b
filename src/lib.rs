pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod repl;
pub mod services;
