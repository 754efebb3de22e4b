// src/services/task.rs
use std::path::Path;

use crate::error::{RelayError, Result};
use crate::message::ModelOptions;

/// Largest file, in characters, the summarizer will send.
pub const MAX_INPUT_CHARS: usize = 100_000;

pub const EXIT_WORDS: [&str; 4] = ["", "exit", "quit", "sair"];

const CAPITAL_PROMPT: &str = "When the user says the name of a country, return its capital city name only. If you don't know, respond with 'I don't know'.";

const SONNET_PROMPT: &str = "You are an AI assistant with a unique constraint:
You answer questions — but always, always in the form of a traditional Portuguese sonnet.
You always stick to a pair of quatrains followed by a pair of tercets (4-4-3-3 structure).
You always write in Portuguese, in the style of Luiz Vaz de Camões.
Make your sonnets accurate, informative, and poetically beautiful.";

const SUMMARY_PROMPT: &str = "You are a helpful assistant that summarizes text concisely. Create a clear, comprehensive one-paragraph summary.";

fn rule() -> String {
    "-".repeat(80)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Capital,
    Sonnet,
    Summary,
}

impl Task {
    pub fn system_prompt(self) -> &'static str {
        match self {
            Task::Capital => CAPITAL_PROMPT,
            Task::Sonnet => SONNET_PROMPT,
            Task::Summary => SUMMARY_PROMPT,
        }
    }

    pub fn options(self) -> ModelOptions {
        match self {
            Task::Capital => ModelOptions {
                model: "gpt-5-nano",
                temperature: None,
                max_tokens: None,
                max_completion_tokens: None,
            },
            Task::Sonnet => ModelOptions {
                model: "gpt-4o",
                temperature: Some(0.8),
                max_tokens: Some(500),
                max_completion_tokens: None,
            },
            Task::Summary => ModelOptions {
                model: "gpt-4.1-mini-2025-04-14",
                temperature: Some(0.3),
                max_tokens: None,
                max_completion_tokens: Some(500),
            },
        }
    }

    // Summary input is a path; the file is checked here, before any request.
    pub async fn user_message(self, input: &str) -> Result<String> {
        match self {
            Task::Capital | Task::Sonnet => Ok(input.to_string()),
            Task::Summary => {
                let content = read_text_file(Path::new(input)).await?;
                Ok(format!(
                    "Please summarize the following text in one paragraph:\n\n{content}"
                ))
            }
        }
    }

    pub fn is_exit(input: &str) -> bool {
        let lowered = input.trim().to_lowercase();
        EXIT_WORDS.contains(&lowered.as_str())
    }

    pub fn banner(self) -> String {
        match self {
            Task::Capital => "=== National Capitals Lookup ===\n\
                 Enter a country name to get its capital.\n\
                 Type 'exit' or 'quit' to end the program.\n\n"
                .to_string(),
            Task::Sonnet => format!(
                "=== 📜 Soneto AI: Perguntas em Verso ===\n\
                 Faça uma pergunta e receba a resposta em forma de soneto português,\n\
                 no estilo de Luiz Vaz de Camões.\n\n\
                 Digite 'exit' ou 'quit' para sair.\n\n\
                 💡 Exemplo: 'O que é inteligência artificial?'\n\n\
                 {}\n\n",
                rule()
            ),
            Task::Summary => "=== Text File Summarizer ===\n\
                 Enter the path to a text file to get a summary.\n\
                 Type 'exit' or 'quit' to end the program.\n\n\
                 💡 Tip: Try summarizing 'great_work.txt' or 'managers_schedule_makers_schedule.txt'\n\n"
                .to_string(),
        }
    }

    pub fn prompt_label(self) -> &'static str {
        match self {
            Task::Capital => "Country: ",
            Task::Sonnet => "❓ Pergunta: ",
            Task::Summary => "File path: ",
        }
    }

    pub fn working_notice(self) -> Option<&'static str> {
        match self {
            Task::Capital => None,
            Task::Sonnet => Some("\n✍️  Compondo soneto...\n\n"),
            Task::Summary => Some("\n⏳ Summarizing...\n\n"),
        }
    }

    pub fn farewell(self) -> &'static str {
        match self {
            Task::Capital | Task::Summary => "Goodbye!\n",
            Task::Sonnet => "\n👋 Adeus! Que os versos te acompanhem.\n",
        }
    }

    pub fn interrupted(self) -> &'static str {
        match self {
            Task::Capital | Task::Summary => "\n\nInterrupted. Goodbye!\n",
            Task::Sonnet => "\n\n👋 Interrompido. Até breve!\n",
        }
    }

    pub fn render(self, outcome: &Result<String>) -> String {
        let body = match outcome {
            Ok(reply) => reply.clone(),
            Err(e) => match self {
                Task::Capital => e.to_string(),
                Task::Sonnet | Task::Summary => format!("❌ {e}"),
            },
        };

        match self {
            Task::Capital => format!("Capital: {body}\n\n"),
            Task::Sonnet => format!("📜 Resposta:\n\n{body}\n\n{}\n\n", rule()),
            Task::Summary => format!("📝 Summary:\n{body}\n\n{}\n\n", rule()),
        }
    }
}

async fn read_text_file(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let content = String::from_utf8(bytes).map_err(|_| RelayError::NotUtf8)?;

    let chars = content.chars().count();
    if chars > MAX_INPUT_CHARS {
        tracing::debug!(path = %path.display(), chars, "input file over limit");
        return Err(RelayError::TooLarge { chars });
    }
    Ok(content)
}
