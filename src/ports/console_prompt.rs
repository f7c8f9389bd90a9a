use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::Mutex;

use crate::global_constants::{LOG_TAG_APP, PROMPT_CAPTURE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRequest {
    Capture,
    Quit,
}

type LineReader = Lines<Box<dyn AsyncBufRead + Send + Unpin>>;

/// Line-oriented console input shared by the capture trigger and the
/// sources that need to ask the user something.
pub struct ConsolePrompt {
    lines: Mutex<LineReader>,
}

impl ConsolePrompt {
    pub fn from_stdin() -> Self {
        Self::from_reader(Box::new(BufReader::new(tokio::io::stdin())))
    }

    pub fn from_reader(reader: Box<dyn AsyncBufRead + Send + Unpin>) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }

    /// Returns `None` once input is exhausted.
    pub async fn read_answer(&self, prompt: &str) -> Result<Option<String>> {
        println!("{}", prompt);

        let mut lines = self.lines.lock().await;
        let answer = lines
            .next_line()
            .await
            .context("Failed to read from console")?;

        Ok(answer.map(|line| line.trim().to_string()))
    }

    pub async fn wait_for_capture_request(&self) -> CaptureRequest {
        match self.read_answer(PROMPT_CAPTURE).await {
            Ok(Some(answer)) if Self::is_quit_command(&answer) => CaptureRequest::Quit,
            Ok(Some(_)) => CaptureRequest::Capture,
            Ok(None) => {
                log::info!("{} Console input closed", LOG_TAG_APP);
                CaptureRequest::Quit
            }
            Err(error) => {
                log::error!("{} {:#}", LOG_TAG_APP, error);
                CaptureRequest::Quit
            }
        }
    }

    fn is_quit_command(answer: &str) -> bool {
        answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit")
    }
}
