//! Reminder prompts for terminal front ends

use std::io::BufRead;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, Mutex};

use crate::notice::Notice;

/// Asks the user whether to mark a plant as watered
#[async_trait(?Send)]
pub trait Prompter {
    /// Show `question` and wait for a yes/no answer
    async fn confirm(&self, question: &str) -> bool;

    /// Show the result of the follow-up action
    fn notify(&self, notice: &Notice);
}

/// Interactive prompt on stdin/stdout. Concurrent prompts take turns.
///
/// Lines are read on a detached thread, so a prompt still waiting for an
/// answer never keeps the runtime from shutting down.
pub struct StdinPrompter {
    answers: Mutex<mpsc::Receiver<String>>,
}

impl StdinPrompter {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(1);
        std::thread::spawn(move || forward_lines(std::io::stdin().lock(), tx));
        Self::from_receiver(rx)
    }

    fn from_receiver(answers: mpsc::Receiver<String>) -> Self {
        Self {
            answers: Mutex::new(answers),
        }
    }
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// Send each input line until EOF, a read error or a dropped receiver
fn forward_lines(input: impl BufRead, tx: mpsc::Sender<String>) {
    for line in input.lines() {
        match line {
            Ok(line) => {
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!("Failed to read answer: {}", e);
                break;
            }
        }
    }
}

/// `y`/`yes` in any case
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[async_trait(?Send)]
impl Prompter for StdinPrompter {
    async fn confirm(&self, question: &str) -> bool {
        let mut answers = self.answers.lock().await;

        let mut stdout = tokio::io::stdout();
        let shown = format!("\n{} [y/N] ", question);
        if let Err(e) = stdout.write_all(shown.as_bytes()).await {
            tracing::warn!("Failed to write prompt: {}", e);
            return false;
        }
        let _ = stdout.flush().await;

        // Closed input counts as "no"
        match answers.recv().await {
            Some(line) => is_yes(&line),
            None => false,
        }
    }

    fn notify(&self, notice: &Notice) {
        if notice.is_error() {
            eprintln!("{}", notice);
        } else {
            println!("{}", notice);
        }
    }
}

/// Answers every prompt the same way without asking
#[derive(Debug, Clone, Copy)]
pub struct AutoPrompter(pub bool);

#[async_trait(?Send)]
impl Prompter for AutoPrompter {
    async fn confirm(&self, question: &str) -> bool {
        tracing::info!(accepted = self.0, "{}", question.lines().next().unwrap_or_default());
        self.0
    }

    fn notify(&self, notice: &Notice) {
        tracing::info!("{}", notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }

    #[tokio::test]
    async fn test_stdin_prompter_reads_forwarded_lines() {
        let (tx, rx) = mpsc::channel(1);
        let reader = std::thread::spawn(move || {
            forward_lines(std::io::Cursor::new("yes\nno\n"), tx);
        });

        let prompter = StdinPrompter::from_receiver(rx);
        assert!(prompter.confirm("Water the fern?").await);
        assert!(!prompter.confirm("Water the fern?").await);

        // Input exhausted
        assert!(!prompter.confirm("Water the fern?").await);
        reader.join().unwrap();
    }

    #[tokio::test]
    async fn test_pending_prompt_does_not_block_shutdown() {
        let (_tx, rx) = mpsc::channel::<String>(1);
        let prompter = StdinPrompter::from_receiver(rx);

        // No answer arrives; the wait is cancellable
        let answered = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            prompter.confirm("Water the fern?"),
        )
        .await;
        assert!(answered.is_err());
    }

    #[tokio::test]
    async fn test_auto_prompter() {
        assert!(AutoPrompter(true).confirm("water?").await);
        assert!(!AutoPrompter(false).confirm("water?").await);
    }
}
