//! # Clipboard
//!
//! Copying the generated text is best effort: a failure is logged and the
//! copy button simply does not change.

use std::{process::Stdio, sync::Arc, time::Duration};

use async_trait::async_trait;
use timetext_core::errors::{TextError, TextResult};
use tokio::{io::AsyncWriteExt, process::Command, sync::RwLock, task::JoinHandle};
use tracing::{debug, error, info};

/// Default label of the copy button
pub const COPY_LABEL: &str = "Copy to clipboard";
/// Label shown while confirming a successful copy
pub const COPIED_LABEL: &str = "Copied!";

/// System clipboard access.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> TextResult<()>;
}

/// Clipboard that pipes text into an external command such as `pbcopy`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// # Errors
    ///
    /// * `TextError::Config` - `command` is empty
    pub fn new(command: &[String]) -> TextResult<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| TextError::Config("Clipboard command must not be empty".to_string()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> TextResult<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| TextError::Clipboard(format!("Failed to start {}: {}", self.program, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TextError::Clipboard(format!("{} has no stdin", self.program)))?;
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| {
                TextError::Clipboard(format!("Failed to write to {}: {}", self.program, e))
            })?;
        drop(stdin);

        let status = child
            .wait()
            .await
            .map_err(|e| {
                TextError::Clipboard(format!("Failed to wait for {}: {}", self.program, e))
            })?;
        if !status.success() {
            return Err(TextError::Clipboard(format!("{} exited with {}", self.program, status)));
        }
        Ok(())
    }
}

/// What the copy button currently looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAppearance {
    pub label: String,
    pub highlighted: bool,
}

/// Copy button with transient success feedback.
#[derive(Debug, Clone)]
pub struct CopyButton {
    state: Arc<RwLock<ButtonState>>,
    label: String,
    feedback: Duration,
}

#[derive(Debug)]
struct ButtonState {
    appearance: ButtonAppearance,
    /// Bumped on every successful copy; only the latest confirmation reverts.
    generation: u64,
}

impl CopyButton {
    pub fn new(label: &str, feedback: Duration) -> Self {
        Self {
            state: Arc::new(RwLock::new(ButtonState {
                appearance: ButtonAppearance {
                    label: label.to_string(),
                    highlighted: false,
                },
                generation: 0,
            })),
            label: label.to_string(),
            feedback,
        }
    }

    pub async fn appearance(&self) -> ButtonAppearance {
        self.state.read().await.appearance.clone()
    }

    /// Writes `text` to the clipboard.
    ///
    /// On success the button shows [`COPIED_LABEL`] and the returned task
    /// restores the original label after the feedback delay, unless another
    /// copy succeeded in the meantime. On failure the error is logged and the
    /// button is left alone.
    pub async fn copy(&self, clipboard: &dyn Clipboard, text: &str) -> Option<JoinHandle<()>> {
        if let Err(e) = clipboard.write_text(text).await {
            error!("Failed to copy text: {}", e);
            return None;
        }

        info!("Copied {} characters to the clipboard", text.len());
        let generation = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.appearance = ButtonAppearance {
                label: COPIED_LABEL.to_string(),
                highlighted: true,
            };
            state.generation
        };

        let state = Arc::clone(&self.state);
        let label = self.label.clone();
        let feedback = self.feedback;
        Some(tokio::spawn(async move {
            tokio::time::sleep(feedback).await;
            let mut state = state.write().await;
            if state.generation != generation {
                debug!("Copy confirmation superseded by a later copy");
                return;
            }
            state.appearance = ButtonAppearance {
                label,
                highlighted: false,
            };
        }))
    }
}
