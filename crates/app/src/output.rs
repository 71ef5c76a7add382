use std::sync::RwLock;

/// Text shown before the first successful generation
pub const PLACEHOLDER_TEXT: &str =
    "Select time slots on the calendar to generate your availability text.";

/// Panel displaying the generated availability text.
pub trait OutputPanel: Send + Sync {
    /// Replaces the displayed text verbatim.
    fn show(&self, text: &str);

    fn text(&self) -> String;
}

/// In-memory output panel.
#[derive(Debug)]
pub struct SharedOutput {
    text: RwLock<String>,
}

impl SharedOutput {
    pub fn new() -> Self {
        Self::with_text(PLACEHOLDER_TEXT)
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: RwLock::new(text.to_string()),
        }
    }
}

impl Default for SharedOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPanel for SharedOutput {
    fn show(&self, text: &str) {
        match self.text.write() {
            Ok(mut current) => *current = text.to_string(),
            Err(poisoned) => *poisoned.into_inner() = text.to_string(),
        }
    }

    fn text(&self) -> String {
        match self.text.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// Output panel that also prints every update to stdout.
#[derive(Debug, Default)]
pub struct TerminalOutput {
    inner: SharedOutput,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputPanel for TerminalOutput {
    fn show(&self, text: &str) {
        self.inner.show(text);
        println!("\n{}\n", text);
    }

    fn text(&self) -> String {
        self.inner.text()
    }
}
