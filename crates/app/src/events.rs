use chrono::{DateTime, Utc};

/// A user interaction with the calendar or one of the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A range was selected on the calendar grid.
    Select { start: DateTime<Utc>, end: DateTime<Utc> },
    /// An existing event was clicked, which removes it.
    EventClick { start: DateTime<Utc>, end: DateTime<Utc> },
    ClearAll,
    UserTimezoneChanged(String),
    /// Carries the picker value; the "no conversion" sentinel is the empty string.
    RecipientTimezoneChanged(String),
    OutputFormatChanged(String),
    GranularityChanged(u32),
    Copy,
}
