//! # TimeText Core
//!
//! Domain types shared by the TimeText client and terminal application:
//! selected time slots, the availability request sent to the formatting
//! service, the error taxonomy, and the timezone database capability.

/// Error types and the crate-wide result alias
pub mod errors;
/// Serializable domain models
pub mod models;
/// Timezone identifier enumeration and local timezone detection
pub mod timezone;

pub use errors::{TextError, TextResult};
