//! # TimeText Client
//!
//! The client crate talks to the availability formatting service. It owns the
//! endpoint configuration and the [`TextGenerator`](availability::TextGenerator)
//! seam the application uses to turn selected slots into text.

/// Text generation over HTTP
pub mod availability;
/// Endpoint configuration loaded from the environment
pub mod config;

pub mod mock;

pub use availability::{AvailabilityClient, TextGenerator};
pub use config::ApiConfig;
