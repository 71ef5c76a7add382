use serde::{Deserialize, Serialize};

use super::time_slot::TimeSlot;

/// Output format the formatting service renders as one line per slot.
pub const FORMAT_CONTINUOUS: &str = "continuous";
/// Output format the formatting service renders as one line per granularity step.
pub const FORMAT_CHUNKS: &str = "chunks";

/// Body of `POST /availability/`.
///
/// `recipient_timezone` is always present on the wire; `None` serializes as
/// `null`, which the service reads as "no conversion".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub selected_slots: Vec<TimeSlot>,
    pub user_timezone: String,
    pub recipient_timezone: Option<String>,
    pub output_format: String,
    pub slot_granularity_minutes: u32,
}

/// Reply from the formatting service.
///
/// Only `text_output` is displayed. The service may echo the timezones it
/// used; they are accepted but not required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub text_output: String,
    #[serde(default)]
    pub user_timezone: Option<String>,
    #[serde(default)]
    pub recipient_timezone: Option<String>,
}
