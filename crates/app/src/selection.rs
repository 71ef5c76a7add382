//! # Selection Manager
//!
//! Owns the list of selected slots and keeps the calendar and the output panel
//! in step with it. Every change that affects the output spawns a request to
//! the [`TextGenerator`]; the returned [`PendingOutput`] completes once the
//! panel has been updated (or the response was dropped as stale).
//!
//! ## Overlapping requests
//!
//! Requests are never cancelled. Each one takes a token from a counter and
//! only the holder of the newest token may write to the panel, so a slow
//! response cannot overwrite the text produced for a later selection.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use timetext_client::TextGenerator;
use timetext_core::{
    errors::TextResult,
    models::{availability::AvailabilityRequest, time_slot::TimeSlot},
};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::{calendar::CalendarView, controls::Controls, output::OutputPanel};

/// Shown in the output panel when text generation fails
pub const GENERATION_ERROR_TEXT: &str = "Error generating availability text. Please try again.";

/// Handle to an in-flight output update
pub type PendingOutput = JoinHandle<()>;

pub struct SelectionManager {
    slots: Vec<TimeSlot>,
    controls: Controls,
    calendar: Arc<dyn CalendarView>,
    output: Arc<dyn OutputPanel>,
    generator: Arc<dyn TextGenerator>,
    latest_request: Arc<Mutex<u64>>,
}

impl SelectionManager {
    pub fn new(
        controls: Controls,
        calendar: Arc<dyn CalendarView>,
        output: Arc<dyn OutputPanel>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            slots: Vec::new(),
            controls,
            calendar,
            output,
            generator,
            latest_request: Arc::new(Mutex::new(0)),
        }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Mutable access for control changes; call [`recompute`](Self::recompute) afterwards.
    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    /// Appends a slot and refreshes the output.
    ///
    /// # Errors
    ///
    /// * `TextError::Validation` - `start` is not before `end`; nothing changes
    pub fn select(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TextResult<PendingOutput> {
        let slot = TimeSlot::new(start, end)?;
        self.slots.push(slot);
        self.calendar.add_event(&slot);
        debug!("Selected {} - {} ({} slots)", start, end, self.slots.len());
        Ok(self.recompute())
    }

    /// Removes the first slot with exactly these bounds and refreshes the output.
    pub fn remove(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> PendingOutput {
        match self.slots.iter().position(|slot| slot.matches(start, end)) {
            Some(index) => {
                let slot = self.slots.remove(index);
                self.calendar.remove_event(&slot);
                debug!("Removed {} - {} ({} slots)", start, end, self.slots.len());
            }
            None => debug!("No selected slot matches {} - {}", start, end),
        }
        self.recompute()
    }

    pub fn clear_all(&mut self) -> PendingOutput {
        self.slots.clear();
        self.calendar.remove_all_events();
        debug!("Cleared all slots");
        self.recompute()
    }

    /// Changes the calendar's row height. Stored slots are untouched and the
    /// output is not refreshed.
    pub fn set_granularity(&mut self, minutes: u32) -> TextResult<()> {
        self.controls.set_granularity(minutes)?;
        self.calendar.set_slot_duration(minutes);
        Ok(())
    }

    /// Snapshot of the current selection and control values.
    pub fn build_request(&self) -> AvailabilityRequest {
        AvailabilityRequest {
            selected_slots: self.slots.clone(),
            user_timezone: self.controls.user_timezone().to_string(),
            recipient_timezone: self.controls.recipient_timezone().map(str::to_string),
            output_format: self.controls.output_format().to_string(),
            slot_granularity_minutes: self.controls.granularity(),
        }
    }

    /// Requests fresh text for the current state.
    ///
    /// Must be called from within a tokio runtime.
    pub fn recompute(&self) -> PendingOutput {
        let request = self.build_request();
        let token = {
            let mut latest = self.latest_request.lock().unwrap_or_else(PoisonError::into_inner);
            *latest += 1;
            *latest
        };

        let latest_request = Arc::clone(&self.latest_request);
        let generator = Arc::clone(&self.generator);
        let output = Arc::clone(&self.output);

        tokio::spawn(async move {
            let result = generator.generate(&request).await;

            // Held through the write: no newer token is issued until the panel is updated.
            let latest = latest_request.lock().unwrap_or_else(PoisonError::into_inner);
            if *latest != token {
                debug!("Dropping stale availability response {} (latest {})", token, *latest);
                return;
            }

            match result {
                Ok(text) => output.show(&text),
                Err(e) => {
                    error!("Failed to generate availability text: {}", e);
                    output.show(GENERATION_ERROR_TEXT);
                }
            }
        })
    }
}
