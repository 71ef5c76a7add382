//! # Calendar
//!
//! The calendar draws the weekly grid and reports selections; the application
//! only tells it which events to show and how long a grid row is. Selection
//! and click-on-event gestures reach the application as
//! [`UiEvent`](crate::events::UiEvent)s.

use std::{collections::BTreeMap, sync::RwLock};

use timetext_core::models::time_slot::TimeSlot;
use tracing::debug;

/// Rendering surface for selected slots.
pub trait CalendarView: Send + Sync {
    fn add_event(&self, slot: &TimeSlot);

    /// Removes one event with exactly these bounds, if shown.
    fn remove_event(&self, slot: &TimeSlot);

    fn remove_all_events(&self);

    /// Changes the height of one grid row.
    fn set_slot_duration(&self, minutes: u32);
}

/// Formats a slot duration as the `HH:MM:SS` string calendar grids expect.
pub fn slot_duration_label(minutes: u32) -> String {
    format!("{:02}:{:02}:00", minutes / 60, minutes % 60)
}

#[derive(Debug)]
struct CalendarState {
    events: Vec<TimeSlot>,
    slot_minutes: u32,
}

/// Calendar that keeps its events in memory and renders them as text.
#[derive(Debug)]
pub struct TerminalCalendar {
    state: RwLock<CalendarState>,
}

impl TerminalCalendar {
    pub fn new(slot_minutes: u32) -> Self {
        Self {
            state: RwLock::new(CalendarState {
                events: Vec::new(),
                slot_minutes,
            }),
        }
    }

    pub fn events(&self) -> Vec<TimeSlot> {
        self.read(|state| state.events.clone())
    }

    pub fn slot_minutes(&self) -> u32 {
        self.read(|state| state.slot_minutes)
    }

    /// Lists events grouped by UTC day, earliest first.
    pub fn render(&self) -> String {
        self.read(|state| {
            let mut days: BTreeMap<_, Vec<&TimeSlot>> = BTreeMap::new();
            for event in &state.events {
                days.entry(event.start.date_naive()).or_default().push(event);
            }

            let mut lines = vec![format!(
                "Calendar (slot duration {})",
                slot_duration_label(state.slot_minutes)
            )];
            if days.is_empty() {
                lines.push("  no slots selected".to_string());
            }
            for (day, mut events) in days {
                events.sort_by_key(|event| event.start);
                lines.push(format!("  {}", day.format("%a %Y-%m-%d")));
                for event in events {
                    let end_format = if event.end.date_naive() == day {
                        "%H:%M"
                    } else {
                        "%a %H:%M"
                    };
                    lines.push(format!(
                        "    {} - {} UTC",
                        event.start.format("%H:%M"),
                        event.end.format(end_format)
                    ));
                }
            }
            lines.join("\n")
        })
    }

    fn read<T>(&self, f: impl FnOnce(&CalendarState) -> T) -> T {
        match self.state.read() {
            Ok(state) => f(&state),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn write(&self, f: impl FnOnce(&mut CalendarState)) {
        match self.state.write() {
            Ok(mut state) => f(&mut state),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl CalendarView for TerminalCalendar {
    fn add_event(&self, slot: &TimeSlot) {
        debug!("Calendar event added: {} - {}", slot.start, slot.end);
        self.write(|state| state.events.push(*slot));
    }

    fn remove_event(&self, slot: &TimeSlot) {
        self.write(|state| {
            if let Some(index) = state.events.iter().position(|event| event == slot) {
                state.events.remove(index);
                debug!("Calendar event removed: {} - {}", slot.start, slot.end);
            }
        });
    }

    fn remove_all_events(&self) {
        self.write(|state| state.events.clear());
    }

    fn set_slot_duration(&self, minutes: u32) {
        debug!("Calendar slot duration set to {}", slot_duration_label(minutes));
        self.write(|state| state.slot_minutes = minutes);
    }
}
