use async_trait::async_trait;
use mockall::mock;
use timetext_core::{errors::TextResult, models::time_slot::TimeSlot};

use crate::{calendar::CalendarView, clipboard::Clipboard};

// Mock collaborators for testing
mock! {
    pub Calendar {}

    impl CalendarView for Calendar {
        fn add_event(&self, slot: &TimeSlot);
        fn remove_event(&self, slot: &TimeSlot);
        fn remove_all_events(&self);
        fn set_slot_duration(&self, minutes: u32);
    }
}

mock! {
    pub SystemClipboard {}

    #[async_trait]
    impl Clipboard for SystemClipboard {
        async fn write_text(&self, text: &str) -> TextResult<()>;
    }
}
