pub mod availability;
pub mod time_slot;
