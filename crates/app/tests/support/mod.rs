#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use timetext_app::{
    calendar::TerminalCalendar,
    config::AppConfig,
    controls::Controls,
    output::SharedOutput,
    pickers::{TimezonePickers, format_picker},
    selection::SelectionManager,
};
use timetext_client::{TextGenerator, config::ApiConfig};
use timetext_core::{
    errors::TextResult, models::availability::AvailabilityRequest, timezone::TimezoneDatabase,
};

pub const ZONES: [&str; 5] = [
    "Europe/Berlin",
    "America/New_York",
    "UTC",
    "Asia/Tokyo",
    "Europe/Berlin",
];

pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0).unwrap()
}

/// Timezone database with a fixed list and local guess.
pub struct FixedTimezones {
    pub names: Vec<String>,
    pub local: Option<String>,
}

impl FixedTimezones {
    pub fn new(names: &[&str], local: Option<&str>) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
            local: local.map(str::to_string),
        }
    }
}

impl TimezoneDatabase for FixedTimezones {
    fn names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn guess_local(&self) -> Option<String> {
        self.local.clone()
    }
}

/// Generator that answers calls in order, each after its own delay.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<(Duration, TextResult<String>)>>,
    pub requests: Mutex<Vec<AvailabilityRequest>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<(Duration, TextResult<String>)>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &AvailabilityRequest) -> TextResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        let (delay, reply) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected generate call");
        tokio::time::sleep(delay).await;
        reply
    }
}

pub fn controls(formats: &[&str]) -> Controls {
    let database = FixedTimezones::new(&ZONES, None);
    let timezones = TimezonePickers::populate(&database, "America/New_York").unwrap();
    let formats: Vec<String> = formats.iter().map(|format| format.to_string()).collect();
    Controls::new(timezones, format_picker(&formats).unwrap(), vec![15, 30, 60], 30).unwrap()
}

pub struct Harness {
    pub manager: SelectionManager,
    pub calendar: Arc<TerminalCalendar>,
    pub output: Arc<SharedOutput>,
}

pub fn harness(generator: Arc<dyn TextGenerator>) -> Harness {
    let calendar = Arc::new(TerminalCalendar::new(30));
    let output = Arc::new(SharedOutput::new());
    let manager = SelectionManager::new(
        controls(&["continuous", "chunks"]),
        calendar.clone(),
        output.clone(),
        generator,
    );
    Harness {
        manager,
        calendar,
        output,
    }
}

pub fn app_config() -> AppConfig {
    AppConfig {
        api: ApiConfig::new("http://localhost:8000/api/v1", "test-key"),
        default_timezone: "America/New_York".to_string(),
        log_level: tracing::Level::INFO,
        output_formats: vec!["continuous".to_string(), "chunks".to_string()],
        granularities: vec![15, 30, 60],
        default_granularity: 30,
        copy_feedback: Duration::from_secs(2),
        clipboard_command: vec!["cat".to_string()],
    }
}
