//! # Bootstrap
//!
//! The calendar loads asynchronously. Whoever loads it holds a
//! [`CalendarSignal`] and fires it once the calendar can take events;
//! [`bootstrap`] waits on the matching [`CalendarReady`] before wiring the
//! controls to a [`SelectionManager`].

use std::sync::Arc;

use timetext_client::TextGenerator;
use timetext_core::{
    errors::{TextError, TextResult},
    timezone::TimezoneDatabase,
};
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::{
    calendar::CalendarView,
    clipboard::{COPY_LABEL, Clipboard, CopyButton},
    config::AppConfig,
    controls::Controls,
    events::UiEvent,
    output::OutputPanel,
    pickers::{TimezonePickers, format_picker},
    selection::SelectionManager,
};

/// Fired by the calendar loader once the calendar is usable.
pub struct CalendarSignal(oneshot::Sender<Arc<dyn CalendarView>>);

/// Resolves when the calendar loader fires its [`CalendarSignal`].
pub struct CalendarReady(oneshot::Receiver<Arc<dyn CalendarView>>);

/// Creates a connected readiness signal pair.
pub fn calendar_channel() -> (CalendarSignal, CalendarReady) {
    let (tx, rx) = oneshot::channel();
    (CalendarSignal(tx), CalendarReady(rx))
}

impl CalendarSignal {
    pub fn ready(self, calendar: Arc<dyn CalendarView>) {
        if self.0.send(calendar).is_err() {
            debug!("Calendar became ready after the application stopped waiting");
        }
    }
}

impl CalendarReady {
    /// # Errors
    ///
    /// * `TextError::Internal` - the loader was dropped without signalling
    pub async fn wait(self) -> TextResult<Arc<dyn CalendarView>> {
        self.0.await.map_err(|e| TextError::Internal(Box::new(e)))
    }
}

/// Collaborators the application is wired to.
pub struct Collaborators {
    pub generator: Arc<dyn TextGenerator>,
    pub timezones: Arc<dyn TimezoneDatabase>,
    pub clipboard: Arc<dyn Clipboard>,
    pub output: Arc<dyn OutputPanel>,
}

/// The wired application: one selection manager plus the copy button.
pub struct App {
    manager: SelectionManager,
    clipboard: Arc<dyn Clipboard>,
    output: Arc<dyn OutputPanel>,
    copy_button: CopyButton,
}

/// Waits for the calendar, populates the pickers and wires everything up.
///
/// # Errors
///
/// * `TextError::Internal` - the calendar never became ready
/// * `TextError::Validation` - the timezone database or the format list is empty,
///   or the configured granularity is zero
pub async fn bootstrap(
    config: &AppConfig,
    ready: CalendarReady,
    collaborators: Collaborators,
) -> TextResult<App> {
    let calendar = ready.wait().await?;
    info!("Calendar ready");

    let timezones =
        TimezonePickers::populate(collaborators.timezones.as_ref(), &config.default_timezone)?;
    let output_format = format_picker(&config.output_formats)?;
    let controls = Controls::new(
        timezones,
        output_format,
        config.granularities.clone(),
        config.default_granularity,
    )?;

    calendar.set_slot_duration(config.default_granularity);
    let manager = SelectionManager::new(
        controls,
        calendar,
        Arc::clone(&collaborators.output),
        collaborators.generator,
    );

    Ok(App {
        manager,
        clipboard: collaborators.clipboard,
        output: collaborators.output,
        copy_button: CopyButton::new(COPY_LABEL, config.copy_feedback),
    })
}

impl App {
    pub fn manager(&self) -> &SelectionManager {
        &self.manager
    }

    /// Text currently shown in the output panel.
    pub fn output_text(&self) -> String {
        self.output.text()
    }

    pub fn copy_button(&self) -> &CopyButton {
        &self.copy_button
    }

    /// Handles one event to completion and returns the background work it
    /// started, if any.
    ///
    /// Invalid input is logged and ignored; no event can stop the application.
    pub fn handle(&mut self, event: UiEvent) -> Option<JoinHandle<()>> {
        debug!("Handling {:?}", event);
        let result = match event {
            UiEvent::Select { start, end } => self.manager.select(start, end).map(Some),
            UiEvent::EventClick { start, end } => Ok(Some(self.manager.remove(start, end))),
            UiEvent::ClearAll => Ok(Some(self.manager.clear_all())),
            UiEvent::UserTimezoneChanged(timezone) => self
                .manager
                .controls_mut()
                .set_user_timezone(&timezone)
                .map(|_| Some(self.manager.recompute())),
            UiEvent::RecipientTimezoneChanged(value) => self
                .manager
                .controls_mut()
                .set_recipient_timezone(&value)
                .map(|_| Some(self.manager.recompute())),
            UiEvent::OutputFormatChanged(format) => self
                .manager
                .controls_mut()
                .set_output_format(&format)
                .map(|_| Some(self.manager.recompute())),
            UiEvent::GranularityChanged(minutes) => self
                .manager
                .set_granularity(minutes)
                .map(|_| Some(self.manager.recompute())),
            UiEvent::Copy => Ok(Some(self.copy())),
        };

        match result {
            Ok(pending) => pending,
            Err(e) => {
                warn!("Ignoring invalid input: {}", e);
                None
            }
        }
    }

    fn copy(&self) -> JoinHandle<()> {
        let text = self.output.text();
        let clipboard = Arc::clone(&self.clipboard);
        let button = self.copy_button.clone();
        tokio::spawn(async move {
            if let Some(revert) = button.copy(clipboard.as_ref(), &text).await {
                if let Err(e) = revert.await {
                    error!("Copy button revert task failed: {}", e);
                }
            }
        })
    }
}
