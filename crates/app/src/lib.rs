//! # TimeText App
//!
//! Interactive front end for composing availability text. The user selects
//! slots on a calendar, picks their own and the recipient's timezone, and the
//! formatting service renders the selection as shareable text.
//!
//! ## Architecture
//!
//! - **Selection**: the list of selected slots and the request it produces
//! - **Controls / Pickers**: timezone, format and granularity choices
//! - **Calendar / Output / Clipboard**: capabilities the application drives
//! - **Bootstrap**: waits for the calendar and wires everything together
//! - **Terminal**: line-based front end

pub mod bootstrap;
pub mod calendar;
pub mod clipboard;
pub mod config;
pub mod controls;
pub mod events;
pub mod output;
pub mod pickers;
pub mod selection;
pub mod terminal;

pub mod mock;

use std::sync::Arc;

use eyre::Result;
use timetext_client::AvailabilityClient;
use timetext_core::timezone::ChronoTzDatabase;
use tokio::io::BufReader;
use tracing::info;

use crate::{
    bootstrap::{Collaborators, bootstrap, calendar_channel},
    calendar::TerminalCalendar,
    clipboard::CommandClipboard,
    config::AppConfig,
    output::TerminalOutput,
    terminal::{HELP_TEXT, run_terminal},
};

/// Starts the terminal application and runs it until the user quits.
///
/// # Arguments
///
/// * `config` - Application configuration, including the service connection
///
/// # Returns
///
/// * `Ok(())` when the user quits or input ends
/// * `Err` if the application could not be wired up
pub async fn start_app(config: AppConfig) -> Result<()> {
    info!("Starting TimeText");

    let generator = Arc::new(AvailabilityClient::new(config.api.clone())?);
    let clipboard = Arc::new(CommandClipboard::new(&config.clipboard_command)?);

    let calendar = Arc::new(TerminalCalendar::new(config.default_granularity));
    let (signal, ready) = calendar_channel();
    let loader_calendar = Arc::clone(&calendar);
    tokio::spawn(async move {
        signal.ready(loader_calendar);
    });

    let mut app = bootstrap(
        &config,
        ready,
        Collaborators {
            generator,
            timezones: Arc::new(ChronoTzDatabase::new()),
            clipboard,
            output: Arc::new(TerminalOutput::new()),
        },
    )
    .await?;

    println!("{}", HELP_TEXT);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_terminal(&mut app, &calendar, stdin, &mut stdout).await?;

    Ok(())
}
