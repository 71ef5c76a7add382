//! # Terminal Front End
//!
//! Reads one command per line and turns it into a [`UiEvent`] for the
//! application, or into a local query such as `show` or `zones`.
//!
//! ```text
//! select 2024-01-01T14:00:00Z 2024-01-01T14:30:00Z
//! recipient Europe/Berlin
//! copy
//! ```

use std::io::Write;

use chrono::{DateTime, Utc};
use timetext_core::errors::{TextError, TextResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::{
    bootstrap::App,
    calendar::TerminalCalendar,
    controls::Controls,
    events::UiEvent,
    pickers::NO_CONVERSION,
};

pub const HELP_TEXT: &str = "\
Commands:
  select <start> <end>     add an available slot (RFC 3339 instants)
  remove <start> <end>     remove a slot with exactly these bounds
  clear                    remove every slot
  tz <timezone>            set your timezone
  recipient <timezone>     set the recipient timezone, or 'none' for no conversion
  format <format>          set the output format
  granularity <minutes>    set the slot granularity
  copy                     copy the availability text to the clipboard
  show                     show the calendar, controls and current text
  zones [filter]           list timezones, optionally containing <filter>
  help                     show this help
  quit                     exit";

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ui(UiEvent),
    Show,
    Zones(Option<String>),
    Help,
    Quit,
}

/// Parses one input line; blank lines yield `None`.
///
/// # Errors
///
/// * `TextError::Validation` - unknown command, missing argument or malformed value
pub fn parse_command(line: &str) -> TextResult<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("select", [start, end]) => Command::Ui(UiEvent::Select {
            start: parse_instant(start)?,
            end: parse_instant(end)?,
        }),
        ("remove", [start, end]) => Command::Ui(UiEvent::EventClick {
            start: parse_instant(start)?,
            end: parse_instant(end)?,
        }),
        ("clear", []) => Command::Ui(UiEvent::ClearAll),
        ("tz", [timezone]) => Command::Ui(UiEvent::UserTimezoneChanged(timezone.to_string())),
        ("recipient", [timezone]) => {
            let value = if timezone.eq_ignore_ascii_case("none") {
                NO_CONVERSION
            } else {
                *timezone
            };
            Command::Ui(UiEvent::RecipientTimezoneChanged(value.to_string()))
        }
        ("format", [format]) => Command::Ui(UiEvent::OutputFormatChanged(format.to_string())),
        ("granularity", [minutes]) => {
            let minutes = minutes.parse::<u32>().map_err(|_| {
                TextError::Validation(format!("'{}' is not a number of minutes", minutes))
            })?;
            Command::Ui(UiEvent::GranularityChanged(minutes))
        }
        ("copy", []) => Command::Ui(UiEvent::Copy),
        ("show", []) => Command::Show,
        ("zones", []) => Command::Zones(None),
        ("zones", [filter]) => Command::Zones(Some(filter.to_string())),
        ("help", []) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        (name, _) => {
            return Err(TextError::Validation(format!(
                "Unknown command or wrong arguments: '{}' (type 'help')",
                name
            )));
        }
    };

    Ok(Some(command))
}

fn parse_instant(value: &str) -> TextResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| {
            TextError::Validation(format!("'{}' is not an RFC 3339 instant: {}", value, e))
        })
}

/// One-line summary of the current control values.
pub fn describe_controls(controls: &Controls) -> String {
    format!(
        "Timezone: {} | Recipient: {} | Format: {} | Granularity: {} min",
        controls.user_timezone(),
        controls.recipient_timezone().unwrap_or("no conversion"),
        controls.output_format(),
        controls.granularity()
    )
}

/// Runs the command loop until `quit` or end of input.
pub async fn run_terminal<R, W>(
    app: &mut App,
    calendar: &TerminalCalendar,
    input: R,
    out: &mut W,
) -> TextResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.map_err(io_error)? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e).map_err(io_error)?;
                continue;
            }
        };

        match command {
            Command::Ui(event) => {
                app.handle(event);
            }
            Command::Show => {
                let button = app.copy_button().appearance().await;
                writeln!(out, "{}", calendar.render()).map_err(io_error)?;
                writeln!(out, "{}", describe_controls(app.manager().controls())).map_err(io_error)?;
                writeln!(out, "[{}]", button.label).map_err(io_error)?;
                writeln!(out, "{}", app.output_text()).map_err(io_error)?;
            }
            Command::Zones(filter) => {
                let filter = filter.map(|filter| filter.to_lowercase());
                let picker = app.manager().controls().user_timezone_picker();
                for zone in picker.values().filter(|zone| {
                    filter
                        .as_ref()
                        .is_none_or(|f| zone.to_lowercase().contains(f.as_str()))
                }) {
                    writeln!(out, "{}", zone).map_err(io_error)?;
                }
            }
            Command::Help => writeln!(out, "{}", HELP_TEXT).map_err(io_error)?,
            Command::Quit => break,
        }
    }

    info!("Terminal session ended");
    Ok(())
}

fn io_error(e: std::io::Error) -> TextError {
    TextError::Internal(Box::new(e))
}
