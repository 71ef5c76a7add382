//! # Application Configuration
//!
//! Settings for the terminal application, layered on top of the service
//! connection settings in [`ApiConfig`].
//!
//! ## Environment Variables
//!
//! - `TIMETEXT_DEFAULT_TIMEZONE`: Fallback user timezone when the local one cannot be detected (default: "America/New_York")
//! - `TIMETEXT_OUTPUT_FORMATS`: Comma-separated output formats offered to the user (default: "continuous,chunks")
//! - `TIMETEXT_GRANULARITIES`: Comma-separated slot granularities in minutes (default: "15,30,60")
//! - `TIMETEXT_DEFAULT_GRANULARITY`: Granularity selected at startup (default: 30)
//! - `TIMETEXT_COPY_FEEDBACK_MS`: How long the copy button shows its confirmation (default: 2000)
//! - `TIMETEXT_CLIPBOARD_COMMAND`: Command that receives copied text on stdin (default: platform specific)
//! - `LOG_LEVEL`: Logging level (default: "info")

use std::{env, time::Duration};

use eyre::{Result, WrapErr, eyre};
use timetext_client::config::ApiConfig;
use timetext_core::models::availability::{FORMAT_CHUNKS, FORMAT_CONTINUOUS};
use tracing::Level;

/// Fallback user timezone
pub const DEFAULT_TIMEZONE: &str = "America/New_York";
/// Granularity selected at startup, in minutes
pub const DEFAULT_GRANULARITY: u32 = 30;
/// Granularities offered by default, in minutes
pub const DEFAULT_GRANULARITIES: [u32; 3] = [15, 30, 60];
/// Duration of the copy confirmation
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Configuration for the TimeText terminal application
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Formatting service connection settings
    pub api: ApiConfig,

    /// User timezone used when the local timezone cannot be detected
    pub default_timezone: String,

    /// Log level for the application
    pub log_level: Level,

    /// Output format identifiers offered to the user; the first is selected
    pub output_formats: Vec<String>,

    /// Slot granularities offered to the user, in minutes
    pub granularities: Vec<u32>,

    /// Granularity selected at startup, in minutes
    pub default_granularity: u32,

    /// How long the copy button shows its confirmation
    pub copy_feedback: Duration,

    /// Program and arguments that receive copied text on stdin
    pub clipboard_command: Vec<String>,
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - the service settings are invalid (see [`ApiConfig::from_lookup`])
    /// - a granularity, the default granularity or the copy feedback delay is not a whole number
    /// - a granularity is zero
    /// - the default granularity is not among the offered granularities
    /// - the output format list is empty
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api = ApiConfig::from_lookup(&lookup)?;

        let default_timezone =
            lookup("TIMETEXT_DEFAULT_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let output_formats = match lookup("TIMETEXT_OUTPUT_FORMATS") {
            Some(formats) => split_list(&formats),
            None => vec![FORMAT_CONTINUOUS.to_string(), FORMAT_CHUNKS.to_string()],
        };
        if output_formats.is_empty() {
            return Err(eyre!("TIMETEXT_OUTPUT_FORMATS must name at least one format"));
        }

        let granularities = match lookup("TIMETEXT_GRANULARITIES") {
            Some(values) => split_list(&values)
                .iter()
                .map(|value| parse_minutes(value))
                .collect::<Result<Vec<_>>>()
                .wrap_err("Invalid TIMETEXT_GRANULARITIES value")?,
            None => DEFAULT_GRANULARITIES.to_vec(),
        };

        let default_granularity = lookup("TIMETEXT_DEFAULT_GRANULARITY")
            .map(|value| parse_minutes(&value))
            .transpose()
            .wrap_err("Invalid TIMETEXT_DEFAULT_GRANULARITY value")?
            .unwrap_or(DEFAULT_GRANULARITY);
        if !granularities.contains(&default_granularity) {
            return Err(eyre!(
                "TIMETEXT_DEFAULT_GRANULARITY {} is not one of TIMETEXT_GRANULARITIES {:?}",
                default_granularity,
                granularities
            ));
        }

        let copy_feedback = lookup("TIMETEXT_COPY_FEEDBACK_MS")
            .map(|value| value.parse::<u64>().map(Duration::from_millis))
            .transpose()
            .wrap_err("Invalid TIMETEXT_COPY_FEEDBACK_MS value")?
            .unwrap_or(DEFAULT_COPY_FEEDBACK);

        let clipboard_command = lookup("TIMETEXT_CLIPBOARD_COMMAND")
            .map(|command| command.split_whitespace().map(str::to_string).collect())
            .unwrap_or_else(default_clipboard_command);

        Ok(Self {
            api,
            default_timezone,
            log_level,
            output_formats,
            granularities,
            default_granularity,
            copy_feedback,
            clipboard_command,
        })
    }
}

/// Clipboard command for the current platform
pub fn default_clipboard_command() -> Vec<String> {
    let command: &[&str] = if cfg!(target_os = "macos") {
        &["pbcopy"]
    } else if cfg!(target_os = "windows") {
        &["clip"]
    } else {
        &["xclip", "-selection", "clipboard"]
    };
    command.iter().map(|part| part.to_string()).collect()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_minutes(value: &str) -> Result<u32> {
    let minutes: u32 = value
        .trim()
        .parse()
        .wrap_err_with(|| format!("'{}' is not a number of minutes", value))?;
    if minutes == 0 {
        return Err(eyre!("Granularity must be at least one minute"));
    }
    Ok(minutes)
}
