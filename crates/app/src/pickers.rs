//! # Pickers
//!
//! Drop-down style choices: the user and recipient timezone lists, the output
//! format list. A picker always has at least one option and exactly one
//! selected value.

use timetext_core::{
    errors::{TextError, TextResult},
    timezone::TimezoneDatabase,
};
use tracing::{info, warn};

/// Recipient picker value meaning "do not convert timezones"
pub const NO_CONVERSION: &str = "";
/// Label shown for [`NO_CONVERSION`]
pub const NO_CONVERSION_LABEL: &str = "No conversion";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
}

impl PickerOption {
    /// An option whose label is its value
    pub fn plain(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picker {
    options: Vec<PickerOption>,
    selected: usize,
}

impl Picker {
    /// Creates a picker with the first option selected.
    ///
    /// # Errors
    ///
    /// * `TextError::Validation` - `options` is empty
    pub fn new(options: Vec<PickerOption>) -> TextResult<Self> {
        if options.is_empty() {
            return Err(TextError::Validation(
                "A picker needs at least one option".to_string(),
            ));
        }
        Ok(Self {
            options,
            selected: 0,
        })
    }

    pub fn options(&self) -> &[PickerOption] {
        &self.options
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.value.as_str())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values().any(|candidate| candidate == value)
    }

    pub fn selected_value(&self) -> &str {
        &self.options[self.selected].value
    }

    /// Selects the option with the given value.
    ///
    /// # Errors
    ///
    /// * `TextError::Validation` - no option has this value; the selection is unchanged
    pub fn select(&mut self, value: &str) -> TextResult<()> {
        let index = self
            .options
            .iter()
            .position(|option| option.value == value)
            .ok_or_else(|| {
                TextError::Validation(format!("'{}' is not one of the offered options", value))
            })?;
        self.selected = index;
        Ok(())
    }
}

/// The user and recipient timezone pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezonePickers {
    pub user: Picker,
    pub recipient: Picker,
}

impl TimezonePickers {
    /// Fills both pickers from the timezone database.
    ///
    /// Identifiers are sorted and deduplicated. The user picker selects the
    /// detected local timezone, falling back to `fallback` and then to the
    /// first identifier. The recipient picker starts with the
    /// [`NO_CONVERSION`] sentinel, which is selected.
    ///
    /// # Errors
    ///
    /// * `TextError::Validation` - the database lists no timezones
    pub fn populate(database: &dyn TimezoneDatabase, fallback: &str) -> TextResult<Self> {
        let mut names = database.names();
        names.sort();
        names.dedup();

        let options: Vec<PickerOption> =
            names.iter().map(|name| PickerOption::plain(name)).collect();

        let mut user = Picker::new(options.clone())?;
        let local = database.guess_local().filter(|guess| user.contains(guess));
        match local {
            Some(local) => user.select(&local)?,
            None if user.contains(fallback) => user.select(fallback)?,
            None => warn!(
                "Neither the local timezone nor '{}' is known; defaulting to {}",
                fallback,
                user.selected_value()
            ),
        }

        let mut recipient_options = Vec::with_capacity(options.len() + 1);
        recipient_options.push(PickerOption {
            value: NO_CONVERSION.to_string(),
            label: NO_CONVERSION_LABEL.to_string(),
        });
        recipient_options.extend(options);
        let recipient = Picker::new(recipient_options)?;

        info!(
            "Loaded {} timezones, user timezone {}",
            names.len(),
            user.selected_value()
        );

        Ok(Self { user, recipient })
    }
}

/// Builds the output format picker from the offered identifiers.
pub fn format_picker(formats: &[String]) -> TextResult<Picker> {
    Picker::new(formats.iter().map(|format| PickerOption::plain(format)).collect())
}
