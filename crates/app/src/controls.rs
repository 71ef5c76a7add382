use timetext_core::errors::{TextError, TextResult};

use crate::pickers::{NO_CONVERSION, Picker, TimezonePickers};

/// Current values of the output-affecting controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    user_timezone: Picker,
    recipient_timezone: Picker,
    output_format: Picker,
    granularity_options: Vec<u32>,
    granularity: u32,
}

impl Controls {
    pub fn new(
        timezones: TimezonePickers,
        output_format: Picker,
        granularity_options: Vec<u32>,
        granularity: u32,
    ) -> TextResult<Self> {
        validate_granularity(granularity)?;
        Ok(Self {
            user_timezone: timezones.user,
            recipient_timezone: timezones.recipient,
            output_format,
            granularity_options,
            granularity,
        })
    }

    pub fn user_timezone(&self) -> &str {
        self.user_timezone.selected_value()
    }

    /// The recipient timezone, or `None` at the "no conversion" sentinel.
    pub fn recipient_timezone(&self) -> Option<&str> {
        match self.recipient_timezone.selected_value() {
            NO_CONVERSION => None,
            timezone => Some(timezone),
        }
    }

    pub fn output_format(&self) -> &str {
        self.output_format.selected_value()
    }

    pub fn granularity(&self) -> u32 {
        self.granularity
    }

    pub fn granularity_options(&self) -> &[u32] {
        &self.granularity_options
    }

    pub fn user_timezone_picker(&self) -> &Picker {
        &self.user_timezone
    }

    pub fn recipient_timezone_picker(&self) -> &Picker {
        &self.recipient_timezone
    }

    pub fn output_format_picker(&self) -> &Picker {
        &self.output_format
    }

    pub fn set_user_timezone(&mut self, timezone: &str) -> TextResult<()> {
        self.user_timezone
            .select(timezone)
            .map_err(|_| TextError::UnknownTimezone(timezone.to_string()))
    }

    /// Selects a recipient timezone; [`NO_CONVERSION`] disables conversion.
    pub fn set_recipient_timezone(&mut self, value: &str) -> TextResult<()> {
        self.recipient_timezone
            .select(value)
            .map_err(|_| TextError::UnknownTimezone(value.to_string()))
    }

    pub fn set_output_format(&mut self, format: &str) -> TextResult<()> {
        self.output_format.select(format)
    }

    /// Accepts any positive number of minutes, offered or not.
    pub fn set_granularity(&mut self, minutes: u32) -> TextResult<()> {
        validate_granularity(minutes)?;
        self.granularity = minutes;
        Ok(())
    }
}

fn validate_granularity(minutes: u32) -> TextResult<()> {
    if minutes == 0 {
        return Err(TextError::Validation(
            "Slot granularity must be a positive number of minutes".to_string(),
        ));
    }
    Ok(())
}
