use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_MIN_PHONE_DIGITS,
    MAX_MIN_PASSWORD_LENGTH, MAX_MIN_PHONE_DIGITS, MIN_MIN_PASSWORD_LENGTH, MIN_MIN_PHONE_DIGITS,
};

use serde::Deserialize;

/// Limits applied to the login and registration forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum number of digits left after stripping non-digits from the phone
    pub min_phone_digits: usize,
    /// Minimum password length in characters, after trimming
    pub min_password_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_phone_digits: DEFAULT_MIN_PHONE_DIGITS,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_phone_digits < MIN_MIN_PHONE_DIGITS
            || self.min_phone_digits > MAX_MIN_PHONE_DIGITS
        {
            return Err(ConfigError::validation(format!(
                "validation.min_phone_digits must be {}-{}, got {}",
                MIN_MIN_PHONE_DIGITS, MAX_MIN_PHONE_DIGITS, self.min_phone_digits
            )));
        }

        if self.min_password_length < MIN_MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_MIN_PASSWORD_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        Ok(())
    }
}
