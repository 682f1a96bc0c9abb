use crate::ValidationError;

use basket_config::ValidationConfig;

/// Trimmed login form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub identifier: String,
    pub password: String,
}

/// Trimmed registration form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub phone: String,
    pub username: String,
    pub password: String,
}

/// Syntactic checks for the login and registration forms.
///
/// Pure: never touches storage, never panics on any string input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidator {
    min_phone_digits: usize,
    min_password_length: usize,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl FieldValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            min_phone_digits: config.min_phone_digits,
            min_password_length: config.min_password_length,
        }
    }

    pub fn min_phone_digits(&self) -> usize {
        self.min_phone_digits
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    /// Both fields must be non-empty after trimming.
    pub fn validate_login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<LoginInput, ValidationError> {
        let identifier = trim_field(identifier);
        let password = trim_field(password);

        if identifier.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(LoginInput {
            identifier: identifier.to_string(),
            password: password.to_string(),
        })
    }

    /// Checks, in order: name present, name without digits, phone digit
    /// count, username present, password length. Stops at the first failure.
    pub fn validate_registration(
        &self,
        name: &str,
        phone: &str,
        username: &str,
        password: &str,
    ) -> Result<RegistrationInput, ValidationError> {
        let name = trim_field(name);
        let phone = trim_field(phone);
        let username = trim_field(username);
        let password = trim_field(password);

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if name.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NameContainsDigits);
        }

        if phone_digits(phone).len() < self.min_phone_digits {
            return Err(ValidationError::InvalidPhone {
                min_digits: self.min_phone_digits,
            });
        }

        if username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }

        if password_length(password) < self.min_password_length {
            return Err(ValidationError::PasswordTooShort {
                min_length: self.min_password_length,
            });
        }

        Ok(RegistrationInput {
            name: name.to_string(),
            phone: phone.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Strips surrounding whitespace, including the byte order mark that form
/// inputs pick up from pasted text.
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Password length in UTF-16 code units, the unit browser form fields count in.
/// Characters outside the Basic Multilingual Plane count twice.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Digits-only projection of a phone number: `"+34 600-000"` becomes `"34600000"`.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// [`FieldValidator::validate_login`] with the default limits.
pub fn validate_login(identifier: &str, password: &str) -> Result<LoginInput, ValidationError> {
    FieldValidator::default().validate_login(identifier, password)
}

/// [`FieldValidator::validate_registration`] with the default limits.
pub fn validate_registration(
    name: &str,
    phone: &str,
    username: &str,
    password: &str,
) -> Result<RegistrationInput, ValidationError> {
    FieldValidator::default().validate_registration(name, phone, username, password)
}
