use thiserror::Error;

/// Why a login or registration form was rejected.
///
/// Registration reports only the first failing rule, in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("Enter your username or phone and password.")]
    MissingFields,

    #[error("Name is required.")]
    EmptyName,

    #[error("Name cannot contain numbers.")]
    NameContainsDigits,

    #[error("Enter a valid phone number (at least {min_digits} digits).")]
    InvalidPhone { min_digits: usize },

    #[error("Username is required.")]
    EmptyUsername,

    #[error("Password must be at least {min_length} characters.")]
    PasswordTooShort { min_length: usize },
}

impl ValidationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFields => "missing-fields",
            Self::EmptyName => "empty-name",
            Self::NameContainsDigits => "name-contains-digits",
            Self::InvalidPhone { .. } => "invalid-phone",
            Self::EmptyUsername => "empty-username",
            Self::PasswordTooShort { .. } => "password-too-short",
        }
    }

    /// Short message for display next to the form.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
