//! Domain types and form validation for the welcome screen.

pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::local_session::LocalSession;
pub use models::local_user::LocalUser;
pub use validation::field_validator::{
    FieldValidator, LoginInput, RegistrationInput, password_length, phone_digits, trim_field,
    validate_login, validate_registration,
};
pub use validation::validation_error::ValidationError;
