pub mod field_validator;
pub mod validation_error;
