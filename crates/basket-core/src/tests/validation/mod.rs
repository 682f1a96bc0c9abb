mod field_validator;
mod property_tests;
mod validation_error;
