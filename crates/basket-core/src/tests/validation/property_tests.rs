use crate::{ValidationError, validate_login, validate_registration};

use proptest::prelude::*;

// =========================================================================
// Property-Based Tests - Form Validation
// =========================================================================

proptest! {
    #[test]
    fn given_non_blank_pair_when_validate_login_then_succeeds(
        identifier in "[a-zA-Z0-9+@._-]{1,30}",
        password in "[ -~]{0,10}[!-~][ -~]{0,10}",
    ) {
        prop_assert!(validate_login(&identifier, &password).is_ok());
    }

    #[test]
    fn given_whitespace_identifier_when_validate_login_then_missing_fields(
        identifier in r"\s{0,10}",
        password in "[a-z]{1,20}",
    ) {
        prop_assert_eq!(
            validate_login(&identifier, &password),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn given_whitespace_password_when_validate_login_then_missing_fields(
        identifier in "[a-z]{1,20}",
        password in r"\s{0,10}",
    ) {
        prop_assert_eq!(
            validate_login(&identifier, &password),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn given_any_strings_when_validate_registration_then_never_panics(
        name in ".{0,20}",
        phone in ".{0,20}",
        username in ".{0,20}",
        password in ".{0,20}",
    ) {
        let _ = validate_registration(&name, &phone, &username, &password);
    }

    #[test]
    fn given_phone_with_separators_when_validate_registration_then_only_digit_count_matters(
        digits in "[0-9]{7,15}",
        separator in "[ .()+-]{0,3}",
    ) {
        let phone: String = digits
            .chars()
            .flat_map(|c| std::iter::once(c).chain(separator.chars()))
            .collect();

        prop_assert!(validate_registration("Ana", &phone, "ana", "longpassword").is_ok());
    }

    #[test]
    fn given_name_with_any_digit_when_validate_registration_then_name_contains_digits(
        prefix in "[a-zA-Z ]{0,10}",
        digit in "[0-9]",
        suffix in "[a-zA-Z ]{0,10}",
    ) {
        let name = format!("a{prefix}{digit}{suffix}");

        prop_assert_eq!(
            validate_registration(&name, "", "", "").map(|_| ()),
            Err(ValidationError::NameContainsDigits)
        );
    }
}
