use crate::{
    FieldValidator, LoginInput, ValidationError, password_length, phone_digits, trim_field,
    validate_login, validate_registration,
};

use basket_config::ValidationConfig;
use googletest::assert_that;
use googletest::prelude::{eq, err, ok};

const VALID_PASSWORD: &str = "longpassword";

// =========================================================================
// Login
// =========================================================================

#[test]
fn given_identifier_and_password_when_validate_login_then_returns_trimmed_values() {
    // When
    let result = validate_login("  ana  ", " secret ");

    // Then
    assert_that!(
        result,
        ok(eq(&LoginInput {
            identifier: String::from("ana"),
            password: String::from("secret"),
        }))
    );
}

#[test]
fn given_short_password_when_validate_login_then_ok() {
    // Login does not apply the registration password length rule
    assert!(validate_login("ana", "x").is_ok());
}

#[test]
fn given_blank_field_when_validate_login_then_missing_fields() {
    let cases = [("", "secret"), ("ana", ""), ("   ", "secret"), ("ana", "\t\n"), ("", "")];

    for (identifier, password) in cases {
        assert_that!(
            validate_login(identifier, password),
            err(eq(&ValidationError::MissingFields))
        );
    }
}

// =========================================================================
// Registration - rule order
// =========================================================================

#[test]
fn given_blank_name_when_validate_registration_then_empty_name() {
    let result = validate_registration("   ", "", "", "");

    assert_that!(result, err(eq(&ValidationError::EmptyName)));
}

#[test]
fn given_name_with_digit_when_validate_registration_then_name_contains_digits_before_later_rules() {
    let result = validate_registration("Ana3", "600000000", "ana", VALID_PASSWORD);

    assert_that!(result, err(eq(&ValidationError::NameContainsDigits)));
}

#[test]
fn given_name_with_digit_and_every_other_field_invalid_when_validate_then_name_error_wins() {
    let result = validate_registration("R2D2", "", "", "");

    assert_that!(result, err(eq(&ValidationError::NameContainsDigits)));
}

#[test]
fn given_six_digit_phone_with_letters_when_validate_registration_then_invalid_phone() {
    let result = validate_registration("Ana", "12a3456", "ana", VALID_PASSWORD);

    assert_that!(
        result,
        err(eq(&ValidationError::InvalidPhone { min_digits: 7 }))
    );
}

#[test]
fn given_seven_digit_phone_with_letters_when_validate_registration_then_ok() {
    let result = validate_registration("Ana", "12a34567", "ana", VALID_PASSWORD);

    assert!(result.is_ok());
}

#[test]
fn given_long_raw_phone_with_few_digits_when_validate_registration_then_invalid_phone() {
    // Raw length is 11 but only 3 digits survive the projection
    let result = validate_registration("Ana", "+(1) -- 2 3", "ana", VALID_PASSWORD);

    assert_that!(
        result,
        err(eq(&ValidationError::InvalidPhone { min_digits: 7 }))
    );
}

#[test]
fn given_blank_username_when_validate_registration_then_empty_username() {
    let result = validate_registration("Ana", "+34 600 000 000", "  ", VALID_PASSWORD);

    assert_that!(result, err(eq(&ValidationError::EmptyUsername)));
}

#[test]
fn given_seven_char_password_when_validate_registration_then_password_too_short() {
    let result = validate_registration("Ana", "+34 600 000 000", "ana", "short12");

    assert_that!(
        result,
        err(eq(&ValidationError::PasswordTooShort { min_length: 8 }))
    );
}

#[test]
fn given_five_char_password_when_validate_registration_then_password_too_short() {
    let result = validate_registration("Ana", "+34 600 000 000", "ana", "short");

    assert_that!(
        result,
        err(eq(&ValidationError::PasswordTooShort { min_length: 8 }))
    );
}

#[test]
fn given_password_padded_with_spaces_when_validate_registration_then_length_is_trimmed() {
    let result = validate_registration("Ana", "+34 600 000 000", "ana", "   1234567   ");

    assert_that!(
        result,
        err(eq(&ValidationError::PasswordTooShort { min_length: 8 }))
    );
}

#[test]
fn given_multibyte_password_when_validate_registration_then_counts_characters() {
    // 8 characters, 16 bytes
    let result = validate_registration("Ana", "+34 600 000 000", "ana", "ññññññññ");

    assert!(result.is_ok());
}

#[test]
fn given_valid_form_when_validate_registration_then_returns_trimmed_values() {
    // When
    let input =
        validate_registration(" Ana María ", " +34 600 000 000 ", " ana ", " longpassword ")
            .unwrap();

    // Then
    assert_that!(input.name.as_str(), eq("Ana María"));
    assert_that!(input.phone.as_str(), eq("+34 600 000 000"));
    assert_that!(input.username.as_str(), eq("ana"));
    assert_that!(input.password.as_str(), eq("longpassword"));
}

#[test]
fn given_non_ascii_digit_in_name_when_validate_registration_then_accepted() {
    // Only ASCII 0-9 count as digits
    let result = validate_registration("Ana٣", "600000000", "ana", VALID_PASSWORD);

    assert!(result.is_ok());
}

// =========================================================================
// Configured limits
// =========================================================================

#[test]
fn given_stricter_config_when_validate_registration_then_uses_configured_limits() {
    // Given
    let validator = FieldValidator::new(&ValidationConfig {
        min_phone_digits: 9,
        min_password_length: 12,
    });

    // When
    let phone = validator.validate_registration("Ana", "60000000", "ana", "longpassword12");
    let short = validator.validate_registration("Ana", "600000000", "ana", "longpasswor");
    let exact = validator.validate_registration("Ana", "600000000", "ana", "longpassword");

    // Then
    assert_that!(
        phone,
        err(eq(&ValidationError::InvalidPhone { min_digits: 9 }))
    );
    assert_that!(
        short,
        err(eq(&ValidationError::PasswordTooShort { min_length: 12 }))
    );
    assert!(exact.is_ok());
}

// =========================================================================
// Text measurement
// =========================================================================

#[test]
fn given_astral_plane_password_when_validate_registration_then_counts_utf16_units() {
    // Given
    let four_emoji = "\u{1F600}\u{1F600}\u{1F600}\u{1F600}";
    let three_emoji = "\u{1F600}\u{1F600}\u{1F600}";

    // When
    let accepted = validate_registration("Ana", "+34 600 000 000", "ana", four_emoji);
    let rejected = validate_registration("Ana", "+34 600 000 000", "ana", three_emoji);

    // Then
    assert_that!(password_length(four_emoji), eq(8));
    assert!(accepted.is_ok());
    assert_that!(
        rejected,
        err(eq(&ValidationError::PasswordTooShort { min_length: 8 }))
    );
}

#[test]
fn given_byte_order_mark_name_when_validate_registration_then_empty_name() {
    // When
    let result = validate_registration("\u{FEFF}", "+34 600 000 000", "ana", VALID_PASSWORD);

    // Then
    assert_that!(result, err(eq(&ValidationError::EmptyName)));
}

#[test]
fn given_byte_order_mark_around_identifier_when_validate_login_then_stripped() {
    // When
    let result = validate_login("\u{FEFF} ana \u{FEFF}", "secret");

    // Then
    assert_that!(
        result,
        ok(eq(&LoginInput {
            identifier: String::from("ana"),
            password: String::from("secret"),
        }))
    );
    assert_that!(trim_field("\u{FEFF}\t\u{FEFF}"), eq(""));
}

#[test]
fn given_default_validator_when_inspected_then_uses_default_limits() {
    let validator = FieldValidator::default();

    assert_that!(validator.min_phone_digits(), eq(7));
    assert_that!(validator.min_password_length(), eq(8));
}

#[test]
fn given_formatted_phone_when_phone_digits_then_strips_everything_else() {
    assert_that!(phone_digits("+34 (600) 000-000").as_str(), eq("34600000000"));
    assert_that!(phone_digits("no digits").as_str(), eq(""));
}
