use crate::ValidationError;

#[test]
fn given_each_kind_when_code_then_stable_identifier() {
    let cases = [
        (ValidationError::MissingFields, "missing-fields"),
        (ValidationError::EmptyName, "empty-name"),
        (ValidationError::NameContainsDigits, "name-contains-digits"),
        (ValidationError::InvalidPhone { min_digits: 7 }, "invalid-phone"),
        (ValidationError::EmptyUsername, "empty-username"),
        (
            ValidationError::PasswordTooShort { min_length: 8 },
            "password-too-short",
        ),
    ];

    for (error, code) in cases {
        assert_eq!(error.code(), code);
        assert!(!error.message().is_empty(), "empty message for {error:?}");
    }
}

#[test]
fn given_limit_carrying_kinds_when_message_then_mentions_limit() {
    assert!(
        ValidationError::InvalidPhone { min_digits: 9 }
            .message()
            .contains('9')
    );
    assert!(
        ValidationError::PasswordTooShort { min_length: 12 }
            .message()
            .contains("12")
    );
}
