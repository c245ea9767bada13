use crate::{CoreError, UserFields};

#[test]
fn test_validate_accepts_regular_fields() {
    let fields = UserFields::new("John", 1337);

    assert!(fields.validate(100).is_ok());
}

#[test]
fn test_validate_accepts_zero_high_score() {
    let fields = UserFields::new("John", 0);

    assert!(fields.validate(100).is_ok());
}

#[test]
fn test_validate_rejects_blank_name() {
    let fields = UserFields::new("   ", 10);

    match fields.validate(100) {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("name")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_name_over_limit() {
    let fields = UserFields::new("abcdef", 10);

    assert!(fields.validate(5).is_err());
    assert!(fields.validate(6).is_ok());
}

#[test]
fn test_validate_counts_characters_not_bytes() {
    let fields = UserFields::new("ÅÄÖ", 10);

    assert!(fields.validate(3).is_ok());
}
