use crate::{User, UserFields, current_timestamp};

use chrono::{SubsecRound, TimeDelta};
use uuid::Uuid;

#[test]
fn test_user_new() {
    let user = User::new(&UserFields::new("John", 1337));

    assert_eq!(user.name, "John");
    assert_eq!(user.high_score, 1337);
    assert_eq!(user.created_at, user.updated_at);
    assert!(Uuid::parse_str(&user.id).is_ok());
    assert!(!user.is_deleted());
}

#[test]
fn test_user_new_generates_distinct_ids() {
    let fields = UserFields::new("John", 1);
    let first = User::new(&fields);
    let second = User::new(&fields);

    assert_ne!(first.id, second.id);
}

#[test]
fn test_user_is_deleted() {
    let mut user = User::new(&UserFields::new("John", 1));

    assert!(!user.is_deleted());

    user.deleted_at = Some(current_timestamp());
    assert!(user.is_deleted());
}

#[test]
fn test_replaced_with_keeps_identity_and_creation_time() {
    let original = User::new(&UserFields::new("John", 3500));
    let replaced = original.replaced_with(&UserFields::new("Jane", 2345));

    assert_eq!(replaced.id, original.id);
    assert_eq!(replaced.created_at, original.created_at);
    assert_eq!(replaced.name, "Jane");
    assert_eq!(replaced.high_score, 2345);
}

#[test]
fn test_replaced_with_advances_updated_at_even_without_clock_movement() {
    let mut original = User::new(&UserFields::new("John", 1));
    // Pretend the last write happened in the future relative to the local clock
    original.updated_at = current_timestamp() + TimeDelta::seconds(60);

    let replaced = original.replaced_with(&UserFields::new("John", 2));

    assert_eq!(
        replaced.updated_at,
        original.updated_at + TimeDelta::microseconds(1)
    );
}

#[test]
fn test_current_timestamp_has_microsecond_precision() {
    let now = current_timestamp();

    assert_eq!(now, now.trunc_subsecs(6));
}
