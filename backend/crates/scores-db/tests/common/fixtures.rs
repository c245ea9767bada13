use scores_core::UserFields;

/// Creates test fields with a recognisable name
pub fn create_test_fields(high_score: u32) -> UserFields {
    UserFields::new(format!("Player {}", high_score), high_score)
}
