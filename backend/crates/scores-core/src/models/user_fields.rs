use crate::{CoreError, Result};

use serde::{Deserialize, Serialize};

/// The caller-mutable part of a user record.
///
/// Create and update both take a complete set of fields: an update replaces
/// every field listed here, so a field added later must also be required by
/// the request schema or it will be silently reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub high_score: u32,
}

impl UserFields {
    pub fn new(name: impl Into<String>, high_score: u32) -> Self {
        Self {
            name: name.into(),
            high_score,
        }
    }

    /// Check field constraints. `high_score` is range-checked by its type.
    pub fn validate(&self, max_name_length: usize) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "name is required"));
        }

        let length = self.name.chars().count();
        if length > max_name_length {
            return Err(CoreError::validation(
                "name",
                format!(
                    "name must be at most {} characters, got {}",
                    max_name_length, length
                ),
            ));
        }

        Ok(())
    }
}
