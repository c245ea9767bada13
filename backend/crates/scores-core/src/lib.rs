pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use models::user::{User, current_timestamp};
pub use models::user_fields::UserFields;
