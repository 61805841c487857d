mod person_name;
mod user_email;
mod user_password;

pub use person_name::PersonName;
pub use user_email::UserEmail;
pub use user_password::{DEFAULT_MIN_PASSWORD_LENGTH, UserPassword};

use serde::Deserialize;
use uuid::Uuid;

/// An account as the registration service reports it after creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
