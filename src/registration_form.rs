use secrecy::{ExposeSecret, Secret};

use crate::domain::RegistrationRequest;

/// The field values a front end keeps between submit attempts.
#[derive(Debug)]
pub struct RegistrationForm {
    pub email: String,
    pub password: Secret<String>,
    pub password_confirmation: Secret<String>,
    pub first_name: String,
    pub last_name: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: Secret::new(String::new()),
            password_confirmation: Secret::new(String::new()),
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}

impl RegistrationForm {
    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Resets password and confirmation, forcing the user to type both again.
    pub fn clear_passwords(&mut self) {
        self.password = Secret::new(String::new());
        self.password_confirmation = Secret::new(String::new());
    }

    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest::new(
            self.email.as_str(),
            self.password.expose_secret().as_str(),
            self.password_confirmation.expose_secret().as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
        )
    }
}
