use secrecy::Secret;

/// The raw fields of one registration attempt, exactly as typed.
#[derive(Debug)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: Secret<String>,
    pub password_confirmation: Secret<String>,
    pub first_name: String,
    pub last_name: String,
}

impl RegistrationRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: Secret::new(password.into()),
            password_confirmation: Secret::new(password_confirmation.into()),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
