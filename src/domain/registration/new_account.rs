use crate::domain::{PersonName, UserEmail, UserPassword};

/// A registration request that passed every rule.
///
/// Only [`RegistrationValidator::accept`](crate::domain::RegistrationValidator::accept)
/// builds one, and it is the only input a `RegistrationService` takes.
#[derive(Debug)]
pub struct NewAccount {
    pub(super) email: UserEmail,
    pub(super) password: UserPassword,
    pub(super) first_name: PersonName,
    pub(super) last_name: PersonName,
}

impl NewAccount {
    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn password(&self) -> &UserPassword {
        &self.password
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }
}
