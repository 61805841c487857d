use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{NewAccount, User};
use crate::utils;

/// What the remote side made of a create-user call.
#[derive(Debug)]
pub enum RegistrationResult {
    Created(User),
    EmailAlreadyTaken,
    ServiceError(ServiceError),
}

#[derive(thiserror::Error)]
pub enum ServiceError {
    #[error("The registration service did not answer within {0:?}.")]
    Timeout(Duration),

    #[error("The registration service answered with unexpected status {0}.")]
    UnexpectedStatus(u16),

    #[error("Failed to reach the registration service.")]
    Transport(#[source] reqwest::Error),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

/// The remote collaborator that actually creates accounts.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    async fn create_user(&self, account: &NewAccount) -> RegistrationResult;
}
