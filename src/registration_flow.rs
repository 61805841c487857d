use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{Span, field};

use crate::domain::{RegistrationRequest, RegistrationValidator, ValidationReason};
use crate::notice::Notice;
use crate::registration_form::RegistrationForm;
use crate::registration_service::{RegistrationResult, RegistrationService, ServiceError};
use crate::session::Session;

/// Why a submit attempt ended without a verdict from the service.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("The registration request was rejected: {0}")]
    Rejected(ValidationReason),

    #[error("Another registration is already in progress.")]
    InProgress,

    #[error("The registration was cancelled.")]
    Cancelled,
}

/// Validates registration requests and submits the valid ones, one at a time.
pub struct RegistrationFlow {
    service: Arc<dyn RegistrationService>,
    validator: RegistrationValidator,
    session: Arc<Session>,
    submit_timeout: Duration,
    in_flight: Semaphore,
}

impl RegistrationFlow {
    pub fn new(
        service: Arc<dyn RegistrationService>,
        validator: RegistrationValidator,
        session: Arc<Session>,
        submit_timeout: Duration,
    ) -> Self {
        Self {
            service,
            validator,
            session,
            submit_timeout,
            in_flight: Semaphore::new(1),
        }
    }

    /// Runs one attempt: validate, then create the user.
    ///
    /// A second call made while an attempt is still running gets
    /// [`SubmitError::InProgress`]. Cancelling `cancel` drops the service
    /// call and leaves the session untouched.
    #[tracing::instrument(
        name = "Registering a new user",
        skip_all,
        fields(user_email = tracing::field::Empty)
    )]
    pub async fn register(
        &self,
        request: RegistrationRequest,
        cancel: &CancellationToken,
    ) -> Result<RegistrationResult, SubmitError> {
        // Held until this attempt returns or is dropped
        let _permit = self.in_flight.try_acquire().map_err(|_| {
            tracing::warn!("Ignoring a registration submitted while another is running");
            SubmitError::InProgress
        })?;

        let account = self.validator.accept(&request).map_err(|reason| {
            tracing::info!(%reason, "Registration request failed validation");
            SubmitError::Rejected(reason)
        })?;

        Span::current().record("user_email", field::display(account.email()));

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!("Registration cancelled before the service answered");
                return Err(SubmitError::Cancelled);
            }
            result = tokio::time::timeout(self.submit_timeout, self.service.create_user(&account)) => {
                result.unwrap_or_else(|_| {
                    RegistrationResult::ServiceError(ServiceError::Timeout(self.submit_timeout))
                })
            }
        };

        match &result {
            RegistrationResult::Created(user) => {
                tracing::info!(user_id = %user.id, "User created");
                self.session.sign_in(user.clone()).await;
            }
            RegistrationResult::EmailAlreadyTaken => {
                tracing::info!("Email address is already registered");
            }
            RegistrationResult::ServiceError(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to create the user"
                );
            }
        }

        Ok(result)
    }

    /// Submits the form and tells the caller what to show.
    ///
    /// Both password fields are wiped when the passwords differ or are too
    /// short. Returns `None` when the attempt was cancelled.
    pub async fn submit_form(
        &self,
        form: &mut RegistrationForm,
        cancel: &CancellationToken,
    ) -> Option<Notice> {
        let result = self.register(form.to_request(), cancel).await;

        if let Err(SubmitError::Rejected(reason)) = &result
            && reason.clears_passwords()
        {
            form.clear_passwords();
        }

        Notice::for_submission(&result)
    }
}
