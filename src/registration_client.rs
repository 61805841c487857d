use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};

use crate::domain::{NewAccount, User};
use crate::registration_service::{RegistrationResult, RegistrationService, ServiceError};

#[derive(Debug)]
pub struct HttpRegistrationClient {
    http_client: Client,
    base_url: Url,
    api_token: Secret<String>,
    timeout: Duration,
}

#[derive(serde::Serialize)]
struct CreateUserRequest<'a> {
    user: CreateUserFields<'a>,
}

#[derive(serde::Serialize)]
struct CreateUserFields<'a> {
    email: &'a str,
    password: &'a str,
    first_name: &'a str,
    last_name: &'a str,
}

impl HttpRegistrationClient {
    /// `users` is joined onto `base_url`, so any path it carries is kept:
    /// `https://host/api/v1` posts to `https://host/api/v1/users`.
    pub fn new(
        mut base_url: Url,
        api_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http_client,
            base_url,
            api_token,
            timeout,
        })
    }

    #[tracing::instrument(skip_all, fields(user_email = %account.email()))]
    async fn post_user(&self, account: &NewAccount) -> Result<RegistrationResult, ServiceError> {
        let url = self
            .base_url
            .join("users")
            .context("Failed to build the create-user URL")?;

        let request_body = CreateUserRequest {
            user: CreateUserFields {
                email: account.email().as_ref(),
                password: account.password().expose(),
                first_name: account.first_name().as_ref(),
                last_name: account.last_name().as_ref(),
            },
        };

        let response = self
            .http_client
            .post(url)
            .bearer_auth(self.api_token.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let user = response
                    .json::<User>()
                    .await
                    .map_err(|e| self.classify(e))?;
                Ok(RegistrationResult::Created(user))
            }
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Ok(RegistrationResult::EmailAlreadyTaken)
            }
            status => Err(ServiceError::UnexpectedStatus(status.as_u16())),
        }
    }

    fn classify(&self, e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout(self.timeout)
        } else if e.is_decode() {
            ServiceError::UnexpectedError(
                anyhow::Error::new(e).context("Failed to decode the created user"),
            )
        } else {
            ServiceError::Transport(e)
        }
    }
}

#[async_trait]
impl RegistrationService for HttpRegistrationClient {
    async fn create_user(&self, account: &NewAccount) -> RegistrationResult {
        self.post_user(account)
            .await
            .unwrap_or_else(RegistrationResult::ServiceError)
    }
}
