use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use parking_registration::domain::{NewAccount, RegistrationRequest, RegistrationValidator, User};
use parking_registration::registration_client::HttpRegistrationClient;
use parking_registration::telemetry;
use parking_registration::{
    RegistrationFlow, RegistrationForm, RegistrationResult, RegistrationService, ServiceError,
    Session,
};
use reqwest::Url;
use secrecy::Secret;
use uuid::Uuid;
use wiremock::MockServer;

static TRACING: OnceLock<()> = OnceLock::new();

pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();

        if std::env::var("TEST_LOG").is_ok() {
            let subscriber =
                telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
            telemetry::init_subscriber(subscriber);
        } else {
            let subscriber =
                telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            telemetry::init_subscriber(subscriber);
        };
    });
}

#[derive(Debug)]
pub struct TestUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl TestUser {
    pub fn generate() -> Self {
        Self {
            email: format!("{}@gmail.com", Uuid::new_v4()),
            password: Uuid::new_v4().to_string(),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
        }
    }

    pub fn request(&self) -> RegistrationRequest {
        RegistrationRequest::new(
            self.email.as_str(),
            self.password.as_str(),
            self.password.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
        )
    }

    pub fn form(&self) -> RegistrationForm {
        RegistrationForm {
            email: self.email.clone(),
            password: Secret::new(self.password.clone()),
            password_confirmation: Secret::new(self.password.clone()),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    pub fn created_user_body(&self) -> serde_json::Value {
        serde_json::json!({
            "id": Uuid::new_v4(),
            "email": self.email,
            "first_name": self.first_name,
            "last_name": self.last_name,
        })
    }
}

/// What a [`ScriptedService`] answers once its delay has passed.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Created,
    EmailTaken,
    Unavailable,
}

pub struct ScriptedService {
    reply: Reply,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedService {
    pub fn new(reply: Reply) -> Self {
        Self::delayed(reply, Duration::ZERO)
    }

    pub fn delayed(reply: Reply, delay: Duration) -> Self {
        Self {
            reply,
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrationService for ScriptedService {
    async fn create_user(&self, account: &NewAccount) -> RegistrationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;

        match self.reply {
            Reply::Created => RegistrationResult::Created(User {
                id: Uuid::new_v4(),
                email: account.email().to_string(),
                first_name: account.first_name().to_string(),
                last_name: account.last_name().to_string(),
            }),
            Reply::EmailTaken => RegistrationResult::EmailAlreadyTaken,
            Reply::Unavailable => RegistrationResult::ServiceError(ServiceError::UnexpectedError(
                anyhow::anyhow!("connection reset by peer"),
            )),
        }
    }
}

pub struct TestFlow {
    pub flow: RegistrationFlow,
    pub service: Arc<ScriptedService>,
    pub session: Arc<Session>,
}

pub fn flow_with(service: ScriptedService, submit_timeout: Duration) -> TestFlow {
    init_tracing();

    let service = Arc::new(service);
    let session = Arc::new(Session::default());
    let flow = RegistrationFlow::new(
        service.clone(),
        RegistrationValidator::default(),
        session.clone(),
        submit_timeout,
    );

    TestFlow {
        flow,
        service,
        session,
    }
}

pub struct TestApp {
    pub flow: RegistrationFlow,
    pub session: Arc<Session>,
    pub service_server: MockServer,
    pub test_user: TestUser,
}

/// A flow talking HTTP to a wiremock stand-in for the registration service.
pub async fn spawn_app() -> TestApp {
    init_tracing();

    let service_server = MockServer::start().await;
    let client = HttpRegistrationClient::new(
        Url::parse(&service_server.uri()).expect("Mock server URI should be a valid URL"),
        Secret::new(Uuid::new_v4().to_string()),
        Duration::from_millis(500),
    )
    .expect("Failed to build the registration client");

    let session = Arc::new(Session::default());
    let flow = RegistrationFlow::new(
        Arc::new(client),
        RegistrationValidator::default(),
        session.clone(),
        Duration::from_secs(2),
    );

    TestApp {
        flow,
        session,
        service_server,
        test_user: TestUser::generate(),
    }
}
