pub mod configuration;
pub mod domain;
pub mod notice;
pub mod registration_client;
pub mod registration_flow;
pub mod registration_form;
pub mod registration_service;
pub mod session;
pub mod telemetry;
pub mod utils;

pub use notice::Notice;
pub use registration_flow::{RegistrationFlow, SubmitError};
pub use registration_form::RegistrationForm;
pub use registration_service::{RegistrationResult, RegistrationService, ServiceError};
pub use session::Session;
