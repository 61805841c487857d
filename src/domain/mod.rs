mod registration;
mod user;

pub use registration::*;
pub use user::*;
