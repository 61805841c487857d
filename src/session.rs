use tokio::sync::RwLock;

use crate::domain::User;

/// Holds at most one signed-in user.
#[derive(Debug, Default)]
pub struct Session {
    user: RwLock<Option<User>>,
}

impl Session {
    pub async fn sign_in(&self, user: User) {
        *self.user.write().await = Some(user);
    }

    pub async fn sign_out(&self) -> Option<User> {
        self.user.write().await.take()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }
}
