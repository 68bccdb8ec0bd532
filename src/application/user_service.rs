// User service - Use cases for console users
use crate::application::bookkeeping_api::BookkeepingApi;
use crate::domain::user::{User, UserNew};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    api: Arc<dyn BookkeepingApi>,
}

impl UserService {
    pub fn new(api: Arc<dyn BookkeepingApi>) -> Self {
        Self { api }
    }

    pub async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let mut users = self.api.list_users().await?;
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    pub async fn get_user(&self, user_id: &str) -> anyhow::Result<User> {
        self.api.get_user(user_id).await
    }

    pub async fn create_user(&self, form: &UserNew) -> anyhow::Result<User> {
        let user = self.api.create_user(form).await?;
        tracing::info!("Created user {}", user.id);
        Ok(user)
    }
}
