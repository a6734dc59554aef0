// Auth port - session state is owned by an external provider
use crate::domain::session::User;
use async_trait::async_trait;

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, or `None` for an anonymous visitor
    async fn current_session(&self) -> Option<User>;

    async fn sign_in(&self) -> anyhow::Result<User>;

    async fn sign_out(&self) -> anyhow::Result<()>;
}
