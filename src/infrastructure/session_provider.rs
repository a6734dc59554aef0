// Auth provider backed by a configured profile
use crate::application::auth_provider::AuthProvider;
use crate::domain::session::User;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Hands out one configured user on sign-in. Stands in for an OAuth provider
/// in deployments where the dashboard sits behind an authenticating proxy.
pub struct ConfiguredAuthProvider {
    profile: Option<User>,
    session: RwLock<Option<User>>,
}

impl ConfiguredAuthProvider {
    pub fn new(profile: Option<User>, signed_in: bool) -> Self {
        let session = if signed_in { profile.clone() } else { None };
        Self {
            profile,
            session: RwLock::new(session),
        }
    }
}

#[async_trait]
impl AuthProvider for ConfiguredAuthProvider {
    async fn current_session(&self) -> Option<User> {
        self.session.read().await.clone()
    }

    async fn sign_in(&self) -> anyhow::Result<User> {
        let user = self
            .profile
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no user profile configured for sign-in"))?;
        *self.session.write().await = Some(user.clone());
        tracing::info!(email = %user.email, "signed in");
        Ok(user)
    }

    async fn sign_out(&self) -> anyhow::Result<()> {
        if let Some(user) = self.session.write().await.take() {
            tracing::info!(email = %user.email, "signed out");
        }
        Ok(())
    }
}
