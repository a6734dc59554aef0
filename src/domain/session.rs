// Signed-in user as reported by the auth provider
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub heading: String,
    pub email: String,
    pub image: String,
}

impl Profile {
    pub fn for_user(user: &User) -> Self {
        Self {
            heading: format!("{}'s Profile", user.name),
            email: user.email.clone(),
            image: user.image.clone().unwrap_or_default(),
        }
    }
}
