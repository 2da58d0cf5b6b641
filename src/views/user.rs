use crate::models;
use serde::Serialize;
use std::convert::From;

/// Caller-facing projection of a provider user record.
#[derive(Debug, Serialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Option<String>,
}

impl From<models::User> for Profile {
    fn from(user: models::User) -> Self {
        Self {
            name: user.full_name(),
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}
