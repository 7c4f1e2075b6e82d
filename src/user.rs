//! User records.

use serde::{Deserialize, Serialize};

/// A registered account. Internal to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Normalized to lowercase, unique across the store.
    pub email: String,
    pub password: String,
}

/// Outward-facing view of a [`User`]. The password never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
