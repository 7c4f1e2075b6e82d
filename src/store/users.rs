//! Handle user records.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::error::{Result, ServerError};
use crate::user::User;

/// In-memory user collection. Cloning shares the backing storage.
#[derive(Debug, Default, Clone)]
pub struct UserStore {
    records: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    /// Create an empty [`UserStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user, failing when the normalized email is already
    /// taken.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User> {
        let email = email.to_lowercase();
        let mut records =
            self.records.write().unwrap_or_else(|err| err.into_inner());

        if records.iter().any(|user| user.email == email) {
            return Err(ServerError::EmailTaken);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            email,
            password: password.to_owned(),
        };
        records.push(user.clone());

        Ok(user)
    }

    /// Exact match on normalized email and password.
    ///
    /// Unknown email and wrong password are indistinguishable from
    /// the returned error.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let email = email.to_lowercase();
        let records =
            self.records.read().unwrap_or_else(|err| err.into_inner());

        records
            .iter()
            .find(|user| user.email == email && user.password == password)
            .cloned()
            .ok_or(ServerError::InvalidCredentials)
    }

    /// Whether a user with this id is registered.
    pub fn exists(&self, user_id: &str) -> bool {
        self.records
            .read()
            .unwrap_or_else(|err| err.into_inner())
            .iter()
            .any(|user| user.id == user_id)
    }
}
