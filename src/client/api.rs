//! Typed HTTP access to the appointment API.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::appointment::{Appointment, Status};
use crate::user::PublicUser;

/// Client-side errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// The request never completed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Subset of the server error body worth surfacing to the user.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    title: String,
    #[serde(default)]
    detail: String,
}

/// Editable appointment fields, as sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct AppointmentForm {
    #[validate(length(min = 1, message = "Date is required."))]
    pub date: String,
    #[validate(length(min = 1, message = "Time is required."))]
    pub time: String,
    #[validate(length(min = 1, message = "Service is required."))]
    pub service: String,
    #[validate(length(min = 1, message = "Client is required."))]
    pub client: String,
    pub status: Status,
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// Create a client targeting `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();

        Self {
            http: Client::new(),
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    /// `POST /api/register`.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<PublicUser, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/register", self.base))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// `POST /api/login`.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<PublicUser, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/login", self.base))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// `GET /api/users/:userId/appointments`.
    pub async fn appointments(
        &self,
        user_id: &str,
    ) -> Result<Vec<Appointment>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/users/{user_id}/appointments", self.base))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// `POST /api/users/:userId/appointments`.
    pub async fn create_appointment(
        &self,
        user_id: &str,
        form: &AppointmentForm,
    ) -> Result<Appointment, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/users/{user_id}/appointments", self.base))
            .json(form)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// `PUT /api/users/:userId/appointments/:id`.
    pub async fn update_appointment(
        &self,
        user_id: &str,
        id: &str,
        form: &AppointmentForm,
    ) -> Result<Appointment, ClientError> {
        let response = self
            .http
            .put(format!(
                "{}/api/users/{user_id}/appointments/{id}",
                self.base
            ))
            .json(form)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// `DELETE /api/users/:userId/appointments/:id`. Empty body expected.
    pub async fn delete_appointment(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!(
                "{}/api/users/{user_id}/appointments/{id}",
                self.base
            ))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::api_error(status, response).await)
        }
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::api_error(status, response).await)
        }
    }

    async fn api_error(status: StatusCode, response: Response) -> ClientError {
        let detail = match response.json::<ErrorBody>().await {
            Ok(body) if !body.detail.is_empty() => body.detail,
            Ok(body) => body.title,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned(),
        };

        ClientError::Api {
            status: status.as_u16(),
            detail,
        }
    }
}
