//! Account registration.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::error::Result;
use crate::router::Valid;
use crate::user::PublicUser;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[validate(email(message = "Email must be formatted."))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

/// Handler to create a user account.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<PublicUser>)> {
    let user =
        state
            .stores
            .users
            .register(&body.name, &body.email, &body.password)?;

    tracing::info!(user_id = %user.id, "account created");

    Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::*;
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_register_handler() {
        let state = router::state();
        let app = app(state.clone());

        let req_body = Body {
            name: "Ana".into(),
            email: "Ana@Example.COM".into(),
            password: "password123".into(),
        };
        let response = make_request(
            app,
            Method::POST,
            "/api/register",
            json!(req_body).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: PublicUser = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.name, "Ana");
        assert_eq!(body.email, "ana@example.com");
        assert!(state.stores.users.exists(&body.id));

        // The password must never be serialized back.
        let raw = json!(req_body).to_string();
        assert!(raw.contains("password123"));
        let echoed = serde_json::to_string(&body).unwrap();
        assert!(!echoed.contains("password123"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let state = router::state();
        let app = app(state.clone());

        state
            .stores
            .users
            .register("Ana", "ana@example.com", "password123")
            .unwrap();

        let response = make_request(
            app,
            Method::POST,
            "/api/register",
            json!({
                "name": "Impostor",
                "email": "ANA@example.com",
                "password": "different1",
            })
            .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_register_missing_field_is_rejected() {
        let app = app(router::state());

        let response = make_request(
            app.clone(),
            Method::POST,
            "/api/register",
            json!({ "name": "Ana", "email": "ana@example.com" }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = make_request(
            app,
            Method::POST,
            "/api/register",
            json!({ "name": "", "email": "ana@example.com", "password": "x" })
                .to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
