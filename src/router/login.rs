//! Account login.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::error::Result;
use crate::router::Valid;
use crate::user::PublicUser;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 1, message = "Email is required."))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

/// Handler to authenticate a user.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<Json<PublicUser>> {
    let user = state.stores.users.authenticate(&body.email, &body.password)?;

    Ok(Json(PublicUser::from(user)))
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::*;
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_handler() {
        let state = router::state();
        let app = app(state.clone());

        let registered = state
            .stores
            .users
            .register("Ana", "ana@example.com", "password123")
            .unwrap();

        let response = make_request(
            app,
            Method::POST,
            "/api/login",
            json!({ "email": "ANA@example.com", "password": "password123" })
                .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: PublicUser = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.id, registered.id);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let state = router::state();
        let app = app(state.clone());

        state
            .stores
            .users
            .register("Ana", "ana@example.com", "password123")
            .unwrap();

        let wrong_password = make_request(
            app.clone(),
            Method::POST,
            "/api/login",
            json!({ "email": "ana@example.com", "password": "nope12345" })
                .to_string(),
        )
        .await;
        let unknown_email = make_request(
            app,
            Method::POST,
            "/api/login",
            json!({ "email": "ghost@example.com", "password": "password123" })
                .to_string(),
        )
        .await;

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

        // Same body for both failure modes: nothing leaks.
        let first = wrong_password.into_body().collect().await.unwrap().to_bytes();
        let second = unknown_email.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_login_missing_field_is_rejected() {
        let app = app(router::state());

        let response = make_request(
            app,
            Method::POST,
            "/api/login",
            json!({ "email": "ana@example.com" }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
