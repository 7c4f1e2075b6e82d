//! Create an appointment.

use axum::{Json, extract::Path, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::appointment::{Appointment, Draft, Status};
use crate::error::{Result, ServerError};
use crate::router::Valid;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 1, message = "Date is required."))]
    pub date: String,
    #[validate(length(min = 1, message = "Time is required."))]
    pub time: String,
    #[validate(length(min = 1, message = "Service is required."))]
    pub service: String,
    #[validate(length(min = 1, message = "Client is required."))]
    pub client: String,
    /// Defaults to `pending` when omitted.
    #[serde(default)]
    pub status: Status,
}

/// Handler to create an appointment for an existing user.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<Appointment>)> {
    if !state.stores.users.exists(&user_id) {
        return Err(ServerError::UserNotFound);
    }

    let appointment = state.stores.appointments.create(
        &user_id,
        Draft {
            date: body.date,
            time: body.time,
            service: body.service,
            client: body.client,
            status: body.status,
        },
    );

    tracing::info!(
        appointment_id = %appointment.id,
        user_id = %user_id,
        "appointment created"
    );

    Ok((StatusCode::CREATED, Json(appointment)))
}
