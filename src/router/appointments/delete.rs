//! Delete an appointment.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::error::Result;

/// Handler to remove an owned appointment. Empty body on success.
pub async fn handler(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<StatusCode> {
    state.stores.appointments.delete(&user_id, &id)?;

    tracing::info!(appointment_id = %id, user_id = %user_id, "appointment deleted");

    Ok(StatusCode::NO_CONTENT)
}
