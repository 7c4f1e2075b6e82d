//! List a user's appointments.

use axum::Json;
use axum::extract::{Path, State};

use crate::appointment::Appointment;
use crate::error::{Result, ServerError};
use crate::AppState;

/// Handler returning every appointment owned by the user, in insertion
/// order.
pub async fn handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Appointment>>> {
    if !state.stores.users.exists(&user_id) {
        return Err(ServerError::UserNotFound);
    }

    Ok(Json(state.stores.appointments.list_by_user(&user_id)))
}
