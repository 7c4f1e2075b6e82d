//! Update an appointment.

use axum::{Json, extract::Path, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::appointment::{Appointment, Patch, Status};
use crate::error::Result;
use crate::router::Valid;

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct Body {
    pub date: Option<String>,
    pub time: Option<String>,
    pub service: Option<String>,
    pub client: Option<String>,
    pub status: Option<Status>,
}

/// Handler to merge new fields into an owned appointment.
pub async fn handler(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, String)>,
    Valid(body): Valid<Body>,
) -> Result<Json<Appointment>> {
    let appointment = state.stores.appointments.update(
        &user_id,
        &id,
        Patch {
            date: body.date,
            time: body.time,
            service: body.service,
            client: body.client,
            status: body.status,
        },
    )?;

    Ok(Json(appointment))
}
