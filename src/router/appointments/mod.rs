//! Appointments HTTP API, always scoped to the owning user.

mod create;
mod delete;
mod list;
mod update;

use axum::Router;
use axum::routing::{get, put};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `GET /` lists, `POST /` creates.
        .route("/", get(list::handler).post(create::handler))
        // `PUT /:ID` updates, `DELETE /:ID` removes.
        .route("/{id}", put(update::handler).delete(delete::handler))
}
