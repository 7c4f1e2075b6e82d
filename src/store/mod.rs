//! Process-wide in-memory stores.
//!
//! The API layer never touches the backing collections directly; every
//! access goes through these handles so a persistent implementation could
//! be substituted without touching the routes.

mod appointments;
mod users;

pub use appointments::AppointmentStore;
pub use users::UserStore;

use axum::extract::FromRef;

use crate::AppState;

/// Union of the stores held by [`AppState`].
#[derive(Debug, Default, Clone)]
pub struct Stores {
    pub users: UserStore,
    pub appointments: AppointmentStore,
}

impl FromRef<AppState> for Stores {
    fn from_ref(state: &AppState) -> Stores {
        state.stores.clone()
    }
}
