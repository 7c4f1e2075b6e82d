//! Client-side application: typed API access and view state.
//!
//! [`ApiClient`] talks to the server; [`Session`] holds the authenticated
//! user and the local appointment cache, mirroring the browser UI flow.

mod api;
mod session;

pub use api::{ApiClient, AppointmentForm, ClientError};
pub use session::{Modal, RegistrationForm, Session, Stats, View};
