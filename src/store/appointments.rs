//! Handle appointment records.

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::appointment::{Appointment, Draft, Patch};
use crate::error::{Result, ServerError};

/// In-memory appointment collection. Cloning shares the backing storage.
///
/// Every lookup is scoped by the owning user: an id belonging to another
/// user behaves exactly like a missing id.
#[derive(Debug, Default, Clone)]
pub struct AppointmentStore {
    records: Arc<RwLock<Vec<Appointment>>>,
}

impl AppointmentStore {
    /// Create an empty [`AppointmentStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// All appointments owned by `user_id`, in insertion order.
    pub fn list_by_user(&self, user_id: &str) -> Vec<Appointment> {
        self.records
            .read()
            .unwrap_or_else(|err| err.into_inner())
            .iter()
            .filter(|appointment| appointment.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Append a new appointment for `user_id`.
    pub fn create(&self, user_id: &str, draft: Draft) -> Appointment {
        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_owned(),
            date: draft.date,
            time: draft.time,
            service: draft.service,
            client: draft.client,
            status: draft.status,
        };

        self.records
            .write()
            .unwrap_or_else(|err| err.into_inner())
            .push(appointment.clone());

        appointment
    }

    /// Merge `patch` into the appointment matching both `id` and
    /// `user_id`. Absent fields keep their previous value.
    pub fn update(
        &self,
        user_id: &str,
        id: &str,
        patch: Patch,
    ) -> Result<Appointment> {
        let mut records =
            self.records.write().unwrap_or_else(|err| err.into_inner());

        // Compound-key lookup: id alone must never match.
        let appointment = records
            .iter_mut()
            .find(|a| a.id == id && a.user_id == user_id)
            .ok_or(ServerError::AppointmentNotFound)?;

        if let Some(date) = patch.date {
            appointment.date = date;
        }
        if let Some(time) = patch.time {
            appointment.time = time;
        }
        if let Some(service) = patch.service {
            appointment.service = service;
        }
        if let Some(client) = patch.client {
            appointment.client = client;
        }
        if let Some(status) = patch.status {
            appointment.status = status;
        }

        Ok(appointment.clone())
    }

    /// Remove the appointment matching both `id` and `user_id`.
    pub fn delete(&self, user_id: &str, id: &str) -> Result<()> {
        let mut records =
            self.records.write().unwrap_or_else(|err| err.into_inner());

        let index = records
            .iter()
            .position(|a| a.id == id && a.user_id == user_id)
            .ok_or(ServerError::AppointmentNotFound)?;
        records.remove(index);

        Ok(())
    }
}
