//! View-state machine for the booking front-end.
//!
//! Holds the authenticated user and a local appointment cache which is
//! merged optimistically after each mutation instead of re-fetching the
//! whole list.

use validator::{Validate, ValidationErrors};

use crate::appointment::{Appointment, Status};
use crate::client::AppointmentForm;
use crate::user::PublicUser;

/// Screens reachable from the navigation bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Login,
    Register,
    Home,
    Appointments,
}

/// Appointment modal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Create,
    Edit(String),
}

/// Registration form, validated before the request fires.
///
/// Mirrors the server-side rules, with the stricter 8-character
/// password minimum enforced only here.
#[derive(Debug, Clone, Validate)]
pub struct RegistrationForm {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[validate(email(message = "Email must be formatted."))]
    pub email: String,
    #[validate(length(
        min = 8,
        message = "Password must contain at least 8 characters."
    ))]
    pub password: String,
}

/// Dashboard counters over the local cache.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
}

/// Client-side application state.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<PublicUser>,
    appointments: Vec<Appointment>,
    view: View,
    modal: Modal,
    form: AppointmentForm,
    generation: u64,
}

impl Session {
    /// Fresh anonymous session on the login screen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&PublicUser> {
        self.user.as_ref()
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn form(&self) -> &AppointmentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AppointmentForm {
        &mut self.form
    }

    /// Switch between the anonymous screens. No-op once authenticated.
    pub fn show_register(&mut self) {
        if self.user.is_none() {
            self.view = View::Register;
        }
    }

    /// See [`Session::show_register`].
    pub fn show_login(&mut self) {
        if self.user.is_none() {
            self.view = View::Login;
        }
    }

    /// A successful registration keeps the session anonymous: the user
    /// still has to log in.
    pub fn registered(&mut self) {
        self.view = View::Login;
    }

    /// Login success. Returns the generation tag the caller must pass
    /// back with the fetched appointment list.
    pub fn login(&mut self, user: PublicUser) -> u64 {
        self.user = Some(user);
        self.view = View::Home;
        self.modal = Modal::Closed;
        self.appointments.clear();
        self.generation += 1;
        self.generation
    }

    /// Store a fetched appointment list.
    ///
    /// A response tagged with an old generation arrived after logout or
    /// after another login: it is discarded. Returns whether the list
    /// was applied.
    pub fn apply_appointments(
        &mut self,
        generation: u64,
        appointments: Vec<Appointment>,
    ) -> bool {
        if generation != self.generation || self.user.is_none() {
            return false;
        }

        self.appointments = appointments;
        true
    }

    /// Back to the anonymous login screen, local cache cleared.
    pub fn logout(&mut self) {
        self.user = None;
        self.appointments.clear();
        self.view = View::Login;
        self.modal = Modal::Closed;
        self.generation += 1;
    }

    /// Navigate to the appointments table. No-op while anonymous.
    pub fn show_appointments(&mut self) {
        if self.user.is_some() {
            self.view = View::Appointments;
        }
    }

    /// Navigate to the dashboard home. No-op while anonymous.
    pub fn show_home(&mut self) {
        if self.user.is_some() {
            self.view = View::Home;
        }
    }

    /// Open the modal: blank form for create, pre-filled for edit.
    pub fn open_modal(&mut self, appointment: Option<&Appointment>) {
        match appointment {
            Some(appointment) => {
                self.form = AppointmentForm {
                    date: appointment.date.clone(),
                    time: appointment.time.clone(),
                    service: appointment.service.clone(),
                    client: appointment.client.clone(),
                    status: appointment.status,
                };
                self.modal = Modal::Edit(appointment.id.clone());
            },
            None => {
                self.form = AppointmentForm::default();
                self.modal = Modal::Create;
            },
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Normalize and validate the modal form before submission.
    pub fn submit_form(&self) -> Result<AppointmentForm, ValidationErrors> {
        let mut form = self.form.clone();
        form.service = form.service.trim().to_owned();
        form.client = form.client.trim().to_owned();
        form.validate()?;

        Ok(form)
    }

    /// Merge a saved appointment into the local cache and close the
    /// modal. Works for both create and edit responses.
    pub fn merge_saved(&mut self, appointment: Appointment) {
        match self
            .appointments
            .iter_mut()
            .find(|a| a.id == appointment.id)
        {
            Some(existing) => *existing = appointment,
            None => self.appointments.push(appointment),
        }
        self.modal = Modal::Closed;
    }

    /// Drop a deleted appointment from the cache. Callers are expected
    /// to have passed their confirmation gate before the API call.
    pub fn remove(&mut self, id: &str) {
        self.appointments.retain(|a| a.id != id);
    }

    /// Dashboard counters over the local cache.
    pub fn stats(&self) -> Stats {
        let mut stats = Stats {
            total: self.appointments.len(),
            ..Default::default()
        };

        for appointment in &self.appointments {
            match appointment.status {
                Status::Pending => stats.pending += 1,
                Status::Confirmed => stats.confirmed += 1,
                Status::Cancelled => stats.cancelled += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> PublicUser {
        PublicUser {
            id: id.into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
        }
    }

    fn appointment(id: &str, status: Status) -> Appointment {
        Appointment {
            id: id.into(),
            user_id: "u1".into(),
            date: "2025-01-01".into(),
            time: "10:30".into(),
            service: "Haircut".into(),
            client: "John".into(),
            status,
        }
    }

    #[test]
    fn test_registration_password_rule() {
        let form = RegistrationForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "short".into(),
        };
        assert!(form.validate().is_err());

        let form = RegistrationForm {
            password: "password123".into(),
            ..form
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_registered_stays_anonymous() {
        let mut session = Session::new();
        session.show_register();
        assert_eq!(session.view(), View::Register);

        session.registered();
        assert!(session.user().is_none());
        assert_eq!(session.view(), View::Login);
    }

    #[test]
    fn test_login_then_apply_fetch() {
        let mut session = Session::new();
        let generation = session.login(user("u1"));

        assert_eq!(session.view(), View::Home);
        assert!(session.apply_appointments(
            generation,
            vec![appointment("a1", Status::Pending)]
        ));
        assert_eq!(session.appointments().len(), 1);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut session = Session::new();
        let stale = session.login(user("u1"));

        // Identity changes before the response arrives.
        let fresh = session.login(user("u2"));
        assert!(!session
            .apply_appointments(stale, vec![appointment("a1", Status::Pending)]));
        assert!(session.appointments().is_empty());

        // Logout also invalidates in-flight fetches.
        session.logout();
        assert!(!session.apply_appointments(fresh, vec![]));
        assert_eq!(session.view(), View::Login);
    }

    #[test]
    fn test_logout_clears_cache() {
        let mut session = Session::new();
        let generation = session.login(user("u1"));
        session.apply_appointments(
            generation,
            vec![appointment("a1", Status::Pending)],
        );

        session.logout();
        assert!(session.user().is_none());
        assert!(session.appointments().is_empty());
    }

    #[test]
    fn test_modal_prefill_and_blank() {
        let mut session = Session::new();
        session.login(user("u1"));

        let existing = appointment("a1", Status::Confirmed);
        session.open_modal(Some(&existing));
        assert_eq!(session.modal(), &Modal::Edit("a1".into()));
        assert_eq!(session.form().service, "Haircut");
        assert_eq!(session.form().status, Status::Confirmed);

        session.open_modal(None);
        assert_eq!(session.modal(), &Modal::Create);
        assert_eq!(session.form(), &AppointmentForm::default());
        assert_eq!(session.form().status, Status::Pending);
    }

    #[test]
    fn test_submit_form_trims_and_validates() {
        let mut session = Session::new();
        session.login(user("u1"));
        session.open_modal(None);

        // Whitespace-only fields fail after trimming.
        session.form_mut().date = "2025-01-01".into();
        session.form_mut().time = "10:30".into();
        session.form_mut().service = "   ".into();
        session.form_mut().client = " John ".into();
        assert!(session.submit_form().is_err());

        session.form_mut().service = " Haircut ".into();
        let form = session.submit_form().unwrap();
        assert_eq!(form.service, "Haircut");
        assert_eq!(form.client, "John");
    }

    #[test]
    fn test_merge_saved_upserts_and_closes_modal() {
        let mut session = Session::new();
        let generation = session.login(user("u1"));
        session.apply_appointments(
            generation,
            vec![appointment("a1", Status::Pending)],
        );

        // Create path: new id appended.
        session.open_modal(None);
        session.merge_saved(appointment("a2", Status::Pending));
        assert_eq!(session.appointments().len(), 2);
        assert_eq!(session.modal(), &Modal::Closed);

        // Edit path: existing id replaced in place.
        session.open_modal(Some(&appointment("a1", Status::Pending)));
        session.merge_saved(appointment("a1", Status::Cancelled));
        assert_eq!(session.appointments().len(), 2);
        assert_eq!(session.appointments()[0].status, Status::Cancelled);
    }

    #[test]
    fn test_remove_and_stats() {
        let mut session = Session::new();
        let generation = session.login(user("u1"));
        session.apply_appointments(
            generation,
            vec![
                appointment("a1", Status::Pending),
                appointment("a2", Status::Confirmed),
                appointment("a3", Status::Cancelled),
            ],
        );

        session.remove("a2");
        assert_eq!(
            session.stats(),
            Stats {
                total: 2,
                pending: 1,
                confirmed: 0,
                cancelled: 1,
            }
        );
    }
}
