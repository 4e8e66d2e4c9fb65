//! Driving port for booking appointments.

use async_trait::async_trait;

use crate::domain::{Appointment, AppointmentSubmission, Error};

#[async_trait]
pub trait AppointmentCommand: Send + Sync {
    /// Validate a booking request and persist it as a new appointment.
    async fn create(&self, submission: AppointmentSubmission) -> Result<Appointment, Error>;
}
