//! Port for appointment persistence.

use async_trait::async_trait;

use crate::domain::{Appointment, AppointmentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by appointment repository adapters.
    pub enum AppointmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "appointment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "appointment repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Store a newly booked appointment.
    async fn create(&self, appointment: &Appointment) -> Result<(), AppointmentRepositoryError>;

    /// Fetch an appointment by identifier.
    async fn find_by_id(
        &self,
        id: &AppointmentId,
    ) -> Result<Option<Appointment>, AppointmentRepositoryError>;

    /// Fetch every stored appointment.
    async fn list(&self) -> Result<Vec<Appointment>, AppointmentRepositoryError>;
}
