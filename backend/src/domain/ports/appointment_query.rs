//! Driving port for appointment reads.

use async_trait::async_trait;

use crate::domain::{Appointment, Error};

#[async_trait]
pub trait AppointmentQuery: Send + Sync {
    /// Fetch one appointment on behalf of an authenticated caller.
    async fn get_by_id(&self, id: &str, token: Option<&str>) -> Result<Appointment, Error>;

    /// List every appointment. No token is required.
    async fn list(&self) -> Result<Vec<Appointment>, Error>;
}
