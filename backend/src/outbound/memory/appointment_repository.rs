//! In-memory `AppointmentRepository` implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{AppointmentRepository, AppointmentRepositoryError};
use crate::domain::{Appointment, AppointmentId};

/// Appointment store kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryAppointmentRepository {
    records: RwLock<Vec<Appointment>>,
}

impl InMemoryAppointmentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create(&self, appointment: &Appointment) -> Result<(), AppointmentRepositoryError> {
        let mut records = self.records.write().await;
        if records.iter().any(|record| record.id == appointment.id) {
            debug!(appointment_id = %appointment.id, "duplicate appointment id");
            return Err(AppointmentRepositoryError::query(format!(
                "appointment {} already exists",
                appointment.id
            )));
        }
        records.push(appointment.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &AppointmentId,
    ) -> Result<Option<Appointment>, AppointmentRepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| &record.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Appointment>, AppointmentRepositoryError> {
        Ok(self.records.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClientId, NutritionistId};
    use chrono::{NaiveDate, NaiveTime};

    fn appointment(id: &str) -> Appointment {
        Appointment {
            id: AppointmentId::new(id).expect("appointment id"),
            date: NaiveDate::from_ymd_opt(2024, 12, 1).expect("date"),
            time: NaiveTime::from_hms_opt(9, 0, 0).expect("time"),
            status: "confirmada".to_owned(),
            notes: String::new(),
            nutritionist_id: NutritionistId::new("N1").expect("nutritionist id"),
            client_id: ClientId::new("C1").expect("client id"),
            booked_with: "T".to_owned(),
        }
    }

    #[tokio::test]
    async fn stores_and_finds_appointments() {
        let repository = InMemoryAppointmentRepository::new();
        repository
            .create(&appointment("A-1"))
            .await
            .expect("create succeeds");

        let id = AppointmentId::new("A-1").expect("appointment id");
        let found = repository.find_by_id(&id).await.expect("lookup succeeds");
        assert_eq!(found, Some(appointment("A-1")));

        let other = AppointmentId::new("A-2").expect("appointment id");
        assert!(
            repository
                .find_by_id(&other)
                .await
                .expect("lookup succeeds")
                .is_none()
        );
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected_and_list_is_unchanged() {
        let repository = InMemoryAppointmentRepository::new();
        repository
            .create(&appointment("A-1"))
            .await
            .expect("create succeeds");
        repository
            .create(&appointment("A-1"))
            .await
            .expect_err("duplicate rejected");

        assert_eq!(repository.list().await.expect("list succeeds").len(), 1);
    }
}
