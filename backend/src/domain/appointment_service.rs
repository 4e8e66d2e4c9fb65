//! Appointment domain service.
//!
//! Booking follows the same gate-validate-check-persist pipeline as
//! questionnaires, without the categorical vocabulary checks.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::appointment::validate_appointment;
use crate::domain::auth::{CREATE_GATE, LOOKUP_GATE, authorize, require_token, verify_token};
use crate::domain::ports::{
    AppointmentCommand, AppointmentQuery, AppointmentRepository, AppointmentRepositoryError,
    ClientRepository, ClientRepositoryError, IdGenerator, TokenVerifier,
};
use crate::domain::{Appointment, AppointmentId, AppointmentSubmission, Error, ErrorCode};

/// Appointment service implementing the driving ports.
#[derive(Clone)]
pub struct AppointmentService<T, G, C, A> {
    tokens: Arc<T>,
    ids: Arc<G>,
    clients: Arc<C>,
    appointments: Arc<A>,
}

impl<T, G, C, A> AppointmentService<T, G, C, A> {
    /// Create a new service from its collaborators.
    pub fn new(tokens: Arc<T>, ids: Arc<G>, clients: Arc<C>, appointments: Arc<A>) -> Self {
        Self {
            tokens,
            ids,
            clients,
            appointments,
        }
    }
}

impl<T, G, C, A> AppointmentService<T, G, C, A>
where
    T: TokenVerifier,
    G: IdGenerator,
    C: ClientRepository,
    A: AppointmentRepository,
{
    fn map_appointment_error(err: AppointmentRepositoryError) -> Error {
        error!(error = %err, "appointment repository failed");
        Error::internal(format!("appointment repository error: {err}"))
    }

    fn map_client_error(err: ClientRepositoryError) -> Error {
        error!(error = %err, "client repository failed");
        Error::internal(format!("client repository error: {err}"))
    }
}

#[async_trait]
impl<T, G, C, A> AppointmentCommand for AppointmentService<T, G, C, A>
where
    T: TokenVerifier,
    G: IdGenerator,
    C: ClientRepository,
    A: AppointmentRepository,
{
    async fn create(&self, submission: AppointmentSubmission) -> Result<Appointment, Error> {
        authorize(
            self.tokens.as_ref(),
            submission.token.as_deref(),
            CREATE_GATE,
        )
        .await?;
        let details = validate_appointment(&submission)?;

        let client = self
            .clients
            .find_by_id(&details.client_id)
            .await
            .map_err(Self::map_client_error)?;
        if client.is_none() {
            info!(client_id = %details.client_id, "appointment rejected: unknown client");
            return Err(Error::new(
                ErrorCode::ClientNotFound,
                "Client could not be found",
            ));
        }

        let id = AppointmentId::new(self.ids.generate())
            .map_err(|err| Error::internal(format!("identifier generator failed: {err}")))?;
        // The gate already proved the token is present.
        let booked_with = submission.token.unwrap_or_default();
        let appointment = Appointment::new(id, details, booked_with);
        self.appointments
            .create(&appointment)
            .await
            .map_err(Self::map_appointment_error)?;

        info!(
            appointment_id = %appointment.id,
            client_id = %appointment.client_id,
            nutritionist_id = %appointment.nutritionist_id,
            "appointment created"
        );
        Ok(appointment)
    }
}

#[async_trait]
impl<T, G, C, A> AppointmentQuery for AppointmentService<T, G, C, A>
where
    T: TokenVerifier,
    G: IdGenerator,
    C: ClientRepository,
    A: AppointmentRepository,
{
    async fn get_by_id(&self, id: &str, token: Option<&str>) -> Result<Appointment, Error> {
        let token = require_token(token, LOOKUP_GATE.missing)?;
        let id = match AppointmentId::new(id) {
            Ok(id) if !id.as_ref().trim().is_empty() => id,
            _ => return Err(Error::invalid_request("Insert a id_consulta please!")),
        };
        verify_token(self.tokens.as_ref(), Some(token), LOOKUP_GATE.invalid).await?;

        self.appointments
            .find_by_id(&id)
            .await
            .map_err(Self::map_appointment_error)?
            .ok_or_else(|| {
                Error::new(
                    ErrorCode::AppointmentNotFound,
                    "There is no query with that ID!",
                )
            })
    }

    async fn list(&self) -> Result<Vec<Appointment>, Error> {
        self.appointments
            .list()
            .await
            .map_err(Self::map_appointment_error)
    }
}

#[cfg(test)]
#[path = "appointment_service_tests.rs"]
mod tests;
