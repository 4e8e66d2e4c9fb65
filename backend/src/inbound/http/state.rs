//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AppointmentCommand, AppointmentQuery, QuestionnaireCommand, QuestionnaireQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub questionnaires: Arc<dyn QuestionnaireCommand>,
    pub questionnaires_query: Arc<dyn QuestionnaireQuery>,
    pub appointments: Arc<dyn AppointmentCommand>,
    pub appointments_query: Arc<dyn AppointmentQuery>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// A single service usually implements both the command and query side;
    /// pass the same `Arc` twice in that case.
    pub fn new(
        questionnaires: Arc<dyn QuestionnaireCommand>,
        questionnaires_query: Arc<dyn QuestionnaireQuery>,
        appointments: Arc<dyn AppointmentCommand>,
        appointments_query: Arc<dyn AppointmentQuery>,
    ) -> Self {
        Self {
            questionnaires,
            questionnaires_query,
            appointments,
            appointments_query,
        }
    }
}
