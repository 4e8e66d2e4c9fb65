//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::{AppointmentService, ClientId, QuestionnaireService};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::outbound::{
    InMemoryAppointmentRepository, InMemoryClientDirectory, InMemoryQuestionnaireRepository,
    StaticTokenVerifier, UuidIdGenerator,
};

/// Token accepted by [`in_memory_state`].
pub const VALID_TOKEN: &str = "test-token";
/// Client registered by [`in_memory_state`].
pub const KNOWN_CLIENT: &str = "client-1";

/// Build handler state backed by the real services and in-memory adapters.
pub fn in_memory_state() -> HttpState {
    let tokens = Arc::new(StaticTokenVerifier::new([VALID_TOKEN]));
    let ids = Arc::new(UuidIdGenerator);
    let client_id = ClientId::new(KNOWN_CLIENT).expect("fixture client id");
    let clients = Arc::new(InMemoryClientDirectory::new([client_id]));

    let questionnaires = Arc::new(QuestionnaireService::new(
        tokens.clone(),
        ids.clone(),
        clients.clone(),
        Arc::new(InMemoryQuestionnaireRepository::new()),
    ));
    let appointments = Arc::new(AppointmentService::new(
        tokens,
        ids,
        clients,
        Arc::new(InMemoryAppointmentRepository::new()),
    ));
    HttpState::new(
        questionnaires.clone(),
        questionnaires,
        appointments.clone(),
        appointments,
    )
}

/// App exposing the `/api/v1` routes over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(web::scope("/api/v1").configure(configure_api))
}
