//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use nutriplan::Trace;
#[cfg(debug_assertions)]
use nutriplan::doc::ApiDoc;
use nutriplan::domain::{AppointmentService, QuestionnaireService};
use nutriplan::inbound::http::configure_api;
use nutriplan::inbound::http::health::{HealthState, live, ready};
use nutriplan::inbound::http::state::HttpState;
use nutriplan::outbound::{
    InMemoryAppointmentRepository, InMemoryClientDirectory, InMemoryQuestionnaireRepository,
    StaticTokenVerifier, UuidIdGenerator,
};

/// Wire the services over the in-process adapters described by `settings`.
fn build_http_state(settings: &ServerSettings) -> HttpState {
    let tokens = StaticTokenVerifier::new(
        settings
            .accepted_tokens()
            .iter()
            .map(|token| token.as_str().to_owned()),
    );
    if tokens.is_empty() {
        warn!("no accepted tokens configured; every protected request will be rejected");
    }
    let clients = settings.client_ids();
    info!(
        accepted_tokens = tokens.len(),
        clients = clients.len(),
        "in-memory adapters configured"
    );

    let tokens = Arc::new(tokens);
    let ids = Arc::new(UuidIdGenerator);
    let clients = Arc::new(InMemoryClientDirectory::new(clients));

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

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the loaded settings.
///
/// The returned [`Server`] must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when the bind address is invalid or binding
/// the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let bind_addr = settings.bind_addr()?;
    let http_state = web::Data::new(build_http_state(settings));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}
