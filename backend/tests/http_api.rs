//! HTTP-level tests for the assembled API, including request tracing.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, test, web};
use nutriplan::Trace;
use nutriplan::domain::{AppointmentService, ClientId, QuestionnaireService, TRACE_ID_HEADER};
use nutriplan::inbound::http::configure_api;
use nutriplan::inbound::http::state::HttpState;
use nutriplan::outbound::{
    InMemoryAppointmentRepository, InMemoryClientDirectory, InMemoryQuestionnaireRepository,
    StaticTokenVerifier, UuidIdGenerator,
};
use serde_json::{Value, json};

const TOKEN: &str = "integration-token";

fn state() -> HttpState {
    let tokens = Arc::new(StaticTokenVerifier::new([TOKEN]));
    let ids = Arc::new(UuidIdGenerator);
    let clients = Arc::new(InMemoryClientDirectory::new([
        ClientId::new("C1").expect("client id")
    ]));
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

#[actix_web::test]
async fn error_responses_carry_the_request_trace_id() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .wrap(Trace)
            .service(web::scope("/api/v1").configure(configure_api)),
    )
    .await;

    let request = test::TestRequest::post()
        .uri("/api/v1/appointments")
        .insert_header((AUTHORIZATION, TOKEN))
        .set_json(json!({
            "data": "15/03/2024",
            "hora": "14:30:00",
            "id_nutricionista": "N1",
            "id_cliente": "C1",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Missing input.");
    assert_eq!(body["details"]["field"], "status");
    assert_eq!(body["traceId"], header.as_str());
}

#[actix_web::test]
async fn listings_need_no_token() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .service(web::scope("/api/v1").configure(configure_api)),
    )
    .await;

    for uri in ["/api/v1/questionnaires", "/api/v1/appointments"] {
        let request = test::TestRequest::get().uri(uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["result"], json!([]), "{uri} starts empty");
    }
}
