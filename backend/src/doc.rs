//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the request and response DTOs,
//! and the `Authorization` header scheme. Swagger UI serves it in debug
//! builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    Allergy, Avatar, DietaryRestriction, Error, ErrorCode, Gender, Goal, MealPrepTime,
    NumericInput, PhysicalActivity, SubscriptionTier,
};
use crate::inbound::http::appointments::{
    AppointmentFoundResponse, AppointmentListResponse, AppointmentRequest, AppointmentResponse,
    AppointmentResultResponse,
};
use crate::inbound::http::questionnaires::{
    PlanRequest, QuestionnaireFoundResponse, QuestionnaireListResponse, QuestionnaireRequest,
    QuestionnaireResponse, QuestionnaireResultResponse,
};

/// Enrich the generated document with the caller token scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "CallerToken",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "Opaque caller token, sent verbatim.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Nutriplan API",
        description = "Questionnaire intake and appointment booking for nutrition plans."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::questionnaires::create_questionnaire,
        crate::inbound::http::questionnaires::list_questionnaires,
        crate::inbound::http::questionnaires::get_questionnaire,
        crate::inbound::http::questionnaires::update_questionnaire_plan,
        crate::inbound::http::appointments::create_appointment,
        crate::inbound::http::appointments::list_appointments,
        crate::inbound::http::appointments::get_appointment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        NumericInput,
        Goal,
        Gender,
        PhysicalActivity,
        DietaryRestriction,
        MealPrepTime,
        Allergy,
        Avatar,
        SubscriptionTier,
        QuestionnaireRequest,
        PlanRequest,
        QuestionnaireResponse,
        QuestionnaireResultResponse,
        QuestionnaireFoundResponse,
        QuestionnaireListResponse,
        AppointmentRequest,
        AppointmentResponse,
        AppointmentResultResponse,
        AppointmentFoundResponse,
        AppointmentListResponse,
    )),
    tags(
        (name = "questionnaires", description = "Nutrition questionnaires"),
        (name = "appointments", description = "Consultation bookings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
