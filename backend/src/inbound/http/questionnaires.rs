//! Questionnaire HTTP handlers.
//!
//! ```text
//! POST  /api/v1/questionnaires
//! GET   /api/v1/questionnaires
//! GET   /api/v1/questionnaires/{id}
//! PATCH /api/v1/questionnaires/{id}/plan
//! ```
//!
//! Payloads keep the Portuguese field names clients already send.

use actix_web::{HttpRequest, HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::UpdatePlanRequest;
use crate::domain::{
    Allergy, Avatar, DietaryRestriction, Error, Gender, Goal, MealPrepTime, NumericInput,
    PhysicalActivity, Questionnaire, QuestionnaireSubmission, SubscriptionTier,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::caller_token;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{from_body, lenient_number, lenient_text};

/// Questionnaire answers as submitted by clients.
///
/// Fields of the wrong JSON type are kept as text and rejected by validation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct QuestionnaireRequest {
    #[serde(rename = "objetivo", default, deserialize_with = "lenient_text")]
    #[schema(example = "perder peso")]
    pub goal: Option<String>,
    #[serde(rename = "genero", default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(rename = "altura", default, deserialize_with = "lenient_number")]
    pub height: Option<NumericInput>,
    #[serde(rename = "idade", default, deserialize_with = "lenient_number")]
    pub age: Option<NumericInput>,
    #[serde(rename = "peso", default, deserialize_with = "lenient_number")]
    pub weight: Option<NumericInput>,
    #[serde(rename = "capacidade_fisica", default, deserialize_with = "lenient_text")]
    pub physical_activity: Option<String>,
    #[serde(rename = "restricao_alimentar", default, deserialize_with = "lenient_text")]
    pub dietary_restriction: Option<String>,
    #[serde(rename = "tempo_preparo", default, deserialize_with = "lenient_text")]
    pub meal_prep_time: Option<String>,
    #[serde(rename = "alergia", default, deserialize_with = "lenient_text")]
    pub allergy: Option<String>,
    #[serde(rename = "foto", default, deserialize_with = "lenient_text")]
    pub avatar: Option<String>,
    #[serde(rename = "plano", default, deserialize_with = "lenient_text")]
    pub plan: Option<String>,
    #[serde(rename = "id_cliente", default, deserialize_with = "lenient_text")]
    pub client_id: Option<String>,
}

impl QuestionnaireRequest {
    fn into_submission(self, token: Option<String>) -> QuestionnaireSubmission {
        QuestionnaireSubmission {
            token,
            goal: self.goal,
            gender: self.gender,
            height: self.height,
            age: self.age,
            weight: self.weight,
            physical_activity: self.physical_activity,
            dietary_restriction: self.dietary_restriction,
            meal_prep_time: self.meal_prep_time,
            allergy: self.allergy,
            avatar: self.avatar,
            plan: self.plan,
            client_id: self.client_id,
        }
    }
}

/// New subscription tier for a questionnaire.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PlanRequest {
    #[serde(rename = "plano", default, deserialize_with = "lenient_text")]
    #[schema(example = "plus1")]
    pub plan: Option<String>,
}

/// Stored questionnaire as returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionnaireResponse {
    pub id: String,
    #[serde(rename = "objetivo")]
    pub goal: Goal,
    #[serde(rename = "genero")]
    pub gender: Gender,
    #[serde(rename = "altura")]
    pub height: f64,
    #[serde(rename = "idade")]
    pub age: f64,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "capacidade_fisica")]
    pub physical_activity: PhysicalActivity,
    #[serde(rename = "restricao_alimentar")]
    pub dietary_restriction: DietaryRestriction,
    #[serde(rename = "tempo_preparo")]
    pub meal_prep_time: MealPrepTime,
    #[serde(rename = "alergia")]
    pub allergy: Allergy,
    #[serde(rename = "foto")]
    pub avatar: Option<Avatar>,
    #[serde(rename = "plano")]
    pub plan: Option<SubscriptionTier>,
    #[serde(rename = "id_cliente")]
    pub client_id: String,
}

impl From<Questionnaire> for QuestionnaireResponse {
    fn from(value: Questionnaire) -> Self {
        Self {
            id: value.id.into(),
            goal: value.goal,
            gender: value.gender,
            height: value.height,
            age: value.age,
            weight: value.weight,
            physical_activity: value.physical_activity,
            dietary_restriction: value.dietary_restriction,
            meal_prep_time: value.meal_prep_time,
            allergy: value.allergy,
            avatar: value.avatar,
            plan: value.plan,
            client_id: value.client_id.into(),
        }
    }
}

/// Envelope for created or updated questionnaires.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionnaireResultResponse {
    pub message: String,
    pub result: QuestionnaireResponse,
}

/// Envelope for a single fetched questionnaire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionnaireFoundResponse {
    pub message: String,
    #[serde(rename = "formulario")]
    pub questionnaire: QuestionnaireResponse,
}

/// Envelope for questionnaire listings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionnaireListResponse {
    pub result: Vec<QuestionnaireResponse>,
}

/// Submit a questionnaire for a client.
#[utoipa::path(
    post,
    path = "/api/v1/questionnaires",
    request_body = QuestionnaireRequest,
    params(("Authorization" = String, Header, description = "Caller token")),
    responses(
        (status = 201, description = "Questionnaire created", body = QuestionnaireResultResponse),
        (status = 400, description = "Malformed request", body = Error),
        (status = 401, description = "Missing or invalid token", body = Error),
        (status = 404, description = "Unknown client", body = Error),
        (status = 422, description = "Missing or invalid answers", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["questionnaires"],
    operation_id = "createQuestionnaire"
)]
#[post("/questionnaires")]
pub async fn create_questionnaire(
    state: web::Data<HttpState>,
    request: HttpRequest,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let payload: QuestionnaireRequest = from_body(payload.into_inner());
    let submission = payload.into_submission(caller_token(&request));
    let created = state.questionnaires.create(submission).await?;
    Ok(HttpResponse::Created().json(QuestionnaireResultResponse {
        message: "Created successfully.".to_owned(),
        result: created.into(),
    }))
}

/// List every questionnaire.
#[utoipa::path(
    get,
    path = "/api/v1/questionnaires",
    responses(
        (status = 200, description = "All questionnaires", body = QuestionnaireListResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["questionnaires"],
    operation_id = "listQuestionnaires"
)]
#[get("/questionnaires")]
pub async fn list_questionnaires(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<QuestionnaireListResponse>> {
    let records = state.questionnaires_query.list().await?;
    Ok(web::Json(QuestionnaireListResponse {
        result: records.into_iter().map(Into::into).collect(),
    }))
}

/// Fetch one questionnaire.
#[utoipa::path(
    get,
    path = "/api/v1/questionnaires/{id}",
    params(
        ("id" = String, Path, description = "Questionnaire identifier"),
        ("Authorization" = String, Header, description = "Caller token")
    ),
    responses(
        (status = 200, description = "Questionnaire found", body = QuestionnaireFoundResponse),
        (status = 400, description = "Missing id or unknown questionnaire", body = Error),
        (status = 401, description = "Missing or invalid token", body = Error)
    ),
    tags = ["questionnaires"],
    operation_id = "getQuestionnaireById"
)]
#[get("/questionnaires/{id}")]
pub async fn get_questionnaire(
    state: web::Data<HttpState>,
    request: HttpRequest,
    path: web::Path<String>,
) -> ApiResult<web::Json<QuestionnaireFoundResponse>> {
    let id = path.into_inner();
    let token = caller_token(&request);
    let record = state
        .questionnaires_query
        .get_by_id(&id, token.as_deref())
        .await?;
    Ok(web::Json(QuestionnaireFoundResponse {
        message: "Form found!".to_owned(),
        questionnaire: record.into(),
    }))
}

/// Change the subscription tier of a questionnaire.
#[utoipa::path(
    patch,
    path = "/api/v1/questionnaires/{id}/plan",
    request_body = PlanRequest,
    params(
        ("id" = String, Path, description = "Questionnaire identifier"),
        ("Authorization" = String, Header, description = "Caller token")
    ),
    responses(
        (status = 200, description = "Plan updated", body = QuestionnaireResultResponse),
        (status = 400, description = "Missing or invalid plan", body = Error),
        (status = 401, description = "Invalid token", body = Error),
        (status = 404, description = "Unknown questionnaire", body = Error)
    ),
    tags = ["questionnaires"],
    operation_id = "updateQuestionnairePlan"
)]
#[patch("/questionnaires/{id}/plan")]
pub async fn update_questionnaire_plan(
    state: web::Data<HttpState>,
    request: HttpRequest,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<QuestionnaireResultResponse>> {
    let payload: PlanRequest = from_body(payload.into_inner());
    let updated = state
        .questionnaires
        .update_plan(UpdatePlanRequest {
            questionnaire_id: path.into_inner(),
            plan: payload.plan,
            token: caller_token(&request),
        })
        .await?;
    Ok(web::Json(QuestionnaireResultResponse {
        message: "Plan updated successfully.".to_owned(),
        result: updated.into(),
    }))
}

#[cfg(test)]
#[path = "questionnaires_tests.rs"]
mod tests;
