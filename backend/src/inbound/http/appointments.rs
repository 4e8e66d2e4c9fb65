//! Appointment HTTP handlers.
//!
//! ```text
//! POST /api/v1/appointments
//! GET  /api/v1/appointments
//! GET  /api/v1/appointments/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::appointment::{DATE_FORMAT, TIME_FORMAT};
use crate::domain::{Appointment, AppointmentSubmission, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::caller_token;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{from_body, lenient_text};

/// Booking request as submitted by clients.
///
/// Date and time are parsed by the domain once the caller is authorised.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AppointmentRequest {
    /// Calendar date, `dd/mm/yyyy`.
    #[serde(rename = "data", default, deserialize_with = "lenient_text")]
    #[schema(example = "15/03/2024")]
    pub date: Option<String>,
    /// Wall-clock time, `HH:mm:ss`.
    #[serde(rename = "hora", default, deserialize_with = "lenient_text")]
    #[schema(example = "14:30:00")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(rename = "observacoes", default, deserialize_with = "lenient_text")]
    pub notes: Option<String>,
    #[serde(rename = "id_nutricionista", default, deserialize_with = "lenient_text")]
    pub nutritionist_id: Option<String>,
    #[serde(rename = "id_cliente", default, deserialize_with = "lenient_text")]
    pub client_id: Option<String>,
}

impl AppointmentRequest {
    fn into_submission(self, token: Option<String>) -> AppointmentSubmission {
        AppointmentSubmission {
            token,
            date: self.date,
            time: self.time,
            status: self.status,
            notes: self.notes,
            nutritionist_id: self.nutritionist_id,
            client_id: self.client_id,
        }
    }
}

/// Stored appointment as returned to clients. The booking token is omitted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentResponse {
    pub id: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    pub status: String,
    #[serde(rename = "observacoes")]
    pub notes: String,
    #[serde(rename = "id_nutricionista")]
    pub nutritionist_id: String,
    #[serde(rename = "id_cliente")]
    pub client_id: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(value: Appointment) -> Self {
        Self {
            id: value.id.into(),
            date: value.date.format(DATE_FORMAT).to_string(),
            time: value.time.format(TIME_FORMAT).to_string(),
            status: value.status,
            notes: value.notes,
            nutritionist_id: value.nutritionist_id.into(),
            client_id: value.client_id.into(),
        }
    }
}

/// Envelope for a newly booked appointment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentResultResponse {
    pub message: String,
    pub result: AppointmentResponse,
}

/// Envelope for a single fetched appointment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentFoundResponse {
    pub message: String,
    #[serde(rename = "consulta")]
    pub appointment: AppointmentResponse,
}

/// Envelope for appointment listings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentListResponse {
    pub result: Vec<AppointmentResponse>,
}

/// Book an appointment.
#[utoipa::path(
    post,
    path = "/api/v1/appointments",
    request_body = AppointmentRequest,
    params(("Authorization" = String, Header, description = "Caller token")),
    responses(
        (status = 201, description = "Appointment booked", body = AppointmentResultResponse),
        (status = 400, description = "Malformed date, time or body", body = Error),
        (status = 401, description = "Missing or invalid token", body = Error),
        (status = 404, description = "Unknown client", body = Error),
        (status = 422, description = "Missing fields", body = Error)
    ),
    tags = ["appointments"],
    operation_id = "createAppointment"
)]
#[post("/appointments")]
pub async fn create_appointment(
    state: web::Data<HttpState>,
    request: HttpRequest,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let payload: AppointmentRequest = from_body(payload.into_inner());
    let submission = payload.into_submission(caller_token(&request));
    let created = state.appointments.create(submission).await?;
    Ok(HttpResponse::Created().json(AppointmentResultResponse {
        message: "Created successfully.".to_owned(),
        result: created.into(),
    }))
}

/// List every appointment.
#[utoipa::path(
    get,
    path = "/api/v1/appointments",
    responses(
        (status = 200, description = "All appointments", body = AppointmentListResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["appointments"],
    operation_id = "listAppointments"
)]
#[get("/appointments")]
pub async fn list_appointments(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<AppointmentListResponse>> {
    let records = state.appointments_query.list().await?;
    Ok(web::Json(AppointmentListResponse {
        result: records.into_iter().map(Into::into).collect(),
    }))
}

/// Fetch one appointment.
#[utoipa::path(
    get,
    path = "/api/v1/appointments/{id}",
    params(
        ("id" = String, Path, description = "Appointment identifier"),
        ("Authorization" = String, Header, description = "Caller token")
    ),
    responses(
        (status = 200, description = "Appointment found", body = AppointmentFoundResponse),
        (status = 400, description = "Missing id", body = Error),
        (status = 401, description = "Missing or invalid token", body = Error),
        (status = 404, description = "Unknown appointment", body = Error)
    ),
    tags = ["appointments"],
    operation_id = "getAppointmentById"
)]
#[get("/appointments/{id}")]
pub async fn get_appointment(
    state: web::Data<HttpState>,
    request: HttpRequest,
    path: web::Path<String>,
) -> ApiResult<web::Json<AppointmentFoundResponse>> {
    let id = path.into_inner();
    let token = caller_token(&request);
    let record = state
        .appointments_query
        .get_by_id(&id, token.as_deref())
        .await?;
    Ok(web::Json(AppointmentFoundResponse {
        message: "Query found!".to_owned(),
        appointment: record.into(),
    }))
}

#[cfg(test)]
#[path = "appointments_tests.rs"]
mod tests;
