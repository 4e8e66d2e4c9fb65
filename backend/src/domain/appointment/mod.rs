//! Appointment (consultation) records.
//!
//! An appointment books a client with a nutritionist at a calendar date and
//! wall-clock time. Date and time arrive as the caller typed them and are
//! parsed during validation, after the caller has been authorised.

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use tracing::debug;

use crate::domain::{AppointmentId, ClientId, Error, NutritionistId};

/// Day-first calendar date, e.g. `15/03/2024`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";
/// 24-hour wall-clock time with seconds, e.g. `14:30:00`.
pub const TIME_FORMAT: &str = "%H:%M:%S";

const DATE: &str = "data";
const TIME: &str = "hora";
const STATUS: &str = "status";
const NUTRITIONIST_ID: &str = "id_nutricionista";
const CLIENT_ID: &str = "id_cliente";

/// Raw appointment request plus the caller token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentSubmission {
    pub token: Option<String>,
    /// Date as submitted, expected in [`DATE_FORMAT`].
    pub date: Option<String>,
    /// Time as submitted, expected in [`TIME_FORMAT`].
    pub time: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub nutritionist_id: Option<String>,
    pub client_id: Option<String>,
}

/// Appointment answers that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDetails {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
    pub notes: String,
    pub nutritionist_id: NutritionistId,
    pub client_id: ClientId,
}

/// Persisted appointment record.
///
/// `booked_with` keeps the token the appointment was booked with; adapters
/// must not echo it back to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
    pub notes: String,
    pub nutritionist_id: NutritionistId,
    pub client_id: ClientId,
    pub booked_with: String,
}

impl Appointment {
    /// Build a record from validated details.
    pub fn new(id: AppointmentId, details: AppointmentDetails, booked_with: String) -> Self {
        let AppointmentDetails {
            date,
            time,
            status,
            notes,
            nutritionist_id,
            client_id,
        } = details;
        Self {
            id,
            date,
            time,
            status,
            notes,
            nutritionist_id,
            client_id,
            booked_with,
        }
    }
}

fn missing_input(field: &'static str) -> Error {
    debug!(field, "appointment rejected: missing input");
    Error::missing_input("Missing input.").with_details(json!({ "field": field }))
}

fn require_text(value: Option<&String>, field: &'static str) -> Result<String, Error> {
    value
        .filter(|text| !text.trim().is_empty())
        .cloned()
        .ok_or_else(|| missing_input(field))
}

fn parse_failure(field: &'static str, value: &str, expected: &'static str) -> Error {
    debug!(field, value, "appointment rejected: unparseable temporal field");
    Error::unclassified(format!("Invalid value for '{field}'. Expected {expected}."))
        .with_details(json!({ "field": field, "value": value }))
}

/// Parse a `dd/mm/yyyy` date.
///
/// # Errors
/// Returns an error without an explicit status when `raw` is not a valid date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, Error> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| parse_failure(DATE, raw, "dd/mm/yyyy"))
}

/// Parse an `HH:MM:SS` time.
///
/// # Errors
/// Returns an error without an explicit status when `raw` is not a valid time.
pub fn parse_time(raw: &str) -> Result<NaiveTime, Error> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|_| parse_failure(TIME, raw, "HH:mm:ss"))
}

/// Check that every required appointment field is present and well formed.
///
/// Notes are optional and default to an empty string. Presence is checked
/// for every field before the date and time are parsed.
///
/// # Errors
/// - [`ErrorCode::MissingInput`](crate::domain::ErrorCode::MissingInput)
///   naming the first absent field, in the order date, time, status,
///   nutritionist, client.
/// - An unclassified error (reported as 400) when the date or time does not
///   parse.
pub fn validate_appointment(submission: &AppointmentSubmission) -> Result<AppointmentDetails, Error> {
    let raw_date = require_text(submission.date.as_ref(), DATE)?;
    let raw_time = require_text(submission.time.as_ref(), TIME)?;
    let status = require_text(submission.status.as_ref(), STATUS)?;
    let nutritionist_id = require_text(submission.nutritionist_id.as_ref(), NUTRITIONIST_ID)
        .and_then(|raw| NutritionistId::new(raw).map_err(|_| missing_input(NUTRITIONIST_ID)))?;
    let client_id = require_text(submission.client_id.as_ref(), CLIENT_ID)
        .and_then(|raw| ClientId::new(raw).map_err(|_| missing_input(CLIENT_ID)))?;

    Ok(AppointmentDetails {
        date: parse_date(&raw_date)?,
        time: parse_time(&raw_time)?,
        status,
        notes: submission.notes.clone().unwrap_or_default(),
        nutritionist_id,
        client_id,
    })
}
