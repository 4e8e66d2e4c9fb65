//! Domain primitives, validation rules and services.
//!
//! Purpose: define the questionnaire and appointment records, the rules an
//! inbound submission must satisfy before it becomes one, and the services
//! that run each pipeline against the driven ports.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — client-facing error with status.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - QuestionnaireService / AppointmentService — driving port implementations.

pub mod appointment;
pub mod auth;
pub mod client;
pub mod error;
pub mod ids;
pub mod ports;
pub mod questionnaire;
pub mod trace_id;

mod appointment_service;
mod questionnaire_service;

pub use self::appointment::{
    Appointment, AppointmentDetails, AppointmentSubmission, validate_appointment,
};
pub use self::appointment_service::AppointmentService;
pub use self::client::Client;
pub use self::error::{DEFAULT_STATUS, Error, ErrorCode};
pub use self::ids::{AppointmentId, ClientId, EmptyIdError, NutritionistId, QuestionnaireId};
pub use self::questionnaire::{
    Allergy, Avatar, Categorical, DietaryRestriction, Gender, Goal, MealPrepTime, NumericInput,
    PhysicalActivity, Questionnaire, QuestionnaireProfile, QuestionnaireSubmission,
    SubscriptionTier, parse_plan, validate_submission,
};
pub use self::questionnaire_service::QuestionnaireService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use nutriplan::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::invalid_request("Insert a id_formulario please!"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
