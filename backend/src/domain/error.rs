//! Domain-level error type.
//!
//! Every failure a use-case can report is an [`Error`]: a stable
//! [`ErrorCode`], an optional HTTP-style status, and a client-facing message.
//! Inbound adapters serialise the pair directly; an error without an explicit
//! status resolves to [`DEFAULT_STATUS`] at the boundary.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::TraceId;

/// Status used when an error carries no explicit status code.
pub const DEFAULT_STATUS: u16 = 400;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No caller token was supplied.
    Unauthenticated,
    /// The token verifier rejected the supplied token.
    InvalidToken,
    /// A required field was empty, zero, or absent.
    MissingInput,
    /// A body metric did not parse as a number.
    InvalidNumber,
    /// The avatar selector is not one of the known avatars.
    InvalidAvatar,
    /// The subscription tier is not one of the known tiers.
    InvalidPlan,
    /// A categorical field holds a value outside its allowed set.
    InvalidEnumValue,
    /// The referenced client does not exist.
    ClientNotFound,
    /// The referenced questionnaire does not exist.
    FormNotFound,
    /// The referenced appointment does not exist.
    AppointmentNotFound,
    /// The request is malformed in some other way.
    InvalidRequest,
    /// An unexpected failure inside a collaborator.
    InternalError,
}

impl ErrorCode {
    /// Status reported for this code unless a constructor overrides it.
    #[must_use]
    pub const fn default_status(self) -> u16 {
        match self {
            Self::Unauthenticated | Self::InvalidToken | Self::InvalidNumber => 401,
            Self::MissingInput
            | Self::InvalidAvatar
            | Self::InvalidPlan
            | Self::InvalidEnumValue => 422,
            Self::ClientNotFound | Self::FormNotFound | Self::AppointmentNotFound => 404,
            Self::InvalidRequest => 400,
            Self::InternalError => 500,
        }
    }
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use nutriplan::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::ClientNotFound, "Client could not be found");
/// assert_eq!(err.status(), Some(404));
///
/// let parse_failure = Error::unclassified("input contains invalid characters");
/// assert_eq!(parse_failure.status(), None);
/// assert_eq!(parse_failure.status_or_default(), 400);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "missing_input")]
    code: ErrorCode,
    #[serde(skip)]
    status: Option<u16>,
    #[schema(example = "Missing input.")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    details: Option<Value>,
}

impl Error {
    /// Create an error carrying the default status for `code`.
    ///
    /// Captures the trace identifier in scope, if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            status: Some(code.default_status()),
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Create an error that carries no status of its own.
    ///
    /// Used for failures such as unparseable input that originate outside the
    /// validation rules; adapters report them with [`DEFAULT_STATUS`].
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self {
            status: None,
            ..Self::new(ErrorCode::InvalidRequest, message)
        }
    }

    /// Override the status reported for this error.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach structured details such as the offending field.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a trace identifier explicitly.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Explicit status, if one was assigned.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Status to report at the boundary.
    pub fn status_or_default(&self) -> u16 {
        self.status.unwrap_or(DEFAULT_STATUS)
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured at construction.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Convenience constructor for [`ErrorCode::Unauthenticated`].
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthenticated, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidToken`].
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidToken, message)
    }

    /// Convenience constructor for [`ErrorCode::MissingInput`].
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingInput, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
