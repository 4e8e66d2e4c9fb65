//! Opaque record identifiers.
//!
//! Identifiers are generated by an [`IdGenerator`](crate::domain::ports::IdGenerator)
//! or supplied by callers; the domain only requires them to be non-empty.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation error raised when an identifier is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("identifier must not be empty")]
pub struct EmptyIdError;

macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap a raw identifier.
            pub fn new(id: impl Into<String>) -> Result<Self, EmptyIdError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(EmptyIdError);
                }
                Ok(Self(id))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = EmptyIdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_record_id! {
    /// Identifier of a questionnaire record.
    QuestionnaireId
}

define_record_id! {
    /// Identifier of an appointment record.
    AppointmentId
}

define_record_id! {
    /// Identifier of a client record owned by the client directory.
    ClientId
}

define_record_id! {
    /// Identifier of the nutritionist attending an appointment.
    NutritionistId
}
