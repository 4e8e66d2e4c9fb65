//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (token verification, identifier generation, repositories)
//! are implemented by outbound adapters. Driving ports (commands and
//! queries) are implemented by the domain services and called by inbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod appointment_command;
mod appointment_query;
mod appointment_repository;
mod client_repository;
mod id_generator;
mod questionnaire_command;
mod questionnaire_query;
mod questionnaire_repository;
mod token_verifier;

pub use appointment_command::AppointmentCommand;
pub use appointment_query::AppointmentQuery;
#[cfg(test)]
pub use appointment_repository::MockAppointmentRepository;
pub use appointment_repository::{AppointmentRepository, AppointmentRepositoryError};
#[cfg(test)]
pub use client_repository::MockClientRepository;
pub use client_repository::{ClientRepository, ClientRepositoryError};
pub use id_generator::IdGenerator;
#[cfg(test)]
pub use id_generator::MockIdGenerator;
pub use questionnaire_command::{QuestionnaireCommand, UpdatePlanRequest};
pub use questionnaire_query::QuestionnaireQuery;
#[cfg(test)]
pub use questionnaire_repository::MockQuestionnaireRepository;
pub use questionnaire_repository::{QuestionnaireRepository, QuestionnaireRepositoryError};
#[cfg(test)]
pub use token_verifier::MockTokenVerifier;
pub use token_verifier::{Claims, TokenVerifier, TokenVerifierError};
