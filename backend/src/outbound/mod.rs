//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local repositories and client directory
//! - **auth**: allow-list token verifier
//! - **ids**: UUID identifier generator
//!
//! Adapters translate between domain types and their storage. They contain
//! no business logic.

pub mod auth;
pub mod ids;
pub mod memory;

pub use auth::StaticTokenVerifier;
pub use ids::UuidIdGenerator;
pub use memory::{
    InMemoryAppointmentRepository, InMemoryClientDirectory, InMemoryQuestionnaireRepository,
};
