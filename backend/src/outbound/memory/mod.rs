//! In-process persistence adapters.
//!
//! Each repository keeps its records in insertion order behind a tokio
//! `RwLock`, so listings are stable and concurrent handlers never block a
//! worker thread. State lives for the lifetime of the process.

mod appointment_repository;
mod client_directory;
mod questionnaire_repository;

pub use appointment_repository::InMemoryAppointmentRepository;
pub use client_directory::InMemoryClientDirectory;
pub use questionnaire_repository::InMemoryQuestionnaireRepository;
