//! Client records as seen by this service.

use crate::domain::ClientId;

/// Client owning questionnaires and appointments.
///
/// Clients are managed elsewhere; this service only checks that one exists
/// before attaching records to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
}

impl Client {
    /// Wrap an existing client identifier.
    pub fn new(id: ClientId) -> Self {
        Self { id }
    }
}
