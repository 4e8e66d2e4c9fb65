//! Port for looking up clients referenced by questionnaires and appointments.

use async_trait::async_trait;

use crate::domain::{Client, ClientId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by client directory adapters.
    pub enum ClientRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "client repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "client repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Fetch a client by identifier, returning `None` when it does not exist.
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, ClientRepositoryError>;
}
