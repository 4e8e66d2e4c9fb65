//! Client directory backed by a fixed, process-local set of identifiers.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ClientRepository, ClientRepositoryError};
use crate::domain::{Client, ClientId};

/// `ClientRepository` answering from an in-memory set of known clients.
#[derive(Debug, Default)]
pub struct InMemoryClientDirectory {
    clients: RwLock<HashSet<ClientId>>,
}

impl InMemoryClientDirectory {
    /// Create a directory seeded with `clients`.
    pub fn new(clients: impl IntoIterator<Item = ClientId>) -> Self {
        Self {
            clients: RwLock::new(clients.into_iter().collect()),
        }
    }

    /// Register another client.
    pub async fn register(&self, id: ClientId) {
        self.clients.write().await.insert(id);
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientDirectory {
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, ClientRepositoryError> {
        let clients = self.clients.read().await;
        Ok(clients.get(id).cloned().map(Client::new))
    }
}
