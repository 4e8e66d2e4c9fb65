//! Server settings loaded via OrthoConfig.
//!
//! Every field may come from the command line, a configuration file or a
//! `NUTRIPLAN_*` environment variable. Fallbacks live in the accessors.

use std::io;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use zeroize::Zeroizing;

use nutriplan::domain::ClientId;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration for the HTTP server and its in-process adapters.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NUTRIPLAN")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Comma-separated tokens accepted by the token verifier.
    pub accepted_tokens: Option<String>,
    /// Comma-separated client identifiers known to the client directory.
    pub client_ids: Option<String>,
    /// Emit logs as JSON rather than human-readable lines.
    #[ortho_config(default = true)]
    pub json_logs: bool,
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidInput`] when the address is malformed.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Tokens accepted by the verifier. Secrets are wiped on drop.
    pub fn accepted_tokens(&self) -> Vec<Zeroizing<String>> {
        split_list(self.accepted_tokens.as_deref())
            .map(|token| Zeroizing::new(token.to_owned()))
            .collect()
    }

    /// Client identifiers seeded into the client directory.
    pub fn client_ids(&self) -> Vec<ClientId> {
        split_list(self.client_ids.as_deref())
            .filter_map(|id| ClientId::new(id).ok())
            .collect()
    }
}

impl std::fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSettings")
            .field("bind_addr", &self.bind_addr)
            .field("accepted_tokens", &self.accepted_tokens().len())
            .field("client_ids", &self.client_ids)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}
