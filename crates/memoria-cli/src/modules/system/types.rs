use chrono::Utc;
use serde::{Deserialize, Serialize};

use memoria_core::{Identity, IdentityContext};

#[derive(Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub server_url: Option<String>,
    #[serde(default)]
    pub identity: Option<StoredIdentity>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StoredIdentity {
    #[serde(flatten)]
    pub identity: Identity,
    pub server: String,
    pub signed_in_at: String,
}

/// Identity context backed by the CLI config, so the signed-in user outlives
/// a single invocation until replaced or cleared.
pub struct IdentityStore<'a> {
    config: &'a mut CliConfig,
    server: String,
}

impl<'a> IdentityStore<'a> {
    pub fn new(config: &'a mut CliConfig, server: &str) -> Self {
        Self {
            config,
            server: server.trim_end_matches('/').to_string(),
        }
    }
}

impl IdentityContext for IdentityStore<'_> {
    fn current(&self) -> Option<&Identity> {
        self.config.identity.as_ref().map(|stored| &stored.identity)
    }

    fn set_identity(&mut self, identity: Identity) {
        self.config.identity = Some(StoredIdentity {
            identity,
            server: self.server.clone(),
            signed_in_at: Utc::now().to_rfc3339(),
        });
    }

    fn clear(&mut self) {
        self.config.identity = None;
    }
}
