use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
}

/// Shared holder of the current identity. Owned outside any single screen and
/// handed to screens by reference.
pub trait IdentityContext {
    fn current(&self) -> Option<&Identity>;
    fn set_identity(&mut self, identity: Identity);
    fn clear(&mut self);
}

/// In-process identity holder.
#[derive(Debug, Default, Clone)]
pub struct SharedIdentity {
    identity: Option<Identity>,
}

impl SharedIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityContext for SharedIdentity {
    fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    fn clear(&mut self) {
        self.identity = None;
    }
}
