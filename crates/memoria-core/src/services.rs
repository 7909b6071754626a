use async_trait::async_trait;

use crate::api::AuthResponse;
use crate::error::RemoteError;
use crate::form::{AuthMode, Credentials};

/// Sends one authentication request and returns the typed success body.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait AuthTransport: Send + Sync {
    async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthResponse, RemoteError>;
}
