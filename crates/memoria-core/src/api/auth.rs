use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RemoteError;
use crate::identity::Identity;

/// Body of `POST /api/login` and `POST /api/register`.
#[derive(Debug, Serialize)]
pub struct CredentialsRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Success body. Only `id` and `username` are consumed; anything else the
/// server sends is ignored.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub username: String,
}

impl AuthResponse {
    pub fn parse(body: &[u8]) -> Result<Self, RemoteError> {
        let response: Self = serde_json::from_slice(body)
            .map_err(|err| RemoteError::MalformedResponse(err.to_string()))?;
        if response.id.is_empty() {
            return Err(RemoteError::MalformedResponse("empty id".to_string()));
        }
        if response.username.is_empty() {
            return Err(RemoteError::MalformedResponse("empty username".to_string()));
        }
        Ok(response)
    }

    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            username: self.username,
        }
    }
}

/// Failure body. Parsed leniently: a missing or unparseable body is treated
/// as having no message.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn into_message(self) -> Option<String> {
        self.message.filter(|message| !message.trim().is_empty())
    }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(value) => value,
        RawId::Number(value) => value.to_string(),
    })
}
