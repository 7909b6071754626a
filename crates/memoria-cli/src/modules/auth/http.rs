use std::future::Future;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::debug;

use memoria_core::{AuthMode, AuthResponse, AuthTransport, Credentials, ErrorResponse, RemoteError};

/// An in-flight request running on its own task. Dropping the handle aborts
/// the task, so a request never outlives the screen that issued it.
pub(crate) struct RequestHandle<T> {
    task: JoinHandle<T>,
}

impl<T: Send + 'static> RequestHandle<T> {
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            task: tokio::spawn(future),
        }
    }

    pub(crate) async fn join(mut self) -> Result<T, RemoteError> {
        match (&mut self.task).await {
            Ok(value) => Ok(value),
            Err(err) if err.is_cancelled() => Err(RemoteError::Cancelled),
            Err(err) => Err(RemoteError::Network(err.to_string())),
        }
    }
}

impl<T> Drop for RequestHandle<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub(crate) struct HttpTransport {
    client: reqwest::Client,
    addr: String,
}

impl HttpTransport {
    pub(crate) fn new(client: reqwest::Client, addr: &str) -> Self {
        Self {
            client,
            addr: addr.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, mode: AuthMode) -> String {
        format!("{}{}", self.addr, mode.endpoint())
    }
}

#[async_trait]
impl AuthTransport for HttpTransport {
    async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthResponse, RemoteError> {
        let url = self.url(mode);
        debug!(method = "POST", url = %url, "http request");
        let request = self.client.post(url).json(&credentials.as_request());
        RequestHandle::spawn(exchange(request)).join().await?
    }
}

async fn exchange(request: reqwest::RequestBuilder) -> Result<AuthResponse, RemoteError> {
    let response = request
        .send()
        .await
        .map_err(|err| RemoteError::Network(err.to_string()))?;
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|err| RemoteError::Network(err.to_string()))?;
    debug!(status = %status, bytes = body.len(), "http response");
    if !status.is_success() {
        let message = ErrorResponse::parse(&body).into_message();
        return Err(RemoteError::rejected(status.as_u16(), message));
    }
    AuthResponse::parse(&body)
}
