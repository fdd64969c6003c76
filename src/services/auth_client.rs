use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use crate::common::AuthError;
use crate::types::{Credentials, LoginResponse};

/// Message used when a rejection carries no explanation of its own.
pub const DEFAULT_REJECTION: &str = "Invalid username or password";

/// The credential-issuing collaborator.
///
/// `Ok` means the endpoint answered with a readable body, which may still be a
/// rejection (no token). `Err` means no usable answer was obtained.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError>;
}

/// [`AuthClient`] posting JSON credentials to a REST endpoint.
#[derive(Clone)]
pub struct HttpAuthClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAuthClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(credentials)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        interpret_reply(status, &body)
    }
}

/// Maps a raw endpoint reply to the client contract.
///
/// A JSON body shaped like [`LoginResponse`] is returned as is when the call
/// succeeded or the body explains the failure. Otherwise a 4xx is a rejection
/// and anything else a service failure.
pub fn interpret_reply(status: StatusCode, body: &[u8]) -> Result<LoginResponse, AuthError> {
    let parsed = serde_json::from_slice::<LoginResponse>(body).ok();

    match parsed {
        Some(reply) if status.is_success() || reply.message.is_some() => Ok(reply),
        _ if status.is_client_error() => {
            Err(AuthError::Rejected(DEFAULT_REJECTION.to_string()))
        }
        _ => Err(AuthError::Connection(format!(
            "unexpected reply from auth endpoint (HTTP {})",
            status
        ))),
    }
}
