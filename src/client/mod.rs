//! HTTP client for the identity service.
//!
//! Thin wrapper over `reqwest` that keeps the wire handling in one place:
//! success bodies parse into typed responses, a non-success status carrying
//! a structured body becomes [`ClientError::Rejected`], and anything that
//! never produced a structured answer surfaces as [`ClientError::Network`].
//! Timeouts and retries are left to the transport and the user.

pub mod types;

use crate::client::types::{
    AuthenticateRequest, AuthenticateResponse, ErrorBody, RegisterRequest, RegisterResponse,
};
use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use tracing::{debug, info_span, Instrument};
use url::Url;

#[derive(Debug, Clone)]
pub enum ClientError {
    /// The service answered with a non-success status and a structured body.
    Rejected {
        status: u16,
        error_message: Option<String>,
    },
    /// The request never produced a structured response.
    Network(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Rejected {
                status,
                error_message,
            } => match error_message {
                Some(message) => write!(f, "request failed ({status}): {message}"),
                None => write!(f, "request failed ({status})"),
            },
            ClientError::Network(detail) => write!(f, "{detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Client for one identity service, addressed by its base URL (including
/// any mount prefix, e.g. `https://skin.example.com/authserver`).
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: Url,
}

impl IdentityClient {
    /// # Errors
    /// Returns an error if `base_url` cannot be parsed or the HTTP client
    /// fails to build.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!("identity service base URL: {}", base_url);

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// `POST /authenticate` with `{username, password}`.
    ///
    /// # Errors
    /// `Rejected` for a non-success status with a structured body,
    /// `Network` for transport failures or unstructured answers.
    pub async fn authenticate(
        &self,
        request: &AuthenticateRequest,
    ) -> Result<AuthenticateResponse, ClientError> {
        let url = self.endpoint("/authenticate");
        let span = info_span!(
            "authserver.authenticate",
            http.method = "POST",
            url = %url
        );
        self.post_json(&url, request).instrument(span).await
    }

    /// `POST /register` with `{username, password, profileName, uuid?}`.
    ///
    /// # Errors
    /// `Rejected` for a non-success status with a structured body,
    /// `Network` for transport failures or unstructured answers.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, ClientError> {
        let url = self.endpoint("/register");
        let span = info_span!(
            "authserver.register",
            http.method = "POST",
            url = %url
        );
        self.post_json(&url, request).instrument(span).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|err| ClientError::Network(err.to_string()));
        }

        match response.json::<ErrorBody>().await {
            Ok(body) => {
                debug!("rejected with {status}: {:?}", body.error_message);
                Err(ClientError::Rejected {
                    status: status.as_u16(),
                    error_message: body.error_message,
                })
            }
            Err(_) => Err(ClientError::Network(status.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[tokio::test]
    async fn authenticate_parses_success_body() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authenticate"))
            .and(body_json(json!({
                "username": "steve@example.com",
                "password": "hunter2"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "accessToken": "abc123",
                "selectedProfile": {"name": "Steve", "id": "uuid-1"}
            })))
            .mount(&server)
            .await;

        let client = IdentityClient::new(&server.uri())?;
        let body = client
            .authenticate(&AuthenticateRequest {
                username: "steve@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await?;

        assert_eq!(body.access_token.as_deref(), Some("abc123"));
        Ok(())
    }

    #[tokio::test]
    async fn structured_error_body_becomes_rejected() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authenticate"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "errorMessage": "bad password"
            })))
            .mount(&server)
            .await;

        let client = IdentityClient::new(&server.uri())?;
        let result = client
            .authenticate(&AuthenticateRequest {
                username: "steve@example.com".to_string(),
                password: "wrong-pass".to_string(),
            })
            .await;

        match result {
            Err(ClientError::Rejected {
                status,
                error_message,
            }) => {
                assert_eq!(status, 403);
                assert_eq!(error_message.as_deref(), Some("bad password"));
            }
            other => return Err(anyhow!("expected rejection, got {other:?}")),
        }
        Ok(())
    }

    #[tokio::test]
    async fn unstructured_error_becomes_network_failure() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = IdentityClient::new(&server.uri())?;
        let result = client
            .register(&RegisterRequest {
                username: "steve@example.com".to_string(),
                password: "hunter2".to_string(),
                profile_name: "Steve".to_string(),
                uuid: None,
            })
            .await;

        match result {
            Err(ClientError::Network(detail)) => assert!(detail.contains("502")),
            other => return Err(anyhow!("expected network failure, got {other:?}")),
        }
        Ok(())
    }

    #[tokio::test]
    async fn base_url_mount_prefix_is_preserved() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authserver/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "uuid-9"
            })))
            .mount(&server)
            .await;

        let client = IdentityClient::new(&format!("{}/authserver", server.uri()))?;
        let body = client
            .register(&RegisterRequest {
                username: "steve@example.com".to_string(),
                password: "hunter2".to_string(),
                profile_name: "Steve".to_string(),
                uuid: None,
            })
            .await?;

        assert_eq!(body.id.as_deref(), Some("uuid-9"));
        Ok(())
    }
}
