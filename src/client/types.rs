//! Wire payloads for the identity service endpoints.
//!
//! Shapes follow the Yggdrasil-style contract: camelCase members, optional
//! fields the server omits rather than nulls. Requests deliberately do not
//! derive `Debug` so a password never lands in a log line.

use serde::{Deserialize, Serialize};

/// `POST /authenticate` request body.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest {
    pub username: String,
    pub password: String,
}

/// `POST /register` request body.
///
/// `uuid` is sent only when the caller pinned one; an absent member asks
/// the server to generate the identifier.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub profile_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// `POST /authenticate` response body. A non-empty `access_token` is the
/// success signal; everything else is a business rejection.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthenticateResponse {
    pub access_token: Option<String>,
    pub selected_profile: Option<SelectedProfile>,
    pub error_message: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SelectedProfile {
    pub name: Option<String>,
    pub id: Option<String>,
}

/// `POST /register` response body; a non-empty `id` signals success.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterResponse {
    pub id: Option<String>,
    pub error_message: Option<String>,
}

/// Structured error body attached to a non-success status.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorBody {
    pub error_message: Option<String>,
}
