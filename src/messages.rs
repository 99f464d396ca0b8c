//! User-facing message catalog.
//!
//! The register error-code mapping is a closed table with an explicit
//! fallback, so an unknown server code degrades to a labeled passthrough
//! instead of silently disappearing.

/// Advisory emitted when registration omits a fixed uuid.
pub const RANDOM_UUID_ASSIGNED: &str = "No uuid specified, the server will assign a random one";

/// Known register error codes and their user-actionable translations.
const REGISTER_ERROR_CODES: &[(&str, &str)] = &[
    ("profileName exist", "profile name is already taken"),
    (
        "profileName duplicate",
        "profile name conflicts with a reserved account",
    ),
];

#[must_use]
pub fn login_success(access_token: &str) -> String {
    format!("Login succeeded, accessToken: {access_token}")
}

#[must_use]
pub fn login_failed(error_message: Option<&str>) -> String {
    match error_message {
        Some(message) => format!("Login failed: {message}"),
        None => "Login failed".to_string(),
    }
}

#[must_use]
pub fn register_success(id: &str) -> String {
    format!("Registration succeeded, uuid: {id}")
}

#[must_use]
pub fn register_failed(error_message: Option<&str>) -> String {
    match error_message {
        Some(code) => {
            let text = REGISTER_ERROR_CODES
                .iter()
                .find(|(known, _)| *known == code)
                .map_or(code, |(_, translation)| *translation);
            format!("Registration failed: {text}")
        }
        None => "Registration failed".to_string(),
    }
}

#[must_use]
pub fn network_error(detail: &str) -> String {
    format!("Network error: {detail}")
}
