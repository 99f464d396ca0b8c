//! Shared session state owned by the host application.
//!
//! The orchestrator reads the current value and, on the single success path
//! per mode, replaces it: a successful authenticate goes through the pure
//! [`apply_login`] merge, a successful register only flips the mode so the
//! user can log in right away.

use crate::form::Mode;
use std::time::{SystemTime, UNIX_EPOCH};

/// Session snapshot shared with the host for the lifetime of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub mode: Mode,
    /// Present only after a successful authenticate.
    pub access_token: Option<String>,
    pub token_valid: bool,
    /// Milliseconds since the Unix epoch, stamped when the login settled.
    pub login_time: Option<u64>,
    pub profile_name: Option<String>,
    pub uuid: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            access_token: None,
            token_valid: false,
            login_time: None,
            profile_name: None,
            uuid: None,
        }
    }

    /// Switch between authenticate and register. Touches nothing else.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Authenticate => Mode::Register,
            Mode::Register => Mode::Authenticate,
        };
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Mode::Authenticate)
    }
}

/// Credentials granted by a successful authenticate response.
#[derive(Debug, Clone)]
pub struct LoginGrant {
    pub access_token: String,
    pub profile_name: Option<String>,
    pub uuid: Option<String>,
}

/// Merge a login grant into the previous session.
///
/// Kept pure so the merge rule itself is testable: the mode carries over,
/// the grant supplies the credentials and profile, and `login_time` is
/// stamped by the caller.
#[must_use]
pub fn apply_login(previous: &SessionState, grant: LoginGrant, login_time: u64) -> SessionState {
    SessionState {
        mode: previous.mode,
        access_token: Some(grant.access_token),
        token_valid: true,
        login_time: Some(login_time),
        profile_name: grant.profile_name,
        uuid: grant.uuid,
    }
}

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}
