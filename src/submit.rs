//! Submission orchestration for the two-mode credential form.
//!
//! Owns the busy flag, builds the mode-specific payload once validation
//! passes, issues exactly one outstanding request, and maps every outcome
//! to either a session transition or a user-facing notification. The flag
//! returns to idle after classification in every branch, so the form stays
//! usable after any failure.

use crate::{
    client::{
        types::{AuthenticateRequest, RegisterRequest},
        ClientError, IdentityClient,
    },
    form::{self, FieldErrors, FormInputs, Mode},
    messages,
    notify::{NotificationSink, Severity},
    session::{self, LoginGrant, SessionState},
};
use secrecy::ExposeSecret;
use tracing::{debug, warn};

/// Outcome of one submission attempt, as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request settled; the result was already applied or notified.
    Completed,
    /// Field validation failed; nothing was sent. Shown inline by the host.
    Invalid(FieldErrors),
    /// A submission is already in flight; nothing was sent.
    Busy,
}

/// The form state machine: idle unless a validated submission is in
/// flight. Reused indefinitely across attempts; no state is terminal.
#[derive(Debug, Default)]
pub struct LoginForm {
    submitting: bool,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a request is outstanding. Hosts disable the submit
    /// affordance on this.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Run one submission attempt against the current session mode.
    ///
    /// A busy form and validation failures short-circuit before any network
    /// traffic. Otherwise exactly one request is issued and classified:
    /// the single success path per mode mutates `session`, every failure
    /// becomes a notification. Errors never propagate past this boundary.
    pub async fn submit(
        &mut self,
        client: &IdentityClient,
        session: &mut SessionState,
        inputs: &FormInputs,
        sink: &dyn NotificationSink,
    ) -> SubmitOutcome {
        if self.submitting {
            warn!("submission already in flight, ignoring");
            return SubmitOutcome::Busy;
        }

        let errors = form::validate(session.mode, inputs);
        if !errors.is_empty() {
            debug!("validation failed: {errors}");
            return SubmitOutcome::Invalid(errors);
        }

        self.submitting = true;
        match session.mode {
            Mode::Authenticate => authenticate(client, session, inputs, sink).await,
            Mode::Register => register(client, session, inputs, sink).await,
        }
        self.submitting = false;

        SubmitOutcome::Completed
    }
}

async fn authenticate(
    client: &IdentityClient,
    session: &mut SessionState,
    inputs: &FormInputs,
    sink: &dyn NotificationSink,
) {
    let request = AuthenticateRequest {
        username: inputs.username.clone(),
        password: inputs.password.expose_secret().to_string(),
    };

    match client.authenticate(&request).await {
        Ok(body) => {
            let token = body
                .access_token
                .clone()
                .filter(|token| !token.is_empty());
            if let Some(access_token) = token {
                sink.notify(&messages::login_success(&access_token), Severity::Success);
                let (profile_name, uuid) = body
                    .selected_profile
                    .map_or((None, None), |profile| (profile.name, profile.id));
                *session = session::apply_login(
                    session,
                    LoginGrant {
                        access_token,
                        profile_name,
                        uuid,
                    },
                    session::now_millis(),
                );
            } else {
                sink.notify(
                    &messages::login_failed(body.error_message.as_deref()),
                    Severity::Error,
                );
            }
        }
        // 403 is the service's "authentication rejected" signal; its
        // errorMessage is shown verbatim.
        Err(ClientError::Rejected {
            status: 403,
            error_message,
        }) => {
            sink.notify(
                &messages::login_failed(error_message.as_deref()),
                Severity::Error,
            );
        }
        Err(error) => {
            sink.notify(&messages::network_error(&error.to_string()), Severity::Error);
        }
    }
}

async fn register(
    client: &IdentityClient,
    session: &mut SessionState,
    inputs: &FormInputs,
    sink: &dyn NotificationSink,
) {
    let requested_uuid =
        (!inputs.requested_uuid.is_empty()).then(|| inputs.requested_uuid.clone());
    if requested_uuid.is_none() {
        // Advisory only, never blocks the submission.
        sink.notify(messages::RANDOM_UUID_ASSIGNED, Severity::Info);
    }

    let request = RegisterRequest {
        username: inputs.username.clone(),
        password: inputs.password.expose_secret().to_string(),
        profile_name: inputs.profile_name.clone(),
        uuid: requested_uuid,
    };

    match client.register(&request).await {
        Ok(body) => {
            if let Some(id) = body.id.as_deref().filter(|id| !id.is_empty()) {
                sink.notify(&messages::register_success(id), Severity::Success);
                // Flip to authenticate so the fresh account can log in.
                session.mode = Mode::Authenticate;
            } else {
                sink.notify(
                    &messages::register_failed(body.error_message.as_deref()),
                    Severity::Error,
                );
            }
        }
        Err(ClientError::Rejected { error_message, .. }) => {
            sink.notify(
                &messages::register_failed(error_message.as_deref()),
                Severity::Error,
            );
        }
        Err(ClientError::Network(detail)) => {
            sink.notify(&messages::network_error(&detail), Severity::Error);
        }
    }
}
