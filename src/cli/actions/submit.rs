use crate::{
    cli::actions::Action,
    client::IdentityClient,
    form::{FormInputs, Mode},
    notify::LogSink,
    session::SessionState,
    submit::{LoginForm, SubmitOutcome},
};
use anyhow::{anyhow, Result};
use tracing::info;

/// Handle the submit action: run one authenticate or register attempt and
/// surface notifications as log lines.
///
/// # Errors
/// Returns an error if the client cannot be built or the inputs fail
/// validation; submission failures are reported via notifications and are
/// not errors here.
pub async fn handle(action: Action) -> Result<()> {
    let Action::Submit {
        url,
        username,
        password,
        register,
        profile_name,
        uuid,
    } = action;

    let mode = if register {
        Mode::Register
    } else {
        Mode::Authenticate
    };

    let client = IdentityClient::new(&url)?;
    let mut session = SessionState::new(mode);
    let inputs = FormInputs {
        username,
        profile_name: profile_name.unwrap_or_default(),
        password,
        requested_uuid: uuid.unwrap_or_default(),
    };

    let mut form = LoginForm::new();
    match form.submit(&client, &mut session, &inputs, &LogSink).await {
        SubmitOutcome::Completed => {
            if let Some(name) = &session.profile_name {
                info!("session established for {name}");
            }
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => Err(anyhow!("invalid input: {errors}")),
        SubmitOutcome::Busy => Err(anyhow!("a submission is already in flight")),
    }
}
