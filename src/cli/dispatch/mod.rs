use crate::cli::actions::Action;
use anyhow::Result;
use secrecy::SecretString;

/// # Errors
/// Returns an error if a required argument is missing from the matches.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Submit {
        url: matches
            .get_one("url")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --url"))?,
        username: matches
            .get_one("username")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --username"))?,
        password: matches
            .get_one("password")
            .map(|s: &String| SecretString::from(s.to_string()))
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --password"))?,
        register: matches.get_flag("register"),
        profile_name: matches
            .get_one("profile-name")
            .map(|s: &String| s.to_string()),
        uuid: matches.get_one("uuid").map(|s: &String| s.to_string()),
    })
}
