pub mod submit;

use secrecy::SecretString;

/// What the CLI resolved to do.
#[derive(Debug)]
pub enum Action {
    Submit {
        url: String,
        username: String,
        password: SecretString,
        register: bool,
        profile_name: Option<String>,
        uuid: Option<String>,
    },
}
