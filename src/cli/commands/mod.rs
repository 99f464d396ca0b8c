use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("authform")
        .about("Credential form client for a Yggdrasil-style identity service")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .help("Base URL of the identity service, example: https://skin.tld/authserver")
                .env("AUTHFORM_URL")
                .required(true),
        )
        .arg(
            Arg::new("username")
                .long("username")
                .help("Account email address")
                .required(true),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .help("Account password, 6 to 128 characters")
                .env("AUTHFORM_PASSWORD")
                .required(true),
        )
        .arg(
            Arg::new("register")
                .short('r')
                .long("register")
                .help("Register a new account instead of logging in")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("profile-name")
                .long("profile-name")
                .help("Profile name for registration: 2-16 letters, digits or underscore"),
        )
        .arg(
            Arg::new("uuid")
                .long("uuid")
                .help("Fixed uuid for registration (canonical format); omit for a server-assigned one"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("AUTHFORM_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
