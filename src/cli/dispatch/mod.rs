use crate::cli::actions::{server, Action};
use anyhow::Result;
use secrecy::SecretString;

/// Build the action from the parsed command line
/// # Errors
/// Returns an error if a required argument is missing
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let missing = |name: &str| anyhow::anyhow!("missing required argument: --{name}");

    Ok(Action::Server(server::Args {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        db_host: matches
            .get_one::<String>("db-host")
            .cloned()
            .ok_or_else(|| missing("db-host"))?,
        db_port: matches.get_one::<u16>("db-port").copied().unwrap_or(5432),
        db_user: matches
            .get_one::<String>("db-user")
            .cloned()
            .ok_or_else(|| missing("db-user"))?,
        db_password: matches
            .get_one::<String>("db-password")
            .cloned()
            .map(SecretString::from)
            .ok_or_else(|| missing("db-password"))?,
        db_name: matches
            .get_one::<String>("db-name")
            .cloned()
            .ok_or_else(|| missing("db-name"))?,
    }))
}
