use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub const ARG_VERBOSITY: &str = "verbosity";

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

    Command::new("authd")
        .about("User registration and login service")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("AUTHD_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("db-host")
                .long("db-host")
                .help("Database host")
                .default_value("localhost")
                .env("DB_HOST"),
        )
        .arg(
            Arg::new("db-port")
                .long("db-port")
                .help("Database port")
                .default_value("5432")
                .env("DB_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("db-user")
                .long("db-user")
                .help("Database user")
                .default_value("root")
                .env("DB_USER"),
        )
        .arg(
            Arg::new("db-password")
                .long("db-password")
                .help("Database password")
                .default_value("pass1234")
                .env("DB_PASSWORD"),
        )
        .arg(
            Arg::new("db-name")
                .long("db-name")
                .help("Database name")
                .default_value("userdb")
                .env("DB_NAME"),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("AUTHD_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 7] = [
        "AUTHD_PORT",
        "AUTHD_LOG_LEVEL",
        "DB_HOST",
        "DB_PORT",
        "DB_USER",
        "DB_PASSWORD",
        "DB_NAME",
    ];

    fn unset_env_vars() -> Vec<(&'static str, Option<&'static str>)> {
        ENV_VARS.iter().map(|var| (*var, None)).collect()
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "authd");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "User registration and login service"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(unset_env_vars(), || {
            let command = new();
            let matches = command.get_matches_from(vec!["authd"]);

            assert_eq!(matches.get_one::<u16>("port").map(|s| *s), Some(8080));
            assert_eq!(
                matches.get_one::<String>("db-host").map(|s| s.to_string()),
                Some("localhost".to_string())
            );
            assert_eq!(matches.get_one::<u16>("db-port").map(|s| *s), Some(5432));
            assert_eq!(
                matches.get_one::<String>("db-user").map(|s| s.to_string()),
                Some("root".to_string())
            );
            assert_eq!(
                matches
                    .get_one::<String>("db-password")
                    .map(|s| s.to_string()),
                Some("pass1234".to_string())
            );
            assert_eq!(
                matches.get_one::<String>("db-name").map(|s| s.to_string()),
                Some("userdb".to_string())
            );
        });
    }

    #[test]
    fn test_check_args() {
        temp_env::with_vars(unset_env_vars(), || {
            let command = new();
            let matches = command.get_matches_from(vec![
                "authd",
                "--port",
                "9090",
                "--db-host",
                "db.internal",
                "--db-user",
                "authd",
                "--db-password",
                "hunter2!",
                "--db-name",
                "users",
            ]);

            assert_eq!(matches.get_one::<u16>("port").map(|s| *s), Some(9090));
            assert_eq!(
                matches.get_one::<String>("db-host").map(|s| s.to_string()),
                Some("db.internal".to_string())
            );
            assert_eq!(
                matches.get_one::<String>("db-user").map(|s| s.to_string()),
                Some("authd".to_string())
            );
            assert_eq!(
                matches
                    .get_one::<String>("db-password")
                    .map(|s| s.to_string()),
                Some("hunter2!".to_string())
            );
            assert_eq!(
                matches.get_one::<String>("db-name").map(|s| s.to_string()),
                Some("users".to_string())
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("AUTHD_PORT", Some("443")),
                ("DB_HOST", Some("users-db.svc.cluster.local")),
                ("DB_PORT", Some("5433")),
                ("DB_USER", Some("app")),
                ("DB_PASSWORD", Some("pass1234")),
                ("DB_NAME", Some("userdb")),
                ("AUTHD_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["authd"]);

                assert_eq!(matches.get_one::<u16>("port").map(|s| *s), Some(443));
                assert_eq!(
                    matches.get_one::<String>("db-host").map(|s| s.to_string()),
                    Some("users-db.svc.cluster.local".to_string())
                );
                assert_eq!(matches.get_one::<u16>("db-port").map(|s| *s), Some(5433));
                assert_eq!(
                    matches.get_one::<String>("db-user").map(|s| s.to_string()),
                    Some("app".to_string())
                );
                assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).map(|s| *s), Some(2));
            },
        );
    }

    #[test]
    fn test_env_beats_default_flag_beats_env() {
        temp_env::with_vars([("DB_HOST", Some("from-env"))], || {
            let command = new();
            let matches = command.get_matches_from(vec!["authd"]);
            assert_eq!(
                matches.get_one::<String>("db-host").map(|s| s.to_string()),
                Some("from-env".to_string())
            );

            let command = new();
            let matches = command.get_matches_from(vec!["authd", "--db-host", "from-flag"]);
            assert_eq!(
                matches.get_one::<String>("db-host").map(|s| s.to_string()),
                Some("from-flag".to_string())
            );
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("AUTHD_LOG_LEVEL", Some(level))], || {
                let command = new();
                let matches = command.get_matches_from(vec!["authd"]);
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("AUTHD_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["authd".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }
}
