pub mod auth;
pub mod logging;
pub mod site;

use clap::{
    ArgMatches, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const CMD_SIGN_IN: &str = "sign-in";
pub const CMD_SIGN_UP: &str = "sign-up";

/// Matches holding the global args. Values given after the subcommand live
/// on the subcommand, and parent values propagate down to it.
#[must_use]
pub fn scoped(matches: &ArgMatches) -> &ArgMatches {
    matches.subcommand().map_or(matches, |(_, sub)| sub)
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("authforms")
        .about("Sign in or create an account")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(CMD_SIGN_IN)
                .visible_alias("login")
                .about("Login to your account"),
        )
        .subcommand(
            Command::new(CMD_SIGN_UP)
                .visible_alias("signup")
                .about("Create an account"),
        );

    let command = auth::with_args(command);
    let command = site::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::telemetry::LogFormat;

    const CLEARED: [(&str, Option<&str>); 8] = [
        ("AUTHFORMS_AUTH_URL", None),
        ("AUTHFORMS_API_KEY", None),
        ("AUTHFORMS_SITE_URL", None),
        ("AUTHFORMS_HOME_PATH", None),
        ("AUTHFORMS_SIGN_IN_PATH", None),
        ("AUTHFORMS_SIGN_UP_PATH", None),
        ("AUTHFORMS_LOG_LEVEL", None),
        ("AUTHFORMS_LOG_FORMAT", None),
    ];

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "authforms");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Sign in or create an account".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_subcommand_required() {
        temp_env::with_vars(CLEARED, || {
            let result = new().try_get_matches_from(vec!["authforms"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_sign_in_args() {
        temp_env::with_vars(CLEARED, || {
            let matches = new().get_matches_from(vec![
                "authforms",
                "sign-in",
                "--auth-url",
                "https://project.supabase.co/auth/v1",
                "--api-key",
                "anon-key",
                "--site-url",
                "https://app.example.com",
            ]);

            assert_eq!(matches.subcommand_name(), Some(CMD_SIGN_IN));
            let sub = auth::Options::parse(scoped(&matches));
            assert_eq!(
                sub.url.as_deref(),
                Some("https://project.supabase.co/auth/v1")
            );
            assert_eq!(sub.api_key.as_deref(), Some("anon-key"));
        });
    }

    #[test]
    fn test_alias() {
        temp_env::with_vars(CLEARED, || {
            let matches = new().get_matches_from(vec!["authforms", "signup"]);
            assert_eq!(matches.subcommand_name(), Some(CMD_SIGN_UP));
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("AUTHFORMS_AUTH_URL", Some("https://auth.tld/auth/v1")),
                ("AUTHFORMS_SITE_URL", Some("https://app.tld")),
                ("AUTHFORMS_SIGN_IN_PATH", Some("/auth/login")),
                ("AUTHFORMS_LOG_LEVEL", Some("info")),
                ("AUTHFORMS_LOG_FORMAT", Some("json")),
            ],
            || {
                let matches = new().get_matches_from(vec!["authforms", "sign-up"]);
                let matches = scoped(&matches);
                assert_eq!(
                    matches.get_one::<String>(auth::ARG_AUTH_URL).cloned(),
                    Some("https://auth.tld/auth/v1".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(site::ARG_SITE_URL).cloned(),
                    Some("https://app.tld".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(site::ARG_SIGN_IN_PATH).cloned(),
                    Some("/auth/login".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                assert_eq!(
                    matches
                        .get_one::<LogFormat>(logging::ARG_LOG_FORMAT)
                        .copied(),
                    Some(LogFormat::Json)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("AUTHFORMS_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["authforms", "sign-in"]);
                let matches = scoped(&matches);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars(CLEARED, || {
                let mut args = vec!["authforms".to_string(), "sign-in".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                let matches = scoped(&matches);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_invalid_log_format_fails() {
        temp_env::with_vars(CLEARED, || {
            let result = new().try_get_matches_from(vec![
                "authforms",
                "sign-in",
                "--log-format",
                "xml",
            ]);
            assert_eq!(
                result.map_err(|e| e.kind()).err(),
                Some(clap::error::ErrorKind::ValueValidation)
            );
        });
    }
}
