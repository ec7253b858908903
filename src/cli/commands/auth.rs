use clap::{Arg, ArgMatches, Command};

pub const ARG_AUTH_URL: &str = "auth-url";
pub const ARG_API_KEY: &str = "api-key";

#[derive(Debug, Default)]
pub struct Options {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            url: matches.get_one::<String>(ARG_AUTH_URL).cloned(),
            api_key: matches.get_one::<String>(ARG_API_KEY).cloned(),
        }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_AUTH_URL)
                .long("auth-url")
                .help("Auth API base URL, example: https://<project>.supabase.co/auth/v1")
                .env("AUTHFORMS_AUTH_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_API_KEY)
                .long("api-key")
                .help("Public API key sent with every auth request")
                .env("AUTHFORMS_API_KEY")
                .hide_env_values(true)
                .global(true),
        )
}
