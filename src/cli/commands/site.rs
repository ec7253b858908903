use clap::{Arg, ArgMatches, Command};

pub const ARG_SITE_URL: &str = "site-url";
pub const ARG_HOME_PATH: &str = "home-path";
pub const ARG_SIGN_IN_PATH: &str = "sign-in-path";
pub const ARG_SIGN_UP_PATH: &str = "sign-up-path";

#[derive(Debug, Default)]
pub struct Options {
    pub url: Option<String>,
    pub home_path: Option<String>,
    pub sign_in_path: Option<String>,
    pub sign_up_path: Option<String>,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let get = |id: &str| matches.get_one::<String>(id).cloned();
        Self {
            url: get(ARG_SITE_URL),
            home_path: get(ARG_HOME_PATH),
            sign_in_path: get(ARG_SIGN_IN_PATH),
            sign_up_path: get(ARG_SIGN_UP_PATH),
        }
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_SITE_URL)
                .long("site-url")
                .help("Site origin used for navigation and the sign-up confirmation redirect")
                .env("AUTHFORMS_SITE_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_HOME_PATH)
                .long("home-path")
                .help("Path of the view shown after signing in (default: /)")
                .env("AUTHFORMS_HOME_PATH")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SIGN_IN_PATH)
                .long("sign-in-path")
                .help("Path of the sign-in view (default: /login)")
                .env("AUTHFORMS_SIGN_IN_PATH")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SIGN_UP_PATH)
                .long("sign-up-path")
                .help("Path of the sign-up view (default: /signup)")
                .env("AUTHFORMS_SIGN_UP_PATH")
                .global(true),
        )
}
