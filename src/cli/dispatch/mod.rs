//! Maps parsed CLI arguments to the form page to run, with its fully
//! resolved configuration.

use crate::cli::actions::{Action, Args};
use crate::cli::commands::{self, CMD_SIGN_IN, CMD_SIGN_UP, auth, site};
use crate::config::{AppConfig, RuntimeConfig};
use anyhow::{Context, Result, anyhow};

/// Map validated CLI matches to a form action.
///
/// # Errors
/// Returns an error if the auth URL is missing or any URL is invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let scoped = commands::scoped(matches);
    let auth_opts = auth::Options::parse(scoped);
    let site_opts = site::Options::parse(scoped);

    let config = AppConfig::load(RuntimeConfig {
        auth_url: auth_opts.url,
        api_key: auth_opts.api_key,
        site_url: site_opts.url,
        home_path: site_opts.home_path,
        sign_in_path: site_opts.sign_in_path,
        sign_up_path: site_opts.sign_up_path,
    });

    let auth_url = config
        .auth_base_url()
        .context("missing or invalid argument: --auth-url")?;
    let routes = config.routes().context("invalid site configuration")?;

    let args = Args {
        auth_url,
        api_key: config.api_key,
        routes,
    };

    match matches.subcommand_name() {
        Some(CMD_SIGN_IN) => Ok(Action::SignIn(args)),
        Some(CMD_SIGN_UP) => Ok(Action::SignUp(args)),
        _ => Err(anyhow!("unknown subcommand")),
    }
}
