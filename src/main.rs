use clap::Parser;
use std::io;
use tracing::warn;

use debug_log_helper::cgi::{self, CgiEnv};
use debug_log_helper::cli::{self, Cli};
use debug_log_helper::config::{default_config_path, load_settings};
use debug_log_helper::{logging, ClearResult, LogClearer};

// Always exits 0: the outcome travels in the JSON body.
fn main() {
    let under_cgi = cgi::is_cgi();
    // Under CGI, argv holds query words chosen by the client and is never trusted.
    let args = if under_cgi {
        Cli::default()
    } else {
        Cli::parse()
    };
    let local_request = if under_cgi { None } else { args.request() };

    let config_path = args.config.clone().or_else(default_config_path);
    let settings = match load_settings(config_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            logging::init("warn");
            warn!("{}", e);
            emit(&ClearResult::failure(e.to_string()), local_request.is_some(), args.pretty);
            return;
        }
    };
    logging::init(&settings.log_level);

    let clearer = LogClearer::new(settings);
    match local_request {
        Some(request) => cli::print_result(&request.dispatch(&clearer), args.pretty),
        None => {
            let cgi_env = CgiEnv::from_env();
            let result = cgi::handle(&cgi_env, io::stdin().lock(), &clearer);
            cgi::respond(&result);
        }
    }
}

fn emit(result: &ClearResult, local: bool, pretty: bool) {
    if local {
        cli::print_result(result, pretty);
    } else {
        cgi::respond(result);
    }
}
