//! basket - My Smart Basket welcome screen CLI
//!
//! Each invocation is one browser tab: the per-tab flag starts unset and dies
//! with the process, while the user and session persist in the config dir.
//!
//! # Examples
//!
//! ```bash
//! # First visit
//! basket open
//!
//! # Register and enter the app
//! basket register --name Ana --phone "+34 600 000 000" --username ana --password longpassword
//!
//! # Back-navigation within the same tab redirects straight to the app
//! basket open --revisit
//!
//! # Swipe up 100px on the welcome screen
//! basket open --swipe 500 400
//! ```

mod cli;
mod commands;
mod error;
mod logger;
mod output;
mod terminal_navigator;


use crate::{
    cli::Cli,
    commands::Commands,
    error::Result as CliResult,
    terminal_navigator::TerminalNavigator,
};

use basket_config::Config;
use basket_core::{LocalSession, ValidationError};
use basket_session::{
    FileStore, IdentityStore, InMemoryTabFlag, SessionStore, WelcomeController,
};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use serde_json::{Value, json};

/// Exit code for a completed command
const EXIT_SUCCESS: u8 = 0;

/// Exit code for config, storage and output failures
const EXIT_FAILURE: u8 = 1;

/// Exit code for rejected form input
const EXIT_INVALID_INPUT: u8 = 2;

type Controller = WelcomeController<Arc<FileStore>, InMemoryTabFlag, TerminalNavigator>;

fn main() -> ExitCode {
    ExitCode::from(exit_status(run(Cli::parse())))
}

/// Maps the outcome of [`run`] to the process exit code, reporting failures.
fn exit_status(result: CliResult<u8>) -> u8 {
    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<u8> {
    let config = match cli.config_dir {
        Some(ref dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path(),
        config.logging.colored,
    )?;

    info!("Starting basket v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let storage = open_storage(&config)?;
    let (value, code) = dispatch(cli.command, storage, &config);

    println!("{}", output::render(&value, cli.pretty)?);
    Ok(code)
}

fn open_storage(config: &Config) -> CliResult<Arc<FileStore>> {
    Ok(Arc::new(FileStore::open(config.storage_path())?))
}

/// Runs one command in a fresh tab and returns its JSON output and exit code.
fn dispatch(command: Commands, storage: Arc<FileStore>, config: &Config) -> (Value, u8) {
    let mut controller = WelcomeController::new(
        Arc::clone(&storage),
        InMemoryTabFlag::new(),
        TerminalNavigator::default(),
        config,
    );

    match command {
        Commands::Open { revisit, swipe } => open(&mut controller, revisit, swipe.as_deref()),
        Commands::Login {
            identifier,
            password,
        } => {
            controller.mount();
            let result = controller.submit_login(&identifier, &password);
            submitted(&controller, result)
        }
        Commands::Register {
            name,
            phone,
            username,
            password,
        } => {
            controller.mount();
            let result = controller.submit_registration(&name, &phone, &username, &password);
            submitted(&controller, result)
        }
        Commands::Demo => {
            controller.mount();
            controller.start();
            (
                json!({ "navigation": output::navigation(controller.navigator().navigation()) }),
                EXIT_SUCCESS,
            )
        }
        Commands::Status => {
            let user = IdentityStore::new(Arc::clone(&storage)).get_local_user();
            let session = SessionStore::new(storage).get_local_session();
            (
                output::status(user.as_ref(), session.as_ref()),
                EXIT_SUCCESS,
            )
        }
    }
}

/// Mounts the welcome screen, optionally revisits it and feeds a swipe.
fn open(controller: &mut Controller, revisit: bool, swipe: Option<&[f64]>) -> (Value, u8) {
    let mut mounts = vec![output::mount(&controller.mount())];

    if revisit {
        mounts.push(output::mount(&controller.mount()));
    }

    let swiped = match swipe {
        Some([start_y, end_y]) if controller.view().is_some() => {
            controller.touch_start(Some(*start_y));
            Some(controller.touch_end(Some(*end_y)))
        }
        _ => None,
    };

    let value = json!({
        "mounts": mounts,
        "swipeUp": swiped,
        "navigation": output::navigation(controller.navigator().navigation()),
    });

    (value, EXIT_SUCCESS)
}

fn submitted(
    controller: &Controller,
    result: Result<LocalSession, ValidationError>,
) -> (Value, u8) {
    match result {
        Ok(session) => (
            output::session(
                &session,
                output::navigation(controller.navigator().navigation()),
            ),
            EXIT_SUCCESS,
        ),
        Err(e) => {
            info!("Form rejected: {}", e.code());
            (output::validation_error(&e), EXIT_INVALID_INPUT)
        }
    }
}
