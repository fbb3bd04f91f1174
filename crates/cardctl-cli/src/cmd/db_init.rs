use crate::output;
use anyhow::Context;
use cardctl_core::compose::Compose;
use cardctl_core::config::Config;
use cardctl_core::db_init::{self, DbInitOutcome, Event};
use cardctl_core::process::SystemRunner;
use cardctl_core::CardError;
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load .cardctl/config.yaml")?;
    let compose = Compose::new(&config.compose);

    println!("--- Initializing Database ---");

    let mut runner = SystemRunner;
    let result = db_init::run(&compose, &mut runner, &mut print_event);

    match result {
        Ok(DbInitOutcome::Completed | DbInitOutcome::AlreadyInitialized) => {
            output::success("Database initialization complete.");
            Ok(())
        }
        Err(e @ CardError::ServiceUnavailable { .. }) => {
            output::failure(&e.to_string());
            anyhow::bail!("service '{}' is not available", compose.service())
        }
        Err(CardError::CommandFailed { command, stderr }) => {
            print_command_error(&command, &stderr);
            anyhow::bail!("database initialization failed")
        }
        Err(e) => Err(e.into()),
    }
}

fn print_event(event: Event) {
    match event {
        Event::Running(command) => output::notice(&format!("Running: {command}")),
        Event::BestEffortDone => {
            output::info("... 'flask db init' completed or directory already exists.")
        }
        Event::Output(stdout) => println!("{}", stdout.trim_end()),
        Event::AlreadyInitialized {
            command,
            error_output,
        } => {
            print_command_error(&command, &error_output);
            output::notice("Database may already be initialized. Skipping further steps.");
        }
    }
}

fn print_command_error(command: &str, error_output: &str) {
    output::failure(&format!("Error running command: {command}"));
    output::failure(error_output.trim_end());
}
