//! The `db-init` sequence: `flask db init`, `migrate`, `upgrade` inside the
//! backend container.

use crate::compose::Compose;
use crate::error::{CardError, Result};
use crate::process::{CommandRunner, Invocation};

/// Error text emitted by Alembic when migrations were already applied.
///
/// This depends on the exact wording of a third-party message and is the only
/// failure treated as benign.
pub const ALREADY_INITIALIZED_MARKER: &str = "Target database is not up to date";

pub const NO_ERROR_OUTPUT: &str = "No error output.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// Exit status and spawn errors are ignored.
    BestEffort,
    /// Must succeed unless the failure is the already-initialized case.
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub invocation: Invocation,
    pub policy: StepPolicy,
}

pub fn migration_steps(compose: &Compose<'_>) -> Vec<Step> {
    vec![
        Step {
            invocation: compose.exec(["flask", "db", "init"]),
            policy: StepPolicy::BestEffort,
        },
        Step {
            invocation: compose.exec(["flask", "db", "migrate", "-m", "Initial migration."]),
            policy: StepPolicy::Required,
        },
        Step {
            invocation: compose.exec(["flask", "db", "upgrade"]),
            policy: StepPolicy::Required,
        },
    ]
}

pub fn is_already_initialized(error_output: &str) -> bool {
    error_output.contains(ALREADY_INITIALIZED_MARKER)
}

/// Progress notifications, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Running(String),
    BestEffortDone,
    Output(String),
    /// A required step hit the benign already-initialized failure.
    AlreadyInitialized { command: String, error_output: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbInitOutcome {
    Completed,
    AlreadyInitialized,
}

pub fn run(
    compose: &Compose<'_>,
    runner: &mut dyn CommandRunner,
    on_event: &mut dyn FnMut(Event),
) -> Result<DbInitOutcome> {
    compose.ensure_running(runner)?;

    for step in migration_steps(compose) {
        let command = step.invocation.to_string();
        on_event(Event::Running(command.clone()));

        let result = runner.run(&step.invocation);

        if step.policy == StepPolicy::BestEffort {
            match &result {
                Ok(out) => {
                    tracing::debug!(
                        command = %command,
                        success = out.success,
                        "best-effort step finished"
                    );
                    if !out.stdout.trim().is_empty() {
                        on_event(Event::Output(out.stdout.clone()));
                    }
                }
                Err(e) => {
                    tracing::debug!(command = %command, error = %e, "best-effort step did not spawn")
                }
            }
            on_event(Event::BestEffortDone);
            continue;
        }

        let error_output = match result {
            Ok(out) if out.success => {
                on_event(Event::Output(out.stdout));
                continue;
            }
            Ok(out) => out.stderr,
            Err(e) => e.to_string(),
        };
        let error_output = if error_output.is_empty() {
            NO_ERROR_OUTPUT.to_string()
        } else {
            error_output
        };

        if is_already_initialized(&error_output) {
            tracing::info!(command = %command, "database already initialized, stopping");
            on_event(Event::AlreadyInitialized {
                command,
                error_output,
            });
            return Ok(DbInitOutcome::AlreadyInitialized);
        }

        return Err(CardError::CommandFailed {
            command,
            stderr: error_output,
        });
    }

    Ok(DbInitOutcome::Completed)
}
