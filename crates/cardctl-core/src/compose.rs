//! Invocations of the container orchestration tool.

use crate::config::ComposeConfig;
use crate::error::{CardError, Result};
use crate::process::{CommandRunner, Invocation};

#[derive(Debug, Clone)]
pub struct Compose<'a> {
    config: &'a ComposeConfig,
}

impl<'a> Compose<'a> {
    pub fn new(config: &'a ComposeConfig) -> Self {
        Self { config }
    }

    pub fn service(&self) -> &str {
        &self.config.service
    }

    fn base(&self) -> Invocation {
        let mut parts = self.config.command.iter();
        // Config validation guarantees at least one element.
        let program = parts.next().map(String::as_str).unwrap_or("docker-compose");
        Invocation::new(program).args(parts.cloned())
    }

    /// `<compose> ps -q <service>`
    pub fn status_query(&self) -> Invocation {
        self.base().args(["ps", "-q", self.service()])
    }

    /// `<compose> exec <service> <args...>`
    pub fn exec<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base().args(["exec", self.service()]).args(args)
    }

    fn unavailable(&self) -> CardError {
        CardError::ServiceUnavailable {
            service: self.config.service.clone(),
            compose: self.config.display_name(),
        }
    }

    /// Fail with [`CardError::ServiceUnavailable`] unless the service has a
    /// running container.
    ///
    /// The tool must be on `PATH`, must exit zero and must print at least one
    /// container id. Its stderr is discarded. A zero exit with an empty
    /// listing is treated as not running, which is stricter than checking
    /// the exit status alone.
    pub fn ensure_running(&self, runner: &mut dyn CommandRunner) -> Result<()> {
        let query = self.status_query();
        if !runner.is_available(&query.program) {
            tracing::debug!(program = %query.program, "compose tool not found");
            return Err(self.unavailable());
        }
        match runner.run(&query) {
            Ok(out) if out.success && !out.stdout.trim().is_empty() => Ok(()),
            Ok(out) => {
                tracing::debug!(success = out.success, "service status query negative");
                Err(self.unavailable())
            }
            Err(e) => {
                tracing::debug!(error = %e, "service status query could not spawn");
                Err(self.unavailable())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::{failed, ok, FakeRunner};

    #[test]
    fn status_query_targets_service() {
        let cfg = ComposeConfig::default();
        assert_eq!(
            Compose::new(&cfg).status_query().to_string(),
            "docker-compose ps -q backend"
        );
    }

    #[test]
    fn multi_word_compose_command() {
        let cfg = ComposeConfig {
            command: vec!["docker".to_string(), "compose".to_string()],
            service: "api".to_string(),
        };
        let inv = Compose::new(&cfg).exec(["flask", "db", "upgrade"]);
        assert_eq!(inv.program, "docker");
        assert_eq!(inv.to_string(), "docker compose exec api flask db upgrade");
    }

    #[test]
    fn running_service_passes() {
        let cfg = ComposeConfig::default();
        let mut runner = FakeRunner::default();
        runner.respond("docker-compose ps -q backend", ok("3f2a9c\n"));
        Compose::new(&cfg).ensure_running(&mut runner).unwrap();
    }

    #[test]
    fn empty_status_output_means_not_running() {
        let cfg = ComposeConfig::default();
        let mut runner = FakeRunner::default();
        runner.respond("docker-compose ps -q backend", ok(""));
        let err = Compose::new(&cfg).ensure_running(&mut runner).unwrap_err();
        assert!(matches!(err, CardError::ServiceUnavailable { .. }));
    }

    #[test]
    fn failing_status_query_is_unavailable() {
        let cfg = ComposeConfig::default();
        let mut runner = FakeRunner::default();
        runner.respond("docker-compose ps -q backend", failed("no such service"));
        assert!(Compose::new(&cfg).ensure_running(&mut runner).is_err());
    }

    #[test]
    fn missing_tool_skips_the_query() {
        let cfg = ComposeConfig::default();
        let mut runner = FakeRunner {
            missing: vec!["docker-compose".to_string()],
            ..Default::default()
        };
        let err = Compose::new(&cfg).ensure_running(&mut runner).unwrap_err();
        assert!(runner.calls.is_empty());
        assert_eq!(
            err.to_string(),
            "The backend container is not running or docker-compose is not available. \
             Please start it with 'docker-compose up' first."
        );
    }
}
