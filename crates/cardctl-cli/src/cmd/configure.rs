use crate::output;
use crate::terminal::TerminalIo;
use anyhow::Context;
use cardctl_core::config::Config;
use cardctl_core::configure::{self, ConfigureOutcome};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load .cardctl/config.yaml")?;
    let env_path = config.env_file_path(root);

    println!("--- Configuring Backend Environment ---");

    let mut io = TerminalIo::new();
    let outcome = configure::run(&mut io, &env_path, &config.database)
        .with_context(|| format!("failed to configure {}", env_path.display()))?;

    match outcome {
        ConfigureOutcome::Cancelled => println!("Configuration cancelled."),
        ConfigureOutcome::Written { path, .. } => output::success(&format!(
            "Successfully created environment file at {}",
            path.display()
        )),
    }
    Ok(())
}
