use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("input closed before a value was entered")]
    InputClosed,

    #[error(
        "The {service} container is not running or {compose} is not available. \
         Please start it with '{compose} up' first."
    )]
    ServiceUnavailable { service: String, compose: String },

    #[error("error running command: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("invalid config: compose.command must name at least one program")]
    EmptyComposeCommand,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;
