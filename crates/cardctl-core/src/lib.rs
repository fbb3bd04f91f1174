pub mod compose;
pub mod config;
pub mod configure;
pub mod db_init;
pub mod env_file;
pub mod error;
pub mod io;
pub mod paths;
pub mod process;
pub mod prompt;

pub use error::{CardError, Result};
