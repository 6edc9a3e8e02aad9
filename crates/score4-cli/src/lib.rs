//! Command-line driver for score4.

pub mod command;
pub mod driver;
pub mod error;

pub use command::{Invocation, parse_args};
pub use driver::{Outcome, run};
pub use error::CliError;
