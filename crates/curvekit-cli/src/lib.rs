//! curvekit CLI library
//!
//! Command-line front end for the curvekit easing catalog: list the
//! catalog, evaluate and sample curves, check derivatives, verify recorded
//! keyframes and play back configured transitions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{
    parse_curve, CheckArgs, Cli, ColorArg, Commands, EvalArgs, ListArgs, OutputFormat,
    SampleArgs, TransitionArgs, VerifyArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
