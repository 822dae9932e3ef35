//! Command handlers - one module per subcommand
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure rendering helpers
//! - Tests

pub mod check;
pub mod eval;
pub mod list;
pub mod sample;
pub mod transition;
pub mod verify;

pub use check::{execute_check, CheckReport};
pub use eval::{execute_eval, EvalOutput};
pub use list::{catalog_rows, execute_list, CurveInfo};
pub use sample::execute_sample;
pub use transition::{execute_transition, TransitionSample};
pub use verify::{execute_verify, load_keyframes};
