//! curvekit CLI: evaluate and check easing curves
//!
//! ## Usage
//!
//! ```bash
//! curvekit list                              # Show the catalog
//! curvekit eval QuadInOut 0.25 --end 10 -d   # Value and slope
//! curvekit sample bounce_out -n 21           # Sample a curve
//! curvekit check                             # Derivative consistency
//! curvekit verify frames.json --curve BackOut
//! curvekit transition motion.json drop --at 0.4
//! ```

use clap::Parser;
use curvekit_cli::{handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    logging::init(config.verbosity);
    console::set_colors_enabled(config.color.should_color());

    match cli.command {
        Commands::List(args) => handlers::execute_list(&config, &args),
        Commands::Eval(args) => handlers::execute_eval(&config, &args),
        Commands::Sample(args) => handlers::execute_sample(&config, &args),
        Commands::Check(args) => handlers::execute_check(&config, &args),
        Commands::Verify(args) => handlers::execute_verify(&config, &args),
        Commands::Transition(args) => handlers::execute_transition(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
