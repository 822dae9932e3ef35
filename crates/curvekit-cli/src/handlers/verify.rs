//! Keyframe verification command handler.
//!
//! Orchestrates: read keyframes -> verify against curve -> render report.

use crate::commands::{OutputFormat, VerifyArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use console::style;
use curvekit::{verify_curve, CurveVerification, Keyframe, Range};
use std::path::Path;

/// Read a JSON array of keyframes.
pub fn load_keyframes(path: &Path) -> CliResult<Vec<Keyframe>> {
    if !path.exists() {
        return Err(CliError::invalid_argument(format!(
            "Keyframes file not found: {}",
            path.display()
        )));
    }
    let json = std::fs::read_to_string(path)?;
    let keyframes: Vec<Keyframe> = serde_json::from_str(&json)?;
    tracing::debug!(path = %path.display(), keyframes = keyframes.len(), "loaded keyframes");
    Ok(keyframes)
}

/// Execute the verify command.
pub fn execute_verify(config: &CliConfig, args: &VerifyArgs) -> CliResult<()> {
    if !args.tolerance.is_finite() || args.tolerance < 0.0 {
        return Err(CliError::invalid_argument(format!(
            "tolerance must be a non-negative number, got {}",
            args.tolerance
        )));
    }

    let keyframes = load_keyframes(&args.keyframes)?;
    if config.verbosity.is_verbose() {
        eprintln!(
            "Verifying {} keyframes from {} against {}",
            keyframes.len(),
            args.keyframes.display(),
            args.curve
        );
    }

    let range = Range::new(args.start, args.end);
    let result = verify_curve(&keyframes, args.curve, range, args.tolerance);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!(
            "{}",
            render_text_report(&keyframes, &result, args.tolerance, config.verbosity.is_quiet())
        ),
    }

    if result.passed {
        Ok(())
    } else {
        Err(CliError::verification(format!(
            "keyframes deviate from {} by up to {:.6} (tolerance {})",
            result.expected, result.max_deviation, args.tolerance
        )))
    }
}

fn render_text_report(
    keyframes: &[Keyframe],
    result: &CurveVerification,
    tolerance: f64,
    summary_only: bool,
) -> String {
    let mut out = String::new();
    if !summary_only {
        out.push_str(&format!(
            "Curve: {} in [{}, {}] (tolerance: {})\n",
            result.expected, result.range.start, result.range.end, tolerance
        ));
        for (kf, deviation) in keyframes.iter().zip(&result.deviations) {
            let status = if *deviation <= tolerance {
                style("PASS").green()
            } else {
                style("FAIL").red().bold()
            };
            out.push_str(&format!(
                "  t={:.4} value={:.6} deviation={:.6} {}\n",
                kf.t, kf.value, deviation, status
            ));
        }
    }
    let verdict = if result.passed {
        style("PASS").green()
    } else {
        style("FAIL").red().bold()
    };
    out.push_str(&format!(
        "Verdict: {} ({} keyframes, max deviation: {:.6}, mean deviation: {:.6})\n",
        verdict,
        keyframes.len(),
        result.max_deviation,
        result.mean_deviation
    ));
    out
}
