//! Derivative consistency command handler.
//!
//! Orchestrates: select curves -> compare slopes -> render report.

use crate::commands::{CheckArgs, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use console::style;
use curvekit::{check_curves, DerivativeCheck, EasingType};
use serde::Serialize;

/// Summary of a derivative check run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Finite-difference step used
    pub step: f64,
    /// Tolerance used
    pub tolerance: f64,
    /// Number of comparisons made
    pub total: usize,
    /// Number of failed comparisons
    pub failed: usize,
    /// Largest error among exact derivatives
    pub max_error: f64,
    /// Every comparison
    pub checks: Vec<DerivativeCheck>,
}

impl CheckReport {
    /// Build a report from individual checks.
    #[must_use]
    pub fn new(step: f64, tolerance: f64, checks: Vec<DerivativeCheck>) -> Self {
        let failed = checks.iter().filter(|c| !c.passed).count();
        let max_error = checks
            .iter()
            .filter(|c| !c.approximate)
            .map(|c| c.error)
            .fold(0.0, f64::max);
        Self {
            step,
            tolerance,
            total: checks.len(),
            failed,
            max_error,
            checks,
        }
    }

    /// Whether every comparison passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.failed == 0
    }
}

/// Execute the check command.
pub fn execute_check(config: &CliConfig, args: &CheckArgs) -> CliResult<()> {
    if !args.step.is_finite() || args.step <= 0.0 {
        return Err(CliError::invalid_argument(format!(
            "step must be a positive number, got {}",
            args.step
        )));
    }
    if !args.tolerance.is_finite() || args.tolerance < 0.0 {
        return Err(CliError::invalid_argument(format!(
            "tolerance must be a non-negative number, got {}",
            args.tolerance
        )));
    }

    let curves: Vec<EasingType> = match args.curve {
        Some(curve) => vec![curve],
        None => EasingType::ALL.to_vec(),
    };
    tracing::info!(
        curves = curves.len(),
        step = args.step,
        tolerance = args.tolerance,
        "checking derivatives"
    );

    let report = CheckReport::new(
        args.step,
        args.tolerance,
        check_curves(&curves, args.step, args.tolerance),
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            print!("{}", render_text_report(&report, config.verbosity.is_quiet()));
        }
    }

    if report.passed() {
        Ok(())
    } else {
        Err(CliError::verification(format!(
            "{} of {} derivative checks failed",
            report.failed, report.total
        )))
    }
}

fn render_text_report(report: &CheckReport, summary_only: bool) -> String {
    let mut out = String::new();
    if !summary_only {
        for check in &report.checks {
            let status = if check.approximate {
                style("APPROX").yellow()
            } else if check.passed {
                style("PASS").green()
            } else {
                style("FAIL").red().bold()
            };
            out.push_str(&format!(
                "  {:<14} t={:.1} analytic={:>12.6} numeric={:>12.6} error={:.2e} {}\n",
                check.curve.name(),
                check.t,
                check.analytic,
                check.numeric,
                check.error,
                status
            ));
        }
    }
    let verdict = if report.passed() {
        style("PASS").green()
    } else {
        style("FAIL").red().bold()
    };
    out.push_str(&format!(
        "Verdict: {} ({}/{} checks, max error: {:.2e}, step: {:e}, tolerance: {:e})\n",
        verdict,
        report.total - report.failed,
        report.total,
        report.max_error,
        report.step,
        report.tolerance
    ));
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use curvekit::{DEFAULT_SLOPE_TOLERANCE, DEFAULT_STEP};

    fn args(curve: Option<EasingType>, step: f64, tolerance: f64) -> CheckArgs {
        CheckArgs {
            curve,
            step,
            tolerance,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_execute_check_catalog_passes() {
        let result = execute_check(
            &CliConfig::new(),
            &args(None, DEFAULT_STEP, DEFAULT_SLOPE_TOLERANCE),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_check_single_curve() {
        let result = execute_check(
            &CliConfig::new(),
            &args(Some(EasingType::ElasticInOut), DEFAULT_STEP, DEFAULT_SLOPE_TOLERANCE),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_check_zero_tolerance_fails() {
        let result = execute_check(&CliConfig::new(), &args(Some(EasingType::SineIn), 1e-2, 0.0));
        assert!(matches!(result, Err(CliError::Verification { .. })));
    }

    #[test]
    fn test_execute_check_rejects_bad_step() {
        let result = execute_check(&CliConfig::new(), &args(None, 0.0, 1e-2));
        assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
        let result = execute_check(&CliConfig::new(), &args(None, f64::NAN, 1e-2));
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_check_rejects_negative_tolerance() {
        let result = execute_check(&CliConfig::new(), &args(None, DEFAULT_STEP, -1.0));
        assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
    }

    #[test]
    fn test_report_counts() {
        let checks = check_curves(&[EasingType::QuadIn, EasingType::Spring], DEFAULT_STEP, 1e-2);
        let report = CheckReport::new(DEFAULT_STEP, 1e-2, checks);
        assert_eq!(report.total, 10);
        assert_eq!(report.failed, 0);
        assert!(report.passed());
        assert!(report.max_error < 1e-2);
    }

    #[test]
    fn test_render_text_report() {
        console::set_colors_enabled(false);
        let checks = check_curves(&[EasingType::Spring], DEFAULT_STEP, 1e-2);
        let report = CheckReport::new(DEFAULT_STEP, 1e-2, checks);
        let text = render_text_report(&report, false);
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("APPROX"));
        assert!(text.contains("Verdict: PASS (5/5 checks"));
    }

    #[test]
    fn test_render_text_summary_only() {
        console::set_colors_enabled(false);
        let report = CheckReport::new(DEFAULT_STEP, 1e-2, Vec::new());
        let text = render_text_report(&report, true);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Verdict: PASS (0/0"));
    }
}
