//! Catalog listing command handler.

use crate::commands::{ListArgs, OutputFormat};
use crate::config::CliConfig;
use crate::error::CliResult;
use curvekit::{CurveFamily, Direction, EasingType};
use serde::Serialize;

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurveInfo {
    /// Raw catalog index
    pub index: usize,
    /// Curve name
    pub name: &'static str,
    /// Curve family
    pub family: CurveFamily,
    /// In/Out/InOut, absent for Linear and Spring
    pub direction: Option<Direction>,
    /// Whether the curve leaves its output range
    pub overshoots: bool,
}

/// Describe every catalog entry in index order.
#[must_use]
pub fn catalog_rows() -> Vec<CurveInfo> {
    EasingType::ALL
        .iter()
        .map(|&curve| CurveInfo {
            index: curve.index(),
            name: curve.name(),
            family: curve.family(),
            direction: curve.direction(),
            overshoots: curve.overshoots(),
        })
        .collect()
}

/// Execute the list command.
pub fn execute_list(config: &CliConfig, args: &ListArgs) -> CliResult<()> {
    let rows = catalog_rows();
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => print!("{}", render_text(&rows, config.verbosity.is_verbose())),
    }
    Ok(())
}

fn render_text(rows: &[CurveInfo], detailed: bool) -> String {
    let mut out = String::new();
    for row in rows {
        if detailed {
            let direction = row.direction.map_or_else(|| "-".to_string(), |d| d.to_string());
            let family = format!("{:?}", row.family);
            let overshoot = if row.overshoots { "overshoots" } else { "" };
            out.push_str(&format!(
                "{:>3}  {:<14} {:<8} {:<7} {}\n",
                row.index, row.name, family, direction, overshoot
            ));
        } else {
            out.push_str(&format!("{:>3}  {}\n", row.index, row.name));
        }
    }
    out
}
