//! Evaluate command implementation
//!
//! Computes potential coverage and scenario exposure for the configured
//! settings.

use coverage_core::format::{format_currency, format_currency_cents, format_percent};
use coverage_core::prelude::*;
use serde::Serialize;
use tracing::info;

use super::{Context, OutputFormat};
use crate::Result;

/// Machine-readable evaluation result
#[derive(Debug, Serialize)]
pub struct EvaluationReport<'a> {
    /// Issuing institution
    pub institution: &'a str,
    /// Nightly sweep cap in force
    pub overdraft_limit: Amount,
    /// Ceiling from the account provider
    pub available_credit: Amount,
    /// Derived figures
    pub summary: CoverageSummary,
    /// Channel states after overrides
    pub channels: &'a [CoverageChannel],
}

/// Run the evaluate command
pub fn run(ctx: &Context, format: OutputFormat) -> Result<()> {
    info!("Evaluating coverage...");
    println!("{}", render(ctx, format)?);
    info!("Evaluation complete");
    Ok(())
}

/// Render the evaluation in `format`
pub fn render(ctx: &Context, format: OutputFormat) -> Result<String> {
    let summary = ctx.summary();
    match format {
        OutputFormat::Json => {
            let report = EvaluationReport {
                institution: &ctx.account.institution,
                overdraft_limit: ctx.state.overdraft_limit,
                available_credit: ctx.available_credit(),
                summary,
                channels: &ctx.state.channels,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Table => Ok(render_table(ctx, &summary)),
    }
}

fn render_table(ctx: &Context, summary: &CoverageSummary) -> String {
    let mut lines = vec![
        format!("{} · {}", ctx.account.institution, ctx.card),
        String::new(),
        format!(
            "Coverage            {}",
            if ctx.state.coverage_enabled { "Enabled" } else { "Disabled" }
        ),
        format!("Overdraft limit     {}", format_currency(ctx.state.overdraft_limit)),
        format!("Available credit    {}", format_currency(ctx.available_credit())),
        format!(
            "Channel capacity    {} ({} active)",
            format_currency(summary.channel_capacity),
            summary.active_channels
        ),
        String::new(),
        "┌──────────────┬──────────┬────────────┬────────────┐".to_string(),
        "│ Channel      │ State    │ Fee        │ Max sweep  │".to_string(),
        "├──────────────┼──────────┼────────────┼────────────┤".to_string(),
    ];
    for channel in &ctx.state.channels {
        lines.push(format!(
            "│ {:<12} │ {:<8} │ {:>10} │ {:>10} │",
            channel.id,
            channel.state().label(),
            format_currency_cents(channel.transfer_fee),
            format_currency(channel.max_sweep)
        ));
    }
    lines.push("└──────────────┴──────────┴────────────┴────────────┘".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Projected overdraft {}",
        format_currency_cents(summary.scenario_amount)
    ));
    lines.push(format!(
        "Ready coverage      {}",
        format_currency_cents(summary.potential_coverage)
    ));
    lines.push(format!(
        "Uncovered balance   {}",
        format_currency_cents(summary.uncovered)
    ));
    lines.push(format!(
        "Coverage ratio      {}",
        format_percent(summary.ratio_percent)
    ));
    lines.push(format!("Status              {}", summary.status.label()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ScenarioArgs;
    use infra_config::OverdraftConfig;

    fn context() -> Context {
        Context::from_config(&OverdraftConfig::default(), &ScenarioArgs::default()).unwrap()
    }

    #[test]
    fn test_table_output() {
        let out = render(&context(), OutputFormat::Table).unwrap();
        assert!(out.contains("Crescendo Bank · XXXXXXXXXX5491"));
        assert!(out.contains("Ready coverage      $1,200.00"));
        assert!(out.contains("Uncovered balance   $0.00"));
        assert!(out.contains("Coverage ratio      45%"));
        assert!(out.contains("Fully Covered"));
        assert!(out.contains("│ external     │ Off      │"));
    }

    #[test]
    fn test_json_output() {
        let out = render(&context(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"]["potential_coverage"], 1200.0);
        assert_eq!(value["summary"]["uncovered"], 0.0);
        assert_eq!(value["summary"]["status"], "FullyCovered");
        assert_eq!(value["channels"].as_array().unwrap().len(), 3);
        approx::assert_relative_eq!(
            value["summary"]["ratio_percent"].as_f64().unwrap(),
            45.0,
            epsilon = 1e-10
        );
    }
}
