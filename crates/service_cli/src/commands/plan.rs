//! Plan command implementation
//!
//! Shows which channels would be swept, in priority order, to cover a
//! shortfall.

use coverage_core::format::format_currency_cents;
use coverage_core::prelude::*;
use tracing::info;

use super::{Context, OutputFormat};
use crate::{CliError, Result};

/// Run the plan command
pub fn run(ctx: &Context, shortfall: Option<f64>, format: OutputFormat) -> Result<()> {
    info!("Planning sweeps...");
    println!("{}", render(ctx, shortfall, format)?);
    Ok(())
}

/// Render the sweep plan for `shortfall` (defaults to the scenario amount)
pub fn render(ctx: &Context, shortfall: Option<f64>, format: OutputFormat) -> Result<String> {
    let shortfall = shortfall.unwrap_or(ctx.state.scenario_amount);
    if !shortfall.is_finite() || shortfall < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "shortfall must be a non-negative amount, got {}",
            shortfall
        )));
    }

    let plan = plan_sweeps(&ctx.state.configuration(), ctx.available_credit(), shortfall);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&plan)?),
        OutputFormat::Table => {
            let mut lines = vec![format!("Shortfall {}", format_currency_cents(shortfall))];
            if plan.legs.is_empty() {
                lines.push("  (no sweeps)".to_string());
            }
            for (idx, leg) in plan.legs.iter().enumerate() {
                lines.push(format!(
                    "  {}. {:<34} {:>12}  fee {}",
                    idx + 1,
                    leg.label,
                    format_currency_cents(leg.amount),
                    format_currency_cents(leg.fee)
                ));
            }
            lines.push(format!("Total swept {}", format_currency_cents(plan.total_swept)));
            lines.push(format!("Total fees  {}", format_currency_cents(plan.total_fees)));
            lines.push(format!("Remaining   {}", format_currency_cents(plan.residual_gap)));
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ScenarioArgs;
    use infra_config::OverdraftConfig;

    fn context(limit: f64) -> Context {
        let args = ScenarioArgs {
            limit: Some(limit),
            ..ScenarioArgs::default()
        };
        Context::from_config(&OverdraftConfig::default(), &args).unwrap()
    }

    #[test]
    fn test_default_shortfall_is_scenario() {
        let out = render(&context(1200.0), None, OutputFormat::Table).unwrap();
        assert!(out.starts_with("Shortfall $540.00"));
        assert!(out.contains("Crescendo Reserve Credit"));
        assert!(out.contains("Remaining   $0.00"));
    }

    #[test]
    fn test_two_leg_plan_json() {
        let out = render(&context(3000.0), Some(1500.0), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["legs"].as_array().unwrap().len(), 2);
        assert_eq!(value["total_swept"], 1500.0);
        assert_eq!(value["total_fees"], 2.0);
    }

    #[test]
    fn test_negative_shortfall_rejected() {
        assert!(render(&context(1200.0), Some(-5.0), OutputFormat::Table).is_err());
    }
}
