//! Property-based tests for the coverage engine, scenario evaluator and
//! channel toggle.

use coverage_core::prelude::*;
use proptest::prelude::*;

/// Non-negative dollar amounts in a practical range.
fn amount_strategy() -> impl Strategy<Value = f64> {
    0.0..10_000.0
}

fn channel_strategy() -> impl Strategy<Value = (bool, f64, f64)> {
    (any::<bool>(), 0.0..10.0, 0.0..5_000.0)
}

fn channels_strategy() -> impl Strategy<Value = Vec<CoverageChannel>> {
    prop::collection::vec(channel_strategy(), 0..6).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(idx, (enabled, fee, cap))| CoverageChannel {
                id: format!("ch{}", idx),
                label: format!("Channel {}", idx),
                description: String::new(),
                enabled,
                transfer_fee: fee,
                max_sweep: cap,
            })
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = CoverageConfiguration> {
    (any::<bool>(), 300.0..=3000.0, channels_strategy()).prop_map(
        |(coverage_enabled, overdraft_limit, channels)| CoverageConfiguration {
            coverage_enabled,
            overdraft_limit,
            channels,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_disabled_coverage_is_always_zero(
        config in config_strategy(),
        ceiling in amount_strategy()
    ) {
        let config = CoverageConfiguration { coverage_enabled: false, ..config };
        prop_assert_eq!(compute_coverage(&config, ceiling), 0.0);
    }

    #[test]
    fn test_coverage_bounded_by_limit_and_ceiling(
        config in config_strategy(),
        ceiling in amount_strategy()
    ) {
        let coverage = compute_coverage(&config, ceiling);
        prop_assert!(coverage >= 0.0);
        prop_assert!(coverage <= config.overdraft_limit.min(ceiling));
        prop_assert!(coverage <= channel_capacity(&config.channels));
    }

    #[test]
    fn test_uncovered_is_positive_part(
        s in amount_strategy(),
        c in amount_strategy()
    ) {
        let outcome = evaluate_scenario(s, c);
        prop_assert_eq!(outcome.uncovered, (s - c).max(0.0));
        prop_assert_eq!(outcome.uncovered == 0.0, s <= c);
    }

    #[test]
    fn test_zero_coverage_ratio_is_zero(s in amount_strategy()) {
        prop_assert_eq!(evaluate_scenario(s, 0.0).ratio_percent, 0.0);
    }

    #[test]
    fn test_ratio_within_percent_bounds(
        s in amount_strategy(),
        c in amount_strategy()
    ) {
        let ratio = evaluate_scenario(s, c).ratio_percent;
        prop_assert!((0.0..=100.0).contains(&ratio), "ratio {} out of bounds", ratio);
    }

    #[test]
    fn test_toggle_is_involutive(
        channels in channels_strategy(),
        pick in 0usize..8
    ) {
        let id = format!("ch{}", pick);
        let twice = toggle_channel(&toggle_channel(&channels, &id), &id);
        prop_assert_eq!(twice, channels);
    }

    #[test]
    fn test_sweep_total_matches_coverage(
        config in config_strategy(),
        ceiling in amount_strategy(),
        shortfall in amount_strategy()
    ) {
        let coverage = compute_coverage(&config, ceiling);
        let plan = plan_sweeps(&config, ceiling, shortfall);
        let expected = shortfall.min(coverage);
        prop_assert!((plan.total_swept - expected).abs() < 1e-6);
        prop_assert!(plan.legs.iter().all(|leg| leg.amount > 0.0));
        prop_assert!(plan.residual_gap >= 0.0);
    }

    #[test]
    fn test_reducer_keeps_sliders_in_range(value in -10_000.0f64..10_000.0) {
        let state = DashboardState::default();
        let state = update(&state, &DashboardAction::SetOverdraftLimit(value));
        let state = update(&state, &DashboardAction::SetPreferredBuffer(value));
        let state = update(&state, &DashboardAction::SetScenarioAmount(value));
        prop_assert!(state.validated().is_ok());
    }
}
