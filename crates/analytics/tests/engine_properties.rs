use analytics::{
    AnalyticsEngine, AnalyticsError, DEFAULT_CANDIDATE_RATES, analyze_zones, calculate_cpa,
    calculate_max_cpc, calculate_scenarios, feedback_status,
};
use core_types::{CampaignInputs, CampaignStatus, Zone};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Money in cents, 0.01 to 1000.00.
fn money() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Conversion rates in basis points, 0.0001 to 1.
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000).prop_map(|bps| Decimal::new(bps, 4))
}

proptest! {
    #[test]
    fn cpa_is_cpc_over_rate(cpc in money(), r in rate()) {
        prop_assert_eq!(calculate_cpa(cpc, r).unwrap(), cpc / r);
    }

    #[test]
    fn max_cpc_is_commission_times_rate(commission in money(), r in rate()) {
        prop_assert_eq!(calculate_max_cpc(commission, r).unwrap(), commission * r);
    }

    #[test]
    fn higher_rate_lowers_cpa_and_raises_max_cpc(
        amount in money(),
        a in 1i64..10_000,
        step in 1i64..100,
    ) {
        let low = Decimal::new(a, 4);
        let high = Decimal::new((a + step).min(10_000), 4);
        prop_assume!(low < high);

        prop_assert!(calculate_cpa(amount, high).unwrap() < calculate_cpa(amount, low).unwrap());
        prop_assert!(calculate_max_cpc(amount, high).unwrap() > calculate_max_cpc(amount, low).unwrap());
    }

    #[test]
    fn status_matches_comparison(cpa in money(), commission in money()) {
        let expected = if cpa < commission {
            CampaignStatus::Profitable
        } else if cpa == commission {
            CampaignStatus::BreakEven
        } else {
            CampaignStatus::Unprofitable
        };
        prop_assert_eq!(feedback_status(cpa, commission), expected);
    }

    #[test]
    fn scenarios_keep_caller_order(
        cpc in money(),
        commission in money(),
        rates in prop::collection::vec(rate(), 0..12),
    ) {
        let results = calculate_scenarios(cpc, commission, &rates).unwrap();
        let returned: Vec<Decimal> = results.iter().map(|r| r.conversion_rate).collect();
        prop_assert_eq!(returned, rates);
    }

    #[test]
    fn break_even_splits_zones(cpc in money(), commission in money()) {
        let analysis = analyze_zones(cpc, commission, DEFAULT_CANDIDATE_RATES).unwrap();

        match analysis.break_even {
            Some(point) => {
                prop_assert!(point.cpc_max >= cpc);
                // Rates are ascending, so everything before break-even is a loss.
                for p in &analysis.points {
                    let expected = if p.conversion_rate < point.conversion_rate { Zone::Loss } else { Zone::Profit };
                    prop_assert_eq!(p.zone, expected);
                }
            }
            None => prop_assert!(analysis.profit_rates().is_empty()),
        }
    }
}

#[test]
fn worked_example_is_profitable() {
    let cpa = calculate_cpa(dec!(2.0), dec!(0.02)).unwrap();
    let cpc_max = calculate_max_cpc(dec!(150.0), dec!(0.02)).unwrap();

    assert_eq!(cpa, dec!(100.0));
    assert_eq!(cpc_max, dec!(3.0));
    assert_eq!(feedback_status(cpa, dec!(150.0)), CampaignStatus::Profitable);
}

#[test]
fn low_commission_has_no_break_even_in_range() {
    let analysis = analyze_zones(
        dec!(1.0),
        dec!(50.0),
        [dec!(0.003), dec!(0.005), dec!(0.0075), dec!(0.01)],
    )
    .unwrap();

    let cpc_max: Vec<Decimal> = analysis.points.iter().map(|p| p.cpc_max).collect();
    assert_eq!(cpc_max, vec![dec!(0.15), dec!(0.25), dec!(0.375), dec!(0.50)]);
    assert_eq!(analysis.break_even, None);
}

#[test]
fn zero_rate_never_yields_infinity() {
    assert!(matches!(
        calculate_cpa(dec!(1.0), Decimal::ZERO),
        Err(AnalyticsError::InvalidInput(..))
    ));
    assert!(matches!(
        calculate_scenarios(dec!(1.0), dec!(50.0), Decimal::ZERO),
        Err(AnalyticsError::InvalidInput(..))
    ));
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(AnalyticsEngine::new());
    let inputs = CampaignInputs::new(dec!(0.5), dec!(80.0), dec!(0.01)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.evaluate(&inputs).unwrap())
        })
        .collect();

    let expected = engine.evaluate(&inputs).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
