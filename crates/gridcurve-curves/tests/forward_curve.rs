//! Integration tests for curve building, sampling and hedge estimates.

use approx::assert_relative_eq;
use gridcurve_core::PriceTable;
use gridcurve_curves::prelude::*;
use proptest::prelude::*;

fn market_quotes() -> PriceTable {
    PriceTable::from_pairs([(0.0, 90.0), (1.0, 92.0), (2.0, 94.0), (3.0, 98.0), (12.0, 105.0)])
        .unwrap()
}

#[test]
fn test_end_to_end_quotes() {
    let curve = build_curve(&market_quotes()).unwrap();

    let ends = sample(&curve, &[0.0, 12.0]).unwrap();
    assert_relative_eq!(ends[0].price, 90.0, epsilon = 1e-9);
    assert_relative_eq!(ends[1].price, 105.0, epsilon = 1e-9);

    let tenors: Vec<f64> = (1..=12).map(f64::from).collect();
    let monthly = sample(&curve, &tenors).unwrap();
    let mean = monthly.iter().map(|p| p.price).sum::<f64>() / 12.0;

    let cost = estimate_hedge_cost(&curve, 100.0, 12).unwrap();
    assert_relative_eq!(cost, mean * 100.0, max_relative = 1e-12);
}

#[test]
fn test_hedge_estimate_matches_scalar() {
    let curve = build_curve(&market_quotes()).unwrap();
    let estimate = HedgeEstimate::compute(&curve, 100.0, 12).unwrap();
    let scalar = estimate_hedge_cost(&curve, 100.0, 12).unwrap();

    assert_eq!(estimate.average_cost, scalar);
    assert_relative_eq!(estimate.average_cost * 12.0, estimate.total_cost, max_relative = 1e-12);
    assert_relative_eq!(estimate.average_price * 100.0, estimate.average_cost, max_relative = 1e-12);
}

#[test]
fn test_too_few_points() {
    let one = PriceTable::from_pairs([(1.0, 92.0)]).unwrap();
    assert_eq!(
        build_curve(&one).unwrap_err(),
        CurveError::InsufficientPoints { required: 2, got: 1 }
    );
    assert_eq!(
        build_curve(&PriceTable::empty()).unwrap_err(),
        CurveError::InsufficientPoints { required: 2, got: 0 }
    );
}

#[test]
fn test_two_points_are_linear() {
    let table = PriceTable::from_pairs([(0.0, 80.0), (4.0, 100.0)]).unwrap();
    let curve = build_curve(&table).unwrap();
    assert_relative_eq!(curve.value_at(1.0).unwrap(), 85.0, epsilon = 1e-10);
    assert_relative_eq!(curve.value_at(3.0).unwrap(), 95.0, epsilon = 1e-10);
}

#[test]
fn test_zero_horizon() {
    let curve = build_curve(&market_quotes()).unwrap();
    assert_eq!(
        estimate_hedge_cost(&curve, 100.0, 0).unwrap_err(),
        CurveError::InvalidHorizon { horizon: 0 }
    );
}

#[test]
fn test_flat_beyond_last_tenor() {
    let curve = build_curve(&market_quotes()).unwrap();
    let far = sample(&curve, &[18.0, 36.0]).unwrap();
    assert_relative_eq!(far[0].price, 105.0, epsilon = 1e-10);
    assert_relative_eq!(far[1].price, 105.0, epsilon = 1e-10);
}

#[test]
fn test_curve_is_deterministic() {
    let a = build_curve(&market_quotes()).unwrap();
    let b = build_curve(&market_quotes()).unwrap();
    let grid: Vec<f64> = (0..=48).map(|i| f64::from(i) * 0.25).collect();
    assert_eq!(a.sample(&grid).unwrap(), b.sample(&grid).unwrap());
}

fn quote_tables() -> impl Strategy<Value = PriceTable> {
    proptest::collection::vec((0.5f64..3.0, 20.0f64..300.0), 4..10).prop_map(|steps| {
        let mut tenor = 0.0;
        let pairs: Vec<(f64, f64)> = steps
            .into_iter()
            .map(|(gap, price)| {
                tenor += gap;
                (tenor, price)
            })
            .collect();
        PriceTable::from_pairs(pairs).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_curve_reproduces_quotes(table in quote_tables()) {
        let curve = build_curve(&table).unwrap();
        let sampled = sample(&curve, &table.periods()).unwrap();
        for (s, q) in sampled.iter().zip(table.iter()) {
            prop_assert!((s.price - q.price).abs() < 1e-8);
        }
    }

    #[test]
    fn prop_sample_preserves_order_and_length(
        table in quote_tables(),
        tenors in proptest::collection::vec(0.0f64..40.0, 0..50),
    ) {
        let curve = build_curve(&table).unwrap();
        let sampled = sample(&curve, &tenors).unwrap();
        prop_assert_eq!(sampled.len(), tenors.len());
        for (p, t) in sampled.iter().zip(tenors.iter()) {
            prop_assert_eq!(p.period, *t);
        }
    }

    #[test]
    fn prop_hedge_cost_linear_in_exposure(
        table in quote_tables(),
        exposure in -500.0f64..500.0,
        k in -10.0f64..10.0,
        horizon in 1u32..36,
    ) {
        let curve = build_curve(&table).unwrap();
        let base = estimate_hedge_cost(&curve, exposure, horizon).unwrap();
        let scaled = estimate_hedge_cost(&curve, exposure * k, horizon).unwrap();
        prop_assert!((scaled - base * k).abs() <= 1e-9 * (1.0 + (base * k).abs()));
    }

    #[test]
    fn prop_single_period_hedge(table in quote_tables(), exposure in -500.0f64..500.0) {
        let curve = build_curve(&table).unwrap();
        let cost = estimate_hedge_cost(&curve, exposure, 1).unwrap();
        let price = sample(&curve, &[1.0]).unwrap()[0].price;
        prop_assert!((cost - price * exposure).abs() <= 1e-12 * (1.0 + cost.abs()));
    }
}
