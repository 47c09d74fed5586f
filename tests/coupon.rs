//! 할인 쿠폰 시뮬레이션 회귀 테스트.
use approx::assert_abs_diff_eq;
use precigraf::pricing::coupon::{MAX_DISCOUNT_PERCENT, MIN_DISCOUNT_PERCENT};
use precigraf::pricing::{
    compose, simulate_coupon, CouponInput, CouponSeverity, PricingInput, ProfitTarget,
};

fn coupon(discount_percent: f64, cost: f64) -> CouponInput {
    CouponInput {
        final_selling_price: 100.0,
        discount_percent,
        lot_production_cost: cost,
        lot_profit: 100.0 - cost,
    }
}

#[test]
fn margin_below_thirty_percent_warns() {
    let sim = simulate_coupon(&coupon(20.0, 60.0));
    assert_abs_diff_eq!(sim.discounted_price, 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.discount_amount, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.discounted_profit, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.discounted_margin_percent, 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.original_margin_percent, 40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.profit_loss, 20.0, epsilon = 1e-9);
    assert_eq!(sim.severity, CouponSeverity::Warning);
}

#[test]
fn discount_eating_profit_is_critical() {
    let sim = simulate_coupon(&coupon(50.0, 60.0));
    assert_abs_diff_eq!(sim.discounted_profit, -10.0, epsilon = 1e-9);
    assert_eq!(sim.severity, CouponSeverity::Critical);

    // 이익이 정확히 0이어도 위험
    let sim = simulate_coupon(&coupon(40.0, 60.0));
    assert_eq!(sim.discounted_profit, 0.0);
    assert_eq!(sim.severity, CouponSeverity::Critical);
}

#[test]
fn healthy_discount_has_no_alert() {
    let sim = simulate_coupon(&coupon(10.0, 50.0));
    assert_abs_diff_eq!(sim.discounted_margin_percent, 44.44, epsilon = 1e-9);
    assert_eq!(sim.severity, CouponSeverity::None);
}

#[test]
fn discount_is_clamped_to_supported_range() {
    let sim = simulate_coupon(&coupon(80.0, 10.0));
    assert_eq!(sim.discount_percent, MAX_DISCOUNT_PERCENT);
    assert_abs_diff_eq!(sim.discounted_price, 50.0, epsilon = 1e-9);

    let sim = simulate_coupon(&coupon(0.0, 10.0));
    assert_eq!(sim.discount_percent, MIN_DISCOUNT_PERCENT);
    assert_abs_diff_eq!(sim.discounted_price, 99.0, epsilon = 1e-9);

    let sim = simulate_coupon(&coupon(f64::NAN, 10.0));
    assert_eq!(sim.discount_percent, MIN_DISCOUNT_PERCENT);
}

#[test]
fn reuses_composer_cost_basis() {
    let res = compose(&PricingInput {
        unit_raw_materials_cost: 2.3,
        operational_total: 30.0,
        lot_quantity: 10.0,
        profit: ProfitTarget::margin(50.0),
        commission_percent: 0.0,
        fixed_fee_per_order: 0.0,
    });
    let sim = simulate_coupon(&CouponInput {
        final_selling_price: res.final_selling_price,
        discount_percent: 15.0,
        lot_production_cost: res.production_cost,
        lot_profit: res.net_profit,
    });
    // 79.5 × 0.85 = 67.575 → 67.58, 67.58 - 53 = 14.58
    assert_abs_diff_eq!(sim.discounted_price, 67.58, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.discounted_profit, 14.58, epsilon = 1e-9);
    // 수수료가 없으면 순이익 기준과 같다
    assert_abs_diff_eq!(sim.discounted_net_profit, 14.58, epsilon = 1e-9);
    assert_eq!(sim.severity, CouponSeverity::Warning);
}

#[test]
fn fees_already_paid_do_not_inflate_discounted_profit() {
    // 순이익 20은 판매가 100 - 원가 50 - 수수료 30
    let sim = simulate_coupon(&CouponInput {
        final_selling_price: 100.0,
        discount_percent: 10.0,
        lot_production_cost: 50.0,
        lot_profit: 20.0,
    });
    assert_abs_diff_eq!(sim.original_profit, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.discounted_profit, 40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.profit_loss, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.original_margin_percent, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sim.discounted_net_profit, 10.0, epsilon = 1e-9);
    assert!(sim.discounted_profit <= sim.original_profit);
}

#[test]
fn profit_loss_matches_discount_amount() {
    for d in [1.0, 7.5, 15.0, 33.0, 50.0] {
        let sim = simulate_coupon(&CouponInput {
            final_selling_price: 61.0,
            discount_percent: d,
            lot_production_cost: 32.0,
            lot_profit: 16.0,
        });
        assert!(sim.profit_loss >= 0.0);
        assert_abs_diff_eq!(sim.profit_loss, sim.discount_amount, epsilon = 1e-9);
        assert!(sim.discounted_net_profit <= 16.0);
    }
}

#[test]
fn zero_price_is_critical_not_nan() {
    let sim = simulate_coupon(&CouponInput::default());
    assert_eq!(sim.discounted_price, 0.0);
    assert_eq!(sim.discounted_margin_percent, 0.0);
    assert_eq!(sim.severity, CouponSeverity::Critical);
}
