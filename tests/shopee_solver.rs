//! Shopee 구간 수수료 역산(고정점 반복) 회귀 테스트.
use approx::assert_abs_diff_eq;
use precigraf::pricing::shopee::{
    CPF_SURCHARGE_PER_ORDER, MAX_SOLVER_ITERATIONS, SHOPEE_TIERS,
};
use precigraf::pricing::{
    solve, solve_shopee, solve_shopee_fixed_profit, tier_for_price, ProfitTarget, SellerType,
    ShopeeInput,
};

fn input(cost: f64, profit: ProfitTarget, seller_type: SellerType, qty: f64) -> ShopeeInput {
    ShopeeInput {
        unit_production_cost: cost,
        profit,
        seller_type,
        lot_quantity: qty,
    }
}

#[test]
fn converges_without_tier_mismatch() {
    let q = solve_shopee(&input(50.0, ProfitTarget::margin(30.0), SellerType::Cnpj, 100.0));
    assert!(q.converged);
    assert!(q.iterations <= MAX_SOLVER_ITERATIONS);
    assert!(!q.clamped);
    assert_eq!(tier_for_price(q.unit_price).level, q.tier.level);

    // 50 → 100.08 (14%+20) → 98.43 (14%+16) → 98.35 (안정)
    assert_eq!(q.iterations, 3);
    assert_eq!(q.tier.level, 1);
    assert_abs_diff_eq!(q.unit_price, 98.35, epsilon = 1e-9);
    assert_abs_diff_eq!(q.unit_commission, 13.77, epsilon = 1e-9);
    assert_abs_diff_eq!(q.unit_pix_subsidy, 4.92, epsilon = 1e-9);
    assert_abs_diff_eq!(q.unit_fixed_fees, 0.16, epsilon = 1e-9);
    assert_abs_diff_eq!(q.unit_fees, 18.85, epsilon = 1e-9);
    assert_abs_diff_eq!(q.unit_net_profit, 29.5, epsilon = 1e-9);
    assert_abs_diff_eq!(q.lot_price, 9835.0, epsilon = 1e-9);
    assert_abs_diff_eq!(q.realized_margin_percent, 30.0, epsilon = 0.1);
}

#[test]
fn cpf_seller_pays_surcharge_per_order() {
    let cnpj = solve_shopee(&input(50.0, ProfitTarget::margin(30.0), SellerType::Cnpj, 1.0));
    let cpf = solve_shopee(&input(50.0, ProfitTarget::margin(30.0), SellerType::Cpf, 1.0));
    assert_eq!(cnpj.cpf_surcharge_per_order, 0.0);
    assert_eq!(cpf.cpf_surcharge_per_order, CPF_SURCHARGE_PER_ORDER);
    assert!(cpf.unit_price > cnpj.unit_price);
    // (50 + 20 + 3) / 0.51
    assert_abs_diff_eq!(cpf.unit_price, 143.14, epsilon = 1e-9);
    assert_abs_diff_eq!(cnpj.unit_price, 137.25, epsilon = 1e-9);
    assert_eq!(cpf.tier.level, 2);
}

#[test]
fn fixed_profit_is_added_not_divided() {
    let q = solve_shopee_fixed_profit(&input(
        30.0,
        ProfitTarget::fixed(1000.0),
        SellerType::Cnpj,
        100.0,
    ));
    // (30 + 10 + 0.04) / 0.8
    assert_abs_diff_eq!(q.unit_price, 50.05, epsilon = 1e-9);
    assert_eq!(q.iterations, 1);
    assert_abs_diff_eq!(q.unit_target_profit, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(q.unit_net_profit, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(q.lot_net_profit, 1000.0, epsilon = 1e-9);
}

#[test]
fn solve_prefers_fixed_profit() {
    let both = input(
        30.0,
        ProfitTarget {
            margin_percent: 45.0,
            fixed_profit: 1000.0,
        },
        SellerType::Cnpj,
        100.0,
    );
    let fixed_only = input(30.0, ProfitTarget::fixed(1000.0), SellerType::Cnpj, 100.0);
    assert_eq!(solve(&both), solve_shopee_fixed_profit(&fixed_only));
}

#[test]
fn fees_over_hundred_percent_are_clamped() {
    let _ = env_logger::try_init();
    let q = solve_shopee(&input(50.0, ProfitTarget::margin(90.0), SellerType::Cnpj, 100.0));
    assert!(q.clamped);
    assert!(q.unit_price.is_finite() && q.unit_price > 0.0);
    // (50 + 0.26) / 0.01
    assert_abs_diff_eq!(q.unit_price, 5026.0, epsilon = 1e-9);
    assert_eq!(q.tier.level, 4);
    assert_eq!(tier_for_price(q.unit_price).level, q.tier.level);
}

#[test]
fn oscillating_tiers_stop_at_iteration_cap() {
    let _ = env_logger::try_init();
    // 0구간 요율 가격은 80 이상, 1구간 요율 가격은 80 미만이라 구간이 번갈아 바뀐다.
    let q = solve_shopee(&input(64.5, ProfitTarget::margin(0.0), SellerType::Cnpj, 1000.0));
    assert!(!q.converged);
    assert_eq!(q.iterations, MAX_SOLVER_ITERATIONS);
    // 두 후보 80.63 / 79.65 중 높은 쪽
    assert_abs_diff_eq!(q.unit_price, 80.63, epsilon = 1e-9);
    // 수수료는 최종 가격의 구간으로 계산한다
    assert_eq!(q.tier, SHOPEE_TIERS[1]);
    assert_eq!(tier_for_price(q.unit_price).level, q.tier.level);
    assert_abs_diff_eq!(q.unit_fees, 15.34, epsilon = 1e-9);
    assert_abs_diff_eq!(q.unit_net_profit, 0.79, epsilon = 1e-9);
    assert!(q.lot_net_profit > 0.0);
}

#[test]
fn unconverged_quote_still_meets_margin_target() {
    for cost in (1..400).map(|c| c as f64 * 0.5) {
        for margin in [0.0, 10.0, 25.0, 40.0] {
            for qty in [1.0, 3.0, 1000.0] {
                let q = solve_shopee(&input(cost, ProfitTarget::margin(margin), SellerType::Cnpj, qty));
                if !q.converged {
                    assert!(
                        q.unit_net_profit >= q.unit_target_profit - 0.02,
                        "cost {cost} margin {margin} qty {qty}: {q:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn zero_quantity_returns_empty_quote() {
    let q = solve(&input(50.0, ProfitTarget::margin(30.0), SellerType::Cpf, 0.0));
    assert_eq!(q.unit_price, 0.0);
    assert_eq!(q.lot_price, 0.0);
    assert_eq!(q.lot_fees, 0.0);
    assert_eq!(q.iterations, 0);
}

#[test]
fn solver_is_idempotent() {
    let i = input(73.4, ProfitTarget::margin(25.0), SellerType::Cpf, 12.0);
    let a = solve(&i);
    let b = solve(&i);
    assert_eq!(a, b);
    assert_eq!(a.unit_price.to_bits(), b.unit_price.to_bits());
}

#[test]
fn every_converged_quote_matches_its_tier() {
    for cost in (1..=120).map(|c| c as f64 * 5.0) {
        for margin in [0.0, 10.0, 25.0, 40.0] {
            for seller in [SellerType::Cpf, SellerType::Cnpj] {
                let q = solve(&input(cost, ProfitTarget::margin(margin), seller, 3.0));
                assert!(q.iterations <= MAX_SOLVER_ITERATIONS);
                assert_eq!(tier_for_price(q.unit_price).level, q.tier.level);
            }
        }
    }
}
