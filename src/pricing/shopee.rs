//! Shopee 2026 구간별 수수료와 판매가 역산.
//!
//! 수수료 구간은 최종 판매가로 정해지는데, 최종 판매가는 수수료를 알아야 구할 수 있다.
//! 그래서 구간을 추정하고, 그 구간으로 가격을 계산하고, 가격의 구간이 바뀌지 않을 때까지
//! 반복한다. 구간은 항상 가격에서 다시 구하며 결과에 저장하지 않는다.

use log::{debug, warn};

use super::composer::{lot_count, margin_on_price, ProfitTarget};
use super::marketplace::SellerType;
use crate::money::{margin_percent, non_negative, round2};

/// CPF 판매자 주문당 추가 수수료 [R$].
pub const CPF_SURCHARGE_PER_ORDER: f64 = 3.0;
/// 반복 상한. 구간이 5개뿐이라 가격이 넘을 수 있는 경계는 몇 개 되지 않는다.
pub const MAX_SOLVER_ITERATIONS: usize = 10;
/// 분모(1 - 수수료 - 보조금 - 마진)가 0 이하일 때 대신 나누는 값.
pub const DENOMINATOR_FLOOR: f64 = 0.01;

/// 판매가 구간 하나의 수수료.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopeeTier {
    /// 0부터 시작하는 구간 번호
    pub level: u8,
    /// 구간 하한 [R$] (포함)
    pub min_price: f64,
    /// 구간 상한 [R$]. 마지막 구간은 `None`.
    pub max_price: Option<f64>,
    pub commission_percent: f64,
    /// 주문당 고정 수수료 [R$]
    pub fixed_fee: f64,
    pub pix_subsidy_percent: f64,
}

pub const SHOPEE_TIERS: [ShopeeTier; 5] = [
    ShopeeTier {
        level: 0,
        min_price: 0.0,
        max_price: Some(79.99),
        commission_percent: 20.0,
        fixed_fee: 4.0,
        pix_subsidy_percent: 0.0,
    },
    ShopeeTier {
        level: 1,
        min_price: 80.0,
        max_price: Some(99.99),
        commission_percent: 14.0,
        fixed_fee: 16.0,
        pix_subsidy_percent: 5.0,
    },
    ShopeeTier {
        level: 2,
        min_price: 100.0,
        max_price: Some(199.99),
        commission_percent: 14.0,
        fixed_fee: 20.0,
        pix_subsidy_percent: 5.0,
    },
    ShopeeTier {
        level: 3,
        min_price: 200.0,
        max_price: Some(499.99),
        commission_percent: 14.0,
        fixed_fee: 26.0,
        pix_subsidy_percent: 5.0,
    },
    ShopeeTier {
        level: 4,
        min_price: 500.0,
        max_price: None,
        commission_percent: 14.0,
        fixed_fee: 26.0,
        pix_subsidy_percent: 8.0,
    },
];

/// 판매가(1개)가 속하는 구간을 찾는다. 순수 함수이며 결과를 캐시하지 않는다.
pub fn tier_for_price(unit_price: f64) -> &'static ShopeeTier {
    let price = round2(non_negative(unit_price));
    SHOPEE_TIERS
        .iter()
        .rev()
        .find(|t| price >= t.min_price)
        .unwrap_or(&SHOPEE_TIERS[0])
}

/// 주문당 추가 수수료.
pub fn seller_surcharge(seller_type: SellerType) -> f64 {
    match seller_type {
        SellerType::Cpf => CPF_SURCHARGE_PER_ORDER,
        SellerType::Cnpj => 0.0,
    }
}

/// 역산 입력.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShopeeInput {
    /// 제품 1개당 생산원가 (재료비 + 운영비) [R$]
    pub unit_production_cost: f64,
    /// 마진 %는 판매가 대비 비율로 해석한다.
    pub profit: ProfitTarget,
    pub seller_type: SellerType,
    pub lot_quantity: f64,
}

/// 역산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopeeQuote {
    /// 최종 판매가의 구간. 수수료 계산에 쓴 구간과 항상 같다.
    pub tier: ShopeeTier,
    pub seller_type: SellerType,
    pub lot_quantity: f64,
    pub unit_production_cost: f64,
    pub unit_price: f64,
    pub lot_price: f64,
    pub unit_commission: f64,
    pub unit_pix_subsidy: f64,
    pub fixed_fee_per_order: f64,
    pub cpf_surcharge_per_order: f64,
    /// (고정 수수료 + CPF 추가 수수료) / 로트 수량
    pub unit_fixed_fees: f64,
    pub unit_fees: f64,
    pub lot_fees: f64,
    /// 목표 이익 (1개) [R$]
    pub unit_target_profit: f64,
    pub unit_net_profit: f64,
    pub lot_net_profit: f64,
    /// 판매가 대비 실제 이익률 [%]
    pub realized_margin_percent: f64,
    pub iterations: usize,
    /// false면 구간이 진동해 반복 상한에서 멈춘 것
    pub converged: bool,
    /// true면 분모가 0 이하라 하한값으로 나눈 근사 가격
    pub clamped: bool,
}

impl ShopeeQuote {
    fn empty(seller_type: SellerType) -> Self {
        Self {
            tier: SHOPEE_TIERS[0],
            seller_type,
            lot_quantity: 0.0,
            unit_production_cost: 0.0,
            unit_price: 0.0,
            lot_price: 0.0,
            unit_commission: 0.0,
            unit_pix_subsidy: 0.0,
            fixed_fee_per_order: 0.0,
            cpf_surcharge_per_order: 0.0,
            unit_fixed_fees: 0.0,
            unit_fees: 0.0,
            lot_fees: 0.0,
            unit_target_profit: 0.0,
            unit_net_profit: 0.0,
            lot_net_profit: 0.0,
            realized_margin_percent: 0.0,
            iterations: 0,
            converged: true,
            clamped: false,
        }
    }
}

/// 가격 계산식의 변하지 않는 항.
struct Equation {
    unit_cost: f64,
    /// 분자에 더하는 1개당 고정 이익 (고정 이익 방식)
    unit_fixed_profit: f64,
    /// 분모에서 빼는 마진 비율 (마진 % 방식)
    margin_fraction: f64,
    surcharge: f64,
    qty: f64,
}

impl Equation {
    fn unit_fixed_fees(&self, tier: &ShopeeTier) -> f64 {
        round2((tier.fixed_fee + self.surcharge) / self.qty)
    }

    /// 주어진 구간에서 가격을 계산한다. 반환값은 (가격, 분모 클램프 여부).
    fn price_for(&self, tier: &ShopeeTier) -> (f64, bool) {
        let denominator = 1.0
            - tier.commission_percent / 100.0
            - tier.pix_subsidy_percent / 100.0
            - self.margin_fraction;
        let numerator = self.unit_cost + self.unit_fixed_profit + self.unit_fixed_fees(tier);
        if denominator <= 0.0 {
            (round2(numerator / DENOMINATOR_FLOOR), true)
        } else {
            (round2(numerator / denominator), false)
        }
    }
}

/// 판매가 대비 마진 %를 목표로 Shopee 판매가를 역산한다.
pub fn solve_shopee(input: &ShopeeInput) -> ShopeeQuote {
    let margin_fraction = margin_percent(input.profit.margin_percent) / 100.0;
    solve_with(input, 0.0, margin_fraction)
}

/// 로트 전체 고정 이익을 목표로 Shopee 판매가를 역산한다.
///
/// 고정 이익은 수수료율과 무관하므로 분모가 아니라 분자에 더한다.
pub fn solve_shopee_fixed_profit(input: &ShopeeInput) -> ShopeeQuote {
    let Some(qty) = lot_count(input.lot_quantity) else {
        return ShopeeQuote::empty(input.seller_type);
    };
    let unit_fixed_profit = round2(non_negative(input.profit.fixed_profit) / qty);
    solve_with(input, unit_fixed_profit, 0.0)
}

/// 이익 목표에 맞는 역산 방식을 고른다. 고정 이익이 마진 %보다 우선한다.
pub fn solve(input: &ShopeeInput) -> ShopeeQuote {
    if input.profit.uses_fixed_profit() {
        solve_shopee_fixed_profit(input)
    } else {
        solve_shopee(input)
    }
}

fn solve_with(input: &ShopeeInput, unit_fixed_profit: f64, margin_fraction: f64) -> ShopeeQuote {
    let Some(qty) = lot_count(input.lot_quantity) else {
        return ShopeeQuote::empty(input.seller_type);
    };
    let eq = Equation {
        unit_cost: round2(non_negative(input.unit_production_cost)),
        unit_fixed_profit,
        margin_fraction,
        surcharge: seller_surcharge(input.seller_type),
        qty,
    };

    let mut tier = tier_for_price(eq.unit_cost);
    let mut price = eq.unit_cost;
    let mut clamped = false;
    let mut converged = false;
    let mut iterations = 0;
    // 반복이 끝나지 않으면 가장 높은 후보를 쓴다
    let mut highest = (0.0, false);

    while iterations < MAX_SOLVER_ITERATIONS {
        iterations += 1;
        let (candidate, was_clamped) = eq.price_for(tier);
        price = candidate;
        clamped = was_clamped;
        if candidate > highest.0 {
            highest = (candidate, was_clamped);
        }
        let next = tier_for_price(candidate);
        debug!(
            "shopee iteration {iterations}: tier {} -> price {candidate:.2} (tier {})",
            tier.level, next.level
        );
        if next.level == tier.level {
            converged = true;
            break;
        }
        tier = next;
    }

    if !converged {
        // 같은 구간 요율이면 가격이 높을수록 이익도 커지므로 목표 이익 이상이 남는다.
        (price, clamped) = highest;
        warn!("shopee: tier did not stabilize after {MAX_SOLVER_ITERATIONS} iterations, using highest candidate {price:.2}");
    }

    if clamped {
        warn!("shopee: fees plus margin reach 100%, price {price:.2} is a clamped approximation");
    }
    // 수수료는 항상 최종 가격의 구간으로 계산한다.
    let tier = *tier_for_price(price);
    let unit_commission = round2(price * tier.commission_percent / 100.0);
    let unit_pix_subsidy = round2(price * tier.pix_subsidy_percent / 100.0);
    let unit_fixed_fees = eq.unit_fixed_fees(&tier);
    let unit_fees = round2(unit_commission + unit_pix_subsidy + unit_fixed_fees);
    let unit_net_profit = round2(price - eq.unit_cost - unit_fees);
    let lot_price = round2(price * qty);
    let lot_fees = round2(unit_fees * qty);
    let lot_net_profit = round2(lot_price - round2(eq.unit_cost * qty) - lot_fees);
    let unit_target_profit = if margin_fraction > 0.0 {
        round2(price * margin_fraction)
    } else {
        unit_fixed_profit
    };

    ShopeeQuote {
        tier,
        seller_type: input.seller_type,
        lot_quantity: qty,
        unit_production_cost: eq.unit_cost,
        unit_price: price,
        lot_price,
        unit_commission,
        unit_pix_subsidy,
        fixed_fee_per_order: tier.fixed_fee,
        cpf_surcharge_per_order: eq.surcharge,
        unit_fixed_fees,
        unit_fees,
        lot_fees,
        unit_target_profit,
        unit_net_profit,
        lot_net_profit,
        realized_margin_percent: margin_on_price(unit_net_profit, price),
        iterations,
        converged,
        clamped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_follow_price_ranges() {
        assert_eq!(tier_for_price(0.0).level, 0);
        assert_eq!(tier_for_price(79.99).level, 0);
        assert_eq!(tier_for_price(80.0).level, 1);
        assert_eq!(tier_for_price(99.99).level, 1);
        assert_eq!(tier_for_price(100.0).level, 2);
        assert_eq!(tier_for_price(199.99).level, 2);
        assert_eq!(tier_for_price(200.0).level, 3);
        assert_eq!(tier_for_price(499.99).level, 3);
        assert_eq!(tier_for_price(500.0).level, 4);
        assert_eq!(tier_for_price(10_000.0).level, 4);
    }

    #[test]
    fn negative_or_nan_price_falls_in_first_tier() {
        assert_eq!(tier_for_price(-5.0).level, 0);
        assert_eq!(tier_for_price(f64::NAN).level, 0);
    }

    #[test]
    fn equation_clamps_non_positive_denominator() {
        let eq = Equation {
            unit_cost: 10.0,
            unit_fixed_profit: 0.0,
            margin_fraction: 0.9,
            surcharge: 0.0,
            qty: 1.0,
        };
        let (price, clamped) = eq.price_for(&SHOPEE_TIERS[0]);
        assert!(clamped);
        // (10 + 4) / 0.01
        assert_eq!(price, 1400.0);
    }
}
