use crate::money::{clamp_range, non_negative, round2};

use super::composer::margin_on_price;

pub const MIN_DISCOUNT_PERCENT: f64 = 1.0;
pub const MAX_DISCOUNT_PERCENT: f64 = 50.0;
/// 이 이익률 미만이면 경고.
pub const WARNING_MARGIN_PERCENT: f64 = 30.0;

/// 할인 쿠폰 적용 시 위험도.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponSeverity {
    None,
    /// 이익은 남지만 이익률이 30% 미만
    Warning,
    /// 이익이 0 이하
    Critical,
}

/// 쿠폰 시뮬레이션 입력. 금액은 로트 합계.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CouponInput {
    pub final_selling_price: f64,
    /// 할인율 [%], 1~50으로 클램프
    pub discount_percent: f64,
    pub lot_production_cost: f64,
    /// 채널 수수료를 뺀 순이익. 할인 후 순이익 추정에만 쓴다.
    pub lot_profit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CouponSimulation {
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub discounted_price: f64,
    /// 판매가 - 생산원가 (수수료 차감 전)
    pub original_profit: f64,
    /// 할인가 - 생산원가 (수수료 차감 전)
    pub discounted_profit: f64,
    pub original_margin_percent: f64,
    pub discounted_margin_percent: f64,
    /// 할인으로 줄어든 이익. 양쪽 모두 수수료 차감 전 기준.
    pub profit_loss: f64,
    /// 수수료를 그대로 둔 할인 후 순이익 (`lot_profit - profit_loss`)
    pub discounted_net_profit: f64,
    pub severity: CouponSeverity,
}

pub fn classify(discounted_profit: f64, discounted_margin_percent: f64) -> CouponSeverity {
    if discounted_profit <= 0.0 {
        CouponSeverity::Critical
    } else if discounted_margin_percent < WARNING_MARGIN_PERCENT {
        CouponSeverity::Warning
    } else {
        CouponSeverity::None
    }
}

/// 최종 판매가에 할인율을 적용했을 때의 이익/이익률을 다시 계산한다.
///
/// 할인 전후 이익은 모두 판매가 - 생산원가로 비교한다. 수수료는 할인가로 다시
/// 계산하지 않는다.
pub fn simulate_coupon(input: &CouponInput) -> CouponSimulation {
    let price = round2(non_negative(input.final_selling_price));
    let cost = round2(non_negative(input.lot_production_cost));
    let discount_percent =
        clamp_range(input.discount_percent, MAX_DISCOUNT_PERCENT).max(MIN_DISCOUNT_PERCENT);
    let discounted_price = round2(price * (1.0 - discount_percent / 100.0));
    let discount_amount = round2(price - discounted_price);
    let original_profit = round2(price - cost);
    let discounted_profit = round2(discounted_price - cost);
    let discounted_margin_percent = margin_on_price(discounted_profit, discounted_price);
    let profit_loss = round2(original_profit - discounted_profit);
    let lot_profit = if input.lot_profit.is_finite() { round2(input.lot_profit) } else { 0.0 };

    CouponSimulation {
        discount_percent,
        discount_amount,
        discounted_price,
        original_profit,
        discounted_profit,
        original_margin_percent: margin_on_price(original_profit, price),
        discounted_margin_percent,
        profit_loss,
        discounted_net_profit: round2(lot_profit - profit_loss),
        severity: classify(discounted_profit, discounted_margin_percent),
    }
}
