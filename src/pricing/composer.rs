use serde::{Deserialize, Serialize};

use crate::money::{margin_percent, non_negative, percent, quantity, round2};

/// 이익 목표. 고정 이익(로트 전체)이 0보다 크면 마진 %보다 우선한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitTarget {
    /// 생산원가 대비 이익률 [%] (0~1000)
    pub margin_percent: f64,
    /// 로트 전체 고정 이익 [R$]
    pub fixed_profit: f64,
}

impl ProfitTarget {
    pub fn margin(margin_percent: f64) -> Self {
        Self {
            margin_percent,
            fixed_profit: 0.0,
        }
    }

    pub fn fixed(fixed_profit: f64) -> Self {
        Self {
            margin_percent: 0.0,
            fixed_profit,
        }
    }

    /// 고정 이익이 설정되어 있으면 true.
    pub fn uses_fixed_profit(&self) -> bool {
        non_negative(self.fixed_profit) > 0.0
    }
}

/// 가격 구성 입력.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PricingInput {
    /// 제품 1개당 재료비 [R$]
    pub unit_raw_materials_cost: f64,
    /// 로트 전체 운영비 (생산 시간 적용 비용 합계) [R$]
    pub operational_total: f64,
    /// 로트 수량. 0 이하면 결과 전체가 0.
    pub lot_quantity: f64,
    pub profit: ProfitTarget,
    /// 판매 채널 수수료 [%]
    pub commission_percent: f64,
    /// 주문당 고정 수수료 [R$]. 로트 수량으로 나눠 배분한다.
    pub fixed_fee_per_order: f64,
}

/// 제품 1개 기준 가격 구성.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnitBreakdown {
    pub raw_materials_cost: f64,
    pub operational_cost: f64,
    pub production_cost: f64,
    pub profit: f64,
    pub base_price: f64,
    /// 비율 수수료 (Shopee는 Pix 보조금 포함)
    pub commission: f64,
    pub fixed_fee: f64,
    pub final_price: f64,
}

/// 가격 계산 결과. `unit_price`와 `unit`을 제외한 금액은 로트 합계다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PricingResult {
    pub raw_materials_cost: f64,
    pub operational_cost: f64,
    pub production_cost: f64,
    pub desired_profit: f64,
    pub marketplace_fees: f64,
    pub final_selling_price: f64,
    pub unit_price: f64,
    /// 음수면 손실
    pub net_profit: f64,
    /// 판매가 대비 순이익률 [%]
    pub margin_percent: f64,
    pub unit: UnitBreakdown,
}

/// 로트 수량을 정수 개수로 정리한다. 1 미만이면 `None`.
pub fn lot_count(lot_quantity: f64) -> Option<f64> {
    let qty = quantity(lot_quantity).floor();
    if qty >= 1.0 {
        Some(qty)
    } else {
        None
    }
}

/// 1개당 운영비와 생산원가를 구한다. 반환값은 (운영비, 생산원가).
pub fn unit_production_cost(unit_raw_materials_cost: f64, operational_total: f64, qty: f64) -> (f64, f64) {
    let unit_operational = round2(non_negative(operational_total) / qty);
    let unit_production = round2(non_negative(unit_raw_materials_cost) + unit_operational);
    (unit_operational, unit_production)
}

/// 1개당 이익. 고정 이익이 있으면 로트 수량으로 나누고, 없으면 원가 × 마진%.
pub fn unit_profit(unit_production_cost: f64, profit: &ProfitTarget, qty: f64) -> f64 {
    if profit.uses_fixed_profit() {
        round2(non_negative(profit.fixed_profit) / qty)
    } else {
        round2(unit_production_cost * (margin_percent(profit.margin_percent) / 100.0))
    }
}

/// 판매가 대비 이익률 [%]. 판매가가 0 이하면 0.
pub fn margin_on_price(profit: f64, price: f64) -> f64 {
    if price > 0.0 {
        round2(profit / price * 100.0)
    } else {
        0.0
    }
}

/// 원가, 이익, 정액 채널 수수료로 최종 판매가를 구성한다.
///
/// 모든 중간값은 다음 단계에 쓰기 전에 2자리로 반올림한다.
pub fn compose(input: &PricingInput) -> PricingResult {
    let Some(qty) = lot_count(input.lot_quantity) else {
        return PricingResult::default();
    };

    let unit_raw = round2(non_negative(input.unit_raw_materials_cost));
    let (unit_operational, unit_production) =
        unit_production_cost(unit_raw, input.operational_total, qty);
    let unit_profit = unit_profit(unit_production, &input.profit, qty);
    let unit_base = round2(unit_production + unit_profit);

    let unit_commission = round2(unit_base * (percent(input.commission_percent) / 100.0));
    let unit_fixed_fee = round2(non_negative(input.fixed_fee_per_order) / qty);
    let unit_final = round2(unit_base + unit_commission + unit_fixed_fee);

    let lot_final = round2(unit_final * qty);
    let lot_production = round2(unit_production * qty);
    let lot_fees = round2(round2(unit_commission + unit_fixed_fee) * qty);
    let net_profit = round2(lot_final - lot_production - lot_fees);

    PricingResult {
        raw_materials_cost: round2(unit_raw * qty),
        operational_cost: round2(unit_operational * qty),
        production_cost: lot_production,
        desired_profit: round2(unit_profit * qty),
        marketplace_fees: lot_fees,
        final_selling_price: lot_final,
        unit_price: unit_final,
        net_profit,
        margin_percent: margin_on_price(net_profit, lot_final),
        unit: UnitBreakdown {
            raw_materials_cost: unit_raw,
            operational_cost: unit_operational,
            production_cost: unit_production,
            profit: unit_profit,
            base_price: unit_base,
            commission: unit_commission,
            fixed_fee: unit_fixed_fee,
            final_price: unit_final,
        },
    }
}
