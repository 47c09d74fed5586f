//! 월 고정비를 분당 비용으로 환산하고 생산 시간에 적용하는 모듈 모음.

pub mod equipment;
pub mod fixed_costs;
pub mod summary;

pub use equipment::{monthly_depreciation, EquipmentItem};
pub use fixed_costs::{LaborCostData, OtherFixedCostItem, UtilityCostData};
pub use summary::{operational_costs, CostCategory, CostLine, OperationalCostsData, OperationalSummary};

use crate::money::{non_negative, percent, round2, round6};

/// 달력 기준 한 달의 분 수 (24h × 30일 × 60). 전기/인터넷/장비/기타 고정비에 사용.
pub const MINUTES_PER_MONTH: f64 = 24.0 * 30.0 * 60.0;
/// 유급 노동 시간 기준 한 달의 분 수 (220h × 60). 인건비에만 사용.
pub const WORKING_MINUTES_PER_MONTH: f64 = 220.0 * 60.0;

/// 분당 비용과 생산 시간 적용 비용.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Amortized {
    /// 분당 비용 [R$/min], 소수점 6자리
    pub cost_per_minute: f64,
    /// 생산 시간 적용 비용 [R$]
    pub applied_cost: f64,
}

/// 분당 비용을 계산한다.
///
/// 분당 단가는 매우 작으므로 2자리가 아니라 6자리로 반올림한다.
pub fn cost_per_minute(monthly_basis: f64, usage_percentage: f64, minutes_per_month: f64) -> f64 {
    let minutes = if minutes_per_month > 0.0 { minutes_per_month } else { MINUTES_PER_MONTH };
    round6((non_negative(monthly_basis) / minutes) * (percent(usage_percentage) / 100.0))
}

/// 분당 비용에 생산 시간을 곱한다. 생산 시간 0이면 0.
pub fn applied_cost(cost_per_minute: f64, production_time_minutes: f64) -> f64 {
    round2(cost_per_minute * non_negative(production_time_minutes))
}

/// 월 기준액 하나를 분당 비용/적용 비용으로 환산한다.
pub fn amortize(
    monthly_basis: f64,
    usage_percentage: f64,
    production_time_minutes: f64,
    minutes_per_month: f64,
) -> Amortized {
    let cpm = cost_per_minute(monthly_basis, usage_percentage, minutes_per_month);
    Amortized {
        cost_per_minute: cpm,
        applied_cost: applied_cost(cpm, production_time_minutes),
    }
}
