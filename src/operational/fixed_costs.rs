use serde::{Deserialize, Serialize};

use super::{amortize, Amortized, MINUTES_PER_MONTH, WORKING_MINUTES_PER_MONTH};

/// 전기/인터넷처럼 월 청구액이 있는 공과금.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilityCostData {
    /// 월 청구액 [R$]
    pub monthly_bill: f64,
    /// 사용 비율 (0~100)
    pub usage_percentage: f64,
}

impl UtilityCostData {
    pub fn amortize(&self, production_time_minutes: f64) -> Amortized {
        amortize(
            self.monthly_bill,
            self.usage_percentage,
            production_time_minutes,
            MINUTES_PER_MONTH,
        )
    }
}

/// 인건비(월 인출액, pró-labore).
///
/// 달력 시간이 아니라 월 220시간의 유급 노동 시간으로 나눈다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborCostData {
    /// 월 인출액 [R$]
    pub monthly_withdrawal: f64,
    /// 사용 비율 (0~100). 기본 100.
    pub usage_percentage: f64,
}

impl Default for LaborCostData {
    fn default() -> Self {
        Self {
            monthly_withdrawal: 0.0,
            usage_percentage: 100.0,
        }
    }
}

impl LaborCostData {
    /// 사용 비율 100%의 인건비.
    pub fn new(monthly_withdrawal: f64) -> Self {
        Self {
            monthly_withdrawal,
            ..Self::default()
        }
    }

    pub fn amortize(&self, production_time_minutes: f64) -> Amortized {
        amortize(
            self.monthly_withdrawal,
            self.usage_percentage,
            production_time_minutes,
            WORKING_MINUTES_PER_MONTH,
        )
    }
}

/// 사용자가 추가하는 기타 월 고정비 (임대료, 소프트웨어 구독 등).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherFixedCostItem {
    pub name: String,
    /// 월 금액 [R$]
    pub monthly_value: f64,
    /// 사용 비율 (0~100)
    pub usage_percentage: f64,
}

impl OtherFixedCostItem {
    pub fn amortize(&self, production_time_minutes: f64) -> Amortized {
        amortize(
            self.monthly_value,
            self.usage_percentage,
            production_time_minutes,
            MINUTES_PER_MONTH,
        )
    }
}
