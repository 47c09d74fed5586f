use serde::{Deserialize, Serialize};

use super::{amortize, Amortized, MINUTES_PER_MONTH};
use crate::money::{non_negative, round2};

/// 감가상각 대상 장비 (프린터, 커팅기, 라미네이터 등).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentItem {
    pub name: String,
    /// 장비 구매가 [R$]
    pub value: f64,
    /// 내용연수 [년]. 0 이하면 1년으로 본다.
    pub useful_life_years: f64,
    /// 이 제품 생산에 쓰이는 비율 (0~100)
    pub usage_percentage: f64,
}

/// 월 감가상각액 = (구매가 / 내용연수) / 12.
pub fn monthly_depreciation(value: f64, useful_life_years: f64) -> f64 {
    let years = non_negative(useful_life_years);
    let years = if years > 0.0 { years } else { 1.0 };
    round2((non_negative(value) / years) / 12.0)
}

impl EquipmentItem {
    /// 월 감가상각액 [R$]
    pub fn monthly_basis(&self) -> f64 {
        monthly_depreciation(self.value, self.useful_life_years)
    }

    /// 생산 시간 기준 분당 비용/적용 비용.
    pub fn amortize(&self, production_time_minutes: f64) -> Amortized {
        amortize(
            self.monthly_basis(),
            self.usage_percentage,
            production_time_minutes,
            MINUTES_PER_MONTH,
        )
    }
}
