use serde::{Deserialize, Serialize};

use super::equipment::EquipmentItem;
use super::fixed_costs::{LaborCostData, OtherFixedCostItem, UtilityCostData};
use super::Amortized;
use crate::money::{non_negative, round2, round6};

/// 운영비 입력 전체. 모든 항목이 하나의 생산 시간을 공유한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalCostsData {
    /// 이 로트의 생산 시간 [분]
    pub production_time_minutes: f64,
    pub equipments: Vec<EquipmentItem>,
    pub electricity: UtilityCostData,
    pub internet: UtilityCostData,
    pub labor: LaborCostData,
    pub other_fixed_costs: Vec<OtherFixedCostItem>,
}

/// 운영비 항목 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCategory {
    Equipment,
    Electricity,
    Internet,
    Labor,
    OtherFixedCost,
}

/// 항목 하나의 환산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct CostLine {
    pub category: CostCategory,
    /// 장비/기타 고정비는 사용자 입력 이름, 나머지는 빈 문자열
    pub name: String,
    /// 월 기준액 [R$] (장비는 월 감가상각액)
    pub monthly_basis: f64,
    pub cost_per_minute: f64,
    pub applied_cost: f64,
}

/// 운영비 환산 결과.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationalSummary {
    pub production_time_minutes: f64,
    pub lines: Vec<CostLine>,
    /// 전체 월 기준액 합계 [R$]
    pub total_monthly_basis: f64,
    /// 전체 분당 비용 [R$/min]
    pub total_cost_per_minute: f64,
    /// 전체 시간당 비용 [R$/h]
    pub cost_per_hour: f64,
    /// 생산 시간 적용 비용 합계 [R$]. 로트 전체 운영비.
    pub total_applied_cost: f64,
}

impl OperationalSummary {
    /// 분류별 적용 비용 합계.
    pub fn applied_for(&self, category: CostCategory) -> f64 {
        round2(
            self.lines
                .iter()
                .filter(|l| l.category == category)
                .map(|l| l.applied_cost)
                .sum::<f64>(),
        )
    }
}

fn line(category: CostCategory, name: &str, monthly_basis: f64, a: Amortized) -> CostLine {
    CostLine {
        category,
        name: name.to_string(),
        monthly_basis: round2(non_negative(monthly_basis)),
        cost_per_minute: a.cost_per_minute,
        applied_cost: a.applied_cost,
    }
}

/// 모든 운영비 항목을 환산하고 합계를 낸다.
///
/// 장비와 기타 고정비는 항목별로 따로 환산한 뒤 합산한다.
pub fn operational_costs(data: &OperationalCostsData) -> OperationalSummary {
    let minutes = non_negative(data.production_time_minutes);
    let mut lines = Vec::with_capacity(data.equipments.len() + data.other_fixed_costs.len() + 3);

    for eq in &data.equipments {
        lines.push(line(
            CostCategory::Equipment,
            &eq.name,
            eq.monthly_basis(),
            eq.amortize(minutes),
        ));
    }
    lines.push(line(
        CostCategory::Electricity,
        "",
        data.electricity.monthly_bill,
        data.electricity.amortize(minutes),
    ));
    lines.push(line(
        CostCategory::Internet,
        "",
        data.internet.monthly_bill,
        data.internet.amortize(minutes),
    ));
    lines.push(line(
        CostCategory::Labor,
        "",
        data.labor.monthly_withdrawal,
        data.labor.amortize(minutes),
    ));
    for item in &data.other_fixed_costs {
        lines.push(line(
            CostCategory::OtherFixedCost,
            &item.name,
            item.monthly_value,
            item.amortize(minutes),
        ));
    }

    let total_monthly_basis = round2(lines.iter().map(|l| l.monthly_basis).sum::<f64>());
    let total_cost_per_minute = round6(lines.iter().map(|l| l.cost_per_minute).sum::<f64>());
    let total_applied_cost = round2(lines.iter().map(|l| l.applied_cost).sum::<f64>());
    OperationalSummary {
        production_time_minutes: minutes,
        lines,
        total_monthly_basis,
        total_cost_per_minute,
        cost_per_hour: round2(total_cost_per_minute * 60.0),
        total_applied_cost,
    }
}
