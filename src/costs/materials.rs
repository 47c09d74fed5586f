use serde::{Deserialize, Serialize};

use super::ink::{ink_cost, InkCostInput};
use super::raw_material::{raw_material_cost, RawMaterialInput};
use crate::money::{divisor, round2};

/// 재료 사용량이 로트 전체 기준인지, 제품 1개 기준인지 구분한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialBasis {
    /// 사용량이 로트 전체 기준. 단가는 총액 / 로트 수량.
    #[default]
    PerLot,
    /// 사용량이 제품 1개 기준. 단가 = 총액.
    PerUnit,
}

/// 이름이 붙은 기타 재료 (포장재, 리본, 비닐 등).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialItem {
    pub name: String,
    #[serde(flatten)]
    pub input: RawMaterialInput,
}

/// 한 번의 계산에 들어가는 재료 묶음.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialsInput {
    pub paper: Option<RawMaterialInput>,
    pub ink: Option<InkCostInput>,
    pub others: Vec<MaterialItem>,
    pub basis: MaterialBasis,
}

/// 재료비 합계.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaterialsBreakdown {
    pub paper_cost: f64,
    pub ink_cost: f64,
    pub others_cost: f64,
    /// 입력 기준(로트 또는 1개)의 재료비 합계
    pub total_cost: f64,
    /// 제품 1개당 재료비
    pub unit_cost: f64,
}

/// 용지, 잉크, 기타 재료를 합산해 제품 1개당 재료비를 구한다.
pub fn materials_cost(input: &MaterialsInput, lot_quantity: f64) -> MaterialsBreakdown {
    let paper_cost = input
        .paper
        .as_ref()
        .map(|p| raw_material_cost(p).cost)
        .unwrap_or(0.0);
    let ink = input.ink.as_ref().map(|i| ink_cost(i).cost).unwrap_or(0.0);
    let others_cost = round2(
        input
            .others
            .iter()
            .map(|item| raw_material_cost(&item.input).cost)
            .sum::<f64>(),
    );
    let total_cost = round2(paper_cost + ink + others_cost);
    let unit_cost = match input.basis {
        MaterialBasis::PerLot => round2(total_cost / divisor(lot_quantity)),
        MaterialBasis::PerUnit => total_cost,
    };
    MaterialsBreakdown {
        paper_cost,
        ink_cost: ink,
        others_cost,
        total_cost,
        unit_cost,
    }
}
