use serde::{Deserialize, Serialize};

use crate::money::{divisor, non_negative, round2};

/// 패키지 단위로 구매한 원자재 입력 (용지, 비닐, 포장재 등).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMaterialInput {
    /// 패키지 가격 [R$]
    pub package_value: f64,
    /// 패키지에 들어있는 수량. 0 이하면 1로 본다.
    pub package_quantity: f64,
    /// 사용한 수량. 0 이하면 1로 본다.
    pub quantity_used: f64,
}

/// 원자재 단가 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMaterialCost {
    /// 개당 가격 [R$]
    pub unit_value: f64,
    /// 사용량 기준 비용 [R$]
    pub cost: f64,
}

/// 패키지 가격과 사용량으로 원자재 비용을 계산한다.
pub fn raw_material_cost(input: &RawMaterialInput) -> RawMaterialCost {
    let package_value = non_negative(input.package_value);
    let unit_value = round2(package_value / divisor(input.package_quantity));
    let cost = round2(unit_value * divisor(input.quantity_used));
    RawMaterialCost { unit_value, cost }
}
