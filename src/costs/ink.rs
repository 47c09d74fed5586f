use serde::{Deserialize, Serialize};

use crate::money::{non_negative, quantity, round2, round3};

/// 병 단위로 구매한 잉크의 소비량 기준 비용 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InkCostInput {
    /// 잉크 구매 총액 [R$]
    pub total_value: f64,
    /// 병 개수
    pub bottle_count: f64,
    /// 병당 용량 [ml]
    pub ml_per_bottle: f64,
    /// 인쇄 1회당 소비량 [ml]. 0이면 비용도 0.
    pub ml_per_print: f64,
    /// 인쇄 횟수. 0이면 비용도 0.
    pub print_quantity: f64,
}

/// 잉크 비용 계산 결과. 화면 표시용 중간값을 함께 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkCost {
    /// 구매한 잉크 총량 [ml]
    pub total_ml: f64,
    /// ml당 가격 [R$/ml], 소수점 3자리
    pub value_per_ml: f64,
    /// 총 소비량 [ml]
    pub total_consumption_ml: f64,
    /// 소비량 기준 비용 [R$]
    pub cost: f64,
}

/// 잉크 소비량으로 비용을 계산한다.
///
/// `value_per_ml`은 최종 금액이 아니라 단가이므로 3자리로 반올림한다.
pub fn ink_cost(input: &InkCostInput) -> InkCost {
    let raw_total_ml = quantity(input.bottle_count) * non_negative(input.ml_per_bottle);
    let total_ml = if raw_total_ml < 1.0 { 1.0 } else { raw_total_ml };
    let value_per_ml = round3(non_negative(input.total_value) / total_ml);
    let total_consumption_ml =
        round2(non_negative(input.ml_per_print) * quantity(input.print_quantity));
    let cost = round2(total_consumption_ml * value_per_ml);
    InkCost {
        total_ml: round2(raw_total_ml),
        value_per_ml,
        total_consumption_ml,
        cost,
    }
}
