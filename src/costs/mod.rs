//! 원자재 단가 계산 모듈 모음 (용지/패키지 원자재, 잉크, 기타 재료).

pub mod ink;
pub mod materials;
pub mod raw_material;

pub use ink::{ink_cost, InkCost, InkCostInput};
pub use materials::{materials_cost, MaterialBasis, MaterialItem, MaterialsBreakdown, MaterialsInput};
pub use raw_material::{raw_material_cost, RawMaterialCost, RawMaterialInput};
