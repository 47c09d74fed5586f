//! 원자재/잉크/재료 합계 단가 회귀 테스트.
use approx::assert_abs_diff_eq;
use precigraf::costs::{
    ink_cost, materials_cost, raw_material_cost, InkCostInput, MaterialBasis, MaterialItem,
    MaterialsInput, RawMaterialInput,
};

#[test]
fn zero_quantities_are_treated_as_one() {
    let res = raw_material_cost(&RawMaterialInput {
        package_value: 100.0,
        package_quantity: 0.0,
        quantity_used: 0.0,
    });
    assert_eq!(res.unit_value, 100.0);
    assert_eq!(res.cost, 100.0);
}

#[test]
fn paper_package_unit_cost() {
    // 100장 R$ 45 → 장당 0.45, 20장 사용
    let res = raw_material_cost(&RawMaterialInput {
        package_value: 45.0,
        package_quantity: 100.0,
        quantity_used: 20.0,
    });
    assert_abs_diff_eq!(res.unit_value, 0.45, epsilon = 1e-9);
    assert_abs_diff_eq!(res.cost, 9.0, epsilon = 1e-9);
}

#[test]
fn unit_value_is_rounded_before_multiplying() {
    // 10 / 3 = 3.333.. → 3.33, × 3 = 9.99 (10.00이 아님)
    let res = raw_material_cost(&RawMaterialInput {
        package_value: 10.0,
        package_quantity: 3.0,
        quantity_used: 3.0,
    });
    assert_abs_diff_eq!(res.cost, 9.99, epsilon = 1e-9);
}

#[test]
fn negative_and_nan_inputs_never_leak() {
    let res = raw_material_cost(&RawMaterialInput {
        package_value: f64::NAN,
        package_quantity: -4.0,
        quantity_used: f64::INFINITY,
    });
    assert_eq!(res.unit_value, 0.0);
    assert!(res.cost.is_finite());
}

#[test]
fn ink_rate_keeps_three_decimals() {
    let res = ink_cost(&InkCostInput {
        total_value: 145.0,
        bottle_count: 4.0,
        ml_per_bottle: 250.0,
        ml_per_print: 0.8,
        print_quantity: 100.0,
    });
    assert_abs_diff_eq!(res.total_ml, 1000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(res.value_per_ml, 0.145, epsilon = 1e-12);
    assert_abs_diff_eq!(res.total_consumption_ml, 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(res.cost, 11.6, epsilon = 1e-9);
}

#[test]
fn ink_without_prints_costs_nothing() {
    let res = ink_cost(&InkCostInput {
        total_value: 145.0,
        bottle_count: 4.0,
        ml_per_bottle: 250.0,
        ml_per_print: 0.0,
        print_quantity: 100.0,
    });
    assert_eq!(res.cost, 0.0);
    let res = ink_cost(&InkCostInput {
        print_quantity: 0.0,
        ml_per_print: 0.8,
        ..InkCostInput::default()
    });
    assert_eq!(res.cost, 0.0);
}

#[test]
fn ink_without_bottles_does_not_divide_by_zero() {
    let res = ink_cost(&InkCostInput {
        total_value: 50.0,
        bottle_count: 0.0,
        ml_per_bottle: 0.0,
        ml_per_print: 1.0,
        print_quantity: 2.0,
    });
    assert!(res.value_per_ml.is_finite());
    assert_abs_diff_eq!(res.cost, 100.0, epsilon = 1e-9);
}

fn sample_materials(basis: MaterialBasis) -> MaterialsInput {
    MaterialsInput {
        paper: Some(RawMaterialInput {
            package_value: 45.0,
            package_quantity: 100.0,
            quantity_used: 20.0,
        }),
        ink: Some(InkCostInput {
            total_value: 145.0,
            bottle_count: 4.0,
            ml_per_bottle: 250.0,
            ml_per_print: 0.8,
            print_quantity: 100.0,
        }),
        others: vec![MaterialItem {
            name: "Saquinho".to_string(),
            input: RawMaterialInput {
                package_value: 12.0,
                package_quantity: 50.0,
                quantity_used: 10.0,
            },
        }],
        basis,
    }
}

#[test]
fn materials_sum_and_split_per_lot() {
    let res = materials_cost(&sample_materials(MaterialBasis::PerLot), 10.0);
    assert_abs_diff_eq!(res.paper_cost, 9.0, epsilon = 1e-9);
    assert_abs_diff_eq!(res.ink_cost, 11.6, epsilon = 1e-9);
    assert_abs_diff_eq!(res.others_cost, 2.4, epsilon = 1e-9);
    assert_abs_diff_eq!(res.total_cost, 23.0, epsilon = 1e-9);
    assert_abs_diff_eq!(res.unit_cost, 2.3, epsilon = 1e-9);
}

#[test]
fn per_unit_basis_keeps_total() {
    let res = materials_cost(&sample_materials(MaterialBasis::PerUnit), 10.0);
    assert_abs_diff_eq!(res.unit_cost, res.total_cost, epsilon = 1e-12);
}

#[test]
fn empty_materials_cost_zero() {
    let res = materials_cost(&MaterialsInput::default(), 0.0);
    assert_eq!(res.total_cost, 0.0);
    assert_eq!(res.unit_cost, 0.0);
}
