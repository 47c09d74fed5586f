//! 계산 시트: 한 번의 가격 계산 입력 전체를 TOML로 읽어 견적을 만든다.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::costs::{materials_cost, MaterialsBreakdown, MaterialsInput};
use crate::money::{non_negative, round2};
use crate::operational::{operational_costs, OperationalCostsData, OperationalSummary};
use crate::pricing::composer::{self, lot_count, margin_on_price};
use crate::pricing::{
    compose, find_marketplace, simulate_coupon, solve, CouponInput, CouponSimulation,
    PricingInput, PricingResult, ProfitTarget, SellerType, ShopeeInput, ShopeeQuote,
    UnitBreakdown,
};

/// 시트 로드/계산 오류.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("시트 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("알 수 없는 판매 채널: {0}")]
    UnknownMarketplace(String),
}

/// 판매 채널 선택.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceChoice {
    pub id: String,
    pub seller_type: SellerType,
    /// 편집 가능한 채널(custom)에서만 사용
    pub commission_percent: Option<f64>,
    /// 편집 가능한 채널(custom)에서만 사용
    pub fixed_fee: Option<f64>,
}

impl Default for MarketplaceChoice {
    fn default() -> Self {
        Self {
            id: "direct".to_string(),
            seller_type: SellerType::default(),
            commission_percent: None,
            fixed_fee: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponChoice {
    pub discount_percent: f64,
}

/// 계산 시트.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sheet {
    pub name: String,
    pub lot_quantity: f64,
    pub materials: MaterialsInput,
    pub operational: OperationalCostsData,
    pub profit: ProfitTarget,
    pub marketplace: MarketplaceChoice,
    pub coupon: Option<CouponChoice>,
}

/// 시트 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub name: String,
    pub marketplace_id: &'static str,
    pub marketplace_name: &'static str,
    pub materials: MaterialsBreakdown,
    pub operational: OperationalSummary,
    pub pricing: PricingResult,
    /// 구간 수수료 채널일 때만 존재
    pub shopee: Option<ShopeeQuote>,
    pub coupon: Option<CouponSimulation>,
}

/// TOML 문자열에서 시트를 읽는다.
pub fn parse_sheet(content: &str) -> Result<Sheet, SheetError> {
    Ok(toml::from_str(content)?)
}

/// 파일에서 시트를 읽는다.
pub fn load_sheet(path: &Path) -> Result<Sheet, SheetError> {
    let content = fs::read_to_string(path)?;
    parse_sheet(&content)
}

/// 재료비 → 운영비 → 판매가 → (할인) 순으로 시트를 계산한다.
pub fn quote(sheet: &Sheet) -> Result<Quote, SheetError> {
    let market = find_marketplace(&sheet.marketplace.id)
        .ok_or_else(|| SheetError::UnknownMarketplace(sheet.marketplace.id.clone()))?;

    let materials = materials_cost(&sheet.materials, sheet.lot_quantity);
    let operational = operational_costs(&sheet.operational);

    let (pricing, shopee) = if market.is_tiered() {
        let (pricing, quote) = tiered_pricing(
            materials.unit_cost,
            operational.total_applied_cost,
            sheet.lot_quantity,
            &sheet.profit,
            sheet.marketplace.seller_type,
        );
        (pricing, Some(quote))
    } else {
        let fees = market.flat_fees(sheet.marketplace.commission_percent, sheet.marketplace.fixed_fee);
        let pricing = compose(&PricingInput {
            unit_raw_materials_cost: materials.unit_cost,
            operational_total: operational.total_applied_cost,
            lot_quantity: sheet.lot_quantity,
            profit: sheet.profit,
            commission_percent: fees.commission_percent,
            fixed_fee_per_order: fees.fixed_fee_per_order,
        });
        (pricing, None)
    };

    let coupon = sheet.coupon.as_ref().map(|c| {
        simulate_coupon(&CouponInput {
            final_selling_price: pricing.final_selling_price,
            discount_percent: c.discount_percent,
            lot_production_cost: pricing.production_cost,
            lot_profit: pricing.net_profit,
        })
    });

    info!(
        "quote '{}' on {}: unit {:.2}, lot {:.2}, net profit {:.2}",
        sheet.name, market.id, pricing.unit_price, pricing.final_selling_price, pricing.net_profit
    );

    Ok(Quote {
        name: sheet.name.clone(),
        marketplace_id: market.id,
        marketplace_name: market.name,
        materials,
        operational,
        pricing,
        shopee,
        coupon,
    })
}

/// 구간 수수료 채널의 가격 결과. 원가/이익은 구성기와 같은 단계로 구하고
/// 판매가는 역산기로 구한다.
pub fn tiered_pricing(
    unit_raw_materials_cost: f64,
    operational_total: f64,
    lot_quantity: f64,
    profit: &ProfitTarget,
    seller_type: SellerType,
) -> (PricingResult, ShopeeQuote) {
    let input = |unit_production_cost: f64| ShopeeInput {
        unit_production_cost,
        profit: *profit,
        seller_type,
        lot_quantity,
    };
    let Some(qty) = lot_count(lot_quantity) else {
        return (PricingResult::default(), solve(&input(0.0)));
    };

    let unit_raw = round2(non_negative(unit_raw_materials_cost));
    let (unit_operational, unit_production) =
        composer::unit_production_cost(unit_raw, operational_total, qty);
    let quote = solve(&input(unit_production));
    let unit_profit = quote.unit_target_profit;
    let lot_production = round2(unit_production * qty);

    let pricing = PricingResult {
        raw_materials_cost: round2(unit_raw * qty),
        operational_cost: round2(unit_operational * qty),
        production_cost: lot_production,
        desired_profit: round2(unit_profit * qty),
        marketplace_fees: quote.lot_fees,
        final_selling_price: quote.lot_price,
        unit_price: quote.unit_price,
        net_profit: quote.lot_net_profit,
        margin_percent: margin_on_price(quote.lot_net_profit, quote.lot_price),
        unit: UnitBreakdown {
            raw_materials_cost: unit_raw,
            operational_cost: unit_operational,
            production_cost: unit_production,
            profit: unit_profit,
            base_price: round2(unit_production + unit_profit),
            commission: round2(quote.unit_commission + quote.unit_pix_subsidy),
            fixed_fee: quote.unit_fixed_fees,
            final_price: quote.unit_price,
        },
    };
    (pricing, quote)
}
