use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::costs::{ink_cost, raw_material_cost, InkCostInput, RawMaterialInput};
use crate::i18n::{keys, resolve_language, Translator};
use crate::operational::{
    operational_costs, CostCategory, EquipmentItem, LaborCostData, OperationalCostsData,
    OperationalSummary, OtherFixedCostItem, UtilityCostData,
};
use crate::pricing::{
    compose, find_marketplace, marketplaces, simulate_coupon, solve, CouponInput, CouponSeverity,
    CouponSimulation, MarketplaceConfig, PricingInput, PricingResult, ProfitTarget, SellerType,
    ShopeeInput, ShopeeQuote,
};
use crate::sheet::Quote;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RawMaterial,
    Ink,
    Operational,
    Pricing,
    Shopee,
    Coupon,
    Marketplaces,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_RAW_MATERIAL,
        keys::MAIN_MENU_INK,
        keys::MAIN_MENU_OPERATIONAL,
        keys::MAIN_MENU_PRICING,
        keys::MAIN_MENU_SHOPEE,
        keys::MAIN_MENU_COUPON,
        keys::MAIN_MENU_MARKETPLACES,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line(tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            // 입력이 닫히면(파이프 종료 등) 종료로 처리
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::RawMaterial),
            "2" => return Ok(MenuChoice::Ink),
            "3" => return Ok(MenuChoice::Operational),
            "4" => return Ok(MenuChoice::Pricing),
            "5" => return Ok(MenuChoice::Shopee),
            "6" => return Ok(MenuChoice::Coupon),
            "7" => return Ok(MenuChoice::Marketplaces),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 패키지 원자재 메뉴를 처리한다.
pub fn handle_raw_material(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RAW_MATERIAL_HEADING));
    let input = RawMaterialInput {
        package_value: read_f64(tr, keys::PROMPT_PACKAGE_VALUE)?,
        package_quantity: read_f64(tr, keys::PROMPT_PACKAGE_QUANTITY)?,
        quantity_used: read_f64(tr, keys::PROMPT_QUANTITY_USED)?,
    };
    let result = raw_material_cost(&input);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_UNIT_VALUE), result.unit_value);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_COST), result.cost);
    Ok(())
}

/// 잉크 메뉴를 처리한다.
pub fn handle_ink(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INK_HEADING));
    let input = InkCostInput {
        total_value: read_f64(tr, keys::PROMPT_INK_TOTAL_VALUE)?,
        bottle_count: read_f64(tr, keys::PROMPT_BOTTLE_COUNT)?,
        ml_per_bottle: read_f64(tr, keys::PROMPT_ML_PER_BOTTLE)?,
        ml_per_print: read_f64(tr, keys::PROMPT_ML_PER_PRINT)?,
        print_quantity: read_f64(tr, keys::PROMPT_PRINT_QUANTITY)?,
    };
    let result = ink_cost(&input);
    println!("{} {:.2}", tr.t(keys::RESULT_TOTAL_ML), result.total_ml);
    println!("{} R$ {:.3}", tr.t(keys::RESULT_VALUE_PER_ML), result.value_per_ml);
    println!("{} {:.2}", tr.t(keys::RESULT_TOTAL_CONSUMPTION), result.total_consumption_ml);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_COST), result.cost);
    Ok(())
}

/// 운영비 메뉴를 처리한다.
pub fn handle_operational(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::OPERATIONAL_HEADING));
    let production_time_minutes = read_f64(tr, keys::PROMPT_PRODUCTION_TIME)?;

    let mut equipments = Vec::new();
    for _ in 0..read_count(tr, keys::PROMPT_EQUIPMENT_COUNT)? {
        equipments.push(EquipmentItem {
            name: read_line(tr.t(keys::PROMPT_ITEM_NAME))?.trim().to_string(),
            value: read_f64(tr, keys::PROMPT_EQUIPMENT_VALUE)?,
            useful_life_years: read_f64(tr, keys::PROMPT_USEFUL_LIFE)?,
            usage_percentage: read_f64(tr, keys::PROMPT_USAGE_PERCENT)?,
        });
    }
    let electricity = UtilityCostData {
        monthly_bill: read_f64(tr, keys::PROMPT_ELECTRICITY)?,
        usage_percentage: read_f64(tr, keys::PROMPT_USAGE_PERCENT)?,
    };
    let internet = UtilityCostData {
        monthly_bill: read_f64(tr, keys::PROMPT_INTERNET)?,
        usage_percentage: read_f64(tr, keys::PROMPT_USAGE_PERCENT)?,
    };
    let labor = LaborCostData {
        monthly_withdrawal: read_f64(tr, keys::PROMPT_LABOR)?,
        usage_percentage: read_f64(tr, keys::PROMPT_USAGE_PERCENT)?,
    };
    let mut other_fixed_costs = Vec::new();
    for _ in 0..read_count(tr, keys::PROMPT_OTHER_COUNT)? {
        other_fixed_costs.push(OtherFixedCostItem {
            name: read_line(tr.t(keys::PROMPT_ITEM_NAME))?.trim().to_string(),
            monthly_value: read_f64(tr, keys::PROMPT_OTHER_VALUE)?,
            usage_percentage: read_f64(tr, keys::PROMPT_USAGE_PERCENT)?,
        });
    }

    let summary = operational_costs(&OperationalCostsData {
        production_time_minutes,
        equipments,
        electricity,
        internet,
        labor,
        other_fixed_costs,
    });
    print_operational(tr, &summary);
    Ok(())
}

/// 정액 수수료 채널의 판매가 메뉴를 처리한다.
pub fn handle_pricing(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRICING_HEADING));
    let market = read_marketplace(tr, cfg)?;
    if market.is_tiered() {
        println!("{}", tr.t(keys::PRICING_USE_SHOPEE_MENU));
        return Ok(());
    }
    let (commission, fixed_fee) = if market.is_editable {
        (
            Some(read_f64(tr, keys::PROMPT_COMMISSION)?),
            Some(read_f64(tr, keys::PROMPT_FIXED_FEE)?),
        )
    } else {
        (None, None)
    };
    let fees = market.flat_fees(commission, fixed_fee);

    let input = PricingInput {
        unit_raw_materials_cost: read_f64(tr, keys::PROMPT_UNIT_RAW_COST)?,
        operational_total: read_f64(tr, keys::PROMPT_OPERATIONAL_TOTAL)?,
        lot_quantity: read_f64(tr, keys::PROMPT_LOT_QUANTITY)?,
        profit: read_profit(tr, cfg)?,
        commission_percent: fees.commission_percent,
        fixed_fee_per_order: fees.fixed_fee_per_order,
    };
    print_pricing(tr, &compose(&input));
    Ok(())
}

/// Shopee 구간 수수료 역산 메뉴를 처리한다.
pub fn handle_shopee(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SHOPEE_HEADING));
    let unit_production_cost = read_f64(tr, keys::PROMPT_UNIT_PRODUCTION_COST)?;
    let lot_quantity = read_f64(tr, keys::PROMPT_LOT_QUANTITY)?;
    let profit = read_profit(tr, cfg)?;
    let sel = read_line(tr.t(keys::PROMPT_SELLER_TYPE))?;
    let seller_type = SellerType::from_code(&sel).unwrap_or(cfg.seller_type);
    let quote = solve(&ShopeeInput {
        unit_production_cost,
        profit,
        seller_type,
        lot_quantity,
    });
    print_shopee(tr, &quote);
    Ok(())
}

/// 쿠폰 시뮬레이션 메뉴를 처리한다.
pub fn handle_coupon(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COUPON_HEADING));
    let final_selling_price = read_f64(tr, keys::PROMPT_FINAL_PRICE)?;
    let lot_production_cost = read_f64(tr, keys::PROMPT_LOT_PRODUCTION_COST)?;
    let lot_profit = read_f64(tr, keys::PROMPT_LOT_PROFIT)?;
    let discount_percent = read_f64_or(tr, keys::PROMPT_DISCOUNT, cfg.default_coupon_percent)?;
    let sim = simulate_coupon(&CouponInput {
        final_selling_price,
        discount_percent,
        lot_production_cost,
        lot_profit,
    });
    print_coupon(tr, &sim);
    Ok(())
}

/// 판매 채널 테이블을 출력한다.
pub fn handle_marketplaces(tr: &Translator) {
    println!("{}", tr.t(keys::MARKETPLACES_HEADING));
    for m in marketplaces() {
        let detail = if m.is_tiered() {
            tr.t(keys::MARKETPLACES_TIERED).to_string()
        } else if m.is_editable {
            tr.t(keys::MARKETPLACES_EDITABLE).to_string()
        } else {
            format!("{:.1}% + R$ {:.2}", m.commission_percent, m.fixed_fee_per_item)
        };
        println!("{:<24} {:<24} {detail}", m.id, m.name);
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} / {} / {:.1}% / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.seller_type.as_code(),
        cfg.default_marketplace,
        cfg.default_margin_percent,
        cfg.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let changed = match sel.trim() {
        "" => return Ok(()),
        "1" => SellerType::from_code(&read_line(tr.t(keys::PROMPT_SELLER_TYPE))?)
            .map(|s| cfg.seller_type = s)
            .is_some(),
        "2" => find_marketplace(&read_line(tr.t(keys::PROMPT_MARKETPLACE))?)
            .map(|m| cfg.default_marketplace = m.id.to_string())
            .is_some(),
        "3" => {
            cfg.default_margin_percent = read_f64(tr, keys::PROMPT_MARGIN)?;
            true
        }
        "4" => {
            let lang = read_line(tr.t(keys::PROMPT_SELECT))?;
            cfg.language = resolve_language(&lang, Some(cfg.language.as_str()));
            true
        }
        _ => false,
    };
    if changed {
        println!("{}", tr.t(keys::SETTINGS_SAVED));
    } else {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
    }
    Ok(())
}

/// 시트 견적 전체를 출력한다.
pub fn print_quote(tr: &Translator, quote: &Quote) {
    println!("{} {} ({})", tr.t(keys::REPORT_HEADING), quote.name, quote.marketplace_name);
    println!("{}", tr.t(keys::REPORT_MATERIALS));
    println!("{} R$ {:.2}", tr.t(keys::RESULT_COST), quote.materials.total_cost);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_UNIT_VALUE), quote.materials.unit_cost);
    println!("{}", tr.t(keys::REPORT_OPERATIONAL));
    print_operational(tr, &quote.operational);
    println!("{}", tr.t(keys::REPORT_PRICING));
    if let Some(shopee) = &quote.shopee {
        print_shopee(tr, shopee);
    }
    print_pricing(tr, &quote.pricing);
    if let Some(coupon) = &quote.coupon {
        println!("{}", tr.t(keys::REPORT_COUPON));
        print_coupon(tr, coupon);
    }
}

fn category_label(tr: &Translator, category: CostCategory) -> &str {
    match category {
        CostCategory::Equipment => tr.t(keys::CATEGORY_EQUIPMENT),
        CostCategory::Electricity => tr.t(keys::CATEGORY_ELECTRICITY),
        CostCategory::Internet => tr.t(keys::CATEGORY_INTERNET),
        CostCategory::Labor => tr.t(keys::CATEGORY_LABOR),
        CostCategory::OtherFixedCost => tr.t(keys::CATEGORY_OTHER),
    }
}

fn print_operational(tr: &Translator, summary: &OperationalSummary) {
    for line in &summary.lines {
        println!(
            "{:<18} {:<16} R$ {:>10.2}  R$ {:.6}/min  R$ {:.2}",
            category_label(tr, line.category),
            line.name,
            line.monthly_basis,
            line.cost_per_minute,
            line.applied_cost
        );
    }
    println!("{} R$ {:.6}", tr.t(keys::RESULT_COST_PER_MINUTE), summary.total_cost_per_minute);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_COST_PER_HOUR), summary.cost_per_hour);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_APPLIED_COST), summary.total_applied_cost);
}

fn print_pricing(tr: &Translator, result: &PricingResult) {
    println!("{} R$ {:.2}", tr.t(keys::RESULT_PRODUCTION_COST), result.production_cost);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_PROFIT), result.desired_profit);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_FEES), result.marketplace_fees);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_UNIT_PRICE), result.unit_price);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_LOT_PRICE), result.final_selling_price);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_NET_PROFIT), result.net_profit);
    println!("{} {:.2}%", tr.t(keys::RESULT_MARGIN), result.margin_percent);
    if result.net_profit < 0.0 {
        println!("{}", tr.t(keys::WARN_LOSS));
    }
}

fn print_shopee(tr: &Translator, quote: &ShopeeQuote) {
    let range = match quote.tier.max_price {
        Some(max) => format!("R$ {:.2} - R$ {:.2}", quote.tier.min_price, max),
        None => format!("R$ {:.2}+", quote.tier.min_price),
    };
    println!(
        "{} {range} ({:.0}% + R$ {:.2}, Pix {:.0}%)",
        tr.t(keys::RESULT_TIER),
        quote.tier.commission_percent,
        quote.tier.fixed_fee,
        quote.tier.pix_subsidy_percent
    );
    println!("{} R$ {:.2}", tr.t(keys::RESULT_UNIT_PRICE), quote.unit_price);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_LOT_PRICE), quote.lot_price);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_COMMISSION), quote.unit_commission);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_PIX_SUBSIDY), quote.unit_pix_subsidy);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_FIXED_FEES), quote.unit_fixed_fees);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_NET_PROFIT), quote.lot_net_profit);
    println!("{} {:.2}%", tr.t(keys::RESULT_MARGIN), quote.realized_margin_percent);
    println!("{} {}", tr.t(keys::RESULT_ITERATIONS), quote.iterations);
    if !quote.converged {
        println!("{}", tr.t(keys::WARN_NOT_CONVERGED));
    }
    if quote.clamped {
        println!("{}", tr.t(keys::WARN_CLAMPED));
    }
}

fn print_coupon(tr: &Translator, sim: &CouponSimulation) {
    println!(
        "{} R$ {:.2} (-{:.0}%)",
        tr.t(keys::RESULT_DISCOUNTED_PRICE),
        sim.discounted_price,
        sim.discount_percent
    );
    println!("{} R$ {:.2}", tr.t(keys::RESULT_DISCOUNTED_PROFIT), sim.discounted_profit);
    println!("{} {:.2}%", tr.t(keys::RESULT_DISCOUNTED_MARGIN), sim.discounted_margin_percent);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_PROFIT_LOSS), sim.profit_loss);
    println!("{} R$ {:.2}", tr.t(keys::RESULT_DISCOUNTED_NET_PROFIT), sim.discounted_net_profit);
    let key = match sim.severity {
        CouponSeverity::None => keys::SEVERITY_NONE,
        CouponSeverity::Warning => keys::SEVERITY_WARNING,
        CouponSeverity::Critical => keys::SEVERITY_CRITICAL,
    };
    println!("{}", tr.t(key));
}

fn read_marketplace(
    tr: &Translator,
    cfg: &Config,
) -> Result<&'static MarketplaceConfig, AppError> {
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MARKETPLACE))?;
        let id = if sel.trim().is_empty() {
            cfg.default_marketplace.as_str()
        } else {
            sel.trim()
        };
        match find_marketplace(id) {
            Some(m) => return Ok(m),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_profit(tr: &Translator, cfg: &Config) -> Result<ProfitTarget, AppError> {
    let fixed_profit = read_f64(tr, keys::PROMPT_FIXED_PROFIT)?;
    if fixed_profit > 0.0 {
        return Ok(ProfitTarget::fixed(fixed_profit));
    }
    let margin = read_f64_or(tr, keys::PROMPT_MARGIN, cfg.default_margin_percent)?;
    Ok(ProfitTarget::margin(margin))
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_input(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력이 닫혀 0바이트를 읽으면 `UnexpectedEof`.
fn read_input<R: BufRead>(reader: &mut R) -> Result<String, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(buf)
}

/// 쉼표 소수점("12,5")도 받는다.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().replace(',', ".").parse::<f64>().ok()
}

/// 빈 입력이면 기본값, 숫자가 아니면 `None`.
fn parse_number_or(s: &str, default: f64) -> Option<f64> {
    if s.trim().is_empty() {
        Some(default)
    } else {
        parse_number(s)
    }
}

fn read_f64(tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match parse_number(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_f64_or(tr: &Translator, prompt_key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match parse_number_or(&s, default) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_count(tr: &Translator, prompt_key: &str) -> Result<usize, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match s.trim().parse::<usize>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn closed_input_is_unexpected_eof() {
        let mut input = Cursor::new("1\n");
        assert_eq!(read_input(&mut input).unwrap(), "1\n");
        match read_input(&mut input) {
            Err(AppError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected eof, got {other:?}"),
        }
    }

    #[test]
    fn empty_line_is_not_eof() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_input(&mut input).unwrap(), "\n");
    }

    #[test]
    fn numbers_accept_comma_decimal() {
        assert_eq!(parse_number("12,5\n"), Some(12.5));
        assert_eq!(parse_number(" 7.25 "), Some(7.25));
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn optional_numbers_fall_back_only_on_blank() {
        assert_eq!(parse_number_or("\n", 30.0), Some(30.0));
        assert_eq!(parse_number_or("12,5", 30.0), Some(12.5));
        assert_eq!(parse_number_or("doze", 30.0), None);
    }
}
