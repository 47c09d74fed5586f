use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RAW_MATERIAL: &str = "main_menu.raw_material";
    pub const MAIN_MENU_INK: &str = "main_menu.ink";
    pub const MAIN_MENU_OPERATIONAL: &str = "main_menu.operational";
    pub const MAIN_MENU_PRICING: &str = "main_menu.pricing";
    pub const MAIN_MENU_SHOPEE: &str = "main_menu.shopee";
    pub const MAIN_MENU_COUPON: &str = "main_menu.coupon";
    pub const MAIN_MENU_MARKETPLACES: &str = "main_menu.marketplaces";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const RAW_MATERIAL_HEADING: &str = "raw_material.heading";
    pub const PROMPT_PACKAGE_VALUE: &str = "prompt.package_value";
    pub const PROMPT_PACKAGE_QUANTITY: &str = "prompt.package_quantity";
    pub const PROMPT_QUANTITY_USED: &str = "prompt.quantity_used";
    pub const RESULT_UNIT_VALUE: &str = "result.unit_value";
    pub const RESULT_COST: &str = "result.cost";

    pub const INK_HEADING: &str = "ink.heading";
    pub const PROMPT_INK_TOTAL_VALUE: &str = "prompt.ink_total_value";
    pub const PROMPT_BOTTLE_COUNT: &str = "prompt.bottle_count";
    pub const PROMPT_ML_PER_BOTTLE: &str = "prompt.ml_per_bottle";
    pub const PROMPT_ML_PER_PRINT: &str = "prompt.ml_per_print";
    pub const PROMPT_PRINT_QUANTITY: &str = "prompt.print_quantity";
    pub const RESULT_TOTAL_ML: &str = "result.total_ml";
    pub const RESULT_VALUE_PER_ML: &str = "result.value_per_ml";
    pub const RESULT_TOTAL_CONSUMPTION: &str = "result.total_consumption";

    pub const OPERATIONAL_HEADING: &str = "operational.heading";
    pub const PROMPT_PRODUCTION_TIME: &str = "prompt.production_time";
    pub const PROMPT_EQUIPMENT_COUNT: &str = "prompt.equipment_count";
    pub const PROMPT_ITEM_NAME: &str = "prompt.item_name";
    pub const PROMPT_EQUIPMENT_VALUE: &str = "prompt.equipment_value";
    pub const PROMPT_USEFUL_LIFE: &str = "prompt.useful_life";
    pub const PROMPT_USAGE_PERCENT: &str = "prompt.usage_percent";
    pub const PROMPT_ELECTRICITY: &str = "prompt.electricity";
    pub const PROMPT_INTERNET: &str = "prompt.internet";
    pub const PROMPT_LABOR: &str = "prompt.labor";
    pub const PROMPT_OTHER_COUNT: &str = "prompt.other_count";
    pub const PROMPT_OTHER_VALUE: &str = "prompt.other_value";
    pub const CATEGORY_EQUIPMENT: &str = "category.equipment";
    pub const CATEGORY_ELECTRICITY: &str = "category.electricity";
    pub const CATEGORY_INTERNET: &str = "category.internet";
    pub const CATEGORY_LABOR: &str = "category.labor";
    pub const CATEGORY_OTHER: &str = "category.other";
    pub const RESULT_COST_PER_MINUTE: &str = "result.cost_per_minute";
    pub const RESULT_COST_PER_HOUR: &str = "result.cost_per_hour";
    pub const RESULT_APPLIED_COST: &str = "result.applied_cost";

    pub const PRICING_HEADING: &str = "pricing.heading";
    pub const PROMPT_UNIT_RAW_COST: &str = "prompt.unit_raw_cost";
    pub const PROMPT_OPERATIONAL_TOTAL: &str = "prompt.operational_total";
    pub const PROMPT_LOT_QUANTITY: &str = "prompt.lot_quantity";
    pub const PROMPT_MARGIN: &str = "prompt.margin";
    pub const PROMPT_FIXED_PROFIT: &str = "prompt.fixed_profit";
    pub const PROMPT_MARKETPLACE: &str = "prompt.marketplace";
    pub const PROMPT_COMMISSION: &str = "prompt.commission";
    pub const PROMPT_FIXED_FEE: &str = "prompt.fixed_fee";
    pub const PRICING_USE_SHOPEE_MENU: &str = "pricing.use_shopee_menu";
    pub const RESULT_PRODUCTION_COST: &str = "result.production_cost";
    pub const RESULT_PROFIT: &str = "result.profit";
    pub const RESULT_FEES: &str = "result.fees";
    pub const RESULT_UNIT_PRICE: &str = "result.unit_price";
    pub const RESULT_LOT_PRICE: &str = "result.lot_price";
    pub const RESULT_NET_PROFIT: &str = "result.net_profit";
    pub const RESULT_MARGIN: &str = "result.margin";
    pub const WARN_LOSS: &str = "warn.loss";

    pub const SHOPEE_HEADING: &str = "shopee.heading";
    pub const PROMPT_UNIT_PRODUCTION_COST: &str = "prompt.unit_production_cost";
    pub const PROMPT_SELLER_TYPE: &str = "prompt.seller_type";
    pub const RESULT_TIER: &str = "result.tier";
    pub const RESULT_COMMISSION: &str = "result.commission";
    pub const RESULT_PIX_SUBSIDY: &str = "result.pix_subsidy";
    pub const RESULT_FIXED_FEES: &str = "result.fixed_fees";
    pub const RESULT_ITERATIONS: &str = "result.iterations";
    pub const WARN_NOT_CONVERGED: &str = "warn.not_converged";
    pub const WARN_CLAMPED: &str = "warn.clamped";

    pub const COUPON_HEADING: &str = "coupon.heading";
    pub const PROMPT_FINAL_PRICE: &str = "prompt.final_price";
    pub const PROMPT_DISCOUNT: &str = "prompt.discount";
    pub const PROMPT_LOT_PRODUCTION_COST: &str = "prompt.lot_production_cost";
    pub const PROMPT_LOT_PROFIT: &str = "prompt.lot_profit";
    pub const RESULT_DISCOUNTED_PRICE: &str = "result.discounted_price";
    pub const RESULT_DISCOUNTED_PROFIT: &str = "result.discounted_profit";
    pub const RESULT_DISCOUNTED_MARGIN: &str = "result.discounted_margin";
    pub const RESULT_DISCOUNTED_NET_PROFIT: &str = "result.discounted_net_profit";
    pub const RESULT_PROFIT_LOSS: &str = "result.profit_loss";
    pub const SEVERITY_NONE: &str = "severity.none";
    pub const SEVERITY_WARNING: &str = "severity.warning";
    pub const SEVERITY_CRITICAL: &str = "severity.critical";

    pub const MARKETPLACES_HEADING: &str = "marketplaces.heading";
    pub const MARKETPLACES_TIERED: &str = "marketplaces.tiered";
    pub const MARKETPLACES_EDITABLE: &str = "marketplaces.editable";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_MATERIALS: &str = "report.materials";
    pub const REPORT_OPERATIONAL: &str = "report.operational";
    pub const REPORT_PRICING: &str = "report.pricing";
    pub const REPORT_COUPON: &str = "report.coupon";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Pt
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Pt => "pt-br",
            Language::En => "en-us",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(pt/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 pt로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 내장 영어/포르투갈어 순이며 영어에 없으면 포르투갈어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| pt(key)),
            Language::Pt => pt(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "pt-br".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        other if other.starts_with("pt") => Some("pt-br".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., pt)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn pt(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Encerrando o PreciGraf.",
        MAIN_MENU_TITLE => "\n=== PreciGraf - Calculadora de Preços ===",
        MAIN_MENU_RAW_MATERIAL => "1) Matéria-prima (pacote)",
        MAIN_MENU_INK => "2) Tinta",
        MAIN_MENU_OPERATIONAL => "3) Custos operacionais",
        MAIN_MENU_PRICING => "4) Preço de venda",
        MAIN_MENU_SHOPEE => "5) Preço Shopee (taxas por faixa)",
        MAIN_MENU_COUPON => "6) Simulador de cupom",
        MAIN_MENU_MARKETPLACES => "7) Tabela de marketplaces",
        MAIN_MENU_SETTINGS => "8) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Escolha uma opção: ",
        PROMPT_SELECT => "Selecione: ",
        INVALID_SELECTION_RETRY => "Opção inválida. Tente novamente.",
        ERROR_INVALID_NUMBER => "Digite um número.",
        RAW_MATERIAL_HEADING => "\n-- Matéria-prima --",
        PROMPT_PACKAGE_VALUE => "Valor do pacote [R$]: ",
        PROMPT_PACKAGE_QUANTITY => "Quantidade no pacote: ",
        PROMPT_QUANTITY_USED => "Quantidade utilizada: ",
        RESULT_UNIT_VALUE => "Valor unitário:",
        RESULT_COST => "Custo:",
        INK_HEADING => "\n-- Tinta --",
        PROMPT_INK_TOTAL_VALUE => "Valor total pago [R$]: ",
        PROMPT_BOTTLE_COUNT => "Quantidade de frascos: ",
        PROMPT_ML_PER_BOTTLE => "ml por frasco: ",
        PROMPT_ML_PER_PRINT => "ml por impressão: ",
        PROMPT_PRINT_QUANTITY => "Quantidade de impressões: ",
        RESULT_TOTAL_ML => "Total de tinta [ml]:",
        RESULT_VALUE_PER_ML => "Valor por ml:",
        RESULT_TOTAL_CONSUMPTION => "Consumo total [ml]:",
        OPERATIONAL_HEADING => "\n-- Custos operacionais --",
        PROMPT_PRODUCTION_TIME => "Tempo de produção [min]: ",
        PROMPT_EQUIPMENT_COUNT => "Quantos equipamentos? ",
        PROMPT_ITEM_NAME => "Nome: ",
        PROMPT_EQUIPMENT_VALUE => "Valor do equipamento [R$]: ",
        PROMPT_USEFUL_LIFE => "Vida útil [anos]: ",
        PROMPT_USAGE_PERCENT => "Percentual de uso [%]: ",
        PROMPT_ELECTRICITY => "Conta de energia mensal [R$]: ",
        PROMPT_INTERNET => "Conta de internet mensal [R$]: ",
        PROMPT_LABOR => "Pró-labore mensal [R$]: ",
        PROMPT_OTHER_COUNT => "Quantos outros custos fixos? ",
        PROMPT_OTHER_VALUE => "Valor mensal [R$]: ",
        CATEGORY_EQUIPMENT => "Equipamento",
        CATEGORY_ELECTRICITY => "Energia",
        CATEGORY_INTERNET => "Internet",
        CATEGORY_LABOR => "Mão de obra",
        CATEGORY_OTHER => "Outro custo fixo",
        RESULT_COST_PER_MINUTE => "Custo por minuto:",
        RESULT_COST_PER_HOUR => "Custo por hora:",
        RESULT_APPLIED_COST => "Custo aplicado:",
        PRICING_HEADING => "\n-- Preço de venda --",
        PROMPT_UNIT_RAW_COST => "Custo de matéria-prima por unidade [R$]: ",
        PROMPT_OPERATIONAL_TOTAL => "Custo operacional do lote [R$]: ",
        PROMPT_LOT_QUANTITY => "Quantidade do lote: ",
        PROMPT_MARGIN => "Margem de lucro [%]: ",
        PROMPT_FIXED_PROFIT => "Lucro fixo do lote [R$] (0 = usar margem): ",
        PROMPT_MARKETPLACE => "Marketplace (id, enter = padrão): ",
        PROMPT_COMMISSION => "Comissão [%]: ",
        PROMPT_FIXED_FEE => "Taxa fixa por pedido [R$]: ",
        PRICING_USE_SHOPEE_MENU => "Este marketplace usa taxas por faixa; use o menu Shopee.",
        RESULT_PRODUCTION_COST => "Custo de produção:",
        RESULT_PROFIT => "Lucro desejado:",
        RESULT_FEES => "Taxas do marketplace:",
        RESULT_UNIT_PRICE => "Preço unitário:",
        RESULT_LOT_PRICE => "Preço do lote:",
        RESULT_NET_PROFIT => "Lucro líquido:",
        RESULT_MARGIN => "Margem sobre a venda:",
        WARN_LOSS => "Atenção: este preço gera prejuízo.",
        SHOPEE_HEADING => "\n-- Preço Shopee --",
        PROMPT_UNIT_PRODUCTION_COST => "Custo de produção por unidade [R$]: ",
        PROMPT_SELLER_TYPE => "Tipo de vendedor (cpf/cnpj, enter = padrão): ",
        RESULT_TIER => "Faixa de preço:",
        RESULT_COMMISSION => "Comissão por unidade:",
        RESULT_PIX_SUBSIDY => "Subsídio Pix por unidade:",
        RESULT_FIXED_FEES => "Taxas fixas por unidade:",
        RESULT_ITERATIONS => "Iterações:",
        WARN_NOT_CONVERGED => "Atenção: a faixa não se estabilizou; preço calculado na última faixa.",
        WARN_CLAMPED => "Atenção: taxas + margem passam de 100%; preço aproximado.",
        COUPON_HEADING => "\n-- Simulador de cupom --",
        PROMPT_FINAL_PRICE => "Preço final do lote [R$]: ",
        PROMPT_DISCOUNT => "Desconto [%] (1-50): ",
        PROMPT_LOT_PRODUCTION_COST => "Custo de produção do lote [R$]: ",
        PROMPT_LOT_PROFIT => "Lucro do lote [R$]: ",
        RESULT_DISCOUNTED_PRICE => "Preço com desconto:",
        RESULT_DISCOUNTED_PROFIT => "Lucro com desconto:",
        RESULT_DISCOUNTED_MARGIN => "Margem com desconto:",
        RESULT_DISCOUNTED_NET_PROFIT => "Lucro líquido com desconto (após taxas):",
        RESULT_PROFIT_LOSS => "Redução do lucro:",
        SEVERITY_NONE => "Desconto seguro.",
        SEVERITY_WARNING => "Atenção: margem abaixo de 30%.",
        SEVERITY_CRITICAL => "Crítico: o desconto elimina o lucro.",
        MARKETPLACES_HEADING => "\n-- Marketplaces --",
        MARKETPLACES_TIERED => "taxas por faixa de preço",
        MARKETPLACES_EDITABLE => "taxas informadas pelo usuário",
        SETTINGS_HEADING => "\n-- Configurações --",
        SETTINGS_CURRENT => "Configuração atual:",
        SETTINGS_OPTIONS => "1) Tipo de vendedor  2) Marketplace padrão  3) Margem padrão  4) Idioma",
        SETTINGS_PROMPT_CHANGE => "Número para alterar (enter para cancelar): ",
        SETTINGS_INVALID => "Entrada inválida; nada foi alterado.",
        SETTINGS_SAVED => "Configuração atualizada.",
        REPORT_HEADING => "=== Orçamento ===",
        REPORT_MATERIALS => "-- Materiais --",
        REPORT_OPERATIONAL => "-- Custos operacionais --",
        REPORT_PRICING => "-- Preço --",
        REPORT_COUPON => "-- Cupom --",
        _ => "[tradução ausente]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting PreciGraf.",
        MAIN_MENU_TITLE => "\n=== PreciGraf - Pricing Calculator ===",
        MAIN_MENU_RAW_MATERIAL => "1) Raw material (package)",
        MAIN_MENU_INK => "2) Ink",
        MAIN_MENU_OPERATIONAL => "3) Operational costs",
        MAIN_MENU_PRICING => "4) Selling price",
        MAIN_MENU_SHOPEE => "5) Shopee price (tiered fees)",
        MAIN_MENU_COUPON => "6) Coupon simulator",
        MAIN_MENU_MARKETPLACES => "7) Marketplace table",
        MAIN_MENU_SETTINGS => "8) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        RAW_MATERIAL_HEADING => "\n-- Raw material --",
        PROMPT_PACKAGE_VALUE => "Package price [R$]: ",
        PROMPT_PACKAGE_QUANTITY => "Quantity per package: ",
        PROMPT_QUANTITY_USED => "Quantity used: ",
        RESULT_UNIT_VALUE => "Unit value:",
        RESULT_COST => "Cost:",
        INK_HEADING => "\n-- Ink --",
        PROMPT_INK_TOTAL_VALUE => "Total paid [R$]: ",
        PROMPT_BOTTLE_COUNT => "Bottle count: ",
        PROMPT_ML_PER_BOTTLE => "ml per bottle: ",
        PROMPT_ML_PER_PRINT => "ml per print: ",
        PROMPT_PRINT_QUANTITY => "Print quantity: ",
        RESULT_TOTAL_ML => "Total ink [ml]:",
        RESULT_VALUE_PER_ML => "Value per ml:",
        RESULT_TOTAL_CONSUMPTION => "Total consumption [ml]:",
        OPERATIONAL_HEADING => "\n-- Operational costs --",
        PROMPT_PRODUCTION_TIME => "Production time [min]: ",
        PROMPT_EQUIPMENT_COUNT => "How many equipment items? ",
        PROMPT_ITEM_NAME => "Name: ",
        PROMPT_EQUIPMENT_VALUE => "Equipment price [R$]: ",
        PROMPT_USEFUL_LIFE => "Useful life [years]: ",
        PROMPT_USAGE_PERCENT => "Usage percentage [%]: ",
        PROMPT_ELECTRICITY => "Monthly electricity bill [R$]: ",
        PROMPT_INTERNET => "Monthly internet bill [R$]: ",
        PROMPT_LABOR => "Monthly owner withdrawal [R$]: ",
        PROMPT_OTHER_COUNT => "How many other fixed costs? ",
        PROMPT_OTHER_VALUE => "Monthly amount [R$]: ",
        CATEGORY_EQUIPMENT => "Equipment",
        CATEGORY_ELECTRICITY => "Electricity",
        CATEGORY_INTERNET => "Internet",
        CATEGORY_LABOR => "Labor",
        CATEGORY_OTHER => "Other fixed cost",
        RESULT_COST_PER_MINUTE => "Cost per minute:",
        RESULT_COST_PER_HOUR => "Cost per hour:",
        RESULT_APPLIED_COST => "Applied cost:",
        PRICING_HEADING => "\n-- Selling price --",
        PROMPT_UNIT_RAW_COST => "Raw material cost per unit [R$]: ",
        PROMPT_OPERATIONAL_TOTAL => "Operational cost of the lot [R$]: ",
        PROMPT_LOT_QUANTITY => "Lot quantity: ",
        PROMPT_MARGIN => "Profit margin [%]: ",
        PROMPT_FIXED_PROFIT => "Fixed lot profit [R$] (0 = use margin): ",
        PROMPT_MARKETPLACE => "Marketplace (id, enter = default): ",
        PROMPT_COMMISSION => "Commission [%]: ",
        PROMPT_FIXED_FEE => "Fixed fee per order [R$]: ",
        PRICING_USE_SHOPEE_MENU => "This marketplace uses tiered fees; use the Shopee menu.",
        RESULT_PRODUCTION_COST => "Production cost:",
        RESULT_PROFIT => "Desired profit:",
        RESULT_FEES => "Marketplace fees:",
        RESULT_UNIT_PRICE => "Unit price:",
        RESULT_LOT_PRICE => "Lot price:",
        RESULT_NET_PROFIT => "Net profit:",
        RESULT_MARGIN => "Margin on sale:",
        WARN_LOSS => "Warning: this price is a loss.",
        SHOPEE_HEADING => "\n-- Shopee price --",
        PROMPT_UNIT_PRODUCTION_COST => "Production cost per unit [R$]: ",
        PROMPT_SELLER_TYPE => "Seller type (cpf/cnpj, enter = default): ",
        RESULT_TIER => "Price tier:",
        RESULT_COMMISSION => "Commission per unit:",
        RESULT_PIX_SUBSIDY => "Pix subsidy per unit:",
        RESULT_FIXED_FEES => "Fixed fees per unit:",
        RESULT_ITERATIONS => "Iterations:",
        WARN_NOT_CONVERGED => "Warning: tier did not stabilize; price uses the last tier.",
        WARN_CLAMPED => "Warning: fees + margin exceed 100%; price is approximate.",
        COUPON_HEADING => "\n-- Coupon simulator --",
        PROMPT_FINAL_PRICE => "Lot final price [R$]: ",
        PROMPT_DISCOUNT => "Discount [%] (1-50): ",
        PROMPT_LOT_PRODUCTION_COST => "Lot production cost [R$]: ",
        PROMPT_LOT_PROFIT => "Lot profit [R$]: ",
        RESULT_DISCOUNTED_PRICE => "Discounted price:",
        RESULT_DISCOUNTED_PROFIT => "Discounted profit:",
        RESULT_DISCOUNTED_MARGIN => "Discounted margin:",
        RESULT_DISCOUNTED_NET_PROFIT => "Discounted net profit (after fees):",
        RESULT_PROFIT_LOSS => "Profit reduction:",
        SEVERITY_NONE => "Safe discount.",
        SEVERITY_WARNING => "Warning: margin below 30%.",
        SEVERITY_CRITICAL => "Critical: the discount wipes out the profit.",
        MARKETPLACES_HEADING => "\n-- Marketplaces --",
        MARKETPLACES_TIERED => "tiered by price",
        MARKETPLACES_EDITABLE => "user-supplied fees",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Seller type  2) Default marketplace  3) Default margin  4) Language",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings updated.",
        REPORT_HEADING => "=== Quote ===",
        REPORT_MATERIALS => "-- Materials --",
        REPORT_OPERATIONAL => "-- Operational costs --",
        REPORT_PRICING => "-- Price --",
        REPORT_COUPON => "-- Coupon --",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_language_codes() {
        assert_eq!(resolve_language("pt_BR", None), "pt-br");
        assert_eq!(resolve_language("EN-gb", None), "en-us");
        assert_eq!(resolve_language("auto", Some("en")), "en-us");
    }

    #[test]
    fn unknown_english_key_falls_back() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) Exit");
        assert_eq!(tr.t("no.such.key"), "[tradução ausente]");
    }

    #[test]
    fn parses_nested_pack() {
        let map = parse_toml_to_map("[main_menu]\nexit = \"0) Fim\"\n").unwrap();
        assert_eq!(map.get(keys::MAIN_MENU_EXIT).map(String::as_str), Some("0) Fim"));
    }
}
