//! 판매 채널별 수수료 테이블. 값은 고정 데이터이며 런타임에 바뀌지 않는다.

use serde::{Deserialize, Serialize};

use crate::money::{non_negative, percent};

/// 수수료 구조 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeModel {
    /// 고정 비율 + 주문당 고정 수수료
    Flat,
    /// 판매가 구간별 수수료 (Shopee)
    Tiered,
}

/// 판매자 등록 유형. CPF(개인)는 Shopee에서 주문당 추가 수수료를 낸다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerType {
    Cpf,
    #[default]
    Cnpj,
}

impl SellerType {
    pub fn as_code(&self) -> &'static str {
        match self {
            SellerType::Cpf => "cpf",
            SellerType::Cnpj => "cnpj",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "cpf" => Some(SellerType::Cpf),
            "cnpj" => Some(SellerType::Cnpj),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct MarketplaceConfig {
    pub id: &'static str,
    pub name: &'static str,
    /// 비율 수수료 [%]. `Tiered`면 구간 테이블을 사용하므로 0.
    pub commission_percent: f64,
    /// 판매 항목당 고정 수수료 [R$]. 로트 하나가 한 주문으로 판매된다.
    pub fixed_fee_per_item: f64,
    /// true면 사용자가 수수료를 직접 입력한다.
    pub is_editable: bool,
    pub fee_model: FeeModel,
}

/// 실제 적용할 정액 수수료.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatFees {
    pub commission_percent: f64,
    pub fixed_fee_per_order: f64,
}

impl MarketplaceConfig {
    /// 편집 가능한 채널이면 사용자 입력값을, 아니면 테이블 값을 사용한다.
    pub fn flat_fees(&self, commission_override: Option<f64>, fixed_fee_override: Option<f64>) -> FlatFees {
        if self.is_editable {
            FlatFees {
                commission_percent: percent(commission_override.unwrap_or(self.commission_percent)),
                fixed_fee_per_order: non_negative(fixed_fee_override.unwrap_or(self.fixed_fee_per_item)),
            }
        } else {
            FlatFees {
                commission_percent: self.commission_percent,
                fixed_fee_per_order: self.fixed_fee_per_item,
            }
        }
    }

    pub fn is_tiered(&self) -> bool {
        self.fee_model == FeeModel::Tiered
    }
}

const MARKETPLACES: &[MarketplaceConfig] = &[
    MarketplaceConfig {
        id: "direct",
        name: "Venda direta",
        commission_percent: 0.0,
        fixed_fee_per_item: 0.0,
        is_editable: false,
        fee_model: FeeModel::Flat,
    },
    MarketplaceConfig {
        id: "shopee",
        name: "Shopee",
        commission_percent: 0.0,
        fixed_fee_per_item: 0.0,
        is_editable: false,
        fee_model: FeeModel::Tiered,
    },
    MarketplaceConfig {
        id: "mercado_livre_classico",
        name: "Mercado Livre Clássico",
        commission_percent: 14.0,
        fixed_fee_per_item: 6.0,
        is_editable: false,
        fee_model: FeeModel::Flat,
    },
    MarketplaceConfig {
        id: "mercado_livre_premium",
        name: "Mercado Livre Premium",
        commission_percent: 19.0,
        fixed_fee_per_item: 6.0,
        is_editable: false,
        fee_model: FeeModel::Flat,
    },
    MarketplaceConfig {
        id: "elo7",
        name: "Elo7",
        commission_percent: 18.0,
        fixed_fee_per_item: 0.0,
        is_editable: false,
        fee_model: FeeModel::Flat,
    },
    MarketplaceConfig {
        id: "amazon",
        name: "Amazon",
        commission_percent: 15.0,
        fixed_fee_per_item: 2.0,
        is_editable: false,
        fee_model: FeeModel::Flat,
    },
    MarketplaceConfig {
        id: "shein",
        name: "Shein",
        commission_percent: 16.0,
        fixed_fee_per_item: 0.0,
        is_editable: false,
        fee_model: FeeModel::Flat,
    },
    MarketplaceConfig {
        id: "tiktok_shop",
        name: "TikTok Shop",
        commission_percent: 6.0,
        fixed_fee_per_item: 2.0,
        is_editable: false,
        fee_model: FeeModel::Flat,
    },
    MarketplaceConfig {
        id: "custom",
        name: "Personalizado",
        commission_percent: 0.0,
        fixed_fee_per_item: 0.0,
        is_editable: true,
        fee_model: FeeModel::Flat,
    },
];

pub fn marketplaces() -> &'static [MarketplaceConfig] {
    MARKETPLACES
}

/// id 또는 이름으로 채널을 찾는다 (대소문자 무시).
pub fn find_marketplace(id: &str) -> Option<&'static MarketplaceConfig> {
    let key = id.trim();
    MARKETPLACES
        .iter()
        .find(|m| m.id.eq_ignore_ascii_case(key) || m.name.eq_ignore_ascii_case(key))
}
