//! 판매가 구성, 판매 채널 수수료, 할인 시뮬레이션 모듈 모음.

pub mod composer;
pub mod coupon;
pub mod marketplace;
pub mod shopee;

pub use composer::{compose, PricingInput, PricingResult, ProfitTarget, UnitBreakdown};
pub use coupon::{simulate_coupon, CouponInput, CouponSeverity, CouponSimulation};
pub use marketplace::{find_marketplace, marketplaces, FeeModel, MarketplaceConfig, SellerType};
pub use shopee::{solve, solve_shopee, solve_shopee_fixed_profit, tier_for_price, ShopeeInput, ShopeeQuote, ShopeeTier};
