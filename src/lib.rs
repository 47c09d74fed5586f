//! 인쇄/공예 소상공인을 위한 판매가 계산 핵심 로직.
//! 계산 모듈은 순수 함수로만 구성되고, CLI와 설정은 그 위에 얹힌다.

pub mod app;
pub mod config;
pub mod costs;
pub mod i18n;
pub mod money;
pub mod operational;
pub mod pricing;
pub mod sheet;
pub mod ui_cli;
