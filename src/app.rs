use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::sheet::{self, SheetError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 계산 시트 오류
    #[error("시트 오류: {0}")]
    Sheet(#[from] SheetError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::RawMaterial => ui_cli::handle_raw_material(tr)?,
            MenuChoice::Ink => ui_cli::handle_ink(tr)?,
            MenuChoice::Operational => ui_cli::handle_operational(tr)?,
            MenuChoice::Pricing => ui_cli::handle_pricing(tr, config)?,
            MenuChoice::Shopee => ui_cli::handle_shopee(tr, config)?,
            MenuChoice::Coupon => ui_cli::handle_coupon(tr, config)?,
            MenuChoice::Marketplaces => ui_cli::handle_marketplaces(tr),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 계산 시트 파일을 읽어 견적을 출력한다.
pub fn run_sheet(path: &Path, tr: &Translator) -> Result<(), AppError> {
    let sheet = sheet::load_sheet(path)?;
    let quote = sheet::quote(&sheet)?;
    ui_cli::print_quote(tr, &quote);
    Ok(())
}
