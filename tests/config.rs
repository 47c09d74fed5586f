//! 설정 파일 생성/저장/재로드 테스트.
use precigraf::config::{load_or_default, ConfigError};
use precigraf::pricing::SellerType;

#[test]
fn first_run_creates_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    assert!(!path.exists());

    let cfg = load_or_default(Some(path.as_path())).unwrap();
    assert!(path.exists());
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.seller_type, SellerType::Cnpj);
    assert_eq!(cfg.default_marketplace, "direct");
    assert_eq!(cfg.default_margin_percent, 30.0);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("seller_type = \"cnpj\""));
    assert!(!written.contains("path"));
}

#[test]
fn save_round_trips_through_loaded_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("precigraf.toml");

    let mut cfg = load_or_default(Some(path.as_path())).unwrap();
    cfg.seller_type = SellerType::Cpf;
    cfg.default_marketplace = "shopee".to_string();
    cfg.default_margin_percent = 45.5;
    cfg.default_coupon_percent = 12.5;
    cfg.language = "en-us".to_string();
    cfg.save().unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("seller_type = \"cpf\""));

    let reloaded = load_or_default(Some(path.as_path())).unwrap();
    assert_eq!(reloaded.seller_type, SellerType::Cpf);
    assert_eq!(reloaded.default_marketplace, "shopee");
    assert_eq!(reloaded.default_margin_percent, 45.5);
    assert_eq!(reloaded.default_coupon_percent, 12.5);
    assert_eq!(reloaded.language, "en-us");
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "seller_type = \"cpf\"\n").unwrap();

    let cfg = load_or_default(Some(path.as_path())).unwrap();
    assert_eq!(cfg.seller_type, SellerType::Cpf);
    assert_eq!(cfg.default_coupon_percent, 10.0);
    assert!(cfg.language_pack_dir.is_none());
}

#[test]
fn unknown_seller_type_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "seller_type = \"mei\"\n").unwrap();

    assert!(matches!(
        load_or_default(Some(path.as_path())),
        Err(ConfigError::Parse(_))
    ));
}
