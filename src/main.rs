use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use precigraf::{app, config, i18n};

/// 인쇄/공예 제품 판매가 계산기.
#[derive(Debug, Parser)]
#[command(name = "precigraf", version, about)]
struct Cli {
    /// 표시 언어 (auto/pt-br/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로 (기본 config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// TOML 계산 시트를 읽어 견적을 출력한다.
    Sheet {
        /// 시트 파일 경로
        path: PathBuf,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err((tr, err)) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), (i18n::Translator, app::AppError)> {
    let fallback = || i18n::Translator::new(&i18n::resolve_language(&cli.lang, None));
    let mut cfg = config::load_or_default(cli.config.as_deref())
        .map_err(|e| (fallback(), e.into()))?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    log::debug!("language {}, config {:?}", tr.language_code(), cli.config);

    let result = match &cli.command {
        Some(Command::Sheet { path }) => app::run_sheet(path, &tr),
        None => app::run(&mut cfg, &tr),
    };
    result.map_err(|e| (tr, e))
}
