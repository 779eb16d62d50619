use std::path::Path;

use tracing::{info, warn};

use crate::cli::{Cli, Command, ParamOverrides};
use crate::config::{self, Config, ConfigOrigin, OutputFormat};
use crate::params::{PerformanceParams, SAVING_PERCENT_RANGE};
use crate::report::{self, PerformanceReport, Section};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 결과 직렬화 오류
    Serialize(toml::ser::Error),
    /// 입력 계층에서 거부한 값
    InvalidInput(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Serialize(e) => write!(f, "결과 직렬화 오류: {e}"),
            AppError::InvalidInput(msg) => write!(f, "잘못된 입력: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(value: toml::ser::Error) -> Self {
        AppError::Serialize(value)
    }
}

/// 입력 계층 검증. 코어 계산기는 어떤 값도 거부하지 않는다.
pub fn validate_params(params: &PerformanceParams) -> Result<(), AppError> {
    if !SAVING_PERCENT_RANGE.contains(&params.saving_percent) {
        return Err(AppError::InvalidInput(format!(
            "saving_percent는 {}~{} 범위여야 합니다: {}",
            SAVING_PERCENT_RANGE.start(),
            SAVING_PERCENT_RANGE.end(),
            params.saving_percent
        )));
    }
    Ok(())
}

/// 선택된 구역을 지정 형식의 문자열로 만든다.
pub fn render(
    report: &PerformanceReport,
    sections: &[Section],
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(sections
            .iter()
            .map(|s| report.render_section(*s))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Toml => {
            let full = toml::to_string_pretty(report)?;
            if sections.len() == Section::ALL.len() {
                return Ok(full);
            }
            // 단일 구역 요청이면 해당 표만 남긴다.
            let value = toml::Value::try_from(report)?;
            let mut picked = toml::Table::new();
            for s in sections {
                let key = section_key(*s);
                if let Some(v) = value.get(key) {
                    picked.insert(key.to_string(), v.clone());
                }
            }
            Ok(toml::to_string_pretty(&picked)?)
        }
    }
}

fn section_key(section: Section) -> &'static str {
    match section {
        Section::Battery => "battery",
        Section::Cii => "cii",
        Section::Roi => "roi",
        Section::Eexi => "eexi",
        Section::Savings => "savings",
    }
}

fn evaluate_and_print(
    params: &PerformanceParams,
    sections: &[Section],
    format: OutputFormat,
) -> Result<(), AppError> {
    validate_params(params)?;
    let report = report::evaluate(params);
    println!("{}", render(&report, sections, format)?);
    Ok(())
}

/// 설정을 읽은 뒤 명령을 실행한다. `origin`은 이번 실행 전에 설정 파일이 있었는지를 알려준다.
pub fn run(cli: Cli, cfg: &Config, origin: ConfigOrigin) -> Result<(), AppError> {
    let format = cli.format.unwrap_or(cfg.output);
    let base = cfg.defaults;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ParamOverrides::default()));
    match command {
        Command::Report(ov) => evaluate_and_print(&ov.apply(base), &Section::ALL, format),
        Command::Bess(ov) => evaluate_and_print(&ov.apply(base), &[Section::Battery], format),
        Command::Cii(ov) => evaluate_and_print(&ov.apply(base), &[Section::Cii], format),
        Command::Roi(ov) => evaluate_and_print(&ov.apply(base), &[Section::Roi], format),
        Command::Eexi(ov) => evaluate_and_print(&ov.apply(base), &[Section::Eexi], format),
        Command::Savings(ov) => evaluate_and_print(&ov.apply(base), &[Section::Savings], format),
        Command::Interactive => {
            let params = ui_cli::prompt_params(base)?;
            evaluate_and_print(&params, &Section::ALL, format)
        }
        Command::InitConfig(ov) => {
            let params = ov.apply(base);
            validate_params(&params)?;
            write_config(cfg, params, &cli.config, origin)
        }
    }
}

fn write_config(
    cfg: &Config,
    params: PerformanceParams,
    path: &Path,
    origin: ConfigOrigin,
) -> Result<(), AppError> {
    let mut updated = cfg.clone();
    updated.defaults = params;
    // 방금 시작 단계에서 만든 기본 파일은 사용자 설정이 아니다.
    if origin == ConfigOrigin::Loaded {
        warn!(path = %path.display(), "overwriting existing config");
    }
    updated.save_to(path)?;
    info!(path = %path.display(), "config written");
    println!("설정을 저장했습니다: {}", path.display());
    Ok(())
}
