use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::params::PerformanceParams;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// CLI 결과 출력 형식.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum OutputFormat {
    /// 라벨이 붙은 사람이 읽는 형식
    #[default]
    Text,
    /// TOML 직렬화
    Toml,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// RUST_LOG가 없을 때 쓰는 로그 필터
    pub log_level: String,
    pub output: OutputFormat,
    /// 입력 화면 기본값
    pub defaults: PerformanceParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output: OutputFormat::Text,
            defaults: PerformanceParams::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류. 어느 파일에서 났는지 경로를 함께 담는다.
#[derive(Debug)]
pub enum ConfigError {
    /// 설정 파일을 읽거나 쓰지 못함
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 설정 파일 내용이 올바른 TOML/스키마가 아님
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// 설정 값을 TOML로 만들지 못함
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "설정 파일 입출력 오류({}): {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "설정 파싱 오류({}): {source}", path.display())
            }
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

/// 설정을 어디서 얻었는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// 이미 있던 파일에서 읽음
    Loaded,
    /// 파일이 없어 기본 설정을 새로 저장함
    Created,
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<(Config, ConfigOrigin), ConfigError> {
    load_or_create(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 그 경로에 저장한 뒤 반환한다.
///
/// 로그 구독자보다 먼저 불릴 수 있으므로 여기서는 로그를 남기지 않는다.
/// 호출 측이 `ConfigOrigin`을 보고 기록한다.
pub fn load_or_create(path: &Path) -> Result<(Config, ConfigOrigin), ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok((cfg, ConfigOrigin::Loaded))
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok((cfg, ConfigOrigin::Created))
    }
}

impl Config {
    /// 설정을 지정 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
