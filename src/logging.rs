//! tracing 구독자 초기화.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 설정 값도 쓸 수 없을 때의 필터.
pub const FALLBACK_LEVEL: &str = "info";

/// 로그 필터를 결정한다. 우선순위: RUST_LOG > 설정 파일 log_level > info.
pub fn resolve_filter(config_level: Option<&str>) -> EnvFilter {
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env_value.as_deref(), config_level)
}

/// 파싱할 수 없는 값은 건너뛰고 다음 후보로 넘어간다.
fn filter_from(env_value: Option<&str>, config_level: Option<&str>) -> EnvFilter {
    env_value
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| config_level.and_then(|v| EnvFilter::try_new(v).ok()))
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_LEVEL))
}

/// stderr로 출력하는 전역 구독자를 설치한다. 이미 설치돼 있으면 조용히 넘어간다.
pub fn init(config_level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(resolve_filter(config_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_config() {
        assert_eq!(filter_from(Some("warn"), Some("debug")).to_string(), "warn");
    }

    #[test]
    fn config_level_used_without_rust_log() {
        assert_eq!(filter_from(None, Some("debug")).to_string(), "debug");
    }

    #[test]
    fn invalid_rust_log_falls_through_to_config() {
        assert_eq!(filter_from(Some("app=loud"), Some("debug")).to_string(), "debug");
    }

    #[test]
    fn invalid_config_level_falls_back_to_info() {
        assert_eq!(filter_from(None, Some("app=loud")).to_string(), "info");
        assert_eq!(filter_from(None, None).to_string(), "info");
    }

    #[test]
    fn resolve_filter_reads_the_environment() {
        // RUST_LOG가 설정된 환경에서도 결과는 그 값 또는 설정 값이어야 한다.
        let resolved = resolve_filter(Some("app=loud")).to_string();
        match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(v) if EnvFilter::try_new(&v).is_ok() => {
                assert_eq!(resolved, EnvFilter::new(&v).to_string())
            }
            _ => assert_eq!(resolved, FALLBACK_LEVEL),
        }
    }
}
