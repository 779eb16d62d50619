//! 선박 에너지/배출 성능 지표 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod maritime;
pub mod params;
pub mod report;
pub mod ui_cli;
