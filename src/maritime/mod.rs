//! 선박 에너지/배출 성능 지표 계산 모듈 모음.
//! 배터리 절감 효과, CII, ROI, EEXI, 비율 기반 절감 추정으로 구성한다.

pub mod battery_efficiency;
pub mod cii;
pub mod eexi;
pub mod roi;
pub mod savings_estimate;

pub use battery_efficiency::*;
pub use cii::*;
pub use eexi::*;
pub use roi::*;
pub use savings_estimate::*;

/// 연간 운항일수 가정 [일/년]. 설정으로 바꾸지 않는 고정 상수다.
pub const OPERATING_DAYS_PER_YEAR: f64 = 300.0;

/// kWh → MJ 환산 계수.
pub const MJ_PER_KWH: f64 = 3.6;

/// 톤 → kg 환산 계수.
pub const KG_PER_TONNE: f64 = 1000.0;
