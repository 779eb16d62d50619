use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::KG_PER_TONNE;

/// CII(Carbon Intensity Indicator) 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CiiInput {
    /// 연간 연료 소비량 [t]
    pub fc_tonnes: f64,
    /// 연료 CO₂ 환산계수 Cf [tCO₂/t fuel]
    pub cf: f64,
    /// 재화중량 [DWT]
    pub dwt: f64,
    /// 연간 항해 거리 [NM]
    pub distance_nm: f64,
}

/// 연간 CO₂ 배출량을 운송 작업량(DWT × NM)으로 나눈 CII를 계산한다.
///
/// 단위는 gCO₂/DWT·nm로 표기한다. 작업량이 0 이하이면 0을 반환한다.
pub fn cii(input: CiiInput) -> f64 {
    let m = input.fc_tonnes * KG_PER_TONNE * input.cf;
    let w = input.dwt * input.distance_nm;
    let value = if w > 0.0 {
        m / w
    } else {
        warn!(w, "transport work is not positive, CII set to 0");
        0.0
    };
    debug!(?input, m, w, cii = value, "cii computed");
    value
}

/// 위치 인자 형태의 CII 계산.
pub fn compute_cii(fc_tonnes: f64, cf: f64, dwt: f64, distance_nm: f64) -> f64 {
    cii(CiiInput {
        fc_tonnes,
        cf,
        dwt,
        distance_nm,
    })
}
