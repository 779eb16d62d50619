use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// EEXI(Energy Efficiency Existing Ship Index) 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EexiInput {
    /// 주기관 출력 [kW]
    pub p_me: f64,
    /// 주기관 SFOC [g/kWh]
    pub sfoc_me: f64,
    /// 연료 CO₂ 환산계수 [g/g]
    pub cf: f64,
    /// 기준 선속 [knots]
    pub v_ref: f64,
    /// 재화중량 [DWT]
    pub dwt: f64,
    /// IMO 요구 EEXI
    pub eexi_ref: f64,
}

/// EEXI 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EexiResult {
    /// 달성 EEXI [gCO₂/t·nm]
    pub attained_eexi: f64,
    /// 달성값이 요구값 이하이면 true (경계 포함)
    pub is_compliant: bool,
}

/// 달성 EEXI를 계산하고 IMO 요구값과 비교한다.
pub fn eexi(input: EexiInput) -> EexiResult {
    let numerator = input.p_me * input.sfoc_me * input.cf;
    let denominator = input.v_ref * input.dwt;
    let attained_eexi = if denominator > 0.0 {
        numerator / denominator
    } else {
        warn!(denominator, "v_ref * dwt is not positive, attained EEXI set to 0");
        0.0
    };
    let result = EexiResult {
        attained_eexi,
        is_compliant: attained_eexi <= input.eexi_ref,
    };
    debug!(?input, ?result, "eexi computed");
    result
}

/// 위치 인자 형태의 EEXI 계산.
/// 반환값: (달성 EEXI, 적합 여부)
pub fn compute_eexi(
    p_me: f64,
    sfoc_me: f64,
    cf: f64,
    v_ref: f64,
    dwt: f64,
    eexi_ref: f64,
) -> (f64, bool) {
    let r = eexi(EexiInput {
        p_me,
        sfoc_me,
        cf,
        v_ref,
        dwt,
        eexi_ref,
    });
    (r.attained_eexi, r.is_compliant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_speed_is_compliant_only_for_non_negative_reference() {
        assert_eq!(compute_eexi(23000.0, 170.0, 3.114, 0.0, 61614.0, 16.5), (0.0, true));
        assert_eq!(compute_eexi(23000.0, 170.0, 3.114, 0.0, 61614.0, -1.0), (0.0, false));
    }

    #[test]
    fn exceeding_reference_is_not_compliant() {
        let (attained, ok) = compute_eexi(23000.0, 170.0, 3.114, 18.5, 61614.0, 5.0);
        assert!(attained > 5.0);
        assert!(!ok);
    }
}
