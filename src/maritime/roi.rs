use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::OPERATING_DAYS_PER_YEAR;

/// 배터리 개조 투자 경제성 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    /// 일일 절감 연료량 [t/day]
    pub fuel_saved_tonnes_per_day: f64,
    /// 연료 단가 [USD/t]
    pub fuel_price_per_tonne: f64,
    /// 초기 투자비 [USD]
    pub capex: f64,
    /// 연간 운영비 [USD/년]
    pub opex_per_year: f64,
}

/// 경제성 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// 연간 연료비 절감액 [USD/년]
    pub annual_savings: f64,
    /// (연간 절감액 - 운영비) / 투자비. 투자비가 0 이하이면 0.
    pub roi: f64,
    /// 단순 회수기간 [년]. 순절감액이 0 이하이면 무한대.
    pub payback_years: f64,
}

/// 연간 절감액, ROI, 단순 회수기간을 계산한다.
pub fn roi(input: RoiInput) -> RoiResult {
    let annual_savings =
        input.fuel_saved_tonnes_per_day * input.fuel_price_per_tonne * OPERATING_DAYS_PER_YEAR;
    let net_savings = annual_savings - input.opex_per_year;
    let roi = if input.capex > 0.0 {
        net_savings / input.capex
    } else {
        warn!(capex = input.capex, "capex is not positive, ROI set to 0");
        0.0
    };
    let payback_years = if net_savings > 0.0 {
        input.capex / net_savings
    } else {
        warn!(net_savings, "net savings are not positive, payback is infinite");
        f64::INFINITY
    };
    let result = RoiResult {
        annual_savings,
        roi,
        payback_years,
    };
    debug!(?input, net_savings, ?result, "roi computed");
    result
}

/// 위치 인자 형태의 ROI 계산.
/// 반환값: (연간 절감액, ROI, 회수기간[년])
pub fn compute_roi(
    fuel_saved_tpd: f64,
    fuel_price: f64,
    capex: f64,
    opex_per_year: f64,
) -> (f64, f64, f64) {
    let r = roi(RoiInput {
        fuel_saved_tonnes_per_day: fuel_saved_tpd,
        fuel_price_per_tonne: fuel_price,
        capex,
        opex_per_year,
    });
    (r.annual_savings, r.roi, r.payback_years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opex_equal_to_savings_never_pays_back() {
        // 1 t/day * 100 USD * 300일 = 30,000 USD
        let (annual, roi, payback) = compute_roi(1.0, 100.0, 50_000.0, 30_000.0);
        assert!((annual - 30_000.0).abs() < 1e-9);
        assert_eq!(roi, 0.0);
        assert!(payback.is_infinite() && payback > 0.0);
    }

    #[test]
    fn zero_capex_keeps_zero_roi_and_zero_payback() {
        let (_, roi, payback) = compute_roi(10.0, 500.0, 0.0, 1000.0);
        assert_eq!(roi, 0.0);
        assert_eq!(payback, 0.0);
    }
}
