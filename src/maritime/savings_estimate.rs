use serde::{Deserialize, Serialize};
use tracing::debug;

use super::OPERATING_DAYS_PER_YEAR;

/// 절감률 기반 연료/비용 절감 추정 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimateInput {
    /// 기존 연료 소비량 [t/day]
    pub original_consumption_tpd: f64,
    /// 예상 절감률 [%]
    pub saving_percent: f64,
    /// 연료 단가 [USD/t]
    pub fuel_price_per_tonne: f64,
}

/// 절감 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimateResult {
    /// 일일 절감 연료 [t/day]
    pub daily_savings: f64,
    /// 연간 절감 연료 [t/년]
    pub annual_savings_tonnes: f64,
    /// 연간 비용 절감 [USD/년]
    pub cost_savings: f64,
}

/// 기존 소비량에 절감률을 적용해 일/연간 절감량과 비용을 추정한다.
pub fn savings_estimate(input: SavingsEstimateInput) -> SavingsEstimateResult {
    let daily_savings = input.original_consumption_tpd * (input.saving_percent / 100.0);
    let annual_savings_tonnes = daily_savings * OPERATING_DAYS_PER_YEAR;
    let cost_savings = annual_savings_tonnes * input.fuel_price_per_tonne;
    let result = SavingsEstimateResult {
        daily_savings,
        annual_savings_tonnes,
        cost_savings,
    };
    debug!(?input, ?result, "savings estimate computed");
    result
}

/// 위치 인자 형태의 절감 추정.
/// 반환값: (일일 절감[t], 연간 절감[t], 연간 비용 절감[USD])
pub fn estimate_savings(
    original_tpd: f64,
    saving_percent: f64,
    fuel_price: f64,
) -> (f64, f64, f64) {
    let r = savings_estimate(SavingsEstimateInput {
        original_consumption_tpd: original_tpd,
        saving_percent,
        fuel_price_per_tonne: fuel_price,
    });
    (r.daily_savings, r.annual_savings_tonnes, r.cost_savings)
}
