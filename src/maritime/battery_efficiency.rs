use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::MJ_PER_KWH;

/// 배터리(BESS) 절감 효과 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BessEfficiencyInput {
    /// 배터리 공급 에너지 [kWh/day]
    pub battery_energy_kwh: f64,
    /// 비연료소비율 SFOC [t/kWh]
    pub sfoc_tonnes_per_kwh: f64,
    /// 연료 에너지 밀도 [MJ/t]
    pub fuel_energy_density_mj_per_tonne: f64,
    /// CO₂ 배출계수 [tCO₂/t fuel]
    pub co2_emission_factor: f64,
}

/// 배터리 절감 효과 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BessEfficiencyResult {
    /// 절감 연료량 [t/day]
    pub fuel_saved_tonnes: f64,
    /// 절감 연료의 에너지 [MJ/day]
    pub energy_saved_mj: f64,
    /// 절감 CO₂ [t/day]
    pub co2_saved_tonnes: f64,
    /// 배터리 에너지 대비 절감 연료 에너지 비 [MJ/MJ]. 배터리 에너지가 0 이하이면 0.
    pub efficiency_ratio: f64,
}

/// 배터리가 대체한 전력량으로 연료/에너지/CO₂ 절감량을 계산한다.
///
/// 음수 입력도 그대로 계산에 반영한다. 범위 검증은 입력 계층의 몫이다.
pub fn bess_efficiency(input: BessEfficiencyInput) -> BessEfficiencyResult {
    let fuel_saved_tonnes = input.battery_energy_kwh * input.sfoc_tonnes_per_kwh;
    let energy_saved_mj = fuel_saved_tonnes * input.fuel_energy_density_mj_per_tonne;
    let co2_saved_tonnes = fuel_saved_tonnes * input.co2_emission_factor;
    let battery_energy_mj = input.battery_energy_kwh * MJ_PER_KWH;
    let efficiency_ratio = if battery_energy_mj > 0.0 {
        energy_saved_mj / battery_energy_mj
    } else {
        warn!(battery_energy_mj, "battery energy is not positive, efficiency ratio set to 0");
        0.0
    };
    let result = BessEfficiencyResult {
        fuel_saved_tonnes,
        energy_saved_mj,
        co2_saved_tonnes,
        efficiency_ratio,
    };
    debug!(?input, ?result, "bess efficiency computed");
    result
}

/// 위치 인자 형태의 배터리 효율 계산.
/// 반환값: (절감 연료[t], 절감 에너지[MJ], 절감 CO₂[t], 효율비)
pub fn compute_bess_efficiency(
    battery_energy_kwh: f64,
    sfoc: f64,
    fuel_energy_density: f64,
    co2_factor: f64,
) -> (f64, f64, f64, f64) {
    let r = bess_efficiency(BessEfficiencyInput {
        battery_energy_kwh,
        sfoc_tonnes_per_kwh: sfoc,
        fuel_energy_density_mj_per_tonne: fuel_energy_density,
        co2_emission_factor: co2_factor,
    });
    (
        r.fuel_saved_tonnes,
        r.energy_saved_mj,
        r.co2_saved_tonnes,
        r.efficiency_ratio,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_battery_energy_gives_zero_ratio() {
        let (fuel, energy, co2, ratio) = compute_bess_efficiency(0.0, 0.00022, 42700.0, 3.17);
        assert_eq!(fuel, 0.0);
        assert_eq!(energy, 0.0);
        assert_eq!(co2, 0.0);
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn negative_input_is_propagated() {
        let (fuel, _, co2, ratio) = compute_bess_efficiency(-100.0, 0.0002, 42700.0, 3.0);
        assert!((fuel + 0.02).abs() < 1e-12);
        assert!((co2 + 0.06).abs() < 1e-12);
        // 배터리 에너지가 음수이므로 가드가 동작한다.
        assert_eq!(ratio, 0.0);
    }
}
