//! 계산기 전체가 공유하는 평면 파라미터 집합.

use serde::{Deserialize, Serialize};

use crate::maritime::{
    BessEfficiencyInput, CiiInput, EexiInput, RoiInput, SavingsEstimateInput,
};

/// 절감률 입력 허용 범위 [%]. 코어는 검증하지 않으며 입력 계층에서만 쓴다.
pub const SAVING_PERCENT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=20.0;

/// 입력 화면에서 받는 모든 파라미터.
///
/// 누락된 필드는 기본값으로 채워지므로 설정 파일에는 바꿀 값만 적어도 된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceParams {
    /// 배터리 공급 에너지 [kWh/day]
    pub battery_energy_kwh: f64,
    /// SFOC [t/kWh]
    pub sfoc_tonnes_per_kwh: f64,
    /// 연료 에너지 밀도 [MJ/t]
    pub fuel_energy_density: f64,
    /// CO₂ 배출계수 [tCO₂/t fuel]. 배터리 효율과 CII가 함께 쓴다.
    pub co2_factor: f64,
    /// 연간 연료 소비량 [t]
    pub fuel_consumed_annual: f64,
    /// 재화중량 [DWT]. CII와 EEXI가 함께 쓴다.
    pub dwt: f64,
    /// 연간 항해 거리 [NM]
    pub distance_nm: f64,
    /// 일일 절감 연료 [t/day]
    pub fuel_saved_tpd: f64,
    /// 연료 단가 [USD/t]. ROI와 절감 추정이 함께 쓴다.
    pub fuel_price: f64,
    /// 초기 투자비 [USD]
    pub capex: f64,
    /// 연간 운영비 [USD]
    pub opex: f64,
    /// 주기관 출력 [kW]
    pub p_me: f64,
    /// 주기관 SFOC [g/kWh]
    pub sfoc_me: f64,
    /// EEXI용 연료 CO₂ 계수 [g/g]
    pub cf_eexi: f64,
    /// 기준 선속 [knots]
    pub v_ref: f64,
    /// IMO 요구 EEXI
    pub eexi_ref: f64,
    /// 예상 절감률 [%], 입력 화면 기준 0~20
    pub saving_percent: f64,
    /// 기존 연료 소비량 [t/day]
    pub original_consumption_tpd: f64,
}

impl Default for PerformanceParams {
    fn default() -> Self {
        Self {
            battery_energy_kwh: 1200.0,
            sfoc_tonnes_per_kwh: 0.00022,
            fuel_energy_density: 42700.0,
            co2_factor: 3.17,
            fuel_consumed_annual: 31200.0,
            dwt: 61614.0,
            distance_nm: 100000.0,
            fuel_saved_tpd: 10.4,
            fuel_price: 601.0,
            capex: 800000.0,
            opex: 12000.0,
            p_me: 23000.0,
            sfoc_me: 170.0,
            cf_eexi: 3.114,
            v_ref: 18.5,
            eexi_ref: 16.5,
            saving_percent: 10.0,
            original_consumption_tpd: 104.0,
        }
    }
}

impl PerformanceParams {
    pub fn bess_input(&self) -> BessEfficiencyInput {
        BessEfficiencyInput {
            battery_energy_kwh: self.battery_energy_kwh,
            sfoc_tonnes_per_kwh: self.sfoc_tonnes_per_kwh,
            fuel_energy_density_mj_per_tonne: self.fuel_energy_density,
            co2_emission_factor: self.co2_factor,
        }
    }

    pub fn cii_input(&self) -> CiiInput {
        CiiInput {
            fc_tonnes: self.fuel_consumed_annual,
            cf: self.co2_factor,
            dwt: self.dwt,
            distance_nm: self.distance_nm,
        }
    }

    pub fn roi_input(&self) -> RoiInput {
        RoiInput {
            fuel_saved_tonnes_per_day: self.fuel_saved_tpd,
            fuel_price_per_tonne: self.fuel_price,
            capex: self.capex,
            opex_per_year: self.opex,
        }
    }

    pub fn eexi_input(&self) -> EexiInput {
        EexiInput {
            p_me: self.p_me,
            sfoc_me: self.sfoc_me,
            cf: self.cf_eexi,
            v_ref: self.v_ref,
            dwt: self.dwt,
            eexi_ref: self.eexi_ref,
        }
    }

    pub fn savings_input(&self) -> SavingsEstimateInput {
        SavingsEstimateInput {
            original_consumption_tpd: self.original_consumption_tpd,
            saving_percent: self.saving_percent,
            fuel_price_per_tonne: self.fuel_price,
        }
    }

    /// 파라미터 이름(snake_case)으로 값을 찾는다. 대화형 입력과 GUI가 쓴다.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut f64> {
        let v = match name {
            "battery_energy_kwh" => &mut self.battery_energy_kwh,
            "sfoc_tonnes_per_kwh" => &mut self.sfoc_tonnes_per_kwh,
            "fuel_energy_density" => &mut self.fuel_energy_density,
            "co2_factor" => &mut self.co2_factor,
            "fuel_consumed_annual" => &mut self.fuel_consumed_annual,
            "dwt" => &mut self.dwt,
            "distance_nm" => &mut self.distance_nm,
            "fuel_saved_tpd" => &mut self.fuel_saved_tpd,
            "fuel_price" => &mut self.fuel_price,
            "capex" => &mut self.capex,
            "opex" => &mut self.opex,
            "p_me" => &mut self.p_me,
            "sfoc_me" => &mut self.sfoc_me,
            "cf_eexi" => &mut self.cf_eexi,
            "v_ref" => &mut self.v_ref,
            "eexi_ref" => &mut self.eexi_ref,
            "saving_percent" => &mut self.saving_percent,
            "original_consumption_tpd" => &mut self.original_consumption_tpd,
            _ => return None,
        };
        Some(v)
    }
}

/// 입력 항목의 이름과 화면 라벨.
#[derive(Debug, Clone, Copy)]
pub struct ParamField {
    pub name: &'static str,
    pub label: &'static str,
}

/// 입력 그룹. 입력 화면은 이 순서대로 항목을 보여준다.
pub const PARAM_GROUPS: &[(&str, &[ParamField])] = &[
    (
        "Battery",
        &[
            ParamField { name: "battery_energy_kwh", label: "Battery Energy (kWh/day)" },
            ParamField { name: "sfoc_tonnes_per_kwh", label: "SFOC (tonnes/kWh)" },
            ParamField { name: "fuel_energy_density", label: "Fuel Energy Density (MJ/tonne)" },
            ParamField { name: "co2_factor", label: "CO₂ Factor (tCO₂/t fuel)" },
        ],
    ),
    (
        "Voyage",
        &[
            ParamField { name: "fuel_consumed_annual", label: "Annual Fuel Consumption (tonnes)" },
            ParamField { name: "dwt", label: "Deadweight (DWT)" },
            ParamField { name: "distance_nm", label: "Annual Distance Sailed (NM)" },
        ],
    ),
    (
        "Investment",
        &[
            ParamField { name: "fuel_saved_tpd", label: "Fuel Saved per Day (tonnes)" },
            ParamField { name: "fuel_price", label: "Fuel Price (USD/tonne)" },
            ParamField { name: "capex", label: "CAPEX (USD)" },
            ParamField { name: "opex", label: "OPEX/year (USD)" },
        ],
    ),
    (
        "Main engine",
        &[
            ParamField { name: "p_me", label: "Main Engine Power (kW)" },
            ParamField { name: "sfoc_me", label: "Main Engine SFOC (g/kWh)" },
            ParamField { name: "cf_eexi", label: "Fuel CO₂ Factor (g/g)" },
            ParamField { name: "v_ref", label: "Reference Speed (knots)" },
            ParamField { name: "eexi_ref", label: "IMO Reference EEXI" },
        ],
    ),
    (
        "Savings estimate",
        &[
            ParamField { name: "saving_percent", label: "Fuel Saving Percentage (Estimate)" },
            ParamField {
                name: "original_consumption_tpd",
                label: "Original Fuel Consumption (tonnes/day)",
            },
        ],
    ),
];

/// 모든 입력 항목을 그룹 순서대로 순회한다.
pub fn all_fields() -> impl Iterator<Item = &'static ParamField> {
    PARAM_GROUPS.iter().flat_map(|(_, fields)| fields.iter())
}
