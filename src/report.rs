//! 다섯 계산기를 한 번에 실행하고 결과를 화면/파일용으로 정리한다.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::maritime::{
    bess_efficiency, cii, eexi, roi, savings_estimate, BessEfficiencyResult, EexiResult,
    RoiResult, SavingsEstimateResult,
};
use crate::params::PerformanceParams;

/// 결과 화면의 구역.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Battery,
    Cii,
    Roi,
    Eexi,
    Savings,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Battery,
        Section::Cii,
        Section::Roi,
        Section::Eexi,
        Section::Savings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Battery => "Battery Efficiency",
            Section::Cii => "Carbon Intensity Indicator (CII)",
            Section::Roi => "Return on Investment (ROI)",
            Section::Eexi => "Energy Efficiency Existing Ship Index (EEXI)",
            Section::Savings => "Percent-Based Fuel & Cost Savings Estimate",
        }
    }
}

/// 다섯 계산 결과 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// 달성 CII [gCO₂/DWT·nm]
    pub cii: f64,
    pub battery: BessEfficiencyResult,
    pub roi: RoiResult,
    pub eexi: EexiResult,
    pub savings: SavingsEstimateResult,
}

/// 파라미터 집합으로 다섯 계산기를 모두 실행한다.
///
/// 계산기끼리는 서로의 결과를 쓰지 않으므로 실행 순서는 의미가 없다.
pub fn evaluate(params: &PerformanceParams) -> PerformanceReport {
    let report = PerformanceReport {
        cii: cii(params.cii_input()),
        battery: bess_efficiency(params.bess_input()),
        roi: roi(params.roi_input()),
        eexi: eexi(params.eexi_input()),
        savings: savings_estimate(params.savings_input()),
    };
    debug!(
        cii = report.cii,
        roi = report.roi.roi,
        attained_eexi = report.eexi.attained_eexi,
        compliant = report.eexi.is_compliant,
        "performance report evaluated"
    );
    report
}

impl PerformanceReport {
    /// 구역별 (라벨, 표시 문자열) 목록을 만든다.
    pub fn lines(&self, section: Section) -> Vec<(&'static str, String)> {
        match section {
            Section::Battery => vec![
                ("Fuel Saved", format!("{:.2} tonnes/day", self.battery.fuel_saved_tonnes)),
                ("Energy Saved", format!("{:.2} MJ/day", self.battery.energy_saved_mj)),
                ("CO₂ Saved", format!("{:.2} tonnes/day", self.battery.co2_saved_tonnes)),
                ("Efficiency Ratio", format!("{:.2} MJ/MJ", self.battery.efficiency_ratio)),
            ],
            Section::Cii => vec![("Attained CII", format!("{:.6} gCO₂/DWT·nm", self.cii))],
            Section::Roi => vec![
                ("Annual Savings", format_currency(self.roi.annual_savings)),
                ("ROI", format_percent(self.roi.roi)),
                ("Payback Period", format!("{:.2} years", self.roi.payback_years)),
            ],
            Section::Eexi => vec![
                ("Attained EEXI", format!("{:.2} gCO₂/ton·nm", self.eexi.attained_eexi)),
                ("IMO Compliant", yes_no(self.eexi.is_compliant).to_string()),
            ],
            Section::Savings => vec![
                ("Daily Fuel Savings", format!("{:.2} tonnes", self.savings.daily_savings)),
                (
                    "Annual Fuel Savings",
                    format!("{:.2} tonnes", self.savings.annual_savings_tonnes),
                ),
                (
                    "Estimated Annual Cost Savings",
                    format_currency(self.savings.cost_savings),
                ),
            ],
        }
    }

    /// 한 구역을 텍스트로 렌더링한다.
    pub fn render_section(&self, section: Section) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", section.title());
        for (label, value) in self.lines(section) {
            let _ = writeln!(out, "{label}: {value}");
        }
        out
    }

    /// 전체 결과를 텍스트로 렌더링한다.
    pub fn render_text(&self) -> String {
        Section::ALL
            .iter()
            .map(|s| self.render_section(*s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// 비율을 백분율 문자열로 만든다. 2.3289 -> "232.89%"
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// 달러 표기. 소수 둘째 자리까지, 천 단위 콤마를 넣는다.
///
/// 부호는 `$` 뒤에 붙는다: `$-1,200.50`. 0으로 반올림되는 음수도 부호를 유지한다(`$-0.00`).
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("${sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1_875_120.0), "$1,875,120.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn currency_sign_follows_dollar() {
        assert_eq!(format_currency(-1200.5), "$-1,200.50");
        assert_eq!(format_currency(-0.001), "$-0.00");
    }

    #[test]
    fn repeated_evaluation_stays_below_info() {
        let params = PerformanceParams {
            capex: 0.0,
            ..PerformanceParams::default()
        };
        let logs = crate::logging::capture::with_info_logs(|| {
            for _ in 0..60 {
                evaluate(&params);
            }
        });
        assert_eq!(logs.count("INFO"), 0);
        // capex 0 가드는 계산마다 한 번 경고한다.
        assert_eq!(logs.count("WARN"), 60);
    }

    #[test]
    fn currency_non_finite() {
        assert_eq!(format_currency(f64::INFINITY), "$inf");
        assert_eq!(format_currency(f64::NAN), "$NaN");
    }

    #[test]
    fn percent_two_decimals() {
        assert_eq!(format_percent(0.5), "50.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
