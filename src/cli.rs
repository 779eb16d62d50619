//! 명령행 인자 정의.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{OutputFormat, DEFAULT_CONFIG_PATH};
use crate::params::PerformanceParams;

/// Battery efficiency & IMO performance calculator for ships.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the toml configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output format. Overrides the configured one.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate all five indicators (default).
    Report(ParamOverrides),
    /// Enter every parameter at a prompt, then print the report.
    Interactive,
    /// Battery-assisted fuel, energy and CO₂ savings.
    Bess(ParamOverrides),
    /// Carbon Intensity Indicator.
    Cii(ParamOverrides),
    /// Return on investment of the battery retrofit.
    Roi(ParamOverrides),
    /// Energy Efficiency Existing Ship Index and compliance.
    Eexi(ParamOverrides),
    /// Percent-based fuel and cost savings estimate.
    Savings(ParamOverrides),
    /// Write the effective defaults to the configuration file.
    InitConfig(ParamOverrides),
}

/// 설정 파일 기본값 위에 덮어쓸 파라미터. 주지 않은 항목은 그대로 둔다.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamOverrides {
    /// Battery energy supplied per day [kWh].
    #[arg(long, allow_negative_numbers = true)]
    pub battery_energy_kwh: Option<f64>,
    /// Specific fuel oil consumption [t/kWh].
    #[arg(long, allow_negative_numbers = true)]
    pub sfoc_tonnes_per_kwh: Option<f64>,
    /// Fuel energy density [MJ/t].
    #[arg(long, allow_negative_numbers = true)]
    pub fuel_energy_density: Option<f64>,
    /// CO₂ emission factor [tCO₂/t fuel].
    #[arg(long, allow_negative_numbers = true)]
    pub co2_factor: Option<f64>,
    /// Annual fuel consumption [t].
    #[arg(long, allow_negative_numbers = true)]
    pub fuel_consumed_annual: Option<f64>,
    /// Deadweight tonnage.
    #[arg(long, allow_negative_numbers = true)]
    pub dwt: Option<f64>,
    /// Annual distance sailed [NM].
    #[arg(long, allow_negative_numbers = true)]
    pub distance_nm: Option<f64>,
    /// Fuel saved per day [t].
    #[arg(long, allow_negative_numbers = true)]
    pub fuel_saved_tpd: Option<f64>,
    /// Fuel price [USD/t].
    #[arg(long, allow_negative_numbers = true)]
    pub fuel_price: Option<f64>,
    /// Capital expenditure [USD].
    #[arg(long, allow_negative_numbers = true)]
    pub capex: Option<f64>,
    /// Operating expenditure per year [USD].
    #[arg(long, allow_negative_numbers = true)]
    pub opex: Option<f64>,
    /// Main engine power [kW].
    #[arg(long, allow_negative_numbers = true)]
    pub p_me: Option<f64>,
    /// Main engine SFOC [g/kWh].
    #[arg(long, allow_negative_numbers = true)]
    pub sfoc_me: Option<f64>,
    /// Fuel CO₂ conversion factor for EEXI [g/g].
    #[arg(long, allow_negative_numbers = true)]
    pub cf_eexi: Option<f64>,
    /// Reference speed [knots].
    #[arg(long, allow_negative_numbers = true)]
    pub v_ref: Option<f64>,
    /// Required IMO EEXI.
    #[arg(long, allow_negative_numbers = true)]
    pub eexi_ref: Option<f64>,
    /// Estimated fuel saving [%], 0 to 20.
    #[arg(long, allow_negative_numbers = true)]
    pub saving_percent: Option<f64>,
    /// Original fuel consumption [t/day].
    #[arg(long, allow_negative_numbers = true)]
    pub original_consumption_tpd: Option<f64>,
}

impl ParamOverrides {
    /// 지정된 항목만 덮어쓴 파라미터를 반환한다.
    pub fn apply(&self, base: PerformanceParams) -> PerformanceParams {
        let mut p = base;
        if let Some(v) = self.battery_energy_kwh {
            p.battery_energy_kwh = v;
        }
        if let Some(v) = self.sfoc_tonnes_per_kwh {
            p.sfoc_tonnes_per_kwh = v;
        }
        if let Some(v) = self.fuel_energy_density {
            p.fuel_energy_density = v;
        }
        if let Some(v) = self.co2_factor {
            p.co2_factor = v;
        }
        if let Some(v) = self.fuel_consumed_annual {
            p.fuel_consumed_annual = v;
        }
        if let Some(v) = self.dwt {
            p.dwt = v;
        }
        if let Some(v) = self.distance_nm {
            p.distance_nm = v;
        }
        if let Some(v) = self.fuel_saved_tpd {
            p.fuel_saved_tpd = v;
        }
        if let Some(v) = self.fuel_price {
            p.fuel_price = v;
        }
        if let Some(v) = self.capex {
            p.capex = v;
        }
        if let Some(v) = self.opex {
            p.opex = v;
        }
        if let Some(v) = self.p_me {
            p.p_me = v;
        }
        if let Some(v) = self.sfoc_me {
            p.sfoc_me = v;
        }
        if let Some(v) = self.cf_eexi {
            p.cf_eexi = v;
        }
        if let Some(v) = self.v_ref {
            p.v_ref = v;
        }
        if let Some(v) = self.eexi_ref {
            p.eexi_ref = v;
        }
        if let Some(v) = self.saving_percent {
            p.saving_percent = v;
        }
        if let Some(v) = self.original_consumption_tpd {
            p.original_consumption_tpd = v;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["maritime"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(cli.format, None);
    }

    #[test]
    fn overrides_apply_only_given_fields() {
        let cli =
            Cli::try_parse_from(["maritime", "roi", "--capex", "1000", "--opex=-5"]).unwrap();
        let Some(Command::Roi(ov)) = cli.command else {
            panic!("expected roi subcommand");
        };
        let p = ov.apply(PerformanceParams::default());
        assert_eq!(p.capex, 1000.0);
        assert_eq!(p.opex, -5.0);
        assert_eq!(p.fuel_price, 601.0);
    }

    #[test]
    fn global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["maritime", "cii", "--format", "toml"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Toml));
    }

    #[test]
    fn non_numeric_override_is_rejected() {
        assert!(Cli::try_parse_from(["maritime", "report", "--dwt", "heavy"]).is_err());
    }
}
