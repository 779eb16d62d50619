use maritime_performance_toolbox::{
    config::{self, OutputFormat},
    params::PerformanceParams,
    report::{evaluate, Section},
};

#[test]
fn default_report_renders_reference_values() {
    let report = evaluate(&PerformanceParams::default());
    let text = report.render_text();

    for section in Section::ALL {
        assert!(text.contains(section.title()), "missing {}", section.title());
    }
    assert!(text.contains("Fuel Saved: 0.26 tonnes/day"));
    assert!(text.contains("Energy Saved: 11272.80 MJ/day"));
    assert!(text.contains("CO₂ Saved: 0.84 tonnes/day"));
    assert!(text.contains("Efficiency Ratio: 2.61 MJ/MJ"));
    assert!(text.contains("Attained CII: 0.016052 gCO₂/DWT·nm"));
    assert!(text.contains("Annual Savings: $1,875,120.00"));
    assert!(text.contains("ROI: 232.89%"));
    assert!(text.contains("Payback Period: 0.43 years"));
    assert!(text.contains("Attained EEXI: 10.68 gCO₂/ton·nm"));
    assert!(text.contains("IMO Compliant: Yes"));
    assert!(text.contains("Daily Fuel Savings: 10.40 tonnes"));
    assert!(text.contains("Annual Fuel Savings: 3120.00 tonnes"));
    assert!(text.contains("Estimated Annual Cost Savings: $1,875,120.00"));
}

#[test]
fn unprofitable_retrofit_renders_infinite_payback() {
    let params = PerformanceParams {
        opex: 5_000_000.0,
        ..PerformanceParams::default()
    };
    let report = evaluate(&params);
    assert!(report.roi.payback_years.is_infinite());
    let text = report.render_section(Section::Roi);
    assert!(text.contains("Payback Period: inf years"), "{text}");
    assert!(text.contains("ROI: -390.61%"), "{text}");
}

#[test]
fn section_order_is_stable() {
    let report = evaluate(&PerformanceParams::default());
    let text = report.render_text();
    let positions: Vec<usize> = Section::ALL
        .iter()
        .map(|s| text.find(s.title()).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn config_file_is_created_then_reloaded() {
    let path = std::env::temp_dir().join(format!(
        "maritime_report_cfg_{}.toml",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let (created, origin) = config::load_or_create(&path).unwrap();
    assert_eq!(origin, config::ConfigOrigin::Created);
    assert!(path.exists());
    assert_eq!(created, config::Config::default());

    let mut changed = created.clone();
    changed.defaults.dwt = 80_000.0;
    changed.output = OutputFormat::Toml;
    changed.save_to(&path).unwrap();

    let (reloaded, origin) = config::load_or_create(&path).unwrap();
    assert_eq!(origin, config::ConfigOrigin::Loaded);
    assert_eq!(reloaded.defaults.dwt, 80_000.0);
    assert_eq!(reloaded.output, OutputFormat::Toml);
    let _ = std::fs::remove_file(path);
}
