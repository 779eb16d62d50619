#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::path::PathBuf;

use eframe::{egui, App, Frame};
use maritime_performance_toolbox::{
    config, logging,
    params::{PerformanceParams, PARAM_GROUPS, SAVING_PERCENT_RANGE},
    report::{self, PerformanceReport, Section},
};

fn main() -> Result<(), eframe::Error> {
    let loaded = config::load_or_default();
    let app_cfg = match &loaded {
        Ok((cfg, _)) => cfg.clone(),
        Err(_) => config::Config::default(),
    };
    logging::init(Some(app_cfg.log_level.as_str()));
    match loaded {
        Ok((_, config::ConfigOrigin::Created)) => tracing::info!("default config created"),
        Ok((_, config::ConfigOrigin::Loaded)) => tracing::debug!("config loaded"),
        Err(e) => tracing::warn!(error = %e, "config unavailable, using built-in defaults"),
    }
    tracing::info!("starting desktop GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(1000.0, 720.0))
            .with_min_inner_size(egui::vec2(720.0, 480.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Battery Efficiency & IMO Performance Calculator",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    params: PerformanceParams,
    show_formula_modal: bool,
    save_status: Option<String>,
    /// 마지막으로 계산한 입력과 결과. 입력이 같으면 다시 계산하지 않는다.
    last_report: Option<(PerformanceParams, PerformanceReport)>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        Self {
            params: config.defaults,
            config,
            config_path: PathBuf::from(config::DEFAULT_CONFIG_PATH),
            show_formula_modal: false,
            save_status: None,
            last_report: None,
        }
    }

    fn current_report(&mut self) -> PerformanceReport {
        match self.last_report {
            Some((params, report)) if params == self.params => report,
            _ => {
                let report = report::evaluate(&self.params);
                self.last_report = Some((self.params, report));
                report
            }
        }
    }

    fn reset_defaults(&mut self) {
        self.params = PerformanceParams::default();
        self.save_status = None;
    }

    fn save_as_defaults(&mut self) {
        self.config.defaults = self.params;
        self.save_status = Some(match self.config.save_to(&self.config_path) {
            Ok(()) => "Saved.".to_string(),
            Err(e) => {
                tracing::error!(error = %e, "failed to save config");
                format!("Save error: {e}")
            }
        });
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        for (group, fields) in PARAM_GROUPS {
            egui::CollapsingHeader::new(*group)
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new(format!("inputs_{group}"))
                        .num_columns(2)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            for field in fields.iter() {
                                let Some(value) = self.params.field_mut(field.name) else {
                                    continue;
                                };
                                ui.label(field.label);
                                if field.name == "saving_percent" {
                                    ui.add(
                                        egui::Slider::new(value, SAVING_PERCENT_RANGE)
                                            .step_by(1.0)
                                            .suffix(" %"),
                                    );
                                } else {
                                    let speed = drag_speed(*value);
                                    ui.add(
                                        egui::DragValue::new(value).speed(speed).max_decimals(6),
                                    );
                                }
                                ui.end_row();
                            }
                        });
                });
        }
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Reset defaults").clicked() {
                self.reset_defaults();
            }
            if ui.button("Save as defaults").clicked() {
                self.save_as_defaults();
            }
        });
        if let Some(msg) = &self.save_status {
            ui.label(msg);
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        // 화면은 매 프레임 그리지만 계산은 입력이 바뀐 경우에만 한다.
        let result = self.current_report();
        for section in Section::ALL {
            ui.heading(section.title());
            egui::Grid::new(format!("results_{section:?}"))
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (label, value) in result.lines(section) {
                        ui.label(label);
                        if label == "IMO Compliant" {
                            let color = if result.eexi.is_compliant {
                                egui::Color32::from_rgb(40, 160, 70)
                            } else {
                                egui::Color32::from_rgb(200, 60, 50)
                            };
                            ui.colored_label(color, value);
                        } else {
                            ui.monospace(value);
                        }
                        ui.end_row();
                    }
                });
            ui.add_space(10.0);
        }
    }
}

/// 값의 크기에 맞춰 드래그 감도를 정한다.
fn drag_speed(value: f64) -> f64 {
    let magnitude = value.abs();
    if magnitude > 0.0 {
        magnitude * 0.005
    } else {
        0.01
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Battery Efficiency & IMO Performance Calculator");
                ui.separator();
                if ui.button("Formula reference").clicked() {
                    self.show_formula_modal = true;
                }
            });
        });

        if self.show_formula_modal {
            egui::Window::new("Formula reference")
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.heading("Battery efficiency");
                    ui.label("fuel = E_bat[kWh] × SFOC; energy = fuel × LHV; CO₂ = fuel × CF");
                    ui.label("ratio = energy / (E_bat × 3.6 MJ/kWh), 0 if E_bat ≤ 0");
                    ui.separator();
                    ui.heading("CII");
                    ui.label("CII = FC × 1000 × CF / (DWT × distance), 0 if DWT × distance ≤ 0");
                    ui.separator();
                    ui.heading("ROI");
                    ui.label("annual = saved[t/day] × price × 300 days; net = annual − OPEX");
                    ui.label("ROI = net / CAPEX (0 if CAPEX ≤ 0); payback = CAPEX / net (∞ if net ≤ 0)");
                    ui.separator();
                    ui.heading("EEXI");
                    ui.label("EEXI = P_ME × SFOC_ME × CF / (V_ref × DWT), 0 if V_ref × DWT ≤ 0");
                    ui.label("compliant when EEXI ≤ reference");
                    ui.separator();
                    ui.heading("Savings estimate");
                    ui.label("daily = original × %/100; annual = daily × 300; cost = annual × price");
                });
        }

        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(280.0)
            .default_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.ui_inputs(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.ui_results(ui));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn new_app_starts_from_config_defaults() {
        let mut cfg = config::Config::default();
        cfg.defaults.capex = 5.0;
        let app = GuiApp::new(cfg);
        assert_eq!(app.params.capex, 5.0);
    }

    #[test]
    fn reset_restores_built_in_defaults() {
        let mut app = GuiApp::new(config::Config::default());
        app.params.dwt = 1.0;
        app.reset_defaults();
        assert_eq!(app.params, PerformanceParams::default());
    }

    #[test]
    fn save_writes_current_params() {
        let path = std::env::temp_dir().join(format!("maritime_gui_{}.toml", std::process::id()));
        let mut app = GuiApp::new(config::Config::default());
        app.config_path = path.clone();
        app.params.opex = 1234.0;
        app.save_as_defaults();
        assert_eq!(app.save_status.as_deref(), Some("Saved."));
        let (loaded, origin) = config::load_or_create(&path).unwrap();
        assert_eq!(origin, config::ConfigOrigin::Loaded);
        assert_eq!(loaded.defaults.opex, 1234.0);
        let _ = std::fs::remove_file(path);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn redraws_with_unchanged_inputs_log_once() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();

        let mut app = GuiApp::new(config::Config::default());
        app.params.capex = 0.0;
        tracing::subscriber::with_default(subscriber, || {
            for _ in 0..60 {
                app.current_report();
            }
        });
        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        // capex 0 가드 경고는 첫 계산에서 한 번만 나온다.
        assert_eq!(text.lines().filter(|l| l.contains("WARN")).count(), 1, "{text}");
        assert_eq!(text.lines().filter(|l| l.contains("INFO")).count(), 0, "{text}");
    }

    #[test]
    fn changed_inputs_are_recomputed() {
        let mut app = GuiApp::new(config::Config::default());
        let before = app.current_report();
        app.params.capex = 1_600_000.0;
        let after = app.current_report();
        assert!((after.roi.roi - before.roi.roi / 2.0).abs() < 1e-12);
        assert_eq!(app.last_report.map(|(p, _)| p.capex), Some(1_600_000.0));
    }

    #[test]
    fn drag_speed_never_zero() {
        assert!(drag_speed(0.0) > 0.0);
        assert!((drag_speed(1000.0) - 5.0).abs() < 1e-12);
    }
}
