#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 T–s 선도 뷰어 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, Text};
use rankine_cycle::{
    app::{self, RunOutput},
    config,
    diagram::TsDiagram,
    units::{from_kelvin, PressureUnit, TemperatureUnit},
};
use std::{env, path::PathBuf};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // CLI 옵션 처리: --config path 또는 --config=path
    let mut config_path: Option<PathBuf> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--config=") {
            config_path = Some(PathBuf::from(val));
        } else if (a == "--config" || a == "-c") && i + 1 < args.len() {
            config_path = Some(PathBuf::from(&args[i + 1]));
            i += 1;
        }
        i += 1;
    }

    let app_cfg = match config::load(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config error: {e}; using defaults");
            config::Config::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Ideal Rankine Cycle",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

struct GuiApp {
    config: config::Config,
    temperature_unit: TemperatureUnit,
    outcome: Result<(RunOutput, TsDiagram), String>,
    dirty: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        Self {
            config,
            temperature_unit: TemperatureUnit::Kelvin,
            outcome: Err(String::new()),
            dirty: true,
        }
    }

    fn recompute(&mut self) {
        self.outcome =
            app::run_with_diagram(&self.config).map_err(|e| app::error_chain(&e).join(": "));
        self.dirty = false;
    }

    fn inputs_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Operating pressures");
        let unit = self.config.cycle.pressure_unit;
        let mut changed = false;
        egui::Grid::new("inputs").num_columns(2).show(ui, |ui| {
            ui.label("Condenser");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.config.cycle.condenser_pressure)
                        .speed(0.1)
                        .suffix(format!(" {}", unit.label())),
                )
                .changed();
            ui.end_row();
            ui.label("Boiler");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.config.cycle.boiler_pressure)
                        .speed(10.0)
                        .suffix(format!(" {}", unit.label())),
                )
                .changed();
            ui.end_row();
        });

        let mut selected = unit;
        egui::ComboBox::from_label("Pressure unit")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for u in [
                    PressureUnit::KiloPascal,
                    PressureUnit::MegaPascal,
                    PressureUnit::Bar,
                    PressureUnit::Psi,
                    PressureUnit::Atm,
                    PressureUnit::Pascal,
                ] {
                    ui.selectable_value(&mut selected, u, u.label());
                }
            });
        if selected != unit {
            self.config.cycle = self.config.cycle.clone().with_unit(selected);
        }

        egui::ComboBox::from_label("Temperature axis")
            .selected_text(self.temperature_unit.label())
            .show_ui(ui, |ui| {
                for u in [
                    TemperatureUnit::Kelvin,
                    TemperatureUnit::Celsius,
                    TemperatureUnit::Fahrenheit,
                    TemperatureUnit::Rankine,
                ] {
                    ui.selectable_value(&mut self.temperature_unit, u, u.label());
                }
            });

        if changed {
            self.dirty = true;
        }

        ui.separator();
        ui.heading("Results");
        match &self.outcome {
            Ok((output, _)) => {
                for line in &output.report.lines {
                    ui.monospace(line.to_string());
                }
                ui.add_space(6.0);
                ui.label(format!(
                    "Net work: {:.1} kJ/kg, back work ratio: {:.4}",
                    output.result.quantities.net_work(),
                    output.result.quantities.back_work_ratio()
                ));
            }
            Err(msg) if !msg.is_empty() => {
                ui.colored_label(egui::Color32::RED, msg);
            }
            Err(_) => {}
        }
    }

    fn diagram(&self, ui: &mut egui::Ui) {
        let Ok((_, diagram)) = &self.outcome else {
            ui.centered_and_justified(|ui| ui.label("No diagram"));
            return;
        };
        let unit = self.temperature_unit;
        let to_points = |pts: &[[f64; 2]]| -> PlotPoints {
            pts.iter()
                .map(|[s, t]| [*s, from_kelvin(*t, unit)])
                .collect::<Vec<_>>()
                .into()
        };

        ui.heading(diagram.title);
        Plot::new("ts_diagram")
            .legend(Legend::default())
            .x_axis_label("Entropy (kJ/kg·K)")
            .y_axis_label(format!("Temperature ({})", unit.label()))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(to_points(&diagram.dome.liquid))
                        .color(egui::Color32::BLUE)
                        .style(LineStyle::dashed_loose())
                        .name("Saturated liquid"),
                );
                plot_ui.line(
                    Line::new(to_points(&diagram.dome.vapor))
                        .color(egui::Color32::RED)
                        .style(LineStyle::dashed_loose())
                        .name("Saturated vapor"),
                );
                plot_ui.line(
                    Line::new(to_points(&diagram.path))
                        .color(egui::Color32::BLACK)
                        .width(2.0)
                        .name("Cycle"),
                );
                plot_ui.points(
                    Points::new(to_points(&diagram.path))
                        .radius(4.0)
                        .color(egui::Color32::BLACK),
                );
                for note in &diagram.annotations {
                    let [s, t] = note.position;
                    plot_ui.text(
                        Text::new(PlotPoint::new(s + 0.1, from_kelvin(t, unit)), note.text.clone())
                            .anchor(egui::Align2::LEFT_CENTER),
                    );
                }
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.dirty {
            self.recompute();
        }
        egui::SidePanel::left("inputs_panel")
            .resizable(true)
            .min_width(320.0)
            .show(ctx, |ui| self.inputs_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.diagram(ui));
    }
}
