//! Main application state and UI

use eframe::egui;
use log::info;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use primer_design::{
    design_run, load_run_json, render_run, DesignParams, DesignRun, DesignSession, ExportError,
    PrimerCommands, SearchStrategy, SequenceError, DEFAULT_EXPORT_FILE,
};

/// Application state
pub struct PrimerDesignApp {
    session: DesignSession,

    // Input panel
    sequence_input: String,
    input_error: Option<String>,
    record_count: usize,

    // Design state
    is_designing: bool,
    results_rx: Option<Receiver<Result<DesignRun, SequenceError>>>,

    // Output panel
    output_text: String,
    pairs_found: usize,
    has_run: bool,

    // Save/Load/Export
    file_error: Option<String>,
    file_status: Option<String>,
}

impl Default for PrimerDesignApp {
    fn default() -> Self {
        Self {
            session: DesignSession::new(DesignParams::default()),
            sequence_input: String::new(),
            input_error: None,
            record_count: 0,
            is_designing: false,
            results_rx: None,
            output_text: String::new(),
            pairs_found: 0,
            has_run: false,
            file_error: None,
            file_status: None,
        }
    }
}

impl PrimerDesignApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn set_input(&mut self, input: String) {
        self.sequence_input = input;
        self.input_changed();
    }

    fn input_changed(&mut self) {
        self.record_count = count_records(&self.sequence_input);
        self.input_error = None;
    }

    fn start_design(&mut self) {
        if self.is_designing {
            return;
        }
        self.file_status = None;
        self.file_error = None;

        let input = self.sequence_input.clone();
        let params = self.session.params.clone();

        let (results_tx, results_rx) = channel();
        self.results_rx = Some(results_rx);
        self.is_designing = true;

        thread::spawn(move || {
            let _ = results_tx.send(design_run(&input, &params));
        });
    }

    fn check_design_progress(&mut self) {
        let Some(rx) = &self.results_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.is_designing = false;
                self.results_rx = None;
                self.show_outcome(outcome);
            }
            Err(TryRecvError::Disconnected) => {
                self.is_designing = false;
                self.results_rx = None;
                self.input_error = Some("Primer design stopped unexpectedly".to_string());
            }
            Err(TryRecvError::Empty) => {}
        }
    }

    fn show_outcome(&mut self, outcome: Result<DesignRun, SequenceError>) {
        match self.session.accept(outcome) {
            Ok(run) => {
                self.output_text = render_run(run);
                self.pairs_found = run.pairs_found();
                self.has_run = true;
                self.input_error = None;
            }
            Err(e) => {
                self.output_text.clear();
                self.pairs_found = 0;
                self.has_run = false;
                self.input_error = Some(e.to_string());
            }
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.results_rx = None;
        self.is_designing = false;
        self.sequence_input.clear();
        self.record_count = 0;
        self.output_text.clear();
        self.pairs_found = 0;
        self.has_run = false;
        self.input_error = None;
        self.file_error = None;
        self.file_status = None;
    }

    fn export_results(&mut self) {
        if self.session.current().is_none() {
            self.file_error = Some(ExportError::NothingToExport.to_string());
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name(DEFAULT_EXPORT_FILE)
            .save_file()
        {
            match self.session.export(&path) {
                Ok(()) => {
                    self.file_error = None;
                    self.file_status = Some(format!("Results saved to '{}'", path.display()));
                }
                Err(e) => {
                    self.file_error = Some(format!("Failed to export file: {}", e));
                }
            }
        }
    }

    fn save_results(&mut self) {
        if self.session.current().is_none() {
            self.file_error = Some(ExportError::NothingToExport.to_string());
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("primer_results.json")
            .save_file()
        {
            match self.session.save_json(&path) {
                Ok(()) => {
                    self.file_error = None;
                    self.file_status = Some(format!("Results saved to '{}'", path.display()));
                }
                Err(e) => self.file_error = Some(e.to_string()),
            }
        }
    }

    fn load_results(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            match load_run_json(&path) {
                Ok(run) => {
                    self.output_text = render_run(&run);
                    self.pairs_found = run.pairs_found();
                    self.has_run = true;
                    self.input_error = None;
                    self.file_error = None;
                    self.file_status = Some(format!("Loaded '{}'", path.display()));
                    self.session.restore(run);
                }
                Err(e) => {
                    self.file_error = Some(e.to_string());
                }
            }
        }
    }

    fn load_sequence_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("FASTA", &["fasta", "fa", "fna", "fas", "txt"])
            .pick_file()
        {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    info!("Loaded sequence input from {}", path.display());
                    self.set_input(content);
                    self.file_error = None;
                }
                Err(e) => {
                    self.file_error = Some(format!("Failed to read file: {}", e));
                }
            }
        }
    }
}

impl eframe::App for PrimerDesignApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_designing {
            self.check_design_progress();
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load Sequence...").clicked() {
                        self.load_sequence_file();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Load Results...").clicked() {
                        self.load_results();
                        ui.close_menu();
                    }
                    if ui.button("Save Results...").clicked() {
                        self.save_results();
                        ui.close_menu();
                    }
                    if ui.button("Export Text...").clicked() {
                        self.export_results();
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(ref error) = self.file_error {
                    ui.colored_label(egui::Color32::RED, error);
                } else if let Some(ref status) = self.file_status {
                    ui.label(status);
                } else if self.is_designing {
                    ui.spinner();
                    ui.label(format!("Designing primers for {} record(s)...", self.record_count));
                } else {
                    ui.label(format!(
                        "{} | {} record(s) in input",
                        self.session.params.strategy.description(),
                        self.record_count
                    ));
                }
            });
        });

        egui::SidePanel::right("params")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                self.show_params_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_main_panel(ui);
        });
    }
}

impl PrimerDesignApp {
    fn show_main_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Primer Design Tool");
        ui.separator();

        let available_height = ui.available_height();
        let input_height = (available_height / 3.0).max(80.0);

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Input DNA Sequence");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Load Example").clicked() {
                        self.set_input(EXAMPLE_SEQUENCE.to_string());
                    }
                });
            });

            egui::ScrollArea::vertical()
                .id_salt("sequence_scroll")
                .max_height(input_height)
                .show(ui, |ui| {
                    let response = ui.add(
                        egui::TextEdit::multiline(&mut self.sequence_input)
                            .font(egui::TextStyle::Monospace)
                            .hint_text("ATGC... or FASTA")
                            .desired_width(f32::INFINITY)
                            .desired_rows(4),
                    );
                    if response.changed() {
                        self.input_changed();
                    }
                });

            if let Some(ref error) = self.input_error {
                ui.colored_label(egui::Color32::RED, error);
            }
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    !self.is_designing,
                    egui::Button::new("Design Primers").fill(egui::Color32::from_rgb(76, 175, 80)),
                )
                .clicked()
            {
                self.start_design();
            }
            if self.is_designing {
                ui.spinner();
            }
            if ui
                .add(egui::Button::new("Reset").fill(egui::Color32::from_rgb(244, 67, 54)))
                .clicked()
            {
                self.reset();
            }
            if ui
                .add_enabled(
                    self.has_run,
                    egui::Button::new("Export Results").fill(egui::Color32::from_rgb(33, 150, 243)),
                )
                .clicked()
            {
                self.export_results();
            }
        });

        ui.add_space(5.0);

        ui.group(|ui| {
            ui.label("Suggested Primer Pair");
            if self.has_run {
                if self.pairs_found > 0 {
                    ui.colored_label(
                        egui::Color32::from_rgb(100, 200, 100),
                        format!("{} pair(s) found", self.pairs_found),
                    );
                } else {
                    ui.colored_label(egui::Color32::RED, "No pair found");
                }
            }

            egui::ScrollArea::vertical()
                .id_salt("output_scroll")
                .show(ui, |ui| {
                    let mut text = self.output_text.as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .desired_rows(10),
                    );
                });
        });
    }

    fn show_params_panel(&mut self, ui: &mut egui::Ui) {
        let params = &mut self.session.params;

        ui.heading("Parameters");
        ui.separator();

        ui.group(|ui| {
            ui.label("Search Strategy");
            ui.radio_value(
                &mut params.strategy,
                SearchStrategy::VariableLength,
                "Variable length (best pair)",
            );
            ui.radio_value(
                &mut params.strategy,
                SearchStrategy::FixedLength,
                "Fixed length (sequence ends)",
            );
        });

        ui.add_space(5.0);

        ui.group(|ui| {
            ui.label("Primer Length");
            match params.strategy {
                SearchStrategy::VariableLength => {
                    ui.horizontal(|ui| {
                        ui.label("Min:");
                        ui.add(egui::DragValue::new(&mut params.min_primer_length).range(1..=100));
                        ui.label("Max:");
                        ui.add(egui::DragValue::new(&mut params.max_primer_length).range(1..=100));
                    });
                    if params.min_primer_length > params.max_primer_length {
                        params.max_primer_length = params.min_primer_length;
                    }
                }
                SearchStrategy::FixedLength => {
                    ui.horizontal(|ui| {
                        ui.label("Length:");
                        ui.add(egui::DragValue::new(&mut params.fixed_primer_length).range(1..=100));
                    });
                    ui.label(format!(
                        "Template needs at least {} bp",
                        params.minimum_sequence_length()
                    ));
                }
            }
        });

        ui.add_space(5.0);

        let filters_enabled = params.strategy == SearchStrategy::VariableLength;
        ui.add_enabled_ui(filters_enabled, |ui| {
            ui.group(|ui| {
                ui.label("GC Content (%)");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::DragValue::new(&mut params.min_gc_percent)
                            .range(0.0..=100.0)
                            .speed(0.5),
                    );
                    ui.label("to");
                    ui.add(
                        egui::DragValue::new(&mut params.max_gc_percent)
                            .range(0.0..=100.0)
                            .speed(0.5),
                    );
                });
                if params.min_gc_percent > params.max_gc_percent {
                    params.max_gc_percent = params.min_gc_percent;
                }

                ui.label("Melting Temperature (°C)");
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut params.min_tm).range(0.0..=200.0));
                    ui.label("to");
                    ui.add(egui::DragValue::new(&mut params.max_tm).range(0.0..=200.0));
                });
                if params.min_tm > params.max_tm {
                    params.max_tm = params.min_tm;
                }

                ui.horizontal(|ui| {
                    ui.label("Target GC:");
                    ui.add(
                        egui::DragValue::new(&mut params.target_gc_percent)
                            .range(0.0..=100.0)
                            .speed(0.5)
                            .suffix("%"),
                    );
                });
            });
        });

        ui.add_space(10.0);

        if ui.button("Restore Defaults").clicked() {
            *params = DesignParams {
                strategy: params.strategy,
                ..DesignParams::default()
            };
        }
    }
}

/// Bare input is one record; FASTA input has one per header line
fn count_records(input: &str) -> usize {
    let headers = input
        .lines()
        .filter(|l| l.trim_start().starts_with('>'))
        .count();
    if headers > 0 {
        headers
    } else if input.trim().is_empty() {
        0
    } else {
        1
    }
}

const EXAMPLE_SEQUENCE: &str = r#">Example amplicon
ATGCGTACGTTAGCCATGCAATGCGTACCGATGCAAGTCTAGGCTAGCATCGATCGGATCCTAGCTAGGCTA
"#;
