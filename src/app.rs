// src/app.rs
use eframe::egui;
use tracing::error;

use crate::api::{AnalysisClient, AnalysisOutcome, AnalysisRequest};
use crate::export;
use crate::settings::Settings;
use crate::state::AppState;
use crate::ui;

pub struct ClaimSmartApp {
    state: AppState,
    client: AnalysisClient,
}

impl ClaimSmartApp {
    pub fn new(settings: Settings) -> Self {
        let client = AnalysisClient::new(settings.api_url.clone());
        Self {
            state: AppState::new(settings),
            client,
        }
    }

    fn dispatch(&mut self, request: AnalysisRequest, ctx: &egui::Context) {
        match self.client.submit(request, ctx) {
            Ok(()) => self.state.start_loading(),
            // The triggers are disabled while loading, so this only fires
            // if a second submission slips through anyway.
            Err(e) => error!("submission rejected: {}", e),
        }
    }

    fn drain_outcome(&mut self) {
        if let Some(outcome) = self.client.poll() {
            match outcome {
                AnalysisOutcome::Success(result) => self.state.succeed(result),
                AnalysisOutcome::Logical(message) => self.state.fail_logical(message),
                AnalysisOutcome::Transport(message) => self.state.fail_transport(message),
            }
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("ClaimSmart");
                ui.weak("AI-Powered Insurance Claim Appeal Optimizer");
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Export only appears once a result exists.
                if self.state.result.is_some() && ui.button("Export Results CSV").clicked() {
                    self.export_results();
                }
            });
        });
    }

    fn export_results(&mut self) {
        if let Some(result) = &self.state.result {
            if let Err(e) = export::save_with_dialog(result) {
                error!("export failed: {:#}", e);
                self.state.fail_local(format!("Export failed: {}", e));
            }
        }
    }
}

impl eframe::App for ClaimSmartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_outcome();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            self.show_header(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(request) = ui::upload::show_upload_view(ui, &mut self.state) {
                    self.dispatch(request, ctx);
                }

                ui.add_space(12.0);

                if let Some(message) = self.state.error.clone() {
                    // The banner takes the place of the results section; the
                    // last good result stays in state but is not rendered.
                    ui.group(|ui| {
                        ui.colored_label(egui::Color32::from_rgb(220, 38, 38), message);
                    });
                } else if self.state.loading {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Analyzing claims...");
                    });
                } else if let Some(result) = &self.state.result {
                    ui::results::show_results_view(ui, result);
                }
            });
        });
    }
}
