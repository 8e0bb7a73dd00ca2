// src/ui/upload.rs
use eframe::egui;
use rfd::FileDialog;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::api::AnalysisRequest;
use crate::state::AppState;

/// Renders the "Get Started" section: the sample-data button and the file
/// drop zone. Returns the request the user triggered this frame, if any.
pub fn show_upload_view(ui: &mut egui::Ui, state: &mut AppState) -> Option<AnalysisRequest> {
    let mut request = None;

    ui.group(|ui| {
        ui.heading("Get Started");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let label = if state.loading { "Analyzing..." } else { "Use Sample Data" };
            if ui.add_enabled(!state.loading, egui::Button::new(label)).clicked() {
                request = Some(AnalysisRequest::Sample);
            }

            ui.add_space(16.0);

            if let Some(file_request) = show_drop_zone(ui, state) {
                request = Some(file_request);
            }
        });
    });

    request
}

fn show_drop_zone(ui: &mut egui::Ui, state: &mut AppState) -> Option<AnalysisRequest> {
    // Active while any file hovers the window, inactive again as soon as
    // the hover ends or the drop lands.
    state.drop_active = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

    let (fill, stroke) = if state.drop_active {
        (
            ui.visuals().selection.bg_fill.linear_multiply(0.2),
            egui::Stroke::new(2.0, ui.visuals().selection.stroke.color),
        )
    } else {
        (
            ui.visuals().extreme_bg_color,
            egui::Stroke::new(1.0, ui.visuals().widgets.inactive.bg_stroke.color),
        )
    };

    let response = egui::Frame::group(ui.style())
        .fill(fill)
        .stroke(stroke)
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(360.0, 72.0));
            ui.vertical_centered(|ui| {
                let hint = match &state.last_file_name {
                    Some(name) => format!("Uploaded: {}", name),
                    None => "Drag & drop a CSV file here, or click to browse".to_string(),
                };
                ui.label(hint);
                ui.weak("Supports .csv files with claims data");
            });
        })
        .response;

    let mut request = None;

    // Clicking the zone opens the picker; the .csv filter is advisory only
    // and file contents are forwarded unvalidated.
    if response.interact(egui::Sense::click()).clicked() && !state.loading {
        let picked = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_title("Select Claims File")
            .pick_file();
        if let Some(path) = picked {
            request = read_claims_file(&path, state);
        }
    }

    // Only the first dropped file counts; any extras are silently ignored.
    let dropped = ui.ctx().input(|i| i.raw.dropped_files.first().cloned());
    if let Some(file) = dropped {
        if !state.loading {
            request = dropped_file_request(&file, state);
        }
    }

    request
}

fn read_claims_file(path: &Path, state: &mut AppState) -> Option<AnalysisRequest> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "claims.csv".to_string());

    match fs::read(path) {
        Ok(bytes) => {
            // Recorded before dispatch so "Uploaded: <name>" shows while
            // the request is still pending.
            state.last_file_name = Some(name.clone());
            Some(AnalysisRequest::File { name, bytes })
        }
        Err(e) => {
            warn!("failed to read {}: {}", path.display(), e);
            state.fail_local(format!("Could not read {}: {}", path.display(), e));
            None
        }
    }
}

fn dropped_file_request(file: &egui::DroppedFile, state: &mut AppState) -> Option<AnalysisRequest> {
    if let Some(path) = &file.path {
        return read_claims_file(path, state);
    }

    // Some platforms hand over bytes instead of a path.
    if let Some(bytes) = &file.bytes {
        let name = if file.name.is_empty() {
            "claims.csv".to_string()
        } else {
            file.name.clone()
        };
        state.last_file_name = Some(name.clone());
        return Some(AnalysisRequest::File {
            name,
            bytes: bytes.to_vec(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::io::Write;

    /// Runs one headless frame with the given raw input and returns the
    /// request the upload view produced, if any.
    fn run_upload_frame(
        ctx: &egui::Context,
        input: egui::RawInput,
        state: &mut AppState,
    ) -> Option<AnalysisRequest> {
        let mut request = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                request = show_upload_view(ui, state);
            });
        });
        request
    }

    #[test]
    fn hover_without_drop_resets_active_state_and_issues_no_request() {
        let ctx = egui::Context::default();
        let mut state = AppState::new(Settings::default());

        let mut hovering = egui::RawInput::default();
        hovering.hovered_files.push(egui::HoveredFile::default());

        let request = run_upload_frame(&ctx, hovering, &mut state);
        assert!(state.drop_active);
        assert!(request.is_none());

        // The drag left the window without dropping; the next frame sees
        // no hovered files and the zone goes back to inactive.
        let request = run_upload_frame(&ctx, egui::RawInput::default(), &mut state);
        assert!(!state.drop_active);
        assert!(request.is_none());
        assert!(state.last_file_name.is_none());
    }

    #[test]
    fn picked_file_becomes_request_and_records_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claims_q3.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "claim_id,billed_amount").unwrap();

        let mut state = AppState::new(Settings::default());
        let request = read_claims_file(&path, &mut state);

        match request {
            Some(AnalysisRequest::File { name, bytes }) => {
                assert_eq!(name, "claims_q3.csv");
                assert!(!bytes.is_empty());
            }
            other => panic!("expected file request, got {:?}", other),
        }
        assert_eq!(state.last_file_name.as_deref(), Some("claims_q3.csv"));
        assert!(state.error.is_none());
    }

    #[test]
    fn unreadable_file_sets_error_and_issues_no_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let mut state = AppState::new(Settings::default());
        let request = read_claims_file(&path, &mut state);

        assert!(request.is_none());
        assert!(state.error.is_some());
        assert!(state.last_file_name.is_none());
    }

    #[test]
    fn dropped_bytes_without_path_still_upload() {
        let file = egui::DroppedFile {
            name: "dropped.csv".to_string(),
            bytes: Some(b"claim_id\nC1".to_vec().into()),
            ..Default::default()
        };

        let mut state = AppState::new(Settings::default());
        let request = dropped_file_request(&file, &mut state);

        match request {
            Some(AnalysisRequest::File { name, bytes }) => {
                assert_eq!(name, "dropped.csv");
                assert_eq!(bytes, b"claim_id\nC1");
            }
            other => panic!("expected file request, got {:?}", other),
        }
        assert_eq!(state.last_file_name.as_deref(), Some("dropped.csv"));
    }
}
