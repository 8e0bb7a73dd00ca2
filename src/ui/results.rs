// src/ui/results.rs
use eframe::egui;

use crate::analysis::{self, Summary, Tier};
use crate::api::AnalysisResult;

/// Renders everything below the upload section for a finished analysis:
/// summary cards, the two charts, and the top-5 table.
pub fn show_results_view(ui: &mut egui::Ui, result: &AnalysisResult) {
    let summary = analysis::summarize(result);

    draw_summary_cards(ui, result, &summary);
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.heading("Top 5 — Success Probability");
            ui.add_space(4.0);
            draw_probability_chart(ui, result);
        });
        columns[1].group(|ui| {
            ui.heading("Appeal Recommendation Breakdown");
            ui.add_space(4.0);
            draw_breakdown_chart(ui, &summary);
        });
    });

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.heading("Top 5 Recommended Appeals");
        ui.add_space(8.0);
        draw_appeals_table(ui, result);
    });
}

fn draw_summary_cards(ui: &mut egui::Ui, result: &AnalysisResult, summary: &Summary) {
    ui.columns(4, |columns| {
        card(
            &mut columns[0],
            "Total Claims",
            result.total_claims.to_string(),
            ui_text_color(),
        );
        card(
            &mut columns[1],
            "Recommended Appeals",
            result.recommended_appeals.to_string(),
            egui::Color32::from_rgb(22, 163, 74),
        );
        card(
            &mut columns[2],
            "Avg Success Rate",
            format!("{:.1}%", summary.avg_probability * 100.0),
            egui::Color32::from_rgb(37, 99, 235),
        );
        card(
            &mut columns[3],
            "Total Est. Recovery",
            format!("${:.0}", summary.total_recovery),
            egui::Color32::from_rgb(147, 51, 234),
        );
    });
}

fn ui_text_color() -> egui::Color32 {
    egui::Color32::from_rgb(55, 65, 81)
}

fn card(ui: &mut egui::Ui, title: &str, value: String, color: egui::Color32) {
    ui.group(|ui| {
        ui.set_min_height(64.0);
        ui.vertical(|ui| {
            ui.weak(title);
            ui.label(egui::RichText::new(value).size(26.0).strong().color(color));
        });
    });
}

fn draw_probability_chart(ui: &mut egui::Ui, result: &AnalysisResult) {
    let bars: Vec<egui_plot::Bar> = result
        .top_5_appeals
        .iter()
        .enumerate()
        .map(|(idx, appeal)| {
            egui_plot::Bar::new(idx as f64, appeal.success_probability)
                .name(&appeal.claim_id)
                .width(0.6)
                .fill(Tier::from_probability(appeal.success_probability).color())
        })
        .collect();

    egui_plot::Plot::new("top5_probability")
        .height(240.0)
        .include_y(0.0)
        .include_y(1.0)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(egui_plot::BarChart::new(bars));
        });

    // Claim ids in bar order, tinted to match their bars.
    ui.horizontal_wrapped(|ui| {
        for appeal in &result.top_5_appeals {
            ui.colored_label(
                Tier::from_probability(appeal.success_probability).color(),
                &appeal.claim_id,
            );
        }
    });
}

fn draw_breakdown_chart(ui: &mut egui::Ui, summary: &Summary) {
    let desired = egui::vec2(ui.available_width().min(320.0), 220.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = rect.height().min(rect.width()) * 0.42;
    let inner = radius * 0.62;

    let total: u64 = summary.pie.iter().map(|segment| segment.value).sum();
    if total == 0 {
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "No claims",
            egui::FontId::proportional(14.0),
            ui.visuals().text_color(),
        );
        return;
    }

    // Donut rendered as a fan of small convex quads per segment, starting
    // at twelve o'clock and sweeping clockwise.
    let mut start = -std::f64::consts::FRAC_PI_2;
    for segment in &summary.pie {
        let sweep = segment.value as f64 / total as f64 * std::f64::consts::TAU;
        let steps = ((sweep / 0.05).ceil() as usize).max(1);
        for step in 0..steps {
            let a0 = start + sweep * step as f64 / steps as f64;
            let a1 = start + sweep * (step + 1) as f64 / steps as f64;
            let quad = vec![
                arc_point(center, radius, a0),
                arc_point(center, radius, a1),
                arc_point(center, inner, a1),
                arc_point(center, inner, a0),
            ];
            painter.add(egui::Shape::convex_polygon(
                quad,
                segment.color,
                egui::Stroke::NONE,
            ));
        }
        start += sweep;
    }

    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        for segment in &summary.pie {
            ui.colored_label(segment.color, "■");
            ui.label(format!("{}: {}", segment.label, segment.value));
            ui.add_space(8.0);
        }
    });
}

fn arc_point(center: egui::Pos2, radius: f32, angle: f64) -> egui::Pos2 {
    center + egui::vec2(radius * angle.cos() as f32, radius * angle.sin() as f32)
}

fn draw_appeals_table(ui: &mut egui::Ui, result: &AnalysisResult) {
    egui::Grid::new("appeals_table")
        .num_columns(4)
        .striped(true)
        .spacing([32.0, 8.0])
        .show(ui, |ui| {
            ui.strong("Claim ID");
            ui.strong("Billed Amount");
            ui.strong("Success Probability");
            ui.strong("Predicted Recovery");
            ui.end_row();

            for appeal in &result.top_5_appeals {
                let tier = Tier::from_probability(appeal.success_probability);
                ui.label(&appeal.claim_id);
                ui.label(format!("${:.2}", appeal.billed_amount));
                ui.colored_label(
                    tier.color(),
                    format!("{:.1}%", appeal.success_probability * 100.0),
                );
                ui.label(format!("${:.2}", appeal.predicted_recovery));
                ui.end_row();
            }
        });
}
