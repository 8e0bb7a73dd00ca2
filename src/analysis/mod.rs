// src/analysis/mod.rs
use eframe::egui::Color32;

use crate::api::AnalysisResult;

/// Three-tier classification of a success probability. The bar chart fill
/// and the table badges both go through this lookup so the thresholds can
/// never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Strong,
    Moderate,
    Weak,
}

impl Tier {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.75 {
            Tier::Strong
        } else if probability >= 0.5 {
            Tier::Moderate
        } else {
            Tier::Weak
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Tier::Strong => Color32::from_rgb(22, 163, 74),
            Tier::Moderate => Color32::from_rgb(202, 138, 4),
            Tier::Weak => Color32::from_rgb(220, 38, 38),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSegment {
    pub label: &'static str,
    pub value: u64,
    pub color: Color32,
}

/// The derived scalars and chart inputs the view needs per result. Cheap to
/// build, so it is recomputed each frame rather than cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_recovery: f64,
    pub avg_probability: f64,
    pub pie: [PieSegment; 2],
}

/// Fills in the scalars the service may omit. A zero or NaN from the
/// service is treated the same as an absent value, matching the endpoint's
/// behavior of omitting the fields for empty recommendation sets.
pub fn summarize(result: &AnalysisResult) -> Summary {
    let total_recovery = match result.total_estimated_recovery {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        _ => result
            .top_5_appeals
            .iter()
            .map(|appeal| appeal.predicted_recovery)
            .sum(),
    };

    let avg_probability = match result.avg_success_probability {
        Some(value) if value != 0.0 && !value.is_nan() => value,
        // An empty top-5 list has no meaningful mean; report zero rather
        // than letting NaN reach the UI.
        _ if result.top_5_appeals.is_empty() => 0.0,
        _ => {
            result
                .top_5_appeals
                .iter()
                .map(|appeal| appeal.success_probability)
                .sum::<f64>()
                / result.top_5_appeals.len() as f64
        }
    };

    // The invariant recommended <= total comes from the service and is not
    // re-validated, but the chart must never see a negative segment.
    let recommended = result.recommended_appeals;
    let declined = result.total_claims.saturating_sub(recommended);

    Summary {
        total_recovery,
        avg_probability,
        pie: [
            PieSegment {
                label: "Recommend Appeal",
                value: recommended,
                color: Tier::Strong.color(),
            },
            PieSegment {
                label: "Do Not Appeal",
                value: declined,
                color: Color32::from_rgb(229, 231, 235),
            },
        ],
    }
}
