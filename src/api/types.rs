// src/api/types.rs
use serde::Deserialize;

/// One claim the service recommends appealing, with its model outputs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClaimAppeal {
    pub claim_id: String,
    pub billed_amount: f64,
    /// Estimated chance (0..1) that an appeal on this claim succeeds.
    pub success_probability: f64,
    /// Estimated monetary gain from a successful appeal.
    pub predicted_recovery: f64,
}

/// The scoring service's answer for one dataset. The two trailing fields
/// are optional; when missing (or zero) they are derived client-side from
/// the top-5 list instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub total_claims: u64,
    pub recommended_appeals: u64,
    #[serde(default)]
    pub top_5_appeals: Vec<ClaimAppeal>,
    #[serde(default)]
    pub total_estimated_recovery: Option<f64>,
    #[serde(default)]
    pub avg_success_probability: Option<f64>,
}

/// Wire shape of the predict endpoint: a body carrying an `error` field is
/// an application-level rejection, anything else must parse as a result.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Failure { error: String },
    Success(AnalysisResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_result() {
        let body = r#"{
            "total_claims": 200,
            "recommended_appeals": 57,
            "total_estimated_recovery": 48210.75,
            "avg_success_probability": 0.6532,
            "top_5_appeals": [
                {"claim_id": "CLM-0042", "billed_amount": 1850.0,
                 "success_probability": 0.91, "predicted_recovery": 1683.5}
            ]
        }"#;

        match serde_json::from_str::<ApiResponse>(body).unwrap() {
            ApiResponse::Success(result) => {
                assert_eq!(result.total_claims, 200);
                assert_eq!(result.recommended_appeals, 57);
                assert_eq!(result.top_5_appeals.len(), 1);
                assert_eq!(result.top_5_appeals[0].claim_id, "CLM-0042");
                assert_eq!(result.total_estimated_recovery, Some(48210.75));
            }
            ApiResponse::Failure { error } => panic!("unexpected failure: {}", error),
        }
    }

    #[test]
    fn parses_result_without_derived_fields() {
        let body = r#"{"total_claims": 10, "recommended_appeals": 6, "top_5_appeals": []}"#;

        match serde_json::from_str::<ApiResponse>(body).unwrap() {
            ApiResponse::Success(result) => {
                assert_eq!(result.total_estimated_recovery, None);
                assert_eq!(result.avg_success_probability, None);
            }
            ApiResponse::Failure { error } => panic!("unexpected failure: {}", error),
        }
    }

    #[test]
    fn error_body_wins_over_result_shape() {
        let body = r#"{"error": "invalid file format"}"#;

        match serde_json::from_str::<ApiResponse>(body).unwrap() {
            ApiResponse::Failure { error } => assert_eq!(error, "invalid file format"),
            ApiResponse::Success(_) => panic!("error body parsed as a result"),
        }
    }
}
