//! Rule-based shipment safety scoring.
//!
//! A deterministic penalty table plus a small random jitter. The assessment
//! itself is pure so the table can be tested without the jitter.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub cargo_type: Option<String>,
    pub route: Option<String>,
    pub additional_data: Option<String>,
    pub vehicle_type: Option<String>,
    pub eta_hours: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub cargo_type: String,
    pub route: String,
    pub vehicle_type: String,
    pub eta_hours: Value,
    pub safety_score: i32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub analysis: String,
}

#[derive(Debug)]
pub struct MissingAnalysisFields;

impl IntoResponse for MissingAnalysisFields {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "cargoType and route are required for analysis",
            })),
        )
            .into_response()
    }
}

/// Deterministic part of the score, before jitter
#[derive(Debug, PartialEq)]
pub(crate) struct Assessment {
    pub score: i32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

/// POST /api/ai/analyze
pub async fn analyze(
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, MissingAnalysisFields> {
    let cargo_type = req
        .cargo_type
        .filter(|s| !s.trim().is_empty())
        .ok_or(MissingAnalysisFields)?;
    let route = req
        .route
        .filter(|s| !s.trim().is_empty())
        .ok_or(MissingAnalysisFields)?;

    let assessment = assess_shipment(
        &cargo_type,
        req.vehicle_type.as_deref(),
        &route,
        req.additional_data.as_deref(),
        req.eta_hours,
    );

    let safety_score = jitter_score(assessment.score, 5);

    let analysis = format!(
        "Predicted shipment safety score is {}. Issues: {}. Suggestions: {}",
        safety_score,
        assessment.issues.join(", "),
        assessment.suggestions.join("; ")
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        cargo_type,
        route,
        vehicle_type: req
            .vehicle_type
            .unwrap_or_else(|| "Not specified".to_string()),
        eta_hours: req
            .eta_hours
            .map(|h| json!(h))
            .unwrap_or_else(|| json!("Not specified")),
        safety_score,
        issues: assessment.issues,
        suggestions: assessment.suggestions,
        analysis,
    }))
}

pub(crate) fn assess_shipment(
    cargo_type: &str,
    vehicle_type: Option<&str>,
    route: &str,
    additional_data: Option<&str>,
    eta_hours: Option<f64>,
) -> Assessment {
    let mut score = 100;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    match cargo_type.to_lowercase().as_str() {
        "fragile" => {
            score -= 20;
            issues.push("Fragile cargo: handle with extra care".to_string());
            suggestions.push("Add padding and avoid sudden stops".to_string());
        }
        "perishable" => {
            score -= 15;
            issues.push("Perishable cargo: time-sensitive delivery".to_string());
            suggestions.push("Ensure refrigeration and monitor transit time".to_string());
        }
        "hazardous" => {
            score -= 30;
            issues.push("Hazardous cargo: high-risk shipment".to_string());
            suggestions.push("Follow safety regulations and emergency protocols".to_string());
        }
        _ => {
            issues.push("Standard cargo: normal handling".to_string());
            suggestions.push("No special handling needed".to_string());
        }
    }

    if let Some(vehicle) = vehicle_type {
        match vehicle.to_lowercase().as_str() {
            "truck" => {
                score -= 5;
                issues.push("Truck transport: moderate road risk".to_string());
                suggestions.push("Check vehicle condition and road conditions".to_string());
            }
            "ship" => {
                score -= 10;
                issues.push("Ship transport: possible weather and sea risk".to_string());
                suggestions.push("Monitor sea conditions and anchor safely".to_string());
            }
            "plane" => {
                score -= 5;
                issues.push("Air transport: moderate altitude & weather risk".to_string());
                suggestions.push("Ensure cargo is secured properly for flight".to_string());
            }
            "train" => {
                score -= 7;
                issues.push("Train transport: possible delays and track issues".to_string());
                suggestions.push("Monitor track status and train schedules".to_string());
            }
            _ => {
                suggestions.push("Unknown vehicle type: monitor transport carefully".to_string());
            }
        }
    }

    let stops = route.split("->").count().saturating_sub(1);
    if stops > 2 {
        score -= 10;
        issues.push("Long route with multiple stops: higher risk of delays".to_string());
        suggestions.push("Plan route carefully and monitor shipment during stops".to_string());
    }

    if let Some(weather) = additional_data {
        let weather = weather.to_lowercase();
        if weather.contains("rain") || weather.contains("storm") {
            score -= 5;
            issues.push("Weather risk: rain or storm expected".to_string());
            suggestions.push("Use weatherproof packaging and allow extra transit time".to_string());
        }
        if weather.contains("snow") {
            score -= 7;
            issues.push("Weather risk: snow may delay transport".to_string());
            suggestions.push("Plan alternate routes or delay if possible".to_string());
        }
    }

    if let Some(eta) = eta_hours {
        let penalty = urgency_penalty(eta);
        if penalty > 0 {
            score -= penalty;
            issues.push(format!("High urgency: ETA is {} hours", eta));
            suggestions.push("Speed up handling but maintain safety measures".to_string());
        }
    }

    Assessment {
        score,
        issues,
        suggestions,
    }
}

pub(crate) fn urgency_penalty(eta_hours: f64) -> i32 {
    if eta_hours <= 2.0 {
        15
    } else if eta_hours <= 6.0 {
        10
    } else if eta_hours <= 12.0 {
        5
    } else {
        0
    }
}

/// Shift the score by up to +/- variance, clamped to [0, 100]
pub(crate) fn jitter_score(score: i32, variance: i32) -> i32 {
    let change = rand::thread_rng().gen_range(-variance..=variance);
    (score + change).clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_cargo_keeps_full_score() {
        let assessment = assess_shipment("general", None, "Chennai->Delhi", None, None);
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.issues, vec!["Standard cargo: normal handling"]);
    }

    #[test]
    fn test_worst_case_penalties_stack() {
        // hazardous -30, truck -5, 3 stops -10, storm -5, eta 1h -15
        let assessment = assess_shipment(
            "hazardous",
            Some("truck"),
            "A->B->C->D",
            Some("storm expected"),
            Some(1.0),
        );
        assert_eq!(assessment.score, 100 - 30 - 5 - 10 - 5 - 15);
        assert_eq!(assessment.issues.len(), 5);
        assert_eq!(assessment.suggestions.len(), 5);
    }

    #[test]
    fn test_snow_and_rain_penalties_are_independent() {
        let assessment = assess_shipment("general", None, "A->B", Some("rain then snow"), None);
        assert_eq!(assessment.score, 100 - 5 - 7);
    }

    #[test]
    fn test_unknown_vehicle_adds_suggestion_without_penalty() {
        let assessment = assess_shipment("general", Some("hovercraft"), "A->B", None, None);
        assert_eq!(assessment.score, 100);
        assert!(assessment
            .suggestions
            .iter()
            .any(|s| s.contains("Unknown vehicle type")));
    }

    #[test]
    fn test_urgency_penalty_boundaries() {
        assert_eq!(urgency_penalty(2.0), 15);
        assert_eq!(urgency_penalty(2.1), 10);
        assert_eq!(urgency_penalty(6.0), 10);
        assert_eq!(urgency_penalty(12.0), 5);
        assert_eq!(urgency_penalty(12.1), 0);
    }

    #[test]
    fn test_jitter_clamps_to_score_range() {
        for _ in 0..200 {
            let low = jitter_score(2, 5);
            assert!((0..=7).contains(&low));

            let high = jitter_score(99, 5);
            assert!((94..=100).contains(&high));
        }
    }
}
