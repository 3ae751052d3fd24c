//! Servicio de sesiones VR
//!
//! Aprobación por nota y generación de feedback a partir de las métricas
//! de desempeño del simulador.

use serde_json::Value;

use crate::models::vr_session::VR_PASSING_SCORE;

/// Una sesión aprueba con nota >= 70
pub fn is_passing_score(score: Option<i32>) -> bool {
    score.unwrap_or(0) >= VR_PASSING_SCORE
}

/// Genera el texto de feedback a partir de las métricas de la sesión
pub fn generate_feedback(metrics: &Value, incidents: Option<&Value>) -> String {
    let mut feedback: Vec<&str> = Vec::new();

    if let Some(reaction_time) = metrics.get("reaction_time").and_then(Value::as_f64) {
        if reaction_time > 2.0 {
            feedback.push("Work on improving reaction time to hazards.");
        }
    }

    if let Some(lane_discipline) = metrics.get("lane_discipline").and_then(Value::as_f64) {
        if lane_discipline < 80.0 {
            feedback.push("Focus on maintaining proper lane position.");
        }
    }

    if let Some(speed_control) = metrics.get("speed_control").and_then(Value::as_f64) {
        if speed_control < 80.0 {
            feedback.push("Practice maintaining consistent and appropriate speed.");
        }
    }

    if let Some(incidents) = incidents.and_then(Value::as_array) {
        if !incidents.is_empty() {
            feedback.push("Review traffic rules to avoid violations.");
        }
    }

    if feedback.is_empty() {
        feedback.push("Excellent performance! Ready for more advanced scenarios.");
    }

    feedback.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_passing_score_threshold() {
        assert!(is_passing_score(Some(70)));
        assert!(is_passing_score(Some(95)));
        assert!(!is_passing_score(Some(69)));
        assert!(!is_passing_score(None));
    }

    #[test]
    fn test_feedback_flags_weak_metrics() {
        let metrics = json!({
            "reaction_time": 2.5,
            "lane_discipline": 60,
            "speed_control": 90,
        });

        let feedback = generate_feedback(&metrics, None);
        assert!(feedback.contains("reaction time"));
        assert!(feedback.contains("lane position"));
        assert!(!feedback.contains("appropriate speed"));
    }

    #[test]
    fn test_feedback_mentions_incidents() {
        let metrics = json!({});
        let incidents = json!([{ "type": "red_light" }]);

        let feedback = generate_feedback(&metrics, Some(&incidents));
        assert!(feedback.contains("traffic rules"));
    }

    #[test]
    fn test_clean_run_gets_positive_feedback() {
        let metrics = json!({
            "reaction_time": 1.2,
            "lane_discipline": 95,
            "speed_control": 92,
        });

        let feedback = generate_feedback(&metrics, Some(&json!([])));
        assert_eq!(
            feedback,
            "Excellent performance! Ready for more advanced scenarios."
        );
    }
}
