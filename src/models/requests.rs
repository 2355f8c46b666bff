use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Gender;

/// Request to estimate calories burned for one workout
///
/// Field bounds mirror the ranges enforced by the page's input widgets;
/// defaults are the widgets' initial positions.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[serde(default)]
    pub gender: Gender,
    #[validate(range(min = 10, max = 100))]
    #[serde(default = "default_age")]
    pub age: u8,
    #[validate(range(min = 100, max = 250))]
    #[serde(alias = "height_cm", rename = "heightCm")]
    #[serde(default = "default_height_cm")]
    pub height_cm: u16,
    #[validate(range(min = 30, max = 150))]
    #[serde(alias = "weight_kg", rename = "weightKg")]
    #[serde(default = "default_weight_kg")]
    pub weight_kg: u16,
    #[validate(range(min = 1, max = 120))]
    #[serde(alias = "duration_min", rename = "durationMin")]
    #[serde(default = "default_duration_min")]
    pub duration_min: u16,
    #[validate(range(min = 60, max = 200))]
    #[serde(alias = "heart_rate", rename = "heartRate")]
    #[serde(default = "default_heart_rate")]
    pub heart_rate: u16,
    #[validate(range(min = 35.0, max = 42.0))]
    #[serde(alias = "body_temp", rename = "bodyTemp")]
    #[serde(default = "default_body_temp")]
    pub body_temp: f64,
}

fn default_age() -> u8 {
    25
}

fn default_height_cm() -> u16 {
    170
}

fn default_weight_kg() -> u16 {
    70
}

fn default_duration_min() -> u16 {
    30
}

fn default_heart_rate() -> u16 {
    90
}

fn default_body_temp() -> f64 {
    37.0
}

impl Default for PredictRequest {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            age: default_age(),
            height_cm: default_height_cm(),
            weight_kg: default_weight_kg(),
            duration_min: default_duration_min(),
            heart_rate: default_heart_rate(),
            body_temp: default_body_temp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget_positions() {
        let req = PredictRequest::default();
        assert_eq!(req.age, 25);
        assert_eq!(req.height_cm, 170);
        assert_eq!(req.weight_kg, 70);
        assert_eq!(req.duration_min, 30);
        assert_eq!(req.heart_rate, 90);
        assert_eq!(req.body_temp, 37.0);
        assert_eq!(req.gender, Gender::Female);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_camel_case_payload() {
        let req: PredictRequest = serde_json::from_str(
            r#"{"gender":"male","age":40,"heightCm":182,"weightKg":85,"durationMin":45,"heartRate":130,"bodyTemp":38.5}"#,
        )
        .unwrap();
        assert_eq!(req.gender, Gender::Male);
        assert_eq!(req.height_cm, 182);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_age_rejected() {
        let req = PredictRequest {
            age: 101,
            ..PredictRequest::default()
        };
        assert!(req.validate().is_err());
    }
}
