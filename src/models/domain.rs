use serde::{Deserialize, Serialize};

/// Gender as the model was trained on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "Female")]
    Female,
    #[serde(alias = "Male")]
    Male,
}

impl Gender {
    /// Numeric encoding used in the feature vector: Female = 0, Male = 1
    pub fn as_feature(&self) -> f64 {
        match self {
            Gender::Female => 0.0,
            Gender::Male => 1.0,
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Female
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Female => write!(f, "female"),
            Gender::Male => write!(f, "male"),
        }
    }
}
