// src/models/disability.rs
// DOCUMENTATION: Disability types supported by the platform
// PURPOSE: Shared key for content variants, preview tabs and accessibility profiles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accessibility need a content variant or UI profile is adapted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabilityType {
    WheelchairUser,
    Dyslexia,
    CognitiveImpairment,
    AnxietyTravelFear,
    LowVision,
}

impl DisabilityType {
    /// Every supported type, in display order
    pub fn all() -> [DisabilityType; 5] {
        [
            DisabilityType::WheelchairUser,
            DisabilityType::Dyslexia,
            DisabilityType::CognitiveImpairment,
            DisabilityType::AnxietyTravelFear,
            DisabilityType::LowVision,
        ]
    }

    /// Wire value (e.g., "wheelchair_user")
    pub fn as_str(&self) -> &'static str {
        match self {
            DisabilityType::WheelchairUser => "wheelchair_user",
            DisabilityType::Dyslexia => "dyslexia",
            DisabilityType::CognitiveImpairment => "cognitive_impairment",
            DisabilityType::AnxietyTravelFear => "anxiety_travel_fear",
            DisabilityType::LowVision => "low_vision",
        }
    }

    /// Human label (e.g., "Wheelchair User")
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// CSS class scoping a persona stylesheet (e.g., "persona-low-vision")
    pub fn css_class(&self) -> String {
        format!("persona-{}", self.as_str().replace('_', "-"))
    }

    pub fn info(&self) -> DisabilityTypeInfo {
        DisabilityTypeInfo {
            value: *self,
            name: self.display_name(),
        }
    }
}

impl fmt::Display for DisabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisabilityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisabilityType::all()
            .into_iter()
            .find(|dt| dt.as_str() == s.trim())
            .ok_or_else(|| {
                let valid: Vec<&str> = DisabilityType::all().iter().map(|dt| dt.as_str()).collect();
                format!(
                    "Invalid disability type: {}. Valid types: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

/// Entry of GET /disability-types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisabilityTypeInfo {
    pub value: DisabilityType,
    pub name: String,
}
