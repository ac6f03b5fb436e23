// src/models/accessibility.rs
// DOCUMENTATION: Data structures of the UI accessibility analyzer
// PURPOSE: UI elements, proposed modifications and the API DTOs built from them

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

use super::DisabilityType;

/// UI components grouped by category (typography, layout, colors, ...)
pub type ComponentCatalog = BTreeMap<String, Vec<UiElement>>;

fn valid_importance(value: &str) -> Result<(), ValidationError> {
    match value {
        "high" | "medium" | "low" => Ok(()),
        _ => {
            let mut error = ValidationError::new("importance");
            error.message = Some(Cow::from("importance must be high, medium or low"));
            Err(error)
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// A UI element that can be modified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UiElement {
    #[validate(custom = "not_blank")]
    pub component_name: String,

    pub element_type: String,

    /// Current utility classes or value (e.g., "text-lg", "hsl(336 75% 45%)")
    pub current_value: String,

    pub description: String,

    #[validate(custom = "not_blank")]
    pub css_property: String,

    /// high, medium or low
    #[validate(custom = "valid_importance")]
    pub importance: String,
}

impl UiElement {
    pub fn new(
        component_name: &str,
        element_type: &str,
        current_value: &str,
        description: &str,
        css_property: &str,
        importance: &str,
    ) -> Self {
        Self {
            component_name: component_name.to_string(),
            element_type: element_type.to_string(),
            current_value: current_value.to_string(),
            description: description.to_string(),
            css_property: css_property.to_string(),
            importance: importance.to_string(),
        }
    }

    /// Identity used when merging catalog updates
    pub fn same_slot(&self, other: &UiElement) -> bool {
        self.component_name == other.component_name
            && self.element_type == other.element_type
            && self.css_property == other.css_property
    }
}

/// A proposed change to one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiModification {
    pub element: UiElement,
    pub new_value: String,
    pub reasoning: String,
    /// 1 (highest) to 5
    pub priority: u8,
}

/// Who produced a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    Model,
    Fallback,
}

/// Complete accessibility profile for a disability type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessibilityProfile {
    pub disability_type: DisabilityType,
    pub modifications: Vec<UiModification>,
    #[serde(default)]
    pub css_classes: Vec<String>,
    #[serde(default)]
    pub content_adaptations: Vec<String>,
    #[serde(default)]
    pub summary: String,
    pub source: ProfileSource,
}

/// Modification counts per area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCounts {
    pub typography: usize,
    pub color: usize,
    pub layout: usize,
}

impl AccessibilityProfile {
    /// Modifications with priority 1 or 2
    pub fn high_priority(&self) -> Vec<&UiModification> {
        self.modifications.iter().filter(|m| m.priority <= 2).collect()
    }

    pub fn change_counts(&self) -> ChangeCounts {
        let mut counts = ChangeCounts::default();
        for m in &self.modifications {
            match m.element.css_property.as_str() {
                "font-size" | "font-weight" | "line-height" => counts.typography += 1,
                "color" | "background-color" => counts.color += 1,
                "padding" | "margin" | "gap" | "display" => counts.layout += 1,
                _ => {}
            }
        }
        counts
    }
}

/// Component-level changes for the UI code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactModifications {
    #[serde(rename = "className_modifications")]
    pub class_name_modifications: BTreeMap<String, Vec<String>>,
    pub style_modifications: BTreeMap<String, BTreeMap<String, String>>,
    pub component_props: BTreeMap<String, Value>,
    pub content_changes: Vec<String>,
}

/// Request body for POST /analyze
#[derive(Debug, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    pub disability_type: String,
}

/// Response of POST /analyze
#[derive(Debug, Serialize, Deserialize)]
pub struct UiModificationResponse {
    pub disability_type: DisabilityType,
    pub css_modifications: String,
    pub react_modifications: ReactModifications,
    pub summary: String,
    pub profile: AccessibilityProfile,
}

/// Response of GET /css/{type}
#[derive(Debug, Serialize, Deserialize)]
pub struct CssResponse {
    pub disability_type: DisabilityType,
    pub css: String,
    pub css_class: String,
}

/// Response of GET /react/{type}
#[derive(Debug, Serialize, Deserialize)]
pub struct ReactResponse {
    pub disability_type: DisabilityType,
    pub modifications: ReactModifications,
}

/// Request body for POST /components/update
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateComponentsRequest {
    pub components: ComponentCatalog,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateComponentsResponse {
    pub message: String,
    pub updated_categories: Vec<String>,
    pub total_categories: usize,
}
