// src/models/preview.rs
// DOCUMENTATION: Tabbed preview of a content record
// PURPOSE: Original text plus one tab per generated disability variant

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::DisabilityType;
use crate::errors::CmsError;

/// Key of the tab showing the record's own text
pub const ORIGINAL_TAB: &str = "original";

/// One tab header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewTab {
    pub key: String,
    pub label: String,
    /// None for the original tab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disability_type: Option<DisabilityType>,
}

impl PreviewTab {
    pub fn original() -> Self {
        Self {
            key: ORIGINAL_TAB.to_string(),
            label: "Original".to_string(),
            disability_type: None,
        }
    }

    pub fn variant(dt: DisabilityType) -> Self {
        Self {
            key: dt.as_str().to_string(),
            label: dt.display_name(),
            disability_type: Some(dt),
        }
    }
}

/// Tab bar state
/// DOCUMENTATION: The original tab is always first and selected by default
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewTabs {
    pub tabs: Vec<PreviewTab>,
    pub selected: String,
}

impl PreviewTabs {
    /// Build tabs for the disability types that have a generated variant
    pub fn for_variants<'a, I>(available: I) -> Self
    where
        I: IntoIterator<Item = &'a DisabilityType>,
    {
        let available: Vec<DisabilityType> = available.into_iter().copied().collect();

        let mut tabs = vec![PreviewTab::original()];
        tabs.extend(
            DisabilityType::all()
                .into_iter()
                .filter(|dt| available.contains(dt))
                .map(PreviewTab::variant),
        );

        Self {
            tabs,
            selected: ORIGINAL_TAB.to_string(),
        }
    }

    /// Switch to the tab with `key`
    pub fn select(&mut self, key: &str) -> Result<&PreviewTab, CmsError> {
        let key = key.trim();

        if let Some(index) = self.tabs.iter().position(|t| t.key == key) {
            self.selected = self.tabs[index].key.clone();
            return Ok(&self.tabs[index]);
        }

        match key.parse::<DisabilityType>() {
            Ok(dt) => Err(CmsError::NotFound(format!(
                "No {} variant has been generated yet",
                dt.as_str()
            ))),
            Err(_) => Err(CmsError::InvalidInput(format!("Unknown preview tab: {}", key))),
        }
    }

    pub fn selected_tab(&self) -> Option<&PreviewTab> {
        self.tabs.iter().find(|t| t.key == self.selected)
    }
}

/// Titled block of lines in the preview body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSection {
    pub heading: String,
    pub lines: Vec<String>,
}

impl PreviewSection {
    /// Blank lines are dropped so an all-blank section counts as empty
    pub fn new(heading: &str, lines: Vec<String>) -> Self {
        Self {
            heading: heading.to_string(),
            lines: lines
                .into_iter()
                .filter(|l| !l.trim().is_empty())
                .collect(),
        }
    }

    /// "key: value" lines from a mapping field
    pub fn from_map(heading: &str, map: &BTreeMap<String, String>) -> Self {
        Self::new(
            heading,
            map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Rendered body of the selected tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewPanel {
    pub tab: PreviewTab,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub sections: Vec<PreviewSection>,
}

impl PreviewPanel {
    /// Plain-text rendering, used by terminals and logs
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} [{}]\n", self.title, self.tab.label));
        if !self.subtitle.is_empty() {
            out.push_str(&format!("{}\n", self.subtitle));
        }
        if !self.body.is_empty() {
            out.push('\n');
            out.push_str(&self.body);
            out.push('\n');
        }
        for section in &self.sections {
            out.push_str(&format!("\n{}\n", section.heading));
            for line in &section.lines {
                out.push_str(&format!("  - {}\n", line));
            }
        }
        out
    }
}

/// Response DTO for GET /content/{kind}/{id}/preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPreview {
    pub tabs: PreviewTabs,
    pub panel: PreviewPanel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_follow_display_order() {
        let tabs = PreviewTabs::for_variants(&[
            DisabilityType::LowVision,
            DisabilityType::WheelchairUser,
        ]);
        let keys: Vec<&str> = tabs.tabs.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["original", "wheelchair_user", "low_vision"]);
        assert_eq!(tabs.selected, ORIGINAL_TAB);
    }

    #[test]
    fn test_select_tab() {
        let mut tabs = PreviewTabs::for_variants(&[DisabilityType::Dyslexia]);

        let tab = tabs.select("dyslexia").unwrap();
        assert_eq!(tab.label, "Dyslexia");
        assert_eq!(tabs.selected, "dyslexia");

        assert!(matches!(tabs.select("low_vision"), Err(CmsError::NotFound(_))));
        assert!(matches!(tabs.select("sepia"), Err(CmsError::InvalidInput(_))));
        // a failed selection keeps the previous tab
        assert_eq!(tabs.selected_tab().unwrap().key, "dyslexia");
    }

    #[test]
    fn test_section_drops_blank_lines() {
        let section = PreviewSection::new("Amenities", vec!["  ".into(), String::new()]);
        assert!(section.is_empty());
    }

    #[test]
    fn test_render_text() {
        let panel = PreviewPanel {
            tab: PreviewTab::original(),
            title: "Harbour View".into(),
            subtitle: "Lisbon".into(),
            body: "Rooms over the river".into(),
            sections: vec![PreviewSection::new("Amenities", vec!["Lift".into()])],
        };
        let text = panel.render_text();
        assert!(text.starts_with("Harbour View [Original]\nLisbon\n"));
        assert!(text.contains("\nAmenities\n  - Lift\n"));
    }
}
