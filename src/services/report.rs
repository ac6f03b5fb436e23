// src/services/report.rs
// DOCUMENTATION: Analysis reports on disk
// PURPOSE: Persist a profile with its generated CSS and component modifications

use crate::errors::CmsError;
use crate::models::{AccessibilityProfile, DisabilityType, ReactModifications};
use crate::services::UiAccessibilityAnalyzer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Content of `{type}_analysis.json`
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub disability_type: DisabilityType,
    pub css_class: String,
    pub profile: AccessibilityProfile,
    pub css: String,
    pub react_modifications: ReactModifications,
}

/// Files written for one report
#[derive(Debug)]
pub struct SavedReport {
    pub json_path: PathBuf,
    pub css_path: PathBuf,
}

impl AnalysisReport {
    pub fn new(profile: AccessibilityProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            disability_type: profile.disability_type,
            css_class: profile.disability_type.css_class(),
            css: UiAccessibilityAnalyzer::generate_css(&profile),
            react_modifications: UiAccessibilityAnalyzer::generate_react(&profile),
            profile,
        }
    }
}

/// Write `{type}_analysis.json` and `{type}_styles.css` into `dir`, creating it if needed
pub fn save_analysis_report(profile: &AccessibilityProfile, dir: &Path) -> Result<SavedReport, CmsError> {
    fs::create_dir_all(dir)?;

    let report = AnalysisReport::new(profile.clone());
    let name = profile.disability_type.as_str();

    let json_path = dir.join(format!("{}_analysis.json", name));
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| CmsError::InternalError(format!("Failed to serialize report: {}", e)))?;
    fs::write(&json_path, json)?;

    let css_path = dir.join(format!("{}_styles.css", name));
    fs::write(&css_path, format!("{}\n", report.css))?;

    log::info!(
        "Saved {} report to {} and {}",
        name,
        json_path.display(),
        css_path.display()
    );

    Ok(SavedReport { json_path, css_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::component_catalog::fallback_profile;

    #[test]
    fn test_save_report_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("reports");
        let profile = fallback_profile(DisabilityType::LowVision);

        let saved = save_analysis_report(&profile, &target).unwrap();
        assert!(saved.json_path.ends_with("low_vision_analysis.json"));

        let css = fs::read_to_string(&saved.css_path).unwrap();
        assert!(css.starts_with(".persona-low-vision {"));
        assert!(css.contains("font-size: text-xl;"));

        let json = fs::read_to_string(&saved.json_path).unwrap();
        let report: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.disability_type, DisabilityType::LowVision);
        assert_eq!(report.profile.modifications.len(), 2);
        assert_eq!(report.react_modifications.style_modifications["primary"]["color"], "hsl(50 100% 60%)");
    }
}
