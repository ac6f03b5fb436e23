// src/services/preview.rs
// DOCUMENTATION: Tabbed preview rendering
// PURPOSE: Turn any content record into tabs plus the panel of the selected tab

use crate::errors::CmsError;
use crate::models::{
    ContentPreview, ContentRecord, PreviewPanel, PreviewSection, PreviewTab, PreviewTabs,
};

/// Tabs for a record: original first, then every generated variant
pub fn tabs_for<T: ContentRecord>(record: &T) -> PreviewTabs {
    PreviewTabs::for_variants(record.variants().keys())
}

/// Render the panel for one tab
/// DOCUMENTATION: Variant tabs override title/description and add a Highlights section;
/// sections whose field is empty are left out
pub fn render_panel<T: ContentRecord>(record: &T, tab: &PreviewTab) -> PreviewPanel {
    let variant = tab
        .disability_type
        .and_then(|dt| record.variants().get(&dt));

    let title = variant
        .and_then(|v| v.title.as_deref())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| record.name())
        .to_string();

    let body = match variant {
        Some(v) if !v.description.trim().is_empty() => v.description.clone(),
        _ => record.description().to_string(),
    };

    let mut sections = Vec::new();
    if let Some(v) = variant {
        sections.push(PreviewSection::new("Highlights", v.key_points.clone()));
    }
    sections.extend(record.detail_sections());
    sections.push(accessibility_section(record));
    sections.push(images_section(record));
    sections.retain(|s| !s.is_empty());

    PreviewPanel {
        tab: tab.clone(),
        title,
        subtitle: record.location().to_string(),
        body,
        sections,
    }
}

/// Build the preview with `tab` selected (original when None)
pub fn build_preview<T: ContentRecord>(record: &T, tab: Option<&str>) -> Result<ContentPreview, CmsError> {
    let mut tabs = tabs_for(record);

    let selected = match tab.map(str::trim).filter(|t| !t.is_empty()) {
        Some(key) => tabs.select(key)?.clone(),
        None => PreviewTab::original(),
    };

    let panel = render_panel(record, &selected);
    Ok(ContentPreview { tabs, panel })
}

fn accessibility_section<T: ContentRecord>(record: &T) -> PreviewSection {
    PreviewSection::new("Accessibility features", record.accessibility_features().to_vec())
}

fn images_section<T: ContentRecord>(record: &T) -> PreviewSection {
    let lines = match record.images().len() {
        0 => Vec::new(),
        count => vec![format!("{} image(s)", count)],
    };
    PreviewSection::new("Images", lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentVariant, DisabilityType, Hotel, ORIGINAL_TAB};

    fn hotel() -> Hotel {
        let mut hotel = Hotel {
            id: Some("h-1".into()),
            name: "Harbour View".into(),
            location: "Lisbon".into(),
            description: "Rooms over the river".into(),
            amenities: vec!["Lift".into()],
            ..Hotel::default()
        };
        hotel.variants.insert(
            DisabilityType::Dyslexia,
            ContentVariant {
                title: None,
                description: "A hotel by the river.".into(),
                key_points: vec!["By the river".into()],
            },
        );
        hotel
    }

    #[test]
    fn test_original_tab() {
        let preview = build_preview(&hotel(), None).unwrap();
        assert_eq!(preview.tabs.selected, ORIGINAL_TAB);
        assert_eq!(preview.tabs.tabs.len(), 2);
        assert_eq!(preview.panel.body, "Rooms over the river");

        let headings: Vec<&str> = preview.panel.sections.iter().map(|s| s.heading.as_str()).collect();
        // no prices, rating, features or images on this record
        assert_eq!(headings, vec!["Amenities"]);
    }

    #[test]
    fn test_variant_tab_overrides_text() {
        let preview = build_preview(&hotel(), Some("dyslexia")).unwrap();
        assert_eq!(preview.tabs.selected, "dyslexia");
        assert_eq!(preview.panel.title, "Harbour View");
        assert_eq!(preview.panel.body, "A hotel by the river.");
        assert_eq!(preview.panel.sections[0].heading, "Highlights");
    }

    #[test]
    fn test_missing_variant_tab() {
        let result = build_preview(&hotel(), Some("low_vision"));
        assert!(matches!(result, Err(CmsError::NotFound(_))));
    }

    #[test]
    fn test_features_and_images_render_when_present() {
        let mut record = hotel();
        record.accessibility_features = vec!["Step-free entrance".into()];
        record.images = vec!["a.jpg".into(), "b.jpg".into()];

        let panel = build_preview(&record, None).unwrap().panel;
        let images = panel.sections.iter().find(|s| s.heading == "Images").unwrap();
        assert_eq!(images.lines, vec!["2 image(s)"]);
        assert!(panel.sections.iter().any(|s| s.heading == "Accessibility features"));
    }
}
