// src/services/component_catalog.rs
// DOCUMENTATION: Built-in UI component catalog and fallback profiles
// PURPOSE: What the analyzer describes to the model, and what it serves when the model is unavailable

use crate::models::{
    AccessibilityProfile, ComponentCatalog, DisabilityType, ProfileSource, UiElement,
    UiModification,
};

/// UI elements found in the CMS frontend, by category
pub fn default_catalog() -> ComponentCatalog {
    let mut catalog = ComponentCatalog::new();

    catalog.insert(
        "typography".to_string(),
        vec![
            UiElement::new("h1", "heading", "text-4xl md:text-6xl font-bold", "Main page headings", "font-size", "high"),
            UiElement::new("h2", "heading", "text-4xl font-bold", "Section headings", "font-size", "high"),
            UiElement::new("h3", "heading", "text-2xl font-bold", "Card titles", "font-size", "medium"),
            UiElement::new("body", "text", "text-lg", "Body text", "font-size", "high"),
            UiElement::new("button", "text", "font-medium", "Button text", "font-weight", "medium"),
            UiElement::new("link", "text", "hover:underline", "Navigation links", "text-decoration", "medium"),
            UiElement::new("description", "text", "text-muted-foreground", "Descriptive text", "color", "medium"),
        ],
    );

    catalog.insert(
        "layout".to_string(),
        vec![
            UiElement::new("card", "container", "p-6", "Card padding", "padding", "medium"),
            UiElement::new("section", "container", "py-16", "Section spacing", "padding", "medium"),
            UiElement::new("grid", "layout", "grid md:grid-cols-3 gap-8", "Grid layout", "display", "high"),
            UiElement::new("navigation", "container", "space-x-8", "Navigation spacing", "gap", "medium"),
        ],
    );

    catalog.insert(
        "colors".to_string(),
        vec![
            UiElement::new("primary", "color", "hsl(336 75% 45%)", "Primary brand color", "color", "high"),
            UiElement::new("background", "color", "hsl(0 0% 100%)", "Background color", "background-color", "high"),
            UiElement::new("foreground", "color", "hsl(210 11% 15%)", "Text color", "color", "high"),
            UiElement::new("muted", "color", "hsl(210 11% 64%)", "Muted text color", "color", "medium"),
            UiElement::new("border", "color", "hsl(210 12% 90%)", "Border color", "border-color", "low"),
        ],
    );

    catalog.insert(
        "interactive".to_string(),
        vec![
            UiElement::new("button", "interactive", "px-8 py-3", "Button padding", "padding", "high"),
            UiElement::new("button", "interactive", "hover:bg-white/10", "Button hover state", "background-color", "medium"),
            UiElement::new("link", "interactive", "hover:text-primary", "Link hover state", "color", "medium"),
            UiElement::new("card", "interactive", "hover:shadow-alpine", "Card hover effect", "box-shadow", "low"),
        ],
    );

    catalog.insert(
        "spacing".to_string(),
        vec![
            UiElement::new("container", "spacing", "px-4", "Container padding", "padding", "medium"),
            UiElement::new("section", "spacing", "mb-8", "Section margin bottom", "margin", "medium"),
            UiElement::new("element", "spacing", "gap-2", "Element gap", "gap", "low"),
        ],
    );

    catalog
}

/// Who the profile is for and what they need, used in the analysis prompt
pub fn disability_brief(dt: DisabilityType) -> (&'static str, &'static str) {
    match dt {
        DisabilityType::WheelchairUser => (
            "Users with mobility impairments who use wheelchairs",
            "Clear navigation, accessible button sizes, good contrast, logical information hierarchy",
        ),
        DisabilityType::Dyslexia => (
            "Users with reading difficulties",
            "Dyslexia-friendly fonts, increased line spacing, high contrast, simple layouts, reduced cognitive load",
        ),
        DisabilityType::CognitiveImpairment => (
            "Users with cognitive disabilities or learning difficulties",
            "Simple layouts, clear navigation, reduced distractions, consistent design patterns, step-by-step processes",
        ),
        DisabilityType::AnxietyTravelFear => (
            "Users with anxiety or travel-related fears",
            "Calming color schemes, clear information, reduced visual clutter, reassuring content, easy navigation",
        ),
        DisabilityType::LowVision => (
            "Users with visual impairments but not completely blind",
            "High contrast colors, larger text sizes, clear visual hierarchy, good spacing, readable fonts",
        ),
    }
}

fn fallback_modification(
    element: UiElement,
    new_value: &str,
    reasoning: &str,
) -> UiModification {
    UiModification {
        element,
        new_value: new_value.to_string(),
        reasoning: reasoning.to_string(),
        priority: 1,
    }
}

/// Profile served when the model cannot be used
pub fn fallback_profile(dt: DisabilityType) -> AccessibilityProfile {
    let body_text = UiElement::new("body", "text", "text-lg", "Body text", "font-size", "high");

    let modifications = match dt {
        DisabilityType::LowVision => vec![
            fallback_modification(body_text, "text-xl", "Larger text for better readability"),
            fallback_modification(
                UiElement::new("primary", "color", "hsl(336 75% 45%)", "Primary brand color", "color", "high"),
                "hsl(50 100% 60%)",
                "High contrast yellow for better visibility",
            ),
        ],
        DisabilityType::Dyslexia => vec![fallback_modification(
            body_text,
            "text-xl leading-relaxed",
            "Larger text with increased line spacing for dyslexia",
        )],
        DisabilityType::CognitiveImpairment => vec![fallback_modification(
            UiElement::new("grid", "layout", "grid md:grid-cols-3 gap-8", "Grid layout", "display", "high"),
            "grid md:grid-cols-2 gap-12",
            "Simplified layout with fewer columns and more spacing",
        )],
        DisabilityType::WheelchairUser | DisabilityType::AnxietyTravelFear => Vec::new(),
    };

    AccessibilityProfile {
        disability_type: dt,
        modifications,
        css_classes: vec![dt.css_class()],
        content_adaptations: vec!["Use fallback profile - manual review recommended".to_string()],
        summary: format!("Fallback profile for {} - model analysis unavailable", dt.as_str()),
        source: ProfileSource::Fallback,
    }
}
