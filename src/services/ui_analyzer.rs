// src/services/ui_analyzer.rs
// DOCUMENTATION: UI accessibility analyzer
// PURPOSE: Ask a model which UI changes each disability type needs, and turn the
// answer into CSS and component-level modifications

use crate::config::Config;
use crate::errors::CmsError;
use crate::models::{
    AccessibilityProfile, ComponentCatalog, DisabilityType, ProfileSource, ReactModifications,
    UiElement, UiModification, UpdateComponentsResponse,
};
use crate::services::component_catalog::{default_catalog, disability_brief, fallback_profile};
use crate::services::llm_client::{ChatMessage, OpenAiClient};
use crate::services::ProfileCache;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

const SYSTEM_PROMPT: &str = "You are an expert in web accessibility and UI design. You analyze UI components and provide specific recommendations for different disability types.";

/// CSS properties the stylesheet generator emits
const CSS_PROPERTIES: [&str; 12] = [
    "font-size",
    "color",
    "background-color",
    "padding",
    "margin",
    "gap",
    "display",
    "font-weight",
    "line-height",
    "text-decoration",
    "box-shadow",
    "border-color",
];

/// Properties applied as inline styles on components
const STYLE_PROPERTIES: [&str; 5] = ["font-size", "color", "background-color", "padding", "margin"];

/// Properties applied as extra utility classes on components
const CLASS_PROPERTIES: [&str; 2] = ["display", "gap"];

/// Model answer before normalization
#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(default)]
    modifications: Vec<RawModification>,
    #[serde(default)]
    css_classes: Vec<String>,
    #[serde(default)]
    content_adaptations: Vec<String>,
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Deserialize)]
struct RawModification {
    element: UiElement,
    new_value: String,
    #[serde(default)]
    reasoning: String,
    #[serde(default = "default_priority")]
    priority: i64,
}

fn default_priority() -> i64 {
    3
}

/// Analyzer shared by all workers
pub struct UiAccessibilityAnalyzer {
    /// None when no model key is configured
    llm: Option<OpenAiClient>,
    catalog: RwLock<ComponentCatalog>,
    /// Bumped under the catalog write lock on every update
    catalog_version: AtomicU64,
    cache: Arc<ProfileCache>,
    limiter: DefaultDirectRateLimiter,
}

impl UiAccessibilityAnalyzer {
    pub fn new(llm: Option<OpenAiClient>, cache: Arc<ProfileCache>, calls_per_minute: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(calls_per_minute).unwrap_or(NonZeroU32::MIN));

        Self {
            llm,
            catalog: RwLock::new(default_catalog()),
            catalog_version: AtomicU64::new(0),
            cache,
            limiter: RateLimiter::direct(quota),
        }
    }

    /// Build the analyzer from configuration
    /// DOCUMENTATION: Without OPENAI_API_KEY every analysis returns the fallback profile
    pub fn from_config(config: &Config, cache: Arc<ProfileCache>) -> Result<Self, CmsError> {
        let llm = if config.analyzer_enabled() {
            Some(OpenAiClient::new(
                config.openai_api_key.clone(),
                &config.openai_base_url,
                config.openai_model.clone(),
                config.analysis_temperature,
                config.analysis_max_tokens,
            )?)
        } else {
            None
        };

        Ok(Self::new(llm, cache, config.analysis_rate_limit))
    }

    pub fn is_model_configured(&self) -> bool {
        self.llm.is_some()
    }

    pub fn cache(&self) -> &Arc<ProfileCache> {
        &self.cache
    }

    /// Snapshot of the current catalog
    pub async fn catalog(&self) -> ComponentCatalog {
        self.catalog.read().await.clone()
    }

    /// Analyze UI modifications needed for a disability type
    /// DOCUMENTATION: Cached model profile first; any model failure yields the fallback profile
    pub async fn analyze(&self, dt: DisabilityType) -> AccessibilityProfile {
        if let Some(profile) = self.cache.get(dt).await {
            return profile;
        }

        let llm = match &self.llm {
            Some(llm) => llm,
            None => {
                log::debug!("No model configured, serving fallback profile for {}", dt);
                return fallback_profile(dt);
            }
        };

        if self.limiter.check().is_err() {
            log::warn!("Analysis rate limit reached, serving fallback profile for {}", dt);
            return fallback_profile(dt);
        }

        let version = self.catalog_version.load(Ordering::Acquire);
        match self.analyze_with_model(llm, dt).await {
            Ok(profile) => {
                log::info!(
                    "Model analysis for {} produced {} modifications",
                    dt,
                    profile.modifications.len()
                );
                if !self.store_if_catalog_unchanged(dt, &profile, version).await {
                    log::debug!("Catalog changed during analysis of {}, not caching", dt);
                }
                profile
            }
            Err(e) => {
                log::error!("Error analyzing disability type {}: {}", dt, e);
                fallback_profile(dt)
            }
        }
    }

    /// Cache a profile only if it was built against the current catalog
    async fn store_if_catalog_unchanged(
        &self,
        dt: DisabilityType,
        profile: &AccessibilityProfile,
        version: u64,
    ) -> bool {
        let _catalog = self.catalog.read().await;
        if self.catalog_version.load(Ordering::Acquire) != version {
            return false;
        }
        self.cache.set(dt, profile.clone()).await;
        true
    }

    async fn analyze_with_model(&self, llm: &OpenAiClient, dt: DisabilityType) -> Result<AccessibilityProfile, CmsError> {
        let prompt = self.build_prompt(dt).await?;
        let messages = [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)];

        log::info!("Requesting accessibility analysis for {} from {}", dt, llm.model());
        let answer = llm.complete(&messages).await?;
        Self::parse_model_response(&answer, dt)
    }

    /// Prompt describing the disability type, its needs and the component catalog
    pub async fn build_prompt(&self, dt: DisabilityType) -> Result<String, CmsError> {
        let (description, needs) = disability_brief(dt);
        let catalog = serde_json::to_string_pretty(&*self.catalog.read().await)
            .map_err(|e| CmsError::InternalError(format!("Failed to serialize catalog: {}", e)))?;

        Ok(format!(
            r#"Analyze the UI components for accessibility modifications needed for users with {name}.

Disability Information:
- Description: {description}
- Key Needs: {needs}

Available UI Components and Elements:
{catalog}

Please provide a comprehensive analysis including:

1. Typography Modifications: font sizes, weights, line heights, font families
2. Color Modifications: background, foreground, primary colors, contrast ratios
3. Layout Modifications: spacing, padding, margins, grid layouts
4. Interactive Element Modifications: button sizes, hover states, focus indicators
5. Content Structure Modifications: information hierarchy, content density

For each modification, provide the CSS property and value, the reasoning,
and a priority from 1 to 5 (1 is highest).

Return your response as a JSON object with the following structure:
{{
    "modifications": [
        {{
            "element": {{
                "component_name": "string",
                "element_type": "string",
                "current_value": "string",
                "description": "string",
                "css_property": "string",
                "importance": "string"
            }},
            "new_value": "string",
            "reasoning": "string",
            "priority": 1
        }}
    ],
    "css_classes": ["list of CSS classes to add"],
    "content_adaptations": ["list of content changes needed"],
    "summary": "brief summary of key changes"
}}"#,
            name = dt.as_str().replace('_', " "),
            description = description,
            needs = needs,
            catalog = catalog,
        ))
    }

    /// Parse the JSON object embedded in a model answer
    /// DOCUMENTATION: Takes the text between the first '{' and the last '}'; priorities are clamped to 1..=5
    pub fn parse_model_response(text: &str, dt: DisabilityType) -> Result<AccessibilityProfile, CmsError> {
        let (start, end) = match (text.find('{'), text.rfind('}')) {
            (Some(start), Some(end)) if start < end => (start, end),
            _ => {
                return Err(CmsError::ExternalApiError(
                    "Model answer contains no JSON object".to_string(),
                ))
            }
        };

        let raw: RawProfile = serde_json::from_str(&text[start..=end]).map_err(|e| {
            CmsError::ExternalApiError(format!("Model answer is not a valid profile: {}", e))
        })?;

        let modifications = raw
            .modifications
            .into_iter()
            .map(|m| UiModification {
                element: m.element,
                new_value: m.new_value,
                reasoning: m.reasoning,
                priority: m.priority.clamp(1, 5) as u8,
            })
            .collect();

        let mut css_classes = raw.css_classes;
        let persona = dt.css_class();
        if !css_classes.contains(&persona) {
            css_classes.insert(0, persona);
        }

        Ok(AccessibilityProfile {
            disability_type: dt,
            modifications,
            css_classes,
            content_adaptations: raw.content_adaptations,
            summary: raw.summary,
            source: ProfileSource::Model,
        })
    }

    /// Stylesheet scoped to the persona class
    /// DOCUMENTATION: Declarations are grouped by property in first-seen order;
    /// properties outside CSS_PROPERTIES are skipped
    pub fn generate_css(profile: &AccessibilityProfile) -> String {
        let mut groups: Vec<(&str, Vec<&UiModification>)> = Vec::new();
        for m in &profile.modifications {
            let property = m.element.css_property.as_str();
            match groups.iter().position(|(p, _)| *p == property) {
                Some(index) => groups[index].1.push(m),
                None => groups.push((property, vec![m])),
            }
        }

        let mut lines = vec![format!(".{} {{", profile.disability_type.css_class())];
        for (property, mods) in groups {
            if !CSS_PROPERTIES.contains(&property) {
                continue;
            }
            for m in mods {
                lines.push(format!("  {}: {};", property, m.new_value));
            }
        }
        lines.push("}".to_string());

        lines.join("\n")
    }

    /// Component-level style and class changes
    pub fn generate_react(profile: &AccessibilityProfile) -> ReactModifications {
        let mut result = ReactModifications {
            content_changes: profile.content_adaptations.clone(),
            ..ReactModifications::default()
        };

        for m in &profile.modifications {
            let component = m.element.component_name.clone();
            let property = m.element.css_property.as_str();

            if STYLE_PROPERTIES.contains(&property) {
                result
                    .style_modifications
                    .entry(component)
                    .or_default()
                    .insert(property.to_string(), m.new_value.clone());
            } else if CLASS_PROPERTIES.contains(&property) {
                result
                    .class_name_modifications
                    .entry(component)
                    .or_default()
                    .push(m.new_value.clone());
            }
        }

        result
    }

    /// Merge catalog entries
    /// DOCUMENTATION: Same (component, element type, property) replaces, anything else is appended.
    /// Cached profiles were built from the old catalog and are dropped.
    pub async fn update_components(&self, updates: ComponentCatalog) -> Result<UpdateComponentsResponse, CmsError> {
        if updates.is_empty() {
            return Err(CmsError::InvalidInput("No components provided".to_string()));
        }

        for (category, elements) in &updates {
            if category.trim().is_empty() {
                return Err(CmsError::ValidationError("Category name is required".to_string()));
            }
            for element in elements {
                element.validate().map_err(|e| {
                    CmsError::ValidationError(format!("{}: {}", category, e))
                })?;
            }
        }

        let updated_categories: Vec<String> = updates.keys().cloned().collect();

        let total_categories = {
            let mut catalog = self.catalog.write().await;
            for (category, elements) in updates {
                let existing = catalog.entry(category).or_default();
                for element in elements {
                    match existing.iter().position(|e| e.same_slot(&element)) {
                        Some(index) => existing[index] = element,
                        None => existing.push(element),
                    }
                }
            }
            self.catalog_version.fetch_add(1, Ordering::AcqRel);
            self.cache.clear().await;
            catalog.len()
        };

        log::info!(
            "Component catalog updated: {:?} ({} categories total)",
            updated_categories,
            total_categories
        );

        Ok(UpdateComponentsResponse {
            message: "Components updated successfully".to_string(),
            updated_categories,
            total_categories,
        })
    }
}
