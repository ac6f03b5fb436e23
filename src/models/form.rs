// src/models/form.rs
// DOCUMENTATION: Form input for content records
// PURPOSE: Form schemas, validation of raw input and conversion into records

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

use super::{CareService, ContentKind, ContentRecord, Hotel, Tour};
use crate::errors::CmsError;

/// One row of a key/value form widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Convert key/value rows into a mapping
/// DOCUMENTATION: Blank rows are dropped, a value without a key is rejected,
/// and a repeated key keeps the last value
pub fn pairs_to_map(field: &str, pairs: &[KeyValuePair]) -> Result<BTreeMap<String, String>, CmsError> {
    let mut map = BTreeMap::new();

    for (index, pair) in pairs.iter().enumerate() {
        let key = pair.key.trim();
        let value = pair.value.trim();

        if key.is_empty() {
            if value.is_empty() {
                continue;
            }
            return Err(CmsError::ValidationError(format!(
                "{}: row {} has a value but no key",
                field,
                index + 1
            )));
        }

        map.insert(key.to_string(), value.to_string());
    }

    Ok(map)
}

/// Inverse of `pairs_to_map`, used to pre-fill edit forms
pub fn map_to_pairs(map: &BTreeMap<String, String>) -> Vec<KeyValuePair> {
    map.iter()
        .map(|(k, v)| KeyValuePair::new(k.clone(), v.clone()))
        .collect()
}

/// Trim list entries and drop blank ones
pub fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::from("This field is required"));
        return Err(error);
    }
    Ok(())
}

/// Widget a form field is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    /// Repeatable single-line inputs
    List,
    /// Repeatable key/value rows, submitted as an array of pairs
    KeyValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FormField {
    fn new(name: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            required: false,
            placeholder: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }
}

/// Description of a form a UI can render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchema {
    pub kind: ContentKind,
    pub title: String,
    pub fields: Vec<FormField>,
}

impl FormSchema {
    pub fn required_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// Form schema for any content kind
pub fn schema_for(kind: ContentKind) -> FormSchema {
    match kind {
        ContentKind::Hotel => HotelForm::schema(),
        ContentKind::Tour => TourForm::schema(),
        ContentKind::CareService => CareServiceForm::schema(),
    }
}

/// Raw form input bound to a record type
pub trait ContentForm: Serialize + DeserializeOwned + Validate + Sized {
    type Record: ContentRecord;

    fn schema() -> FormSchema;

    /// Pre-fill the form from an existing record
    fn from_record(record: &Self::Record) -> Self;

    /// Shape the input into a record without validating it
    fn to_record(&self) -> Result<Self::Record, CmsError>;

    /// Validate, then shape into the record submitted to the backend
    fn into_record(self) -> Result<Self::Record, CmsError> {
        self.validate()?;
        self.to_record()
    }
}

/// Input of the hotel form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct HotelForm {
    #[serde(default)]
    #[validate(custom = "not_blank", length(max = 255))]
    pub name: String,

    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub location: String,

    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub description: String,

    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub star_rating: Option<u8>,

    #[serde(default)]
    pub prices: Vec<KeyValuePair>,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[serde(default)]
    pub accessibility_features: Vec<String>,

    #[serde(default)]
    pub images: Vec<String>,
}

impl ContentForm for HotelForm {
    type Record = Hotel;

    fn schema() -> FormSchema {
        FormSchema {
            kind: ContentKind::Hotel,
            title: "Hotel".to_string(),
            fields: vec![
                FormField::new("name", "Name", FieldType::Text).required(),
                FormField::new("location", "Location", FieldType::Text)
                    .required()
                    .placeholder("City, country"),
                FormField::new("description", "Description", FieldType::Textarea).required(),
                FormField::new("star_rating", "Star rating", FieldType::Number).placeholder("1-5"),
                FormField::new("prices", "Prices", FieldType::KeyValue)
                    .placeholder("Room type / price"),
                FormField::new("amenities", "Amenities", FieldType::List),
                FormField::new("accessibility_features", "Accessibility features", FieldType::List),
                FormField::new("images", "Image URLs", FieldType::List),
            ],
        }
    }

    fn from_record(record: &Hotel) -> Self {
        Self {
            name: record.name.clone(),
            location: record.location.clone(),
            description: record.description.clone(),
            star_rating: record.star_rating,
            prices: map_to_pairs(&record.prices),
            amenities: record.amenities.clone(),
            accessibility_features: record.accessibility_features.clone(),
            images: record.images.clone(),
        }
    }

    fn to_record(&self) -> Result<Hotel, CmsError> {
        Ok(Hotel {
            id: None,
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            star_rating: self.star_rating,
            prices: pairs_to_map("prices", &self.prices)?,
            amenities: clean_list(&self.amenities),
            accessibility_features: clean_list(&self.accessibility_features),
            images: clean_list(&self.images),
            variants: BTreeMap::new(),
        })
    }
}

/// Input of the tour form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TourForm {
    #[serde(default)]
    #[validate(custom = "not_blank", length(max = 255))]
    pub name: String,

    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub location: String,

    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub description: String,

    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub duration: String,

    #[serde(default)]
    pub prices: Vec<KeyValuePair>,

    #[serde(default)]
    pub itinerary: Vec<String>,

    #[serde(default)]
    pub included: Vec<String>,

    #[serde(default)]
    pub accessibility_features: Vec<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    #[validate(range(min = 1))]
    pub max_group_size: Option<u32>,
}

impl ContentForm for TourForm {
    type Record = Tour;

    fn schema() -> FormSchema {
        FormSchema {
            kind: ContentKind::Tour,
            title: "Tour".to_string(),
            fields: vec![
                FormField::new("name", "Name", FieldType::Text).required(),
                FormField::new("location", "Location", FieldType::Text).required(),
                FormField::new("description", "Description", FieldType::Textarea).required(),
                FormField::new("duration", "Duration", FieldType::Text)
                    .required()
                    .placeholder("e.g. 3 hours"),
                FormField::new("prices", "Prices", FieldType::KeyValue)
                    .placeholder("Ticket type / price"),
                FormField::new("itinerary", "Itinerary", FieldType::List),
                FormField::new("included", "Included", FieldType::List),
                FormField::new("accessibility_features", "Accessibility features", FieldType::List),
                FormField::new("images", "Image URLs", FieldType::List),
                FormField::new("max_group_size", "Max group size", FieldType::Number),
            ],
        }
    }

    fn from_record(record: &Tour) -> Self {
        Self {
            name: record.name.clone(),
            location: record.location.clone(),
            description: record.description.clone(),
            duration: record.duration.clone(),
            prices: map_to_pairs(&record.prices),
            itinerary: record.itinerary.clone(),
            included: record.included.clone(),
            accessibility_features: record.accessibility_features.clone(),
            images: record.images.clone(),
            max_group_size: record.max_group_size,
        }
    }

    fn to_record(&self) -> Result<Tour, CmsError> {
        Ok(Tour {
            id: None,
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            duration: self.duration.trim().to_string(),
            prices: pairs_to_map("prices", &self.prices)?,
            itinerary: clean_list(&self.itinerary),
            included: clean_list(&self.included),
            accessibility_features: clean_list(&self.accessibility_features),
            images: clean_list(&self.images),
            max_group_size: self.max_group_size,
            variants: BTreeMap::new(),
        })
    }
}

/// Input of the care service form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CareServiceForm {
    #[serde(default)]
    #[validate(custom = "not_blank", length(max = 255))]
    pub name: String,

    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub location: String,

    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub description: String,

    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub service_type: String,

    #[serde(default)]
    pub prices: Vec<KeyValuePair>,

    #[serde(default)]
    pub services_offered: Vec<String>,

    #[serde(default)]
    pub availability: Vec<KeyValuePair>,

    #[serde(default)]
    pub contact: Vec<KeyValuePair>,

    #[serde(default)]
    pub accessibility_features: Vec<String>,

    #[serde(default)]
    pub images: Vec<String>,
}

impl ContentForm for CareServiceForm {
    type Record = CareService;

    fn schema() -> FormSchema {
        FormSchema {
            kind: ContentKind::CareService,
            title: "Care service".to_string(),
            fields: vec![
                FormField::new("name", "Name", FieldType::Text).required(),
                FormField::new("location", "Location", FieldType::Text).required(),
                FormField::new("description", "Description", FieldType::Textarea).required(),
                FormField::new("service_type", "Service type", FieldType::Text)
                    .required()
                    .placeholder("e.g. mobility assistance"),
                FormField::new("prices", "Prices", FieldType::KeyValue)
                    .placeholder("Service / price"),
                FormField::new("services_offered", "Services offered", FieldType::List),
                FormField::new("availability", "Availability", FieldType::KeyValue)
                    .placeholder("Day / hours"),
                FormField::new("contact", "Contact", FieldType::KeyValue)
                    .placeholder("Channel / value"),
                FormField::new("accessibility_features", "Accessibility features", FieldType::List),
                FormField::new("images", "Image URLs", FieldType::List),
            ],
        }
    }

    fn from_record(record: &CareService) -> Self {
        Self {
            name: record.name.clone(),
            location: record.location.clone(),
            description: record.description.clone(),
            service_type: record.service_type.clone(),
            prices: map_to_pairs(&record.prices),
            services_offered: record.services_offered.clone(),
            availability: map_to_pairs(&record.availability),
            contact: map_to_pairs(&record.contact),
            accessibility_features: record.accessibility_features.clone(),
            images: record.images.clone(),
        }
    }

    fn to_record(&self) -> Result<CareService, CmsError> {
        Ok(CareService {
            id: None,
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            service_type: self.service_type.trim().to_string(),
            prices: pairs_to_map("prices", &self.prices)?,
            services_offered: clean_list(&self.services_offered),
            availability: pairs_to_map("availability", &self.availability)?,
            contact: pairs_to_map("contact", &self.contact)?,
            accessibility_features: clean_list(&self.accessibility_features),
            images: clean_list(&self.images),
            variants: BTreeMap::new(),
        })
    }
}

/// Response DTO for GET /forms/{kind}/{id}
#[derive(Debug, Serialize)]
pub struct EditFormResponse<F> {
    pub schema: FormSchema,
    pub id: String,
    pub values: F,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hotel_form() -> HotelForm {
        HotelForm {
            name: "Harbour View".into(),
            location: "Lisbon".into(),
            description: "Rooms over the river".into(),
            ..HotelForm::default()
        }
    }

    #[test]
    fn test_pairs_to_map() {
        let pairs = vec![
            KeyValuePair::new(" Single ", " 90 EUR "),
            KeyValuePair::new("", ""),
            KeyValuePair::new("Double", "120 EUR"),
        ];
        let map = pairs_to_map("prices", &pairs).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map["Single"], "90 EUR");
        assert_eq!(map["Double"], "120 EUR");
    }

    #[test]
    fn test_pairs_to_map_last_duplicate_wins() {
        let pairs = vec![
            KeyValuePair::new("Single", "90"),
            KeyValuePair::new("Single", "95"),
        ];
        let map = pairs_to_map("prices", &pairs).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["Single"], "95");
    }

    #[test]
    fn test_pairs_to_map_rejects_value_without_key() {
        let pairs = vec![
            KeyValuePair::new("Single", "90"),
            KeyValuePair::new("  ", "120"),
        ];
        match pairs_to_map("prices", &pairs) {
            Err(CmsError::ValidationError(msg)) => {
                assert_eq!(msg, "prices: row 2 has a value but no key")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_map_to_pairs_round_trips_prefill() {
        let mut map = BTreeMap::new();
        map.insert("Adult".to_string(), "25".to_string());
        map.insert("Child".to_string(), "10".to_string());

        let pairs = map_to_pairs(&map);
        assert_eq!(pairs[0], KeyValuePair::new("Adult", "25"));
        assert_eq!(pairs_to_map("prices", &pairs).unwrap(), map);
    }

    #[test]
    fn test_empty_required_fields_rejected() {
        let form = HotelForm {
            name: "   ".into(),
            location: String::new(),
            ..hotel_form()
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("location"));
        assert!(!fields.contains_key("description"));

        assert!(matches!(
            form.into_record(),
            Err(CmsError::ValidationError(_))
        ));
    }

    #[test]
    fn test_tour_requires_duration() {
        let form = TourForm {
            name: "Old town".into(),
            location: "Porto".into(),
            description: "Walk".into(),
            ..TourForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("duration"));
    }

    #[test]
    fn test_star_rating_range() {
        let form = HotelForm {
            star_rating: Some(6),
            ..hotel_form()
        };
        assert!(form.validate().is_err());

        let form = HotelForm {
            star_rating: Some(4),
            ..hotel_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_submitted_payload_shape() {
        let form: CareServiceForm = serde_json::from_value(json!({
            "name": "Mobility Plus",
            "location": "Valencia",
            "description": "Wheelchair rental and transfers",
            "service_type": "mobility assistance",
            "prices": [
                { "key": "Daily rental", "value": "30 EUR" },
                { "key": "", "value": "" }
            ],
            "services_offered": ["Rental", " ", "Airport transfer"],
            "availability": [{ "key": "Mon-Fri", "value": "08:00-20:00" }],
            "contact": [{ "key": "phone", "value": "+34 600 000 000" }]
        }))
        .unwrap();

        let record = form.into_record().unwrap();
        let payload = serde_json::to_value(&record).unwrap();

        assert_eq!(payload["prices"], json!({ "Daily rental": "30 EUR" }));
        assert_eq!(payload["availability"], json!({ "Mon-Fri": "08:00-20:00" }));
        assert_eq!(payload["contact"], json!({ "phone": "+34 600 000 000" }));
        assert_eq!(payload["services_offered"], json!(["Rental", "Airport transfer"]));
        assert!(payload.get("id").is_none());
        assert!(payload.get("variants").is_none());
    }

    #[test]
    fn test_schemas_mark_required_fields() {
        let required: Vec<String> = schema_for(ContentKind::CareService)
            .required_fields()
            .map(|f| f.name.clone())
            .collect();
        assert_eq!(required, vec!["name", "location", "description", "service_type"]);

        let schema = schema_for(ContentKind::Hotel);
        let prices = schema.fields.iter().find(|f| f.name == "prices").unwrap();
        assert_eq!(prices.field_type, FieldType::KeyValue);
    }

    #[test]
    fn test_prefill_from_record() {
        let hotel = hotel_form().into_record().unwrap();
        let form = HotelForm::from_record(&Hotel {
            prices: [("Suite".to_string(), "300".to_string())].into_iter().collect(),
            ..hotel
        });
        assert_eq!(form.prices, vec![KeyValuePair::new("Suite", "300")]);
    }
}
