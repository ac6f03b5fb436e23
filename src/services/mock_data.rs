// src/services/mock_data.rs
// DOCUMENTATION: Sample records served when the content backend is unreachable
// PURPOSE: Keep list and detail views usable during backend outages

use crate::models::{CareService, ContentRecord, ContentVariant, DisabilityType, Hotel, Tour, Variants};
use std::collections::BTreeMap;

/// Records of one kind that can be served as sample data
pub trait MockContent: ContentRecord {
    fn mock_records() -> Vec<Self>;
}

fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn variant(title: Option<&str>, description: &str, key_points: &[&str]) -> ContentVariant {
    ContentVariant {
        title: title.map(str::to_string),
        description: description.to_string(),
        key_points: list(key_points),
    }
}

/// Find a sample record by id
pub fn find_mock<T: MockContent>(id: &str) -> Option<T> {
    T::mock_records()
        .into_iter()
        .find(|record| record.id() == Some(id))
}

impl MockContent for Hotel {
    fn mock_records() -> Vec<Self> {
        let mut variants = Variants::new();
        variants.insert(
            DisabilityType::WheelchairUser,
            variant(
                None,
                "Step-free entrance, a lift to every floor and four adapted rooms with roll-in showers.",
                &["Step-free entrance", "Roll-in showers", "Lift to all floors"],
            ),
        );
        variants.insert(
            DisabilityType::Dyslexia,
            variant(
                Some("Alpine Lodge"),
                "A quiet hotel in the mountains. Rooms are big. Breakfast is included.",
                &["Quiet", "Breakfast included"],
            ),
        );

        vec![
            Hotel {
                id: Some("mock-hotel-1".to_string()),
                name: "Alpine Lodge".to_string(),
                location: "Innsbruck, Austria".to_string(),
                description: "Family-run mountain hotel with panoramic views, a spa and direct access to the cable car.".to_string(),
                star_rating: Some(4),
                prices: map(&[("Double room", "140 EUR"), ("Single room", "95 EUR")]),
                amenities: list(&["Spa", "Restaurant", "Free Wi-Fi"]),
                accessibility_features: list(&["Step-free entrance", "Adapted rooms", "Lift"]),
                images: list(&["https://images.example.com/alpine-lodge.jpg"]),
                variants,
            },
            Hotel {
                id: Some("mock-hotel-2".to_string()),
                name: "Seaside Retreat".to_string(),
                location: "Malaga, Spain".to_string(),
                description: "Beachfront hotel with a rooftop pool.".to_string(),
                star_rating: Some(3),
                prices: map(&[("Sea view room", "120 EUR")]),
                amenities: list(&["Pool", "Beach access"]),
                accessibility_features: list(&["Pool hoist"]),
                images: Vec::new(),
                variants: Variants::new(),
            },
        ]
    }
}

impl MockContent for Tour {
    fn mock_records() -> Vec<Self> {
        let mut variants = Variants::new();
        variants.insert(
            DisabilityType::AnxietyTravelFear,
            variant(
                None,
                "A calm walk in a small group. The guide explains every stop before you arrive, and you can take a break at any time.",
                &["Small group", "Breaks whenever you need", "Clear plan for every stop"],
            ),
        );
        variants.insert(
            DisabilityType::CognitiveImpairment,
            variant(
                Some("Old Town Walk"),
                "We walk through the old town. We stop three times. The walk takes two hours.",
                &["Three stops", "Two hours"],
            ),
        );

        vec![Tour {
            id: Some("mock-tour-1".to_string()),
            name: "Old Town Discovery".to_string(),
            location: "Salzburg, Austria".to_string(),
            description: "Guided walk through the historic centre, the cathedral and the fortress gardens.".to_string(),
            duration: "2 hours".to_string(),
            prices: map(&[("Adult", "25 EUR"), ("Child", "12 EUR")]),
            itinerary: list(&["Cathedral square", "Mozart's birthplace", "Fortress gardens"]),
            included: list(&["Local guide", "Audio headset"]),
            accessibility_features: list(&["Step-free route", "Rest stops"]),
            images: list(&["https://images.example.com/old-town.jpg"]),
            max_group_size: Some(12),
            variants,
        }]
    }
}

impl MockContent for CareService {
    fn mock_records() -> Vec<Self> {
        let mut variants = Variants::new();
        variants.insert(
            DisabilityType::LowVision,
            variant(
                None,
                "Door-to-door assistance with large-print booking confirmations and audio guidance.",
                &["Large print", "Audio guidance"],
            ),
        );

        vec![CareService {
            id: Some("mock-care-1".to_string()),
            name: "TravelCare Assist".to_string(),
            location: "Vienna, Austria".to_string(),
            description: "Mobility assistance, wheelchair rental and accessible airport transfers.".to_string(),
            service_type: "Mobility assistance".to_string(),
            prices: map(&[("Airport transfer", "60 EUR"), ("Wheelchair rental per day", "15 EUR")]),
            services_offered: list(&["Wheelchair rental", "Airport transfer", "Companion service"]),
            availability: map(&[("Mon-Fri", "07:00-21:00"), ("Sat-Sun", "09:00-18:00")]),
            contact: map(&[("email", "help@travelcare.example.com"), ("phone", "+43 1 000 000")]),
            accessibility_features: list(&["Ramp-equipped vans"]),
            images: Vec::new(),
            variants,
        }]
    }
}
