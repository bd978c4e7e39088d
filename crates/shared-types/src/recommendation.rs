use serde::{Deserialize, Serialize};

/// Kind of event a customer is planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Wedding,
    Corporate,
    Birthday,
    Conference,
    Concert,
    Festival,
    #[default]
    Other,
}

/// All event types in picker order.
pub const ALL_EVENT_TYPES: &[EventType] = &[
    EventType::Wedding,
    EventType::Corporate,
    EventType::Birthday,
    EventType::Conference,
    EventType::Concert,
    EventType::Festival,
    EventType::Other,
];

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Corporate => "corporate",
            EventType::Birthday => "birthday",
            EventType::Conference => "conference",
            EventType::Concert => "concert",
            EventType::Festival => "festival",
            EventType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::Corporate => "Corporate Event",
            EventType::Birthday => "Birthday Party",
            EventType::Conference => "Conference",
            EventType::Concert => "Concert",
            EventType::Festival => "Festival",
            EventType::Other => "Other",
        }
    }

    /// Parse a key, falling back to `Other`.
    pub fn from_key(s: &str) -> Self {
        ALL_EVENT_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .unwrap_or_default()
    }
}

/// Vendor service category offered on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Catering,
    Venue,
    Photography,
    Music,
    Decoration,
    AvEquipment,
    Security,
    Transportation,
    Planning,
}

impl ServiceCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::Catering => "Catering",
            ServiceCategory::Venue => "Venue",
            ServiceCategory::Photography => "Photography",
            ServiceCategory::Music => "Music & Entertainment",
            ServiceCategory::Decoration => "Decoration",
            ServiceCategory::AvEquipment => "AV Equipment",
            ServiceCategory::Security => "Security",
            ServiceCategory::Transportation => "Transportation",
            ServiceCategory::Planning => "Event Planning",
        }
    }
}

/// Static relevance table: categories most worth suggesting for each event
/// type, most relevant first.
pub fn rule_based_suggestions(event_type: EventType) -> &'static [ServiceCategory] {
    use ServiceCategory::*;
    match event_type {
        EventType::Wedding => &[Venue, Catering, Photography, Music, Decoration, Transportation],
        EventType::Corporate => &[Venue, Catering, AvEquipment, Transportation],
        EventType::Birthday => &[Catering, Decoration, Music, Photography],
        EventType::Conference => &[Venue, AvEquipment, Catering, Security, Planning],
        EventType::Concert => &[AvEquipment, Security, Music, Transportation],
        EventType::Festival => &[Security, Catering, AvEquipment, Music, Transportation],
        EventType::Other => &[Venue, Catering, Planning],
    }
}

/// One suggested service category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSuggestion {
    pub category: ServiceCategory,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    #[serde(default)]
    pub reason: String,
}

/// Where a suggestion list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    Model,
    Rules,
}

/// Suggestions for one event, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSuggestions {
    pub event_type: EventType,
    pub source: SuggestionSource,
    pub suggestions: Vec<ServiceSuggestion>,
}

impl ServiceSuggestions {
    /// Suggestions derived from the static table. Confidence decays with rank
    /// so the list sorts the same way a model response would.
    pub fn from_rules(event_type: EventType) -> Self {
        let categories = rule_based_suggestions(event_type);
        let suggestions = categories
            .iter()
            .enumerate()
            .map(|(rank, category)| ServiceSuggestion {
                category: *category,
                confidence: 1.0 - rank as f64 * 0.1,
                reason: format!("Commonly booked for {}", event_type.display_name()),
            })
            .collect();
        Self {
            event_type,
            source: SuggestionSource::Rules,
            suggestions,
        }
    }

    /// Wrap a model response, clamping confidences and ordering by
    /// descending confidence.
    pub fn from_model(event_type: EventType, mut suggestions: Vec<ServiceSuggestion>) -> Self {
        for s in suggestions.iter_mut() {
            s.confidence = if s.confidence.is_nan() {
                0.0
            } else {
                s.confidence.clamp(0.0, 1.0)
            };
        }
        suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Self {
            event_type,
            source: SuggestionSource::Model,
            suggestions,
        }
    }
}
