//! schema.org JSON-LD for the displayed events.

use serde::Serialize;

use crate::error::TaqweemResult;
use crate::event::Event;
use crate::ics::LOCATION;

const SCHEMA_CONTEXT: &str = "https://schema.org";
const EVENT_SCHEDULED: &str = "https://schema.org/EventScheduled";

#[derive(Debug, Serialize)]
pub struct StructuredEvent<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub description: &'a str,
    pub location: Place,
    #[serde(rename = "eventStatus")]
    pub event_status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Place {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
}

impl<'a> From<&'a Event> for StructuredEvent<'a> {
    fn from(event: &'a Event) -> Self {
        StructuredEvent {
            context: SCHEMA_CONTEXT,
            kind: "Event",
            name: &event.name,
            start_date: event.start_date().format("%Y-%m-%d").to_string(),
            end_date: event.end_date().format("%Y-%m-%d").to_string(),
            description: event.description_or_name(),
            location: Place {
                kind: "Place",
                name: LOCATION,
            },
            event_status: EVENT_SCHEDULED,
        }
    }
}

/// JSON-LD array describing `events`, pretty-printed.
pub fn to_structured<'a>(events: impl IntoIterator<Item = &'a Event>) -> TaqweemResult<String> {
    let items: Vec<StructuredEvent> = events.into_iter().map(StructuredEvent::from).collect();
    Ok(serde_json::to_string_pretty(&items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::make_event;
    use serde_json::{Value, json};

    #[test]
    fn test_structured_fields() {
        let mut fall = make_event("fall", 1447, "2025-11-21", "2025-11-29");
        fall.description = Some("Autumn holiday".to_string());
        let admin = make_event("admin", 1447, "2025-08-12", "2025-08-12");

        let doc = to_structured([&fall, &admin]).unwrap();
        let value: Value = serde_json::from_str(&doc).unwrap();

        assert_eq!(
            value,
            json!([
                {
                    "@context": "https://schema.org",
                    "@type": "Event",
                    "name": "Event fall",
                    "startDate": "2025-11-21",
                    "endDate": "2025-11-29",
                    "description": "Autumn holiday",
                    "location": { "@type": "Place", "name": LOCATION },
                    "eventStatus": "https://schema.org/EventScheduled"
                },
                {
                    "@context": "https://schema.org",
                    "@type": "Event",
                    "name": "Event admin",
                    "startDate": "2025-08-12",
                    "endDate": "2025-08-12",
                    "description": "Event admin",
                    "location": { "@type": "Place", "name": LOCATION },
                    "eventStatus": "https://schema.org/EventScheduled"
                }
            ])
        );
    }

    #[test]
    fn test_empty_set_is_empty_array() {
        let doc = to_structured(std::iter::empty()).unwrap();
        assert_eq!(doc, "[]");
    }

    #[test]
    fn test_pretty_printed_with_two_spaces() {
        let admin = make_event("admin", 1447, "2025-08-12", "2025-08-12");
        let doc = to_structured([&admin]).unwrap();
        assert!(doc.starts_with("[\n  {\n    \"@context\""));
    }
}
