//! The read-only event store.
//!
//! The bundled dataset is compiled into the crate. A replacement dataset
//! can be supplied as a JSON file with the same shape.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::error::{TaqweemError, TaqweemResult};
use crate::event::Event;

static BUNDLED_EVENTS: &str = include_str!("../data/events.json");

/// Immutable, ordered collection of events.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    years: Vec<i32>,
}

impl EventStore {
    /// Load the dataset bundled with the crate.
    pub fn bundled() -> TaqweemResult<Self> {
        Self::from_json(BUNDLED_EVENTS)
    }

    /// Load a dataset file from disk.
    pub fn from_path(path: &Path) -> TaqweemResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TaqweemError::Dataset(format!("Could not read {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    /// Parse a JSON array of event records.
    ///
    /// Records that fail to parse, end before they start, or reuse an id
    /// are skipped with a warning. Only a non-array document is an error.
    pub fn from_json(json: &str) -> TaqweemResult<Self> {
        let records: Vec<Value> = match serde_json::from_str(json)? {
            Value::Array(records) => records,
            _ => {
                return Err(TaqweemError::Dataset(
                    "expected a JSON array of events".into(),
                ));
            }
        };

        let mut seen = HashSet::new();
        let mut events = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let event: Event = match serde_json::from_value(record) {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed event record");
                    continue;
                }
            };

            if event.gregorian_end < event.gregorian_start {
                tracing::warn!(id = %event.id, "skipping event that ends before it starts");
                continue;
            }

            if !seen.insert(event.id.clone()) {
                tracing::warn!(id = %event.id, "skipping event with duplicate id");
                continue;
            }

            events.push(event);
        }

        Ok(Self::new(events))
    }

    fn new(events: Vec<Event>) -> Self {
        let mut years: Vec<i32> = events.iter().map(|e| e.year).collect();
        years.sort_unstable();
        years.dedup();

        tracing::debug!(events = events.len(), years = years.len(), "event store loaded");

        EventStore { events, years }
    }

    /// All events in store order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn earliest_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn has_year(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    /// Events of one year, in store order.
    pub fn events_for_year(&self, year: i32) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.year == year)
    }

    pub fn get(&self, id: &str) -> TaqweemResult<&Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| TaqweemError::EventNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
