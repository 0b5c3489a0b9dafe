//! Calendar event types.
//!
//! Events come from the static dataset and never change after loading.
//! Gregorian instants keep the fixed offset they were recorded with
//! (UTC+3 for the whole dataset), so calendar dates are always read in
//! that offset while arithmetic works on absolute instants.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single academic calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    /// Hijri academic year the event is grouped under (e.g. 1447).
    pub year: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Hijri start date, `day/month/year`.
    pub hijri_start: String,
    /// Hijri end date, `None` for single-day events.
    #[serde(default)]
    pub hijri_end: Option<String>,
    pub gregorian_start: DateTime<FixedOffset>,
    pub gregorian_end: DateTime<FixedOffset>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Event {
    /// Calendar date of the start, in the event's own offset.
    pub fn start_date(&self) -> NaiveDate {
        self.gregorian_start.date_naive()
    }

    /// Calendar date of the end, in the event's own offset.
    pub fn end_date(&self) -> NaiveDate {
        self.gregorian_end.date_naive()
    }

    /// Hijri end date, falling back to the start for single-day events.
    pub fn hijri_end_or_start(&self) -> &str {
        self.hijri_end.as_deref().unwrap_or(&self.hijri_start)
    }

    /// Description used by exports; the name stands in when absent.
    pub fn description_or_name(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }

    pub fn is_single_day(&self) -> bool {
        self.start_date() == self.end_date()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Event category. Only used to pick a display color.
///
/// Unknown tags are kept verbatim so newer datasets still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Administration,
    Teachers,
    SchoolStart,
    NationalDay,
    Extra,
    FallBreak,
    MidYear,
    FoundationDay,
    EidFitr,
    EidAdha,
    SpringBreak,
    YearEnd,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Administration => "administration",
            EventKind::Teachers => "teachers",
            EventKind::SchoolStart => "school_start",
            EventKind::NationalDay => "national_day",
            EventKind::Extra => "extra",
            EventKind::FallBreak => "fall_break",
            EventKind::MidYear => "mid_year",
            EventKind::FoundationDay => "foundation_day",
            EventKind::EidFitr => "eid_fitr",
            EventKind::EidAdha => "eid_adha",
            EventKind::SpringBreak => "spring_break",
            EventKind::YearEnd => "year_end",
            EventKind::Other(tag) => tag,
        }
    }
}

impl From<String> for EventKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "administration" => EventKind::Administration,
            "teachers" => EventKind::Teachers,
            "school_start" => EventKind::SchoolStart,
            "national_day" => EventKind::NationalDay,
            "extra" => EventKind::Extra,
            "fall_break" => EventKind::FallBreak,
            "mid_year" => EventKind::MidYear,
            "foundation_day" => EventKind::FoundationDay,
            "eid_fitr" => EventKind::EidFitr,
            "eid_adha" => EventKind::EidAdha,
            "spring_break" => EventKind::SpringBreak,
            "year_end" => EventKind::YearEnd,
            _ => EventKind::Other(tag),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
