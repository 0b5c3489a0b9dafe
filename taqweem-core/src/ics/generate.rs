//! ICS file generation.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::display::ics_filename;
use crate::error::TaqweemResult;
use crate::event::Event;

/// Suffix appended to event ids to build globally unique UIDs.
pub const UID_DOMAIN: &str = "saudi-school-calendar";
pub const PRODID: &str = "-//Saudi School Calendar//EN";
pub const LOCATION: &str = "المملكة العربية السعودية";

/// Generate a single-event VCALENDAR document for an all-day event.
///
/// `now` becomes the DTSTAMP. Lines end with CRLF.
pub fn generate_ics(event: &Event, now: DateTime<Utc>) -> String {
    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@{}", event.id, UID_DOMAIN));
    ics_event.add_property("DTSTAMP", now.format("%Y%m%dT%H%M%SZ").to_string());
    ics_event.summary(&event.name);

    add_date_property(&mut ics_event, "DTSTART", event.start_date());
    add_date_property(&mut ics_event, "DTEND", all_day_end(event));

    ics_event.description(event.description_or_name());
    ics_event.location(LOCATION);
    ics_event.add_property("STATUS", "CONFIRMED");

    cal.push(ics_event.done());
    let cal = cal.done();

    rewrite_prodid(&cal.to_string())
}

/// Write the event's ICS document into `dir`, named after the event.
pub fn write_ics(event: &Event, dir: &Path, now: DateTime<Utc>) -> TaqweemResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(ics_filename(event));
    std::fs::write(&path, generate_ics(event, now))?;
    tracing::info!(id = %event.id, path = %path.display(), "wrote ics export");
    Ok(path)
}

/// Exclusive DTEND date for an all-day event.
///
/// The day after whichever of start and end is later, read in the
/// event's own offset. Single- and multi-day events follow the same rule.
pub fn all_day_end(event: &Event) -> NaiveDate {
    let last = event.gregorian_start.max(event.gregorian_end);
    (last + Duration::days(1)).date_naive()
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Replace the icalendar crate's PRODID with ours and normalize line
/// endings to CRLF.
fn rewrite_prodid(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
        } else {
            result.push_str(line);
        }
        result.push_str("\r\n");
    }

    result
}
