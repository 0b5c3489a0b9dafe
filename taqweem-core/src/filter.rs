//! Year and free-text filtering of the event store.

use crate::event::Event;

/// Select the events of `year` that match `query`, ordered by start instant.
///
/// An empty (or all-whitespace) query keeps every event of the year. The
/// sort is stable, so events sharing a start keep their store order.
pub fn select<'a>(events: &'a [Event], year: i32, query: &str) -> Vec<&'a Event> {
    let query = normalize_query(query);

    let mut selected: Vec<&Event> = events
        .iter()
        .filter(|event| event.year == year)
        .filter(|event| query.as_deref().is_none_or(|q| matches(event, q)))
        .collect();

    selected.sort_by_key(|event| event.gregorian_start);
    selected
}

/// Whether `event` matches an already normalized query.
///
/// Matches the name, either Hijri date (whitespace removed) or either
/// Gregorian calendar date written `YYYY/MM/DD`.
pub fn matches(event: &Event, query: &str) -> bool {
    if event.name.to_lowercase().contains(query) {
        return true;
    }

    let compact_query = strip_whitespace(query);
    if compact_query.is_empty() {
        return false;
    }

    let hijri_dates = std::iter::once(event.hijri_start.as_str()).chain(event.hijri_end.as_deref());
    for hijri in hijri_dates {
        if strip_whitespace(hijri).contains(&compact_query) {
            return true;
        }
    }

    [event.start_date(), event.end_date()]
        .iter()
        .any(|date| date.format("%Y/%m/%d").to_string().contains(&compact_query))
}

/// Trim, lowercase and fold Arabic-Indic digits. `None` means "no filter".
fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().map(fold_digit).collect::<String>().to_lowercase())
}

/// Map Arabic-Indic (U+0660..) and Eastern Arabic-Indic (U+06F0..) digits to ASCII.
fn fold_digit(c: char) -> char {
    match c {
        '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
        '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
        _ => c,
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
