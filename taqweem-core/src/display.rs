//! Arabic presentation text shared by every front end.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::error::{TaqweemError, TaqweemResult};
use crate::event::Event;

pub const NO_MATCHES: &str = "لا توجد أحداث مطابقة للبحث.";
pub const NO_EVENT: &str = "لا يوجد حدث";
pub const HIJRI_LABEL: &str = "التاريخ الهجري";
pub const GREGORIAN_LABEL: &str = "التاريخ الميلادي";

const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Characters a URI component may carry unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Two-form Arabic plural for "day": singular only for exactly one.
pub fn day_label(days: i64) -> &'static str {
    if days == 1 { "يوم" } else { "أيام" }
}

/// Hijri range, or the single date when the event has no distinct end.
pub fn hijri_text(event: &Event) -> String {
    match event.hijri_end.as_deref() {
        Some(end) if end != event.hijri_start => format!("{} – {}", event.hijri_start, end),
        _ => event.hijri_start.clone(),
    }
}

/// Gregorian range as `YYYY-MM-DD`, or one date for single-day events.
pub fn gregorian_text(event: &Event) -> String {
    let start = event.start_date().format("%Y-%m-%d").to_string();
    let end = event.end_date().format("%Y-%m-%d").to_string();
    if start == end {
        start
    } else {
        format!("{start} – {end}")
    }
}

/// `المدة: N أيام`, singular for a one-day event.
pub fn duration_label(days: i64) -> String {
    let unit = if days > 1 { "أيام" } else { "يوم" };
    format!("المدة: {days} {unit}")
}

/// Both date representations on one line, as shown by the next-event widget.
pub fn widget_dates(event: &Event) -> String {
    format!("{} \u{2022} {}", hijri_text(event), gregorian_text(event))
}

/// Text block placed on the clipboard by the copy action.
pub fn copy_text(event: &Event) -> String {
    format!(
        "{}\n{HIJRI_LABEL}: {}\n{GREGORIAN_LABEL}: {}",
        event.name,
        hijri_text(event),
        gregorian_text(event)
    )
}

/// Deep link to an event card: `<site_url>#<id>`.
pub fn share_link(site_url: &str, event: &Event) -> TaqweemResult<String> {
    let mut url = Url::parse(site_url)
        .map_err(|e| TaqweemError::Config(format!("Invalid site_url '{site_url}': {e}")))?;
    url.set_fragment(Some(&event.id));
    Ok(url.to_string())
}

/// Message handed to the share target.
pub fn share_message(event: &Event, link: &str) -> String {
    format!(
        "{} - {} / {}\n{}",
        event.name,
        hijri_text(event),
        gregorian_text(event),
        link
    )
}

/// WhatsApp share URL carrying `message`.
pub fn whatsapp_url(message: &str) -> String {
    format!(
        "{}?text={}",
        WHATSAPP_SEND_URL,
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// Export file name: runs of whitespace in the name become `_`.
pub fn ics_filename(event: &Event) -> String {
    let mut name = String::with_capacity(event.name.len() + 4);
    let mut in_space = false;

    for c in event.name.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }

    name.push_str(".ics");
    name
}

/// Page title for a Hijri year, e.g. `التقويم الدراسي السعودي 1447/1448هـ`.
pub fn page_title(year: i32) -> String {
    format!("التقويم الدراسي السعودي {}", year_span(year))
}

pub fn page_description(year: i32) -> String {
    format!(
        "تعرف على مواعيد الدراسة والإجازات للعام {} مع عد تنازلي وإضافة للتقويم.",
        year_span(year)
    )
}

fn year_span(year: i32) -> String {
    format!("{}/{}هـ", year, year + 1)
}
