//! Terminal rendering for calendar events.
//!
//! Event kinds map to colors the same way across commands. The dark theme
//! switches to the bright variants of each color.

use owo_colors::{AnsiColors, OwoColorize};
use taqweem_core::display::{
    self, GREGORIAN_LABEL, HIJRI_LABEL, duration_label, gregorian_text, hijri_text,
};
use taqweem_core::duration::duration_days;
use taqweem_core::prefs::Theme;
use taqweem_core::{Event, EventKind};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self, theme: Theme) -> String;
}

/// Base color for an event kind.
fn kind_color(kind: &EventKind) -> AnsiColors {
    match kind {
        EventKind::Administration => AnsiColors::Blue,
        EventKind::Teachers => AnsiColors::Cyan,
        EventKind::SchoolStart => AnsiColors::Green,
        EventKind::NationalDay => AnsiColors::Green,
        EventKind::FoundationDay => AnsiColors::Yellow,
        EventKind::Extra => AnsiColors::Magenta,
        EventKind::FallBreak | EventKind::MidYear | EventKind::SpringBreak => AnsiColors::Yellow,
        EventKind::EidFitr | EventKind::EidAdha => AnsiColors::Magenta,
        EventKind::YearEnd => AnsiColors::Red,
        EventKind::Other(_) => AnsiColors::Blue,
    }
}

fn themed(color: AnsiColors, theme: Theme) -> AnsiColors {
    match (theme, color) {
        (Theme::Light, c) => c,
        (Theme::Dark, AnsiColors::Blue) => AnsiColors::BrightBlue,
        (Theme::Dark, AnsiColors::Cyan) => AnsiColors::BrightCyan,
        (Theme::Dark, AnsiColors::Green) => AnsiColors::BrightGreen,
        (Theme::Dark, AnsiColors::Yellow) => AnsiColors::BrightYellow,
        (Theme::Dark, AnsiColors::Magenta) => AnsiColors::BrightMagenta,
        (Theme::Dark, AnsiColors::Red) => AnsiColors::BrightRed,
        (Theme::Dark, c) => c,
    }
}

impl Render for EventKind {
    fn render(&self, theme: Theme) -> String {
        "●".color(themed(kind_color(self), theme)).to_string()
    }
}

impl Render for Event {
    fn render(&self, theme: Theme) -> String {
        let days = duration_days(&self.gregorian_start, &self.gregorian_end);
        let lines = [
            format!("{} {}", self.kind.render(theme), self.name.bold()),
            format!("   {}: {}", HIJRI_LABEL.dimmed(), hijri_text(self)),
            format!("   {}: {}", GREGORIAN_LABEL.dimmed(), gregorian_text(self)),
            format!("   {}", duration_label(days)),
        ];
        lines.join("\n")
    }
}

/// An event card with its current countdown line.
pub fn render_card(event: &Event, countdown: &str, theme: Theme) -> String {
    format!(
        "{}\n   {}",
        event.render(theme),
        countdown.color(themed(AnsiColors::Cyan, theme))
    )
}

/// The next-event widget: name, both dates, countdown.
pub fn render_widget(event: Option<&Event>, countdown: &str, theme: Theme) -> String {
    let Some(event) = event else {
        return display::NO_EVENT.dimmed().to_string();
    };

    format!(
        "{} {}\n   {}\n   {}",
        event.kind.render(theme),
        event.name.bold(),
        display::widget_dates(event).dimmed(),
        countdown.color(themed(AnsiColors::Cyan, theme)).bold()
    )
}

/// Year list with the selected year highlighted.
pub fn render_years(years: &[i32], selected: i32) -> String {
    years
        .iter()
        .map(|&year| {
            if year == selected {
                format!("[{}]", year).bold().to_string()
            } else {
                format!(" {} ", year).dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
