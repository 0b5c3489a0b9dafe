use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;
use taqweem_core::display::{self, page_title};
use taqweem_core::view::CalendarView;

use crate::render::{render_card, render_years};

use super::Session;

pub fn run(session: &Session, year: Option<i32>, query: Option<String>) -> Result<()> {
    let Some(year) = session.year(year)? else {
        println!("{}", display::NO_MATCHES.dimmed());
        return Ok(());
    };
    let theme = session.prefs.theme;

    let mut view = CalendarView::new(session.store.clone(), Some(year));
    if let Some(query) = query {
        view.set_query(query);
    }
    view.refresh(Utc::now())?;

    println!("{}", page_title(year).bold());
    println!("{}\n", render_years(session.store.years(), year));

    if view.visible().is_empty() {
        println!("{}", display::NO_MATCHES.dimmed());
    }

    for event in view.visible() {
        let countdown = view.countdowns().card_label(&event.id).unwrap_or_default();
        println!("{}\n", render_card(event, &countdown, theme));
    }

    view.close();
    Ok(())
}
