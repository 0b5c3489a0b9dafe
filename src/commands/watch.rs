use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;
use taqweem_core::countdown::TICK;
use taqweem_core::display::{self, page_title};
use taqweem_core::prefs::Theme;
use taqweem_core::view::CalendarView;

use crate::render::{render_card, render_widget};

use super::Session;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Redraw the board every tick until Ctrl-C.
pub async fn run(session: &Session, year: Option<i32>, query: Option<String>) -> Result<()> {
    let Some(year) = session.year(year)? else {
        println!("{}", render_widget(None, "", session.prefs.theme));
        return Ok(());
    };
    let theme = session.prefs.theme;

    let mut view = CalendarView::new(session.store.clone(), Some(year));
    if let Some(query) = query {
        view.set_query(query);
    }
    view.refresh(Utc::now())?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut redraw = tokio::time::interval(TICK);

    loop {
        tokio::select! {
            _ = redraw.tick() => draw(&view, year, theme),
            result = &mut ctrl_c => {
                if let Err(e) = result {
                    tracing::warn!(error = %e, "could not listen for Ctrl-C");
                }
                break;
            }
        }
    }

    view.close();
    Ok(())
}

fn draw(view: &CalendarView, year: i32, theme: Theme) {
    let mut out = String::from(CLEAR_SCREEN);

    out.push_str(&format!("{}\n\n", page_title(year).bold()));

    let widget_label = view
        .countdowns()
        .widget()
        .map(|task| task.label())
        .unwrap_or_default();
    out.push_str(&render_widget(view.next_event(), &widget_label, theme));
    out.push_str("\n\n");

    if view.visible().is_empty() {
        out.push_str(&format!("{}\n", display::NO_MATCHES.dimmed()));
    }

    for event in view.visible() {
        let countdown = view.countdowns().card_label(&event.id).unwrap_or_default();
        out.push_str(&render_card(event, &countdown, theme));
        out.push_str("\n\n");
    }

    out.push_str(&format!("{}", "Ctrl-C to exit".dimmed()));
    println!("{}", out);
}
