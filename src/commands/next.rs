use anyhow::Result;
use chrono::Utc;
use taqweem_core::view::CalendarView;

use crate::render::render_widget;

use super::Session;

pub fn run(session: &Session, year: Option<i32>) -> Result<()> {
    let Some(year) = session.year(year)? else {
        println!("{}", render_widget(None, "", session.prefs.theme));
        return Ok(());
    };

    let mut view = CalendarView::new(session.store.clone(), Some(year));
    view.refresh(Utc::now())?;

    let countdown = view
        .countdowns()
        .widget()
        .map(|task| task.label())
        .unwrap_or_default();
    println!("{}", render_widget(view.next_event(), &countdown, session.prefs.theme));

    view.close();
    Ok(())
}
