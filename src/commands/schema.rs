use anyhow::Result;
use chrono::Utc;
use taqweem_core::view::CalendarView;

use super::Session;

/// Print the JSON-LD document for the events `list` would show.
pub fn run(session: &Session, year: Option<i32>, query: Option<String>) -> Result<()> {
    let mut view = CalendarView::new(session.store.clone(), session.year(year)?);
    if let Some(query) = query {
        view.set_query(query);
    }
    view.refresh(Utc::now())?;

    if let Some(doc) = view.structured_data() {
        println!("{}", doc);
    }

    view.close();
    Ok(())
}
