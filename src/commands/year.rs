use anyhow::Result;
use owo_colors::OwoColorize;

use super::Session;

/// Persist the selected year.
pub fn run(session: &mut Session, year: i32) -> Result<()> {
    let year = session.require_year(year)?;

    session.prefs.selected_year = Some(year);
    session.save_prefs()?;

    println!("Selected year: {}", year.bold());
    Ok(())
}
