use anyhow::Result;
use owo_colors::OwoColorize;
use taqweem_core::display::NO_MATCHES;

use crate::render::render_years;

use super::Session;

pub fn run(session: &Session) -> Result<()> {
    let Some(selected) = session.year(None)? else {
        println!("{}", NO_MATCHES.dimmed());
        return Ok(());
    };
    println!("{}", render_years(session.store.years(), selected));
    Ok(())
}
