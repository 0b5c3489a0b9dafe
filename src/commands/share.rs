use anyhow::Result;
use owo_colors::OwoColorize;
use taqweem_core::display::{self, NO_EVENT};

use super::{Session, Target};

/// Print the share message and deep link, optionally opening the share target.
pub fn run(session: &Session, target: Target, open_browser: bool) -> Result<()> {
    let Some(event) = target.resolve(session)? else {
        println!("{}", NO_EVENT.dimmed());
        return Ok(());
    };

    let link = display::share_link(&session.config.site_url, event)?;
    let message = display::share_message(event, &link);
    let url = display::whatsapp_url(&message);

    println!("{}\n", message);
    println!("{} {}", "Share:".dimmed(), url);

    if open_browser && let Err(e) = open::that(&url) {
        // Not fatal: the URL is already printed.
        tracing::warn!(error = %e, "could not open share target");
        eprintln!("{}", format!("Could not open browser: {}", e).yellow());
    }

    Ok(())
}
