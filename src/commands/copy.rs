use anyhow::Result;
use owo_colors::OwoColorize;
use taqweem_core::display::copy_text;

use super::Session;

const COPIED: &str = "تم النسخ إلى الحافظة";
const COPY_FAILED: &str = "حدث خطأ أثناء النسخ";

/// Copy an event's dates to the clipboard.
///
/// Clipboard failures are reported, never fatal: the text block is printed
/// instead so it can still be copied by hand.
pub fn run(session: &Session, id: &str) -> Result<()> {
    let event = session.event(id)?;
    let text = copy_text(event);

    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(&text));
    if let Err(e) = &result {
        tracing::warn!(error = %e, "could not write clipboard");
        println!("{}", text);
    }
    println!("{}", notice(&result));

    Ok(())
}

fn notice(result: &Result<(), arboard::Error>) -> String {
    match result {
        Ok(()) => COPIED.green().to_string(),
        Err(_) => COPY_FAILED.yellow().to_string(),
    }
}
