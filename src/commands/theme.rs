use anyhow::Result;
use taqweem_core::prefs::Theme;

use super::Session;

/// Set the theme, or toggle it when no theme is given.
pub fn run(session: &mut Session, theme: Option<String>) -> Result<()> {
    let theme = match theme {
        Some(name) => name.parse::<Theme>()?,
        None => session.prefs.theme.toggled(),
    };

    session.prefs.theme = theme;
    session.save_prefs()?;

    let icon = match theme {
        Theme::Dark => "☀️",
        Theme::Light => "🌙",
    };
    println!("Theme: {} {}", theme, icon);
    Ok(())
}
