use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use taqweem_core::display::NO_EVENT;
use taqweem_core::ics;

use super::{Session, Target};

/// Write an `.ics` file for the target event into `out` (default: current dir).
pub fn run(session: &Session, target: Target, out: Option<PathBuf>) -> Result<()> {
    let Some(event) = target.resolve(session)? else {
        // No next event: nothing to export.
        println!("{}", NO_EVENT.dimmed());
        return Ok(());
    };

    let dir = match out {
        Some(dir) => dir,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };

    let path = ics::write_ics(event, &dir, Utc::now())
        .with_context(|| format!("Failed to write ICS file into {}", dir.display()))?;

    println!("{} {}", "Saved".green(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::session_from_json;

    #[test]
    fn test_next_without_events_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_from_json("[]", dir.path());
        let out = dir.path().join("out");

        run(&session, Target::Next { year: None }, Some(out.clone())).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_export_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_from_json(
            r#"[{"id": "x", "year": 1447, "name": "يوم التأسيس", "type": "foundation_day",
                 "hijriStart": "3/9/1447",
                 "gregorianStart": "2026-02-22T00:00:00+03:00",
                 "gregorianEnd": "2026-02-22T00:00:00+03:00"}]"#,
            dir.path(),
        );

        run(&session, Target::Id("x".into()), Some(dir.path().to_path_buf())).unwrap();
        let ics = std::fs::read_to_string(dir.path().join("يوم_التأسيس.ics")).unwrap();
        assert!(ics.contains("DTEND;VALUE=DATE:20260223"));
    }
}
