pub mod copy;
pub mod export;
pub mod list;
pub mod meta;
pub mod next;
pub mod schema;
pub mod share;
pub mod theme;
pub mod watch;
pub mod year;
pub mod years;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use taqweem_core::config::TaqweemConfig;
use taqweem_core::prefs::Preferences;
use taqweem_core::store::EventStore;
use taqweem_core::Event;

/// Everything a command needs, loaded once per invocation.
pub struct Session {
    pub config: TaqweemConfig,
    pub prefs: Preferences,
    pub prefs_path: PathBuf,
    pub store: Arc<EventStore>,
}

impl Session {
    pub fn load() -> Result<Self> {
        let config = TaqweemConfig::load().context("Failed to load config")?;
        let store = config.load_store().context("Failed to load events")?;
        let prefs_path = Preferences::path()?;
        let prefs = Preferences::load_from(&prefs_path);

        Ok(Session {
            config,
            prefs,
            prefs_path,
            store: Arc::new(store),
        })
    }

    /// The year to show: an explicit argument, else the saved preference,
    /// else the earliest year in the store. `None` only when the store is
    /// empty.
    pub fn year(&self, year: Option<i32>) -> Result<Option<i32>> {
        match year {
            Some(year) => self.require_year(year).map(Some),
            None => Ok(self.prefs.resolve_year(&self.store)),
        }
    }

    /// An explicitly requested year, which must exist in the store.
    pub fn require_year(&self, year: i32) -> Result<i32> {
        if !self.store.has_year(year) {
            anyhow::bail!("Year {} not found. Available: {}", year, self.available_years());
        }
        Ok(year)
    }

    pub fn event(&self, id: &str) -> Result<&Event> {
        Ok(self.store.get(id)?)
    }

    pub fn save_prefs(&self) -> Result<()> {
        self.prefs
            .save_to(&self.prefs_path)
            .with_context(|| format!("Failed to save {}", self.prefs_path.display()))
    }

    fn available_years(&self) -> String {
        self.store
            .years()
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Which event an action targets: an explicit id or the next event of a year.
pub enum Target {
    Id(String),
    Next { year: Option<i32> },
}

impl Target {
    pub fn from_args(id: Option<String>, next: bool, year: Option<i32>) -> Result<Self> {
        match (id, next) {
            (Some(id), false) => Ok(Target::Id(id)),
            (None, true) => Ok(Target::Next { year }),
            _ => anyhow::bail!("Pass either an event id or --next"),
        }
    }

    /// Resolve to an event. `None` means "no next event", which callers
    /// treat as a no-op.
    pub fn resolve<'a>(&self, session: &'a Session) -> Result<Option<&'a Event>> {
        match self {
            Target::Id(id) => session.event(id).map(Some),
            Target::Next { year } => {
                let Some(year) = session.year(*year)? else {
                    return Ok(None);
                };
                let now = chrono::Utc::now();
                Ok(taqweem_core::countdown::next_event(
                    session.store.events(),
                    year,
                    &now,
                ))
            }
        }
    }
}
