//! View state owned by a front end.
//!
//! Holds everything that changes while the calendar is on screen: the
//! selected year, the search query, the events currently shown, the one
//! structured-data document describing them, and the countdown tasks
//! annotating them. Every refresh cancels the previous countdowns before
//! spawning new ones.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::countdown::{self, CountdownBoard};
use crate::error::{TaqweemError, TaqweemResult};
use crate::event::Event;
use crate::filter;
use crate::schema;
use crate::store::EventStore;

#[derive(Debug)]
pub struct CalendarView {
    store: Arc<EventStore>,
    year: Option<i32>,
    query: String,
    visible: Vec<Event>,
    next: Option<Event>,
    structured_data: Option<String>,
    countdowns: CountdownBoard,
}

impl CalendarView {
    /// A view over `store` showing `year` (or nothing when `None`).
    ///
    /// Nothing is selected until the first [`refresh`](Self::refresh).
    pub fn new(store: Arc<EventStore>, year: Option<i32>) -> Self {
        CalendarView {
            store,
            year,
            query: String::new(),
            visible: Vec::new(),
            next: None,
            structured_data: None,
            countdowns: CountdownBoard::new(),
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn set_year(&mut self, year: i32) -> TaqweemResult<()> {
        if !self.store.has_year(year) {
            return Err(TaqweemError::UnknownYear(year));
        }
        self.year = Some(year);
        Ok(())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// True when a non-blank query narrows the year's events.
    pub fn is_filtered(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Re-run selection for the current year and query.
    ///
    /// Cancels every running countdown first, then rebuilds the visible
    /// set, replaces the structured-data document and starts fresh
    /// countdowns for the cards and the next-event widget. Must be called
    /// inside a tokio runtime.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> TaqweemResult<()> {
        self.countdowns.cancel_all();

        let Some(year) = self.year else {
            self.visible.clear();
            self.next = None;
            self.structured_data = Some(schema::to_structured(std::iter::empty())?);
            return Ok(());
        };

        let events = self.store.events();
        self.visible = filter::select(events, year, &self.query)
            .into_iter()
            .cloned()
            .collect();
        self.next = countdown::next_event(events, year, &now).cloned();
        self.structured_data = Some(schema::to_structured(&self.visible)?);

        self.countdowns.replace_cards(&self.visible, now);
        self.countdowns.replace_widget(self.next.as_ref(), now);

        tracing::debug!(
            year,
            query = %self.query,
            visible = self.visible.len(),
            next = self.next.as_ref().map(|e| e.id.as_str()),
            "view refreshed"
        );
        Ok(())
    }

    pub fn visible(&self) -> &[Event] {
        &self.visible
    }

    /// The next-event widget's event; `None` disables share and export.
    pub fn next_event(&self) -> Option<&Event> {
        self.next.as_ref()
    }

    /// The JSON-LD document for the visible events; at most one exists.
    pub fn structured_data(&self) -> Option<&str> {
        self.structured_data.as_deref()
    }

    pub fn countdowns(&self) -> &CountdownBoard {
        &self.countdowns
    }

    /// Tear down every countdown, e.g. when the view is discarded.
    pub fn close(&mut self) {
        self.countdowns.cancel_all();
    }
}
