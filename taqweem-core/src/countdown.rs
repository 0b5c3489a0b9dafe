//! Live countdowns to event starts.
//!
//! Each tracked event is a [`CountdownTask`]: a spawned tokio task that
//! ticks once per second and publishes its label on its own `watch`
//! channel. A task only ever writes to its own channel, so no locking is
//! needed. Once the event has started the task publishes the fixed
//! "started" label and exits.
//!
//! [`CountdownBoard`] owns every task for one rendered view and tears all
//! of them down before a new set is created.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::display::day_label;
use crate::duration::{Breakdown, breakdown};
use crate::event::Event;

/// Interval between countdown refreshes.
pub const TICK: Duration = Duration::from_secs(1);

pub const STARTED_LABEL: &str = "بدأت";
const STARTS_IN_PREFIX: &str = "يبدأ بعد: ";

/// Where an event stands relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Not started yet; carries the time remaining.
    Pending(Breakdown),
    Started,
}

impl CountdownState {
    pub fn at(start: &DateTime<FixedOffset>, now: &DateTime<Utc>) -> Self {
        let remaining_ms = start.timestamp_millis() - now.timestamp_millis();
        if remaining_ms <= 0 {
            CountdownState::Started
        } else {
            CountdownState::Pending(breakdown(remaining_ms))
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, CountdownState::Started)
    }

    pub fn label(&self, style: CountdownStyle) -> String {
        match self {
            CountdownState::Started => STARTED_LABEL.to_string(),
            CountdownState::Pending(b) => {
                let clock = format!(
                    "{} {} {:02}:{:02}:{:02}",
                    b.days,
                    day_label(b.days),
                    b.hours,
                    b.minutes,
                    b.seconds
                );
                match style {
                    CountdownStyle::Card => format!("{STARTS_IN_PREFIX}{clock}"),
                    CountdownStyle::Widget => clock,
                }
            }
        }
    }
}

/// Event cards prefix the remaining time; the next-event widget does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStyle {
    Card,
    Widget,
}

/// The soonest event of `year` that starts strictly after `now`.
///
/// Falls back to the year's first event in store order when nothing is
/// upcoming, and to `None` when the year has no events at all.
pub fn next_event<'a>(events: &'a [Event], year: i32, now: &DateTime<Utc>) -> Option<&'a Event> {
    let mut of_year = events.iter().filter(|e| e.year == year).peekable();
    let first = *of_year.peek()?;

    of_year
        .filter(|e| e.gregorian_start > *now)
        .min_by_key(|e| e.gregorian_start)
        .or(Some(first))
}

/// One running countdown.
///
/// Dropping the task aborts it.
#[derive(Debug)]
pub struct CountdownTask {
    event_id: String,
    label: watch::Receiver<String>,
    /// `None` when the event had already started at spawn time.
    handle: Option<JoinHandle<()>>,
}

impl CountdownTask {
    /// Publish the current label immediately, then refresh it every [`TICK`].
    ///
    /// `now` anchors wall-clock time; later ticks advance it by the
    /// monotonic time elapsed since spawning. Must be called inside a
    /// tokio runtime.
    pub fn spawn(event: &Event, style: CountdownStyle, now: DateTime<Utc>) -> Self {
        let start = event.gregorian_start;
        let initial = CountdownState::at(&start, &now);
        let (tx, rx) = watch::channel(initial.label(style));

        let spawned_at = Instant::now();
        let handle = (!initial.is_started())
            .then(|| tokio::spawn(run_countdown(start, style, now, spawned_at, tx)));

        CountdownTask {
            event_id: event.id.clone(),
            label: rx,
            handle,
        }
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// Latest published label.
    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    /// A receiver that observes every label update.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.label.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    pub fn cancel(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl Drop for CountdownTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_countdown(
    start: DateTime<FixedOffset>,
    style: CountdownStyle,
    anchor: DateTime<Utc>,
    spawned_at: Instant,
    tx: watch::Sender<String>,
) {
    let mut ticks = tokio::time::interval_at(spawned_at + TICK, TICK);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticks.tick().await;

        let elapsed =
            chrono::Duration::from_std(spawned_at.elapsed()).unwrap_or(chrono::Duration::zero());
        let state = CountdownState::at(&start, &(anchor + elapsed));

        if tx.send(state.label(style)).is_err() || state.is_started() {
            break;
        }
    }
}

/// Every countdown belonging to one rendered view: one per visible card
/// plus an optional next-event widget.
#[derive(Debug, Default)]
pub struct CountdownBoard {
    cards: Vec<CountdownTask>,
    widget: Option<CountdownTask>,
}

impl CountdownBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel all running cards and start one per event in `events`.
    pub fn replace_cards<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a Event>,
        now: DateTime<Utc>,
    ) {
        self.cancel_cards();
        self.cards = events
            .into_iter()
            .map(|event| CountdownTask::spawn(event, CountdownStyle::Card, now))
            .collect();
        tracing::debug!(tasks = self.cards.len(), "countdown cards replaced");
    }

    /// Cancel the widget countdown and, if given an event, start a new one.
    pub fn replace_widget(&mut self, event: Option<&Event>, now: DateTime<Utc>) {
        if let Some(old) = self.widget.take() {
            old.cancel();
        }
        self.widget = event.map(|e| CountdownTask::spawn(e, CountdownStyle::Widget, now));
    }

    pub fn cards(&self) -> &[CountdownTask] {
        &self.cards
    }

    pub fn widget(&self) -> Option<&CountdownTask> {
        self.widget.as_ref()
    }

    pub fn card_label(&self, event_id: &str) -> Option<String> {
        self.cards
            .iter()
            .find(|task| task.event_id() == event_id)
            .map(CountdownTask::label)
    }

    pub fn cancel_all(&mut self) {
        self.cancel_cards();
        if let Some(widget) = self.widget.take() {
            widget.cancel();
        }
    }

    fn cancel_cards(&mut self) {
        for task in self.cards.drain(..) {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::make_event;
    use chrono::Duration as ChronoDuration;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_state_transitions_at_start() {
        let event = make_event("a", 1447, "2025-08-12", "2025-08-12");
        let start = event.gregorian_start;
        let before = start.with_timezone(&Utc) - ChronoDuration::seconds(1);

        assert!(!CountdownState::at(&start, &before).is_started());
        assert!(CountdownState::at(&start, &start.with_timezone(&Utc)).is_started());
    }

    #[test]
    fn test_labels() {
        let one_day = CountdownState::Pending(breakdown(90_061_000));
        assert_eq!(one_day.label(CountdownStyle::Card), "يبدأ بعد: 1 يوم 01:01:01");
        assert_eq!(one_day.label(CountdownStyle::Widget), "1 يوم 01:01:01");

        let many = CountdownState::Pending(breakdown(3 * 86_400_000 + 5_000));
        assert_eq!(many.label(CountdownStyle::Card), "يبدأ بعد: 3 أيام 00:00:05");

        let under_a_day = CountdownState::Pending(breakdown(59_000));
        assert_eq!(under_a_day.label(CountdownStyle::Widget), "0 أيام 00:00:59");

        assert_eq!(CountdownState::Started.label(CountdownStyle::Card), STARTED_LABEL);
        assert_eq!(CountdownState::Started.label(CountdownStyle::Widget), STARTED_LABEL);
    }

    #[test]
    fn test_next_event_picks_earliest_future() {
        let events = vec![
            make_event("late", 1447, "2026-06-25", "2026-06-25"),
            make_event("past", 1447, "2025-08-12", "2025-08-12"),
            make_event("soon", 1447, "2025-11-21", "2025-11-29"),
            make_event("other", 1448, "2025-10-01", "2025-10-01"),
        ];
        let now = utc("2025-09-01T00:00:00Z");
        assert_eq!(next_event(&events, 1447, &now).unwrap().id, "soon");
    }

    #[test]
    fn test_next_event_falls_back_to_first_stored() {
        let events = vec![
            make_event("b", 1447, "2025-09-01", "2025-09-01"),
            make_event("a", 1447, "2025-08-01", "2025-08-01"),
        ];
        let now = utc("2030-01-01T00:00:00Z");
        assert_eq!(next_event(&events, 1447, &now).unwrap().id, "b");
    }

    #[test]
    fn test_next_event_excludes_event_starting_now() {
        let events = vec![
            make_event("now", 1447, "2025-09-01", "2025-09-01"),
            make_event("later", 1447, "2025-09-02", "2025-09-02"),
        ];
        let now = events[0].gregorian_start.with_timezone(&Utc);
        assert_eq!(next_event(&events, 1447, &now).unwrap().id, "later");
    }

    #[test]
    fn test_next_event_for_empty_year() {
        let events = vec![make_event("a", 1447, "2025-09-01", "2025-09-01")];
        let now = utc("2025-01-01T00:00:00Z");
        assert!(next_event(&events, 1450, &now).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_counts_down_then_stops() {
        let event = make_event("a", 1447, "2025-08-12", "2025-08-12");
        let now = event.gregorian_start.with_timezone(&Utc) - ChronoDuration::seconds(3);

        let task = CountdownTask::spawn(&event, CountdownStyle::Card, now);
        let mut rx = task.subscribe();
        assert_eq!(*rx.borrow_and_update(), "يبدأ بعد: 0 أيام 00:00:03");

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "يبدأ بعد: 0 أيام 00:00:02");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "يبدأ بعد: 0 أيام 00:00:01");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), STARTED_LABEL);

        // The task exits after publishing the started label.
        assert!(rx.changed().await.is_err());
        assert_eq!(task.label(), STARTED_LABEL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_measure_from_spawn() {
        let event = make_event("a", 1447, "2025-08-12", "2025-08-12");
        let now = event.gregorian_start.with_timezone(&Utc) - ChronoDuration::seconds(10);

        let task = CountdownTask::spawn(&event, CountdownStyle::Widget, now);
        let mut rx = task.subscribe();
        rx.borrow_and_update();

        // The task is not polled until this advance; its clock still starts at spawn.
        tokio::time::advance(std::time::Duration::from_millis(2500)).await;
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "0 أيام 00:00:07");
    }

    #[tokio::test(start_paused = true)]
    async fn test_started_event_does_not_tick() {
        let event = make_event("a", 1447, "2025-08-12", "2025-08-12");
        let now = event.gregorian_start.with_timezone(&Utc) + ChronoDuration::days(1);

        let task = CountdownTask::spawn(&event, CountdownStyle::Widget, now);
        assert_eq!(task.label(), STARTED_LABEL);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_board_replaces_and_cancels() {
        let events = vec![
            make_event("a", 1447, "2025-08-12", "2025-08-12"),
            make_event("b", 1447, "2025-09-12", "2025-09-12"),
        ];
        let now = utc("2025-08-01T00:00:00Z");

        let mut board = CountdownBoard::new();
        board.replace_cards(&events, now);
        board.replace_widget(events.first(), now);
        assert_eq!(board.cards().len(), 2);
        let old_rx = board.cards()[0].subscribe();

        board.replace_cards(events.iter().skip(1), now);
        assert_eq!(board.cards().len(), 1);
        assert_eq!(board.cards()[0].event_id(), "b");
        assert!(board.card_label("a").is_none());
        assert!(board.card_label("b").unwrap().starts_with("يبدأ بعد: "));

        // The aborted task dropped its sender, so its receiver closes.
        let mut old_rx = old_rx;
        assert!(old_rx.changed().await.is_err());

        board.cancel_all();
        assert!(board.cards().is_empty());
        assert!(board.widget().is_none());
    }
}
