//! Core engine for the Saudi school calendar.
//!
//! This crate holds everything a front end needs besides drawing:
//! - `store` and `event`: the read-only event dataset
//! - `filter`, `duration`, `countdown`: selection, day counts and live countdowns
//! - `ics` and `schema`: calendar export and JSON-LD structured data
//! - `display`: Arabic presentation text, share links and file names
//! - `view`: per-screen state tying the above together
//! - `config` and `prefs`: configuration and persisted preferences

pub mod config;
pub mod countdown;
pub mod display;
pub mod duration;
pub mod error;
pub mod event;
pub mod filter;
pub mod ics;
pub mod prefs;
pub mod schema;
pub mod store;
pub mod view;

pub use event::{Event, EventKind};
pub use store::EventStore;
