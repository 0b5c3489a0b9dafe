//! ICS export.
//!
//! Events are exported as all-day VEVENTs following RFC 5545, so DTEND is
//! exclusive.

mod generate;

pub use generate::{LOCATION, PRODID, UID_DOMAIN, all_day_end, generate_ics, write_ics};
