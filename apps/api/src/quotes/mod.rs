//! Quote catalog: the static quote list plus the daily and random selectors.
//!
//! The catalog is compiled into the binary and never mutated, so selectors
//! hand out `&'static Quote` and need no synchronization.

use chrono::{Datelike, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;

pub mod catalog;
pub mod handlers;

pub use catalog::CATALOG;

/// A single quote. Serialized as `{ "text": ..., "author": ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    pub const fn new(text: &'static str, author: &'static str) -> Self {
        Self { text, author }
    }
}

/// Integer seed for a calendar date: `YYYYMMDD` read as a decimal number.
pub fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Deterministic quote for the given date: `CATALOG[seed mod N]`.
///
/// Stable for the whole day. Not a rotation: an index can repeat before
/// every quote has been shown.
pub fn daily_quote_for(date: NaiveDate) -> &'static Quote {
    let index = daily_seed(date).rem_euclid(CATALOG.len() as i64) as usize;
    &CATALOG[index]
}

/// Quote of the day for the current UTC date.
pub fn daily_quote() -> &'static Quote {
    daily_quote_for(Utc::now().date_naive())
}

/// Uniformly random quote drawn from `rng`.
pub fn random_quote_with<R: Rng + ?Sized>(rng: &mut R) -> &'static Quote {
    &CATALOG[rng.gen_range(0..CATALOG.len())]
}

/// Uniformly random quote using the thread-local RNG.
pub fn random_quote() -> &'static Quote {
    random_quote_with(&mut rand::thread_rng())
}
