//! Host data to Muze data mapping
//!
//! The host delivers query results column-major by column id; Muze wants a
//! header row followed by positional rows plus a schema describing every
//! field. This module builds both from a `ChartModel`.
//!
//! ## Value conversion
//!
//! - Date fields arrive as epoch seconds and leave as epoch milliseconds.
//! - Columns with a custom calendar carry their value under `v.s`.
//! - Everything else is passed on as text.
//! - Values that do not coerce to a number become `null`.

mod datum;
mod helpers;
mod mapper;
mod schema;

pub use datum::*;
pub use helpers::*;
pub use mapper::*;
pub use schema::*;
