//! Domain types for the midpoint engine.
//!
//! Station identifiers are opaque labels. Edge weights are validated at
//! construction time, so code that receives an [`EdgeWeight`] can trust
//! that it is finite and non-negative.

mod station;
mod time;

pub use station::StationId;
pub use time::{EdgeWeight, InvalidWeight, TravelTime};
