//! Station identifier type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque station identifier.
///
/// Identifiers are compared and hashed as plain strings. Any structure
/// embedded in the label (such as a line suffix) is never interpreted.
///
/// # Examples
///
/// ```
/// use midpoint_server::domain::StationId;
///
/// let station = StationId::new("Yaksu_3");
/// assert_eq!(station.as_str(), "Yaksu_3");
/// assert_eq!(station, StationId::from("Yaksu_3"));
/// assert_ne!(station, StationId::from("Yaksu_6"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Create a station identifier from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for StationId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

// Lets maps keyed by `StationId` be queried with a `&str`.
impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
