//! Travel time handling.
//!
//! Two distinct types keep edge weights and accumulated distances apart:
//! an [`EdgeWeight`] is the validated cost of traversing a single edge,
//! while a [`TravelTime`] is a shortest-known total that may be infinite
//! when a station cannot be reached.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Error returned when an edge weight is not a finite, non-negative number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid edge weight {value}: {reason}")]
pub struct InvalidWeight {
    value: f64,
    reason: &'static str,
}

impl InvalidWeight {
    fn new(value: f64, reason: &'static str) -> Self {
        Self { value, reason }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Time in minutes to traverse one edge.
///
/// Always finite and non-negative.
///
/// # Examples
///
/// ```
/// use midpoint_server::domain::EdgeWeight;
///
/// assert_eq!(EdgeWeight::new(2.5).unwrap().minutes(), 2.5);
///
/// assert!(EdgeWeight::new(-1.0).is_err());
/// assert!(EdgeWeight::new(f64::NAN).is_err());
/// assert!(EdgeWeight::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EdgeWeight(f64);

impl EdgeWeight {
    /// Validate a weight given in minutes.
    pub fn new(minutes: f64) -> Result<Self, InvalidWeight> {
        if minutes.is_nan() {
            return Err(InvalidWeight::new(minutes, "must be a number"));
        }
        if minutes.is_infinite() {
            return Err(InvalidWeight::new(minutes, "must be finite"));
        }
        if minutes < 0.0 {
            return Err(InvalidWeight::new(minutes, "must not be negative"));
        }
        // Normalise -0.0 so it prints and compares like 0
        Ok(Self(minutes.abs()))
    }

    /// Returns the weight in minutes.
    pub fn minutes(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.0)
    }
}

/// Shortest known travel time in minutes, possibly unreachable.
///
/// Unreachable is represented as positive infinity, which sorts after
/// every finite time and absorbs any added weight.
///
/// # Examples
///
/// ```
/// use midpoint_server::domain::{EdgeWeight, TravelTime};
///
/// let t = TravelTime::ZERO + EdgeWeight::new(4.0).unwrap();
/// assert_eq!(t.minutes(), 4.0);
/// assert!(t.is_reachable());
///
/// let never = TravelTime::UNREACHABLE + EdgeWeight::new(4.0).unwrap();
/// assert!(!never.is_reachable());
/// assert!(t < never);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelTime(f64);

impl TravelTime {
    /// Time at the start station.
    pub const ZERO: Self = Self(0.0);

    /// Time at a station that has not been reached.
    pub const UNREACHABLE: Self = Self(f64::INFINITY);

    /// Returns the time in minutes (`f64::INFINITY` when unreachable).
    pub fn minutes(&self) -> f64 {
        self.0
    }

    /// Returns true if the time is finite.
    pub fn is_reachable(&self) -> bool {
        self.0.is_finite()
    }

    /// Returns the finite time in minutes, or `None` when unreachable.
    pub fn finite_minutes(&self) -> Option<f64> {
        self.is_reachable().then_some(self.0)
    }

    /// Add a flat number of whole minutes, such as a transfer penalty.
    pub fn delayed_by(self, minutes: u32) -> Self {
        Self(self.0 + f64::from(minutes))
    }
}

impl Add<EdgeWeight> for TravelTime {
    type Output = TravelTime;

    fn add(self, weight: EdgeWeight) -> TravelTime {
        TravelTime(self.0 + weight.0)
    }
}

// Both operands are built from finite non-negative weights or infinity,
// so NaN never appears and the order is total.
impl Eq for TravelTime {}

impl PartialOrd for TravelTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TravelTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "{}min", self.0)
        } else {
            f.write_str("unreachable")
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any finite non-negative value is a valid weight
        #[test]
        fn valid_weights_accepted(m in 0.0f64..1e6) {
            prop_assert_eq!(EdgeWeight::new(m).unwrap().minutes(), m);
        }

        /// Negative values are always rejected
        #[test]
        fn negative_weights_rejected(m in -1e6f64..-1e-9) {
            prop_assert!(EdgeWeight::new(m).is_err());
        }

        /// Adding a weight never makes a travel time smaller
        #[test]
        fn addition_is_monotone(base in 0.0f64..1e6, m in 0.0f64..1e6) {
            let start = TravelTime::ZERO + EdgeWeight::new(base).unwrap();
            let next = start + EdgeWeight::new(m).unwrap();
            prop_assert!(start <= next);
        }
    }
}
