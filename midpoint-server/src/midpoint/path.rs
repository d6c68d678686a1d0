//! Route reconstruction from predecessor chains.

use std::collections::HashMap;

use crate::domain::StationId;

/// Previous station on the shortest path to each reached station.
///
/// The start station and unreached stations have no predecessor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predecessors(HashMap<StationId, StationId>);

impl Predecessors {
    /// Create an empty predecessor map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `previous` as the predecessor of `station`.
    pub fn set(&mut self, station: StationId, previous: StationId) {
        self.0.insert(station, previous);
    }

    /// Predecessor of a station, if any.
    pub fn get(&self, station: &str) -> Option<&StationId> {
        self.0.get(station)
    }

    /// Number of stations that have a predecessor.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no station has a predecessor.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reconstruct the route to `target`, ordered from the start to the target.
///
/// Walks the chain back until a station without predecessor. For a target
/// that was never reached the result is exactly `[target]`.
pub fn reconstruct_path(predecessors: &Predecessors, target: &StationId) -> Vec<StationId> {
    let mut path = vec![target.clone()];
    let mut current = target;

    // Chains come from a shortest path tree, so they always terminate
    while let Some(previous) = predecessors.get(current.as_str()) {
        path.push(previous.clone());
        current = previous;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StationId {
        StationId::from(s)
    }

    fn chain(links: &[(&str, &str)]) -> Predecessors {
        let mut preds = Predecessors::new();
        for (station, previous) in links {
            preds.set(id(station), id(previous));
        }
        preds
    }

    #[test]
    fn start_is_single_station() {
        let preds = chain(&[("B", "A")]);
        assert_eq!(reconstruct_path(&preds, &id("A")), vec![id("A")]);
    }

    #[test]
    fn follows_chain_back_to_start() {
        let preds = chain(&[("B", "A"), ("C", "B"), ("D", "C")]);
        assert_eq!(
            reconstruct_path(&preds, &id("D")),
            vec![id("A"), id("B"), id("C"), id("D")]
        );
    }

    #[test]
    fn unreached_target_is_single_station() {
        let preds = chain(&[("B", "A")]);
        assert_eq!(reconstruct_path(&preds, &id("Z")), vec![id("Z")]);
        assert_eq!(reconstruct_path(&Predecessors::new(), &id("Q")), vec![id("Q")]);
    }

    #[test]
    fn branching_tree() {
        let preds = chain(&[("B", "A"), ("C", "A"), ("D", "C")]);
        assert_eq!(reconstruct_path(&preds, &id("B")), vec![id("A"), id("B")]);
        assert_eq!(
            reconstruct_path(&preds, &id("D")),
            vec![id("A"), id("C"), id("D")]
        );
        assert_eq!(preds.len(), 3);
        assert!(!preds.is_empty());
    }
}
