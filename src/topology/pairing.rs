use std::collections::HashMap;

use super::{Consumed, EndpointId};

/// Symmetric "same location" relation between endpoint ids.
///
/// Each pair is stored once in `forward` (predecessor to successor, in the
/// matcher's order) and once in `backward` (successor to predecessor), so a
/// lookup from either member is O(1). Taking a partner removes both
/// directions at once.
#[derive(Debug, Clone, Default)]
pub struct EquivalencePairing {
    forward: HashMap<EndpointId, EndpointId>,
    backward: HashMap<EndpointId, EndpointId>,
}

impl EquivalencePairing {
    /// Creates an empty pairing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `predecessor` and `successor` denote the same location.
    pub fn insert(&mut self, predecessor: EndpointId, successor: EndpointId) {
        self.forward.insert(predecessor, successor);
        self.backward.insert(successor, predecessor);
    }

    /// Returns the partner of `id` without consuming the pair.
    #[cfg(test)]
    pub(crate) fn partner(&self, id: EndpointId) -> Option<EndpointId> {
        self.forward
            .get(&id)
            .or_else(|| self.backward.get(&id))
            .copied()
    }

    /// Removes the pair containing `id` and returns the other member.
    ///
    /// The forward direction is consulted first. Returns `Ok(None)` when `id`
    /// is unpaired.
    ///
    /// # Errors
    ///
    /// Returns [`Consumed`] naming the partner if its mirror entry has
    /// already been removed by an earlier traversal.
    pub fn take_partner(&mut self, id: EndpointId) -> Result<Option<EndpointId>, Consumed> {
        if let Some(partner) = self.forward.remove(&id) {
            self.backward.remove(&partner).ok_or(Consumed(partner))?;
            return Ok(Some(partner));
        }
        if let Some(partner) = self.backward.remove(&id) {
            self.forward.remove(&partner).ok_or(Consumed(partner))?;
            return Ok(Some(partner));
        }
        Ok(None)
    }

    /// Returns the number of pairs still available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Returns `true` if no pairs remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn lookup_works_from_either_side() {
        let mut pairing = EquivalencePairing::new();
        pairing.insert(EndpointId(1), EndpointId(2));
        assert_eq!(pairing.partner(EndpointId(1)), Some(EndpointId(2)));
        assert_eq!(pairing.partner(EndpointId(2)), Some(EndpointId(1)));
        assert_eq!(pairing.partner(EndpointId(3)), None);
    }

    #[test]
    fn take_removes_both_directions() {
        let mut pairing = EquivalencePairing::new();
        pairing.insert(EndpointId(1), EndpointId(2));
        assert_eq!(pairing.take_partner(EndpointId(2)).unwrap(), Some(EndpointId(1)));
        assert!(pairing.is_empty());
        assert_eq!(pairing.take_partner(EndpointId(1)).unwrap(), None);
    }

    #[test]
    fn chained_pairs_prefer_forward() {
        // Three coincident endpoints sorted as 0, 2, 4.
        let mut pairing = EquivalencePairing::new();
        pairing.insert(EndpointId(0), EndpointId(2));
        pairing.insert(EndpointId(2), EndpointId(4));
        assert_eq!(pairing.take_partner(EndpointId(2)).unwrap(), Some(EndpointId(4)));
        assert_eq!(pairing.take_partner(EndpointId(0)).unwrap(), Some(EndpointId(2)));
        assert!(pairing.is_empty());
    }
}
