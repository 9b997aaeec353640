use super::{Consumed, EndpointId};

/// Endpoints not yet consumed into an emitted curve.
///
/// Shrinks monotonically. `pop` hands out the highest remaining index first,
/// which keeps traversal order reproducible.
#[derive(Debug, Clone)]
pub struct AvailableEndpoints {
    present: Vec<bool>,
    remaining: usize,
    cursor: usize,
}

impl AvailableEndpoints {
    /// Creates a set holding endpoints `0..len`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            present: vec![true; len],
            remaining: len,
            cursor: len,
        }
    }

    /// Removes and returns the highest-index available endpoint.
    pub fn pop(&mut self) -> Option<EndpointId> {
        while self.cursor > 0 {
            self.cursor -= 1;
            if std::mem::take(&mut self.present[self.cursor]) {
                self.remaining -= 1;
                return Some(EndpointId(self.cursor));
            }
        }
        None
    }

    /// Removes `id` from the set.
    ///
    /// # Errors
    ///
    /// Returns [`Consumed`] if `id` was already removed or is out of range.
    pub fn remove(&mut self, id: EndpointId) -> Result<(), Consumed> {
        match self.present.get_mut(id.index()) {
            Some(slot) if *slot => {
                *slot = false;
                self.remaining -= 1;
                Ok(())
            }
            _ => Err(Consumed(id)),
        }
    }

    /// Returns the number of endpoints still available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// Returns `true` once every endpoint has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_yields_highest_first() {
        let mut set = AvailableEndpoints::new(4);
        assert_eq!(set.pop(), Some(EndpointId(3)));
        assert_eq!(set.remove(EndpointId(2)), Ok(()));
        assert_eq!(set.pop(), Some(EndpointId(1)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.pop(), Some(EndpointId(0)));
        assert_eq!(set.pop(), None);
        assert!(set.is_empty());
    }

    #[test]
    fn second_removal_fails() {
        let mut set = AvailableEndpoints::new(2);
        assert_eq!(set.remove(EndpointId(0)), Ok(()));
        assert_eq!(set.remove(EndpointId(0)), Err(Consumed(EndpointId(0))));
        assert_eq!(set.remove(EndpointId(7)), Err(Consumed(EndpointId(7))));
        assert_eq!(set.len(), 1);
    }
}
