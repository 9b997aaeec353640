use std::collections::VecDeque;

use crate::error::TopologyError;
use crate::geometry::Curve;
use crate::topology::{AvailableEndpoints, Consumed, EndpointId, EquivalencePairing, PointTable};

/// Walks the pairing and emits every maximal chain of segments.
///
/// Consumes `pairing` and `available` destructively. Each entry is removed
/// exactly once; a second removal means a location is shared by more than two
/// endpoints, and the whole assembly is abandoned.
///
/// # Errors
///
/// Returns [`TopologyError::ConsumedTwice`] with the coordinates of the first
/// endpoint found to be reused. No curves are returned in that case.
pub fn assemble(
    table: &PointTable,
    pairing: &mut EquivalencePairing,
    available: &mut AvailableEndpoints,
) -> Result<Vec<Curve>, TopologyError> {
    let mut curves = Vec::new();
    while let Some(seed) = available.pop() {
        let curve = trace_chain(seed, pairing, available)
            .map_err(|consumed| consumed.into_error(table))?
            .into_curve(table);
        tracing::trace!(
            points = curve.len(),
            closed = curve.is_closed(),
            "emitted curve"
        );
        curves.push(curve);
    }
    Ok(curves)
}

/// Grows one chain from `seed` to the right, then to the left unless closed.
fn trace_chain(
    seed: EndpointId,
    pairing: &mut EquivalencePairing,
    available: &mut AvailableEndpoints,
) -> Result<Chain, Consumed> {
    let sibling = seed.sibling();
    available.remove(sibling)?;

    let mut chain = if seed.is_start() {
        Chain::seed(seed, sibling)
    } else {
        Chain::seed(sibling, seed)
    };

    chain.closed = chain.extend_right(pairing, available)?;
    if !chain.closed {
        chain.extend_left(pairing, available)?;
    }
    Ok(chain)
}

/// A curve under construction, stored as the endpoint id of each point.
#[derive(Debug)]
struct Chain {
    endpoints: VecDeque<EndpointId>,
    segments: VecDeque<usize>,
    origin: EndpointId,
    left: EndpointId,
    right: EndpointId,
    closed: bool,
}

impl Chain {
    fn seed(left: EndpointId, right: EndpointId) -> Self {
        Self {
            endpoints: VecDeque::from([left, right]),
            segments: VecDeque::from([left.segment()]),
            origin: left,
            left,
            right,
            closed: false,
        }
    }

    /// Appends segments at the right frontier. Returns `true` if the chain
    /// closed back onto its origin.
    fn extend_right(
        &mut self,
        pairing: &mut EquivalencePairing,
        available: &mut AvailableEndpoints,
    ) -> Result<bool, Consumed> {
        while let Some(partner) = pairing.take_partner(self.right)? {
            if partner == self.origin {
                return Ok(true);
            }
            available.remove(partner)?;

            let next = partner.sibling();
            self.endpoints.push_back(next);
            self.segments.push_back(partner.segment());
            if next == self.origin {
                return Ok(true);
            }
            available.remove(next)?;
            self.right = next;
        }
        Ok(false)
    }

    /// Prepends segments at the left frontier until it has no partner.
    fn extend_left(
        &mut self,
        pairing: &mut EquivalencePairing,
        available: &mut AvailableEndpoints,
    ) -> Result<(), Consumed> {
        while let Some(partner) = pairing.take_partner(self.left)? {
            available.remove(partner)?;

            let next = partner.sibling();
            self.endpoints.push_front(next);
            self.segments.push_front(partner.segment());
            available.remove(next)?;
            self.left = next;
        }
        Ok(())
    }

    fn into_curve(self, table: &PointTable) -> Curve {
        let points = self.endpoints.iter().map(|&id| table.to_point(id)).collect();
        Curve::new(points, self.segments.into(), self.closed)
    }
}
