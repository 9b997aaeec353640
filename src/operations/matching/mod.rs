mod sorted;
mod spatial;

pub use sorted::match_sorted;
pub use spatial::match_spatial;

use crate::error::TopologyError;
use crate::topology::{EquivalencePairing, PointTable};

/// How coincident endpoints are discovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Sort endpoints lexicographically and pair sort-order neighbours.
    ///
    /// O(P log P). Never fails by itself; a location shared by more than two
    /// endpoints surfaces during assembly.
    #[default]
    SortedAdjacent,
    /// Hash endpoints into a tolerance-sized grid and check every nearby
    /// endpoint. Rejects over-shared locations before assembly starts.
    SpatialHash,
}

/// Builds the equivalence pairing for every endpoint in `table`.
///
/// # Errors
///
/// Only [`MatchStrategy::SpatialHash`] can fail, when an endpoint has more
/// than one partner within tolerance.
pub fn match_endpoints(
    table: &PointTable,
    tolerance: f64,
    strategy: MatchStrategy,
) -> Result<EquivalencePairing, TopologyError> {
    let pairing = match strategy {
        MatchStrategy::SortedAdjacent => match_sorted(table, tolerance),
        MatchStrategy::SpatialHash => match_spatial(table, tolerance)?,
    };
    tracing::debug!(
        endpoints = table.len(),
        pairs = pairing.len(),
        ?strategy,
        "matched endpoints"
    );
    Ok(pairing)
}
