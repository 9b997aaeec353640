pub mod available;
pub mod endpoint;
pub mod pairing;
pub mod point_table;

pub use available::AvailableEndpoints;
pub use endpoint::EndpointId;
pub use pairing::EquivalencePairing;
pub use point_table::PointTable;

use crate::error::TopologyError;

/// An endpoint was looked up after it had already been consumed.
///
/// Raised by the working-state containers; the assembler converts it into a
/// [`TopologyError::ConsumedTwice`] carrying the endpoint's coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumed(pub EndpointId);

impl Consumed {
    /// Resolves the endpoint against `table` into a reportable error.
    #[must_use]
    pub fn into_error(self, table: &PointTable) -> TopologyError {
        TopologyError::ConsumedTwice {
            point: table.point(self.0).to_vec(),
        }
    }
}
