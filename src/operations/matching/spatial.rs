use std::collections::HashMap;

use crate::error::TopologyError;
use crate::math::coincident;
use crate::topology::{EndpointId, EquivalencePairing, PointTable};

/// Number of leading axes hashed into the grid.
///
/// Points within tolerance on every axis are within tolerance on these, so
/// their cells are neighbours; the full coordinates are compared afterwards.
const GRID_AXES: usize = 3;

type CellKey = [i64; GRID_AXES];

/// Pairs endpoints using a uniform grid with cell size equal to the tolerance.
///
/// The grid is keyed on the first (up to three) axes. Each endpoint is
/// compared against every endpoint in its own and all neighbouring cells, at
/// most 27 of them, so clusters that are not adjacent in any sort order are
/// still found.
///
/// # Errors
///
/// Returns [`TopologyError::SharedLocation`] for the first endpoint (in index
/// order) that has more than one other endpoint within tolerance.
pub fn match_spatial(
    table: &PointTable,
    tolerance: f64,
) -> Result<EquivalencePairing, TopologyError> {
    let grid = SpatialGrid::build(table, tolerance);

    let mut pairing = EquivalencePairing::new();
    for id in table.endpoints() {
        let point = table.point(id);
        let neighbours = grid.neighbours(point, |other| {
            other != id && coincident(point, table.point(other), tolerance)
        });

        match neighbours.as_slice() {
            [] => {}
            [partner] => {
                if id < *partner {
                    pairing.insert(id, *partner);
                }
            }
            many => {
                return Err(TopologyError::SharedLocation {
                    point: point.to_vec(),
                    count: many.len() + 1,
                });
            }
        }
    }
    Ok(pairing)
}

/// Spatial hash of endpoints keyed by integer grid cell.
struct SpatialGrid {
    cell_size: f64,
    axes: usize,
    cells: HashMap<CellKey, Vec<EndpointId>>,
}

impl SpatialGrid {
    fn build(table: &PointTable, cell_size: f64) -> Self {
        let mut grid = Self {
            cell_size,
            axes: table.dimension().min(GRID_AXES),
            cells: HashMap::new(),
        };
        for id in table.endpoints() {
            let key = grid.cell_key(table.point(id));
            grid.cells.entry(key).or_default().push(id);
        }
        grid
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell_key(&self, point: &[f64]) -> CellKey {
        let inv = 1.0 / self.cell_size;
        let mut key = [0; GRID_AXES];
        for (slot, c) in key.iter_mut().zip(&point[..self.axes]) {
            *slot = (c * inv).floor() as i64;
        }
        key
    }

    fn neighbours(
        &self,
        point: &[f64],
        mut accept: impl FnMut(EndpointId) -> bool,
    ) -> Vec<EndpointId> {
        let base = self.cell_key(point);
        let mut found = Vec::new();
        for offset in neighbour_offsets(self.axes) {
            let mut key = base;
            for (slot, o) in key.iter_mut().zip(offset) {
                *slot = slot.saturating_add(o);
            }
            if let Some(bucket) = self.cells.get(&key) {
                found.extend(bucket.iter().copied().filter(|&other| accept(other)));
            }
        }
        found
    }
}

/// All offsets in `{-1, 0, 1}^axes`, zero beyond `axes`.
fn neighbour_offsets(axes: usize) -> impl Iterator<Item = CellKey> {
    let count = 3usize.pow(u32::try_from(axes.min(GRID_AXES)).unwrap_or(0));
    (0..count).map(move |mut code| {
        let mut offset = [0; GRID_AXES];
        for slot in offset.iter_mut().take(axes) {
            *slot = [-1, 0, 1][code % 3];
            code /= 3;
        }
        offset
    })
}
