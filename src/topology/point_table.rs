use crate::error::InputError;
use crate::geometry::Segment;
use crate::math::PointN;

use super::EndpointId;

/// Flat table of segment endpoints.
///
/// Endpoint `2i` and `2i + 1` are the start and end of input segment `i`, in
/// input order. Coordinates are stored row-major, `dimension()` values per
/// endpoint. The table is read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointTable {
    dims: usize,
    coords: Vec<f64>,
}

impl PointTable {
    /// Builds the table from segments.
    ///
    /// # Errors
    ///
    /// Returns an error if a point has zero dimensions or its dimension
    /// differs from the first segment's start point.
    pub fn from_segments(segments: &[Segment]) -> Result<Self, InputError> {
        Self::from_rows(
            segments
                .iter()
                .map(|seg| (seg.start.as_slice(), seg.end.as_slice())),
            segments.len(),
        )
    }

    /// Builds the table from nested coordinate lists, one `[start, end]` pair
    /// per segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the points do not all share one non-zero dimension.
    pub fn from_nested(segments: &[[Vec<f64>; 2]]) -> Result<Self, InputError> {
        Self::from_rows(
            segments
                .iter()
                .map(|[start, end]| (start.as_slice(), end.as_slice())),
            segments.len(),
        )
    }

    /// Builds the table from a flat array shaped `[num_segments, 2, dims]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dims` is zero or `data.len()` is not a multiple of
    /// `2 * dims`.
    pub fn from_flat(dims: usize, data: &[f64]) -> Result<Self, InputError> {
        if dims == 0 {
            return Err(InputError::ZeroDimension);
        }
        if data.len() % (2 * dims) != 0 {
            return Err(InputError::RaggedShape {
                len: data.len(),
                dims,
            });
        }
        Ok(Self {
            dims,
            coords: data.to_vec(),
        })
    }

    fn from_rows<'a>(
        rows: impl Iterator<Item = (&'a [f64], &'a [f64])>,
        count: usize,
    ) -> Result<Self, InputError> {
        let mut dims = None;
        let mut coords = Vec::new();

        for (segment, (start, end)) in rows.enumerate() {
            let expected = *dims.get_or_insert(start.len());
            if expected == 0 {
                return Err(InputError::ZeroDimension);
            }
            if coords.is_empty() {
                coords.reserve_exact(count * 2 * expected);
            }
            for point in [start, end] {
                if point.len() != expected {
                    return Err(InputError::DimensionMismatch {
                        segment,
                        expected,
                        found: point.len(),
                    });
                }
                coords.extend_from_slice(point);
            }
        }

        Ok(Self {
            dims: dims.unwrap_or(0),
            coords,
        })
    }

    /// Returns the dimension shared by every point, or `0` for an empty table.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dims
    }

    /// Returns the number of endpoints (twice the segment count).
    #[must_use]
    pub fn len(&self) -> usize {
        if self.dims == 0 {
            0
        } else {
            self.coords.len() / self.dims
        }
    }

    /// Returns `true` if the table holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the number of input segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.len() / 2
    }

    /// Returns the coordinates of an endpoint.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[must_use]
    pub fn point(&self, id: EndpointId) -> &[f64] {
        let offset = id.index() * self.dims;
        &self.coords[offset..offset + self.dims]
    }

    /// Returns an owned copy of an endpoint's coordinates.
    #[must_use]
    pub fn to_point(&self, id: EndpointId) -> PointN {
        PointN::from_column_slice(self.point(id))
    }

    /// Iterates over all endpoint ids in index order.
    pub fn endpoints(&self) -> impl Iterator<Item = EndpointId> {
        (0..self.len()).map(EndpointId)
    }
}
