use crate::math::PointN;

/// A connected chain of segments reconstructed from the input.
///
/// Holds at least two points. A closed curve repeats its first point at the
/// end, so its point count is always `segment_count() + 1`, exactly like an
/// open one.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<PointN>,
    segments: Vec<usize>,
    closed: bool,
}

impl Curve {
    /// Creates a curve from its points and the input segment indices it was
    /// built from, in traversal order.
    ///
    /// `points.len()` must equal `segments.len() + 1`.
    #[must_use]
    pub(crate) fn new(points: Vec<PointN>, segments: Vec<usize>, closed: bool) -> Self {
        debug_assert_eq!(points.len(), segments.len() + 1);
        Self {
            points,
            segments,
            closed,
        }
    }

    /// Returns the ordered points of the curve.
    #[must_use]
    pub fn points(&self) -> &[PointN] {
        &self.points
    }

    /// Consumes the curve, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<PointN> {
        self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of input segments in this curve.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Input segment indices making up this curve, in traversal order.
    #[must_use]
    pub fn segment_indices(&self) -> &[usize] {
        &self.segments
    }

    /// Returns whether the traversal returned to its starting point.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the first point.
    #[must_use]
    pub fn first(&self) -> &PointN {
        &self.points[0]
    }

    /// Returns the last point.
    #[must_use]
    pub fn last(&self) -> &PointN {
        &self.points[self.points.len() - 1]
    }

    /// Iterates over consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&PointN, &PointN)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Returns the same curve traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().cloned().collect(),
            segments: self.segments.iter().rev().copied().collect(),
            closed: self.closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> PointN {
        PointN::from_column_slice(&[x, y])
    }

    #[test]
    fn open_curve_accessors() {
        let curve = Curve::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)], vec![3, 0], false);
        assert_eq!(curve.len(), 3);
        assert!(!curve.is_empty());
        assert_eq!(curve.segment_count(), 2);
        assert!(!curve.is_closed());
        assert_eq!(curve.first(), &p(0.0, 0.0));
        assert_eq!(curve.last(), &p(1.0, 1.0));
        assert_eq!(curve.segments().count(), 2);
    }

    #[test]
    fn reversed_flips_points_and_segments() {
        let curve = Curve::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)], vec![3, 0], false);
        let rev = curve.reversed();
        assert_eq!(rev.first(), &p(1.0, 1.0));
        assert_eq!(rev.segment_indices(), &[0, 3]);
        assert_eq!(rev.reversed(), curve);
    }
}
