use crate::math::{Point2, Point3, PointN};

/// A straight line segment between two n-dimensional points.
///
/// Segments carry no identity beyond their position in the input sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: PointN,
    pub end: PointN,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: PointN, end: PointN) -> Self {
        Self { start, end }
    }

    /// Creates a segment from two coordinate slices.
    #[must_use]
    pub fn from_slices(start: &[f64], end: &[f64]) -> Self {
        Self {
            start: PointN::from_column_slice(start),
            end: PointN::from_column_slice(end),
        }
    }

    /// Creates a 2D segment.
    #[must_use]
    pub fn from_points2(start: Point2, end: Point2) -> Self {
        Self::from_slices(start.coords.as_slice(), end.coords.as_slice())
    }

    /// Creates a 3D segment.
    #[must_use]
    pub fn from_points3(start: Point3, end: Point3) -> Self {
        Self::from_slices(start.coords.as_slice(), end.coords.as_slice())
    }

    /// Returns the dimension of the start point.
    ///
    /// A well-formed segment has the same dimension at both ends; the point
    /// registry rejects segments where they differ.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.start.len()
    }

    /// Returns the segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
        }
    }
}

impl From<(Point2, Point2)> for Segment {
    fn from((start, end): (Point2, Point2)) -> Self {
        Self::from_points2(start, end)
    }
}

impl From<(Point3, Point3)> for Segment {
    fn from((start, end): (Point3, Point3)) -> Self {
        Self::from_points3(start, end)
    }
}

impl From<[[f64; 2]; 2]> for Segment {
    fn from([start, end]: [[f64; 2]; 2]) -> Self {
        Self::from_slices(&start, &end)
    }
}

impl From<[[f64; 3]; 2]> for Segment {
    fn from([start, end]: [[f64; 3]; 2]) -> Self {
        Self::from_slices(&start, &end)
    }
}
