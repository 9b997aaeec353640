use std::fmt;

/// Index of one segment terminus in the point table.
///
/// Segment `i` owns endpoints `2i` (start) and `2i + 1` (end). Two endpoints at
/// the same physical location stay distinct ids until the matcher pairs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndpointId(pub usize);

impl EndpointId {
    /// Returns the raw index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the index of the segment owning this endpoint.
    #[must_use]
    pub fn segment(self) -> usize {
        self.0 / 2
    }

    /// Returns the other terminus of the same segment.
    #[must_use]
    pub fn sibling(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Returns `true` for the first point of a segment.
    #[must_use]
    pub fn is_start(self) -> bool {
        self.0 % 2 == 0
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
