pub mod curve;
pub mod segment;

pub use curve::Curve;
pub use segment::Segment;
