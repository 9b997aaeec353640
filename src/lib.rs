//! Reconstructs continuous curves from an unordered collection of line
//! segments.
//!
//! Segments are connected only through endpoints that coincide within a
//! per-axis tolerance. The pipeline runs in three stages:
//!
//! 1. [`topology::PointTable`] flattens the segments into indexed endpoints.
//! 2. [`operations::matching`] pairs endpoints that share a location.
//! 3. [`operations::assembly`] walks the pairs into open and closed curves,
//!    rejecting any location shared by more than two endpoints.
//!
//! ```
//! use curvestitch::{generate_curves, Segment, DEFAULT_TOLERANCE};
//!
//! let square = vec![
//!     Segment::from([[0.0, 0.0], [1.0, 0.0]]),
//!     Segment::from([[1.0, 0.0], [1.0, 1.0]]),
//!     Segment::from([[1.0, 1.0], [0.0, 1.0]]),
//!     Segment::from([[0.0, 1.0], [0.0, 0.0]]),
//! ];
//! let curves = generate_curves(&square, DEFAULT_TOLERANCE)?;
//! assert_eq!(curves.len(), 1);
//! assert!(curves[0].is_closed());
//! # Ok::<(), curvestitch::CurveStitchError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{CurveStitchError, Result};
pub use geometry::{Curve, Segment};
pub use math::DEFAULT_TOLERANCE;
pub use operations::{generate_curves, generate_curves_or_empty, GenerateCurves, MatchStrategy};
