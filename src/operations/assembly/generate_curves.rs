use crate::error::{InputError, Result};
use crate::geometry::{Curve, Segment};
use crate::math::DEFAULT_TOLERANCE;
use crate::operations::matching::{match_endpoints, MatchStrategy};
use crate::topology::{AvailableEndpoints, PointTable};

use super::chain::assemble;

enum Input {
    Segments(Vec<Segment>),
    Table(PointTable),
}

/// Reconstructs open and closed curves from unordered line segments.
///
/// Segments connect only through endpoints that coincide within the
/// tolerance on every axis. Each location may be shared by at most two
/// endpoints.
pub struct GenerateCurves {
    input: Input,
    tolerance: f64,
    strategy: MatchStrategy,
}

impl GenerateCurves {
    /// Creates a new `GenerateCurves` operation over `segments`.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self::with_input(Input::Segments(segments))
    }

    /// Creates a new `GenerateCurves` operation over an already built table.
    #[must_use]
    pub fn from_table(table: PointTable) -> Self {
        Self::with_input(Input::Table(table))
    }

    fn with_input(input: Input) -> Self {
        Self {
            input,
            tolerance: DEFAULT_TOLERANCE,
            strategy: MatchStrategy::default(),
        }
    }

    /// Sets the per-axis coincidence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets how coincident endpoints are discovered.
    #[must_use]
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Executes the operation, returning every maximal curve.
    ///
    /// The order of the returned curves and the direction each one is
    /// traversed in depend on the input order; the partition of segments into
    /// curves does not.
    ///
    /// # Errors
    ///
    /// Returns [`CurveStitchError::Input`](crate::CurveStitchError::Input) if
    /// the tolerance is not finite and positive or the points do not share one
    /// dimension, and [`CurveStitchError::Topology`](crate::CurveStitchError::Topology)
    /// if a location is shared by more than two segment endpoints. No partial
    /// result is returned.
    pub fn execute(&self) -> Result<Vec<Curve>> {
        validate_tolerance(self.tolerance)?;
        let built;
        let table = match &self.input {
            Input::Segments(segments) => {
                built = PointTable::from_segments(segments)?;
                &built
            }
            Input::Table(table) => table,
        };
        run(table, self.tolerance, self.strategy)
    }
}

/// Reconstructs curves from `segments` with the default matching strategy.
///
/// # Errors
///
/// See [`GenerateCurves::execute`].
pub fn generate_curves(segments: &[Segment], tolerance: f64) -> Result<Vec<Curve>> {
    validate_tolerance(tolerance)?;
    let table = PointTable::from_segments(segments)?;
    run(&table, tolerance, MatchStrategy::default())
}

/// Like [`generate_curves`], but reports failure as an empty list.
///
/// The cause, including the coordinates of an over-shared location, is
/// logged at `warn` level.
#[must_use]
pub fn generate_curves_or_empty(segments: &[Segment], tolerance: f64) -> Vec<Curve> {
    match generate_curves(segments, tolerance) {
        Ok(curves) => curves,
        Err(err) => {
            tracing::warn!(point = ?err.offending_point(), "{err}");
            Vec::new()
        }
    }
}

fn validate_tolerance(tolerance: f64) -> std::result::Result<(), InputError> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(InputError::InvalidTolerance(tolerance))
    }
}

fn run(table: &PointTable, tolerance: f64, strategy: MatchStrategy) -> Result<Vec<Curve>> {
    tracing::debug!(
        segments = table.segment_count(),
        dimension = table.dimension(),
        tolerance,
        "generating curves"
    );
    let mut pairing = match_endpoints(table, tolerance, strategy)?;
    let mut available = AvailableEndpoints::new(table.len());
    let curves = assemble(table, &mut pairing, &mut available)?;
    tracing::debug!(curves = curves.len(), "assembled curves");
    Ok(curves)
}
