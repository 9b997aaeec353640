use std::cmp::Ordering;

/// N-dimensional point type. The dimension is fixed per input, not per type.
pub type PointN = nalgebra::DVector<f64>;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Default tolerance for deciding whether two endpoints coincide.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Returns `true` if every axis differs by strictly less than `tolerance`.
///
/// This is a Chebyshev comparison, not a Euclidean one: `(0, 0)` and
/// `(0.9 tol, 0.9 tol)` coincide even though their distance exceeds `tol`.
#[must_use]
pub fn coincident(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < tolerance)
}

/// Lexicographic order over coordinate tuples, axis 0 first.
///
/// `-0.0` and `0.0` compare equal so coincident points stay adjacent. NaN
/// falls back to `total_cmp`, keeping the order total.
#[must_use]
pub fn lexicographic_cmp(a: &[f64], b: &[f64]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.partial_cmp(y).unwrap_or_else(|| x.total_cmp(y)))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_is_strict() {
        assert!(!coincident(&[0.0, 0.0], &[0.5, 0.0], 0.5));
        assert!(coincident(&[0.0, 0.0], &[0.49, -0.49], 0.5));
    }

    #[test]
    fn coincident_uses_every_axis() {
        assert!(!coincident(&[0.0, 0.0, 0.0], &[0.0, 0.0, 1.0], 0.5));
    }

    #[test]
    fn coincident_rejects_mixed_dimensions() {
        assert!(!coincident(&[0.0], &[0.0, 0.0], 0.5));
    }

    #[test]
    fn lexicographic_order_uses_first_axis_first() {
        assert_eq!(lexicographic_cmp(&[1.0, 9.0], &[2.0, 0.0]), Ordering::Less);
        assert_eq!(lexicographic_cmp(&[2.0, 1.0], &[2.0, 0.0]), Ordering::Greater);
        assert_eq!(lexicographic_cmp(&[2.0, 1.0], &[2.0, 1.0]), Ordering::Equal);
    }

    #[test]
    fn signed_zeros_sort_as_equal() {
        assert_eq!(lexicographic_cmp(&[-0.0, 5.0], &[0.0, 5.0]), Ordering::Equal);
        assert_eq!(lexicographic_cmp(&[-0.0, 7.0], &[0.0, 5.0]), Ordering::Greater);
    }

    #[test]
    fn nan_still_has_a_place_in_the_order() {
        assert_eq!(lexicographic_cmp(&[f64::NAN], &[1.0]), Ordering::Greater);
        assert_eq!(lexicographic_cmp(&[1.0], &[f64::NAN]), Ordering::Less);
    }
}
