use crate::math::{coincident, lexicographic_cmp};
use crate::topology::{EndpointId, EquivalencePairing, PointTable};

/// Pairs endpoints that are neighbours in lexicographic order.
///
/// Every endpoint is compared with its predecessor in sorted order, the first
/// wrapping around to the last. Only adjacent coincidences are seen: a
/// location shared by three or more endpoints produces a chain of pairs that
/// the assembler later trips over, this function never fails.
#[must_use]
pub fn match_sorted(table: &PointTable, tolerance: f64) -> EquivalencePairing {
    let mut order: Vec<EndpointId> = table.endpoints().collect();
    order.sort_by(|&a, &b| lexicographic_cmp(table.point(a), table.point(b)));

    let mut pairing = EquivalencePairing::new();
    let n = order.len();
    for (pos, &current) in order.iter().enumerate() {
        let previous = order[(pos + n - 1) % n];
        if coincident(table.point(previous), table.point(current), tolerance) {
            pairing.insert(previous, current);
        }
    }
    pairing
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn pairs_shared_corner() {
        // (0,0)-(1,0) and (1,0)-(1,1) share endpoint 1 and 2.
        let table = PointTable::from_flat(2, &[0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0]).unwrap();
        let pairing = match_sorted(&table, 1e-7);
        assert_eq!(pairing.len(), 1);
        assert_eq!(pairing.partner(EndpointId(1)), Some(EndpointId(2)));
    }

    #[test]
    fn wraparound_compares_last_with_first() {
        // A single degenerate segment: both endpoints coincide.
        let table = PointTable::from_flat(2, &[3.0, 3.0, 3.0, 3.0]).unwrap();
        let pairing = match_sorted(&table, 1e-7);
        assert_eq!(pairing.partner(EndpointId(0)), Some(EndpointId(1)));
        assert_eq!(pairing.partner(EndpointId(1)), Some(EndpointId(0)));
    }

    #[test]
    fn tolerance_is_strict() {
        let table = PointTable::from_flat(1, &[0.0, 1.0, 1.5, 3.0]).unwrap();
        assert!(match_sorted(&table, 0.5).is_empty());
        assert_eq!(match_sorted(&table, 0.5 + 1e-9).len(), 1);
    }

    #[test]
    fn signed_zeros_are_paired() {
        // (3,5)-(-0,5), (0,5)-(3,9), (-0,7)-(-4,7): endpoint 4 at x = -0.0
        // must not split endpoints 1 and 2 in sort order.
        let table = PointTable::from_flat(
            2,
            &[3.0, 5.0, -0.0, 5.0, 0.0, 5.0, 3.0, 9.0, -0.0, 7.0, -4.0, 7.0],
        )
        .unwrap();
        let pairing = match_sorted(&table, 1e-7);
        assert_eq!(pairing.len(), 1);
        assert_eq!(pairing.partner(EndpointId(1)), Some(EndpointId(2)));
    }

    #[test]
    fn three_way_site_produces_chained_pairs() {
        let table = PointTable::from_flat(
            2,
            &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0, 0.0],
        )
        .unwrap();
        let pairing = match_sorted(&table, 1e-7);
        assert_eq!(pairing.len(), 2);
        assert_eq!(pairing.partner(EndpointId(0)), Some(EndpointId(2)));
        assert_eq!(pairing.partner(EndpointId(4)), Some(EndpointId(2)));
    }
}
