//! Plurality vote over a ranked neighbor list.

use crate::points::{ClassId, LabeledPoint, MAX_CLASSES};

/// Resolve a nearest-first neighbor sequence into a single label.
///
/// The label with the highest occurrence count wins. Ties are broken in favor
/// of the label whose first occurrence sits earliest in the sequence, i.e.
/// the closest representative wins a split vote. The counting must respect
/// the sequence order, which is why this scans the slice instead of draining
/// a hash map.
///
/// Returns `None` for an empty sequence; the caller leaves that cell
/// unpainted.
pub fn resolve(neighbors: &[LabeledPoint]) -> Option<ClassId> {
    if neighbors.is_empty() {
        return None;
    }

    let mut counts = [0usize; MAX_CLASSES];
    for neighbor in neighbors {
        if neighbor.label < MAX_CLASSES {
            counts[neighbor.label] += 1;
        }
    }

    let best = counts.iter().copied().max().unwrap_or(0);

    // first label in nearest-first order that carries the winning count
    neighbors
        .iter()
        .map(|n| n.label)
        .find(|&label| label < MAX_CLASSES && counts[label] == best)
}
