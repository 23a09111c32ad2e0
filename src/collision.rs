/// Axis-aligned overlap tests.  Both inputs must be in the same frame
/// (world or camera-relative).

use crate::entities::ColliderBox;

/// Strict overlap: boxes that only share an edge do not collide.
pub fn overlaps(a: &ColliderBox, b: &ColliderBox) -> bool {
    a.left < b.left + b.width
        && b.left < a.left + a.width
        && a.top < b.top + b.height
        && b.top < a.top + a.height
}

/// True iff any box in `a` overlaps any box in `b`.
pub fn has_collided(a: &[ColliderBox], b: &[ColliderBox]) -> bool {
    a.iter().any(|x| b.iter().any(|y| overlaps(x, y)))
}
