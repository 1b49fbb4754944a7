//! Declaration-emission ordering for directory nodes.

use std::cmp::Ordering;
use std::path::Path;

/// Compare two directory paths for declaration-emission order.
///
/// The generated CMake resolves variable references forward-only, so a
/// directory's declaration must come after the declarations of every
/// subdirectory it references. Rule:
///
/// * if the shorter path is a segment-wise prefix of the longer (the two
///   lie on one ancestor chain), the longer path sorts first;
/// * otherwise plain lexicographic path order, for reproducible output
///   between unrelated subtrees.
///
/// The empty path (the scan root) is a prefix of everything and
/// therefore always sorts last.
pub fn emission_cmp(lhs: &Path, rhs: &Path) -> Ordering {
    let lhs_parts: Vec<_> = lhs.components().collect();
    let rhs_parts: Vec<_> = rhs.components().collect();
    let shared = lhs_parts.len().min(rhs_parts.len());

    if lhs_parts[..shared] == rhs_parts[..shared] {
        // Same ancestor chain: deeper first.
        rhs_parts.len().cmp(&lhs_parts.len())
    } else {
        lhs.cmp(rhs)
    }
}
