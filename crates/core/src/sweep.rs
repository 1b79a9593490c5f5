//! Line sweep - removes completed rows after a lock.

use arrayvec::ArrayVec;

use crate::arena::Arena;
use crate::types::ARENA_HEIGHT;

/// Rows removed by one sweep, in the coordinates they had before the sweep,
/// bottom-most first. Zero-allocation.
pub type ClearedRows = ArrayVec<u8, ARENA_HEIGHT>;

/// Remove every full row from `arena`.
///
/// Scans from the bottom up. When a row is full it is removed, an empty row
/// is inserted at the top, and the same index is examined again because the
/// row above has just moved into it.
pub fn sweep(arena: &mut Arena) -> ClearedRows {
    let mut cleared = ClearedRows::new();
    let mut y = ARENA_HEIGHT;
    // Each removal shifts the rows above down by one; `shift` maps the
    // current index back to the pre-sweep row.
    let mut shift = 0usize;

    while y > 0 {
        let row = y - 1;
        if arena.is_row_full(row) {
            arena.remove_row(row);
            cleared.push((row - shift) as u8);
            shift += 1;
            continue;
        }
        y -= 1;
    }

    cleared
}
