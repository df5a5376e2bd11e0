use lf_core::BinaryView;

use crate::gate::first_confirmed;

/// First confirmed line pixel in column `x`, scanning bottom-up.
///
/// Same confirmation rule as the row scans, applied along the column.
/// Returns the row index of the candidate.
pub fn vertical_edge(img: &BinaryView<'_>, x: usize) -> Option<usize> {
    if x >= img.width() {
        return None;
    }
    first_confirmed((0..img.height()).rev().map(|y| (y, img.is_line_at(x, y))))
}
