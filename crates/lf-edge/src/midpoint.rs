use lf_core::BinaryView;

use crate::scan1d::{EdgeKind, ScanDirection, find_edge_in_row};

/// Horizontal centre of the first line band met when scanning row `y` from
/// column `start` in `dir`.
///
/// The exiting edge is searched from the entering edge onward, so for
/// [`ScanDirection::RightToLeft`] the exit lies left of the entry. Either edge
/// missing yields `None`. The centre is the integer mean of the two edges.
pub fn midpoint(img: &BinaryView<'_>, start: usize, y: usize, dir: ScanDirection) -> Option<usize> {
    let enter = find_edge_in_row(img, y, start, dir, EdgeKind::Entering)?;
    let exit = find_edge_in_row(img, y, enter, dir, EdgeKind::Exiting)?;
    Some((enter + exit) / 2)
}

/// [`midpoint`] started from the border column `dir` is anchored at.
pub fn midpoint_from_anchor(img: &BinaryView<'_>, y: usize, dir: ScanDirection) -> Option<usize> {
    let start = dir.anchor_column(img.width())?;
    midpoint(img, start, y, dir)
}
