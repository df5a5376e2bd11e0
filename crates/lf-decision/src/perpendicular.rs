use lf_core::BinaryView;
use lf_edge::vertical_edge;

/// Outermost columns with a confirmed bottom-up edge, as `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingEdges {
    pub left: (usize, usize),
    pub right: (usize, usize),
}

/// Leftmost and rightmost columns carrying a vertical edge. The right scan
/// stops before column 0.
pub fn crossing_edges(img: &BinaryView<'_>) -> Option<CrossingEdges> {
    let w = img.width();
    let left = (0..w).find_map(|x| vertical_edge(img, x).map(|y| (x, y)))?;
    let right = (1..w)
        .rev()
        .find_map(|x| vertical_edge(img, x).map(|y| (x, y)))?;
    Some(CrossingEdges { left, right })
}

/// Detects a wide, level band across the field of view (a stop line).
///
/// True when both outer edges exist, their rows differ by less than
/// `height / 10` and their columns by more than `width / 10` (integer
/// division). Two edges both at row 0 are treated as no edges.
pub fn is_perpendicular(img: &BinaryView<'_>) -> bool {
    let Some(CrossingEdges {
        left: (i, left_row),
        right: (j, right_row),
    }) = crossing_edges(img)
    else {
        return false;
    };
    if left_row == 0 && right_row == 0 {
        return false;
    }

    left_row.abs_diff(right_row) < img.height() / 10 && i.abs_diff(j) > img.width() / 10
}
