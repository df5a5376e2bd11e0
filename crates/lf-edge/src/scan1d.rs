use lf_core::{BinaryView, is_line};

use crate::gate::first_confirmed;

/// Which border a scan is anchored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    /// Start at column 0 and step right.
    LeftToRight,
    /// Start at column `width - 1` and step left.
    RightToLeft,
}

impl ScanDirection {
    pub const BOTH: [ScanDirection; 2] = [ScanDirection::LeftToRight, ScanDirection::RightToLeft];

    /// Border column the scan starts from, `None` for a zero-width image.
    pub fn anchor_column(self, width: usize) -> Option<usize> {
        match self {
            Self::LeftToRight => (width > 0).then_some(0),
            Self::RightToLeft => width.checked_sub(1),
        }
    }

    pub fn step(self) -> isize {
        match self {
            Self::LeftToRight => 1,
            Self::RightToLeft => -1,
        }
    }
}

/// Which transition of a line band to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Background to line: match line pixels.
    Entering,
    /// Line to background: match background pixels.
    Exiting,
}

impl EdgeKind {
    #[inline]
    pub fn matches(self, px: u8) -> bool {
        match self {
            Self::Entering => is_line(px),
            Self::Exiting => !is_line(px),
        }
    }
}

/// Scans `line` from `start` in `dir` and returns the first confirmed edge.
///
/// `start` itself is the first pixel examined; a start outside the line
/// yields `None`.
pub fn find_edge(line: &[u8], start: usize, dir: ScanDirection, kind: EdgeKind) -> Option<usize> {
    if start >= line.len() {
        return None;
    }
    let sample = |x: usize| (x, kind.matches(line[x]));
    match dir {
        ScanDirection::LeftToRight => first_confirmed((start..line.len()).map(sample)),
        ScanDirection::RightToLeft => first_confirmed((0..=start).rev().map(sample)),
    }
}

pub fn find_edge_in_row(
    img: &BinaryView<'_>,
    y: usize,
    start: usize,
    dir: ScanDirection,
    kind: EdgeKind,
) -> Option<usize> {
    if y >= img.height() {
        return None;
    }
    find_edge(img.row(y), start, dir, kind)
}

#[cfg(test)]
mod tests {
    use lf_core::BinaryImage;

    use super::{EdgeKind, ScanDirection, find_edge, find_edge_in_row};

    fn row_with_spans(len: usize, spans: &[(usize, usize)]) -> Vec<u8> {
        let mut row = vec![0u8; len];
        for &(x0, x1) in spans {
            row[x0..x1].fill(255);
        }
        row
    }

    #[test]
    fn entering_and_exiting_left_to_right() {
        let row = row_with_spans(64, &[(20, 34)]);
        let enter = find_edge(&row, 0, ScanDirection::LeftToRight, EdgeKind::Entering);
        assert_eq!(enter, Some(20));
        let exit = find_edge(&row, 20, ScanDirection::LeftToRight, EdgeKind::Exiting);
        assert_eq!(exit, Some(34));
    }

    #[test]
    fn entering_and_exiting_right_to_left() {
        let row = row_with_spans(64, &[(20, 34)]);
        let enter = find_edge(&row, 63, ScanDirection::RightToLeft, EdgeKind::Entering);
        assert_eq!(enter, Some(33));
        let exit = find_edge(&row, 33, ScanDirection::RightToLeft, EdgeKind::Exiting);
        assert_eq!(exit, Some(19));
    }

    #[test]
    fn ignores_noise_run_before_line() {
        let row = row_with_spans(80, &[(5, 14), (30, 42)]);
        let enter = find_edge(&row, 0, ScanDirection::LeftToRight, EdgeKind::Entering);
        assert_eq!(enter, Some(30));

        let noise_only = row_with_spans(80, &[(5, 14)]);
        assert_eq!(
            find_edge(&noise_only, 0, ScanDirection::LeftToRight, EdgeKind::Entering),
            None
        );
    }

    #[test]
    fn exiting_edge_needs_background_room() {
        // Line runs off the right border: no confirmed exit.
        let row = row_with_spans(40, &[(30, 40)]);
        assert_eq!(
            find_edge(&row, 30, ScanDirection::LeftToRight, EdgeKind::Exiting),
            None
        );
    }

    #[test]
    fn out_of_range_start_and_row() {
        let row = row_with_spans(16, &[(0, 16)]);
        assert_eq!(
            find_edge(&row, 16, ScanDirection::RightToLeft, EdgeKind::Entering),
            None
        );

        let img = BinaryImage::new_fill(16, 2, 255);
        let view = img.as_view();
        assert_eq!(
            find_edge_in_row(&view, 1, 0, ScanDirection::LeftToRight, EdgeKind::Entering),
            Some(0)
        );
        assert_eq!(
            find_edge_in_row(&view, 2, 0, ScanDirection::LeftToRight, EdgeKind::Entering),
            None
        );
    }

    #[test]
    fn anchor_columns() {
        assert_eq!(ScanDirection::LeftToRight.anchor_column(5), Some(0));
        assert_eq!(ScanDirection::RightToLeft.anchor_column(5), Some(4));
        assert_eq!(ScanDirection::LeftToRight.anchor_column(0), None);
        assert_eq!(ScanDirection::RightToLeft.anchor_column(0), None);
    }
}
