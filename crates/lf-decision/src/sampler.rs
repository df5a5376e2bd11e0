use lf_core::BinaryView;
use lf_edge::{EdgeKind, ScanDirection, find_edge_in_row, midpoint};
use log::debug;

use crate::config::DecisionConfig;

/// Largest change, in degrees, between the running angle and a new slope
/// sample for the sample to be folded in.
pub const MAX_ANGLE_JUMP_DEG: f64 = 90.0;

/// Lowest confirmed line point of a scan: the slope reference origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEstimate {
    pub direction: ScanDirection,
    /// Smoothed line angle from the image's vertical axis, rounded to whole
    /// degrees. Positive when the line leans right going up the image.
    pub angle_deg: i32,
    pub valid_samples: usize,
    pub anchor: Option<Anchor>,
}

impl LineEstimate {
    /// Result for a scan that found nothing to measure. Angle 0 here is not a
    /// reading.
    pub fn no_line(direction: ScanDirection) -> Self {
        Self {
            direction,
            angle_deg: 0,
            valid_samples: 0,
            anchor: None,
        }
    }

    pub fn has_line(&self) -> bool {
        self.anchor.is_some() && self.valid_samples > 0
    }
}

/// Exponentially smoothed angle, local to one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningAngle {
    current: f64,
    accepted: usize,
}

impl RunningAngle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `angle` (radians) in with weight `alpha`. Samples that jump
    /// [`MAX_ANGLE_JUMP_DEG`] or more away from the current estimate leave it
    /// untouched and are not counted.
    pub fn fold(&mut self, angle: f64, alpha: f64) -> bool {
        if (self.current - angle).abs().to_degrees() < MAX_ANGLE_JUMP_DEG {
            self.current = alpha * angle + (1.0 - alpha) * self.current;
            self.accepted += 1;
            true
        } else {
            false
        }
    }

    pub fn radians(&self) -> f64 {
        self.current
    }

    pub fn degrees(&self) -> i32 {
        self.current.to_degrees().round() as i32
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

/// Lowest row (excluding row 0) with a confirmed entering edge when scanning
/// from the border `dir` is anchored at.
pub fn find_anchor_row(img: &BinaryView<'_>, dir: ScanDirection) -> Option<usize> {
    let start = dir.anchor_column(img.width())?;
    (1..img.height())
        .rev()
        .find(|&y| find_edge_in_row(img, y, start, dir, EdgeKind::Entering).is_some())
}

/// Estimates the line angle by walking up from the anchor row.
///
/// Rows `anchor - d` for `d in 1..max_samples` (stopping before row 0) are
/// probed for a band midpoint; each one found gives a slope against the
/// anchor midpoint that is folded into a [`RunningAngle`].
pub fn sample_angle(
    img: &BinaryView<'_>,
    dir: ScanDirection,
    max_samples: usize,
    cfg: &DecisionConfig,
) -> LineEstimate {
    let Some(start) = dir.anchor_column(img.width()) else {
        return LineEstimate::no_line(dir);
    };
    let Some(bottom_row) = find_anchor_row(img, dir) else {
        return LineEstimate::no_line(dir);
    };
    let Some(x1) = midpoint(img, start, bottom_row, dir) else {
        return LineEstimate::no_line(dir);
    };

    let alpha = cfg.rolling_average_constant;
    let mut running = RunningAngle::new();

    for division in 1..max_samples.min(bottom_row) {
        let y = bottom_row - division;
        let Some(x) = midpoint(img, start, y, dir) else {
            continue;
        };

        let slope = -(x as f64 - x1 as f64) / (y as f64 - bottom_row as f64);
        let angle = slope.atan();
        let accepted = running.fold(angle, alpha);

        debug!(
            "{dir:?} anchor=({x1}, {bottom_row}) compared=({x}, {y}) found={:.2} current={:.2} \
             accepted={accepted} valid={}",
            angle.to_degrees(),
            running.radians().to_degrees(),
            running.accepted()
        );
    }

    LineEstimate {
        direction: dir,
        angle_deg: running.degrees(),
        valid_samples: running.accepted(),
        anchor: Some(Anchor {
            row: bottom_row,
            col: x1,
        }),
    }
}
