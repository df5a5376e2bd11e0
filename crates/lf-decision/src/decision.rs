use lf_core::BinaryView;
use lf_edge::ScanDirection;
use log::debug;

use crate::confidence::confidence;
use crate::config::DecisionConfig;
use crate::coverage::{count_line_pixels, enough_line, escape_angle};
use crate::perpendicular::is_perpendicular;
use crate::sampler::{LineEstimate, sample_angle};

/// Recommended heading relative to the vehicle's forward axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Whole degrees in `[-90, 90]`, positive to the right.
    Degrees(i32),
    /// Halt: no turn and no forward motion.
    Stop,
}

impl Heading {
    pub fn degrees(self) -> Option<i32> {
        match self {
            Self::Degrees(d) => Some(d),
            Self::Stop => None,
        }
    }
}

/// Why the measured angle was replaced by the escape heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// `|angle| <= move_away_threshold`.
    MoveAway,
    /// Too few line pixels in the frame.
    Coverage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub heading: Heading,
    /// In `[0, 100]`. Forced to 0 when a stop line is in view.
    pub confidence: f64,
    /// Scan whose estimate won the confidence comparison.
    pub source: ScanDirection,
    pub left: LineEstimate,
    pub right: LineEstimate,
    pub line_pixels: usize,
    pub perpendicular: bool,
    pub enough_line: bool,
    /// Last substitution applied to the angle, if any.
    pub fallback: Option<Fallback>,
}

impl Decision {
    /// Angle in degrees; `None` only for [`Heading::Stop`].
    pub fn angle_deg(&self) -> Option<i32> {
        self.heading.degrees()
    }
}

/// Runs both scans on one frame and reduces them to a heading and a
/// confidence.
///
/// Order of operations: pick the more confident scan (ties go to
/// left-to-right), replace a near-straight angle with the escape heading, zero
/// the confidence on a stop line, and finally replace the angle again when the
/// frame has too little line coverage. `confidence_threshold` is not
/// consulted.
pub fn decide(img: &BinaryView<'_>, cfg: &DecisionConfig) -> Decision {
    let h = img.height();
    let line_pixels = count_line_pixels(img);
    let max_samples = cfg.sample_budget(h);

    let left = sample_angle(img, ScanDirection::LeftToRight, max_samples, cfg);
    let conf_left = confidence(left.valid_samples, h, cfg.percent_of_samples_needed);
    let right = sample_angle(img, ScanDirection::RightToLeft, max_samples, cfg);
    let conf_right = confidence(right.valid_samples, h, cfg.percent_of_samples_needed);

    let (source, mut angle, mut conf) = if conf_right > conf_left {
        (ScanDirection::RightToLeft, right.angle_deg, conf_right)
    } else {
        (ScanDirection::LeftToRight, left.angle_deg, conf_left)
    };
    debug!(
        "scans: left {}deg/{conf_left:.1}% right {}deg/{conf_right:.1}% -> {source:?}",
        left.angle_deg, right.angle_deg
    );

    let mut fallback = None;
    if f64::from(angle.abs()) <= cfg.move_away_threshold {
        angle = escape_angle(img);
        fallback = Some(Fallback::MoveAway);
    }

    let perpendicular = is_perpendicular(img);
    if perpendicular {
        conf = 0.0;
    }

    let has_coverage = enough_line(line_pixels, img.width(), h, cfg.percent_of_white_needed);
    if !has_coverage {
        angle = escape_angle(img);
        fallback = Some(Fallback::Coverage);
    }

    debug!(
        "decision: {angle}deg conf={conf:.1} perpendicular={perpendicular} \
         line_pixels={line_pixels} fallback={fallback:?}"
    );

    Decision {
        heading: Heading::Degrees(angle),
        confidence: conf,
        source,
        left,
        right,
        line_pixels,
        perpendicular,
        enough_line: has_coverage,
        fallback,
    }
}
