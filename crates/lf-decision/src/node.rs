//! Node-level wiring: one decision per inbound frame, one twist out.
//!
//! Transport is external. Frames arrive through [`VisionDecisionNode::on_image`]
//! or [`VisionDecisionNode::on_frame`] and the resulting [`Twist`] is handed to
//! a [`TwistSink`].

use lf_core::{BinaryView, Error, ImageView};
use log::{debug, warn};
use serde::Serialize;

use crate::config::DecisionConfig;
use crate::decision::{Decision, decide};
use crate::velocity::velocity_command;

pub const IMAGE_TOPIC: &str = "/vision/filtered_image";
pub const TWIST_TOPIC: &str = "twist";
pub const QUEUE_SIZE: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Twist {
    pub linear: Vector3,
    pub angular: Vector3,
}

pub trait TwistSink {
    fn publish(&mut self, twist: Twist);
}

impl TwistSink for Vec<Twist> {
    fn publish(&mut self, twist: Twist) {
        self.push(twist);
    }
}

#[derive(Debug)]
pub struct VisionDecisionNode<S> {
    config: DecisionConfig,
    sink: S,
}

impl<S: TwistSink> VisionDecisionNode<S> {
    pub fn new(config: DecisionConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Decides on one frame, publishes the twist and returns both.
    pub fn on_image(&mut self, img: &BinaryView<'_>) -> (Decision, Twist) {
        let decision = decide(img, &self.config);
        let cmd = velocity_command(decision.heading, &self.config);

        let twist = Twist {
            linear: Vector3 {
                x: cmd.linear,
                ..Vector3::default()
            },
            angular: Vector3 {
                z: cmd.angular,
                ..Vector3::default()
            },
        };
        debug!(
            "publishing twist linear.x={:.3} angular.z={:.3} (heading {:?}, confidence {:.1})",
            twist.linear.x, twist.angular.z, decision.heading, decision.confidence
        );
        self.sink.publish(twist);
        (decision, twist)
    }

    /// [`Self::on_image`] over a raw row-major transport buffer.
    pub fn on_frame(
        &mut self,
        height: usize,
        width: usize,
        data: &[u8],
    ) -> Result<(Decision, Twist), Error> {
        let view = ImageView::from_slice(width, height, width, data).inspect_err(|e| {
            warn!("dropping malformed {width}x{height} frame: {e}");
        })?;
        Ok(self.on_image(&view))
    }
}

#[cfg(test)]
mod tests {
    use lf_core::{BinaryImage, Error};

    use super::{Twist, VisionDecisionNode};
    use crate::{DecisionConfig, Heading};

    fn sloped_frame(w: usize, h: usize) -> BinaryImage {
        let mut img = BinaryImage::new_fill(w, h, 0);
        for y in 0..h {
            let c = 40 + (h - 1 - y);
            img.fill_row_span(y, c - 6, c + 6, 255);
        }
        img
    }

    #[test]
    fn publishes_one_twist_per_frame() {
        let img = sloped_frame(160, 80);
        let mut node = VisionDecisionNode::new(DecisionConfig::default(), Vec::<Twist>::new());

        let (decision, twist) = node.on_image(&img.as_view());
        let (_, again) = node.on_image(&img.as_view());

        let sent = node.into_sink();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], twist);
        assert_eq!(again, twist);

        assert_eq!(decision.heading, Heading::Degrees(45));
        // Line leans right: turn clockwise, half speed.
        assert!((twist.angular.z + 0.2025).abs() < 1e-12);
        assert!((twist.linear.x - 0.5).abs() < 1e-12);
        assert_eq!(twist.linear.y, 0.0);
        assert_eq!(twist.linear.z, 0.0);
        assert_eq!(twist.angular.x, 0.0);
        assert_eq!(twist.angular.y, 0.0);
    }

    #[test]
    fn blank_frame_still_emits_a_command() {
        let mut node = VisionDecisionNode::new(DecisionConfig::default(), Vec::<Twist>::new());
        let data = vec![0u8; 64 * 48];

        let (decision, twist) = node.on_frame(48, 64, &data).expect("well-formed frame");
        assert_eq!(decision.heading, Heading::Degrees(-45));
        assert!((twist.angular.z - 0.2025).abs() < 1e-12);
        assert_eq!(node.sink().len(), 1);
    }

    #[test]
    fn malformed_frame_is_rejected_without_publishing() {
        let mut node = VisionDecisionNode::new(DecisionConfig::default(), Vec::<Twist>::new());
        let err = node.on_frame(48, 64, &[0u8; 100]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 64 * 48,
                actual: 100
            }
        );
        assert!(node.sink().is_empty());
    }
}
