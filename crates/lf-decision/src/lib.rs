//! Single-frame steering decision for a line-following ground vehicle.
//!
//! Core strategy:
//! - Anchor a scan at the lowest row where a line is confirmed, once from the
//!   left border and once from the right.
//! - Walk up a bounded number of rows, take the band midpoint on each, and
//!   fold the slope against the anchor into an exponentially smoothed angle.
//! - Score each scan by how many samples it accepted and keep the more
//!   confident one.
//! - Replace untrustworthy angles with a fixed escape turn, and drop the
//!   confidence to zero when a stop line crosses the view.
//! - Map the heading to capped linear and angular speed fractions.
//!
//! Nothing is carried between frames. [`decide`] is a pure function of the
//! frame and the [`DecisionConfig`]; [`node::VisionDecisionNode`] only adds
//! configuration ownership and publishing.

mod confidence;
mod config;
mod coverage;
mod decision;
pub mod node;
mod perpendicular;
mod sampler;
mod velocity;

pub use confidence::confidence;
pub use config::{ConfigError, DecisionConfig};
pub use coverage::{
    ESCAPE_ANGLE_DEG, count_line_pixels, escape_angle, half_counts, has_enough_line,
};
pub use decision::{Decision, Fallback, Heading, decide};
pub use node::{Twist, TwistSink, Vector3, VisionDecisionNode};
pub use perpendicular::{CrossingEdges, crossing_edges, is_perpendicular};
pub use sampler::{
    Anchor, LineEstimate, MAX_ANGLE_JUMP_DEG, RunningAngle, find_anchor_row, sample_angle,
};
pub use velocity::{
    MAX_HEADING_DEG, VelocityCommand, angular_speed, cap_magnitude, linear_speed,
    velocity_command,
};
