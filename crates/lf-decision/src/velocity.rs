use serde::Serialize;

use crate::confidence::map_range;
use crate::config::DecisionConfig;
use crate::decision::Heading;

/// Largest heading magnitude, mapped to zero forward speed.
pub const MAX_HEADING_DEG: f64 = 90.0;

/// Normalised motion request for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VelocityCommand {
    /// Forward speed fraction, 1 straight ahead down to 0 at 90 degrees.
    pub linear: f64,
    /// Signed turn rate after scaling, sign flip and capping.
    pub angular: f64,
}

/// Quadratic turn response: `sign(a) * a^2 / 10000`, zero for a stop.
pub fn angular_speed(heading: Heading) -> f64 {
    match heading {
        Heading::Stop => 0.0,
        Heading::Degrees(deg) => {
            let a = f64::from(deg);
            a.signum() * a * a / 10_000.0
        }
    }
}

/// Forward speed fraction, falling linearly with `|angle|`.
pub fn linear_speed(heading: Heading) -> f64 {
    match heading {
        Heading::Stop => 0.0,
        Heading::Degrees(deg) => {
            1.0 - map_range(f64::from(deg.unsigned_abs()), 0.0, MAX_HEADING_DEG, 0.0, 1.0)
        }
    }
}

/// Clamps `|value|` to `cap`, keeping the sign.
pub fn cap_magnitude(value: f64, cap: f64) -> f64 {
    if value.abs() > cap {
        cap.copysign(value)
    } else {
        value
    }
}

/// Full command: the turn is scaled by `angular_vel_multiplier`, negated
/// (a positive image angle is a clockwise turn) and capped.
pub fn velocity_command(heading: Heading, cfg: &DecisionConfig) -> VelocityCommand {
    let angular = -cfg.angular_vel_multiplier * angular_speed(heading);
    VelocityCommand {
        linear: linear_speed(heading),
        angular: cap_magnitude(angular, cfg.angular_vel_cap),
    }
}
