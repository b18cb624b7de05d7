//! Resolution of the redundant platform joint (joint 4).
//!
//! Any rotation of the platform about its own axis can be compensated by the wrist, so the
//! pose alone does not define joint 4. The projection of the roll axis on the platform plane
//! gives two candidates half a turn apart: the "right side up" and the "upside down" placement.
//! The [`RedundancyResolver`] picks between them and decides how much of the change to apply.

use std::f64::consts::{FRAC_PI_2, PI};
use nalgebra::Matrix3;

/// Below this the roll axis projection on the platform plane is considered degenerate
const PROJECTION_EPSILON: f64 = 1e-12;

/// The two platform angles that align the platform with the roll axis projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformCandidates {
    /// Right when the wrist is right side up
    pub right_side_up: f64,
    /// Right when the wrist is upside down
    pub upside_down: f64,
}

/// Previous command of the arm, the only state that carries over between solves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformContext {
    /// Previous joint 4 value
    pub previous_platform: f64,
    /// Previous joint 5 value (wrist pitch), sets how visible the platform rotation is
    pub previous_wrist_pitch: f64,
}

/// Policy choosing the new platform angle from the two candidates.
pub trait RedundancyResolver: Send + Sync {
    /// Returns the new joint 4 value, before joint limits are applied.
    fn resolve(&self, candidates: &PlatformCandidates, context: &PlatformContext) -> f64;
}

/// Default policy: stay on the branch closest to the previous platform angle, then blend
/// with the previous value by `|cos(previous wrist pitch)|`. With the wrist pitched at 90
/// degrees the platform axis and the roll axis line up, the weight is zero and the platform
/// holds its position.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformContinuity;

impl PlatformContinuity {
    /// Weight of the freshly solved angle against the previous one.
    pub fn blend_weight(previous_wrist_pitch: f64) -> f64 {
        previous_wrist_pitch.cos().abs()
    }
}

impl RedundancyResolver for PlatformContinuity {
    fn resolve(&self, candidates: &PlatformCandidates, context: &PlatformContext) -> f64 {
        let previous = context.previous_platform;
        // Ties stay on the right side up branch
        let solution = if (previous - candidates.upside_down).abs()
            < (previous - candidates.right_side_up).abs() {
            candidates.upside_down
        } else {
            candidates.right_side_up
        };

        let weight = Self::blend_weight(context.previous_wrist_pitch);
        solution * weight + previous * (1.0 - weight)
    }
}

/// Angle between the platform and the projection of the roll axis, taken from the rotation
/// between the frame after joint 3 and the target. `None` if the roll axis is parallel to
/// the platform axis (no projection).
pub fn angle_difference(r37: &Matrix3<f64>) -> Option<f64> {
    let x = r37[(0, 2)];
    let y = r37[(1, 2)];
    let norm = x.hypot(y);
    if norm < PROJECTION_EPSILON {
        return None;
    }
    let angle = (-x / norm).clamp(-1.0, 1.0).acos();
    Some(if y > 0.0 { -angle } else { angle })
}

/// Both candidates brought into the joint space of the platform. The sign of the previous
/// platform angle decides which side of the range a candidate lands on when it could go to
/// either.
pub fn platform_candidates(angle_difference: f64, previous_platform: f64) -> PlatformCandidates {
    let mut right_side_up = angle_difference;
    let mut upside_down = right_side_up - PI;

    if upside_down > PI {
        upside_down -= 2.0 * PI;
    } else if upside_down < -3.0 * FRAC_PI_2 {
        upside_down += 2.0 * PI;
    }

    if upside_down < -PI && upside_down > -3.0 * FRAC_PI_2 && previous_platform > 0.0 {
        upside_down += 2.0 * PI;
    }

    if right_side_up > FRAC_PI_2 && right_side_up < PI && previous_platform < 0.0 {
        right_side_up -= 2.0 * PI;
    }

    PlatformCandidates { right_side_up, upside_down }
}
