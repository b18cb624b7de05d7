extern crate nalgebra as na;

use na::Isometry3;

use crate::solve_error::SolveError;

/// Pose is used a pose of the end effector (or of any intermediate frame). It contains both
/// Cartesian position and rotation quaternion
/// ```
/// extern crate nalgebra as na;
/// use na::{Isometry3, Translation3, UnitQuaternion, Vector3};
///
/// type Pose = Isometry3<f64>;
///
/// let translation = Translation3::new(0.0, -0.36, -0.13);
/// // The quaternion should be normalized to represent a valid rotation.
/// let rotation = UnitQuaternion::from_quaternion(na::Quaternion::new(1.0, 0.0, 0.0, 1.0).normalize());
/// let transform = Pose::from_parts(translation, rotation);
/// ```
pub type Pose = Isometry3<f64>;

/// Number of actuated joints of the master tool manipulator.
pub const MTM_JOINTS: usize = 7;

/// Joint positions of the MTM, radians. The solver itself works on slices of any length and
/// checks the length against the model, this alias is just for convenience.
pub type Joints = [f64; MTM_JOINTS];

/// All joints at zero (the "home" configuration of the default model)
pub const JOINTS_AT_ZERO: Joints = [0.0; MTM_JOINTS];

/// Strategy interface for a mechanism family. The closed-form MTM solver is one implementation,
/// [`crate::tool::Tool`] decorates any other implementation.
pub trait Kinematics {
    /// Number of joints the joint vector must have.
    fn dof(&self) -> usize;

    /// Solve inverse kinematics for the given world-frame pose.
    ///
    /// `qs` is both the continuity seed (previous command) and the output buffer. On
    /// `Err(SolveError::LimitReached(_))` the buffer is still fully populated with the best
    /// effort solution. On precondition errors it is left untouched.
    fn inverse(&self, pose: &Pose, qs: &mut [f64]) -> Result<(), SolveError>;

    /// World-frame pose of the end effector for the given joint positions.
    fn forward(&self, qs: &[f64]) -> Pose;
}
