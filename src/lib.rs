//! Rust implementation of closed-form inverse and forward kinematics for the seven joint
//! teleoperation master arm (MTM, master tool manipulator) of a surgical robot.
//!
//! The solver is meant to run every tick of a real-time control loop: it never panics, never
//! blocks, does not allocate and takes a fixed number of trigonometric evaluations.
//!
//! # Features
//!
//! - Joints 1 to 3 are solved directly from the wrist center position (outer yaw from the
//!   azimuth, shoulder and elbow pitch from a planar two link triangle).
//! - The platform joint (joint 4) is redundant. It is chosen between two candidates half a turn
//!   apart, staying on the branch of the previous command, and blended with the previous value
//!   depending on how much the platform rotation is visible at the current wrist pitch. The
//!   policy is behind the `RedundancyResolver` trait and can be replaced.
//! - Joints 5 to 7 form a spherical wrist solved by Z-X-Z Euler decomposition. The roll joint
//!   stays on the same turn as the previous command.
//! - Joint limits of joints 1 to 3 are enforced by clamping. Reaching a limit, or a target
//!   outside of the reach of the arm, does not stop the computation: the joint vector is
//!   always fully populated and the failure is reported alongside.
//! - The previous joint values are passed by the caller and updated in place, the solver has
//!   no hidden state.
//! - Forward kinematics over standard or modified Denavit-Hartenberg links, base frame and
//!   tool tip offset.
//! - Reading the link model from YAML file (feature `allow_filesystem`).
//!
//! # Parameters
//!
//! The arm geometry is defined by the upper arm length and by the forearm triangle (base and
//! height), see `parameters::mtm_kinematics::MtmGeometry`. The link model with DH parameters
//! and joint limits is in `parameters_robots`.
//!
//! ## Examples
//!
//! ```
//! use rs_mtm_kinematics::kinematic_traits::{Joints, Kinematics, JOINTS_AT_ZERO};
//! use rs_mtm_kinematics::kinematics_impl::MtmKinematics;
//! use rs_mtm_kinematics::manipulator::Manipulator;
//!
//! let robot = MtmKinematics::new(Manipulator::mtm());
//! let goal = robot.forward(&[0.1, 0.2, 0.1, 0.0, 0.3, 0.0, 0.0]);
//!
//! let mut command: Joints = JOINTS_AT_ZERO;
//! match robot.inverse(&goal, &mut command) {
//!     Ok(()) => println!("Command: {:?}", command),
//!     Err(e) => println!("Not safely reachable ({}), best effort: {:?}", e, command),
//! }
//! ```

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod solve_error;

pub mod joint_limits;

pub mod manipulator;

pub mod redundancy;

pub mod wrist;

pub mod tool;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
