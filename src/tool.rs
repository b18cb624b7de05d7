//! Provides the tool tip offset for the arm.
//! The Tool takes arbitrary implementation of Kinematics and is such implementation itself,
//! so the solver can plan for the tip of the tool rather than the end of the last link:
//! ```
//! use std::sync::Arc;
//! use nalgebra::{Isometry3, Translation3, UnitQuaternion};
//! use rs_mtm_kinematics::kinematic_traits::{Joints, Kinematics, Pose};
//! use rs_mtm_kinematics::kinematics_impl::MtmKinematics;
//! use rs_mtm_kinematics::manipulator::Manipulator;
//! let arm = MtmKinematics::new(Manipulator::mtm());
//!
//! // Gripper tip 4 cm along the roll axis
//! let tip = Isometry3::from_parts(
//!   Translation3::new(0.0, 0.0, 0.04),
//!   UnitQuaternion::identity(),
//! );
//!
//! let arm_with_tool = rs_mtm_kinematics::tool::Tool {
//!   robot: Arc::new(arm),
//!   tool: tip,
//! };
//!
//! let joints: Joints = [0.1, 0.2, 0.1, 0.0, 0.3, 0.0, 0.5];
//! let tcp_pose: Pose = arm_with_tool.forward(&joints);
//! println!("The gripper tip is at: {:?}", tcp_pose);
//! ```

extern crate nalgebra as na;

use std::sync::Arc;
use na::Isometry3;
use crate::kinematic_traits::{Kinematics, Pose};
use crate::solve_error::SolveError;

/// Defines the fixed tool that is attached to the last joint of the arm.
/// The tool moves with the arm, providing additional translation and, if needed,
/// rotation. "Pose" for the Tool is the position and rotation of the tool tip.
#[derive(Clone)]
pub struct Tool {
    pub robot: Arc<dyn Kinematics>,  // The arm

    /// Transformation from the last link frame to the tool tip.
    pub tool: Isometry3<f64>,
}

impl Kinematics for Tool {
    fn dof(&self) -> usize {
        self.robot.dof()
    }

    fn inverse(&self, tcp: &Pose, qs: &mut [f64]) -> Result<(), SolveError> {
        self.robot.inverse(&(tcp * self.tool.inverse()), qs)
    }

    fn forward(&self, qs: &[f64]) -> Pose {
        // Calculate the pose of the last link using the arm's kinematics
        let tip_joint = self.robot.forward(qs);
        tip_joint * self.tool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Translation3, UnitQuaternion};
    use crate::kinematics_impl::MtmKinematics;
    use crate::manipulator::Manipulator;
    use crate::utils::{as_radians, assert_pose_eq};

    fn tool() -> Tool {
        Tool {
            robot: Arc::new(MtmKinematics::new(Manipulator::mtm())),
            tool: Isometry3::from_parts(
                Translation3::new(0.01, 0.0, 0.05),
                UnitQuaternion::from_euler_angles(0.0, 0.2, 0.0),
            ),
        }
    }

    #[test]
    fn test_tool_forward() {
        let arm = MtmKinematics::new(Manipulator::mtm());
        let with_tool = tool();
        let joints = as_radians([10, 20, 0, -30, 40, 10, 90]);
        let flange = arm.forward(&joints);
        let tip = with_tool.forward(&joints);
        let offset = flange.inverse() * tip;
        assert_pose_eq(&offset, &with_tool.tool, 1e-12, 1e-12);
    }

    #[test]
    fn test_tool_inverse() {
        let with_tool = tool();
        let joints = as_radians([10, 20, 0, -30, 40, 10, 90]);
        let tip = with_tool.forward(&joints);
        let mut solved = joints;
        assert_eq!(with_tool.inverse(&tip, &mut solved), Ok(()));
        assert_pose_eq(&tip, &with_tool.forward(&solved), 1e-9, 1e-9);
        assert_eq!(with_tool.dof(), 7);
    }
}
