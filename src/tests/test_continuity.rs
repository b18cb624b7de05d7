#[cfg(test)]
mod tests {
    use nalgebra::{Translation3, UnitQuaternion, Vector3};
    use crate::kinematic_traits::{Joints, Kinematics, Pose, JOINTS_AT_ZERO};
    use crate::kinematics_impl::MtmKinematics;
    use crate::manipulator::Manipulator;
    use crate::tests::test_utils::settle;
    use crate::utils::{as_radians, assert_pose_eq};

    fn robot() -> MtmKinematics {
        MtmKinematics::new(Manipulator::mtm())
    }

    /// Small rotation about the tool x and z axes plus a shift along the world x.
    fn nudge(pose: &Pose, eps: f64) -> Pose {
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), eps)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), eps);
        let mut nudged = pose * Pose::from_parts(Translation3::identity(), rotation);
        nudged.translation.vector.x += eps / 10.0;
        nudged
    }

    #[test]
    fn test_home() {
        let robot = robot();
        let pose = robot.forward(&JOINTS_AT_ZERO);
        let mut joints = JOINTS_AT_ZERO;
        assert_eq!(robot.inverse(&pose, &mut joints), Ok(()));
        // Roll must not jump a full turn on the branch cut
        assert!(joints.iter().all(|q| q.abs() < 1e-12), "{:?}", joints);
    }

    #[test]
    fn test_outer_yaw_only() {
        let robot = robot();
        let target = as_radians([10, 0, 0, 0, 0, 0, 0]);
        let pose = robot.forward(&target);
        let mut joints = JOINTS_AT_ZERO;
        assert_eq!(robot.inverse(&pose, &mut joints), Ok(()));
        for i in 0..7 {
            assert!((joints[i] - target[i]).abs() < 1e-12, "joint {}: {:?}", i + 1, joints);
        }
    }

    #[test]
    fn test_small_motion_small_platform_step() {
        let robot = robot();
        let configurations = [
            [10, 20, 5, -30, 30, 10, 40],
            [-15, 35, -10, 40, -20, -25, -100],
            [40, 5, 20, -120, 60, 30, 300],
        ];

        for configuration in configurations {
            let pose = robot.forward(&as_radians(configuration));
            let mut settled = as_radians(configuration);
            assert!(settle(&robot, &pose, &mut settled), "{:?} did not settle", configuration);

            for eps in [1e-3, 1e-5] {
                let target = nudge(&pose, eps);
                let mut joints = settled;
                assert_eq!(robot.inverse(&target, &mut joints), Ok(()));
                let step = (joints[3] - settled[3]).abs();
                assert!(step < 2.0 * eps, "{:?}, eps {}: platform moved by {}",
                        configuration, eps, step);
                assert_pose_eq(&target, &robot.forward(&joints), 1e-9, 1e-9);
            }
        }
    }

    #[test]
    fn test_platform_kept_when_roll_axis_is_vertical() {
        // Wrist pitch at 90 degrees with zero yaw lines the roll axis up with the platform axis
        let robot = robot();
        let seed = as_radians([10, 20, 5, 30, 90, 0, 40]);
        let pose = robot.forward(&seed);

        for twist in [
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.3),
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), 0.3),
        ] {
            let target = pose * Pose::from_parts(Translation3::identity(), twist);
            let mut joints = seed;
            assert_eq!(robot.inverse(&target, &mut joints), Ok(()));
            assert_eq!(joints[3], seed[3]);
            assert_pose_eq(&target, &robot.forward(&joints), 1e-9, 1e-9);
        }
    }

    #[test]
    fn test_same_input_same_output() {
        let robot = robot();
        let pose = robot.forward(&as_radians([-20, 30, 10, -60, 70, -20, 200]));
        let previous: Joints = as_radians([-10, 25, 5, -50, 60, -10, 180]);

        let mut first = previous;
        let mut second = previous;
        let a = robot.inverse(&pose, &mut first);
        let b = robot.inverse(&pose, &mut second);
        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_roll_stays_on_previous_turn() {
        let robot = robot();
        let target = as_radians([10, 20, 5, -30, 30, 10, 400]);
        let pose = robot.forward(&target);
        let mut joints = target;
        assert!(settle(&robot, &pose, &mut joints));
        // Near 400 degrees, not at the equivalent 40
        assert!((joints[6] - 400f64.to_radians()).abs() < std::f64::consts::PI);

        let mut joints = as_radians([10, 20, 5, -30, 30, 10, -320]);
        assert!(settle(&robot, &pose, &mut joints));
        assert!((joints[6] + 320f64.to_radians()).abs() < std::f64::consts::PI);
    }
}
