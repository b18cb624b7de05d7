#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use crate::kinematic_traits::{Joints, Kinematics, JOINTS_AT_ZERO};
    use crate::kinematics_impl::MtmKinematics;
    use crate::manipulator::{DhConvention, Manipulator};
    use crate::parameter_error::ParameterError;
    use crate::parameters_from_file::ManipulatorConfig;
    use crate::utils::{as_radians, assert_pose_eq};

    fn assert_same_model(a: &Manipulator, b: &Manipulator, tolerance: f64) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.links().iter().zip(b.links()).enumerate() {
            assert_eq!(x.convention, y.convention, "link {}", i);
            for (name, u, v) in [
                ("alpha", x.alpha, y.alpha),
                ("a", x.a, y.a),
                ("d", x.d, y.d),
                ("offset", x.offset, y.offset),
                ("min", x.limit.min, y.limit.min),
                ("max", x.limit.max, y.limit.max),
            ] {
                let same = (u == v) || (u - v).abs() < tolerance;
                assert!(same, "link {} {}: {} vs {}", i, name, u, v);
            }
        }
        assert_pose_eq(&a.rtw0, &b.rtw0, tolerance, tolerance);
    }

    #[test]
    fn test_parse_default_model() {
        let config = ManipulatorConfig::from_yaml_file("src/tests/data/mtm.yaml")
            .expect("Failed to load the model");
        assert_eq!(config.name.as_deref(), Some("MTM"));
        assert!(config.tool_tip_offset.is_none());
        assert_same_model(&config.manipulator, &Manipulator::mtm(), 1e-12);
    }

    #[test]
    fn test_manipulator_from_yaml_file() {
        let manipulator = Manipulator::from_yaml_file("src/tests/data/mtm_on_console.yaml")
            .expect("Failed to load the model");
        assert_eq!(manipulator.len(), 7);
        assert_eq!(manipulator.links()[0].convention, DhConvention::Standard);
        assert!((manipulator.links()[0].alpha - PI / 2.0).abs() < 1e-12);
        // Last joint has no limits in this file
        assert_eq!(manipulator.links()[6].limit.min, f64::NEG_INFINITY);
        assert_eq!(manipulator.links()[6].limit.max, f64::INFINITY);
    }

    #[test]
    fn test_console_mounted_model() {
        let config = ManipulatorConfig::from_yaml_file("src/tests/data/mtm_on_console.yaml")
            .expect("Failed to load the model");
        assert_eq!(config.name.as_deref(), Some("MTM right"));

        let t = config.manipulator.rtw0.translation.vector;
        assert!((t.x - 0.15).abs() < 1e-12 && (t.y + 0.2).abs() < 1e-12 && (t.z - 0.35).abs() < 1e-12);
        let tool = config.tool_tip_offset.expect("tool tip offset");
        assert!((tool.translation.vector.z - 0.04).abs() < 1e-12);

        // Base frame and tool are both applied
        let bare = MtmKinematics::new(Manipulator::mtm());
        let robot = config.to_robot();
        let joints = as_radians([10, 20, 5, -30, 30, 10, 40]);
        let pose = robot.forward(&joints);
        let without = bare.forward(&joints);
        assert!((pose.translation.vector - without.translation.vector).norm() > 0.1);

        let mut solved: Joints = JOINTS_AT_ZERO;
        assert_eq!(robot.inverse(&pose, &mut solved), Ok(()));
        assert_pose_eq(&pose, &robot.forward(&solved), 1e-9, 1e-9);
    }

    #[test]
    fn test_model_with_longer_upper_arm() {
        let stock = std::fs::read_to_string("src/tests/data/mtm.yaml").expect("model file");
        let longer = stock.replace("a: 0.2794", "a: 0.3200");
        assert_ne!(stock, longer);
        let config = ManipulatorConfig::from_yaml_str(&longer).expect("valid model");
        assert_eq!(config.manipulator.links()[1].a, 0.32);

        let robot = config.to_robot();
        for target in [
            as_radians([10, 20, 5, -30, 30, 10, 40]),
            as_radians([-25, 40, -20, 60, -45, 30, -120]),
        ] {
            let pose = robot.forward(&target);
            let mut solved: Joints = JOINTS_AT_ZERO;
            assert_eq!(robot.inverse(&pose, &mut solved), Ok(()));
            assert_pose_eq(&pose, &robot.forward(&solved), 1e-9, 1e-9);
        }
    }

    #[test]
    fn test_yaml_round_trip() {
        let loaded = ManipulatorConfig::from_yaml_file("src/tests/data/mtm_on_console.yaml")
            .expect("Failed to load the model")
            .manipulator;
        let yaml = loaded.to_yaml();
        println!("{}", yaml);
        let reloaded = ManipulatorConfig::from_yaml_str(&yaml)
            .expect("Failed to parse own output")
            .manipulator;
        // Angles are written in degrees with 4 decimals
        assert_same_model(&loaded, &reloaded, 1e-5);
    }

    #[test]
    fn test_missing_file() {
        let result = ManipulatorConfig::from_yaml_file("src/tests/data/does_not_exist.yaml");
        assert!(matches!(result, Err(ParameterError::IoError(_))));
    }

    #[test]
    fn test_wrong_angle() {
        let result = ManipulatorConfig::from_yaml_file("src/tests/data/invalid/bad_angle.yaml");
        assert!(matches!(result, Err(ParameterError::WrongAngle { .. })), "{:?}", result.err());
    }

    #[test]
    fn test_missing_length() {
        let result = ManipulatorConfig::from_yaml_file("src/tests/data/invalid/missing_length.yaml");
        match result {
            Err(ParameterError::MissingField(field)) => assert_eq!(field, "links[0].a"),
            other => panic!("Expected missing field, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_swapped_limits() {
        let result = ManipulatorConfig::from_yaml_file("src/tests/data/invalid/swapped_limits.yaml");
        assert!(matches!(result, Err(ParameterError::InvalidLimits { link: 0, .. })), "{:?}", result.err());
    }

    #[test]
    fn test_unknown_convention() {
        let result = ManipulatorConfig::from_yaml_file("src/tests/data/invalid/bad_convention.yaml");
        assert!(matches!(result, Err(ParameterError::ParseError(_))), "{:?}", result.err());
    }

    #[test]
    fn test_short_translation() {
        let result = ManipulatorConfig::from_yaml_file("src/tests/data/invalid/short_translation.yaml");
        assert!(matches!(result, Err(ParameterError::InvalidLength { expected: 3, found: 2 })),
                "{:?}", result.err());
    }

    #[test]
    fn test_no_links() {
        let result = ManipulatorConfig::from_yaml_file("src/tests/data/invalid/no_links.yaml");
        assert!(matches!(result, Err(ParameterError::ParseError(_))), "{:?}", result.err());
    }

    #[test]
    fn test_modified_convention() {
        let yaml = "links:\n  - { convention: modified, alpha: deg(-90), a: 0.5, d: 0.25 }\n";
        let config = ManipulatorConfig::from_yaml_str(yaml).expect("valid model");
        let link = config.manipulator.links()[0];
        assert_eq!(link.convention, DhConvention::Modified);
        assert!((link.alpha + PI / 2.0).abs() < 1e-12);
        assert_eq!(link.offset, 0.0);
    }
}
