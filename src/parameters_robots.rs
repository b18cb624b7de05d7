//! Hardcoded link models for the master tool manipulator

pub mod mtm_kinematics {
    use std::f64::consts::FRAC_PI_2;
    use crate::joint_limits::JointLimit;
    use crate::kinematic_traits::Pose;
    use crate::manipulator::{DhConvention, Link, Manipulator};
    use crate::parameters::mtm_kinematics::{MtmGeometry, MTM_GEOMETRY};

    fn limit(min_degrees: f64, max_degrees: f64) -> JointLimit {
        JointLimit::new(min_degrees.to_radians(), max_degrees.to_radians())
    }

    /// Standard DH links of an MTM with the given geometry. All joints at zero put the upper
    /// arm down, the forearm horizontal along -y and the roll axis along the forearm.
    pub fn mtm_links(geometry: &MtmGeometry) -> Vec<Link> {
        use DhConvention::Standard;
        vec![
            // outer yaw
            Link::new(Standard, FRAC_PI_2, 0.0, 0.0, -FRAC_PI_2, limit(-40.0, 65.0)),
            // shoulder pitch
            Link::new(Standard, 0.0, geometry.upper_arm, 0.0, -FRAC_PI_2, limit(-15.0, 50.0)),
            // elbow pitch
            Link::new(Standard, -FRAC_PI_2, geometry.forearm_base, 0.0, FRAC_PI_2, limit(-30.0, 35.0)),
            // platform
            Link::new(Standard, FRAC_PI_2, 0.0, geometry.forearm_height, 0.0, limit(-200.0, 90.0)),
            // wrist pitch
            Link::new(Standard, -FRAC_PI_2, 0.0, 0.0, 0.0, limit(-90.0, 180.0)),
            // wrist yaw
            Link::new(Standard, FRAC_PI_2, 0.0, 0.0, -FRAC_PI_2, limit(-45.0, 45.0)),
            // wrist roll
            Link::new(Standard, 0.0, 0.0, 0.0, FRAC_PI_2, limit(-450.0, 450.0)),
        ]
    }

    impl Manipulator {
        /// Default MTM, base frame at the world origin.
        pub fn mtm() -> Self {
            Manipulator::new(mtm_links(&MTM_GEOMETRY), Pose::identity())
        }

        /// Default MTM placed at the given base frame.
        pub fn mtm_at(rtw0: Pose) -> Self {
            Manipulator::new(mtm_links(&MTM_GEOMETRY), rtw0)
        }
    }

    impl MtmGeometry {
        /// Reads the geometry back from links laid out as [`mtm_links`] does: upper arm is
        /// the length of link 2, forearm base the length of link 3 and forearm height the
        /// offset of link 4. `None` if there are fewer than 4 links.
        pub fn from_links(links: &[Link]) -> Option<MtmGeometry> {
            match links {
                [_, shoulder, elbow, platform, ..] => Some(MtmGeometry {
                    upper_arm: shoulder.a,
                    forearm_base: elbow.a,
                    forearm_height: platform.d,
                }),
                _ => None,
            }
        }
    }
}
