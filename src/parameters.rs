//! Defines the geometric parameters of the MTM arm

pub mod mtm_kinematics {
    /// Upper arm and forearm geometry. The forearm is not straight: it is described as a right
    /// triangle with `forearm_base` and `forearm_height`, the hypotenuse being the effective
    /// length of the second planar link.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct MtmGeometry {
        /// Distance between the shoulder and elbow pitch axes (l1).
        pub upper_arm: f64,

        /// Forearm length along the link, from the elbow to the platform axis.
        pub forearm_base: f64,

        /// Offset of the wrist center along the platform axis.
        pub forearm_height: f64,
    }

    /// Intuitive Surgical MTM, lengths as provided in the ISI documentation (meters).
    pub const MTM_GEOMETRY: MtmGeometry = MtmGeometry {
        upper_arm: 0.2794,
        forearm_base: 0.3645,
        forearm_height: 0.1506,
    };

    impl MtmGeometry {
        /// Effective length of the second planar link (l2), the triangle hypotenuse.
        pub fn forearm_length(&self) -> f64 {
            self.forearm_base.hypot(self.forearm_height)
        }

        /// Angle between the forearm hypotenuse and its base.
        pub fn angle_offset(&self) -> f64 {
            (self.forearm_height / self.forearm_length()).asin()
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "mtm_geometric_parameters:\n  \
              upper_arm: {}\n  \
              forearm_base: {}\n  \
              forearm_height: {}\n",
                self.upper_arm, self.forearm_base, self.forearm_height
            )
        }
    }

    impl Default for MtmGeometry {
        fn default() -> Self {
            MTM_GEOMETRY
        }
    }
}
