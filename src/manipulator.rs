//! Serial link chain described by Denavit-Hartenberg parameters, with forward kinematics.
//!
//! Each link stores its own DH parameters and joint limits. The manipulator owns its links
//! and the fixed transform from the world to its base (`rtw0`).

extern crate nalgebra as na;

use na::{Isometry3, Translation3, Vector3};

use crate::joint_limits::JointLimit;
use crate::kinematic_traits::Pose;
use crate::utils::deg;

/// Which Denavit-Hartenberg convention the link parameters follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DhConvention {
    /// `Rz(theta) Tz(d) Tx(a) Rx(alpha)`, joint i rotates about z of frame i-1
    #[default]
    Standard,
    /// Craig's convention, `Rx(alpha) Tx(a) Rz(theta) Tz(d)`
    Modified,
}

impl DhConvention {
    pub fn name(&self) -> &'static str {
        match self {
            DhConvention::Standard => "standard",
            DhConvention::Modified => "modified",
        }
    }
}

/// Single revolute link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub convention: DhConvention,

    /// Link twist, radians
    pub alpha: f64,

    /// Link length, meters
    pub a: f64,

    /// Link offset along the joint axis, meters
    pub d: f64,

    /// Added to the joint position to obtain the DH theta
    pub offset: f64,

    pub limit: JointLimit,
}

impl Link {
    pub fn new(convention: DhConvention, alpha: f64, a: f64, d: f64, offset: f64,
               limit: JointLimit) -> Self {
        Link { convention, alpha, a, d, offset, limit }
    }

    /// Local transform of this link for the given joint position.
    pub fn transform(&self, q: f64) -> Isometry3<f64> {
        let theta = Isometry3::rotation(Vector3::z() * (q + self.offset));
        let twist = Isometry3::rotation(Vector3::x() * self.alpha);
        // Translations along x and z commute with each other, and with the rotation about
        // their own axis, so both conventions need a single translation.
        let shift: Isometry3<f64> = Translation3::new(self.a, 0.0, self.d).into();
        match self.convention {
            DhConvention::Standard => theta * shift * twist,
            DhConvention::Modified => twist * shift * theta,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Manipulator {
    links: Vec<Link>,

    /// Transformation from the world origin to the manipulator base.
    pub rtw0: Pose,
}

impl Manipulator {
    pub fn new(links: Vec<Link>, rtw0: Pose) -> Self {
        Manipulator { links, rtw0 }
    }

    /// Manipulator standing at the world origin.
    pub fn at_origin(links: Vec<Link>) -> Self {
        Self::new(links, Pose::identity())
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn joint_limits(&self) -> Vec<JointLimit> {
        self.links.iter().map(|link| link.limit).collect()
    }

    /// Clamps the value of the given joint into its limits, returns true if the limit was
    /// exceeded by more than `tolerance`. Indices outside the chain are never clamped.
    pub fn clamp_joint_value(&self, index: usize, value: &mut f64, tolerance: f64) -> bool {
        match self.links.get(index) {
            Some(link) => link.limit.clamp(value, tolerance),
            None => false,
        }
    }

    /// Pose of the frame after the first `count` links, relative to the manipulator base.
    /// Stops early if either the chain or the joint vector are shorter.
    pub fn forward_from_base(&self, qs: &[f64], count: usize) -> Pose {
        self.links
            .iter()
            .zip(qs)
            .take(count)
            .fold(Pose::identity(), |pose, (link, &q)| pose * link.transform(q))
    }

    /// Same as `forward_from_base` but in the world frame.
    pub fn forward_partial(&self, qs: &[f64], count: usize) -> Pose {
        self.rtw0 * self.forward_from_base(qs, count)
    }

    /// World-frame pose of the last link.
    pub fn forward(&self, qs: &[f64]) -> Pose {
        self.forward_partial(qs, self.links.len())
    }

    /// Convert to string yaml representation, the same format `from_yaml_file` reads.
    pub fn to_yaml(&self) -> String {
        let mut yaml = String::new();
        let t = self.rtw0.translation.vector;
        let (roll, pitch, yaw) = self.rtw0.rotation.euler_angles();
        yaml.push_str(&format!(
            "base_frame:\n  translation: [{}, {}, {}]\n  rpy: [{}, {}, {}]\nlinks:\n",
            t.x, t.y, t.z, deg(&roll), deg(&pitch), deg(&yaw)
        ));
        for link in &self.links {
            let mut limits = String::new();
            // Unlimited sides are simply left out
            if link.limit.min.is_finite() {
                limits.push_str(&format!(", min: {}", deg(&link.limit.min)));
            }
            if link.limit.max.is_finite() {
                limits.push_str(&format!(", max: {}", deg(&link.limit.max)));
            }
            yaml.push_str(&format!(
                "  - {{ convention: {}, alpha: {}, a: {}, d: {}, offset: {}{} }}\n",
                link.convention.name(),
                deg(&link.alpha),
                link.a,
                link.d,
                deg(&link.offset),
                limits
            ));
        }
        yaml
    }
}
