//! Spherical wrist: the residual rotation after the platform is decomposed into
//! Z-X-Z Euler angles and shifted by the DH offsets of joints 5 to 7.

use std::f64::consts::{FRAC_PI_2, PI};
use nalgebra::{Matrix3, Rotation3, Vector3};

/// Below this, sin(beta) is treated as zero (gimbal lock)
const SINGULARITY_EPSILON: f64 = 1e-12;

/// Rotation expressed as `Rz(alpha) * Rx(beta) * Rz(gamma)`, beta in [0, PI].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerZxz {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl EulerZxz {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        EulerZxz { alpha, beta, gamma }
    }

    /// Decomposes the rotation. At the singularity (beta is 0 or PI) gamma is set to 0 and
    /// alpha takes the whole rotation about z.
    pub fn from_matrix(r: &Matrix3<f64>) -> Self {
        let sin_beta = r[(0, 2)].hypot(r[(1, 2)]);
        let beta = sin_beta.atan2(r[(2, 2)]);
        if sin_beta < SINGULARITY_EPSILON {
            return EulerZxz { alpha: r[(1, 0)].atan2(r[(0, 0)]), beta, gamma: 0.0 };
        }
        EulerZxz {
            alpha: r[(0, 2)].atan2(-r[(1, 2)]),
            beta,
            gamma: r[(2, 0)].atan2(r[(2, 1)]),
        }
    }

    pub fn from_rotation(rotation: &Rotation3<f64>) -> Self {
        Self::from_matrix(rotation.matrix())
    }

    pub fn to_rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.alpha)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.beta)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.gamma)
    }

    /// Joints 5, 6 and 7 (wrist pitch, yaw and roll) for this residual rotation.
    pub fn wrist_joints(&self) -> [f64; 3] {
        [
            self.alpha + FRAC_PI_2,
            -self.beta + FRAC_PI_2,
            self.gamma + PI,
        ]
    }
}
