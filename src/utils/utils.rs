//! Helper functions

use std::f64::consts::PI;
use nalgebra::{Isometry3, UnitQuaternion};
use crate::kinematic_traits::{Joints, MTM_JOINTS};

/// Checks the joint values for validity.
pub(crate) mod mtm_kinematics {
    /// Checks if all elements in the slice are finite
    pub fn is_valid(qs: &[f64]) -> bool {
        qs.iter().all(|&q| q.is_finite())
    }
}

/// Allows to specify joint values in degrees (converts to radians)
pub fn as_radians(degrees: [i32; MTM_JOINTS]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Print joint values, converting radians to degrees.
pub fn dump_joints(joints: &[f64]) {
    let row: Vec<String> = joints.iter().map(|q| format!("{:5.2}", q.to_degrees())).collect();
    println!("[{}]", row.join(" "));
}

pub fn dump_pose(isometry: &Isometry3<f64>) {
    // Extract translation components
    let translation = isometry.translation.vector;

    // Extract rotation components
    let rotation: UnitQuaternion<f64> = isometry.rotation;

    // Print translation and rotation
    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  quat: {:.5},{:.5},{:.5},{:.5}",
        translation.x, translation.y, translation.z, rotation.i, rotation.j, rotation.k, rotation.w
    );
}

/// formatting for YAML output
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("deg({:.4})", x.to_degrees())
}

/// Shifts `angle` by whole turns to the equivalent value closest to `reference`.
pub fn closest_turn(angle: f64, reference: f64) -> f64 {
    let turns = ((reference - angle) / (2.0 * PI)).round();
    angle + turns * 2.0 * PI
}

/// Translation and rotation difference between two poses.
pub fn pose_distance(ta: &Isometry3<f64>, tb: &Isometry3<f64>) -> (f64, f64) {
    let translation_distance = (ta.translation.vector - tb.translation.vector).norm();
    let angular_distance = ta.rotation.angle_to(&tb.rotation);
    (translation_distance, angular_distance)
}

pub fn assert_pose_eq(ta: &Isometry3<f64>, tb: &Isometry3<f64>,
                      distance_tolerance: f64, angular_tolerance: f64) -> bool {
    fn bad(ta: &Isometry3<f64>, tb: &Isometry3<f64>) {
        dump_pose(ta);
        dump_pose(tb);
    }

    let (translation_distance, angular_distance) = pose_distance(ta, tb);

    if translation_distance > distance_tolerance {
        bad(ta, tb);
        panic!("Poses have too different translations: {}", translation_distance);
    }

    if angular_distance > angular_tolerance {
        bad(ta, tb);
        panic!("Poses have too different angles: {}", angular_distance);
    }
    true
}
