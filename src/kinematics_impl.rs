use std::f64::consts::FRAC_PI_2;

use tracing::{debug, error};

use crate::joint_limits::DEFAULT_LIMIT_TOLERANCE;
use crate::kinematic_traits::{Kinematics, Pose, MTM_JOINTS};
use crate::manipulator::Manipulator;
use crate::parameters::mtm_kinematics::MtmGeometry;
use crate::redundancy::{angle_difference, platform_candidates, PlatformContext,
                        PlatformContinuity, RedundancyResolver};
use crate::solve_error::{SolveError, Violations};
use crate::utils::{closest_turn, mtm_kinematics};
use crate::wrist::EulerZxz;

/// How far outside [-1, 1] a cosine may be before the target counts as unreachable. Targets
/// produced by forward kinematics at full extension land slightly outside through rounding.
const DOMAIN_EPSILON: f64 = 1e-9;

/// Shortest shoulder to wrist distance the planar solver can work with.
const MIN_DISTANCE: f64 = 1e-9;

const PLATFORM: usize = 3;
const WRIST_PITCH: usize = 4;
const WRIST_YAW: usize = 5;
const WRIST_ROLL: usize = 6;

/// Closed-form inverse kinematics of the master tool manipulator.
///
/// Joints 1 to 3 place the wrist center (planar two link problem after the outer yaw),
/// joint 4 is redundant and chosen by the [`RedundancyResolver`], joints 5 to 7 form a
/// spherical wrist solved by Euler angle decomposition.
///
/// ```
/// use rs_mtm_kinematics::kinematic_traits::{Joints, Kinematics, JOINTS_AT_ZERO};
/// use rs_mtm_kinematics::kinematics_impl::MtmKinematics;
/// use rs_mtm_kinematics::manipulator::Manipulator;
///
/// let robot = MtmKinematics::new(Manipulator::mtm());
/// let goal = robot.forward(&[0.2, 0.1, 0.1, 0.0, 0.0, 0.0, 0.0]);
/// let mut joints: Joints = JOINTS_AT_ZERO; // previous command, updated in place
/// robot.inverse(&goal, &mut joints).expect("reachable without limits");
/// assert!((joints[0] - 0.2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct MtmKinematics<R: RedundancyResolver = PlatformContinuity> {
    manipulator: Manipulator,
    geometry: MtmGeometry,
    resolver: R,
    tolerance: f64,
}

impl MtmKinematics {
    /// Solver for the given link model with the default platform policy. Arm lengths are
    /// taken from the links, so a model with other lengths than the stock MTM is solved
    /// correctly as long as it keeps the MTM layout.
    pub fn new(manipulator: Manipulator) -> Self {
        let geometry = MtmGeometry::from_links(manipulator.links()).unwrap_or_default();
        debug!("MtmKinematics::new: {:?}", geometry);
        Self::with_resolver(manipulator, geometry, PlatformContinuity)
    }
}

impl<R: RedundancyResolver> MtmKinematics<R> {
    pub fn with_resolver(manipulator: Manipulator, geometry: MtmGeometry, resolver: R) -> Self {
        MtmKinematics {
            manipulator,
            geometry,
            resolver,
            tolerance: DEFAULT_LIMIT_TOLERANCE,
        }
    }

    /// Tolerance before clamping of joints 1 to 3 is reported.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn manipulator(&self) -> &Manipulator {
        &self.manipulator
    }

    pub fn geometry(&self) -> &MtmGeometry {
        &self.geometry
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    fn check_preconditions(&self, pose: &Pose, qs: &[f64]) -> Result<(), SolveError> {
        let links = self.manipulator.len();
        if qs.len() != links {
            return Err(SolveError::DimensionMismatch { expected: links, found: qs.len() });
        }
        if links == 0 {
            return Err(SolveError::NoLinks);
        }
        if links < MTM_JOINTS {
            return Err(SolveError::IncompleteModel { expected: MTM_JOINTS, found: links });
        }
        let rotation = pose.rotation.coords;
        if !pose.translation.vector.iter().chain(rotation.iter()).all(|v| v.is_finite())
            || !mtm_kinematics::is_valid(qs) {
            return Err(SolveError::NonFinite);
        }
        Ok(())
    }

    /// Solves joints 1 to 3 from the wrist center position given in the manipulator base
    /// frame. Returns the flags of joints that hit their limits and whether the target was
    /// out of reach. All three joints are always written.
    pub fn solve_shoulder_elbow(&self, rt07: &Pose, qs: &mut [f64]) -> Violations {
        let mut violations = Violations::empty();
        let p = rt07.translation.vector;

        qs[0] = p.x.atan2(-p.y);

        let l1 = self.geometry.upper_arm;
        let l2 = self.geometry.forearm_length();

        // Plane formed by links 2 and 3
        let x = -p.z;
        let y = p.x.hypot(p.y);
        let d = x.hypot(y);

        let cos_a2 = if d > MIN_DISTANCE {
            (l1 * l1 - l2 * l2 + d * d) / (2.0 * l1 * d)
        } else {
            violations |= Violations::UNREACHABLE;
            1.0
        };
        let cos_elbow = (l1 * l1 + l2 * l2 - d * d) / (2.0 * l1 * l2);

        let a2 = checked_acos(cos_a2, &mut violations);
        let q2 = -checked_acos(cos_elbow, &mut violations);

        qs[1] = y.atan2(x) - a2;
        qs[2] = q2 - self.geometry.angle_offset() + FRAC_PI_2;

        for joint in 0..3 {
            if self.manipulator.clamp_joint_value(joint, &mut qs[joint], self.tolerance) {
                violations |= Violations::joint(joint);
            }
        }
        violations
    }

    /// Platform angle (joint 4) for joints 1 to 3 already set in `qs`, while joints 4 and 5
    /// still hold the previous command. The result is within the joint 4 limits.
    pub fn optimal_platform_angle(&self, qs: &[f64], rt07: &Pose) -> f64 {
        let rt03 = self.manipulator.forward_from_base(qs, 3);
        let rt37 = rt03.inverse() * rt07;
        let r37 = rt37.rotation.to_rotation_matrix();

        let context = PlatformContext {
            previous_platform: qs[PLATFORM],
            previous_wrist_pitch: qs[WRIST_PITCH],
        };

        let platform = match angle_difference(r37.matrix()) {
            Some(difference) => {
                let candidates = platform_candidates(difference, context.previous_platform);
                self.resolver.resolve(&candidates, &context)
            }
            // Roll axis along the platform axis, any platform angle works
            None => context.previous_platform,
        };

        self.manipulator.links()[PLATFORM].limit.saturate(platform)
    }

    /// Joints 5 to 7 for joints 1 to 4 already set in `qs`. Not clamped.
    fn solve_wrist(&self, rt07: &Pose, qs: &mut [f64]) {
        let rt04 = self.manipulator.forward_from_base(qs, 4);
        let rt47 = rt04.inverse() * rt07;
        let euler = EulerZxz::from_rotation(&rt47.rotation.to_rotation_matrix());
        let [pitch, yaw, roll] = euler.wrist_joints();

        qs[WRIST_PITCH] = pitch;
        qs[WRIST_YAW] = yaw;
        // Roll turns more than once, stay on the turn of the previous command
        qs[WRIST_ROLL] = closest_turn(roll, qs[WRIST_ROLL]);
    }
}

/// acos with the argument clamped into its domain, flagging arguments that had to be moved.
fn checked_acos(cosine: f64, violations: &mut Violations) -> f64 {
    if !(-1.0 - DOMAIN_EPSILON..=1.0 + DOMAIN_EPSILON).contains(&cosine) {
        *violations |= Violations::UNREACHABLE;
    }
    cosine.clamp(-1.0, 1.0).acos()
}

impl<R: RedundancyResolver> Kinematics for MtmKinematics<R> {
    fn dof(&self) -> usize {
        self.manipulator.len()
    }

    /// A solution exactly on a limit of joints 1 to 3, or past it by no more than
    /// [`MtmKinematics::tolerance`], is moved onto the limit and returns `Ok`. Only values
    /// beyond the tolerance give `LimitReached`.
    fn inverse(&self, pose: &Pose, qs: &mut [f64]) -> Result<(), SolveError> {
        if let Err(err) = self.check_preconditions(pose, qs) {
            error!("MtmKinematics::inverse: {}", err);
            return Err(err);
        }

        // Take the base frame into account
        let rt07 = self.manipulator.rtw0.inverse() * pose;

        // If we encounter a joint limit, keep computing a solution but report failure at the end
        let violations = self.solve_shoulder_elbow(&rt07, qs);

        qs[PLATFORM] = self.optimal_platform_angle(qs, &rt07);

        self.solve_wrist(&rt07, qs);

        if violations.is_empty() {
            Ok(())
        } else {
            debug!("MtmKinematics::inverse: limits reached {:?}, joints {:?}", violations, qs);
            Err(SolveError::LimitReached(violations))
        }
    }

    fn forward(&self, qs: &[f64]) -> Pose {
        self.manipulator.forward(qs)
    }
}
