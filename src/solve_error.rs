//! Outcome of the inverse kinematics solve

use bitflags::bitflags;

bitflags! {
    /// Non-fatal problems found while solving. The joint vector is fully populated
    /// even if any of these are set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Violations: u8 {
        /// Joint 1 (outer yaw) was clamped to its limit
        const JOINT_1 = 1 << 0;
        /// Joint 2 (shoulder pitch) was clamped to its limit
        const JOINT_2 = 1 << 1;
        /// Joint 3 (elbow pitch) was clamped to its limit
        const JOINT_3 = 1 << 2;
        /// Target outside the reach of the arm, trigonometric arguments were clamped
        const UNREACHABLE = 1 << 3;
    }
}

impl Violations {
    /// Flag for the joint with the given (zero based) index, only joints 1 to 3 have one.
    pub fn joint(index: usize) -> Violations {
        match index {
            0 => Violations::JOINT_1,
            1 => Violations::JOINT_2,
            2 => Violations::JOINT_3,
            _ => Violations::empty(),
        }
    }
}

/// Failure of the inverse kinematics. Only `LimitReached` comes with a populated joint
/// vector, others are precondition failures reported before anything is computed.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    DimensionMismatch { expected: usize, found: usize },
    NoLinks,
    IncompleteModel { expected: usize, found: usize },
    NonFinite,
    LimitReached(Violations),
}

impl SolveError {
    /// True if the solver returned without computing anything.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, SolveError::LimitReached(_))
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            SolveError::DimensionMismatch { expected, found } =>
                write!(f, "expected {} joints values but received {}", expected, found),
            SolveError::NoLinks =>
                write!(f, "the manipulator has no links"),
            SolveError::IncompleteModel { expected, found } =>
                write!(f, "the solver needs {} links but the manipulator has {}", expected, found),
            SolveError::NonFinite =>
                write!(f, "target pose or previous joint values are not finite"),
            SolveError::LimitReached(violations) => {
                let names: Vec<&str> = violations.iter_names().map(|(name, _)| name).collect();
                write!(f, "joint limit reached: {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for SolveError {}
