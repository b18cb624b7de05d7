/// Position range of a single joint. Unlike angular constraints of continuous joints, the
/// MTM joints have hard stops so the range never wraps around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointLimit {
    /// Lower limit, radians
    pub min: f64,

    /// Upper limit, radians
    pub max: f64,
}

/// Tolerance the solver uses when checking joints 1 to 3 against their limits.
pub const DEFAULT_LIMIT_TOLERANCE: f64 = 1e-5;

impl JointLimit {
    pub fn new(min: f64, max: f64) -> Self {
        JointLimit { min, max }
    }

    /// Joint without meaningful limits.
    pub fn unlimited() -> Self {
        JointLimit { min: f64::NEG_INFINITY, max: f64::INFINITY }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Value moved into the range, no reporting.
    pub fn saturate(&self, value: f64) -> f64 {
        if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }

    /// Clamps the value into the range. Returns true if the value was outside the range by
    /// more than `tolerance`. Values outside the range but within the tolerance are still
    /// moved to the boundary, but not reported.
    pub fn clamp(&self, value: &mut f64, tolerance: f64) -> bool {
        let reached = *value > self.max + tolerance || *value < self.min - tolerance;
        *value = self.saturate(*value);
        reached
    }
}

/// Checks all joints against their limits.
pub fn compliant(limits: &[JointLimit], angles: &[f64]) -> bool {
    limits.len() == angles.len()
        && limits.iter().zip(angles).all(|(limit, &angle)| limit.contains(angle))
}
