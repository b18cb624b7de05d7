//! Errors of the model file reader

use std::fmt;
use std::io;

/// Why a manipulator model could not be read. Fields are named by their YAML path,
/// like `links[2].alpha` or `base_frame.translation`.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    /// Not valid YAML, or a value of the wrong kind
    ParseError(String),
    MissingField(String),
    /// Angle that is neither a number nor `deg(number)`
    WrongAngle { field: String, text: String },
    InvalidLength { expected: usize, found: usize },
    /// Lower joint limit above the upper one, radians
    InvalidLimits { link: usize, min: f64, max: f64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParameterError::IoError(err) => write!(f, "cannot read model file: {}", err),
            ParameterError::ParseError(msg) => write!(f, "malformed model: {}", msg),
            ParameterError::MissingField(field) => write!(f, "missing field {}", field),
            ParameterError::WrongAngle { field, text } => {
                write!(f, "{}: '{}' is not an angle, use radians or deg(angle)", field, text)
            }
            ParameterError::InvalidLength { expected, found } => {
                write!(f, "expected {} values, found {}", expected, found)
            }
            ParameterError::InvalidLimits { link, min, max } => write!(
                f,
                "links[{}]: lower limit {:.4} deg is above upper limit {:.4} deg",
                link,
                min.to_degrees(),
                max.to_degrees()
            ),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}
