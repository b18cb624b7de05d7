//! Supports reading the manipulator model (DH links, joint limits, base frame and tool tip
//! offset) from YAML file (optional)

use std::path::Path;
use std::sync::Arc;

use nalgebra::{Translation3, UnitQuaternion};
use regex::Regex;
use tracing::{debug, info};
use yaml_rust2::{Yaml, YamlLoader};

use crate::joint_limits::JointLimit;
use crate::kinematic_traits::{Kinematics, Pose};
use crate::kinematics_impl::MtmKinematics;
use crate::manipulator::{DhConvention, Link, Manipulator};
use crate::parameter_error::ParameterError;
use crate::tool::Tool;

/// Everything a model file describes.
#[derive(Debug, Clone)]
pub struct ManipulatorConfig {
    pub name: Option<String>,
    pub manipulator: Manipulator,
    /// Transformation from the last link to the tool tip, if any
    pub tool_tip_offset: Option<Pose>,
}

impl Manipulator {
    /// Read the link model from YAML file, see [`ManipulatorConfig::from_yaml_str`] for
    /// the format. A tool tip offset in the file is ignored here.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        Ok(ManipulatorConfig::from_yaml_file(path)?.manipulator)
    }
}

impl ManipulatorConfig {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        info!("Reading manipulator model from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse the model. YAML like this is supported:
    /// ```yaml
    /// name: MTM
    /// base_frame:
    ///   translation: [0.0, 0.0, 0.0]
    ///   rpy: [0, 0, deg(90)]
    /// tool_tip_offset:
    ///   translation: [0.0, 0.0, 0.04]
    ///   rpy: [0, 0, 0]
    /// links:
    ///   - { convention: standard, alpha: deg(90), a: 0.0, d: 0.0, offset: deg(-90), min: deg(-40), max: deg(65) }
    ///   - { alpha: 0, a: 0.2794, d: 0, offset: deg(-90), min: deg(-15), max: deg(50) }
    /// ```
    /// Angles are radians unless written as `deg(angle)`. `base_frame`, `tool_tip_offset`,
    /// `name`, `convention` (standard if missing), `offset` and the limits are optional.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let root = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("empty document".to_string()))?;

        let angles = AngleParser::new()?;

        let links_yaml = root["links"]
            .as_vec()
            .ok_or_else(|| ParameterError::MissingField("links".to_string()))?;
        if links_yaml.is_empty() {
            return Err(ParameterError::ParseError("links list is empty".to_string()));
        }

        let mut links = Vec::with_capacity(links_yaml.len());
        for (index, link_yaml) in links_yaml.iter().enumerate() {
            links.push(parse_link(link_yaml, index, &angles)?);
        }

        let rtw0 = parse_frame(&root["base_frame"], "base_frame", &angles)?
            .unwrap_or_else(Pose::identity);
        let tool_tip_offset = parse_frame(&root["tool_tip_offset"], "tool_tip_offset", &angles)?;
        let name = root["name"].as_str().map(str::to_string);

        debug!("Loaded {} links, tool tip offset: {}", links.len(), tool_tip_offset.is_some());

        Ok(ManipulatorConfig {
            name,
            manipulator: Manipulator::new(links, rtw0),
            tool_tip_offset,
        })
    }

    /// Build the MTM solver, wrapped into [`Tool`] if the file has a tool tip offset.
    pub fn to_robot(self) -> Arc<dyn Kinematics> {
        let arm = MtmKinematics::new(self.manipulator);
        match self.tool_tip_offset {
            Some(tool) => Arc::new(Tool { robot: Arc::new(arm), tool }),
            None => Arc::new(arm),
        }
    }
}

/// Reads angles written either as plain radians or as `deg(angle)`.
struct AngleParser {
    degrees: Regex,
}

impl AngleParser {
    fn new() -> Result<Self, ParameterError> {
        let degrees = Regex::new(r"^\s*deg\(\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*\)\s*$")
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        Ok(AngleParser { degrees })
    }

    fn parse(&self, value: &Yaml, field: &str) -> Result<f64, ParameterError> {
        match value {
            Yaml::String(text) => {
                let wrong = || ParameterError::WrongAngle {
                    field: field.to_string(),
                    text: text.clone(),
                };
                let captures = self.degrees.captures(text).ok_or_else(wrong)?;
                let degrees: f64 = captures[1].parse().map_err(|_| wrong())?;
                Ok(degrees.to_radians())
            }
            other => number(other, field),
        }
    }
}

fn number(value: &Yaml, field: &str) -> Result<f64, ParameterError> {
    let parsed = match value {
        Yaml::Real(_) => value.as_f64(),
        Yaml::Integer(i) => Some(*i as f64),
        Yaml::BadValue | Yaml::Null => return Err(ParameterError::MissingField(field.to_string())),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ParameterError::ParseError(format!("{} must be a finite number", field))),
    }
}

fn optional<T>(value: &Yaml, parse: impl FnOnce(&Yaml) -> Result<T, ParameterError>)
               -> Result<Option<T>, ParameterError> {
    match value {
        Yaml::BadValue | Yaml::Null => Ok(None),
        present => parse(present).map(Some),
    }
}

fn parse_link(yaml: &Yaml, index: usize, angles: &AngleParser) -> Result<Link, ParameterError> {
    let field = |name: &str| format!("links[{}].{}", index, name);

    let convention = match yaml["convention"].as_str() {
        None => DhConvention::Standard,
        Some("standard") => DhConvention::Standard,
        Some("modified") => DhConvention::Modified,
        Some(other) => {
            return Err(ParameterError::ParseError(format!(
                "{} must be 'standard' or 'modified' (got '{}')", field("convention"), other
            )));
        }
    };

    let alpha = angles.parse(&yaml["alpha"], &field("alpha"))?;
    let a = number(&yaml["a"], &field("a"))?;
    let d = number(&yaml["d"], &field("d"))?;
    let offset = optional(&yaml["offset"], |v| angles.parse(v, &field("offset")))?
        .unwrap_or(0.0);
    let min = optional(&yaml["min"], |v| angles.parse(v, &field("min")))?
        .unwrap_or(f64::NEG_INFINITY);
    let max = optional(&yaml["max"], |v| angles.parse(v, &field("max")))?
        .unwrap_or(f64::INFINITY);

    if min > max {
        return Err(ParameterError::InvalidLimits { link: index, min, max });
    }

    Ok(Link::new(convention, alpha, a, d, offset, JointLimit::new(min, max)))
}

fn parse_frame(yaml: &Yaml, name: &str, angles: &AngleParser) -> Result<Option<Pose>, ParameterError> {
    optional(yaml, |frame| {
        let translation = triple(&frame["translation"], &format!("{}.translation", name),
                                 |v, f| number(v, f))?;
        let rpy = match &frame["rpy"] {
            Yaml::BadValue | Yaml::Null => [0.0; 3],
            present => triple(present, &format!("{}.rpy", name), |v, f| angles.parse(v, f))?,
        };
        Ok(Pose::from_parts(
            Translation3::new(translation[0], translation[1], translation[2]),
            UnitQuaternion::from_euler_angles(rpy[0], rpy[1], rpy[2]),
        ))
    })
}

fn triple(yaml: &Yaml, field: &str,
          parse: impl Fn(&Yaml, &str) -> Result<f64, ParameterError>) -> Result<[f64; 3], ParameterError> {
    let values = yaml
        .as_vec()
        .ok_or_else(|| ParameterError::MissingField(field.to_string()))?;
    if values.len() != 3 {
        return Err(ParameterError::InvalidLength { expected: 3, found: values.len() });
    }
    let mut out = [0.0; 3];
    for (i, value) in values.iter().enumerate() {
        out[i] = parse(value, &format!("{}[{}]", field, i))?;
    }
    Ok(out)
}
