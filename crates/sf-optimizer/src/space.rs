//! Parameter space definitions: named, bounded dimensions.

use rand::distr::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sf_types::{SfResult, TrialError};
use std::path::Path;
use tracing::{debug, warn};

/// A single bounded dimension of the parameter space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDef {
    /// Human-readable parameter name (e.g. "inertia").
    pub name: String,
    /// Inclusive lower bound.
    pub lower: f64,
    /// Inclusive upper bound.
    pub upper: f64,
}

impl ParameterDef {
    /// Whether `value` lies inside the inclusive bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Wire shape of a parameter space. Every entry is re-registered on load so
/// reversed bounds in a config file are corrected the same way as in code.
#[derive(Deserialize)]
struct RawSpace {
    #[serde(default)]
    parameters: Vec<ParameterDef>,
}

impl From<RawSpace> for ParameterSpace {
    fn from(raw: RawSpace) -> Self {
        let mut space = ParameterSpace::new();
        for def in raw.parameters {
            space.add_parameter(def.name, def.lower, def.upper);
        }
        space
    }
}

/// The full parameter space: an ordered list of bounded dimensions.
///
/// Dimensions are only ever appended, so the index of a parameter is stable
/// for the lifetime of the space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSpace")]
pub struct ParameterSpace {
    parameters: Vec<ParameterDef>,
}

impl ParameterSpace {
    pub fn new() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    /// Register a new dimension.
    ///
    /// Reversed bounds are swapped so that `lower <= upper` always holds; in
    /// that case the parameter is still added and the returned
    /// [`TrialError::InvalidBoundsIgnored`] describes the correction. Names
    /// and NaN bounds are not validated.
    pub fn add_parameter(
        &mut self,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
    ) -> Option<TrialError> {
        let name = name.into();
        let (lower, upper, notice) = if lower > upper {
            warn!(
                "Parameter {} registered with reversed bounds [{}, {}], swapping",
                name, lower, upper
            );
            let notice = TrialError::InvalidBoundsIgnored {
                name: name.clone(),
                lower: upper,
                upper: lower,
            };
            (upper, lower, Some(notice))
        } else {
            (lower, upper, None)
        };

        debug!("Registered parameter {} in [{}, {}]", name, lower, upper);
        self.parameters.push(ParameterDef { name, lower, upper });
        notice
    }

    /// Builder form of [`ParameterSpace::add_parameter`].
    pub fn with_parameter(mut self, name: impl Into<String>, lower: f64, upper: f64) -> Self {
        self.add_parameter(name, lower, upper);
        self
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn parameters(&self) -> &[ParameterDef] {
        &self.parameters
    }

    pub fn get(&self, index: usize) -> Option<&ParameterDef> {
        self.parameters.get(index)
    }

    pub fn names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn lower_bounds(&self) -> Vec<f64> {
        self.parameters.iter().map(|p| p.lower).collect()
    }

    pub fn upper_bounds(&self) -> Vec<f64> {
        self.parameters.iter().map(|p| p.upper).collect()
    }

    /// Position of the first dimension called `name`.
    pub fn index_of(&self, name: &str) -> Result<usize, TrialError> {
        self.parameters
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| TrialError::ParameterNotFound {
                name: name.to_string(),
            })
    }

    fn check_len(&self, point: &[f64]) -> Result<(), TrialError> {
        if point.len() != self.parameters.len() {
            return Err(TrialError::DimensionMismatch {
                expected: self.parameters.len(),
                actual: point.len(),
            });
        }
        Ok(())
    }

    /// Whether every coordinate of `point` lies within its bounds.
    pub fn contains(&self, point: &[f64]) -> Result<bool, TrialError> {
        self.check_len(point)?;
        Ok(self
            .parameters
            .iter()
            .zip(point)
            .all(|(param, &value)| param.contains(value)))
    }

    /// Project `point` onto the bounds, coordinate by coordinate. NaN bounds
    /// leave the coordinate untouched.
    pub fn clamp(&self, point: &[f64]) -> Result<Vec<f64>, TrialError> {
        self.check_len(point)?;
        Ok(self
            .parameters
            .iter()
            .zip(point)
            .map(|(param, &value)| value.max(param.lower).min(param.upper))
            .collect())
    }

    /// Draw a point uniformly from the bounded box. Fails on NaN or infinite
    /// bounds, and on ranges whose width overflows `f64`.
    pub fn sample_point<R: Rng>(&self, rng: &mut R) -> Result<Vec<f64>, TrialError> {
        self.parameters
            .iter()
            .map(|param| {
                let uniform = Uniform::new_inclusive(param.lower, param.upper).map_err(|_| {
                    TrialError::NonFiniteBounds {
                        name: param.name.clone(),
                    }
                })?;
                Ok(uniform.sample(&mut *rng))
            })
            .collect()
    }

    /// Load a space from its JSON representation.
    pub fn from_json_str(json: &str) -> SfResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> SfResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        debug!("Loading parameter space from {}", path.as_ref().display());
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> SfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ParameterSpace {
    fn default() -> Self {
        Self::new()
    }
}
