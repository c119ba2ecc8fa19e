//! Trial points: one coordinate per parameter plus the fitness evaluated there.

use sf_types::TrialError;
use tracing::debug;
use uuid::Uuid;

use crate::shared::SharedSpace;
use crate::space::ParameterSpace;

/// Unique trial identifier.
pub type TrialId = Uuid;

/// A candidate point in a [`ParameterSpace`] and its fitness.
///
/// The trial does not own any parameter metadata; it holds a handle to the
/// space it was created against. Coordinates and fitness are set by the
/// optimizer driving the search, which also decides whether lower or higher
/// fitness is better.
#[derive(Debug, Clone)]
pub struct Trial {
    id: TrialId,
    space: SharedSpace,
    point: Vec<f64>,
    fitness: f64,
}

impl Trial {
    /// Create a trial at the origin of `space` with zero fitness.
    pub fn new(space: SharedSpace) -> Self {
        let point = vec![0.0; space.len()];
        Self {
            id: Uuid::new_v4(),
            space,
            point,
            fitness: 0.0,
        }
    }

    /// Create a trial against a private copy of `space`.
    pub fn with_space(space: ParameterSpace) -> Self {
        Self::new(SharedSpace::new(space))
    }

    /// Replace the coordinates. The length is not checked here; diagnostics
    /// report a mismatch against the space.
    pub fn with_point(mut self, point: Vec<f64>) -> Self {
        self.point = point;
        self
    }

    pub fn with_fitness(mut self, fitness: f64) -> Self {
        self.fitness = fitness;
        self
    }

    pub fn id(&self) -> TrialId {
        self.id
    }

    pub fn space(&self) -> &SharedSpace {
        &self.space
    }

    pub fn point(&self) -> &[f64] {
        &self.point
    }

    pub fn point_mut(&mut self) -> &mut [f64] {
        &mut self.point
    }

    pub fn set_point(&mut self, point: Vec<f64>) {
        self.point = point;
    }

    pub fn set_coordinate(&mut self, index: usize, value: f64) -> Result<(), TrialError> {
        let len = self.point.len();
        let slot = self
            .point
            .get_mut(index)
            .ok_or(TrialError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Coordinate of the dimension called `name`.
    pub fn coordinate(&self, name: &str) -> Result<f64, TrialError> {
        let index = self.space.read(|space| space.index_of(name))?;
        self.point
            .get(index)
            .copied()
            .ok_or_else(|| TrialError::DimensionMismatch {
                expected: self.space.len(),
                actual: self.point.len(),
            })
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Register a dimension in the shared space and grow this trial's point
    /// to match. Other trials sharing the space catch up through
    /// [`Trial::sync_dimensions`].
    pub fn add_parameter(
        &mut self,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
    ) -> Option<TrialError> {
        let notice = self.space.add_parameter(name, lower, upper);
        self.sync_dimensions();
        notice
    }

    /// Resize the point to the current dimension count of the space. New
    /// coordinates start at zero.
    pub fn sync_dimensions(&mut self) {
        let len = self.space.len();
        if self.point.len() != len {
            debug!(
                "Resizing trial {} point from {} to {} dimensions",
                self.id,
                self.point.len(),
                len
            );
            self.point.resize(len, 0.0);
        }
    }

    pub fn check_dimensions(&self) -> Result<(), TrialError> {
        let expected = self.space.len();
        if self.point.len() != expected {
            return Err(TrialError::DimensionMismatch {
                expected,
                actual: self.point.len(),
            });
        }
        Ok(())
    }

    /// Whether every coordinate lies within its parameter's bounds.
    pub fn is_within_bounds(&self) -> Result<bool, TrialError> {
        self.space.read(|space| space.contains(&self.point))
    }

    /// Exchange point and fitness with `other`. Identity and space handle stay
    /// with each trial.
    pub fn swap_state(&mut self, other: &mut Trial) {
        std::mem::swap(&mut self.point, &mut other.point);
        std::mem::swap(&mut self.fitness, &mut other.fitness);
    }

    /// Take over the point and fitness of `source`.
    pub fn assign_from(&mut self, source: &Trial) {
        let mut point = source.point.clone();
        std::mem::swap(&mut self.point, &mut point);
        self.fitness = source.fitness;
    }
}
