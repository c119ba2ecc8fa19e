//! Shared handle to a parameter space that many trials point into.

use parking_lot::RwLock;
use sf_types::TrialError;
use std::sync::Arc;

use crate::space::ParameterSpace;

/// Cheaply clonable handle to one [`ParameterSpace`].
///
/// Clones share the same underlying space. Registration takes the write lock,
/// so readers on other threads never observe a half-appended dimension.
#[derive(Debug, Clone, Default)]
pub struct SharedSpace {
    inner: Arc<RwLock<ParameterSpace>>,
}

impl SharedSpace {
    pub fn new(space: ParameterSpace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(space)),
        }
    }

    /// Register a dimension in the shared space.
    pub fn add_parameter(
        &self,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
    ) -> Option<TrialError> {
        self.inner.write().add_parameter(name, lower, upper)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Run `f` against the space under the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&ParameterSpace) -> T) -> T {
        f(&self.inner.read())
    }

    /// Owned copy of the current space.
    pub fn snapshot(&self) -> ParameterSpace {
        self.inner.read().clone()
    }

    /// Whether both handles point at the same space.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<ParameterSpace> for SharedSpace {
    fn from(space: ParameterSpace) -> Self {
        Self::new(space)
    }
}
