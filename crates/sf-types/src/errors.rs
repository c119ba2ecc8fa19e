use thiserror::Error;

/// Main error type for Swarmfit
#[derive(Error, Debug)]
pub enum SfError {
    #[error("Trial error: {0}")]
    Trial(#[from] TrialError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Parameter-space and trial errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrialError {
    /// Not fatal: the parameter was registered with its bounds swapped.
    #[error("Bounds for parameter {name} were given in reverse order and have been swapped to [{lower}, {upper}]")]
    InvalidBoundsIgnored { name: String, lower: f64, upper: f64 },

    #[error("Dimension mismatch: parameter space has {expected} dimensions, trial point has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Parameter not found: {name}")]
    ParameterNotFound { name: String },

    #[error("Parameter index {index} out of range for a space of {len} dimensions")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot sample parameter {name}: bounds are not finite or their range overflows")]
    NonFiniteBounds { name: String },
}

impl TrialError {
    /// Whether the error only reports a corrected input.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::InvalidBoundsIgnored { .. })
    }
}

/// Result type alias for Swarmfit operations
pub type SfResult<T> = Result<T, SfError>;
