//! # sf-optimizer
//!
//! Parameter spaces and trial points for Swarmfit optimizers.
//!
//! Provides bounded parameter space definitions, a lock-protected handle for
//! sharing one space across many trials, the trial value type (coordinates
//! plus fitness), and fixed-width text diagnostics.

mod display;
mod shared;
mod space;
mod trial;

pub use display::{NumberFormat, ShowOptions};
pub use shared::SharedSpace;
pub use space::{ParameterDef, ParameterSpace};
pub use trial::{Trial, TrialId};

pub use sf_types::{SfError, SfResult, TrialError};
