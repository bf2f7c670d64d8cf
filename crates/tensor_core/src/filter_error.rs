//! Filter error types
//!
//! Errors raised while building data arrays or running the rotation filter.
//! A failed invocation produces no output mesh.

use std::fmt;

use crate::mesh::DataObjectKind;

/// Error type for filter operations
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// An array selected for rotation does not hold one 3x3 block per entity
    InvalidTensorShape {
        /// Name of the offending array
        name: String,
        /// Per-entity component shape of the array
        shape: Vec<usize>,
    },
    /// Value count is not a whole number of tuples
    InvalidArrayLength {
        /// Number of values supplied
        values: usize,
        /// Components per entity
        tuple_size: usize,
    },
    /// Input data object is not an unstructured grid
    UnsupportedInput(DataObjectKind),
    /// `update` was called before an input was connected
    MissingInput,
    /// The rotated array name is already taken and collisions are rejected
    NameCollision(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidTensorShape { name, shape } => {
                write!(f, "Invalid tensor shape for array '{}': {:?} (expected [3, 3])", name, shape)
            }
            FilterError::InvalidArrayLength { values, tuple_size } => {
                write!(f, "Invalid array length: {} values is not a multiple of {}", values, tuple_size)
            }
            FilterError::UnsupportedInput(kind) => {
                write!(f, "Unsupported input: {:?} (expected UnstructuredGrid)", kind)
            }
            FilterError::MissingInput => write!(f, "No input connected"),
            FilterError::NameCollision(name) => {
                write!(f, "Array name already exists: '{}'", name)
            }
        }
    }
}

impl std::error::Error for FilterError {}
