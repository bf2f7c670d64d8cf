//! Core types for rotating tensor fields on meshes
//!
//! This crate provides the host-facing side of tensor rotation:
//!
//! - [`DataArray`] - One tuple per mesh entity with a fixed component shape
//! - [`AttributeSet`] - Named mapping of arrays (`keys`, `get`, `set`)
//! - [`AttributeData`] - Insertion-ordered attribute set
//! - [`Mesh`] - Unstructured mesh with cell and point attribute sets
//! - [`RotateTensorsFilter`] - Pipeline filter adding `(rotated)` tensor arrays
//! - [`FilterError`] - Errors raised by the filter

mod data_array;
mod attributes;
mod mesh;
mod filter;
mod filter_error;

pub use data_array::DataArray;
pub use attributes::{AttributeData, AttributeSet};
pub use mesh::{DataObjectKind, Mesh};
pub use filter::{
    rotate_attributes, rotated_name, FilterDirty, FilterReport, NameCollisionPolicy,
    RotateTensorsFilter, ROTATED_SUFFIX,
};
pub use filter_error::FilterError;

// Re-export the kernel types for convenience
pub use tensor_math::{RotationAngles, Tensor3, TensorRotator};
