//! Rotate Tensors - rotation of stress and strain fields on meshes
//!
//! Re-exports the kernel and filter crates and adds the layered
//! configuration and the synthetic demo mesh used by the binary.

pub mod config;
pub mod demo;

pub use tensor_core::*;
pub use tensor_math::{mat3, rayleigh, rotate_all, Axis, Mat3, ShapeError};
