//! Tensor Rotation Mathematics
//!
//! This crate provides the rotation kernel for rank-2 tensor fields such as
//! stress and strain.
//!
//! ## Core Types
//!
//! - [`Tensor3`] - 3x3 tensor, castable from flat component buffers
//! - [`Mat3`] - 3x3 matrix for elemental rotations
//! - [`RotationAngles`] - rotation about x, y and z in degrees
//! - [`TensorRotator`] - applies a composite x -> y -> z rotation to tensors

pub mod mat3;
mod tensor3;
mod rotation;

pub use mat3::{Axis, Mat3};
pub use tensor3::{ShapeError, Tensor3, COMPONENTS};
pub use rotation::{rayleigh, rotate_all, RotationAngles, TensorRotator};
