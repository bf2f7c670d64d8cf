//! Rank-2 tensor type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::mat3::{self, Mat3};

/// Number of components in a 3x3 tensor
pub const COMPONENTS: usize = 9;

/// A 3x3 tensor stored row-major (`m[row][col]`)
///
/// The layout matches nine consecutive `f64` components, so a flat
/// component buffer can be viewed as a slice of tensors without copying.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Tensor3 {
    pub m: Mat3,
}

impl Tensor3 {
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };
    pub const IDENTITY: Self = Self { m: mat3::IDENTITY };

    /// Create a tensor from its rows
    #[inline]
    pub const fn new(m: Mat3) -> Self {
        Self { m }
    }

    /// Create a tensor from nine row-major components
    #[inline]
    pub fn from_components(c: [f64; COMPONENTS]) -> Self {
        bytemuck::cast(c)
    }

    /// The nine row-major components
    #[inline]
    pub fn components(&self) -> [f64; COMPONENTS] {
        bytemuck::cast(*self)
    }

    /// Symmetric tensor from its six independent components
    /// (xx, yy, zz, xy, yz, xz)
    pub fn symmetric(xx: f64, yy: f64, zz: f64, xy: f64, yz: f64, xz: f64) -> Self {
        Self::new([
            [xx, xy, xz],
            [xy, yy, yz],
            [xz, yz, zz],
        ])
    }

    /// Component at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row][col]
    }

    /// Transposed tensor
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(mat3::transpose(self.m))
    }

    /// Sum of the diagonal, invariant under rotation
    #[inline]
    pub fn trace(&self) -> f64 {
        self.m[0][0] + self.m[1][1] + self.m[2][2]
    }

    /// Sum of squares of all nine components
    pub fn frobenius_norm_squared(&self) -> f64 {
        self.components().iter().map(|c| c * c).sum()
    }

    /// Frobenius norm (tensor magnitude)
    #[inline]
    pub fn frobenius_norm(&self) -> f64 {
        self.frobenius_norm_squared().sqrt()
    }

    /// Whether `m[i][j]` and `m[j][i]` agree within `epsilon`
    pub fn is_symmetric(&self, epsilon: f64) -> bool {
        (self.m[0][1] - self.m[1][0]).abs() <= epsilon
            && (self.m[0][2] - self.m[2][0]).abs() <= epsilon
            && (self.m[1][2] - self.m[2][1]).abs() <= epsilon
    }

    /// View a flat component buffer as tensors.
    ///
    /// Fails if the buffer length is not a multiple of nine.
    pub fn cast_slice(values: &[f64]) -> Result<&[Tensor3], ShapeError> {
        if values.len() % COMPONENTS != 0 {
            return Err(ShapeError { len: values.len() });
        }
        Ok(bytemuck::cast_slice(values))
    }

    /// Flatten tensors back into a row-major component buffer
    pub fn flatten(tensors: &[Tensor3]) -> &[f64] {
        bytemuck::cast_slice(tensors)
    }
}

impl From<Mat3> for Tensor3 {
    fn from(m: Mat3) -> Self {
        Self::new(m)
    }
}

impl From<Tensor3> for Mat3 {
    fn from(t: Tensor3) -> Self {
        t.m
    }
}

/// A flat component buffer could not be split into 3x3 blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    /// Length of the offending buffer
    pub len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} components do not form whole 3x3 tensors", self.len)
    }
}

impl std::error::Error for ShapeError {}
