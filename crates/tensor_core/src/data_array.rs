//! Data arrays attached to mesh cells or points
//!
//! A [`DataArray`] holds one tuple per entity. Each tuple has a fixed
//! component shape: `[]` for scalars, `[3]` for vectors, `[3, 3]` for
//! tensors. Components are stored flat and row-major.

use serde::{Serialize, Deserialize};
use tensor_math::Tensor3;

use crate::filter_error::FilterError;

/// One tuple per mesh entity with a fixed per-entity component shape
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataArray {
    component_shape: Vec<usize>,
    values: Vec<f64>,
}

impl DataArray {
    /// Create an array with the given per-entity shape.
    ///
    /// Fails if `values` is not a whole number of tuples.
    pub fn new(component_shape: Vec<usize>, values: Vec<f64>) -> Result<Self, FilterError> {
        let tuple_size: usize = component_shape.iter().product();
        let whole = if tuple_size == 0 {
            values.is_empty()
        } else {
            values.len() % tuple_size == 0
        };
        if !whole {
            return Err(FilterError::InvalidArrayLength {
                values: values.len(),
                tuple_size,
            });
        }
        Ok(Self { component_shape, values })
    }

    /// One number per entity
    pub fn scalars(values: Vec<f64>) -> Self {
        Self { component_shape: Vec::new(), values }
    }

    /// One 3-vector per entity
    pub fn vectors(vectors: &[[f64; 3]]) -> Self {
        Self {
            component_shape: vec![3],
            values: vectors.iter().flatten().copied().collect(),
        }
    }

    /// One 3x3 tensor per entity
    pub fn tensors(tensors: &[Tensor3]) -> Self {
        Self {
            component_shape: vec![3, 3],
            values: Tensor3::flatten(tensors).to_vec(),
        }
    }

    /// Per-entity component shape
    #[inline]
    pub fn component_shape(&self) -> &[usize] {
        &self.component_shape
    }

    /// Flat row-major values
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Components per entity
    #[inline]
    pub fn tuple_size(&self) -> usize {
        self.component_shape.iter().product()
    }

    /// Number of entities
    pub fn tuple_count(&self) -> usize {
        match self.tuple_size() {
            0 => 0,
            n => self.values.len() / n,
        }
    }

    /// Rank of each tuple (0 scalar, 1 vector, 2 matrix, ...)
    #[inline]
    pub fn rank(&self) -> usize {
        self.component_shape.len()
    }

    /// Dimensions of the whole array, including the leading entity axis.
    ///
    /// Scalar arrays are reported as `N x 1`, like the host's array adapter.
    pub fn array_dimensions(&self) -> usize {
        self.rank().max(1) + 1
    }

    /// Whether each entity holds at least a matrix
    #[inline]
    pub fn is_tensor_field(&self) -> bool {
        self.array_dimensions() > 2
    }

    /// View the values as 3x3 tensors.
    ///
    /// `name` is only used for the error.
    pub fn as_tensors(&self, name: &str) -> Result<&[Tensor3], FilterError> {
        let invalid = || FilterError::InvalidTensorShape {
            name: name.to_string(),
            shape: self.component_shape.clone(),
        };
        if self.component_shape != [3, 3] {
            return Err(invalid());
        }
        Tensor3::cast_slice(&self.values).map_err(|_| invalid())
    }
}
