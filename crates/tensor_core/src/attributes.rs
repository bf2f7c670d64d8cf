//! Named attribute sets
//!
//! An attribute set maps array names to arrays for one kind of mesh entity
//! (cells or points). Arrays are shared through `Arc`, so copying a set
//! aliases its arrays instead of duplicating their values.

use std::sync::Arc;

use crate::DataArray;

/// Named mapping from array name to data array
pub trait AttributeSet {
    /// Array names in iteration order
    fn keys(&self) -> Vec<String>;

    /// Look up an array by name
    fn get(&self, name: &str) -> Option<Arc<DataArray>>;

    /// Add or replace an array, returning the array it replaced
    fn set(&mut self, name: &str, array: Arc<DataArray>) -> Option<Arc<DataArray>>;

    /// Whether an array with this name exists
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of arrays
    fn len(&self) -> usize {
        self.keys().len()
    }

    /// Whether the set holds no arrays
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered attribute set
///
/// Replacing an existing name keeps its original position.
#[derive(Clone, Debug, Default)]
pub struct AttributeData {
    arrays: Vec<(String, Arc<DataArray>)>,
}

impl AttributeData {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an array by value
    pub fn with_array(mut self, name: impl Into<String>, array: DataArray) -> Self {
        let name = name.into();
        self.set(&name, Arc::new(array));
        self
    }

    /// Iterate over `(name, array)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<DataArray>)> {
        self.arrays.iter().map(|(name, array)| (name.as_str(), array))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.arrays.iter().position(|(n, _)| n == name)
    }
}

impl AttributeSet for AttributeData {
    fn keys(&self) -> Vec<String> {
        self.arrays.iter().map(|(name, _)| name.clone()).collect()
    }

    fn get(&self, name: &str) -> Option<Arc<DataArray>> {
        self.position(name).map(|i| Arc::clone(&self.arrays[i].1))
    }

    fn set(&mut self, name: &str, array: Arc<DataArray>) -> Option<Arc<DataArray>> {
        match self.position(name) {
            Some(i) => Some(std::mem::replace(&mut self.arrays[i].1, array)),
            None => {
                self.arrays.push((name.to_string(), array));
                None
            }
        }
    }

    fn len(&self) -> usize {
        self.arrays.len()
    }
}
