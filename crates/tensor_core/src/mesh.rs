//! Mesh container
//!
//! A minimal unstructured mesh: shared point coordinates, shared cell
//! connectivity and two attribute sets. Geometry is never modified by the
//! filter; it only travels along with the arrays.

use std::sync::Arc;
use serde::{Serialize, Deserialize};

use crate::attributes::{AttributeData, AttributeSet};

/// Kind of data object handed to the filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataObjectKind {
    /// Arbitrary cells over explicit points
    UnstructuredGrid,
    /// Polygonal surface data
    PolyData,
    /// Regular image grid
    ImageData,
    /// Composite dataset of several blocks
    MultiBlock,
}

/// A mesh with cell-attached and point-attached arrays
#[derive(Clone, Debug)]
pub struct Mesh {
    kind: DataObjectKind,
    points: Arc<Vec<[f64; 3]>>,
    cells: Arc<Vec<Vec<usize>>>,
    /// Arrays with one tuple per cell
    pub cell_data: AttributeData,
    /// Arrays with one tuple per point
    pub point_data: AttributeData,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new(DataObjectKind::UnstructuredGrid)
    }
}

impl Mesh {
    /// Create an empty mesh of the given kind
    pub fn new(kind: DataObjectKind) -> Self {
        Self {
            kind,
            points: Arc::new(Vec::new()),
            cells: Arc::new(Vec::new()),
            cell_data: AttributeData::new(),
            point_data: AttributeData::new(),
        }
    }

    /// Create an unstructured grid from points and cell connectivity
    pub fn unstructured(points: Vec<[f64; 3]>, cells: Vec<Vec<usize>>) -> Self {
        Self {
            points: Arc::new(points),
            cells: Arc::new(cells),
            ..Self::new(DataObjectKind::UnstructuredGrid)
        }
    }

    /// Set the cell data
    pub fn with_cell_data(mut self, data: AttributeData) -> Self {
        self.cell_data = data;
        self
    }

    /// Set the point data
    pub fn with_point_data(mut self, data: AttributeData) -> Self {
        self.point_data = data;
        self
    }

    /// Kind of data object
    #[inline]
    pub fn kind(&self) -> DataObjectKind {
        self.kind
    }

    /// Point coordinates
    #[inline]
    pub fn points(&self) -> &Arc<Vec<[f64; 3]>> {
        &self.points
    }

    /// Cell connectivity (point indices per cell)
    #[inline]
    pub fn cells(&self) -> &Arc<Vec<Vec<usize>>> {
        &self.cells
    }

    /// Number of points
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of cells
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Copy the mesh structure, sharing geometry and every array
    pub fn shallow_copy(&self) -> Self {
        self.clone()
    }

    /// Whether the mesh has no points, no cells and no arrays
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
            && self.cells.is_empty()
            && self.cell_data.is_empty()
            && self.point_data.is_empty()
    }
}
