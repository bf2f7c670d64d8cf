//! Synthetic stress-field mesh
//!
//! A row of unit hexahedra along x carrying a uniaxial stress per cell, a
//! matching strain per point, and a scalar and a vector array that the
//! filter must leave alone.

use tensor_core::{AttributeData, DataArray, Mesh, Tensor3};

/// Build a bar of `cells` hexahedra under uniaxial stress `stress` along x
pub fn stress_bar(cells: usize, stress: f64) -> Mesh {
    let mut points = Vec::with_capacity(4 * (cells + 1));
    for i in 0..=cells {
        let x = i as f64;
        points.extend_from_slice(&[[x, 0.0, 0.0], [x, 1.0, 0.0], [x, 1.0, 1.0], [x, 0.0, 1.0]]);
    }

    let connectivity: Vec<Vec<usize>> = (0..cells)
        .map(|i| {
            let a = 4 * i;
            let b = 4 * (i + 1);
            vec![a, a + 1, a + 2, a + 3, b, b + 1, b + 2, b + 3]
        })
        .collect();

    let cell_stress: Vec<Tensor3> = (0..cells)
        .map(|_| Tensor3::symmetric(stress, 0.0, 0.0, 0.0, 0.0, 0.0))
        .collect();
    let von_mises = vec![stress.abs(); cells];

    let point_strain: Vec<Tensor3> = points
        .iter()
        .map(|p| Tensor3::symmetric(1e-3 * (1.0 + p[0]), 0.0, 0.0, 0.0, 0.0, 0.0))
        .collect();
    let displacement: Vec<[f64; 3]> = points.iter().map(|p| [1e-3 * p[0], 0.0, 0.0]).collect();

    Mesh::unstructured(points, connectivity)
        .with_cell_data(
            AttributeData::new()
                .with_array("stress", DataArray::tensors(&cell_stress))
                .with_array("von_mises", DataArray::scalars(von_mises)),
        )
        .with_point_data(
            AttributeData::new()
                .with_array("strain", DataArray::tensors(&point_strain))
                .with_array("displacement", DataArray::vectors(&displacement)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensor_core::AttributeSet;

    #[test]
    fn test_stress_bar_counts() {
        let mesh = stress_bar(3, 50.0);
        assert_eq!(mesh.num_cells(), 3);
        assert_eq!(mesh.num_points(), 16);
        assert_eq!(mesh.cell_data.get("stress").unwrap().tuple_count(), 3);
        assert_eq!(mesh.point_data.get("strain").unwrap().tuple_count(), 16);
        assert_eq!(mesh.point_data.get("displacement").unwrap().tuple_count(), 16);
    }

    #[test]
    fn test_stress_bar_connectivity() {
        let mesh = stress_bar(2, 1.0);
        assert_eq!(mesh.cells()[1], vec![4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_empty_bar() {
        let mesh = stress_bar(0, 1.0);
        assert_eq!(mesh.num_cells(), 0);
        assert_eq!(mesh.num_points(), 4);
        assert_eq!(mesh.cell_data.get("stress").unwrap().tuple_count(), 0);
    }
}
