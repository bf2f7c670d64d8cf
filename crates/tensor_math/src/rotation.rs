//! Composite rotation of rank-2 tensors
//!
//! A composite rotation is three elemental rotations applied one after the
//! other: about X first, then Y, then Z. Each step is a separate Rayleigh
//! product `T' = R * T * R^T`; the three matrices are never pre-multiplied.

use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::mat3::{axis_rotation, Axis, Mat3};
use crate::Tensor3;

/// Rotation angles about the x, y and z axes, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationAngles {
    /// Rotation about the x axis (degrees)
    pub rx: f64,
    /// Rotation about the y axis (degrees)
    pub ry: f64,
    /// Rotation about the z axis (degrees)
    pub rz: f64,
}

impl RotationAngles {
    /// No rotation
    pub const IDENTITY: Self = Self { rx: 0.0, ry: 0.0, rz: 0.0 };

    /// Create a rotation triple (degrees)
    #[inline]
    pub const fn new(rx: f64, ry: f64, rz: f64) -> Self {
        Self { rx, ry, rz }
    }

    /// Rotation about a single axis
    pub fn about(axis: Axis, degrees: f64) -> Self {
        match axis {
            Axis::X => Self::new(degrees, 0.0, 0.0),
            Axis::Y => Self::new(0.0, degrees, 0.0),
            Axis::Z => Self::new(0.0, 0.0, degrees),
        }
    }

    /// Whether all three angles are exactly zero
    pub fn is_identity(&self) -> bool {
        self.rx == 0.0 && self.ry == 0.0 && self.rz == 0.0
    }

    /// Angles in radians, computed as `deg / 180 * pi`
    pub fn to_radians(&self) -> [f64; 3] {
        [
            self.rx / 180.0 * PI,
            self.ry / 180.0 * PI,
            self.rz / 180.0 * PI,
        ]
    }

    /// The elemental matrices `[Rx, Ry, Rz]` in application order
    pub fn matrices(&self) -> [Mat3; 3] {
        let radians = self.to_radians();
        [
            axis_rotation(Axis::X, radians[0]),
            axis_rotation(Axis::Y, radians[1]),
            axis_rotation(Axis::Z, radians[2]),
        ]
    }
}

impl From<[f64; 3]> for RotationAngles {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<RotationAngles> for [f64; 3] {
    fn from(r: RotationAngles) -> Self {
        [r.rx, r.ry, r.rz]
    }
}

/// Rayleigh product of a tensor with a rotation matrix.
///
/// `T'[m][n] = sum_i sum_j R[m][i] * R[n][j] * T[i][j]`
///
/// The sum starts at 0.0 and runs with `i` outer and `j` inner, so the
/// result is bit-reproducible for a given input.
#[allow(clippy::needless_range_loop)]
pub fn rayleigh(t: &Tensor3, r: &Mat3) -> Tensor3 {
    let mut out = [[0.0f64; 3]; 3];

    for m in 0..3 {
        for n in 0..3 {
            let mut acc = 0.0;
            for i in 0..3 {
                for j in 0..3 {
                    acc += r[m][i] * r[n][j] * t.m[i][j];
                }
            }
            out[m][n] = acc;
        }
    }

    Tensor3::new(out)
}

/// Rotates tensors by a fixed composite rotation
///
/// The elemental matrices are built once at construction; rotating is then
/// three Rayleigh products per tensor.
///
/// # Example
/// ```
/// use tensor_math::{RotationAngles, Tensor3, TensorRotator};
///
/// let xx = Tensor3::new([[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
/// let rotator = TensorRotator::new(RotationAngles::new(0.0, 90.0, 0.0));
/// let rotated = rotator.rotate(&xx);
/// assert!((rotated.get(2, 2) - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TensorRotator {
    angles: RotationAngles,
    matrices: [Mat3; 3],
}

impl Default for TensorRotator {
    fn default() -> Self {
        Self::new(RotationAngles::IDENTITY)
    }
}

impl TensorRotator {
    /// Create a rotator for the given angles (degrees)
    pub fn new(angles: RotationAngles) -> Self {
        Self {
            angles,
            matrices: angles.matrices(),
        }
    }

    /// The angles this rotator was built from
    #[inline]
    pub fn angles(&self) -> RotationAngles {
        self.angles
    }

    /// The elemental matrices `[Rx, Ry, Rz]`
    #[inline]
    pub fn matrices(&self) -> &[Mat3; 3] {
        &self.matrices
    }

    /// Rotate one tensor: x first, then y, then z
    pub fn rotate(&self, t: &Tensor3) -> Tensor3 {
        let [rx, ry, rz] = &self.matrices;
        rayleigh(&rayleigh(&rayleigh(t, rx), ry), rz)
    }

    /// Rotate every tensor, preserving length and order
    pub fn rotate_all(&self, tensors: &[Tensor3]) -> Vec<Tensor3> {
        tensors.iter().map(|t| self.rotate(t)).collect()
    }
}

/// Rotate every tensor by `angles` (degrees)
pub fn rotate_all(tensors: &[Tensor3], angles: RotationAngles) -> Vec<Tensor3> {
    TensorRotator::new(angles).rotate_all(tensors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat3;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn tensor_approx_eq(a: &Tensor3, b: &Tensor3) -> bool {
        a.components()
            .iter()
            .zip(b.components().iter())
            .all(|(x, y)| approx_eq(*x, *y))
    }

    fn sample_tensors() -> Vec<Tensor3> {
        vec![
            Tensor3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]),
            Tensor3::symmetric(100.0, -20.0, 5.5, 12.0, -3.0, 0.25),
            Tensor3::IDENTITY,
            Tensor3::ZERO,
            Tensor3::new([[0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]),
        ]
    }

    fn unit_xx() -> Tensor3 {
        Tensor3::new([[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]])
    }

    #[test]
    fn test_radians_conversion() {
        let r = RotationAngles::new(180.0, 90.0, -45.0).to_radians();
        assert!(approx_eq(r[0], PI));
        assert!(approx_eq(r[1], PI / 2.0));
        assert!(approx_eq(r[2], -PI / 4.0));
    }

    #[test]
    fn test_rayleigh_matches_matrix_product() {
        let r = mat3::axis_rotation(Axis::Y, 0.7);
        for t in sample_tensors() {
            let expected = mat3::mul(mat3::mul(r, t.m), mat3::transpose(r));
            assert!(tensor_approx_eq(&rayleigh(&t, &r), &Tensor3::new(expected)));
        }
    }

    #[test]
    fn test_identity_rotation() {
        let tensors = sample_tensors();
        let rotated = rotate_all(&tensors, RotationAngles::default());
        assert_eq!(rotated.len(), tensors.len());
        for (a, b) in rotated.iter().zip(tensors.iter()) {
            assert!(tensor_approx_eq(a, b), "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_full_turn_is_identity() {
        let tensors = sample_tensors();
        let rotated = rotate_all(&tensors, RotationAngles::new(360.0, -720.0, 1080.0));
        for (a, b) in rotated.iter().zip(tensors.iter()) {
            assert!(tensor_approx_eq(a, b));
        }
    }

    #[test]
    fn test_rotation_preserves_magnitude() {
        let angles = [
            RotationAngles::new(30.0, 45.0, 60.0),
            RotationAngles::new(-170.0, 12.5, 400.0),
            RotationAngles::new(90.0, 90.0, 90.0),
        ];
        for angles in angles {
            for t in sample_tensors() {
                let rotated = rotate_all(&[t], angles)[0];
                let before = t.frobenius_norm_squared();
                let after = rotated.frobenius_norm_squared();
                assert!((before - after).abs() < 1e-9 * before.max(1.0),
                    "norm changed from {} to {} for {:?}", before, after, angles);
            }
        }
    }

    #[test]
    fn test_rotation_preserves_trace_and_symmetry() {
        let t = Tensor3::symmetric(100.0, -20.0, 5.5, 12.0, -3.0, 0.25);
        let rotated = TensorRotator::new(RotationAngles::new(17.0, -33.0, 71.0)).rotate(&t);
        assert!(approx_eq(rotated.trace(), t.trace()));
        assert!(rotated.is_symmetric(1e-9));
    }

    #[test]
    fn test_order_and_length_preserved() {
        let tensors = sample_tensors();
        let rotator = TensorRotator::new(RotationAngles::new(10.0, 20.0, 30.0));
        let rotated = rotator.rotate_all(&tensors);
        assert_eq!(rotated.len(), tensors.len());
        for (i, t) in tensors.iter().enumerate() {
            assert_eq!(rotated[i], rotator.rotate(t));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(rotate_all(&[], RotationAngles::new(1.0, 2.0, 3.0)).is_empty());
    }

    #[test]
    fn test_sequential_calls_match_composite() {
        let (rx, ry, rz) = (25.0, -40.0, 115.0);
        let tensors = sample_tensors();
        let step1 = rotate_all(&tensors, RotationAngles::new(rx, 0.0, 0.0));
        let step2 = rotate_all(&step1, RotationAngles::new(0.0, ry, 0.0));
        let step3 = rotate_all(&step2, RotationAngles::new(0.0, 0.0, rz));
        let composite = rotate_all(&tensors, RotationAngles::new(rx, ry, rz));
        for (a, b) in step3.iter().zip(composite.iter()) {
            assert!(tensor_approx_eq(a, b));
        }
    }

    #[test]
    fn test_rotation_order_matters() {
        let t = Tensor3::new([[0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        let x_then_y = rotate_all(
            &rotate_all(&[t], RotationAngles::about(Axis::X, 90.0)),
            RotationAngles::about(Axis::Y, 90.0),
        )[0];
        let y_then_x = rotate_all(
            &rotate_all(&[t], RotationAngles::about(Axis::Y, 90.0)),
            RotationAngles::about(Axis::X, 90.0),
        )[0];
        assert!(!tensor_approx_eq(&x_then_y, &y_then_x),
            "x->y and y->x gave the same result {:?}", x_then_y);

        // The composite call follows x->y, not y->x
        let composite = rotate_all(&[t], RotationAngles::new(90.0, 90.0, 0.0))[0];
        assert!(tensor_approx_eq(&composite, &x_then_y));
    }

    #[test]
    fn test_unit_xx_about_y_moves_to_zz() {
        let rotated = rotate_all(&[unit_xx()], RotationAngles::new(0.0, 90.0, 0.0))[0];
        let expected = Tensor3::new([[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(tensor_approx_eq(&rotated, &expected), "got {:?}", rotated);
    }

    #[test]
    fn test_unit_xx_about_z_moves_to_yy() {
        let rotated = rotate_all(&[unit_xx()], RotationAngles::new(0.0, 0.0, 90.0))[0];
        assert!(approx_eq(rotated.get(1, 1), 1.0));
        assert!(approx_eq(rotated.get(0, 0), 0.0));
    }

    #[test]
    fn test_shear_about_z_by_45_degrees() {
        // Pure shear xy rotated by 45 degrees about z becomes diagonal
        let t = Tensor3::symmetric(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let rotated = rotate_all(&[t], RotationAngles::new(0.0, 0.0, 45.0))[0];
        assert!(approx_eq(rotated.get(0, 0), -1.0));
        assert!(approx_eq(rotated.get(1, 1), 1.0));
        assert!(approx_eq(rotated.get(0, 1), 0.0));
    }

    #[test]
    fn test_deterministic() {
        let tensors = sample_tensors();
        let angles = RotationAngles::new(12.3, 45.6, 78.9);
        assert_eq!(rotate_all(&tensors, angles), rotate_all(&tensors, angles));
    }

    #[test]
    fn test_non_finite_values_propagate() {
        let rotated = rotate_all(&[Tensor3::IDENTITY], RotationAngles::new(f64::NAN, 0.0, 0.0))[0];
        assert!(rotated.get(1, 1).is_nan());

        // 0 * inf is NaN, so an infinite component spreads NaN to every output
        let t = Tensor3::new([[f64::INFINITY, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        let rotated = rotate_all(&[t], RotationAngles::default())[0];
        assert!(rotated.components().iter().all(|c| c.is_nan()), "got {:?}", rotated);

        let t = Tensor3::new([[1.0, 0.0, 0.0], [0.0, f64::NAN, 0.0], [0.0, 0.0, 1.0]]);
        let rotated = rotate_all(&[t], RotationAngles::new(0.0, 0.0, 30.0))[0];
        assert!(rotated.get(1, 1).is_nan());
    }

    #[test]
    fn test_rotator_keeps_angles() {
        let angles = RotationAngles::new(12.0, -34.0, 56.0);
        let rotator = TensorRotator::new(angles);
        assert_eq!(rotator.angles(), angles);
        assert_eq!(rotator.matrices(), &angles.matrices());
        assert_eq!(TensorRotator::default().angles(), RotationAngles::IDENTITY);
    }

    #[test]
    fn test_rotation_commutes_with_transpose() {
        // (R T R^T)^T = R T^T R^T
        let rotator = TensorRotator::new(RotationAngles::new(21.0, 63.0, -8.0));
        for t in sample_tensors() {
            let a = rotator.rotate(&t).transpose();
            let b = rotator.rotate(&t.transpose());
            assert!(tensor_approx_eq(&a, &b), "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_angles_array_conversion() {
        let angles: RotationAngles = [1.0, 2.0, 3.0].into();
        assert_eq!(angles, RotationAngles::new(1.0, 2.0, 3.0));
        let back: [f64; 3] = angles.into();
        assert_eq!(back, [1.0, 2.0, 3.0]);
        assert!(RotationAngles::default().is_identity());
        assert!(!angles.is_identity());
    }
}
