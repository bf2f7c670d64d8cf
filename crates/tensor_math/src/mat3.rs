//! 3x3 matrix utilities for tensor rotation
//!
//! This module provides the elemental axis rotations and the few matrix
//! operations the rotation kernel and its tests need.

use serde::{Deserialize, Serialize};

/// 3x3 matrix type (row-major: `m[row][col]`)
pub type Mat3 = [[f64; 3]; 3];

/// Identity matrix
pub const IDENTITY: Mat3 = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// A coordinate axis of 3D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Rotation about X moves Y toward Z
    X,
    /// Rotation about Y moves Z toward X
    Y,
    /// Rotation about Z moves X toward Y
    Z,
}

impl Axis {
    /// All axes in the order they are applied by a composite rotation
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Create the elemental rotation matrix about a single axis.
///
/// Uses the right-handed convention:
/// - X: `[1,0,0] [0,c,-s] [0,s,c]`
/// - Y: `[c,0,s] [0,1,0] [-s,0,c]`
/// - Z: `[c,-s,0] [s,c,0] [0,0,1]`
///
/// # Arguments
/// * `axis` - Axis to rotate about
/// * `angle` - Rotation angle in radians
///
/// # Example
/// ```
/// use tensor_math::mat3::{axis_rotation, Axis};
/// let m = axis_rotation(Axis::Z, std::f64::consts::FRAC_PI_2);
/// assert!((m[1][0] - 1.0).abs() < 1e-12);
/// ```
pub fn axis_rotation(axis: Axis, angle: f64) -> Mat3 {
    let cs = angle.cos();
    let sn = angle.sin();

    match axis {
        Axis::X => [
            [1.0, 0.0, 0.0],
            [0.0, cs, -sn],
            [0.0, sn, cs],
        ],
        Axis::Y => [
            [cs, 0.0, sn],
            [0.0, 1.0, 0.0],
            [-sn, 0.0, cs],
        ],
        Axis::Z => [
            [cs, -sn, 0.0],
            [sn, cs, 0.0],
            [0.0, 0.0, 1.0],
        ],
    }
}

/// Multiply two 3x3 matrices: result = a * b
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat3, b: Mat3) -> Mat3 {
    let mut result = [[0.0f64; 3]; 3];

    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    result
}

/// Transpose a 3x3 matrix
pub fn transpose(m: Mat3) -> Mat3 {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Determinant of a 3x3 matrix
pub fn determinant(m: Mat3) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Transform a 3D vector by a matrix: result = M * v
pub fn transform(m: Mat3, v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}
