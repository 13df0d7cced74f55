//! Euler-angle extraction from axis-angle rotation vectors.

use crate::constants::GIMBAL_LOCK_EPSILON;
use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Rotation decomposed into angles about the x, y and z axes, in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the x axis
    pub x: f64,
    /// Rotation about the y axis
    pub y: f64,
    /// Rotation about the z axis
    pub z: f64,
}

impl EulerAngles {
    /// The same angles expressed in degrees
    #[must_use]
    pub fn to_degrees(&self) -> (f64, f64, f64) {
        (self.x.to_degrees(), self.y.to_degrees(), self.z.to_degrees())
    }
}

/// Convert an axis-angle rotation vector into Euler angles.
///
/// The vector's direction is the rotation axis and its norm the rotation
/// angle in radians, the representation produced by `solvePnP`-style pose
/// solvers. The vector is first expanded into a rotation matrix (Rodrigues'
/// formula) and then decomposed with [`rotation_matrix_to_euler`].
#[must_use]
pub fn rotation_vector_to_euler(rotation_vector: [f64; 3]) -> EulerAngles {
    let rotation = Rotation3::from_scaled_axis(Vector3::from(rotation_vector));
    rotation_matrix_to_euler(rotation.matrix())
}

/// Decompose a 3×3 rotation matrix into Euler angles.
///
/// Near gimbal lock, detected as `sqrt(r00² + r10²)` falling below the
/// `1e-6` singularity threshold, the z angle collapses to zero and the x and
/// y angles are taken from alternate matrix entries that stay numerically
/// stable in the degenerate configuration.
#[must_use]
pub fn rotation_matrix_to_euler(r: &Matrix3<f64>) -> EulerAngles {
    let sy = (r[(0, 0)] * r[(0, 0)] + r[(1, 0)] * r[(1, 0)]).sqrt();

    if sy < GIMBAL_LOCK_EPSILON {
        EulerAngles {
            x: r[(1, 2)].atan2(r[(1, 1)]),
            y: r[(2, 0)].atan2(sy),
            z: 0.0,
        }
    } else {
        EulerAngles {
            x: r[(2, 1)].atan2(r[(2, 2)]),
            y: (-r[(2, 0)]).atan2(sy),
            z: r[(1, 0)].atan2(r[(0, 0)]),
        }
    }
}
