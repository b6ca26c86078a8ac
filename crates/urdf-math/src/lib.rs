#![warn(missing_docs)]

//! Math types for robot descriptions.
//!
//! Thin wrappers around nalgebra providing the vector aliases and the
//! rigid transform (rotation + translation) used by every `<origin>`
//! element of a robot description.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit quaternion describing an orientation.
pub type Quat = UnitQuaternion<f64>;

/// Build an orientation from roll, pitch and yaw (radians).
///
/// Roll is about X, pitch about Y, yaw about Z, composed as
/// `Rz(yaw) * Ry(pitch) * Rx(roll)`. The half-angle product is normalized
/// after construction.
pub fn quaternion_from_rpy(roll: f64, pitch: f64, yaw: f64) -> Quat {
    let (sp, cp) = (roll / 2.0).sin_cos();
    let (st, ct) = (pitch / 2.0).sin_cos();
    let (ss, cs) = (yaw / 2.0).sin_cos();

    let x = sp * ct * cs - cp * st * ss;
    let y = cp * st * cs + sp * ct * ss;
    let z = cp * ct * ss - sp * st * cs;
    let w = cp * ct * cs + sp * st * ss;

    UnitQuaternion::new_normalize(Quaternion::new(w, x, y, z))
}

/// A rigid transformation: rotation followed by translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation in the parent frame.
    pub translation: Vec3,
    /// Orientation relative to the parent frame.
    pub rotation: Quat,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }

    /// Transform from its parts.
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Pure translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(Vec3::new(dx, dy, dz), Quat::identity())
    }

    /// Transform from an `xyz` offset and an `rpy` triple, as written in `<origin>`.
    pub fn from_xyz_rpy(xyz: Vec3, rpy: Vec3) -> Self {
        Self::new(xyz, quaternion_from_rpy(rpy.x, rpy.y, rpy.z))
    }

    /// Roll, pitch and yaw of the rotation part.
    pub fn rpy(&self) -> Vec3 {
        let (roll, pitch, yaw) = self.rotation.euler_angles();
        Vec3::new(roll, pitch, yaw)
    }

    /// Whether this is the identity within `eps`.
    pub fn is_identity(&self, eps: f64) -> bool {
        self.translation.norm() < eps && self.rotation.angle() < eps
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
