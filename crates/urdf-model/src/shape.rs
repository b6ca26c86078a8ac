//! Visual and collision shapes.

use serde::{Deserialize, Serialize};
use urdf_math::Transform;

use crate::geometry::Geometry;
use crate::material::Material;
use crate::model::MaterialId;

/// Data shared by visual and collision elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shape {
    /// Optional element name.
    pub name: Option<String>,
    /// Resolved location of the mesh file (model base path + filename).
    /// `None` unless the geometry is a `<mesh>`.
    pub source_file_location: Option<String>,
    /// Pose relative to the owning link's frame.
    pub origin: Transform,
    /// The shape itself.
    pub geometry: Geometry,
}

impl Shape {
    /// Shape at the link origin.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            ..Default::default()
        }
    }
}

/// A `<visual>` element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Visual {
    /// Pose and geometry.
    pub shape: Shape,
    /// Name of the referenced material, empty when none was given.
    pub material_name: String,
    /// Material defined inline in the visual's `<material>` element.
    pub local_material: Option<Material>,
    /// Resolved material in the owning model's table.
    pub material: Option<MaterialId>,
}

impl Visual {
    /// Visual without material.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            ..Default::default()
        }
    }

    /// Whether the material was defined inline.
    pub fn has_local_material(&self) -> bool {
        self.local_material.is_some()
    }
}

/// Bitset of collision flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollisionFlags(u32);

impl CollisionFlags {
    /// Use a concave triangle mesh even for a dynamic body.
    pub const FORCE_CONCAVE_TRIMESH: Self = Self(1);
    /// `collision_group` is set.
    pub const HAS_COLLISION_GROUP: Self = Self(2);
    /// `collision_mask` is set.
    pub const HAS_COLLISION_MASK: Self = Self(4);

    /// No flags.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Whether every bit of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the bits of `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Whether no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for CollisionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A `<collision>` element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collision {
    /// Pose and geometry.
    pub shape: Shape,
    /// Flag bitset.
    pub flags: CollisionFlags,
    /// Collision filter group.
    pub collision_group: Option<i32>,
    /// Collision filter mask.
    pub collision_mask: Option<i32>,
}

impl Collision {
    /// Collision without filter settings.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            ..Default::default()
        }
    }

    /// Set the filter group and its flag.
    pub fn set_group(&mut self, group: i32) {
        self.collision_group = Some(group);
        self.flags.insert(CollisionFlags::HAS_COLLISION_GROUP);
    }

    /// Set the filter mask and its flag.
    pub fn set_mask(&mut self, mask: i32) {
        self.collision_mask = Some(mask);
        self.flags.insert(CollisionFlags::HAS_COLLISION_MASK);
    }

    /// Whether a concave triangle mesh is forced.
    pub fn force_concave(&self) -> bool {
        self.flags.contains(CollisionFlags::FORCE_CONCAVE_TRIMESH)
    }
}
