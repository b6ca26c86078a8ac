//! Material definitions.

use serde::{Deserialize, Serialize};

/// Color block of a material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialColor {
    /// Diffuse color as `[r, g, b]` in 0.0..=1.0.
    pub rgb: [f64; 3],
    /// Opacity in 0.0..=1.0.
    pub alpha: f64,
    /// Specular color as `[r, g, b]` in 0.0..=1.0.
    pub specular: [f64; 3],
}

impl MaterialColor {
    /// Diffuse color used when no `<color>` is given or it is malformed.
    pub const DEFAULT_RGB: [f64; 3] = [0.8, 0.8, 0.8];
    /// Specular color used when no `<specular>` is given or it is malformed.
    pub const DEFAULT_SPECULAR: [f64; 3] = [0.4, 0.4, 0.4];

    /// RGBA as a four-element array.
    pub fn rgba(&self) -> [f64; 4] {
        [self.rgb[0], self.rgb[1], self.rgb[2], self.alpha]
    }
}

impl Default for MaterialColor {
    fn default() -> Self {
        Self {
            rgb: Self::DEFAULT_RGB,
            alpha: 1.0,
            specular: Self::DEFAULT_SPECULAR,
        }
    }
}

/// A named material. Names are unique within a [`crate::Model`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name (its identity).
    pub name: String,
    /// Texture filename, empty when the material has no texture.
    pub texture_filename: String,
    /// Color properties.
    pub color: MaterialColor,
}

impl Material {
    /// Create a material with the default gray color and no texture.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            texture_filename: String::new(),
            color: MaterialColor::default(),
        }
    }

    /// Whether a texture file is attached.
    pub fn has_texture(&self) -> bool {
        !self.texture_filename.is_empty()
    }
}
