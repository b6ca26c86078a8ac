//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UrdfError};

/// Options recognized by the document driver.
///
/// Deserializable from TOML; missing keys take their defaults:
///
/// ```toml
/// force_fixed_base = true
/// scaling = 0.001
/// base_url = "robots/arm/arm.urdf"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Zero mass and inertia of every root link.
    pub force_fixed_base: bool,
    /// Hand `<sensor>` elements to the installed sensor handler.
    pub parse_sensors: bool,
    /// Factor applied to every linear dimension.
    pub scaling: f64,
    /// Location of the document. Its directory becomes the model's base path.
    pub base_url: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            force_fixed_base: false,
            parse_sensors: false,
            scaling: 1.0,
            base_url: String::new(),
        }
    }
}

impl ParserConfig {
    /// Set the scaling factor.
    pub fn with_scaling(mut self, scaling: f64) -> Self {
        self.scaling = scaling;
        self
    }

    /// Set the fixed-base override.
    pub fn with_force_fixed_base(mut self, force_fixed_base: bool) -> Self {
        self.force_fixed_base = force_fixed_base;
        self
    }

    /// Set sensor parsing.
    pub fn with_parse_sensors(mut self, parse_sensors: bool) -> Self {
        self.parse_sensors = parse_sensors;
        self
    }

    /// Set the document location.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reject settings no document could be parsed with.
    pub fn validate(&self) -> Result<()> {
        if !self.scaling.is_finite() || self.scaling <= 0.0 {
            return Err(UrdfError::InvalidConfig(format!(
                "scaling must be a positive finite number, got {}",
                self.scaling
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert!(!config.force_fixed_base);
        assert!(!config.parse_sensors);
        assert_eq!(config.scaling, 1.0);
        assert!(config.base_url.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::default()
            .with_scaling(2.0)
            .with_force_fixed_base(true)
            .with_parse_sensors(true)
            .with_base_url("robots/r.urdf");
        assert_eq!(config.scaling, 2.0);
        assert!(config.force_fixed_base);
        assert!(config.parse_sensors);
        assert_eq!(config.base_url, "robots/r.urdf");
    }

    #[test]
    fn test_rejects_bad_scaling() {
        for scaling in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ParserConfig::default().with_scaling(scaling).validate().unwrap_err();
            assert!(matches!(err, UrdfError::InvalidConfig(_)));
        }
    }

    #[test]
    fn test_from_toml_partial() {
        let config: ParserConfig = toml::from_str("scaling = 0.001\nforce_fixed_base = true").unwrap();
        assert_eq!(config.scaling, 0.001);
        assert!(config.force_fixed_base);
        assert!(!config.parse_sensors);
        assert!(config.base_url.is_empty());
    }
}
