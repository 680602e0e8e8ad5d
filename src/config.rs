//! Scene tuning loaded from YAML.
//!
//! Every knob has a default matching the built-in scenes, so an empty
//! document is a valid tuning and hosts override only what they need.

use serde::Deserialize;

use crate::math::to_radians;
use crate::orbit::{OrbitParams, Pacing};
use crate::scene::Color;
use crate::tree::TreeShapeParams;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FogTuning {
    pub start: f32,
    pub end: f32,
}

impl Default for FogTuning {
    fn default() -> Self {
        Self {
            start: 30.0,
            end: 50.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TreeTuning {
    pub layers: u32,
    pub height: f32,
    pub trunk_reveal: f32,
    /// Foliage color as "#RRGGBB"
    pub foliage_color: String,
}

impl Default for TreeTuning {
    fn default() -> Self {
        Self {
            layers: 4,
            height: 20.0,
            trunk_reveal: 4.0,
            foliage_color: "#00FF00".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrbitTuning {
    pub base_height: f32,
    pub phase_step_deg: f32,
    pub spin_step_deg: f32,
    pub stagger_deg: f32,
    pub pacing: Pacing,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            base_height: 2.5,
            phase_step_deg: 2.0,
            spin_step_deg: 0.5,
            stagger_deg: 90.0,
            pacing: Pacing::FrameLocked,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SnowTuning {
    pub max_flakes: usize,
    pub ceiling: f32,
}

impl Default for SnowTuning {
    fn default() -> Self {
        Self {
            max_flakes: 400,
            ceiling: 30.0,
        }
    }
}

/// Tuning block for both demo scenes
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneTuning {
    pub fog: FogTuning,
    /// Sphere-ring scale: center diameter and satellite spacing
    pub object_size: f32,
    pub tree: TreeTuning,
    pub orbit: OrbitTuning,
    pub snow: SnowTuning,
}

impl SceneTuning {
    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let tuning: SceneTuning =
            serde_yaml::from_str(yaml).map_err(|e| format!("tuning parse error: {}", e))?;
        tuning.validate()?;
        Ok(tuning)
    }

    fn validate(&self) -> Result<(), String> {
        if self.fog.end <= self.fog.start {
            return Err("fog.end must be greater than fog.start".to_string());
        }
        if self.object_size <= 0.0 {
            return Err("object_size must be positive".to_string());
        }
        if self.tree.layers < 1 {
            return Err("tree.layers must be at least 1".to_string());
        }
        if self.tree.height <= 0.0 {
            return Err("tree.height must be positive".to_string());
        }
        if self.tree.trunk_reveal <= 0.0 || self.tree.trunk_reveal >= self.tree.height {
            return Err("tree.trunk_reveal must be positive and less than tree.height".to_string());
        }
        Color::from_hex(&self.tree.foliage_color)
            .map_err(|e| format!("tree.foliage_color: {}", e))?;
        if self.orbit.phase_step_deg <= 0.0 {
            return Err("orbit.phase_step_deg must be positive".to_string());
        }
        if let Pacing::TimeScaled { reference_fps } = self.orbit.pacing {
            if reference_fps <= 0.0 {
                return Err("orbit.pacing reference_fps must be positive".to_string());
            }
        }
        if self.snow.max_flakes == 0 {
            return Err("snow.max_flakes must be at least 1".to_string());
        }
        if self.snow.ceiling <= 0.0 {
            return Err("snow.ceiling must be positive".to_string());
        }
        Ok(())
    }

    pub fn tree_params(&self) -> TreeShapeParams {
        TreeShapeParams::new(self.tree.layers, self.tree.height, self.tree.trunk_reveal)
    }

    /// Parsed foliage color; validation has already vetted the literal
    pub fn foliage_color(&self) -> Color {
        Color::from_hex(&self.tree.foliage_color).unwrap_or(Color::GREEN)
    }

    pub fn orbit_params(&self) -> OrbitParams {
        OrbitParams {
            phase_step: to_radians(self.orbit.phase_step_deg),
            spin_step: to_radians(self.orbit.spin_step_deg),
            base_height: self.orbit.base_height,
            stagger: to_radians(self.orbit.stagger_deg),
            pacing: self.orbit.pacing,
        }
    }
}

impl Default for SceneTuning {
    fn default() -> Self {
        Self {
            fog: FogTuning::default(),
            object_size: 5.0,
            tree: TreeTuning::default(),
            orbit: OrbitTuning::default(),
            snow: SnowTuning::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = SceneTuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.tree.layers, 4);
        assert!((tuning.object_size - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        let tuning = SceneTuning::from_yaml("{}").unwrap();
        assert!((tuning.fog.start - 30.0).abs() < 0.0001);
        assert_eq!(tuning.snow.max_flakes, 400);
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
tree:
  layers: 6
  height: 24
  trunk_reveal: 5
orbit:
  pacing:
    time_scaled:
      reference_fps: 60
"#;
        let tuning = SceneTuning::from_yaml(yaml).unwrap();
        assert_eq!(tuning.tree.layers, 6);
        assert_eq!(tuning.orbit.pacing, Pacing::TimeScaled { reference_fps: 60.0 });
        // Untouched sections keep their defaults
        assert!((tuning.object_size - 5.0).abs() < 0.0001);
    }

    #[test]
    fn test_orbit_params_convert_to_radians() {
        let tuning = SceneTuning::default();
        let params = tuning.orbit_params();
        assert!((params.phase_step - to_radians(2.0)).abs() < 0.0001);
        assert!((params.stagger - std::f32::consts::FRAC_PI_2).abs() < 0.0001);
    }

    #[test]
    fn test_invalid_values_name_the_field() {
        let err = SceneTuning::from_yaml("tree: { layers: 0 }").unwrap_err();
        assert!(err.contains("tree.layers"));

        let err = SceneTuning::from_yaml("fog: { start: 50, end: 30 }").unwrap_err();
        assert!(err.contains("fog.end"));

        let err = SceneTuning::from_yaml("tree: { trunk_reveal: 25 }").unwrap_err();
        assert!(err.contains("trunk_reveal"));
    }

    #[test]
    fn test_foliage_color_round_trips() {
        let tuning = SceneTuning::from_yaml("tree: { foliage_color: \"#228B22\" }").unwrap();
        let c = tuning.foliage_color();
        assert!((c.g - 139.0 / 255.0).abs() < 0.001);

        let err = SceneTuning::from_yaml("tree: { foliage_color: green }").unwrap_err();
        assert!(err.contains("foliage_color"));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let err = SceneTuning::from_yaml(": not yaml").unwrap_err();
        assert!(err.contains("parse error"));
    }
}
