use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors surfaced while loading a config file. Everything inside the layout
/// engine itself is infallible; only the file boundary can fail.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub animation: AnimationConfig,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// Seed for skip-edge sampling and simulation initial placement.
    /// `None` draws from OS entropy, so the sky differs run to run.
    pub seed: Option<u64>,
    pub spiral: SpiralConfig,
    pub sphere: SphereConfig,
    pub links: LinkConfig,
    pub force: ForceModeConfig,
    pub grouped: GroupedModeConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    pub angle_step: f32,
    pub base_radius: f32,
    pub radius_step: f32,
    pub vertical_wave: f32,
    pub vertical_scale: f32,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            angle_step: 0.3,
            base_radius: 6.0,
            radius_step: 0.15,
            vertical_wave: 0.5,
            vertical_scale: 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self { radius: 12.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub primary_strength: f32,
    pub skip_strength: f32,
    /// Independent inclusion probability for each candidate skip edge.
    pub skip_probability: f32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            primary_strength: 0.8,
            skip_strength: 0.3,
            skip_probability: 0.4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceModeConfig {
    pub repulsion: f32,
    pub collision_scale: f32,
    pub link_distance: f32,
    pub link_strength: f32,
    pub iterations: usize,
    pub output_scale: f32,
}

impl Default for ForceModeConfig {
    fn default() -> Self {
        Self {
            repulsion: -15.0,
            collision_scale: 1.5,
            link_distance: 2.0,
            link_strength: 1.0,
            iterations: 200,
            output_scale: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedModeConfig {
    pub anchor_strength: f32,
    /// Weaker than force mode so category clustering dominates connectivity.
    pub link_distance: f32,
    pub link_strength: f32,
}

impl Default for GroupedModeConfig {
    fn default() -> Self {
        Self {
            anchor_strength: 0.5,
            link_distance: 5.0,
            link_strength: 0.1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Velocity multiplier applied each step before integration.
    pub damping: f32,
    /// Per-step decay toward zero of the global alpha coefficient.
    pub alpha_decay: f32,
    /// Positional separation passes run at the end of each step.
    pub collision_iterations: usize,
    /// Half-extent of the cube fresh particles are scattered into.
    pub initial_spread: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            damping: 0.6,
            // Reaches an alpha of 0.001 after 300 steps.
            alpha_decay: 1.0 - 0.001f32.powf(1.0 / 300.0),
            collision_iterations: 3,
            initial_spread: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Fraction of the remaining distance covered per frame.
    pub lerp_factor: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { lerp_factor: 0.1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub count: usize,
    pub min_year: i32,
    pub max_year: i32,
    pub importance_min: f32,
    pub importance_max: f32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            count: 150,
            min_year: 1996,
            max_year: 2024,
            importance_min: 2.0,
            importance_max: 10.0,
        }
    }
}

/// Load a config, falling back to defaults when no path is given. Partial
/// files are fine; omitted fields keep their default values.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = Config::default();
        assert_eq!(config.layout.spiral.angle_step, 0.3);
        assert_eq!(config.layout.sphere.radius, 12.0);
        assert_eq!(config.layout.links.primary_strength, 0.8);
        assert_eq!(config.layout.force.repulsion, -15.0);
        assert_eq!(config.layout.force.iterations, 200);
        assert_eq!(config.layout.grouped.link_distance, 5.0);
        assert_eq!(config.animation.lerp_factor, 0.1);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config: Config =
            serde_json::from_str(r#"{"layout": {"seed": 7, "sphere": {"radius": 20.0}}}"#).unwrap();
        assert_eq!(config.layout.seed, Some(7));
        assert_eq!(config.layout.sphere.radius, 20.0);
        assert_eq!(config.layout.spiral.base_radius, 6.0);
        assert_eq!(config.dataset.count, 150);
    }

    #[test]
    fn missing_config_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.layout.force.output_scale, 0.5);
    }
}
