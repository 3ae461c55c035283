//! Centralized navigation options with TOML preset support.
//!
//! All tweakable settings (camera flights, orbital bob, hover affordances,
//! label placement, adaptive quality, pointer handling) are consolidated
//! here. Options serialize to/from TOML so a view can ship presets.

mod camera;
mod hover;
mod input;
mod labels;
mod motion;
mod performance;

use std::path::Path;

pub use camera::CameraOptions;
pub use hover::HoverOptions;
pub use input::InputOptions;
pub use labels::LabelOptions;
pub use motion::MotionOptions;
pub use performance::PerformanceOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[hover]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and flight parameters.
    pub camera: CameraOptions,
    /// Cosmetic orbital motion parameters.
    pub motion: MotionOptions,
    /// Hover affordance parameters.
    pub hover: HoverOptions,
    /// Screen-space label placement.
    pub labels: LabelOptions,
    /// Adaptive quality parameters.
    pub performance: PerformanceOptions,
    /// Pointer handling parameters.
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, OrreryError> {
        toml::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// Replace non-finite numbers with defaults and clamp the rest into
    /// their working ranges. The engine applies this to every options
    /// value it receives.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.camera.sanitize();
        self.motion.sanitize();
        self.hover.sanitize();
        self.labels.sanitize();
        self.performance.sanitize();
        self.input.sanitize();
        self
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

/// `value` clamped to `[min, max]`, or `fallback` when not finite.
fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

/// `value`, or `fallback` when any component is not finite.
fn finite_vec_or(value: [f32; 3], fallback: [f32; 3]) -> [f32; 3] {
    if value.iter().all(|v| v.is_finite()) {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::QualityTier;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[hover]
hover_scale = 1.5
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.hover.hover_scale, 1.5);
        // Everything else should be default
        assert_eq!(opts.hover.tween_ms, 250);
        assert_eq!(opts.camera.transition_ms, 1500);
        assert_eq!(opts.performance.initial_tier, QualityTier::Enhanced);
    }

    #[test]
    fn easing_and_tier_parse_from_snake_case() {
        let toml_str = r#"
[camera]
easing = "linear"

[performance]
initial_tier = "standard"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.easing, EasingFunction::Linear);
        assert_eq!(opts.performance.initial_tier, QualityTier::Standard);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, OrreryError::OptionsParse(_)));
    }

    #[test]
    fn tier_params_lookup() {
        let perf = PerformanceOptions::default();
        assert!(
            perf.params(QualityTier::Enhanced).shadow_map_size
                > perf.params(QualityTier::Standard).shadow_map_size
        );
    }

    #[test]
    fn sanitized_replaces_non_finite_values() {
        let toml_str = r"
[camera]
fovy = nan
zfar = -5.0
overview_position = [nan, 30.0, 45.0]
focus_offset = [0.0, inf, 4.0]

[hover]
hover_scale = nan
label_opacity = 3.0

[motion]
bob_amplitude = inf

[performance]
low_fps = nan

[input]
drag_threshold_px = -2.0
";
        let opts = Options::from_toml_str(toml_str).unwrap().sanitized();
        let defaults = Options::default();
        assert_eq!(opts.camera.fovy, defaults.camera.fovy);
        assert!(opts.camera.zfar > opts.camera.znear);
        assert_eq!(
            opts.camera.overview_position,
            defaults.camera.overview_position
        );
        assert_eq!(opts.camera.focus_offset, defaults.camera.focus_offset);
        assert_eq!(opts.hover.hover_scale, defaults.hover.hover_scale);
        assert_eq!(opts.hover.label_opacity, 1.0);
        assert_eq!(opts.motion.bob_amplitude, defaults.motion.bob_amplitude);
        assert_eq!(opts.performance.low_fps, defaults.performance.low_fps);
        assert_eq!(opts.input.drag_threshold_px, 0.0);
    }

    #[test]
    fn sanitized_keeps_valid_options() {
        let mut opts = Options::default();
        opts.hover.hover_scale = 1.6;
        opts.camera.overview_position = [5.0, 60.0, 10.0];
        assert_eq!(opts.clone().sanitized(), opts);
    }

    #[test]
    fn sanitized_resets_non_finite_hermite_easing() {
        let mut opts = Options::default();
        opts.camera.easing = EasingFunction::CubicHermite {
            c1: f32::NAN,
            c2: 1.0,
        };
        let opts = opts.sanitized();
        assert_eq!(opts.camera.easing, EasingFunction::DEFAULT);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("hover"));
        assert!(props.contains_key("performance"));

        // Skipped fields stay out of the UI schema
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("easing").is_none());
        let perf = &props["performance"]["properties"];
        assert!(perf.get("low_fps").is_some());
        assert!(perf.get("enhanced").is_none());
    }
}
