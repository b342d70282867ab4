//! Named filter presets and the registry that serves them.
//!
//! A preset is a bundle of default-overriding adjustment values plus an
//! optional stylistic whole-image transform, identified by a lowercase name
//! the backend resolves (an unknown transform name is just an unavailable
//! operator — the pipeline skips that stage).
//!
//! The registry is ordered: `list()` returns presets in insertion order,
//! which is also display order. "Original" — no transform, no overrides —
//! is always first. Builtin presets are never mutated at runtime; user
//! preset packs can be appended from TOML:
//!
//! ```toml
//! [[presets]]
//! name = "Evening"
//! style_transform = "fade"
//!
//! [presets.overrides]
//! exposure = -0.2
//! warmth = 12.0
//! ```

use crate::catalog::AdjustmentKind;
use crate::state::AdjustmentState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Failed to parse preset file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Duplicate preset name: {0}")]
    Duplicate(String),
    #[error("Preset name cannot be empty")]
    EmptyName,
}

/// A named bundle of adjustment overrides plus an optional style transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPreset {
    pub name: String,
    /// Backend-resolved transform name (`"mono"`, `"sepia"`, ...). `None`
    /// means the preset is purely numeric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_transform: Option<String>,
    /// Sparse overrides; kinds not listed keep their catalog defaults.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<AdjustmentKind, f32>,
}

impl FilterPreset {
    /// The full adjustment state this preset produces: catalog defaults with
    /// the overrides clamped-set on top.
    pub fn state(&self) -> AdjustmentState {
        AdjustmentState::defaults().merge_overrides(&self.overrides)
    }
}

/// Ordered preset collection. Insertion order is display order.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: Vec<FilterPreset>,
}

/// Top-level shape of a TOML preset pack.
#[derive(Deserialize)]
struct PresetFile {
    #[serde(default)]
    presets: Vec<FilterPreset>,
}

impl PresetRegistry {
    /// The builtin preset table. "Original" first, then the two Fuji-style
    /// numeric recipes, then the stylistic transforms.
    pub fn builtin() -> Self {
        use AdjustmentKind::*;

        let numeric = |name: &str, overrides: &[(AdjustmentKind, f32)]| FilterPreset {
            name: name.to_string(),
            style_transform: None,
            overrides: overrides.iter().copied().collect(),
        };
        let styled = |name: &str, transform: &str| FilterPreset {
            name: name.to_string(),
            style_transform: Some(transform.to_string()),
            overrides: BTreeMap::new(),
        };

        Self {
            presets: vec![
                numeric("Original", &[]),
                numeric(
                    "富士NC",
                    &[
                        (Exposure, 0.25),
                        (Vibrance, 1.05),
                        (Highlights, -0.45),
                        (Shadows, 0.30),
                        (Contrast, 1.10),
                        (Saturation, 1.10),
                        (Warmth, 10.0),
                        (Sharpness, 0.20),
                        (Clarity, 0.10),
                    ],
                ),
                numeric(
                    "富士CC",
                    &[
                        (Exposure, -0.10),
                        (Vibrance, 1.10),
                        (Highlights, 0.20),
                        (Shadows, -0.17),
                        (Brightness, 0.08),
                        (BlackPoint, 0.15),
                        (Saturation, 0.88),
                        (Warmth, -15.0),
                        (Vignette, 0.12),
                    ],
                ),
                styled("Mono", "mono"),
                styled("Noir", "noir"),
                styled("Fade", "fade"),
                styled("Chrome", "chrome"),
                styled("Process", "process"),
                styled("Transfer", "transfer"),
                styled("Instant", "instant"),
                styled("Sepia", "sepia"),
            ],
        }
    }

    /// All presets in insertion order.
    pub fn list(&self) -> &[FilterPreset] {
        &self.presets
    }

    /// Look up a preset by exact name. A miss is "not found", not an error;
    /// callers decide the fallback (typically "Original").
    pub fn find(&self, name: &str) -> Option<&FilterPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Append user presets from a TOML pack, preserving their file order.
    /// Returns how many presets were added.
    ///
    /// Names must be unique across the whole registry — a pack cannot
    /// shadow a builtin. On error nothing is added.
    pub fn load_toml(&mut self, text: &str) -> Result<usize, PresetError> {
        let file: PresetFile = toml::from_str(text)?;
        for preset in &file.presets {
            if preset.name.is_empty() {
                return Err(PresetError::EmptyName);
            }
            if self.find(&preset.name).is_some()
                || file.presets.iter().filter(|p| p.name == preset.name).count() > 1
            {
                return Err(PresetError::Duplicate(preset.name.clone()));
            }
        }
        let added = file.presets.len();
        self.presets.extend(file.presets);
        Ok(added)
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
