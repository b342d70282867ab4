//! The adjustment catalog: every adjustment the engine knows about.
//!
//! [`AdjustmentKind`] is a closed enumeration — there is no way to register
//! new adjustments at runtime. Each variant carries immutable metadata
//! (default value, inclusive range, display label) exposed through pure
//! lookup methods. All calls succeed; out-of-range input is absorbed by
//! [`AdjustmentKind::clamp`], never rejected.
//!
//! Value semantics per kind:
//!
//! | Kind | Default | Range | Neutral means |
//! |------|---------|-------|---------------|
//! | Exposure | 0.0 | [-2.0, 2.0] | EV delta |
//! | Brightness | 0.0 | [-1.0, 1.0] | additive offset |
//! | Contrast | 1.0 | [0.0, 2.0] | multiplicative, 1 = unchanged |
//! | Highlights | 0.0 | [-1.0, 1.0] | delta around operator neutral 1.0 |
//! | Shadows | 0.0 | [-1.0, 1.0] | delta around operator neutral 1.0 |
//! | Saturation | 1.0 | [0.0, 2.0] | multiplicative, 1 = unchanged |
//! | Vibrance | 1.0 | [0.0, 2.0] | multiplicative, 1 = unchanged |
//! | Warmth | 0.0 | [-50.0, 50.0] | kelvin shift in 100 K steps |
//! | Sharpness | 0.0 | [0.0, 1.0] | additive strength |
//! | Clarity | 0.0 | [0.0, 1.0] | additive strength |
//! | BlackPoint | 0.0 | [-1.0, 1.0] | secondary contrast push |
//! | Vignette | 0.0 | [0.0, 1.0] | additive strength |

use serde::{Deserialize, Serialize};

/// One named, ranged, continuous image-correction parameter.
///
/// The serialized form is the snake_case variant name (`"black_point"` etc.)
/// and is stable — preset packs and edit-state sidecars depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    Exposure,
    Brightness,
    Contrast,
    Highlights,
    Shadows,
    Saturation,
    Vibrance,
    Warmth,
    Sharpness,
    Clarity,
    BlackPoint,
    Vignette,
}

impl AdjustmentKind {
    /// Every kind, in catalog order. This is also the display order used by
    /// the CLI and the storage order inside `AdjustmentState`.
    pub const ALL: [AdjustmentKind; 12] = [
        AdjustmentKind::Exposure,
        AdjustmentKind::Brightness,
        AdjustmentKind::Contrast,
        AdjustmentKind::Highlights,
        AdjustmentKind::Shadows,
        AdjustmentKind::Saturation,
        AdjustmentKind::Vibrance,
        AdjustmentKind::Warmth,
        AdjustmentKind::Sharpness,
        AdjustmentKind::Clarity,
        AdjustmentKind::BlackPoint,
        AdjustmentKind::Vignette,
    ];

    /// The value at which this adjustment has no visible effect.
    pub fn default_value(self) -> f32 {
        match self {
            AdjustmentKind::Contrast | AdjustmentKind::Saturation | AdjustmentKind::Vibrance => 1.0,
            _ => 0.0,
        }
    }

    /// Inclusive `(min, max)` bounds for this adjustment.
    pub fn range(self) -> (f32, f32) {
        match self {
            AdjustmentKind::Exposure => (-2.0, 2.0),
            AdjustmentKind::Brightness
            | AdjustmentKind::Highlights
            | AdjustmentKind::Shadows
            | AdjustmentKind::BlackPoint => (-1.0, 1.0),
            AdjustmentKind::Contrast | AdjustmentKind::Saturation | AdjustmentKind::Vibrance => {
                (0.0, 2.0)
            }
            AdjustmentKind::Warmth => (-50.0, 50.0),
            AdjustmentKind::Sharpness | AdjustmentKind::Clarity | AdjustmentKind::Vignette => {
                (0.0, 1.0)
            }
        }
    }

    /// Clamp `value` into [`range`](Self::range).
    ///
    /// Non-finite input (NaN, ±∞) is absorbed to the default value — the
    /// catalog's contract is that every write produces an in-range value.
    pub fn clamp(self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.default_value();
        }
        let (min, max) = self.range();
        value.clamp(min, max)
    }

    /// Human-readable label for CLI and UI display.
    pub fn label(self) -> &'static str {
        match self {
            AdjustmentKind::Exposure => "Exposure",
            AdjustmentKind::Brightness => "Brightness",
            AdjustmentKind::Contrast => "Contrast",
            AdjustmentKind::Highlights => "Highlights",
            AdjustmentKind::Shadows => "Shadows",
            AdjustmentKind::Saturation => "Saturation",
            AdjustmentKind::Vibrance => "Vibrance",
            AdjustmentKind::Warmth => "Warmth",
            AdjustmentKind::Sharpness => "Sharpness",
            AdjustmentKind::Clarity => "Clarity",
            AdjustmentKind::BlackPoint => "Black Point",
            AdjustmentKind::Vignette => "Vignette",
        }
    }

    /// Stable snake_case identifier, matching the serialized form.
    pub fn slug(self) -> &'static str {
        match self {
            AdjustmentKind::Exposure => "exposure",
            AdjustmentKind::Brightness => "brightness",
            AdjustmentKind::Contrast => "contrast",
            AdjustmentKind::Highlights => "highlights",
            AdjustmentKind::Shadows => "shadows",
            AdjustmentKind::Saturation => "saturation",
            AdjustmentKind::Vibrance => "vibrance",
            AdjustmentKind::Warmth => "warmth",
            AdjustmentKind::Sharpness => "sharpness",
            AdjustmentKind::Clarity => "clarity",
            AdjustmentKind::BlackPoint => "black_point",
            AdjustmentKind::Vignette => "vignette",
        }
    }

    /// Position of this kind within [`ALL`](Self::ALL).
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::str::FromStr for AdjustmentKind {
    type Err = String;

    /// Parse a snake_case slug (`"black_point"`). Used by the CLI's
    /// `--set kind=value` arguments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdjustmentKind::ALL
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = AdjustmentKind::ALL.iter().map(|k| k.slug()).collect();
                format!("unknown adjustment '{s}'. Known: {}", known.join(", "))
            })
    }
}

impl std::fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
