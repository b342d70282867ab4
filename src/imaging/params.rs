//! Parameter types for image operators.
//!
//! These structs describe *what* an operator should do, not *how*. They are
//! the interface between the [`pipeline`](crate::pipeline) (which maps
//! user-facing adjustment values into operator space) and the
//! [`backend`](super::backend) (which does the pixel work). Defaults are the
//! operator neutrals, so `..Default::default()` reads as "leave the rest
//! unchanged".

/// Combined brightness/contrast/saturation operator parameters.
///
/// Brightness is additive (neutral 0); contrast and saturation are
/// multiplicative (neutral 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorControls {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
}

impl Default for ColorControls {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
        }
    }
}

impl ColorControls {
    /// True when applying this operator would change nothing.
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

/// Highlight/shadow recovery parameters. Neutral is 1.0 for both; user
/// values arrive as deltas around that neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightShadow {
    pub highlight_amount: f32,
    pub shadow_amount: f32,
}

impl Default for HighlightShadow {
    fn default() -> Self {
        Self {
            highlight_amount: 1.0,
            shadow_amount: 1.0,
        }
    }
}

/// Radial darkening parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vignette {
    pub intensity: f32,
    pub radius: f32,
}

/// Unsharp-mask parameters: gaussian radius plus blend intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsharpMask {
    pub radius: f32,
    pub intensity: f32,
}
