//! The adjustment pipeline: one pure function from source image and
//! adjustment state to rendered image.
//!
//! [`render`] applies a fixed, ordered sequence of operator stages. Order is
//! load-bearing — every stage consumes the previous stage's output:
//!
//! 1. stylistic transform (only when the preset names one)
//! 2. exposure
//! 3. brightness/contrast/saturation as a single color-controls call
//! 4. black point, as a *second* color-controls call
//! 5. highlights/shadows as a single call
//! 6. vibrance
//! 7. warmth
//! 8. vignette
//! 9. sharpness
//! 10. clarity
//!
//! A stage whose adjustment sits at its neutral value is skipped outright,
//! not invoked with identity parameters — that is both cheaper and avoids
//! operator edge artifacts at identity. A stage whose operator returns
//! `None` passes the previous image through unchanged, so partial-capability
//! backends degrade per stage instead of failing the render.
//!
//! `render` never fails. Worst case — neutral state, or every operator
//! unavailable — it returns the source unchanged.
//!
//! Renders always start from the pristine source; nothing here stacks onto
//! previously rendered output. That makes the function referentially
//! transparent and keeps repeated edits from compounding rounding error.

use crate::catalog::AdjustmentKind;
use crate::imaging::{ColorControls, HighlightShadow, ImageOpBackend, UnsharpMask, Vignette};
use crate::photo::Photo;
use crate::presets::FilterPreset;
use crate::state::AdjustmentState;

/// Gaussian radius of the clarity (unsharp-mask) stage.
const CLARITY_RADIUS: f32 = 3.0;

/// Render `source` through the full adjustment pipeline.
///
/// `preset` contributes only its stylistic transform here; its numeric
/// overrides are expected to already be merged into `state` (see
/// [`FilterPreset::state`]).
pub fn render(
    backend: &impl ImageOpBackend,
    source: &Photo,
    preset: Option<&FilterPreset>,
    state: &AdjustmentState,
) -> Photo {
    let mut result = source.clone();

    if let Some(name) = preset.and_then(|p| p.style_transform.as_deref()) {
        if let Some(output) = backend.style_transform(&result, name) {
            result = output;
        }
    }

    let exposure = state.get(AdjustmentKind::Exposure);
    if exposure != 0.0 {
        if let Some(output) = backend.exposure_adjust(&result, exposure) {
            result = output;
        }
    }

    // Brightness, contrast and saturation are one conceptual stage: a single
    // operator call fires when any of the three leaves its neutral.
    let color = ColorControls {
        brightness: state.get(AdjustmentKind::Brightness),
        contrast: state.get(AdjustmentKind::Contrast),
        saturation: state.get(AdjustmentKind::Saturation),
    };
    if !color.is_neutral() {
        if let Some(output) = backend.color_controls(&result, color) {
            result = output;
        }
    }

    // Black point has no native operator; it is approximated by a second,
    // smaller-magnitude contrast push. Kept as its own call — folding it
    // into the stage above changes the output.
    let black_point = state.get(AdjustmentKind::BlackPoint);
    if black_point != 0.0 {
        let push = ColorControls {
            contrast: 1.0 + black_point * 0.1,
            ..Default::default()
        };
        if let Some(output) = backend.color_controls(&result, push) {
            result = output;
        }
    }

    let highlights = state.get(AdjustmentKind::Highlights);
    let shadows = state.get(AdjustmentKind::Shadows);
    if highlights != 0.0 || shadows != 0.0 {
        let params = HighlightShadow {
            highlight_amount: 1.0 + highlights,
            shadow_amount: 1.0 + shadows,
        };
        if let Some(output) = backend.highlight_shadow(&result, params) {
            result = output;
        }
    }

    let vibrance = state.get(AdjustmentKind::Vibrance);
    if vibrance != 1.0 {
        // catalog range [0, 2] maps onto the operator's [-2, 2]
        if let Some(output) = backend.vibrance(&result, (vibrance - 1.0) * 2.0) {
            result = output;
        }
    }

    let warmth = state.get(AdjustmentKind::Warmth);
    if warmth != 0.0 {
        if let Some(output) = backend.temperature(&result, 6500.0 + warmth * 100.0) {
            result = output;
        }
    }

    let vignette = state.get(AdjustmentKind::Vignette);
    if vignette > 0.0 {
        let params = Vignette {
            intensity: vignette * 2.0,
            radius: vignette * 1.5,
        };
        if let Some(output) = backend.vignette(&result, params) {
            result = output;
        }
    }

    let sharpness = state.get(AdjustmentKind::Sharpness);
    if sharpness > 0.0 {
        if let Some(output) = backend.sharpen_luminance(&result, sharpness * 0.7) {
            result = output;
        }
    }

    let clarity = state.get(AdjustmentKind::Clarity);
    if clarity > 0.0 {
        let params = UnsharpMask {
            radius: CLARITY_RADIUS,
            intensity: clarity * 0.7,
        };
        if let Some(output) = backend.unsharp_mask(&result, params) {
            result = output;
        }
    }

    result
}
