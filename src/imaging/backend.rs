//! Image operator backend trait and shared contract.
//!
//! [`ImageOpBackend`] names the operators the pipeline composes: one method
//! per operator, each taking a [`Photo`] plus parameters and returning
//! `Option<Photo>`. `None` means "this operator is unavailable or produced
//! no output" — the pipeline treats that as a per-stage identity, never an
//! error, so a backend with partial capability still renders.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust on the
//! `image` crate, statically linked. Tests use [`tests::MockBackend`], which
//! records every call with its parameters.

use super::params::{ColorControls, HighlightShadow, UnsharpMask, Vignette};
use crate::photo::Photo;

/// Trait for image operator backends.
///
/// Implementations must be `Sync`: the pipeline itself is single-threaded,
/// but callers render previews from worker threads sharing one backend.
/// Every operator is pure with respect to the backend — two identical calls
/// return identical output.
pub trait ImageOpBackend: Sync {
    /// Exposure shift; `ev` is the EV delta (positive brightens).
    fn exposure_adjust(&self, photo: &Photo, ev: f32) -> Option<Photo>;

    /// Combined brightness/contrast/saturation pass.
    fn color_controls(&self, photo: &Photo, params: ColorControls) -> Option<Photo>;

    /// Highlight and shadow recovery around a neutral of 1.0.
    fn highlight_shadow(&self, photo: &Photo, params: HighlightShadow) -> Option<Photo>;

    /// Saturation boost weighted toward muted colors; `amount` in [-2, 2].
    fn vibrance(&self, photo: &Photo, amount: f32) -> Option<Photo>;

    /// White-balance shift toward `target_neutral` kelvin (tint unchanged).
    fn temperature(&self, photo: &Photo, target_neutral: f32) -> Option<Photo>;

    /// Radial edge darkening.
    fn vignette(&self, photo: &Photo, params: Vignette) -> Option<Photo>;

    /// Luminance-only sharpening; `sharpness` is the strength.
    fn sharpen_luminance(&self, photo: &Photo, sharpness: f32) -> Option<Photo>;

    /// Unsharp mask with explicit radius and blend intensity.
    fn unsharp_mask(&self, photo: &Photo, params: UnsharpMask) -> Option<Photo>;

    /// Named whole-image stylistic transform (`"mono"`, `"sepia"`, ...).
    /// Unknown names return `None`.
    fn style_transform(&self, photo: &Photo, name: &str) -> Option<Photo>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// One recorded operator invocation with its parameters.
    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedCall {
        ExposureAdjust {
            ev: f32,
        },
        ColorControls {
            brightness: f32,
            contrast: f32,
            saturation: f32,
        },
        HighlightShadow {
            highlight_amount: f32,
            shadow_amount: f32,
        },
        Vibrance {
            amount: f32,
        },
        Temperature {
            target_neutral: f32,
        },
        Vignette {
            intensity: f32,
            radius: f32,
        },
        SharpenLuminance {
            sharpness: f32,
        },
        UnsharpMask {
            radius: f32,
            intensity: f32,
        },
        StyleTransform {
            name: String,
        },
    }

    impl RecordedCall {
        /// The operator name used to mark an operator unavailable.
        fn op_name(&self) -> &'static str {
            match self {
                RecordedCall::ExposureAdjust { .. } => "exposure_adjust",
                RecordedCall::ColorControls { .. } => "color_controls",
                RecordedCall::HighlightShadow { .. } => "highlight_shadow",
                RecordedCall::Vibrance { .. } => "vibrance",
                RecordedCall::Temperature { .. } => "temperature",
                RecordedCall::Vignette { .. } => "vignette",
                RecordedCall::SharpenLuminance { .. } => "sharpen_luminance",
                RecordedCall::UnsharpMask { .. } => "unsharp_mask",
                RecordedCall::StyleTransform { .. } => "style_transform",
            }
        }
    }

    /// Mock backend that records operations instead of touching pixels.
    ///
    /// Every operator returns a clone of its input (so chained stages stay
    /// comparable to the source), unless its name was passed to
    /// [`with_unavailable`](Self::with_unavailable), in which case it
    /// records the call and returns `None`. Uses `Mutex` (not `RefCell`) so
    /// it satisfies the trait's `Sync` bound.
    #[derive(Default)]
    pub struct MockBackend {
        calls: Mutex<Vec<RecordedCall>>,
        unavailable: HashSet<&'static str>,
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Mock where the named operators behave as unavailable.
        pub fn with_unavailable(ops: &[&'static str]) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                unavailable: ops.iter().copied().collect(),
            }
        }

        pub fn get_calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn record(&self, photo: &Photo, call: RecordedCall) -> Option<Photo> {
            let skip = self.unavailable.contains(call.op_name());
            self.calls.lock().unwrap().push(call);
            if skip { None } else { Some(photo.clone()) }
        }
    }

    impl ImageOpBackend for MockBackend {
        fn exposure_adjust(&self, photo: &Photo, ev: f32) -> Option<Photo> {
            self.record(photo, RecordedCall::ExposureAdjust { ev })
        }

        fn color_controls(&self, photo: &Photo, params: ColorControls) -> Option<Photo> {
            self.record(
                photo,
                RecordedCall::ColorControls {
                    brightness: params.brightness,
                    contrast: params.contrast,
                    saturation: params.saturation,
                },
            )
        }

        fn highlight_shadow(&self, photo: &Photo, params: HighlightShadow) -> Option<Photo> {
            self.record(
                photo,
                RecordedCall::HighlightShadow {
                    highlight_amount: params.highlight_amount,
                    shadow_amount: params.shadow_amount,
                },
            )
        }

        fn vibrance(&self, photo: &Photo, amount: f32) -> Option<Photo> {
            self.record(photo, RecordedCall::Vibrance { amount })
        }

        fn temperature(&self, photo: &Photo, target_neutral: f32) -> Option<Photo> {
            self.record(photo, RecordedCall::Temperature { target_neutral })
        }

        fn vignette(&self, photo: &Photo, params: Vignette) -> Option<Photo> {
            self.record(
                photo,
                RecordedCall::Vignette {
                    intensity: params.intensity,
                    radius: params.radius,
                },
            )
        }

        fn sharpen_luminance(&self, photo: &Photo, sharpness: f32) -> Option<Photo> {
            self.record(photo, RecordedCall::SharpenLuminance { sharpness })
        }

        fn unsharp_mask(&self, photo: &Photo, params: UnsharpMask) -> Option<Photo> {
            self.record(
                photo,
                RecordedCall::UnsharpMask {
                    radius: params.radius,
                    intensity: params.intensity,
                },
            )
        }

        fn style_transform(&self, photo: &Photo, name: &str) -> Option<Photo> {
            self.record(
                photo,
                RecordedCall::StyleTransform {
                    name: name.to_string(),
                },
            )
        }
    }

    fn tiny_photo() -> Photo {
        Photo::from_rgb8(image::RgbImage::from_pixel(2, 2, image::Rgb([100, 150, 200])))
    }

    #[test]
    fn mock_records_calls_in_order() {
        let backend = MockBackend::new();
        let photo = tiny_photo();

        backend.exposure_adjust(&photo, 0.5).unwrap();
        backend.vibrance(&photo, -0.4).unwrap();

        assert_eq!(
            backend.get_calls(),
            vec![
                RecordedCall::ExposureAdjust { ev: 0.5 },
                RecordedCall::Vibrance { amount: -0.4 },
            ]
        );
    }

    #[test]
    fn mock_unavailable_operator_records_then_returns_none() {
        let backend = MockBackend::with_unavailable(&["vibrance"]);
        let photo = tiny_photo();

        assert!(backend.vibrance(&photo, 0.1).is_none());
        assert!(backend.exposure_adjust(&photo, 0.1).is_some());
        assert_eq!(backend.call_count(), 2);
    }
}
