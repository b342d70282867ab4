//! Pure Rust operator backend on the `image` crate.
//!
//! Everything is statically linked; no system libraries. Pixel math runs in
//! f32 on [0, 1] per channel, parallelized across pixels with rayon, and is
//! rounded back to 8-bit on the way out. Gaussian blurs come from
//! `image::imageops::blur`.
//!
//! | Operator | Implementation |
//! |---|---|
//! | exposure-adjust | gain `2^ev` |
//! | color-controls | saturation lerp from luma, additive brightness, contrast about 0.5 |
//! | highlight-shadow | luma-weighted lift/recovery masks |
//! | vibrance | saturation boost weighted toward muted pixels |
//! | temperature | white-point gains from kelvin approximation |
//! | vignette | radial falloff outside the radius |
//! | sharpen-luminance | luma-only unsharp, fixed small sigma |
//! | unsharp-mask | blur + per-channel blend at given radius |
//! | style transforms | named color grades (`mono` ... `sepia`) |
//!
//! Luma uses BT.601 coefficients throughout.

use super::backend::ImageOpBackend;
use super::params::{ColorControls, HighlightShadow, UnsharpMask, Vignette};
use crate::photo::Photo;
use image::RgbImage;
use image::imageops;
use rayon::prelude::*;

/// Reference white point the warmth adjustment is relative to.
const NEUTRAL_TEMPERATURE: f32 = 6500.0;

/// Sigma for the luminance sharpening pass.
const SHARPEN_SIGMA: f32 = 0.8;

/// Pure Rust backend. Stateless; construct freely.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn to_unit(c: u8) -> f32 {
    c as f32 / 255.0
}

#[inline]
fn to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
fn luma(rgb: [f32; 3]) -> f32 {
    0.299 * rgb[0] + 0.587 * rgb[1] + 0.114 * rgb[2]
}

/// Apply a per-pixel color mapping across the whole image.
fn map_pixels(photo: &Photo, f: impl Fn([f32; 3]) -> [f32; 3] + Sync) -> Option<Photo> {
    let src = photo.as_rgb8();
    if src.width() == 0 || src.height() == 0 {
        return None;
    }
    let mut out = src.clone();
    let buf: &mut [u8] = &mut out;
    buf.par_chunks_exact_mut(3).for_each(|px| {
        let mapped = f([to_unit(px[0]), to_unit(px[1]), to_unit(px[2])]);
        px[0] = to_byte(mapped[0]);
        px[1] = to_byte(mapped[1]);
        px[2] = to_byte(mapped[2]);
    });
    Some(Photo::from_rgb8(out))
}

/// Blend an image against its gaussian-blurred copy, pixel by pixel.
/// `f(original, blurred)` produces the output color.
fn blend_with_blur(
    photo: &Photo,
    sigma: f32,
    f: impl Fn([f32; 3], [f32; 3]) -> [f32; 3] + Sync,
) -> Option<Photo> {
    let src = photo.as_rgb8();
    if src.width() == 0 || src.height() == 0 {
        return None;
    }
    let blurred: RgbImage = imageops::blur(src, sigma.max(0.01));
    let mut out = src.clone();
    let buf: &mut [u8] = &mut out;
    let blur_buf: &[u8] = &blurred;
    buf.par_chunks_exact_mut(3)
        .zip(blur_buf.par_chunks_exact(3))
        .for_each(|(px, bl)| {
            let orig = [to_unit(px[0]), to_unit(px[1]), to_unit(px[2])];
            let soft = [to_unit(bl[0]), to_unit(bl[1]), to_unit(bl[2])];
            let mapped = f(orig, soft);
            px[0] = to_byte(mapped[0]);
            px[1] = to_byte(mapped[1]);
            px[2] = to_byte(mapped[2]);
        });
    Some(Photo::from_rgb8(out))
}

/// Approximate the RGB white point of a black-body radiator at `kelvin`.
///
/// Tanner Helland's curve fit, valid over [1000 K, 40000 K], returned on
/// [0, 1] per channel.
fn kelvin_to_rgb(kelvin: f32) -> [f32; 3] {
    let t = kelvin.clamp(1000.0, 40000.0) / 100.0;

    let r = if t <= 66.0 {
        255.0
    } else {
        329.698_73 * (t - 60.0).powf(-0.133_204_76)
    };
    let g = if t <= 66.0 {
        99.470_8 * t.ln() - 161.119_57
    } else {
        288.122_16 * (t - 60.0).powf(-0.075_514_85)
    };
    let b = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        138.517_73 * (t - 10.0).ln() - 305.044_8
    };

    [
        (r / 255.0).clamp(0.0, 1.0),
        (g / 255.0).clamp(0.0, 1.0),
        (b / 255.0).clamp(0.0, 1.0),
    ]
}

/// Per-channel gains that shift the white balance from the reference
/// neutral toward `target` kelvin, normalized so green stays at 1.
fn temperature_gains(target: f32) -> [f32; 3] {
    let reference = kelvin_to_rgb(NEUTRAL_TEMPERATURE);
    let wanted = kelvin_to_rgb(target);
    let raw = [
        reference[0] / wanted[0].max(1e-4),
        reference[1] / wanted[1].max(1e-4),
        reference[2] / wanted[2].max(1e-4),
    ];
    [raw[0] / raw[1], 1.0, raw[2] / raw[1]]
}

impl ImageOpBackend for RustBackend {
    fn exposure_adjust(&self, photo: &Photo, ev: f32) -> Option<Photo> {
        let gain = 2f32.powf(ev);
        map_pixels(photo, move |rgb| {
            [rgb[0] * gain, rgb[1] * gain, rgb[2] * gain]
        })
    }

    fn color_controls(&self, photo: &Photo, params: ColorControls) -> Option<Photo> {
        map_pixels(photo, move |rgb| {
            let l = luma(rgb);
            rgb.map(|c| {
                let saturated = l + (c - l) * params.saturation;
                let brightened = saturated + params.brightness;
                (brightened - 0.5) * params.contrast + 0.5
            })
        })
    }

    fn highlight_shadow(&self, photo: &Photo, params: HighlightShadow) -> Option<Photo> {
        map_pixels(photo, move |rgb| {
            let l = luma(rgb);
            let shadow_weight = (1.0 - l) * (1.0 - l);
            let highlight_weight = l * l;
            let lift = (params.shadow_amount - 1.0) * shadow_weight * 0.5
                + (params.highlight_amount - 1.0) * highlight_weight * 0.5;
            rgb.map(|c| c + lift)
        })
    }

    fn vibrance(&self, photo: &Photo, amount: f32) -> Option<Photo> {
        map_pixels(photo, move |rgb| {
            let max = rgb[0].max(rgb[1]).max(rgb[2]);
            let min = rgb[0].min(rgb[1]).min(rgb[2]);
            // muted pixels get the full boost, saturated ones are protected
            let boost = 1.0 + amount * (1.0 - (max - min)) * 0.5;
            let l = luma(rgb);
            rgb.map(|c| l + (c - l) * boost)
        })
    }

    fn temperature(&self, photo: &Photo, target_neutral: f32) -> Option<Photo> {
        let gains = temperature_gains(target_neutral);
        map_pixels(photo, move |rgb| {
            [rgb[0] * gains[0], rgb[1] * gains[1], rgb[2] * gains[2]]
        })
    }

    fn vignette(&self, photo: &Photo, params: Vignette) -> Option<Photo> {
        let src = photo.as_rgb8();
        let (w, h) = src.dimensions();
        if w == 0 || h == 0 {
            return None;
        }
        let (cx, cy) = (w as f32 / 2.0, h as f32 / 2.0);
        let max_dist = (cx * cx + cy * cy).sqrt();
        // the untouched disc ends where the falloff starts
        let start = (params.radius / 2.0).clamp(0.0, 0.95);

        let mut out = src.clone();
        let stride = w as usize * 3;
        let buf: &mut [u8] = &mut out;
        buf.par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.chunks_exact_mut(3).enumerate() {
                    let dx = x as f32 + 0.5 - cx;
                    let dy = y as f32 + 0.5 - cy;
                    let d = (dx * dx + dy * dy).sqrt() / max_dist;
                    let t = ((d - start) / (1.0 - start)).clamp(0.0, 1.0);
                    let factor = (1.0 - 0.5 * params.intensity * t * t).max(0.0);
                    for c in px {
                        *c = to_byte(to_unit(*c) * factor);
                    }
                }
            });
        Some(Photo::from_rgb8(out))
    }

    fn sharpen_luminance(&self, photo: &Photo, sharpness: f32) -> Option<Photo> {
        blend_with_blur(photo, SHARPEN_SIGMA, move |orig, soft| {
            let delta = luma(orig) - luma(soft);
            orig.map(|c| c + sharpness * delta)
        })
    }

    fn unsharp_mask(&self, photo: &Photo, params: UnsharpMask) -> Option<Photo> {
        blend_with_blur(photo, params.radius, move |orig, soft| {
            [
                orig[0] + params.intensity * (orig[0] - soft[0]),
                orig[1] + params.intensity * (orig[1] - soft[1]),
                orig[2] + params.intensity * (orig[2] - soft[2]),
            ]
        })
    }

    fn style_transform(&self, photo: &Photo, name: &str) -> Option<Photo> {
        match name {
            "mono" => map_pixels(photo, |rgb| {
                let l = luma(rgb);
                [l, l, l]
            }),
            "noir" => map_pixels(photo, |rgb| {
                let l = (luma(rgb) - 0.5) * 1.4 + 0.5;
                [l, l, l]
            }),
            "fade" => map_pixels(photo, |rgb| {
                let l = luma(rgb);
                rgb.map(|c| (l + (c - l) * 0.65) * 0.85 + 0.08)
            }),
            "chrome" => map_pixels(photo, |rgb| {
                let l = luma(rgb);
                rgb.map(|c| (l + (c - l) * 1.25 - 0.5) * 1.1 + 0.5)
            }),
            "process" => map_pixels(photo, |rgb| {
                let cooled = [rgb[0] * 0.94, rgb[1] * 1.0, rgb[2] * 1.12];
                cooled.map(|c| (c - 0.5) * 1.05 + 0.5)
            }),
            "transfer" => map_pixels(photo, |rgb| [rgb[0] * 1.12, rgb[1] * 1.02, rgb[2] * 0.88]),
            "instant" => map_pixels(photo, |rgb| {
                let l = luma(rgb);
                let muted = [
                    (l + (rgb[0] - l) * 0.8) * 1.06,
                    l + (rgb[1] - l) * 0.8,
                    (l + (rgb[2] - l) * 0.8) * 0.92,
                ];
                muted.map(|c| c * 0.9 + 0.05)
            }),
            "sepia" => map_pixels(photo, |rgb| {
                [
                    0.393 * rgb[0] + 0.769 * rgb[1] + 0.189 * rgb[2],
                    0.349 * rgb[0] + 0.686 * rgb[1] + 0.168 * rgb[2],
                    0.272 * rgb[0] + 0.534 * rgb[1] + 0.131 * rgb[2],
                ]
            }),
            _ => None,
        }
    }
}
