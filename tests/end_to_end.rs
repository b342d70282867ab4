//! End-to-end scenarios on the production backend.
//!
//! Unit tests assert operator call sequences against the recording mock;
//! these tests run real pixels through [`RustBackend`] and check the
//! engine-level contracts: neutral identity, determinism, and session
//! undo/redo over actual renders.

use image::{Rgb, RgbImage};
use tonelab::{
    AdjustmentKind, AdjustmentState, EditSession, ImageOpBackend, Photo, PresetRegistry,
    RustBackend, pipeline,
};

/// A small synthetic photo with gradients in all three channels.
fn test_photo() -> Photo {
    Photo::from_rgb8(RgbImage::from_fn(48, 32, |x, y| {
        Rgb([
            (x * 5 % 256) as u8,
            (y * 7 % 256) as u8,
            ((x + y) * 3 % 256) as u8,
        ])
    }))
}

#[test]
fn neutral_defaults_render_pixel_identical() {
    let backend = RustBackend::new();
    let photo = test_photo();

    let output = pipeline::render(&backend, &photo, None, &AdjustmentState::defaults());
    assert_eq!(output, photo);
}

#[test]
fn preset_render_is_deterministic() {
    let backend = RustBackend::new();
    let registry = PresetRegistry::builtin();
    let nc = registry.find("富士NC").unwrap();
    let photo = test_photo();

    let first = pipeline::render(&backend, &photo, Some(nc), &nc.state());
    let second = pipeline::render(&backend, &photo, Some(nc), &nc.state());

    assert_eq!(first, second);
    assert_ne!(first, photo);
}

#[test]
fn every_builtin_preset_renders() {
    let backend = RustBackend::new();
    let registry = PresetRegistry::builtin();
    let photo = test_photo();

    for preset in registry.list() {
        let output = pipeline::render(&backend, &photo, Some(preset), &preset.state());
        assert_eq!(output.dimensions(), photo.dimensions(), "{}", preset.name);
    }
}

#[test]
fn mono_preset_renders_grayscale() {
    let backend = RustBackend::new();
    let registry = PresetRegistry::builtin();
    let mono = registry.find("Mono").unwrap();

    let output = pipeline::render(&backend, &test_photo(), Some(mono), &mono.state());
    for pixel in output.as_rgb8().pixels() {
        let [r, g, b] = pixel.0;
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}

#[test]
fn session_undo_walks_back_through_real_renders() {
    let backend = RustBackend::new();
    let registry = PresetRegistry::builtin();
    let sepia = registry.find("Sepia").unwrap();
    let photo = test_photo();
    let mut session = EditSession::new(photo.clone());

    let after_sepia = session.apply_preset(&backend, sepia).image.clone();
    session.set_adjustment(&backend, AdjustmentKind::Exposure, 0.6);

    assert_eq!(session.undo().unwrap().image, after_sepia);
    assert_eq!(session.undo().unwrap().image, photo);
    assert!(session.undo().is_none());

    assert_eq!(session.redo().unwrap().image, after_sepia);
}

#[test]
fn slider_edits_do_not_compound() {
    let backend = RustBackend::new();
    let photo = test_photo();
    let mut session = EditSession::new(photo.clone());

    // push exposure around, then back to a value rendered before
    session.set_adjustment(&backend, AdjustmentKind::Exposure, 0.5);
    let at_half = session.current().image.clone();
    session.set_adjustment(&backend, AdjustmentKind::Exposure, 1.5);
    session.set_adjustment(&backend, AdjustmentKind::Exposure, 0.5);

    assert_eq!(session.current().image, at_half);
}

#[test]
fn user_preset_pack_matches_equivalent_direct_render() {
    let backend = RustBackend::new();
    let mut registry = PresetRegistry::builtin();
    registry
        .load_toml(
            r#"
            [[presets]]
            name = "Warm Fade"
            style_transform = "fade"

            [presets.overrides]
            warmth = 18.0
            contrast = 1.15
            "#,
        )
        .unwrap();
    let preset = registry.find("Warm Fade").unwrap();
    let photo = test_photo();

    let via_preset = pipeline::render(&backend, &photo, Some(preset), &preset.state());

    let mut state = AdjustmentState::defaults();
    state.set(AdjustmentKind::Warmth, 18.0);
    state.set(AdjustmentKind::Contrast, 1.15);
    let styled_source = backend
        .style_transform(&photo, "fade")
        .expect("fade is a builtin style");
    let direct = pipeline::render(&backend, &styled_source, None, &state);

    assert_eq!(via_preset, direct);
}

#[test]
fn scaled_preview_renders_at_reduced_size() {
    let backend = RustBackend::new();
    let registry = PresetRegistry::builtin();
    let noir = registry.find("Noir").unwrap();

    let preview = test_photo().scaled_down(24);
    assert_eq!(preview.dimensions(), (24, 16));

    let output = pipeline::render(&backend, &preview, Some(noir), &noir.state());
    assert_eq!(output.dimensions(), (24, 16));
}

#[test]
fn state_sidecar_round_trip_preserves_the_render() {
    let backend = RustBackend::new();
    let photo = test_photo();

    let mut state = AdjustmentState::defaults();
    state.set(AdjustmentKind::Exposure, 0.4);
    state.set(AdjustmentKind::Vignette, 0.3);

    let json = serde_json::to_string(&state).unwrap();
    let restored: AdjustmentState = serde_json::from_str(&json).unwrap();

    let original_render = pipeline::render(&backend, &photo, None, &state);
    let restored_render = pipeline::render(&backend, &photo, None, &restored);
    assert_eq!(original_render, restored_render);
}

#[test]
fn encoded_round_trip_render_survives_png() {
    let backend = RustBackend::new();
    let registry = PresetRegistry::builtin();
    let chrome = registry.find("Chrome").unwrap();
    let photo = test_photo();

    let rendered = pipeline::render(&backend, &photo, Some(chrome), &chrome.state());
    let bytes = rendered.to_bytes(tonelab::PhotoFormat::Png).unwrap();
    let decoded = Photo::from_bytes(&bytes).unwrap();

    assert_eq!(decoded, rendered);
}
