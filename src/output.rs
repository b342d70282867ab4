//! CLI output formatting.
//!
//! Each listing has a `format_*` function returning `Vec<String>` (pure —
//! no I/O, unit testable) and a `print_*` wrapper that writes to stdout.
//!
//! Entities follow a two-level pattern: a header line with a positional
//! index and name, then indented context lines:
//!
//! ```text
//! Presets
//! 001 Original
//! 002 富士NC
//!     Overrides: 9
//! 004 Mono
//!     Style: mono
//! ```

use crate::catalog::AdjustmentKind;
use crate::presets::FilterPreset;
use crate::state::AdjustmentState;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Listing of presets in registry order.
pub fn format_preset_list(presets: &[FilterPreset]) -> Vec<String> {
    let mut lines = vec!["Presets".to_string()];
    for (i, preset) in presets.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), preset.name));
        if let Some(style) = &preset.style_transform {
            lines.push(format!("    Style: {style}"));
        }
        if !preset.overrides.is_empty() {
            lines.push(format!("    Overrides: {}", preset.overrides.len()));
        }
    }
    lines
}

/// Listing of the adjustment catalog: slug, range, default per kind.
pub fn format_catalog() -> Vec<String> {
    let mut lines = vec!["Adjustments".to_string()];
    for (i, kind) in AdjustmentKind::ALL.into_iter().enumerate() {
        let (min, max) = kind.range();
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            kind.label(),
            kind.slug()
        ));
        lines.push(format!(
            "    Range: {min:.2} to {max:.2}, default {:.2}",
            kind.default_value()
        ));
    }
    lines
}

/// Summary of one `apply` run: what was rendered, with which settings.
pub fn format_apply_summary(
    source: &str,
    dimensions: (u32, u32),
    preset: Option<&str>,
    state: &AdjustmentState,
    output: &str,
) -> Vec<String> {
    let (w, h) = dimensions;
    let mut lines = vec![format!("001 {source} ({w}x{h})")];
    if let Some(name) = preset {
        lines.push(format!("    Preset: {name}"));
    }
    for (kind, value) in state.iter() {
        if value != kind.default_value() {
            lines.push(format!("    {} = {value:.2}", kind.slug()));
        }
    }
    lines.push(format!("    -> {output}"));
    lines
}

pub fn print_preset_list(presets: &[FilterPreset]) {
    for line in format_preset_list(presets) {
        println!("{line}");
    }
}

pub fn print_catalog() {
    for line in format_catalog() {
        println!("{line}");
    }
}

pub fn print_apply_summary(
    source: &str,
    dimensions: (u32, u32),
    preset: Option<&str>,
    state: &AdjustmentState,
    output: &str,
) {
    for line in format_apply_summary(source, dimensions, preset, state, output) {
        println!("{line}");
    }
}
