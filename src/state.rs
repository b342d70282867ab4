//! The current value of every adjustment in an editing session.
//!
//! [`AdjustmentState`] is a total mapping: every [`AdjustmentKind`] always
//! has a value, and every value is inside that kind's catalog range. Writes
//! clamp silently — callers can feed raw slider positions or untrusted
//! sidecar data without pre-validation.
//!
//! The serialized form is a map of kind slug → value. Partial maps are
//! valid input: missing kinds deserialize to their defaults, which is what
//! lets preset overrides and hand-edited sidecar files stay sparse.

use crate::catalog::AdjustmentKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values for all twelve adjustments. Copy-cheap; treat as a value object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<AdjustmentKind, f32>",
    into = "BTreeMap<AdjustmentKind, f32>"
)]
pub struct AdjustmentState {
    values: [f32; 12],
}

impl AdjustmentState {
    /// Every kind at its catalog default. Equivalent to `Default::default()`.
    pub fn defaults() -> Self {
        let mut values = [0.0; 12];
        for kind in AdjustmentKind::ALL {
            values[kind.index()] = kind.default_value();
        }
        Self { values }
    }

    /// Current value for `kind`. Always within `kind.range()`.
    pub fn get(&self, kind: AdjustmentKind) -> f32 {
        self.values[kind.index()]
    }

    /// Store `kind.clamp(value)`. Always succeeds.
    pub fn set(&mut self, kind: AdjustmentKind, value: f32) {
        self.values[kind.index()] = kind.clamp(value);
    }

    /// New state equal to `self` except kinds present in `overrides`, which
    /// are clamped-set. `self` is untouched.
    pub fn merge_overrides(&self, overrides: &BTreeMap<AdjustmentKind, f32>) -> Self {
        let mut merged = *self;
        for (&kind, &value) in overrides {
            merged.set(kind, value);
        }
        merged
    }

    /// True when every kind sits at its default — the fully-neutral state
    /// under which the pipeline skips every stage.
    pub fn is_default(&self) -> bool {
        *self == Self::defaults()
    }

    /// Iterate `(kind, value)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (AdjustmentKind, f32)> + '_ {
        AdjustmentKind::ALL.into_iter().map(|k| (k, self.get(k)))
    }
}

impl Default for AdjustmentState {
    fn default() -> Self {
        Self::defaults()
    }
}

impl From<BTreeMap<AdjustmentKind, f32>> for AdjustmentState {
    fn from(map: BTreeMap<AdjustmentKind, f32>) -> Self {
        AdjustmentState::defaults().merge_overrides(&map)
    }
}

impl From<AdjustmentState> for BTreeMap<AdjustmentKind, f32> {
    fn from(state: AdjustmentState) -> Self {
        state.iter().collect()
    }
}
