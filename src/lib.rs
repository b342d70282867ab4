//! # Tonelab
//!
//! A non-destructive photo adjustment engine. Given a source image, a named
//! preset, and a set of continuous adjustment values, it deterministically
//! renders an edited image — and keeps a linear undo/redo history of the
//! results. Decoding, encoding, and pixel work live behind narrow seams so
//! the engine itself stays pure and testable.
//!
//! # Architecture: Recompute From the Source
//!
//! Edits are never stacked onto previous output. Every render starts from
//! the pristine source image and the *full* current adjustment state:
//!
//! ```text
//! preset / slider  →  AdjustmentState  →  pipeline::render(source, …)  →  EditHistory
//! ```
//!
//! This buys three things:
//!
//! - **Determinism**: the same (source, preset, state) triple always
//!   produces the same pixels — renders are referentially transparent.
//! - **Idempotence**: dragging a slider back and forth cannot accumulate
//!   rounding error, because nothing compounds.
//! - **Testability**: the pipeline is a pure function over a backend trait,
//!   so tests inject a recording mock and assert exact operator calls.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | the closed adjustment enumeration: defaults, ranges, clamping |
//! | [`state`] | total kind→value mapping with clamped writes and sparse serde |
//! | [`presets`] | builtin preset table, TOML preset packs, ordered registry |
//! | [`pipeline`] | the ordered operator composition — `render`, which never fails |
//! | [`history`] | linear branch-truncating undo/redo over rendered snapshots |
//! | [`session`] | per-image orchestration: state + history + memoized renders |
//! | [`photo`] | opaque image value type: decode, encode, dimensions, downscale |
//! | [`imaging`] | operator backend seam: trait, parameters, pure-Rust implementation |
//! | [`output`] | CLI listing/format helpers (pure `format_*` + `print_*`) |
//!
//! # Design Decisions
//!
//! ## Operators Return `Option`, Stages Degrade
//!
//! Backend operators return `Option<Photo>`; `None` means unavailable or no
//! output. The pipeline responds by passing the previous stage's image
//! through unchanged. A backend with partial capability still renders
//! everything it can, and `render` itself has no error path at all.
//!
//! ## Clamp, Don't Reject
//!
//! Adjustment writes clamp into the catalog range (non-finite input falls
//! back to the default). Sliders, sidecar files, and preset packs can feed
//! raw values without a validation layer; the type guarantees every read is
//! in range.
//!
//! ## Skip At Neutral
//!
//! A stage whose adjustment equals its neutral value is skipped, not called
//! with identity parameters. A fully-default state renders zero operator
//! calls and returns the source image bit-for-bit.
//!
//! ## Pure-Rust Imaging
//!
//! The production backend uses the `image` crate with rayon-parallel pixel
//! loops — no system libraries, statically linked. Anything platform-bound
//! (GPU paths, vendor filter frameworks) can slot in behind
//! [`imaging::ImageOpBackend`] without touching the engine.

pub mod catalog;
pub mod history;
pub mod imaging;
pub mod output;
pub mod photo;
pub mod pipeline;
pub mod presets;
pub mod session;
pub mod state;

pub use catalog::AdjustmentKind;
pub use history::{EditHistory, HistoryEntry};
pub use imaging::{ImageOpBackend, RustBackend};
pub use photo::{Photo, PhotoError, PhotoFormat};
pub use pipeline::render;
pub use presets::{FilterPreset, PresetError, PresetRegistry};
pub use session::EditSession;
pub use state::AdjustmentState;
