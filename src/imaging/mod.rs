//! Image operators — the backend seam under the pipeline.
//!
//! The module is split into:
//! - **Parameters**: data structures describing operator invocations
//! - **Backend**: the [`ImageOpBackend`] trait (one method per operator,
//!   `Option<Photo>` output — `None` means the stage degrades to identity)
//! - **RustBackend**: the production implementation on the `image` crate
//!
//! Pipeline code depends only on the trait, so tests swap in a recording
//! mock and partial-capability backends keep rendering.

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::ImageOpBackend;
pub use params::{ColorControls, HighlightShadow, UnsharpMask, Vignette};
pub use rust_backend::RustBackend;
