//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem externen Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::TrackOptions;
pub use render_scene::{ArcDescriptor, ConeDescriptor, RenderScene, SegmentDescriptor};
