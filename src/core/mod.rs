//! Core-Domänentypen: Geometrie, Bögen, Begrenzungen, Hütchen, Segmente, Strecke, Skidpad.

pub mod arc;
pub mod boundary;
pub mod cone;
mod error;
/// Geometrische Grundbausteine
///
/// Dieses Modul definiert:
/// - Point: 2D-Weltkoordinate
/// - Line: orientierte Gerade in impliziter Form
/// - Side: Lage eines Punkts zu einer Geraden
pub mod geometry;
pub mod path_segment;
pub mod skidpad;
pub mod track;

pub use arc::{Arc, ArcBuilder, ArcDirection, ArcLimits, BuiltArc};
pub use boundary::{Boundaries, BoundaryArc};
pub use cone::{Cone, ConeColor, ConePlacer, ConeSize, ConeSpacing};
pub use error::{GeometryError, TrackError};
pub use geometry::{angle_from_axis, Line, Point, Side};
pub use path_segment::PathSegment;
pub use skidpad::{SkidpadLayout, SkidpadParams};
pub use track::{DrawingState, Track};
