//! Track Drawer Library.
//! Tangentenstetige Bogen-Konstruktion und Hütchen-Platzierung für Rundkurse,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use crate::app::{AppCommand, AppController, AppIntent, AppState, FrameInput, PointerAction};
pub use crate::core::{
    Arc, ArcBuilder, ArcDirection, Cone, ConeColor, ConeSize, DrawingState, GeometryError, Line,
    PathSegment, Point, SkidpadParams, Track, TrackError,
};
pub use crate::shared::{RenderScene, TrackOptions};
