//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie
//! konsumiert. Alle Werte sind fertig berechnet; der Renderer rechnet nichts nach.

use crate::core::{ArcDirection, ConeSize, DrawingState, Point};

/// Zeichenbarer Kreisbogen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcDescriptor {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub direction: ArcDirection,
    /// RGBA
    pub color: [f32; 4],
}

/// Zeichenbares Hütchen an seiner Anzeigeposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeDescriptor {
    pub position: Point,
    /// RGBA
    pub color: [f32; 4],
    pub size: ConeSize,
}

/// Mittellinie, beide Begrenzungen und Hütchen eines Segments.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDescriptor {
    pub centerline: ArcDescriptor,
    pub left_boundary: ArcDescriptor,
    pub right_boundary: ArcDescriptor,
    pub cones: Vec<ConeDescriptor>,
    /// Mittellinie erfüllt Mindestradius und Mindestlänge
    pub valid: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Feste Startaufstellung
    pub opening_cones: Vec<ConeDescriptor>,
    /// Übernommene Segmente in Reihenfolge
    pub committed: Vec<SegmentDescriptor>,
    /// Vorschau-Segment unter dem Zeiger
    pub pending: Option<SegmentDescriptor>,
    /// Hütchen einer geladenen Skidpad-Vorlage
    pub template_cones: Vec<ConeDescriptor>,
    /// Mittellinien-Schleifen einer geladenen Skidpad-Vorlage
    pub template_arcs: Vec<ArcDescriptor>,
    pub drawing_state: DrawingState,
    /// Zielpunkt, wenn der Zeiger in Reichweite ist
    pub finish_prompt: Option<Point>,
}

impl RenderScene {
    /// Anzahl aller zu zeichnenden Hütchen.
    pub fn cone_count(&self) -> usize {
        self.opening_cones.len()
            + self.committed.iter().map(|s| s.cones.len()).sum::<usize>()
            + self.pending.as_ref().map_or(0, |s| s.cones.len())
            + self.template_cones.len()
    }
}
