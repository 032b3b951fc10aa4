//! Fehlertypen des Geometrie- und Strecken-Kerns.

use thiserror::Error;

/// Fehler bei geometrischen Konstruktionen.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Gerade durch zwei Punkte mit gleicher X-Koordinate (unendliche Steigung)
    #[error("Gerade durch zwei Punkte mit x = {x} ist senkrecht und hat keine Steigungsform")]
    VerticalLine { x: f64 },
    /// Schnitt paralleler Geraden — es existiert kein Kreisbogen
    #[error("Geraden sind parallel, kein Schnittpunkt")]
    ParallelLines,
}

/// Abgelehnte Operationen auf einer Strecke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackError {
    /// Die Strecke ist geschlossen, es kann nichts mehr übernommen werden
    #[error("Strecke ist geschlossen")]
    TrackClosed,
    /// Es gibt kein gültig berechnetes Vorschau-Segment
    #[error("Kein Vorschau-Segment vorhanden")]
    NoPendingSegment,
}
