//! Linke und rechte Streckenbegrenzung als radial versetzte Kopien des Mittellinien-Bogens.

use super::arc::{Arc, ArcDirection, ArcLimits};
use super::cone::ConeColor;

/// Begrenzungsbogen mit zugeordneter Hütchen-Farbe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryArc {
    pub arc: Arc,
    pub color: ConeColor,
}

/// Begrenzungen links und rechts der Fahrtrichtung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    /// Links der Fahrtrichtung (blau)
    pub left: BoundaryArc,
    /// Rechts der Fahrtrichtung (gelb)
    pub right: BoundaryArc,
}

/// Farbe einer Begrenzung anhand des Radius-Vergleichs mit der Mittellinie.
///
/// Linkskurve: der größere Radius liegt rechts → gelb.
/// Rechtskurve: der kleinere Radius liegt rechts → gelb.
pub fn boundary_color(center_arc: &Arc, boundary: &Arc) -> ConeColor {
    match center_arc.direction {
        ArcDirection::CounterClockwise if boundary.radius > center_arc.radius => ConeColor::Yellow,
        ArcDirection::Clockwise if boundary.radius < center_arc.radius => ConeColor::Yellow,
        _ => ConeColor::Blue,
    }
}

/// Leitet beide Begrenzungen mit Radius `center_arc.radius ± offset` ab.
pub fn boundaries(center_arc: &Arc, offset: f64, limits: &ArcLimits) -> Boundaries {
    let outer = center_arc.offset(offset, limits);
    let inner = center_arc.offset(-offset, limits);
    let (left, right) = match center_arc.direction {
        ArcDirection::CounterClockwise => (inner, outer),
        ArcDirection::Clockwise => (outer, inner),
    };
    Boundaries {
        left: BoundaryArc {
            arc: left,
            color: boundary_color(center_arc, &left),
        },
        right: BoundaryArc {
            arc: right,
            color: boundary_color(center_arc, &right),
        },
    }
}
