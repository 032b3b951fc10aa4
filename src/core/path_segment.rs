//! Ein Streckensegment: Mittellinien-Bogen, beide Begrenzungen und deren Hütchen.

use super::arc::{Arc, ArcBuilder, ArcLimits};
use super::boundary::{boundaries, BoundaryArc};
use super::cone::{Cone, ConePlacer, ConeSpacing};
use super::geometry::{Line, Point};
use super::GeometryError;
use crate::shared::TrackOptions;
use rand::Rng;

/// Übernehmbare Einheit aus Bogen, Begrenzungen, Hütchen und Anschluss-Tangente.
///
/// Nach dem Übernehmen unveränderlich, bis auf die Anzeigepositionen der Hütchen.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub start_point: Point,
    /// Endpunkt des Mittellinien-Bogens (Startpunkt des nächsten Segments)
    pub end_point: Point,
    /// Tangente, an der dieses Segment im Startpunkt anliegt
    pub inbound_tangent: Line,
    pub center_arc: Arc,
    pub left_boundary: BoundaryArc,
    pub right_boundary: BoundaryArc,
    /// Erst rechte, dann linke Begrenzung, jeweils vom Bogenende rückwärts
    pub cones: Vec<Cone>,
    /// Tangente im Endpunkt, Eingangs-Tangente des Folgesegments
    pub continuation_tangent: Line,
    /// Segment schließt die Strecke am Zielpunkt
    pub finishing: bool,
}

impl PathSegment {
    /// Berechnet ein Segment als reine Funktion seiner Eingaben und der Optionen.
    ///
    /// Identische Argumente liefern bitgleiche Ergebnisse, daher kann die Vorschau
    /// bei jeder Mausbewegung neu berechnet werden.
    pub fn build(
        start: Point,
        end: Point,
        inbound_tangent: &Line,
        finishing: bool,
        options: &TrackOptions,
    ) -> Result<Self, GeometryError> {
        let limits = ArcLimits::from_options(options);
        let built = ArcBuilder::new(limits).build(start, end, inbound_tangent)?;
        let sides = boundaries(&built.arc, options.boundary_offset, &limits);

        let placer = ConePlacer::new(ConeSpacing::from_options(options));
        let mut cones = placer.place(&sides.right, finishing);
        cones.extend(placer.place(&sides.left, finishing));

        Ok(Self {
            start_point: built.start_point,
            end_point: built.end_point,
            inbound_tangent: *inbound_tangent,
            center_arc: built.arc,
            left_boundary: sides.left,
            right_boundary: sides.right,
            cones,
            continuation_tangent: built.continuation_tangent,
            finishing,
        })
    }

    /// Gibt `true` zurück, wenn der Mittellinien-Bogen fahrbar ist.
    pub fn is_valid(&self) -> bool {
        self.center_arc.valid
    }

    pub(crate) fn apply_noise(&mut self, rng: &mut impl Rng, magnitude: f64) {
        for cone in &mut self.cones {
            cone.apply_noise(rng, magnitude);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cone::ConeColor;
    use crate::core::geometry::Side;

    #[test]
    fn test_build_is_idempotent() {
        let options = TrackOptions::default();
        let start = Point::new(0.0, -100.0);
        let end = Point::new(-733.0, -1291.5);
        let a = PathSegment::build(start, end, &Line::VERTICAL, false, &options)
            .expect("Segment erwartet");
        let b = PathSegment::build(start, end, &Line::VERTICAL, false, &options)
            .expect("Segment erwartet");
        assert_eq!(a, b);
    }

    #[test]
    fn test_cones_on_both_boundaries() {
        let options = TrackOptions::default();
        let segment = PathSegment::build(
            Point::new(0.0, -100.0),
            Point::new(-800.0, -900.0),
            &Line::VERTICAL,
            false,
            &options,
        )
        .expect("Segment erwartet");

        let yellow = segment
            .cones
            .iter()
            .filter(|c| c.color == ConeColor::Yellow)
            .count();
        let blue = segment
            .cones
            .iter()
            .filter(|c| c.color == ConeColor::Blue)
            .count();
        assert!(yellow > 0 && blue > 0);
        // Außenbogen ist länger → mindestens so viele Hütchen wie innen
        assert!(yellow >= blue);
        assert_eq!(segment.cones[0].color, ConeColor::Yellow);

        for cone in &segment.cones {
            let expected_radius = match cone.color {
                ConeColor::Yellow => segment.right_boundary.arc.radius,
                _ => segment.left_boundary.arc.radius,
            };
            let r = cone.reference_position().distance(segment.center_arc.center);
            assert!((r - expected_radius).abs() < 1e-6);
        }
    }

    #[test]
    fn test_finishing_drops_one_cone_per_boundary() {
        let options = TrackOptions::default();
        let start = Point::new(-900.0, 600.0);
        let tangent = Line::new(0.0, -1.0, -600.0);
        let normal = PathSegment::build(start, Point::new(0.0, 100.0), &tangent, false, &options)
            .expect("Segment erwartet");
        let finishing =
            PathSegment::build(start, Point::new(0.0, 100.0), &tangent, true, &options)
                .expect("Segment erwartet");
        assert_eq!(finishing.cones.len() + 2, normal.cones.len());
        assert!(finishing.finishing);
    }

    #[test]
    fn test_continuation_keeps_center_on_same_side() {
        let options = TrackOptions::default();
        let segment = PathSegment::build(
            Point::new(0.0, -100.0),
            Point::new(640.0, -820.0),
            &Line::VERTICAL,
            false,
            &options,
        )
        .expect("Segment erwartet");
        let center = segment.center_arc.center;
        assert_eq!(segment.inbound_tangent.side_of(center), Side::Right);
        assert_eq!(segment.continuation_tangent.side_of(center), Side::Right);
    }

    #[test]
    fn test_point_on_tangent_has_no_segment() {
        let options = TrackOptions::default();
        let tangent = Line::new(1.0, 1.0, 0.0);
        let result = PathSegment::build(
            Point::new(0.0, 0.0),
            Point::new(100.0, -100.0),
            &tangent,
            false,
            &options,
        );
        assert_eq!(result, Err(GeometryError::ParallelLines));
    }
}
