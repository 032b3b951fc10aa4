//! Kreisbögen und ihre Konstruktion aus Startpunkt, Endpunkt und Eingangs-Tangente.
//!
//! Der Mittelpunkt eines Bogens liegt gleichzeitig
//! - auf der Mittelsenkrechten der Sehne `[start, end]` und
//! - auf der Senkrechten zur Eingangs-Tangente durch `start` (Tangentialbedingung).
//!
//! Die Ausgangs-Tangente wird so orientiert, dass der Mittelpunkt bezüglich
//! Eingangs- und Ausgangs-Tangente auf derselben Seite liegt. Dadurch bleibt die
//! Links/Rechts-Semantik entlang der ganzen Kette stabil.

use super::geometry::{angle_from_axis, point_on_circle, Line, Point, Side};
use super::GeometryError;
use crate::shared::TrackOptions;
use std::f64::consts::TAU;

/// Drehsinn eines Bogens (bezogen auf Bildschirm-Koordinaten, +Y nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    /// Winkel wächst vom Start- zum Endwinkel (Rechtskurve)
    Clockwise,
    /// Winkel fällt vom Start- zum Endwinkel (Linkskurve)
    CounterClockwise,
}

/// Mindestmaße, ab denen ein Bogen als fahrbar gilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLimits {
    /// Minimaler Radius
    pub min_radius: f64,
    /// Minimale Bogenlänge (Radius × Öffnungswinkel)
    pub min_arc_length: f64,
}

impl ArcLimits {
    /// Liest die Grenzwerte aus den Streckenoptionen.
    pub fn from_options(options: &TrackOptions) -> Self {
        Self {
            min_radius: options.min_radius,
            min_arc_length: options.min_arc_length,
        }
    }

    /// `radius ≥ min_radius ∧ radius × span ≥ min_arc_length`
    pub fn is_valid(&self, radius: f64, angular_span: f64) -> bool {
        radius >= self.min_radius && radius * angular_span >= self.min_arc_length
    }
}

impl Default for ArcLimits {
    fn default() -> Self {
        Self::from_options(&TrackOptions::default())
    }
}

/// Kreisbogen mit Mittelpunkt, Radius, Start-/Endwinkel und Drehsinn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub direction: ArcDirection,
    /// Erfüllt Mindestradius und Mindestlänge (siehe `ArcLimits`)
    pub valid: bool,
}

impl Arc {
    /// Erstellt einen Bogen und bewertet seine Gültigkeit anhand von `limits`.
    pub fn new(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
        limits: &ArcLimits,
    ) -> Self {
        let mut arc = Self {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
            valid: false,
        };
        arc.valid = limits.is_valid(radius, arc.angular_span());
        arc
    }

    /// Überstrichener Winkel vom Start- zum Endwinkel in Drehrichtung, in `[0, 2π)`.
    pub fn angular_span(&self) -> f64 {
        let diff = (self.start_angle - self.end_angle).abs();
        if diff == 0.0 {
            return 0.0;
        }
        let forward = self.end_angle > self.start_angle;
        match (self.direction, forward) {
            (ArcDirection::Clockwise, true) | (ArcDirection::CounterClockwise, false) => diff,
            _ => TAU - diff,
        }
    }

    /// Bogenlänge `radius × angular_span`.
    pub fn length(&self) -> f64 {
        self.radius * self.angular_span()
    }

    /// Punkt auf dem Bogen-Kreis beim Winkel `angle`.
    pub fn point_at(&self, angle: f64) -> Point {
        point_on_circle(self.center, self.radius, angle)
    }

    /// Konzentrische Kopie mit um `delta` verändertem Radius.
    pub fn offset(&self, delta: f64, limits: &ArcLimits) -> Self {
        Self::new(
            self.center,
            self.radius + delta,
            self.start_angle,
            self.end_angle,
            self.direction,
            limits,
        )
    }
}

/// Ergebnis einer Bogenkonstruktion inklusive Anschluss-Informationen für die Kette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltArc {
    pub arc: Arc,
    pub start_point: Point,
    /// Tatsächlicher Endpunkt (nach einer evtl. Entartungs-Verschiebung)
    pub end_point: Point,
    /// Tangente im Endpunkt, orientiert wie die Eingangs-Tangente
    pub continuation_tangent: Line,
    /// `true` wenn der Endpunkt wegen gleicher X- oder Y-Koordinate verschoben wurde
    pub perturbed: bool,
}

/// Konstruiert tangentenstetige Kreisbögen.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcBuilder {
    limits: ArcLimits,
}

impl ArcBuilder {
    /// Verschiebung des Endpunkts bei gleicher X- bzw. Y-Koordinate.
    pub const DEGENERATE_NUDGE: f64 = 1.0;

    pub fn new(limits: ArcLimits) -> Self {
        Self { limits }
    }

    /// Bogen von `start` nach `end`, der `inbound_tangent` in `start` berührt.
    ///
    /// Teilen Start- und Endpunkt eine X- oder Y-Koordinate, wird der Endpunkt um
    /// eine Längeneinheit entlang der betroffenen Achse verschoben. Liegt `end` auf
    /// der Tangente selbst, existiert kein Bogen (`GeometryError::ParallelLines`).
    pub fn build(
        &self,
        start: Point,
        end: Point,
        inbound_tangent: &Line,
    ) -> Result<BuiltArc, GeometryError> {
        let mut end = end;
        let mut perturbed = false;
        if start.x == end.x {
            end.x += Self::DEGENERATE_NUDGE;
            perturbed = true;
        }
        if start.y == end.y {
            end.y += Self::DEGENERATE_NUDGE;
            perturbed = true;
        }
        if perturbed {
            log::debug!(
                "Endpunkt wegen gleicher Koordinate verschoben: ({:.1}, {:.1})",
                end.x,
                end.y
            );
        }

        let midpoint = (start + end) * 0.5;
        let bisector = Line::through(start, end)?.perpendicular_through(midpoint);
        let radial = inbound_tangent.perpendicular_through(start);
        let center = bisector.intersect(&radial)?;
        let radius = center.distance(start);

        let direction = match inbound_tangent.side_of(end) {
            Side::Left => ArcDirection::CounterClockwise,
            Side::Right | Side::On => ArcDirection::Clockwise,
        };

        let arc = Arc::new(
            center,
            radius,
            angle_from_axis(center, start, radius),
            angle_from_axis(center, end, radius),
            direction,
            &self.limits,
        );

        Ok(BuiltArc {
            arc,
            start_point: start,
            end_point: end,
            continuation_tangent: continuation_tangent(center, end, inbound_tangent),
            perturbed,
        })
    }
}

/// Tangente im Punkt `end_point` eines Kreises um `center`.
///
/// Orientiert so, dass `center` bezüglich Ein- und Ausgangs-Tangente auf derselben
/// Seite liegt.
pub fn continuation_tangent(center: Point, end_point: Point, inbound_tangent: &Line) -> Line {
    let outgoing = Line::with_normal(end_point - center, end_point);
    if inbound_tangent.side_of(center) != outgoing.side_of(center) {
        outgoing.flipped()
    } else {
        outgoing
    }
}
