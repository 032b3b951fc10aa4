//! Geometrische Grundbausteine: Punkte, orientierte Geraden, Schnittpunkte, Winkel.
//!
//! Geraden liegen in impliziter Form `a·x + b·y = c` vor. Die Vorzeichen-Tripel
//! tragen eine Orientierung: `side_of` klassifiziert einen Punkt als links/rechts,
//! ein Umdrehen aller drei Koeffizienten vertauscht links und rechts, ohne die
//! Gerade geometrisch zu verändern.
//!
//! Koordinatensystem: +X = rechts, +Y = unten (Bildschirm). Winkel 0 liegt auf der
//! positiven X-Achse und wächst im Uhrzeigersinn.

use super::GeometryError;
use glam::DVec2;
use std::f64::consts::{PI, TAU};
use std::ops::Neg;

/// 2D-Weltkoordinate (Längeneinheit: Zentimeter).
pub type Point = DVec2;

/// Determinante, unterhalb der zwei Geraden als parallel gelten.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// Lage eines Punkts relativ zu einer orientierten Geraden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Punkt liegt exakt auf der Geraden
    On,
    /// `c − (a·x + b·y) > 0`
    Left,
    /// `c − (a·x + b·y) < 0`
    Right,
}

/// Orientierte Gerade in impliziter Form `a·x + b·y = c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Erstellt eine Gerade aus ihren Koeffizienten.
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Senkrechte Gerade `x = 0`, orientiert in Richtung −Y.
    pub const VERTICAL: Line = Line::new(1.0, 0.0, 0.0);

    /// Gerade durch zwei Punkte in Steigungsform `m·x − y = m·x1 − y1`.
    ///
    /// Schlägt fehl, wenn beide Punkte dieselbe X-Koordinate haben (unendliche Steigung).
    pub fn through(p1: Point, p2: Point) -> Result<Self, GeometryError> {
        if p1.x == p2.x {
            return Err(GeometryError::VerticalLine { x: p1.x });
        }
        let m = (p2.y - p1.y) / (p2.x - p1.x);
        Ok(Self::new(m, -1.0, m * p1.x - p1.y))
    }

    /// Gerade mit Normalenvektor `normal` durch `point`.
    pub fn with_normal(normal: DVec2, point: Point) -> Self {
        Self::new(normal.x, normal.y, normal.dot(point))
    }

    /// Senkrechte zu dieser Geraden durch `point`.
    pub fn perpendicular_through(&self, point: Point) -> Self {
        Self::new(self.b, -self.a, self.b * point.x - self.a * point.y)
    }

    /// Parallele zu dieser Geraden durch `point` (gleiche Orientierung).
    pub fn parallel_through(&self, point: Point) -> Self {
        Self::new(self.a, self.b, self.a * point.x + self.b * point.y)
    }

    /// Schnittpunkt zweier Geraden (Cramersche Regel).
    ///
    /// Gibt `GeometryError::ParallelLines` zurück, wenn die Determinante nahe 0 liegt.
    pub fn intersect(&self, other: &Line) -> Result<Point, GeometryError> {
        let det = self.a * other.b - other.a * self.b;
        if det.abs() < PARALLEL_EPSILON {
            return Err(GeometryError::ParallelLines);
        }
        let x = (self.c * other.b - self.b * other.c) / det;
        let y = (self.a * other.c - other.a * self.c) / det;
        Ok(Point::new(x, y))
    }

    /// Vorzeichen von `c − (a·x + b·y)` als Seiten-Klassifikation.
    pub fn side_of(&self, point: Point) -> Side {
        let d = self.c - (self.a * point.x + self.b * point.y);
        if d > 0.0 {
            Side::Left
        } else if d < 0.0 {
            Side::Right
        } else {
            Side::On
        }
    }

    /// Gleiche Gerade mit umgekehrter Orientierung.
    pub fn flipped(&self) -> Self {
        Self::new(-self.a, -self.b, -self.c)
    }
}

impl Neg for Line {
    type Output = Line;

    fn neg(self) -> Line {
        self.flipped()
    }
}

/// Winkel von `point` um `center`, gemessen ab der positiven X-Achse im Uhrzeigersinn.
///
/// Quadranten-aufgelöster Arkussinus, Ergebnis in `[0, 2π)`.
pub fn angle_from_axis(center: Point, point: Point, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    let y_diff = (center.y - point.y).abs();
    let base = (y_diff / radius).clamp(0.0, 1.0).asin();
    let angle = if point.y >= center.y {
        if point.x >= center.x {
            base
        } else {
            PI - base
        }
    } else if point.x <= center.x {
        PI + base
    } else {
        TAU - base
    };
    if angle >= TAU {
        0.0
    } else {
        angle
    }
}

/// Punkt auf einem Kreis um `center` beim Winkel `angle`.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + DVec2::new(angle.cos(), angle.sin()) * radius
}
