//! Hütchen (Marker) und ihre Verteilung entlang von Begrenzungsbögen.

use super::arc::ArcDirection;
use super::boundary::BoundaryArc;
use super::geometry::Point;
use crate::shared::TrackOptions;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::FRAC_PI_4;

/// Hütchen-Farbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConeColor {
    /// Linke Begrenzung
    Blue,
    /// Rechte Begrenzung
    Yellow,
    /// Start/Ziel und Zeitnahme
    Orange,
}

/// Hütchen-Größe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConeSize {
    Small,
    Large,
}

/// Einzelnes Hütchen mit Referenzposition und Rausch-Versatz.
///
/// Die Referenzposition ist unveränderlich; die Anzeigeposition ist
/// Referenz plus Versatz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    reference_position: Point,
    noise: DVec2,
    pub color: ConeColor,
    pub size: ConeSize,
}

impl Cone {
    /// Erstellt ein Hütchen ohne Rauschen.
    pub fn new(position: Point, color: ConeColor, size: ConeSize) -> Self {
        Self {
            reference_position: position,
            noise: DVec2::ZERO,
            color,
            size,
        }
    }

    pub fn reference_position(&self) -> Point {
        self.reference_position
    }

    pub fn display_position(&self) -> Point {
        self.reference_position + self.noise
    }

    /// Aktueller Rausch-Versatz (`ZERO` ohne Rauschen).
    pub fn noise_offset(&self) -> DVec2 {
        self.noise
    }

    /// Setzt den Versatz je Achse auf einen Wert aus `{−m, 0, +m}`.
    pub fn apply_noise(&mut self, rng: &mut impl Rng, magnitude: f64) {
        let dx = rng.gen_range(-1i32..=1) as f64 * magnitude;
        let dy = rng.gen_range(-1i32..=1) as f64 * magnitude;
        self.noise = DVec2::new(dx, dy);
    }

    /// Entfernt den Versatz.
    pub fn remove_noise(&mut self) {
        self.noise = DVec2::ZERO;
    }
}

/// Maximale Hütchen-Abstände je Bogenlängen-Klasse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeSpacing {
    /// Abstand für Bögen kürzer als `SHORT_ARC_LENGTH`
    pub short: f64,
    /// Abstand für Bögen zwischen `SHORT_ARC_LENGTH` und `LONG_ARC_LENGTH`
    pub medium: f64,
    /// Obergrenze für lange Bögen
    pub max: f64,
}

impl ConeSpacing {
    /// Bogenlänge, unter der der kurze Abstand gilt.
    pub const SHORT_ARC_LENGTH: f64 = 300.0;
    /// Bogenlänge, ab der der maximale Abstand gilt.
    pub const LONG_ARC_LENGTH: f64 = 1500.0;
    /// Obergrenze je Bogen oder Gerade.
    pub const MAX_CONES: usize = 512;

    pub fn from_options(options: &TrackOptions) -> Self {
        Self {
            short: options.short_cone_spacing,
            medium: options.medium_cone_spacing,
            max: options.max_cone_spacing,
        }
    }

    /// Basis-Abstand für einen Bogen der Länge `length`.
    pub fn for_length(&self, length: f64) -> f64 {
        if length >= Self::LONG_ARC_LENGTH {
            self.max
        } else if length >= Self::SHORT_ARC_LENGTH {
            self.medium
        } else {
            self.short
        }
    }

    /// Anzahl der Hütchen für einen Bogen.
    ///
    /// Bei Öffnungswinkeln über π/4 gelten feste Anzahlen für kurze Bögen:
    /// `< 75 → 1`, `< 400 → 2`, `≤ 1000 → 3`; sonst `ceil(L / Abstand)`.
    pub fn cone_count(&self, length: f64, angular_span: f64) -> usize {
        if length <= 0.0 || !length.is_finite() {
            return 0;
        }
        if angular_span > FRAC_PI_4 {
            if length < 75.0 {
                return 1;
            } else if length < 400.0 {
                return 2;
            } else if length <= 1000.0 {
                return 3;
            }
        }
        Self::spaced_count(length, self.for_length(length))
    }

    /// `ceil(length / spacing)`, begrenzt auf `MAX_CONES`.
    ///
    /// Nicht endliche oder nicht positive Eingaben ergeben 0.
    pub fn spaced_count(length: f64, spacing: f64) -> usize {
        if !(length.is_finite() && length > 0.0 && spacing.is_finite() && spacing > 0.0) {
            return 0;
        }
        ((length / spacing).ceil() as usize).min(Self::MAX_CONES)
    }
}

impl Default for ConeSpacing {
    fn default() -> Self {
        Self::from_options(&TrackOptions::default())
    }
}

/// Verteilt Hütchen entlang von Begrenzungsbögen.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConePlacer {
    spacing: ConeSpacing,
}

impl ConePlacer {
    pub fn new(spacing: ConeSpacing) -> Self {
        Self { spacing }
    }

    /// Hütchen in gleichen Winkelschritten, beginnend am Endwinkel rückwärts zum Start.
    ///
    /// Beim Zielsegment entfällt das erste Hütchen (Index 0), da am Streckenende
    /// bereits Hütchen stehen.
    pub fn place(&self, boundary: &BoundaryArc, finishing: bool) -> Vec<Cone> {
        let arc = &boundary.arc;
        if arc.radius <= 0.0 {
            return Vec::new();
        }
        let span = arc.angular_span();
        let count = self.spacing.cone_count(arc.length(), span);
        if count == 0 {
            return Vec::new();
        }

        // Rückwärts vom Endwinkel: im Uhrzeigersinn fallen die Winkel, gegen ihn steigen sie
        let step = match arc.direction {
            ArcDirection::Clockwise => -span / count as f64,
            ArcDirection::CounterClockwise => span / count as f64,
        };

        let first = usize::from(finishing);
        (first..count)
            .map(|i| {
                Cone::new(
                    arc.point_at(arc.end_angle + step * i as f64),
                    boundary.color,
                    ConeSize::Small,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::arc::{Arc, ArcLimits};
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn boundary(radius: f64, span: f64, direction: ArcDirection) -> BoundaryArc {
        let (start, end) = match direction {
            ArcDirection::Clockwise => (0.0, span),
            ArcDirection::CounterClockwise => (span, 0.0),
        };
        BoundaryArc {
            arc: Arc::new(
                Point::ZERO,
                radius,
                start,
                end,
                direction,
                &ArcLimits::default(),
            ),
            color: ConeColor::Yellow,
        }
    }

    #[test]
    fn test_spacing_tiers() {
        let spacing = ConeSpacing::default();
        assert_eq!(spacing.for_length(299.9), 150.0);
        assert_eq!(spacing.for_length(300.0), 250.0);
        assert_eq!(spacing.for_length(1499.9), 250.0);
        assert_eq!(spacing.for_length(1500.0), 500.0);
    }

    #[test]
    fn test_spacing_law_for_flat_arcs() {
        // Öffnungswinkel ≤ π/4 → ceil(L / spacing(L))
        let placer = ConePlacer::default();
        let spacing = ConeSpacing::default();
        for radius in [200.0, 600.0, 1000.0, 3000.0, 9000.0] {
            let b = boundary(radius, FRAC_PI_4, ArcDirection::Clockwise);
            let length = b.arc.length();
            let expected = (length / spacing.for_length(length)).ceil() as usize;
            assert_eq!(placer.place(&b, false).len(), expected, "radius={radius}");
        }
    }

    #[test]
    fn test_flat_arc_of_length_471_gets_two_cones() {
        // r = 600, span = π/4 → L ≈ 471 → Abstand 250 → 2 Hütchen
        let b = boundary(600.0, FRAC_PI_4, ArcDirection::Clockwise);
        assert_abs_diff_eq!(b.arc.length(), 471.238898, epsilon = 1e-5);
        assert_eq!(ConePlacer::default().place(&b, false).len(), 2);
    }

    #[test]
    fn test_quarter_circle_r300_uses_sharp_corner_override() {
        // r = 300, span = π/2 → L ≈ 471 > 400 und ≤ 1000 → 3 Hütchen
        let b = boundary(300.0, FRAC_PI_2, ArcDirection::Clockwise);
        assert_eq!(ConePlacer::default().place(&b, false).len(), 3);
    }

    #[test]
    fn test_sharp_corner_counts() {
        let spacing = ConeSpacing::default();
        assert_eq!(spacing.cone_count(50.0, PI), 1);
        assert_eq!(spacing.cone_count(399.0, PI), 2);
        assert_eq!(spacing.cone_count(1000.0, PI), 3);
        assert_eq!(spacing.cone_count(1400.0, PI), 6);
        assert_eq!(spacing.cone_count(0.0, PI), 0);
    }

    #[test]
    fn test_spaced_count_is_bounded() {
        assert_eq!(ConeSpacing::spaced_count(1000.0, 250.0), 4);
        assert_eq!(ConeSpacing::spaced_count(1.0e12, 500.0), ConeSpacing::MAX_CONES);
        assert_eq!(ConeSpacing::spaced_count(1000.0, 0.0), 0);
        assert_eq!(ConeSpacing::spaced_count(1000.0, f64::NAN), 0);
        assert_eq!(ConeSpacing::spaced_count(f64::INFINITY, 500.0), 0);
    }

    #[test]
    fn test_zero_spacing_places_no_cones() {
        let placer = ConePlacer::new(ConeSpacing {
            short: 0.0,
            medium: 0.0,
            max: 0.0,
        });
        let b = boundary(2000.0, FRAC_PI_4, ArcDirection::Clockwise);
        assert!(placer.place(&b, false).is_empty());
    }

    #[test]
    fn test_huge_radius_is_capped() {
        // Fast kollinearer Zeiger: riesiger Radius, Länge weit über jedem Bahnmaß
        let b = boundary(2.0e7, PI, ArcDirection::Clockwise);
        assert_eq!(
            ConePlacer::default().place(&b, false).len(),
            ConeSpacing::MAX_CONES
        );
    }

    #[test]
    fn test_cones_start_at_end_angle_and_walk_back() {
        let b = boundary(1000.0, PI, ArcDirection::Clockwise);
        let cones = ConePlacer::default().place(&b, false);
        // L ≈ 3141.6 → 7 Hütchen, Schritt π/7 rückwärts
        assert_eq!(cones.len(), 7);
        assert_abs_diff_eq!(cones[0].reference_position().x, -1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cones[0].reference_position().y, 0.0, epsilon = 1e-9);
        let step = PI / 7.0;
        let expected = b.arc.point_at(PI - step);
        assert_abs_diff_eq!(cones[1].reference_position().x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(cones[1].reference_position().y, expected.y, epsilon = 1e-9);
        // Kein Hütchen exakt am Startwinkel
        let start = b.arc.point_at(0.0);
        assert!(cones
            .iter()
            .all(|c| c.reference_position().distance(start) > 1.0));
    }

    #[test]
    fn test_counter_clockwise_steps_upwards() {
        let b = boundary(1000.0, PI, ArcDirection::CounterClockwise);
        let cones = ConePlacer::default().place(&b, false);
        let expected = b.arc.point_at(PI / 7.0);
        assert_abs_diff_eq!(cones[1].reference_position().x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(cones[1].reference_position().y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn test_finishing_omits_first_cone() {
        let b = boundary(1000.0, PI, ArcDirection::Clockwise);
        let placer = ConePlacer::default();
        let all = placer.place(&b, false);
        let finishing = placer.place(&b, true);
        assert_eq!(finishing.len(), all.len() - 1);
        assert_eq!(finishing[..], all[1..]);
    }

    #[test]
    fn test_non_positive_radius_has_no_cones() {
        let b = boundary(-20.0, PI, ArcDirection::Clockwise);
        assert!(ConePlacer::default().place(&b, false).is_empty());
    }

    #[test]
    fn test_cone_color_and_size_follow_boundary() {
        let b = boundary(800.0, 1.0, ArcDirection::Clockwise);
        for cone in ConePlacer::default().place(&b, false) {
            assert_eq!(cone.color, ConeColor::Yellow);
            assert_eq!(cone.size, ConeSize::Small);
        }
    }

    #[test]
    fn test_noise_uses_discrete_offsets() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cone = Cone::new(Point::new(10.0, -5.0), ConeColor::Blue, ConeSize::Small);
        for _ in 0..50 {
            cone.apply_noise(&mut rng, 20.0);
            let offset = cone.noise_offset();
            assert!([-20.0, 0.0, 20.0].contains(&offset.x));
            assert!([-20.0, 0.0, 20.0].contains(&offset.y));
            assert_eq!(cone.reference_position(), Point::new(10.0, -5.0));
            assert_eq!(cone.display_position(), Point::new(10.0, -5.0) + offset);
        }
        cone.remove_noise();
        assert_eq!(cone.noise_offset(), DVec2::ZERO);
        assert_eq!(cone.display_position(), cone.reference_position());
    }
}
