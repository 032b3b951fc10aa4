//! Skidpad-Vorlage: Einfahrt, Zeitnahme-Linie, zwei Kreisschleifen, Ausfahrt.
//!
//! Fahrtrichtung ist −Y (nach oben). Beide Schleifen berühren die Mittellinie
//! `x = 0` auf Höhe der Zeitnahme-Linie; die rechte wird im, die linke gegen den
//! Uhrzeigersinn befahren.

use super::arc::{Arc, ArcDirection, ArcLimits};
use super::boundary::boundary_color;
use super::cone::{Cone, ConeColor, ConeSize, ConeSpacing};
use super::geometry::{point_on_circle, Point};
use crate::shared::TrackOptions;
use std::f64::consts::{PI, TAU};

/// Maße einer Skidpad-Anfrage in Welteinheiten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkidpadParams {
    pub left_radius: f64,
    pub right_radius: f64,
    pub start_straight_length: f64,
    pub finish_straight_length: f64,
}

impl SkidpadParams {
    /// Alle Werte endlich und strikt positiv.
    pub fn is_valid(&self) -> bool {
        [
            self.left_radius,
            self.right_radius,
            self.start_straight_length,
            self.finish_straight_length,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Erzeugte Vorlage: Hütchen-Liste und die beiden Mittellinien-Schleifen.
#[derive(Debug, Clone, PartialEq)]
pub struct SkidpadLayout {
    pub cones: Vec<Cone>,
    /// `[rechts, links]`
    pub loops: [Arc; 2],
}

/// Erzeugt die Skidpad-Vorlage ab der Startlinie `start_y`.
///
/// Gibt `None` zurück, wenn ein Parameter nicht strikt positiv ist.
pub fn generate(
    params: &SkidpadParams,
    options: &TrackOptions,
    start_y: f64,
) -> Option<SkidpadLayout> {
    if !params.is_valid() {
        return None;
    }

    let offset = options.boundary_offset;
    let spacing = ConeSpacing::from_options(options);
    let limits = ArcLimits::from_options(options);

    // Abstand von der Zeitnahme-Linie, ab dem die Geraden die äußeren Ringe nicht mehr schneiden
    let max_radius = params.left_radius.max(params.right_radius);
    let clearance = ((max_radius + offset).powi(2) - (max_radius - offset).powi(2)).sqrt();

    let entry_end = start_y - params.start_straight_length;
    let control_y = entry_end - clearance;

    let mut cones = straight_cones(
        start_y,
        params.start_straight_length,
        offset,
        options.max_cone_spacing,
    );

    for x in [-offset, offset] {
        cones.push(Cone::new(
            Point::new(x, control_y),
            ConeColor::Orange,
            ConeSize::Large,
        ));
    }

    let right_center = Point::new(params.right_radius, control_y);
    let left_center = Point::new(-params.left_radius, control_y);
    let right_loop = Arc::new(
        right_center,
        params.right_radius,
        PI,
        PI + TAU,
        ArcDirection::Clockwise,
        &limits,
    );
    let left_loop = Arc::new(
        left_center,
        params.left_radius,
        TAU,
        0.0,
        ArcDirection::CounterClockwise,
        &limits,
    );

    let other_outer = [
        (left_center, params.left_radius + offset),
        (right_center, params.right_radius + offset),
    ];
    for (center_arc, angle_base, (other_center, other_outer_radius)) in [
        (&right_loop, PI, other_outer[0]),
        (&left_loop, 0.0, other_outer[1]),
    ] {
        let inner = center_arc.offset(-offset, &limits);
        let outer = center_arc.offset(offset, &limits);
        cones.extend(ring_cones(center_arc, &inner, angle_base, &spacing));
        cones.extend(
            ring_cones(center_arc, &outer, angle_base, &spacing)
                .into_iter()
                .filter(|cone| {
                    let p = cone.reference_position();
                    p.x.abs() >= offset && p.distance(other_center) >= other_outer_radius
                }),
        );
    }

    cones.extend(straight_cones(
        control_y - clearance,
        params.finish_straight_length,
        offset,
        options.max_cone_spacing,
    ));

    log::info!(
        "Skidpad erzeugt: {} Hütchen, Radien {:.0}/{:.0}",
        cones.len(),
        params.left_radius,
        params.right_radius
    );

    Some(SkidpadLayout {
        cones,
        loops: [right_loop, left_loop],
    })
}

/// Hütchen-Paare einer Geraden von `from_y` über `length` in −Y-Richtung.
fn straight_cones(from_y: f64, length: f64, offset: f64, max_spacing: f64) -> Vec<Cone> {
    let count = ConeSpacing::spaced_count(length, max_spacing).max(1);
    let step = length / count as f64;
    (1..=count)
        .flat_map(|i| {
            let y = from_y - step * i as f64;
            [
                Cone::new(Point::new(-offset, y), ConeColor::Blue, ConeSize::Small),
                Cone::new(Point::new(offset, y), ConeColor::Yellow, ConeSize::Small),
            ]
        })
        .collect()
}

/// Vollkreis-Hütchen mit halbem Winkelschritt Versatz zu `angle_base`.
fn ring_cones(center_arc: &Arc, ring: &Arc, angle_base: f64, spacing: &ConeSpacing) -> Vec<Cone> {
    if ring.radius <= 0.0 {
        return Vec::new();
    }
    let circumference = TAU * ring.radius;
    let count = ConeSpacing::spaced_count(circumference, spacing.for_length(circumference));
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f64;
    let color = boundary_color(center_arc, ring);
    (0..count)
        .map(|k| {
            let angle = angle_base + (k as f64 + 0.5) * step;
            Cone::new(
                point_on_circle(ring.center, ring.radius, angle),
                color,
                ConeSize::Small,
            )
        })
        .collect()
}
