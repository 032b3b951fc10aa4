//! Strecke als Folge übernommener Segmente plus ein neu berechenbares Vorschau-Segment.

use super::arc::Arc;
use super::cone::{Cone, ConeColor, ConeSize};
use super::geometry::{Line, Point};
use super::path_segment::PathSegment;
use super::skidpad::{self, SkidpadLayout, SkidpadParams};
use super::TrackError;
use crate::shared::TrackOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Startpunkt des ersten Segments (obere Kante der Startaufstellung).
pub const START_POINT: Point = Point::new(0.0, -100.0);
/// Zielpunkt, an dem die Strecke geschlossen wird.
pub const END_POINT: Point = Point::new(0.0, 100.0);
/// Eingangs-Tangente des ersten Segments (Fahrt in −Y-Richtung).
pub const INITIAL_TANGENT: Line = Line::VERTICAL;

/// Bearbeitungszustand einer Strecke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingState {
    /// Segmente können gesetzt werden
    #[default]
    Drawing,
    /// Rundkurs geschlossen oder Vorlage geladen
    Closed,
}

/// Eine Strecke mit fester Startaufstellung und Commit/Undo-Verlauf.
///
/// Einziger Besitzer der übernommenen Segmente; nur `commit`, `undo`, `clear`
/// und `apply_skidpad` verändern sie.
#[derive(Debug, Clone)]
pub struct Track {
    options: TrackOptions,
    opening_cones: Vec<Cone>,
    committed: Vec<PathSegment>,
    pending: Option<PathSegment>,
    state: DrawingState,
    noise_enabled: bool,
    template: Option<SkidpadLayout>,
    rng: StdRng,
}

impl Track {
    /// Erstellt eine leere Strecke mit Startaufstellung.
    pub fn new(options: &TrackOptions) -> Self {
        let rng = match options.noise_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            options: options.clone(),
            opening_cones: opening_cluster(options.boundary_offset),
            committed: Vec::new(),
            pending: None,
            state: DrawingState::Drawing,
            noise_enabled: false,
            template: None,
            rng,
        }
    }

    pub fn start_point(&self) -> Point {
        START_POINT
    }

    pub fn end_point(&self) -> Point {
        END_POINT
    }

    pub fn initial_tangent(&self) -> Line {
        INITIAL_TANGENT
    }

    pub fn options(&self) -> &TrackOptions {
        &self.options
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == DrawingState::Closed
    }

    pub fn noise_enabled(&self) -> bool {
        self.noise_enabled
    }

    /// Feste Startaufstellung (nie verrauscht, nie entfernbar).
    pub fn opening_cones(&self) -> &[Cone] {
        &self.opening_cones
    }

    pub fn committed_segments(&self) -> &[PathSegment] {
        &self.committed
    }

    pub fn pending_segment(&self) -> Option<&PathSegment> {
        self.pending.as_ref()
    }

    /// Hütchen der geladenen Skidpad-Vorlage (leer ohne Vorlage).
    pub fn template_cones(&self) -> &[Cone] {
        self.template
            .as_ref()
            .map(|layout| layout.cones.as_slice())
            .unwrap_or(&[])
    }

    /// Mittellinien-Schleifen der Skidpad-Vorlage (leer ohne Vorlage).
    pub fn template_arcs(&self) -> &[Arc] {
        self.template
            .as_ref()
            .map(|layout| layout.loops.as_slice())
            .unwrap_or(&[])
    }

    /// Startpunkt und Tangente für das nächste Segment.
    pub fn chain_anchor(&self) -> (Point, Line) {
        match self.committed.last() {
            Some(last) => (last.end_point, last.continuation_tangent),
            None => (START_POINT, INITIAL_TANGENT),
        }
    }

    /// Berechnet das Vorschau-Segment zum Zeigerpunkt `point` neu.
    ///
    /// Das Segment schließt die Strecke, wenn `point` exakt dem Zielpunkt
    /// entspricht. Existiert kein Bogen (Punkt auf der Tangente), gibt es keine
    /// Vorschau.
    pub fn update_pending_segment(&mut self, point: Point) {
        if self.is_closed() {
            self.pending = None;
            return;
        }
        let (start, tangent) = self.chain_anchor();
        let finishing = point == END_POINT;
        self.pending = match PathSegment::build(start, point, &tangent, finishing, &self.options) {
            Ok(segment) => Some(segment),
            Err(e) => {
                log::debug!(
                    "Kein Vorschau-Segment für ({:.1}, {:.1}): {}",
                    point.x,
                    point.y,
                    e
                );
                None
            }
        };
    }

    /// Übernimmt das Vorschau-Segment in die Strecke.
    ///
    /// Ungültige Bögen werden übernommen und nur markiert. Ein Zielsegment
    /// schließt die Strecke.
    pub fn commit(&mut self) -> Result<(), TrackError> {
        if self.is_closed() {
            return Err(TrackError::TrackClosed);
        }
        let mut segment = self.pending.take().ok_or(TrackError::NoPendingSegment)?;
        if self.noise_enabled {
            segment.apply_noise(&mut self.rng, self.options.noise_magnitude);
        }
        let finishing = segment.finishing;
        self.committed.push(segment);
        if finishing {
            self.state = DrawingState::Closed;
        }
        log::info!(
            "Segment {} übernommen{}",
            self.committed.len(),
            if finishing { ", Strecke geschlossen" } else { "" }
        );
        Ok(())
    }

    /// Entfernt das zuletzt übernommene Segment.
    ///
    /// Ohne übernommene Segmente wird stattdessen eine geladene Skidpad-Vorlage
    /// verworfen. Eine geschlossene Strecke wird wieder bearbeitbar.
    pub fn undo(&mut self) -> Option<PathSegment> {
        let removed = self.committed.pop();
        if removed.is_none() && self.template.take().is_some() {
            log::info!("Skidpad-Vorlage verworfen");
        }
        self.pending = None;
        if self.is_closed() {
            self.state = DrawingState::Drawing;
        }
        if removed.is_some() {
            log::info!("Undo: {} Segmente verbleiben", self.committed.len());
        }
        removed
    }

    /// Schaltet das Rausch-Modell für alle übernommenen Hütchen um.
    pub fn toggle_noise(&mut self) {
        self.noise_enabled = !self.noise_enabled;
        let magnitude = self.options.noise_magnitude;
        let template_cones = self
            .template
            .iter_mut()
            .flat_map(|layout| layout.cones.iter_mut());
        let cones = self
            .committed
            .iter_mut()
            .flat_map(|segment| segment.cones.iter_mut())
            .chain(template_cones);

        for cone in cones {
            if self.noise_enabled {
                cone.apply_noise(&mut self.rng, magnitude);
            } else {
                cone.remove_noise();
            }
        }
        log::info!(
            "Rauschen {}",
            if self.noise_enabled { "aktiviert" } else { "deaktiviert" }
        );
    }

    /// Verwirft alle Segmente und eine evtl. Vorlage; die Startaufstellung bleibt.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.pending = None;
        self.template = None;
        self.state = DrawingState::Drawing;
        log::info!("Strecke geleert");
    }

    /// Ersetzt die Strecke durch eine Skidpad-Vorlage.
    ///
    /// Ungültige Parameter lassen die Strecke unverändert (`false`).
    pub fn apply_skidpad(&mut self, params: &SkidpadParams) -> bool {
        let Some(mut layout) = skidpad::generate(params, &self.options, START_POINT.y) else {
            log::debug!("Skidpad-Anfrage ignoriert: {:?}", params);
            return false;
        };
        if self.noise_enabled {
            for cone in &mut layout.cones {
                cone.apply_noise(&mut self.rng, self.options.noise_magnitude);
            }
        }
        self.committed.clear();
        self.pending = None;
        self.template = Some(layout);
        self.state = DrawingState::Closed;
        true
    }
}

/// Je zwei blaue und gelbe Hütchen an den Startlinien-Enden, vier große orange dazwischen.
fn opening_cluster(offset: f64) -> Vec<Cone> {
    let mut cones = Vec::with_capacity(8);
    for y in [START_POINT.y, END_POINT.y] {
        cones.push(Cone::new(Point::new(-offset, y), ConeColor::Blue, ConeSize::Small));
    }
    for y in [START_POINT.y, END_POINT.y] {
        cones.push(Cone::new(Point::new(offset, y), ConeColor::Yellow, ConeSize::Small));
    }
    for x in [-offset, offset] {
        for y in [-30.0, 30.0] {
            cones.push(Cone::new(Point::new(x, y), ConeColor::Orange, ConeSize::Large));
        }
    }
    cones
}
