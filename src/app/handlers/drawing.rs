//! Handler für Zeiger, Vorschau-Segment und Commit.

use crate::app::AppState;
use crate::core::{Point, TrackError};

/// Merkt die ungerastete Zeigerposition.
pub fn set_pointer(state: &mut AppState, world_pos: Point) {
    state.pointer_world = Some(world_pos);
}

/// Berechnet das Vorschau-Segment neu.
pub fn update_pending(state: &mut AppState, point: Point) {
    state.track.update_pending_segment(point);
}

/// Übernimmt das Vorschau-Segment.
///
/// Abgelehnte Commits (Strecke geschlossen, keine Vorschau) werden nur geloggt.
pub fn commit(state: &mut AppState) {
    match state.track.commit() {
        Ok(()) => {}
        Err(TrackError::TrackClosed) => {
            log::warn!("Commit abgelehnt: Strecke ist geschlossen");
        }
        Err(TrackError::NoPendingSegment) => {
            log::warn!("Commit abgelehnt: kein Vorschau-Segment");
        }
    }
}
