//! Handler für Undo, Rauschen, Leeren und Skidpad-Vorlage.

use crate::app::intent_mapping::snap_to_finish;
use crate::app::AppState;
use crate::core::SkidpadParams;

/// Entfernt das letzte Segment und berechnet die Vorschau an der Zeigerposition neu.
pub fn undo(state: &mut AppState) {
    if state.track.undo().is_none() {
        log::debug!("Undo: nichts zu tun");
    }
    refresh_pending(state);
}

/// Schaltet das Rausch-Modell um.
pub fn toggle_noise(state: &mut AppState) {
    state.track.toggle_noise();
}

/// Verwirft alle Segmente, die Startaufstellung bleibt.
pub fn clear(state: &mut AppState) {
    state.track.clear();
    refresh_pending(state);
}

/// Ersetzt die Strecke durch eine Skidpad-Vorlage; ungültige Parameter werden ignoriert.
pub fn generate_skidpad(state: &mut AppState, params: SkidpadParams) {
    state.track.apply_skidpad(&params);
}

fn refresh_pending(state: &mut AppState) {
    if let Some(pos) = state.pointer_world {
        let point = snap_to_finish(state, pos);
        state.track.update_pending_segment(point);
    }
}
