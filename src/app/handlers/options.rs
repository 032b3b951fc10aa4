//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::core::Track;
use crate::shared::TrackOptions;

/// Übernimmt neue Optionen und beginnt eine neue Strecke mit ihnen.
///
/// Ungültige Optionen werden verworfen; Strecke und Optionen bleiben unverändert.
pub fn apply(state: &mut AppState, options: TrackOptions) {
    if let Err(e) = options.validate() {
        log::warn!("Optionen verworfen: {}", e);
        return;
    }
    state.track = Track::new(&options);
    state.options = options;
    log::info!("Optionen angewendet, neue Strecke begonnen");
}

/// Setzt die Optionen auf Standardwerte zurück.
pub fn reset(state: &mut AppState) {
    apply(state, TrackOptions::default());
}
