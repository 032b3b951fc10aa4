//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Point, Track};
use crate::shared::TrackOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die aktuell bearbeitete Strecke
    pub track: Track,
    /// Laufzeit-Optionen (Geometrie, Hütchen-Abstände, Farben)
    pub options: TrackOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Letzte ungerastete Zeigerposition in Weltkoordinaten
    pub pointer_world: Option<Point>,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(TrackOptions::default())
    }

    /// Erstellt einen App-State mit vorgegebenen Optionen und leerer Strecke
    pub fn with_options(options: TrackOptions) -> Self {
        Self {
            track: Track::new(&options),
            options,
            command_log: CommandLog::new(),
            pointer_world: None,
        }
    }

    /// Gibt die Anzahl der übernommenen Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.track.committed_segments().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
