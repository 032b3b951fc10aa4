use crate::core::{Point, SkidpadParams};
use crate::shared::TrackOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Rohe Zeigerposition merken (Ziel-Hinweis)
    SetPointer { world_pos: Point },
    /// Vorschau-Segment zum (ggf. eingerasteten) Punkt neu berechnen
    UpdatePendingSegment { point: Point },
    /// Vorschau-Segment übernehmen
    CommitPendingSegment,
    /// Letztes Segment entfernen
    UndoSegment,
    /// Rausch-Modell umschalten
    ToggleNoise,
    /// Alle Segmente verwerfen
    ClearTrack,
    /// Strecke durch Skidpad-Vorlage ersetzen
    GenerateSkidpad { params: SkidpadParams },
    /// Optionen anwenden (startet eine neue Strecke)
    ApplyOptions { options: TrackOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
