use crate::core::{Point, SkidpadParams};
use crate::shared::TrackOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger bewegt (Weltkoordinaten, bereits ohne Pan/Zoom)
    PointerMoved { world_pos: Point },
    /// Zeiger geklickt (Segment setzen)
    PointerClicked { world_pos: Point },
    /// Zeiger gehalten (Verschieben der Ansicht, keine Streckenänderung)
    PointerHeld { world_pos: Point },
    /// Letztes Segment rückgängig machen
    UndoRequested,
    /// Rausch-Modell umschalten
    NoiseToggleRequested,
    /// Strecke leeren
    ClearRequested,
    /// Skidpad-Vorlage anfordern
    SkidpadRequested { params: SkidpadParams },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: TrackOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
