//! Eingabe-Datensatz pro Tick: Zeiger, Aktionen und Anfragen → AppIntent.

use super::AppIntent;
use crate::core::{Point, SkidpadParams};

/// Zeiger-Aktion im aktuellen Tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerAction {
    #[default]
    None,
    /// Taste gehalten (Verschieben der Ansicht)
    Held,
    /// Klick (Segment setzen)
    Clicked,
}

/// Vom UI gelieferte Eingaben eines Ticks.
///
/// Die booleschen Felder sind flankengetriggert: `true` nur im Tick der Anfrage.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Zeigerposition in Weltkoordinaten (ohne Pan/Zoom)
    pub pointer_world: Option<Point>,
    pub pointer_action: PointerAction,
    pub undo_requested: bool,
    pub noise_toggle_requested: bool,
    pub clear_requested: bool,
    pub skidpad_request: Option<SkidpadParams>,
}

impl FrameInput {
    /// Übersetzt die Eingaben in Intents.
    ///
    /// Reihenfolge: Anfragen (Leeren, Undo, Skidpad, Rauschen) vor Zeiger-Events,
    /// damit ein Klick im selben Tick bereits den neuen Zustand sieht.
    pub fn into_intents(self) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        if self.clear_requested {
            intents.push(AppIntent::ClearRequested);
        }
        if self.undo_requested {
            intents.push(AppIntent::UndoRequested);
        }
        if let Some(params) = self.skidpad_request {
            intents.push(AppIntent::SkidpadRequested { params });
        }
        if self.noise_toggle_requested {
            intents.push(AppIntent::NoiseToggleRequested);
        }
        if let Some(world_pos) = self.pointer_world {
            intents.push(match self.pointer_action {
                PointerAction::None => AppIntent::PointerMoved { world_pos },
                PointerAction::Held => AppIntent::PointerHeld { world_pos },
                PointerAction::Clicked => AppIntent::PointerClicked { world_pos },
            });
        }
        intents
    }
}
