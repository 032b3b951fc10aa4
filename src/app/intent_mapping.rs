//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::Point;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { world_pos } => {
            let mut commands = vec![AppCommand::SetPointer { world_pos }];
            if !state.track.is_closed() {
                commands.push(AppCommand::UpdatePendingSegment {
                    point: snap_to_finish(state, world_pos),
                });
            }
            commands
        }
        AppIntent::PointerClicked { world_pos } => {
            if state.track.is_closed() {
                return vec![AppCommand::SetPointer { world_pos }];
            }
            vec![
                AppCommand::SetPointer { world_pos },
                AppCommand::UpdatePendingSegment {
                    point: snap_to_finish(state, world_pos),
                },
                AppCommand::CommitPendingSegment,
            ]
        }
        // Pan/Zoom liegen beim Host, die Strecke bleibt unverändert
        AppIntent::PointerHeld { .. } => Vec::new(),
        AppIntent::UndoRequested => vec![AppCommand::UndoSegment],
        AppIntent::NoiseToggleRequested => vec![AppCommand::ToggleNoise],
        AppIntent::ClearRequested => vec![AppCommand::ClearTrack],
        AppIntent::SkidpadRequested { params } => vec![AppCommand::GenerateSkidpad { params }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Rastet `world_pos` exakt auf den Zielpunkt ein, wenn er im Einrast-Radius liegt.
pub fn snap_to_finish(state: &AppState, world_pos: Point) -> Point {
    let end = state.track.end_point();
    if world_pos.distance(end) < state.options.finish_snap_radius {
        end
    } else {
        world_pos
    }
}
