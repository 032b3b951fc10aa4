//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod input;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Strecke, Optionen, Zeiger).
pub mod state;

pub use command_log::{CommandLog, CommandTally};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use input::{FrameInput, PointerAction};
pub use intent_mapping::snap_to_finish;
pub use render_scene::build as build_render_scene;
pub use state::AppState;
