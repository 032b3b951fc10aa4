//! Track Drawer.
//!
//! Kopfloser Treiber: spielt eine geschlossene Beispiel-Strecke und eine
//! Skidpad-Anfrage über den AppController ab und loggt die entstehende Szene.

use track_drawer::{
    AppController, AppState, FrameInput, Point, PointerAction, RenderScene, SkidpadParams,
    TrackOptions,
};

/// Klickpunkte eines rechtsherum geschlossenen Rundkurses.
const SESSION_CLICKS: [Point; 4] = [
    Point::new(800.0, -900.0),
    Point::new(1600.0, -100.0),
    Point::new(800.0, 700.0),
    // Innerhalb des Einrast-Radius um den Zielpunkt
    Point::new(12.0, 110.0),
];

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Track Drawer v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = TrackOptions::config_path();
    let options = TrackOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    for click in SESSION_CLICKS {
        // Vorschau wie bei einer Mausbewegung, danach der Klick
        run_frame(&mut controller, &mut state, FrameInput {
            pointer_world: Some(click),
            ..FrameInput::default()
        })?;
        run_frame(&mut controller, &mut state, FrameInput {
            pointer_world: Some(click),
            pointer_action: PointerAction::Clicked,
            ..FrameInput::default()
        })?;
    }
    run_frame(&mut controller, &mut state, FrameInput {
        noise_toggle_requested: true,
        ..FrameInput::default()
    })?;
    log_scene("Rundkurs", &controller.build_render_scene(&state));

    run_frame(&mut controller, &mut state, FrameInput {
        skidpad_request: Some(SkidpadParams {
            left_radius: 900.0,
            right_radius: 900.0,
            start_straight_length: 1500.0,
            finish_straight_length: 1500.0,
        }),
        ..FrameInput::default()
    })?;
    log_scene("Skidpad", &controller.build_render_scene(&state));

    let tally = state.command_log.tally();
    log::info!(
        "{} Commands ausgeführt: {} Übernahmen, {} Rückgängig, {} Skidpads, {} Segmente aktuell",
        state.command_log.total(),
        tally.commits,
        tally.undos,
        tally.skidpads,
        state.segment_count()
    );
    Ok(())
}

fn run_frame(
    controller: &mut AppController,
    state: &mut AppState,
    input: FrameInput,
) -> anyhow::Result<()> {
    for intent in input.into_intents() {
        controller.handle_intent(state, intent)?;
    }
    Ok(())
}

fn log_scene(label: &str, scene: &RenderScene) {
    let invalid = scene.committed.iter().filter(|s| !s.valid).count();
    log::info!(
        "{}: {:?}, {} Segmente ({} ungültig), {} Hütchen, {} Vorlagen-Schleifen",
        label,
        scene.drawing_state,
        scene.committed.len(),
        invalid,
        scene.cone_count(),
        scene.template_arcs.len()
    );
}
