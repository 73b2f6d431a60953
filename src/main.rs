// ./src/main.rs
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;

pub mod board;
pub mod debug;
pub mod math;
pub mod setup; // Kamera und Gizmo-Linienbreite

use board::systems::*;
use board::{
    BoardError, BoardEvent, BoardParameters, FrameStore, PlaybackClock, TacticsBoard,
    TerritoryDiagram,
};
use debug::{
    ui::playback_control_ui_system,
    visualization::{LabelQueue, draw_board_system, sync_labels_system},
};
use setup::setup_scene;

fn main() -> Result<(), BoardError> {
    let params = BoardParameters::default();

    // Ohne gültigen Datensatz startet das Brett nicht
    let store = FrameStore::from_path(&params.data_path)?;
    let board = TacticsBoard::new(&store, params.hit_radii());

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Soccer Tactics Board".to_string(),
                        resolution: WindowResolution::new(params.pitch_width, params.pitch_height),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "wgpu=error,naga=warn,tactics_board=info".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(params.pitch_color))
        .insert_resource(PlaybackClock::from_params(&params))
        .insert_resource(params)
        .insert_resource(store)
        .insert_resource(board)
        .init_resource::<TerritoryDiagram>()
        .init_resource::<LabelQueue>()
        .init_resource::<PointerOverPanel>()
        .add_event::<BoardEvent>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                // Eingaben: Bedienfeld, dann Tastatur und Maus
                playback_control_ui_system,
                collect_input_system,
                // Zustandsübergänge in Eingangsreihenfolge
                apply_board_events_system,
                // Geometrie und Zeichnen
                rebuild_territory_system,
                draw_board_system,
                sync_labels_system,
                // Erst nach dem Zeichnen weiterschalten
                auto_advance_system,
            )
                .chain(),
        )
        .run();

    Ok(())
}
