// ./src/debug/ui.rs
use crate::board::systems::PointerOverPanel;
use crate::board::{
    BoardEvent, BoardKey, BoardParameters, FrameSource, FrameStore, TacticsBoard, Team,
    TerritoryDiagram,
};
use crate::debug::visualization::export_board_svg;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{Slider, Window},
};

pub fn playback_control_ui_system(
    mut contexts: EguiContexts,
    board: Res<TacticsBoard>,
    store: Res<FrameStore>,
    territory: Res<TerritoryDiagram>,
    mut params: ResMut<BoardParameters>,
    mut events: EventWriter<BoardEvent>,
    mut over_panel: ResMut<PointerOverPanel>,
) {
    Window::new("Playback")
        .default_width(280.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Wiedergabe");
            ui.label(format!("Zeit: {} / {}", board.time(), store.max_time()));
            ui.label(format!(
                "{} Frames, {} Spieler",
                store.frame_count(),
                board.frame().player_count()
            ));

            ui.horizontal(|ui| {
                if ui.button("◀ Zurück").clicked() {
                    events.send(BoardEvent::Key(BoardKey::StepBackward));
                }
                let toggle = if board.is_playing() { "⏸ Pause" } else { "▶ Play" };
                if ui.button(toggle).clicked() {
                    events.send(BoardEvent::Key(BoardKey::TogglePause));
                }
                if ui.button("Vor ▶").clicked() {
                    events.send(BoardEvent::Key(BoardKey::StepForward));
                }
            });

            let mut slider_time = board.time();
            if ui
                .add(Slider::new(&mut slider_time, 0..=store.max_time()).text("Zeitleiste"))
                .changed()
            {
                events.send(BoardEvent::Seek(slider_time));
            }

            ui.separator();
            ui.label(format!("Gezogen: {}", board.drag_label()));
            ui.label(format!(
                "Regionen: {} ({} {} / {} {})",
                territory.regions.len(),
                Team::Team1.label(),
                territory.regions_of(Team::Team1).count(),
                Team::Team2.label(),
                territory.regions_of(Team::Team2).count()
            ));

            ui.collapsing("Darstellung", |ui| {
                // Kopien, damit `params` nur bei echten Änderungen als geändert gilt
                let mut show_territory = params.show_territory;
                let mut show_ridges = params.show_ridges;
                let mut clip = params.clip_cells_to_anchors;
                ui.checkbox(&mut show_territory, "Territorium schraffieren");
                ui.checkbox(&mut show_ridges, "Voronoi-Kanten");
                ui.checkbox(&mut clip, "Zellen auf Anker-Rechteck zuschneiden");

                if show_territory != params.show_territory {
                    params.show_territory = show_territory;
                }
                if show_ridges != params.show_ridges {
                    params.show_ridges = show_ridges;
                }
                if clip != params.clip_cells_to_anchors {
                    params.clip_cells_to_anchors = clip;
                }
            });

            ui.separator();
            if ui.button("Als SVG exportieren").clicked() {
                if let Err(e) = export_board_svg(
                    &params.export_dir,
                    board.time(),
                    board.frame(),
                    &territory,
                    &params,
                ) {
                    error!("{e}");
                }
            }

            ui.collapsing("Steuerung", |ui| {
                ui.label("Leertaste: Pause / Weiter");
                ui.label("Pfeil links / rechts: Schritt zurück / vor");
                ui.label("Linke Maustaste ziehen: Spieler oder Ball verschieben");
            });
        });

    over_panel.0 = contexts.ctx_mut().wants_pointer_input();
}
