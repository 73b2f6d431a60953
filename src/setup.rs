// ./src/setup.rs
use crate::board::BoardParameters;
use bevy::prelude::*;

pub fn setup_scene(
    mut commands: Commands,
    mut gizmo_configs: ResMut<GizmoConfigStore>,
    params: Res<BoardParameters>,
) {
    // Kamera im Fenstermittelpunkt, eine Welteinheit entspricht einem Brett-Pixel
    commands.spawn(Camera2dBundle::default());

    let (config, _) = gizmo_configs.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = params.line_width;

    info!(
        "Board {}x{} ready, stripe pitch {} px.",
        params.pitch_width, params.pitch_height, params.stripe_pitch
    );
}
