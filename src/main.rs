use age_life::{
    camera::CamPlugin,
    life::LifePlugin,
    prelude::{CANVAS_SIZE_PX, WINDOW_TITLE},
    state::GameState,
};
use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    log::{Level, LogPlugin},
    prelude::*,
    window::WindowResolution,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: WINDOW_TITLE.into(),
                        resizable: false,
                        focused: true,
                        present_mode: bevy::window::PresentMode::AutoVsync,
                        mode: bevy::window::WindowMode::Windowed,
                        resolution: WindowResolution::new(CANVAS_SIZE_PX.x, CANVAS_SIZE_PX.y),
                        ..default()
                    }),
                    ..default()
                })
                // RUST_LOG overrides this, e.g. `RUST_LOG=age_life=debug` for per generation logs
                .set(LogPlugin {
                    level: Level::INFO,
                    filter: "wgpu=error,naga=warn".into(),
                    ..default()
                }),
        )
        .add_plugins((FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin::default()))
        .init_state::<GameState>()
        .add_plugins((CamPlugin, LifePlugin))
        .run();
}
