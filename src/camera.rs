use bevy::{prelude::*, render::camera::ScalingMode};
use bevy_pancam::{PanCam, PanCamPlugin};

use crate::{
    prelude::{BG_COLOR, CANVAS_SIZE_PX},
    state::GameState,
};

pub struct CamPlugin;

impl Plugin for CamPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanCamPlugin)
            .insert_resource(ClearColor(BG_COLOR))
            .add_systems(OnEnter(GameState::Load), spawn_cam);
    }
}

// Init
fn spawn_cam(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        // drag with the middle mouse button, zoom with the wheel
        PanCam {
            grab_buttons: vec![MouseButton::Middle],
            ..default()
        },
        board_projection(CANVAS_SIZE_PX),
        Msaa::Off,
    ));
}

/// Keeps the whole board in view whatever the window size, letterboxing the longer axis.
fn board_projection(board_px: Vec2) -> OrthographicProjection {
    OrthographicProjection {
        scaling_mode: ScalingMode::AutoMin {
            min_width: board_px.x,
            min_height: board_px.y,
        },
        near: -1000.0,
        far: 1000.0,
        ..OrthographicProjection::default_2d()
    }
}
