//! Camera plugin (render-only).
//!
//! The playfield never scrolls as a whole (obstacles do), so the camera is a
//! fixed 2D camera centred on the playfield for the whole app lifetime.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}
