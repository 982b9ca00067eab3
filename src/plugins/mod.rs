//! Feature plugins.

use bevy::prelude::*;

pub mod collision;
pub mod core;
pub mod course;
pub mod flyer;
pub mod input;
pub mod score;
pub mod session;

// Render-only
pub mod camera;
pub mod renderer;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    input::plugin(app);
    flyer::plugin(app);
    course::plugin(app);
    collision::plugin(app);
    score::plugin(app);
    session::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    renderer::plugin(app);
}
