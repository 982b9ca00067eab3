//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `flappy_bevy::game::configure_headless` to install gameplay plugins.
//!
//! Virtual time is paused so `app.update()` never runs a fixed step by itself.
//! Ticks are driven explicitly with `tick`; `app.update()` only applies state
//! transitions (OnEnter / OnExit).

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use rand::SeedableRng;
use rand::rngs::StdRng;

use flappy_bevy::common::playfield::PlayfieldPos;
use flappy_bevy::common::state::GameState;
use flappy_bevy::plugins::course::CourseRng;
use flappy_bevy::plugins::flyer::{Flyer, FlyerBody};
use flappy_bevy::plugins::input::Activation;

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));

    flappy_bevy::game::configure_headless(&mut app);

    app.insert_resource(CourseRng(StdRng::seed_from_u64(2024)));
    app.world_mut().resource_mut::<Time<Virtual>>().pause();

    // Enter the initial Idle state.
    app.update();
    app
}

/// One simulation tick.
pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

pub fn activate(app: &mut App) {
    app.world_mut().resource_mut::<Activation>().trigger();
}

/// Activation, one tick to route it, one frame to apply the transition.
pub fn activate_and_settle(app: &mut App) {
    activate(app);
    tick(app);
    app.update();
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn flyer(app: &mut App) -> (Entity, Vec2, FlyerBody) {
    let mut q = app
        .world_mut()
        .query_filtered::<(Entity, &PlayfieldPos, &FlyerBody), With<Flyer>>();
    let (e, pos, body) = q.single(app.world()).expect("exactly one flyer");
    (e, pos.0, *body)
}

pub fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let mut q = app.world_mut().query_filtered::<(), F>();
    q.iter(app.world()).count()
}
