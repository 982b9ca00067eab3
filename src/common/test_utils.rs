//! Test helpers.
//!
//! Bevy provides `World::run_system_once` (via the `RunSystemOnce` trait) for quickly
//! executing a system in tests/diagnostics without building a full schedule.
//!
//! Systems that use `Commands` enqueue structural changes; applying them is normally handled by
//! `ApplyDeferred` / schedule boundaries. We call `world.flush()` after running so queued commands
//! are applied before assertions.

use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::intents::RenderIntent;
use crate::common::tunables::Tunables;
use crate::plugins::collision::Contact;
use crate::plugins::flyer::Flap;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Bare world with default tunables and every gameplay message buffer.
pub fn sim_world() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<RenderIntent>>();
    world.init_resource::<Messages<Contact>>();
    world.init_resource::<Messages<Flap>>();
    world
}

/// Drain all render intents written so far.
pub fn drain_intents(world: &mut World) -> Vec<RenderIntent> {
    world.resource_mut::<Messages<RenderIntent>>().drain().collect()
}
