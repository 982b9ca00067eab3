//! Core plugin: shared resources, the fixed tick and its ordering.
//!
//! One `FixedUpdate` run is one simulation tick. Within a tick the work is
//! split into ordered sets:
//!
//! ```text
//! Route    activation -> start / flap / restart        (every state)
//! Motion   flyer integration                           (Playing, running)
//! Scroll   obstacles move left, off-screen ones retire (Playing, running)
//! Collide  overlap tests -> Contact messages           (Playing, running)
//! Resolve  score / game over                           (Playing, running)
//! Spawn    periodic obstacle pair                      (Playing, running)
//! ```
//!
//! "running" is checked per set, so a game over raised in `Resolve` already
//! stops `Spawn` in the same tick.

use bevy::prelude::*;

use crate::common::intents::RenderIntent;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSystems {
    Route,
    Motion,
    Scroll,
    Collide,
    Resolve,
    Spawn,
}

/// Physics pause switch. Collisions pause, restarts resume.
#[derive(Resource, Debug, Default)]
pub struct Simulation {
    paused: bool,
}

impl Simulation {
    #[inline]
    pub fn pause(&mut self) {
        self.paused = true;
    }

    #[inline]
    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        !self.paused
    }
}

pub fn simulation_running(sim: Res<Simulation>) -> bool {
    sim.is_running()
}

pub fn plugin(app: &mut App) {
    let tunables = app
        .world()
        .get_resource::<Tunables>()
        .cloned()
        .unwrap_or_default();

    app.insert_resource(Time::<Fixed>::from_hz(tunables.tick_hz));
    app.insert_resource(tunables);
    app.insert_resource(ClearColor(Color::srgb(0.31, 0.75, 0.79)));
    app.init_resource::<Simulation>();
    app.add_message::<RenderIntent>();

    app.configure_sets(
        FixedUpdate,
        (
            TickSystems::Route,
            TickSystems::Motion,
            TickSystems::Scroll,
            TickSystems::Collide,
            TickSystems::Resolve,
            TickSystems::Spawn,
        )
            .chain(),
    );

    // Per set, not as one group: each condition is evaluated when its own set starts.
    for set in [
        TickSystems::Motion,
        TickSystems::Scroll,
        TickSystems::Collide,
        TickSystems::Resolve,
        TickSystems::Spawn,
    ] {
        app.configure_sets(
            FixedUpdate,
            set.run_if(in_state(GameState::Playing))
                .run_if(simulation_running),
        );
    }
}
