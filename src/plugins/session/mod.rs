//! Session plugin: the game state machine.
//!
//! Owns transition authority. Everything a round creates is tagged
//! `SessionScoped`; a restart throws all of it away and the fresh `Idle`
//! builds a new flyer, so nothing carries over between rounds.
//!
//! ```text
//! OnEnter(Idle)       prepare_round  new flyer, score 0, intro banner, ground moving
//! Route (tick)        route_activation
//!                       Idle     -> Playing
//!                       Playing  -> Flap (ignored once paused)
//!                       GameOver -> Idle (restart)
//! OnEnter(Playing)    start_round    hide intro, first flap, score "0", first pair
//! Resolve (tick)      end_round_on_crash  pause, GameOver, terminal poses, banners
//! OnExit(GameOver)    discard_round  despawn round entities, clear course, hide banners
//! ```

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::intents::{Animation, Banner, RenderIntent, VisualHandle};
use crate::common::playfield::{PlayfieldPos, SessionScoped};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::collision::Contact;
use crate::plugins::core::{Simulation, TickSystems};
use crate::plugins::course::{self, Course, CourseRng, SpawnTimer};
use crate::plugins::flyer::{self, Flap, Flyer, FlyerBody};
use crate::plugins::input::Activation;
use crate::plugins::score::{self, Score, ScoreGlyph};

/// The ground strip. Lives across rounds.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ground;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Idle), prepare_round)
        .add_systems(OnEnter(GameState::Playing), start_round)
        .add_systems(OnExit(GameState::GameOver), discard_round)
        .add_systems(FixedUpdate, route_activation.in_set(TickSystems::Route))
        .add_systems(FixedUpdate, end_round_on_crash.in_set(TickSystems::Resolve));
}

fn spawn_ground(commands: &mut Commands, tunables: &Tunables) -> Entity {
    commands
        .spawn((
            Name::new("Ground"),
            Ground,
            PlayfieldPos(Vec2::new(tunables.playfield_width * 0.5, tunables.ground_y)),
        ))
        .id()
}

pub fn prepare_round(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut sim: ResMut<Simulation>,
    mut score: ResMut<Score>,
    mut timer: ResMut<SpawnTimer>,
    q_ground: Query<Entity, With<Ground>>,
    mut intents: MessageWriter<RenderIntent>,
) {
    sim.resume();
    *score = Score::default();
    *timer = SpawnTimer::default();

    let ground = match q_ground.single() {
        Ok(e) => e,
        Err(_) => {
            let e = spawn_ground(&mut commands, &tunables);
            let at = Vec2::new(tunables.playfield_width * 0.5, tunables.ground_y);
            intents.write(RenderIntent::Create { entity: e, visual: VisualHandle::GROUND, at });
            e
        }
    };

    let flyer = flyer::spawn_flyer(&mut commands, &tunables);
    intents.write_batch([
        RenderIntent::Create {
            entity: flyer,
            visual: VisualHandle::FLYER,
            at: tunables.flyer_spawn,
        },
        RenderIntent::Play { entity: flyer, animation: Animation::ClapWings },
        RenderIntent::Play { entity: ground, animation: Animation::MovingGround },
        RenderIntent::Show(Banner::Intro),
    ]);

    info!("ready: waiting for activation");
}

pub fn route_activation(
    state: Res<State<GameState>>,
    sim: Res<Simulation>,
    mut activation: ResMut<Activation>,
    mut next: ResMut<NextState<GameState>>,
    mut flaps: MessageWriter<Flap>,
) {
    if !activation.take() {
        return;
    }

    match state.get() {
        GameState::Idle => next.set(GameState::Playing),
        GameState::Playing if sim.is_running() => {
            flaps.write(Flap);
        }
        // Crashed this frame; the GameOver transition is still pending.
        GameState::Playing => {}
        GameState::GameOver => next.set(GameState::Idle),
    }
}

pub fn start_round(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut course: ResMut<Course>,
    mut rng: ResMut<CourseRng>,
    score: Res<Score>,
    mut q_flyer: Query<&mut FlyerBody, With<Flyer>>,
    q_glyphs: Query<Entity, With<ScoreGlyph>>,
    mut intents: MessageWriter<RenderIntent>,
) {
    intents.write(RenderIntent::Hide(Banner::Intro));

    if let Ok(mut body) = q_flyer.single_mut() {
        body.flap(&tunables);
    }

    score::redraw_scoreboard(&mut commands, &q_glyphs, score.0, &tunables, &mut intents);

    let offset = course::spawner::draw_offset(&mut rng.0, &tunables);
    course::spawner::spawn_pair(&mut commands, &mut course, offset, &tunables, &mut intents);

    info!("round started");
}

pub fn end_round_on_crash(
    mut contacts: MessageReader<Contact>,
    mut sim: ResMut<Simulation>,
    score: Res<Score>,
    mut next: ResMut<NextState<GameState>>,
    q_flyer: Query<Entity, With<Flyer>>,
    q_ground: Query<Entity, With<Ground>>,
    mut intents: MessageWriter<RenderIntent>,
) {
    // Drain every contact; only the first solid one matters.
    let first_solid = contacts
        .read()
        .copied()
        .filter(|c| c.is_solid())
        .reduce(|first, _| first);
    let Some(hit) = first_solid else {
        return;
    };
    if !sim.is_running() {
        return;
    }

    sim.pause();
    next.set(GameState::GameOver);

    if let Ok(flyer) = q_flyer.single() {
        intents.write(RenderIntent::Play { entity: flyer, animation: Animation::Stop });
    }
    if let Ok(ground) = q_ground.single() {
        intents.write(RenderIntent::Play { entity: ground, animation: Animation::StopGround });
    }
    intents.write_batch([
        RenderIntent::Show(Banner::GameOver),
        RenderIntent::Show(Banner::Restart),
    ]);

    info!("game over ({hit:?}), score {}", score.0);
}

pub fn discard_round(
    mut commands: Commands,
    mut course: ResMut<Course>,
    q_scoped: Query<Entity, With<SessionScoped>>,
    mut intents: MessageWriter<RenderIntent>,
) {
    course.clear();

    for entity in &q_scoped {
        commands.entity(entity).try_despawn();
        intents.write(RenderIntent::Destroy { entity });
    }

    intents.write_batch([
        RenderIntent::Hide(Banner::GameOver),
        RenderIntent::Hide(Banner::Restart),
    ]);

    info!("restart");
}
