//! Flyer plugin: vertical motion of the player entity.
//!
//! Per tick, exactly one of three things happens to the velocity:
//! - boost window open: count it down, velocity untouched (no gravity)
//! - a `Flap` arrived: impulse up, nose up, open the boost window
//! - otherwise: fall (cruise speed floor + gravity), nose dives 1° per tick
//!
//! Position then integrates from velocity and is clamped to the world bounds.
//! The flyer x never changes; the world scrolls instead.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::playfield::{Hitbox, PlayfieldPos, SessionScoped};
use crate::common::tunables::Tunables;
use crate::plugins::core::TickSystems;

#[derive(Component, Debug, Clone, Copy)]
pub struct Flyer;

#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct FlyerBody {
    /// Units per second, negative is up.
    pub velocity: f32,
    /// Degrees, visual only. Clamped to `[flap_angle, max_angle]`.
    pub angle: f32,
    /// Ticks left during which gravity is suppressed.
    pub boost: u8,
}

impl FlyerBody {
    pub fn flap(&mut self, tunables: &Tunables) {
        self.velocity = tunables.flap_velocity;
        self.angle = tunables.flap_angle;
        self.boost = tunables.boost_ticks;
    }

    /// Advance the velocity/angle by one tick.
    pub fn step(&mut self, flapped: bool, tunables: &Tunables) {
        if self.boost > 0 {
            self.boost -= 1;
        } else if flapped {
            self.flap(tunables);
        } else {
            self.velocity =
                self.velocity.max(tunables.cruise_fall_speed) + tunables.gravity * tunables.tick_seconds();
            self.angle = (self.angle + tunables.angle_step).min(tunables.max_angle);
        }
    }
}

/// Flap request routed from an activation while playing.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct Flap;

pub fn plugin(app: &mut App) {
    app.add_message::<Flap>()
        .add_systems(FixedUpdate, integrate.in_set(TickSystems::Motion));
}

/// Spawn a fresh flyer at the spawn point: zero velocity, level, no boost.
pub fn spawn_flyer(commands: &mut Commands, tunables: &Tunables) -> Entity {
    commands
        .spawn((
            Name::new("Flyer"),
            Flyer,
            FlyerBody::default(),
            PlayfieldPos(tunables.flyer_spawn),
            Hitbox::from_size(tunables.flyer_size),
            SessionScoped,
        ))
        .id()
}

/// Keep the flyer between the top edge and the ground line.
/// Motion into a bound stops there.
pub fn clamp_to_bounds(pos: &mut PlayfieldPos, body: &mut FlyerBody, tunables: &Tunables) {
    if pos.0.y < 0.0 {
        pos.0.y = 0.0;
        body.velocity = body.velocity.max(0.0);
    } else if pos.0.y > tunables.ground_y {
        pos.0.y = tunables.ground_y;
        body.velocity = body.velocity.min(0.0);
    }
}

pub fn integrate(
    tunables: Res<Tunables>,
    mut flaps: MessageReader<Flap>,
    mut q_flyer: Query<(&mut FlyerBody, &mut PlayfieldPos), With<Flyer>>,
) {
    let flapped = flaps.read().count() > 0;

    let Ok((mut body, mut pos)) = q_flyer.single_mut() else {
        return;
    };

    body.step(flapped, &tunables);
    pos.0.y += body.velocity * tunables.tick_seconds();
    clamp_to_bounds(&mut pos, &mut body, &tunables);
}
