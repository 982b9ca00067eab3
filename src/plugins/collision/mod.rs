//! Collision resolver.
//!
//! Two independent tests per tick, both plain AABB overlap at the current
//! positions (no sweeping):
//! - solid: flyer vs ground line, flyer vs every pipe. At most one `Contact`
//!   per tick; the first hit ends the round, the rest would be noise.
//! - trigger: flyer vs every live scoring trigger. One `Contact` per overlap.
//!
//! The resolver only reports. Consumers in `TickSystems::Resolve` decide
//! (score for triggers, game over for solids).

use bevy::ecs::message::MessageWriter;
use bevy::math::bounding::{Aabb2d, IntersectsVolume};
use bevy::prelude::*;

use crate::common::playfield::{Hitbox, PlayfieldPos};
use crate::common::tunables::Tunables;
use crate::plugins::core::TickSystems;
use crate::plugins::course::{Pipe, ScoringTrigger};
use crate::plugins::flyer::Flyer;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    Ground,
    Pipe(Entity),
    Trigger(Entity),
}

impl Contact {
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, Contact::Ground | Contact::Pipe(_))
    }
}

pub fn plugin(app: &mut App) {
    app.add_message::<Contact>()
        .add_systems(FixedUpdate, detect_contacts.in_set(TickSystems::Collide));
}

/// First solid contact for a flyer box, ground before pipes.
pub fn solid_contact(
    flyer: Aabb2d,
    flyer_y: f32,
    ground_y: f32,
    pipes: impl IntoIterator<Item = (Entity, Aabb2d)>,
) -> Option<Contact> {
    if flyer_y >= ground_y {
        return Some(Contact::Ground);
    }
    pipes
        .into_iter()
        .find(|(_, pipe)| flyer.intersects(pipe))
        .map(|(e, _)| Contact::Pipe(e))
}

/// Every trigger the flyer box overlaps.
pub fn trigger_contacts(
    flyer: Aabb2d,
    triggers: impl IntoIterator<Item = (Entity, Aabb2d)>,
) -> impl Iterator<Item = Contact> {
    triggers
        .into_iter()
        .filter(move |(_, region)| flyer.intersects(region))
        .map(|(e, _)| Contact::Trigger(e))
}

pub fn detect_contacts(
    tunables: Res<Tunables>,
    q_flyer: Query<(&PlayfieldPos, &Hitbox), With<Flyer>>,
    q_pipes: Query<(Entity, &PlayfieldPos, &Hitbox), With<Pipe>>,
    q_triggers: Query<(Entity, &PlayfieldPos, &Hitbox), With<ScoringTrigger>>,
    mut contacts: MessageWriter<Contact>,
) {
    let Ok((flyer_pos, flyer_box)) = q_flyer.single() else {
        return;
    };
    let flyer = flyer_box.at(flyer_pos.0);

    let pipes = q_pipes.iter().map(|(e, p, b)| (e, b.at(p.0)));
    if let Some(hit) = solid_contact(flyer, flyer_pos.0.y, tunables.ground_y, pipes) {
        contacts.write(hit);
    }

    let triggers = q_triggers.iter().map(|(e, p, b)| (e, b.at(p.0)));
    contacts.write_batch(trigger_contacts(flyer, triggers));
}
