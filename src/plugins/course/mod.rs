//! Course plugin: obstacle pairs, their scoring triggers, spawning and scrolling.
//!
//! # Ownership
//! `Course` is the single ordered record of live obstacle entries, oldest first.
//! Only the spawner pushes, only the scroller retires, only score resolution
//! consumes triggers, and only a restart clears it. Entities are never looked up
//! by scanning for "all pipes"; the entry names them.
//!
//! ```text
//! Spawn:   SpawnTimer hits interval -> push CourseEntry { pipes, trigger }
//! Scroll:  every entity in every entry moves left; entries past despawn_x retire
//! Resolve: Contact::Trigger(e) -> Course::consume_trigger(e) (true at most once)
//! ```

pub mod scroller;
pub mod spawner;

use std::collections::VecDeque;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::plugins::core::TickSystems;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipeEnd {
    Top,
    Bottom,
}

/// One rigid rectangle of an obstacle pair.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    pub end: PipeEnd,
}

/// Invisible region inside a gap. Never blocks, only scores.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ScoringTrigger;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourseEntry {
    /// `[top, bottom]`.
    pub pipes: [Entity; 2],
    /// `None` once the flyer has passed through.
    pub trigger: Option<Entity>,
    /// Gap deviation from the baseline this pair was spawned with.
    pub offset: i32,
}

impl CourseEntry {
    /// Every live entity of the entry: both pipes, then the trigger if unconsumed.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.pipes.iter().copied().chain(self.trigger)
    }
}

#[derive(Resource, Debug, Default)]
pub struct Course {
    entries: VecDeque<CourseEntry>,
}

impl Course {
    #[inline]
    pub fn push(&mut self, entry: CourseEntry) {
        self.entries.push_back(entry);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseEntry> {
        self.entries.iter()
    }

    /// Mark a trigger as used. Returns `true` only the first time for a given trigger.
    pub fn consume_trigger(&mut self, trigger: Entity) -> bool {
        self.entries
            .iter_mut()
            .find(|entry| entry.trigger == Some(trigger))
            .and_then(|entry| entry.trigger.take())
            .is_some()
    }

    /// Remove and return every entry whose top pipe satisfies `gone`.
    pub fn retire(&mut self, mut gone: impl FnMut(Entity) -> bool) -> Vec<CourseEntry> {
        let mut retired = Vec::new();
        self.entries.retain(|entry| {
            if gone(entry.pipes[0]) {
                retired.push(*entry);
                false
            } else {
                true
            }
        });
        retired
    }

    /// Drop every entry, returning them so the caller can despawn the entities.
    pub fn clear(&mut self) -> Vec<CourseEntry> {
        self.entries.drain(..).collect()
    }
}

/// Ticks since the last spawn.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimer {
    pub ticks: u32,
}

/// Source of gap offsets.
#[derive(Resource, Debug)]
pub struct CourseRng(pub StdRng);

impl Default for CourseRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Course>()
        .init_resource::<SpawnTimer>()
        .init_resource::<CourseRng>()
        .add_systems(FixedUpdate, scroller::scroll_course.in_set(TickSystems::Scroll))
        .add_systems(FixedUpdate, spawner::tick_spawner.in_set(TickSystems::Spawn));
}

#[cfg(test)]
mod tests;
