//! Obstacle spawner.
//!
//! A pair is two pipes sharing one x and one random offset, exactly
//! `pipe_spacing` apart vertically, plus one trigger centred in the gap.
//! The pair spawns at `spawn_x` and only starts moving on the next tick
//! because spawning runs after scrolling.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::Rng;

use super::{Course, CourseEntry, CourseRng, Pipe, PipeEnd, ScoringTrigger, SpawnTimer};
use crate::common::intents::{RenderIntent, VisualHandle};
use crate::common::playfield::{Hitbox, PlayfieldPos, SessionScoped};
use crate::common::tunables::Tunables;

/// Vertical layout of one pair, in playfield units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairLayout {
    pub top_y: f32,
    pub bottom_y: f32,
    pub trigger_y: f32,
}

impl PairLayout {
    pub fn for_offset(offset: i32, tunables: &Tunables) -> Self {
        let top_y = tunables.gap_baseline + offset as f32;
        Self {
            top_y,
            bottom_y: top_y + tunables.pipe_spacing,
            trigger_y: top_y + tunables.gap_half_height,
        }
    }
}

/// Draw an offset from the closed configured range.
pub fn draw_offset(rng: &mut impl Rng, tunables: &Tunables) -> i32 {
    let (lo, hi) = tunables.gap_offset_range;
    rng.gen_range(lo..=hi)
}

/// Spawn one obstacle pair and its trigger, record it in the course and announce the pipes.
pub fn spawn_pair(
    commands: &mut Commands,
    course: &mut Course,
    offset: i32,
    tunables: &Tunables,
    intents: &mut MessageWriter<RenderIntent>,
) -> CourseEntry {
    let layout = PairLayout::for_offset(offset, tunables);
    let x = tunables.spawn_x;

    let mut spawn_pipe = |end: PipeEnd, y: f32, visual: VisualHandle| {
        let at = Vec2::new(x, y);
        let e = commands
            .spawn((
                Name::new(format!("Pipe{end:?}")),
                Pipe { end },
                PlayfieldPos(at),
                Hitbox::from_size(tunables.pipe_size),
                SessionScoped,
            ))
            .id();
        intents.write(RenderIntent::Create { entity: e, visual, at });
        e
    };

    let top = spawn_pipe(PipeEnd::Top, layout.top_y, VisualHandle::PIPE_TOP);
    let bottom = spawn_pipe(PipeEnd::Bottom, layout.bottom_y, VisualHandle::PIPE_BOTTOM);

    let trigger = commands
        .spawn((
            Name::new("ScoringTrigger"),
            ScoringTrigger,
            PlayfieldPos(Vec2::new(x, layout.trigger_y)),
            Hitbox::from_size(Vec2::new(tunables.trigger_width, tunables.gap_height)),
            SessionScoped,
        ))
        .id();

    let entry = CourseEntry {
        pipes: [top, bottom],
        trigger: Some(trigger),
        offset,
    };
    course.push(entry);
    debug!("spawned obstacle pair at offset {offset}");
    entry
}

pub fn tick_spawner(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut timer: ResMut<SpawnTimer>,
    mut rng: ResMut<CourseRng>,
    mut course: ResMut<Course>,
    mut intents: MessageWriter<RenderIntent>,
) {
    timer.ticks += 1;
    if timer.ticks < tunables.spawn_interval_ticks {
        return;
    }
    timer.ticks = 0;

    let offset = draw_offset(&mut rng.0, &tunables);
    spawn_pair(&mut commands, &mut course, offset, &tunables, &mut intents);
}
