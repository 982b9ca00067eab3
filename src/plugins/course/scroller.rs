//! World scroller.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::Course;
use crate::common::intents::RenderIntent;
use crate::common::playfield::PlayfieldPos;
use crate::common::tunables::Tunables;

/// Move every course entity left by one tick of travel, then retire entries
/// whose pipes are past the left threshold. Unconsumed triggers leave with
/// their pair and never score.
pub fn scroll_course(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut course: ResMut<Course>,
    mut q_pos: Query<&mut PlayfieldPos>,
    mut intents: MessageWriter<RenderIntent>,
) {
    let dx = tunables.scroll_per_tick();

    for entity in course.iter().flat_map(|entry| entry.entities()) {
        if let Ok(mut pos) = q_pos.get_mut(entity) {
            pos.0.x -= dx;
        }
    }

    let despawn_x = tunables.despawn_x;
    let retired = course.retire(|pipe| {
        q_pos
            .get(pipe)
            .map_or(true, |pos| pos.0.x < despawn_x)
    });

    for entity in retired.iter().flat_map(|entry| entry.entities()) {
        commands.entity(entity).try_despawn();
        intents.write(RenderIntent::Destroy { entity });
    }
}
