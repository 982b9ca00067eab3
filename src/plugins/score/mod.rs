//! Score tracker and scoreboard.
//!
//! `Score` changes in exactly two places: +1 when a trigger contact consumes a
//! live trigger, and back to zero when a round is prepared. The scoreboard is a
//! row of digit glyph entities rebuilt from scratch on every change.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::intents::{RenderIntent, VisualHandle};
use crate::common::playfield::{PlayfieldPos, SessionScoped};
use crate::common::tunables::Tunables;
use crate::plugins::collision::Contact;
use crate::plugins::core::TickSystems;
use crate::plugins::course::Course;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);

/// One digit of the on-screen score.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreGlyph {
    pub digit: u8,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Score>()
        .add_systems(FixedUpdate, score_trigger_contacts.in_set(TickSystems::Resolve));
}

/// Digits of `score` with the x of each glyph centre, centred as a group on `center_x`.
pub fn digit_layout(score: u32, center_x: f32, glyph_width: f32) -> Vec<(u8, f32)> {
    let digits: Vec<u8> = score.to_string().bytes().map(|b| b - b'0').collect();
    let start = center_x - (digits.len() as f32 - 1.0) * glyph_width * 0.5;

    digits
        .into_iter()
        .enumerate()
        .map(|(i, d)| (d, start + i as f32 * glyph_width))
        .collect()
}

/// Replace whatever glyphs are shown with the glyphs for `score`.
pub fn redraw_scoreboard(
    commands: &mut Commands,
    shown: impl IntoIterator<Item = Entity>,
    score: u32,
    tunables: &Tunables,
    intents: &mut MessageWriter<RenderIntent>,
) {
    clear_scoreboard(commands, shown, intents);

    for (digit, x) in digit_layout(score, tunables.score_center_x, tunables.glyph_width) {
        let at = Vec2::new(x, tunables.score_y);
        let entity = commands
            .spawn((
                Name::new(format!("ScoreGlyph{digit}")),
                ScoreGlyph { digit },
                PlayfieldPos(at),
                SessionScoped,
            ))
            .id();
        intents.write(RenderIntent::Create {
            entity,
            visual: VisualHandle::digit(digit),
            at,
        });
    }
}

pub fn clear_scoreboard(
    commands: &mut Commands,
    shown: impl IntoIterator<Item = Entity>,
    intents: &mut MessageWriter<RenderIntent>,
) {
    for entity in shown {
        commands.entity(entity).try_despawn();
        intents.write(RenderIntent::Destroy { entity });
    }
}

/// Each live trigger the flyer touched scores one point and is gone for good.
pub fn score_trigger_contacts(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut contacts: MessageReader<Contact>,
    mut course: ResMut<Course>,
    mut score: ResMut<Score>,
    q_glyphs: Query<Entity, With<ScoreGlyph>>,
    mut intents: MessageWriter<RenderIntent>,
) {
    let before = score.0;

    for contact in contacts.read() {
        let Contact::Trigger(trigger) = *contact else {
            continue;
        };
        if !course.consume_trigger(trigger) {
            continue;
        }
        commands.entity(trigger).try_despawn();
        intents.write(RenderIntent::Destroy { entity: trigger });
        score.0 += 1;
    }

    if score.0 != before {
        debug!("score {}", score.0);
        redraw_scoreboard(&mut commands, &q_glyphs, score.0, &tunables, &mut intents);
    }
}
