use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::spawner::{draw_offset, spawn_pair, tick_spawner, PairLayout};
use super::scroller::scroll_course;
use super::{Course, CourseEntry, CourseRng, Pipe, PipeEnd, ScoringTrigger, SpawnTimer};
use crate::common::intents::{RenderIntent, VisualHandle};
use crate::common::playfield::PlayfieldPos;
use crate::common::test_utils::{drain_intents, run_system_once, sim_world};
use crate::common::tunables::Tunables;

fn course_world() -> World {
    let mut world = sim_world();
    world.init_resource::<Course>();
    world.init_resource::<SpawnTimer>();
    world.insert_resource(CourseRng(StdRng::seed_from_u64(42)));
    world
}

fn spawn_at_offset(world: &mut World, offset: i32) -> CourseEntry {
    let tunables = world.resource::<Tunables>().clone();
    run_system_once(
        world,
        move |mut commands: Commands,
              mut course: ResMut<Course>,
              mut intents: MessageWriter<RenderIntent>| {
            spawn_pair(&mut commands, &mut course, offset, &tunables, &mut intents);
        },
    );
    *world.resource::<Course>().iter().last().expect("entry pushed")
}

fn pos(world: &World, e: Entity) -> Vec2 {
    world.get::<PlayfieldPos>(e).unwrap().0
}

#[test]
fn layout_keeps_fixed_spacing() {
    let t = Tunables::default();
    for offset in [-120, -7, 0, 55, 120] {
        let l = PairLayout::for_offset(offset, &t);
        assert_eq!(l.bottom_y - l.top_y, 420.0);
        assert_eq!(l.top_y, offset as f32);
        assert_eq!(l.trigger_y, offset as f32 + 210.0);
    }
}

#[test]
fn drawn_offsets_stay_in_range() {
    let t = Tunables::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let o = draw_offset(&mut rng, &t);
        assert!((-120..=120).contains(&o), "offset {o} out of range");
    }
}

#[test]
fn spawn_pair_creates_pipes_and_trigger_at_spawn_x() {
    let mut world = course_world();
    let entry = spawn_at_offset(&mut world, 30);

    let [top, bottom] = entry.pipes;
    assert_eq!(pos(&world, top), Vec2::new(288.0, 30.0));
    assert_eq!(pos(&world, bottom), Vec2::new(288.0, 450.0));
    assert_eq!(world.get::<Pipe>(top).unwrap().end, PipeEnd::Top);
    assert_eq!(world.get::<Pipe>(bottom).unwrap().end, PipeEnd::Bottom);

    let trigger = entry.trigger.expect("fresh trigger");
    assert!(world.get::<ScoringTrigger>(trigger).is_some());
    assert_eq!(pos(&world, trigger), Vec2::new(288.0, 240.0));

    // Pipes are announced to the renderer; the trigger is invisible.
    let created: Vec<_> = drain_intents(&mut world)
        .into_iter()
        .filter_map(|i| match i {
            RenderIntent::Create { entity, visual, .. } => Some((entity, visual)),
            _ => None,
        })
        .collect();
    assert_eq!(
        created,
        vec![(top, VisualHandle::PIPE_TOP), (bottom, VisualHandle::PIPE_BOTTOM)]
    );
}

#[test]
fn spawner_fires_on_interval() {
    let mut world = course_world();

    for _ in 0..129 {
        run_system_once(&mut world, tick_spawner);
    }
    assert!(world.resource::<Course>().is_empty());

    run_system_once(&mut world, tick_spawner);
    assert_eq!(world.resource::<Course>().len(), 1);
    assert_eq!(world.resource::<SpawnTimer>().ticks, 0);

    for _ in 0..130 {
        run_system_once(&mut world, tick_spawner);
    }
    assert_eq!(world.resource::<Course>().len(), 2);

    for entry in world.resource::<Course>().iter() {
        assert!((-120..=120).contains(&entry.offset));
    }
}

#[test]
fn scroll_moves_pair_and_trigger_together() {
    let mut world = course_world();
    let entry = spawn_at_offset(&mut world, 0);

    run_system_once(&mut world, scroll_course);

    let dx = Tunables::default().scroll_per_tick();
    let trigger = entry.trigger.unwrap();
    for e in [entry.pipes[0], entry.pipes[1], trigger] {
        assert!((pos(&world, e).x - (288.0 - dx)).abs() < 1e-4);
    }
}

#[test]
fn scroll_retires_pairs_past_left_edge() {
    let mut world = course_world();
    let entry = spawn_at_offset(&mut world, 0);
    for e in entry.entities().collect::<Vec<_>>() {
        world.get_mut::<PlayfieldPos>(e).unwrap().0.x = -49.0;
    }
    drain_intents(&mut world);

    run_system_once(&mut world, scroll_course);

    assert!(world.resource::<Course>().is_empty());
    for e in entry.entities() {
        assert!(world.get_entity(e).is_err());
    }
    let destroyed = drain_intents(&mut world)
        .into_iter()
        .filter(|i| matches!(i, RenderIntent::Destroy { .. }))
        .count();
    assert_eq!(destroyed, 3);
}

#[test]
fn scroll_keeps_pairs_still_on_screen() {
    let mut world = course_world();
    let old = spawn_at_offset(&mut world, 0);
    let fresh = spawn_at_offset(&mut world, 10);
    for e in old.entities().collect::<Vec<_>>() {
        world.get_mut::<PlayfieldPos>(e).unwrap().0.x = -49.0;
    }

    run_system_once(&mut world, scroll_course);

    let course = world.resource::<Course>();
    assert_eq!(course.len(), 1);
    assert_eq!(course.iter().next().unwrap().pipes, fresh.pipes);
}

#[test]
fn trigger_consumed_once() {
    let mut world = course_world();
    let entry = spawn_at_offset(&mut world, 0);
    let trigger = entry.trigger.unwrap();

    let mut course = world.resource_mut::<Course>();
    assert!(course.consume_trigger(trigger));
    assert!(!course.consume_trigger(trigger));
    assert_eq!(course.iter().next().unwrap().trigger, None);
}

#[test]
fn clear_returns_everything() {
    let mut world = course_world();
    spawn_at_offset(&mut world, 0);
    spawn_at_offset(&mut world, 1);

    let drained = world.resource_mut::<Course>().clear();
    assert_eq!(drained.len(), 2);
    assert!(world.resource::<Course>().is_empty());
}
