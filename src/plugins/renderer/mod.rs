//! Renderer plugin (render-only): the consumer side of `RenderIntent`.
//!
//! There is no asset pipeline. Every visual handle maps to a flat-coloured
//! placeholder sprite of the size the real image would have. Gameplay
//! entities never get sprites themselves; each `Create` spawns a separate
//! visual entity that mirrors its source.
//!
//! ```text
//! Update:     apply_intents    create / destroy visuals, banner visibility, playback
//! PostUpdate: sync_transforms  PlayfieldPos (+ flyer tilt) -> Transform
//!             animate          playback name -> sprite scale
//! ```

use bevy::ecs::message::MessageReader;
use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::common::intents::{Animation, Banner, RenderIntent, VisualHandle};
use crate::common::playfield::{to_world, PlayfieldPos};
use crate::common::tunables::Tunables;
use crate::plugins::flyer::FlyerBody;

/// Source gameplay entity -> visual entity.
#[derive(Resource, Default, Debug)]
pub struct VisualInstances {
    by_source: HashMap<Entity, Entity>,
}

/// Visual entity mirroring a gameplay entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Mirrors(pub Entity);

#[derive(Component, Debug, Clone, Copy)]
pub struct BannerVisual(pub Banner);

#[derive(Component, Debug, Clone, Copy)]
pub struct Playback {
    pub animation: Animation,
    pub elapsed: f32,
}

const WING_BEATS_PER_SEC: f32 = 10.0 / 3.0;

pub fn plugin(app: &mut App) {
    app.init_resource::<VisualInstances>()
        .add_systems(Startup, spawn_banners)
        .add_systems(Update, apply_intents)
        .add_systems(
            PostUpdate,
            (sync_transforms, animate)
                .chain()
                .before(TransformSystems::Propagate),
        );
}

struct Appearance {
    color: Color,
    size: Vec2,
    z: f32,
}

fn appearance(visual: VisualHandle, tunables: &Tunables) -> Appearance {
    match visual.0 {
        "bird" => Appearance {
            color: Color::srgb(0.95, 0.35, 0.2),
            size: tunables.flyer_size,
            z: 5.0,
        },
        "pipe_top" | "pipe_bottom" => Appearance {
            color: Color::srgb(0.33, 0.67, 0.18),
            size: tunables.pipe_size,
            z: 1.0,
        },
        "ground" => Appearance {
            color: Color::srgb(0.87, 0.84, 0.58),
            size: Vec2::new(336.0, 112.0),
            z: 10.0,
        },
        name if name.starts_with("number") => Appearance {
            color: Color::WHITE,
            size: Vec2::new(24.0, 36.0),
            z: 20.0,
        },
        _ => Appearance {
            color: Color::srgb(1.0, 0.0, 1.0),
            size: Vec2::splat(16.0),
            z: 15.0,
        },
    }
}

/// Where a banner sits in playfield space, and how big it is.
fn banner_layout(banner: Banner) -> (Vec2, Vec2, Color) {
    match banner {
        Banner::Intro => (Vec2::new(144.0, 156.0), Vec2::new(184.0, 267.0), Color::srgba(1.0, 1.0, 1.0, 0.85)),
        Banner::GameOver => (Vec2::new(144.0, 206.0), Vec2::new(192.0, 42.0), Color::srgb(0.98, 0.6, 0.1)),
        Banner::Restart => (Vec2::new(144.0, 300.0), Vec2::new(107.0, 58.0), Color::srgb(0.9, 0.9, 0.9)),
    }
}

fn spawn_banners(mut commands: Commands, tunables: Res<Tunables>) {
    for banner in [Banner::Intro, Banner::GameOver, Banner::Restart] {
        let (at, size, color) = banner_layout(banner);
        let pos = to_world(at, tunables.playfield_width, tunables.playfield_height);
        commands.spawn((
            Name::new(format!("Banner{banner:?}")),
            BannerVisual(banner),
            Sprite::from_color(color, size),
            Transform::from_translation(pos.extend(30.0)),
            Visibility::Hidden,
        ));
    }
}

fn apply_intents(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<RenderIntent>,
    mut instances: ResMut<VisualInstances>,
    mut q_banners: Query<(&BannerVisual, &mut Visibility)>,
) {
    let mut set_banner = |banner: Banner, visible: bool| {
        for (b, mut vis) in &mut q_banners {
            if b.0 == banner {
                *vis = if visible { Visibility::Visible } else { Visibility::Hidden };
            }
        }
    };

    for intent in reader.read() {
        match *intent {
            RenderIntent::Show(banner) => set_banner(banner, true),
            RenderIntent::Hide(banner) => set_banner(banner, false),
            RenderIntent::Create { entity, visual, at } => {
                let look = appearance(visual, &tunables);
                let pos = to_world(at, tunables.playfield_width, tunables.playfield_height);
                let v = commands
                    .spawn((
                        Name::new(visual.0),
                        Mirrors(entity),
                        Sprite::from_color(look.color, look.size),
                        Transform::from_translation(pos.extend(look.z)),
                    ))
                    .id();
                if let Some(old) = instances.by_source.insert(entity, v) {
                    commands.entity(old).try_despawn();
                }
            }
            RenderIntent::Destroy { entity } => {
                if let Some(v) = instances.by_source.remove(&entity) {
                    commands.entity(v).try_despawn();
                }
            }
            RenderIntent::Play { entity, animation } => {
                if let Some(&v) = instances.by_source.get(&entity) {
                    commands.entity(v).try_insert(Playback { animation, elapsed: 0.0 });
                }
            }
        }
    }
}

fn sync_transforms(
    tunables: Res<Tunables>,
    q_source: Query<(&PlayfieldPos, Option<&FlyerBody>)>,
    mut q_visuals: Query<(&Mirrors, &mut Transform)>,
) {
    for (mirrors, mut tf) in &mut q_visuals {
        let Ok((pos, body)) = q_source.get(mirrors.0) else {
            continue;
        };
        let p = to_world(pos.0, tunables.playfield_width, tunables.playfield_height);
        tf.translation.x = p.x;
        tf.translation.y = p.y;
        if let Some(body) = body {
            // Positive angle is nose-down in playfield space, clockwise on screen.
            tf.rotation = Quat::from_rotation_z(-body.angle.to_radians());
        }
    }
}

fn animate(time: Res<Time>, mut q: Query<(&mut Playback, &mut Transform)>) {
    for (mut playback, mut tf) in &mut q {
        playback.elapsed += time.delta_secs();
        tf.scale = match playback.animation {
            Animation::ClapWings => {
                let phase = playback.elapsed * WING_BEATS_PER_SEC * std::f32::consts::TAU;
                Vec3::new(1.0, 1.0 + 0.15 * phase.sin(), 1.0)
            }
            Animation::Stop | Animation::MovingGround | Animation::StopGround => Vec3::ONE,
        };
    }
}
