//! Playfield coordinates and hit boxes.
//!
//! The simulation lives in playfield space: origin at the top-left corner,
//! x to the right, y downward. Nothing in gameplay reads `Transform`; the
//! renderer derives transforms from `PlayfieldPos` with [`to_world`].

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

/// Centre of an entity in playfield space.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayfieldPos(pub Vec2);

/// Axis-aligned box around `PlayfieldPos`, stored as half extents.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub half: Vec2,
}

impl Hitbox {
    #[inline]
    pub fn from_size(size: Vec2) -> Self {
        Self { half: size * 0.5 }
    }

    #[inline]
    pub fn at(&self, center: Vec2) -> Aabb2d {
        Aabb2d::new(center, self.half)
    }
}

/// Marker for everything that belongs to one playthrough and is discarded on restart.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SessionScoped;

/// Playfield point -> Bevy world point (origin at the playfield centre, y up).
#[inline]
pub fn to_world(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(p.x - width * 0.5, height * 0.5 - p.y)
}
