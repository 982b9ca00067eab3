//! Tunable gameplay constants.
//!
//! All distances are playfield units (origin top-left, y grows downward).
//! Speeds are units per second and accelerations units per second squared;
//! the simulation integrates them with a fixed `tick_seconds()` step.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub tick_hz: f64,

    pub playfield_width: f32,
    pub playfield_height: f32,
    pub ground_y: f32,

    pub flyer_spawn: Vec2,
    pub flyer_size: Vec2,
    pub gravity: f32,
    pub cruise_fall_speed: f32,
    pub flap_velocity: f32,
    pub flap_angle: f32,
    pub max_angle: f32,
    pub angle_step: f32,
    pub boost_ticks: u8,

    pub pipe_size: Vec2,
    pub pipe_spacing: f32,
    pub gap_baseline: f32,
    pub gap_half_height: f32,
    pub gap_height: f32,
    pub gap_offset_range: (i32, i32),
    pub trigger_width: f32,
    pub obstacle_speed: f32,
    pub spawn_x: f32,
    pub despawn_x: f32,
    pub spawn_interval_ticks: u32,

    pub score_center_x: f32,
    pub score_y: f32,
    pub glyph_width: f32,
}

impl Tunables {
    /// Duration of one simulation tick.
    #[inline]
    pub fn tick_seconds(&self) -> f32 {
        (1.0 / self.tick_hz) as f32
    }

    /// Horizontal distance an obstacle travels in one tick.
    #[inline]
    pub fn scroll_per_tick(&self) -> f32 {
        self.obstacle_speed * self.tick_seconds()
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,

            playfield_width: 288.0,
            playfield_height: 512.0,
            ground_y: 458.0,

            flyer_spawn: Vec2::new(60.0, 265.0),
            flyer_size: Vec2::new(34.0, 24.0),
            gravity: 300.0,
            cruise_fall_speed: 120.0,
            flap_velocity: -700.0,
            flap_angle: -15.0,
            max_angle: 90.0,
            angle_step: 1.0,
            boost_ticks: 5,

            pipe_size: Vec2::new(52.0, 320.0),
            pipe_spacing: 420.0,
            gap_baseline: 0.0,
            gap_half_height: 210.0,
            gap_height: 98.0,
            gap_offset_range: (-120, 120),
            trigger_width: 1.0,
            obstacle_speed: 100.0,
            spawn_x: 288.0,
            despawn_x: -50.0,
            spawn_interval_ticks: 130,

            score_center_x: 144.0,
            score_y: 30.0,
            glyph_width: 25.0,
        }
    }
}
