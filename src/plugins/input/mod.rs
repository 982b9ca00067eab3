//! Input plugin: turns device edges into one latched activation.
//!
//! Pipeline:
//! - PreUpdate (after Bevy's input systems): sample just-pressed edges, set `Activation`
//! - FixedUpdate: the session router takes the latch, at most once per tick
//!
//! Only edges count. Holding a key or button never produces a second activation.

use bevy::input::InputSystems;
use bevy::input::touch::Touches;
use bevy::prelude::*;

/// Latched activation. Set by input sampling, taken by the tick.
#[derive(Resource, Default, Debug)]
pub struct Activation {
    pending: bool,
}

impl Activation {
    #[inline]
    pub fn trigger(&mut self) {
        self.pending = true;
    }

    /// Consume the latch. Returns whether an activation was pending.
    #[inline]
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

pub const ACTIVATION_KEYS: [KeyCode; 2] = [KeyCode::ArrowUp, KeyCode::Space];

pub fn plugin(app: &mut App) {
    app.init_resource::<Activation>()
        .add_systems(PreUpdate, gather_activation.after(InputSystems));
}

fn gather_activation(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    mut activation: ResMut<Activation>,
) {
    let key = keys.is_some_and(|k| k.any_just_pressed(ACTIVATION_KEYS));
    let click = buttons.is_some_and(|b| b.just_pressed(MouseButton::Left));
    let tap = touches.is_some_and(|t| t.any_just_pressed());

    if key || click || tap {
        activation.trigger();
    }
}
