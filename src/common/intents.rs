//! Render intents.
//!
//! Gameplay never draws. It writes `RenderIntent` messages naming *what* should
//! be visible and the renderer decides *how*. This is a producer → queue → consumer
//! pipeline: gameplay systems are the producers, the render-only plugin the consumer.
//! Headless builds register the message and simply never read it.

use bevy::prelude::*;

/// Abstract visual handle, resolved by the renderer (e.g. an image key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisualHandle(pub &'static str);

impl VisualHandle {
    pub const FLYER: Self = Self("bird");
    pub const GROUND: Self = Self("ground");
    pub const PIPE_TOP: Self = Self("pipe_top");
    pub const PIPE_BOTTOM: Self = Self("pipe_bottom");

    const DIGITS: [Self; 10] = [
        Self("number0"),
        Self("number1"),
        Self("number2"),
        Self("number3"),
        Self("number4"),
        Self("number5"),
        Self("number6"),
        Self("number7"),
        Self("number8"),
        Self("number9"),
    ];

    /// Glyph for a single decimal digit. Values above 9 wrap (callers pass `n % 10`).
    #[inline]
    pub fn digit(d: u8) -> Self {
        Self::DIGITS[(d % 10) as usize]
    }
}

/// Overlays that are shown or hidden as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Banner {
    Intro,
    GameOver,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Animation {
    /// Looping wing flap while the flyer is alive.
    ClapWings,
    /// Static flyer pose after a crash.
    Stop,
    MovingGround,
    StopGround,
}

impl Animation {
    pub fn key(self) -> &'static str {
        match self {
            Animation::ClapWings => "clap_wings",
            Animation::Stop => "stop",
            Animation::MovingGround => "moving-ground",
            Animation::StopGround => "stop-ground",
        }
    }
}

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum RenderIntent {
    Show(Banner),
    Hide(Banner),
    Play { entity: Entity, animation: Animation },
    /// Create a positioned visual instance bound to a gameplay entity.
    Create { entity: Entity, visual: VisualHandle, at: Vec2 },
    /// Idempotent: destroying an unknown instance is a no-op.
    Destroy { entity: Entity },
}
