use std::time::Duration;

use bouncer_engine::coords::Vec2;
use bouncer_engine::paint::Color;
use bouncer_engine::text::FontId;

pub const WINDOW_TITLE: &str = "Bouncer - Esc to exit";

/// Initial simulation values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Window resolution in pixels, `(width, height)`.
    pub resolution: (u32, u32),
    /// Half the side length of the square body.
    pub half_extent: f32,
    /// Pixels per tick.
    pub velocity: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            resolution: (400, 200),
            half_extent: 20.0,
            velocity: Vec2::new(2.0, 1.5),
        }
    }
}

/// How a frame looks.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub clear: Color,
    pub body: Color,
    pub text: Color,
    pub label: &'static str,
    /// Baseline start of the label: `x` from the left edge, `y` down from the top edge.
    pub label_origin: Vec2,
    pub font_size: f32,
    /// Font for the label; without one the label is not drawn.
    pub font: Option<FontId>,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            clear: Color::rgb(0.1, 0.1, 0.1),
            body: Color::rgb_u8(255, 0, 0),
            text: Color::WHITE,
            label: "F: Speed up, S: Slow down, Esc: Exit",
            label_origin: Vec2::new(10.0, 20.0),
            font_size: 15.0,
            font: None,
        }
    }
}

/// Main loop settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Sleep at the end of every tick.
    pub tick_delay: Duration,
    pub style: SceneStyle,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_delay: Duration::from_micros(200),
            style: SceneStyle::default(),
        }
    }
}
