//! Game configuration.
//!
//! Every tunable the game reads lives in one immutable record, built once in
//! `main` and passed by reference to the constructors and update functions
//! that need it. Nothing reads module-level mutable state.

use std::time::Duration;

/// Immutable game configuration. Distances are logical pixels, speeds are
/// logical pixels per frame.
#[derive(Debug, Clone)]
pub struct Config {
    /// Playfield width in logical pixels.
    pub width: i32,
    /// Playfield height in logical pixels.
    pub height: i32,
    /// Target frame rate.
    pub fps: u32,

    /// Velocity gained per frame while airborne.
    pub gravity: f64,
    /// Velocity assigned by a flap. Negative is up.
    pub flap_velocity: f64,
    /// Horizontal speed of the pipe stream.
    pub scroll_speed: f64,

    pub pipe_width: i32,
    pub pipe_height: i32,
    /// Vertical distance between the two segments of a pair.
    pub pipe_gap: i32,
    /// Range the top segment's y offset is drawn from (inclusive).
    pub gap_offset_min: i32,
    pub gap_offset_max: i32,

    pub bird_width: i32,
    pub bird_height: i32,

    pub ground_height: i32,

    pub digit_width: i32,
    pub digit_height: i32,
    /// Top-left anchor of the score strip.
    pub score_anchor: (i32, i32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 400,
            height: 600,
            fps: 60,
            gravity: 0.5,
            flap_velocity: -8.0,
            scroll_speed: 1.5,
            pipe_width: 65,
            pipe_height: 400,
            pipe_gap: 150,
            gap_offset_min: -350,
            gap_offset_max: -100,
            bird_width: 42,
            bird_height: 29,
            ground_height: 100,
            digit_width: 24,
            digit_height: 36,
            score_anchor: (200, 50),
        }
    }
}

impl Config {
    /// X position at which a pair triggers a score and a new spawn.
    pub fn spawn_threshold(&self) -> f64 {
        (self.width / 2 - 1) as f64
    }

    /// Pairs whose top segment sits strictly left of this are discarded.
    pub fn despawn_x(&self) -> f64 {
        -(self.pipe_width as f64)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }
}
