//! Lecture Dodge - A classroom chase arcade game
//!
//! Core modules:
//! - `sim`: Simulation (desk grid, lecturer steering, catch/recovery, timers)
//! - `renderer`: Drawing/HUD ports and the scene drawn through them
//! - `settings`: Host-supplied configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, TimingMode};

/// Game configuration constants
pub mod consts {
    /// Simulation timestep (one display frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Classroom dimensions (cells)
    pub const GRID_WIDTH: i32 = 6;
    pub const GRID_HEIGHT: i32 = 4;
    /// Pixel size of one desk cell
    pub const TILE_SIZE: f32 = 100.0;
    pub const CANVAS_WIDTH: f32 = GRID_WIDTH as f32 * TILE_SIZE;
    pub const CANVAS_HEIGHT: f32 = GRID_HEIGHT as f32 * TILE_SIZE;

    /// Session length (seconds)
    pub const SESSION_SECONDS: f32 = 180.0;
    /// Score gained per tick while the laptop is open, in tenths of a point
    pub const SCORE_TENTHS_PER_TICK: u64 = 1;

    /// Lecturer movement per tick, per axis (cells)
    pub const LECTURER_SPEED: f32 = 0.015;
    /// Per-axis distance at which the lecturer catches the player
    pub const CATCH_TOLERANCE: f32 = 0.1;
    /// Per-axis distance at which a retreat target counts as reached
    pub const ARRIVAL_TOLERANCE: f32 = 0.1;
    /// Seconds after a catch before the lecturer can catch again
    pub const CATCH_COOLDOWN: f32 = 2.0;

    /// Seconds the lecturer stays distracted
    pub const DISTRACTION_DURATION: f32 = 5.0;
    /// Space presses needed to reopen the laptop
    pub const MASH_THRESHOLD: u32 = 5;

    /// Seconds a speech bubble stays up after a catch
    pub const SPEECH_DURATION: f32 = 3.0;
    /// Seconds "Laptop reopened!" stays in the message slot
    pub const REOPEN_MESSAGE_DURATION: f32 = 1.0;

    /// Euclidean distance (cells) at which the player starts to panic
    pub const PANIC_RADIUS: f32 = 1.0;

    /// Pending keyboard commands kept between ticks
    pub const INPUT_QUEUE_CAPACITY: usize = 32;
}

/// Pixel center of a (possibly fractional) cell coordinate
#[inline]
pub fn cell_center(pos: glam::Vec2) -> glam::Vec2 {
    pos * consts::TILE_SIZE + glam::Vec2::splat(consts::TILE_SIZE / 2.0)
}
