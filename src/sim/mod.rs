//! Classroom simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - One owned `GameState`, advanced only by `tick`
//! - Seeded RNG only
//! - Input arrives as queued `Command`s
//! - No rendering or DOM dependencies

pub mod grid;
pub mod input;
pub mod state;
pub mod steering;
pub mod tick;

pub use grid::{Desk, DeskGrid};
pub use input::{Command, Direction, InputQueue, apply_command};
pub use state::{
    GameEvent, GamePhase, GameState, LECTURER_LINES, Lecturer, Npc, Player, Speech, StatusMessage,
};
pub use steering::{Goal, select_goal, step_toward};
pub use tick::{FrameStepper, game_over_message, tick};
