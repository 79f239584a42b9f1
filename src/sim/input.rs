//! Keyboard commands
//!
//! Key events are mapped to `Command`s and buffered in a bounded queue that
//! the tick drains, so input timing never races the simulation.

use std::collections::VecDeque;

use glam::IVec2;

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Arrow-key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

/// A player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step to a neighboring desk
    Move(Direction),
    /// Hammer the laptop to reopen it
    Mash,
    /// Point the lecturer at a classmate's laptop
    Distract,
}

impl Command {
    /// Map a `KeyboardEvent.key` value to a command
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Command::Move(Direction::Up)),
            "ArrowDown" => Some(Command::Move(Direction::Down)),
            "ArrowLeft" => Some(Command::Move(Direction::Left)),
            "ArrowRight" => Some(Command::Move(Direction::Right)),
            " " | "Spacebar" => Some(Command::Mash),
            "r" | "R" => Some(Command::Distract),
            _ => None,
        }
    }
}

/// Bounded FIFO of pending commands; the oldest is dropped when full
#[derive(Debug, Clone)]
pub struct InputQueue {
    pending: VecDeque<Command>,
    capacity: usize,
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::with_capacity(INPUT_QUEUE_CAPACITY)
    }
}

impl InputQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, command: Command) {
        if self.pending.len() >= self.capacity {
            let dropped = self.pending.pop_front();
            log::debug!("Input queue full, dropping {:?}", dropped);
        }
        self.pending.push_back(command);
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Apply one command. Returns whether it changed anything.
///
/// Invalid requests (blocked moves, mashing an open laptop, distracting
/// while on cooldown) are silently ignored.
pub fn apply_command(state: &mut GameState, command: Command) -> bool {
    if state.is_game_over() {
        return false;
    }
    match command {
        Command::Move(dir) => try_move_player(state, dir),
        Command::Mash => mash(state),
        Command::Distract => distract(state),
    }
}

/// Move the player one cell if the destination is in bounds and free
pub fn try_move_player(state: &mut GameState, dir: Direction) -> bool {
    let from = state.player.pos;
    let to = from + dir.delta();
    if !state.desks.relocate(from, to) {
        return false;
    }
    state.player.pos = to;
    true
}

/// Count a recovery press; reopens the laptop on the threshold
pub fn mash(state: &mut GameState) -> bool {
    if state.player.laptop_open {
        return false;
    }
    state.mash_count += 1;
    if state.mash_count >= MASH_THRESHOLD {
        state.player.laptop_open = true;
        state.mash_count = 0;
        state
            .message
            .set_for("Laptop reopened!", REOPEN_MESSAGE_DURATION);
        state.events.push(GameEvent::Recovered);
    }
    true
}

/// Start a distraction if one is available
pub fn distract(state: &mut GameState) -> bool {
    if state.distraction_cooldown > 0.0 || state.distraction_target().is_none() {
        return false;
    }
    state.distraction_cooldown = DISTRACTION_DURATION;
    state.message.set("Lecturer distracted!");
    state.events.push(GameEvent::Distracted);
    true
}
