//! Game state and core simulation types
//!
//! Everything a session needs lives in one owned `GameState`.

use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::grid::DeskGrid;
use super::input::InputQueue;
use crate::consts::*;

/// Lines the lecturer cycles through when catching the player
pub const LECTURER_LINES: [&str; 4] = [
    "Close your laptop!",
    "Are you sleeping?",
    "Are you okay?",
    "What are you doing?",
];

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Clock running
    Playing,
    /// Time ran out; ticks and commands are inert
    GameOver,
}

/// Notable things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Lecturer closed the player's laptop
    Caught,
    /// Player mashed the laptop back open
    Recovered,
    /// Lecturer sent off to look at a classmate
    Distracted,
    /// Distraction wore off
    DistractionEnded,
    /// Session clock hit zero
    GameOver { score: u64 },
}

/// The student at the desk
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: IVec2,
    pub laptop_open: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: IVec2::new(2, 2),
            laptop_open: true,
        }
    }
}

/// A classmate sitting at a fixed desk
#[derive(Debug, Clone)]
pub struct Npc {
    pub pos: IVec2,
    pub laptop_open: bool,
}

impl Npc {
    pub fn new(x: i32, y: i32, laptop_open: bool) -> Self {
        Self {
            pos: IVec2::new(x, y),
            laptop_open,
        }
    }
}

/// The patrolling lecturer
#[derive(Debug, Clone)]
pub struct Lecturer {
    /// Fractional cell position
    pub pos: Vec2,
    /// Cells per tick, applied per axis
    pub speed: f32,
    /// Where to walk while not chasing anyone
    pub retreat_target: Option<Vec2>,
    /// Seconds until another catch is allowed
    pub cooldown: f32,
}

impl Default for Lecturer {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            speed: LECTURER_SPEED,
            retreat_target: None,
            cooldown: 0.0,
        }
    }
}

/// Bubble above the lecturer's head
#[derive(Debug, Clone, Default)]
pub struct Speech {
    pub text: String,
    /// Seconds left on screen
    pub timer: f32,
    /// Next line in `LECTURER_LINES`
    pub next_line: usize,
}

impl Speech {
    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    /// Show the next line in the rotation
    pub fn say_next(&mut self) {
        self.text = LECTURER_LINES[self.next_line].to_string();
        self.timer = SPEECH_DURATION;
        self.next_line = (self.next_line + 1) % LECTURER_LINES.len();
    }

    pub fn advance(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer -= dt;
            if self.timer <= 0.0 {
                self.text.clear();
            }
        }
    }
}

/// Content of the HUD message slot.
///
/// `expires` counts down only while set; when it runs out the message is
/// cleared, provided the laptop is still open.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    pub text: String,
    pub expires: Option<f32>,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.expires = None;
    }

    pub fn set_for(&mut self, text: impl Into<String>, secs: f32) {
        self.text = text.into();
        self.expires = Some(secs);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.expires = None;
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub lecturer: Lecturer,
    pub desks: DeskGrid,
    pub npcs: Vec<Npc>,
    /// Score in tenths of a point; displayed floored to whole points
    pub score_tenths: u64,
    /// Seconds left in the session
    pub time_left: f32,
    /// Space presses since the last catch
    pub mash_count: u32,
    /// Seconds left on the current distraction
    pub distraction_cooldown: f32,
    pub speech: Speech,
    pub message: StatusMessage,
    /// Pending keyboard commands, drained at the start of each tick
    pub input: InputQueue,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new classroom with the standard seating
    pub fn new(seed: u64) -> Self {
        let npcs = vec![Npc::new(1, 0, true), Npc::new(4, 1, true), Npc::new(3, 3, false)];
        Self::with_npcs(seed, npcs)
    }

    /// Create a classroom with a custom set of classmates
    pub fn with_npcs(seed: u64, npcs: Vec<Npc>) -> Self {
        let player = Player::default();
        let mut desks = DeskGrid::default();
        desks.occupy(player.pos);
        for npc in &npcs {
            desks.occupy(npc.pos);
        }

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            player,
            lecturer: Lecturer::default(),
            desks,
            npcs,
            score_tenths: 0,
            time_left: SESSION_SECONDS,
            mash_count: 0,
            distraction_cooldown: 0.0,
            speech: Speech::default(),
            message: StatusMessage::default(),
            input: InputQueue::default(),
            events: Vec::new(),
            time_ticks: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.score_tenths / 10
    }

    /// First classmate with an open laptop, in seating order
    pub fn distraction_target(&self) -> Option<&Npc> {
        self.npcs.iter().find(|n| n.laptop_open)
    }

    /// Euclidean distance between lecturer and player (cells)
    pub fn lecturer_distance(&self) -> f32 {
        self.lecturer.pos.distance(self.player.pos.as_vec2())
    }

    /// Lecturer is close and the laptop is still open
    pub fn player_panicking(&self) -> bool {
        self.player.laptop_open && self.lecturer_distance() < PANIC_RADIUS
    }

    /// Pick a fresh random retreat cell for the lecturer
    pub fn choose_retreat_target(&mut self) -> Vec2 {
        let cell = self.desks.random_empty_cell(&mut self.rng).as_vec2();
        self.lecturer.retreat_target = Some(cell);
        cell
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
