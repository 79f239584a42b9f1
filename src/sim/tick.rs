//! Simulation tick
//!
//! Advances the classroom by one step: drain queued commands, steer the
//! lecturer, run the timers, resolve catches, then score and clock.

use super::input::apply_command;
use super::state::{GameEvent, GamePhase, GameState};
use super::steering::{select_goal, step_toward, within};
use crate::TimingMode;
use crate::consts::*;

/// Maps display frames onto simulation ticks
#[derive(Debug, Clone, Default)]
pub struct FrameStepper {
    accumulator: f32,
}

impl FrameStepper {
    /// Run the ticks owed for a frame that took `frame_dt` seconds.
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, state: &mut GameState, frame_dt: f32, mode: TimingMode) -> u32 {
        match mode {
            TimingMode::PerFrame => {
                tick(state, SIM_DT);
                1
            }
            TimingMode::FixedStep => {
                self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
                let mut substeps = 0;
                while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                    tick(state, SIM_DT);
                    self.accumulator -= SIM_DT;
                    substeps += 1;
                }
                substeps
            }
        }
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Advance the game state by one timestep
pub fn tick(state: &mut GameState, dt: f32) {
    // Nothing moves once the bell has rung
    if state.phase == GamePhase::GameOver {
        state.input.clear();
        return;
    }

    while let Some(command) = state.input.pop() {
        apply_command(state, command);
    }

    state.time_ticks += 1;

    // Steer the lecturer
    let goal = select_goal(state);
    if state.distraction_cooldown > 0.0 {
        state.distraction_cooldown -= dt;
        if state.distraction_cooldown <= 0.0 {
            state.message.clear();
            state.events.push(GameEvent::DistractionEnded);
        }
    }
    if let Some(target) = goal.target() {
        state.lecturer.pos = step_toward(state.lecturer.pos, target, state.lecturer.speed);
    }

    // Timers
    if state.lecturer.cooldown > 0.0 {
        state.lecturer.cooldown -= dt;
    }
    state.speech.advance(dt);
    advance_message(state, dt);

    resolve_catch(state);

    // Score and clock
    if state.player.laptop_open {
        state.score_tenths += SCORE_TENTHS_PER_TICK;
    }
    state.time_left -= dt;
    if state.time_left <= 0.0 {
        end_session(state);
    }
}

/// Count down a timed status message
fn advance_message(state: &mut GameState, dt: f32) {
    let Some(remaining) = state.message.expires else {
        return;
    };
    let remaining = remaining - dt;
    if remaining > 0.0 {
        state.message.expires = Some(remaining);
    } else if state.player.laptop_open {
        state.message.clear();
    } else {
        state.message.expires = None;
    }
}

/// Close the laptop if the lecturer is on top of the player
fn resolve_catch(state: &mut GameState) {
    let on_player = within(
        state.lecturer.pos,
        state.player.pos.as_vec2(),
        CATCH_TOLERANCE,
    );
    if !on_player || !state.player.laptop_open || state.lecturer.cooldown > 0.0 {
        return;
    }

    state.player.laptop_open = false;
    state.mash_count = 0;
    state.lecturer.cooldown = CATCH_COOLDOWN;
    state.speech.say_next();
    state.choose_retreat_target();
    state.events.push(GameEvent::Caught);
}

fn end_session(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    let score = state.display_score();
    state.message.set(game_over_message(score));
    state.events.push(GameEvent::GameOver { score });
    log::info!("Game over after {} ticks, score {}", state.time_ticks, score);
}

/// Final message shown when the clock runs out
pub fn game_over_message(score: u64) -> String {
    format!("Game Over! Score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Command;
    use glam::Vec2;

    /// Park the lecturer on the player and close the gap
    fn catch_now(state: &mut GameState) {
        state.lecturer.pos = state.player.pos.as_vec2();
        tick(state, SIM_DT);
    }

    #[test]
    fn test_score_accrues_while_open() {
        let mut state = GameState::new(5);
        let mut last = state.score_tenths;
        for _ in 0..10 {
            tick(&mut state, SIM_DT);
            assert_eq!(state.score_tenths, last + 1);
            last = state.score_tenths;
        }
        assert_eq!(state.display_score(), 1);
    }

    #[test]
    fn test_score_rate_holds_at_large_scores() {
        let mut state = GameState::new(5);
        state.lecturer.cooldown = f32::MAX;
        state.score_tenths = 9_999;
        tick(&mut state, SIM_DT);
        assert_eq!(state.score_tenths, 10_000);
        assert_eq!(state.display_score(), 1_000);
    }

    #[test]
    fn test_catch_closes_laptop() {
        let mut state = GameState::new(5);
        catch_now(&mut state);
        assert!(!state.player.laptop_open);
        assert_eq!(state.lecturer.cooldown, CATCH_COOLDOWN);
        assert_eq!(state.speech.text, "Close your laptop!");
        assert!(state.lecturer.retreat_target.is_some());
        assert!(state.drain_events().contains(&GameEvent::Caught));

        let frozen = state.score_tenths;
        for _ in 0..30 {
            tick(&mut state, SIM_DT);
        }
        assert_eq!(state.score_tenths, frozen);
    }

    #[test]
    fn test_catch_cooldown_blocks_recatch() {
        let mut state = GameState::new(5);
        catch_now(&mut state);
        for _ in 0..MASH_THRESHOLD {
            state.input.push(Command::Mash);
        }
        catch_now(&mut state);
        assert!(state.player.laptop_open, "cooldown should prevent a second catch");
    }

    #[test]
    fn test_catch_allowed_after_cooldown() {
        let mut state = GameState::new(5);
        catch_now(&mut state);
        for _ in 0..MASH_THRESHOLD {
            state.input.push(Command::Mash);
        }
        tick(&mut state, SIM_DT);
        state.lecturer.cooldown = 0.0;
        catch_now(&mut state);
        assert!(!state.player.laptop_open);
    }

    #[test]
    fn test_distraction_redirects_and_expires() {
        let mut state = GameState::new(5);
        state.input.push(Command::Distract);
        tick(&mut state, SIM_DT);
        assert_eq!(state.message.text, "Lecturer distracted!");
        // Heading for the classmate at (1, 0), not the player at (2, 2)
        assert!(state.lecturer.pos.x > 0.0);
        assert_eq!(state.lecturer.pos.y, 0.0);

        let ticks = (DISTRACTION_DURATION / SIM_DT) as usize + 2;
        for _ in 0..ticks {
            tick(&mut state, SIM_DT);
        }
        assert!(state.distraction_cooldown <= 0.0);
        assert!(state.message.text.is_empty());
        assert!(state.drain_events().contains(&GameEvent::DistractionEnded));
    }

    #[test]
    fn test_reopen_message_clears() {
        let mut state = GameState::new(5);
        catch_now(&mut state);
        state.lecturer.pos = Vec2::new(5.0, 0.0);
        for _ in 0..MASH_THRESHOLD {
            state.input.push(Command::Mash);
        }
        tick(&mut state, SIM_DT);
        assert!(state.player.laptop_open);
        assert_eq!(state.message.text, "Laptop reopened!");

        for _ in 0..(REOPEN_MESSAGE_DURATION / SIM_DT) as usize + 2 {
            tick(&mut state, SIM_DT);
        }
        assert!(state.message.text.is_empty());
    }

    #[test]
    fn test_per_frame_runs_one_tick() {
        let mut state = GameState::new(5);
        let mut stepper = FrameStepper::default();
        assert_eq!(stepper.advance(&mut state, 0.5, TimingMode::PerFrame), 1);
        assert_eq!(stepper.advance(&mut state, 0.001, TimingMode::PerFrame), 1);
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_fixed_step_accumulates() {
        let mut state = GameState::new(5);
        let mut stepper = FrameStepper::default();
        assert_eq!(stepper.advance(&mut state, 0.04, TimingMode::FixedStep), 2);

        stepper.reset();
        let ran: u32 = (0..4)
            .map(|_| stepper.advance(&mut state, 0.005, TimingMode::FixedStep))
            .sum();
        assert_eq!(ran, 1);
    }

    #[test]
    fn test_fixed_step_clamps_long_frames() {
        let mut state = GameState::new(5);
        let mut stepper = FrameStepper::default();
        let ran = stepper.advance(&mut state, 5.0, TimingMode::FixedStep);
        assert!(ran <= 6, "ran {ran} ticks for a clamped frame");
        assert!(state.time_left > SESSION_SECONDS - 0.2);
    }

    #[test]
    fn test_game_over_is_inert() {
        let mut state = GameState::new(5);
        state.time_left = SIM_DT / 2.0;
        state.score_tenths = 127;
        tick(&mut state, SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message.text, "Game Over! Score: 12");

        let snapshot = (state.score_tenths, state.lecturer.pos, state.time_ticks);
        state.input.push(Command::Move(crate::sim::Direction::Left));
        tick(&mut state, SIM_DT);
        assert_eq!((state.score_tenths, state.lecturer.pos, state.time_ticks), snapshot);
        assert_eq!(state.player.pos, glam::IVec2::new(2, 2));
    }
}
