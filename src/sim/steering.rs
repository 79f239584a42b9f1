//! Lecturer steering
//!
//! Target selection runs every tick with a fixed priority:
//! distraction, then an open laptop, then wandering between free desks.
//! Movement is a per-axis step of constant size with no overshoot clamp,
//! so diagonal approaches close faster than straight ones.

use glam::Vec2;

use super::state::GameState;
use crate::consts::ARRIVAL_TOLERANCE;

/// Why the lecturer is heading where it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Goal {
    /// Looking at a classmate's open laptop
    Distraction(Vec2),
    /// Chasing the player's open laptop
    Chase(Vec2),
    /// Walking to a random free desk
    Retreat(Vec2),
    /// Distracted but no classmate has a laptop open; stand still
    Idle,
}

impl Goal {
    pub fn target(self) -> Option<Vec2> {
        match self {
            Goal::Distraction(t) | Goal::Chase(t) | Goal::Retreat(t) => Some(t),
            Goal::Idle => None,
        }
    }
}

/// True when `pos` is within `tolerance` of `target` on both axes
#[inline]
pub fn within(pos: Vec2, target: Vec2, tolerance: f32) -> bool {
    let d = (pos - target).abs();
    d.x < tolerance && d.y < tolerance
}

/// Decide the lecturer's goal for this tick, updating the retreat target
pub fn select_goal(state: &mut GameState) -> Goal {
    if state.distraction_cooldown > 0.0 {
        state.lecturer.retreat_target = None;
        return match state.distraction_target() {
            Some(npc) => Goal::Distraction(npc.pos.as_vec2()),
            None => Goal::Idle,
        };
    }

    if state.player.laptop_open {
        state.lecturer.retreat_target = None;
        return Goal::Chase(state.player.pos.as_vec2());
    }

    let current = state.lecturer.retreat_target;
    let target = match current {
        Some(t) if !within(state.lecturer.pos, t, ARRIVAL_TOLERANCE) => t,
        _ => state.choose_retreat_target(),
    };
    Goal::Retreat(target)
}

/// Move one `speed` increment toward `target` on each axis independently
pub fn step_toward(pos: Vec2, target: Vec2, speed: f32) -> Vec2 {
    Vec2::new(step_axis(pos.x, target.x, speed), step_axis(pos.y, target.y, speed))
}

#[inline]
fn step_axis(current: f32, target: f32, speed: f32) -> f32 {
    if current < target {
        current + speed
    } else if current > target {
        current - speed
    } else {
        current
    }
}
