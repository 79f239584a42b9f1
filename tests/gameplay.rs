//! Whole-session gameplay properties, run natively with `cargo test`.

use glam::IVec2;
use lecture_dodge::consts::*;
use lecture_dodge::sim::{
    Command, Direction, GameEvent, GamePhase, GameState, apply_command, game_over_message, tick,
};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => direction().prop_map(Command::Move),
        1 => Just(Command::Mash),
        1 => Just(Command::Distract),
    ]
}

/// Positions of everyone sitting at a desk
fn seated(state: &GameState) -> Vec<IVec2> {
    std::iter::once(state.player.pos)
        .chain(state.npcs.iter().map(|n| n.pos))
        .collect()
}

proptest! {
    #[test]
    fn move_succeeds_iff_destination_free(dirs in prop::collection::vec(direction(), 1..60)) {
        let mut state = GameState::new(11);
        for dir in dirs {
            let from = state.player.pos;
            let to = from + dir.delta();
            let allowed = state.desks.in_bounds(to) && !state.desks.is_occupied(to);

            let moved = apply_command(&mut state, Command::Move(dir));
            prop_assert_eq!(moved, allowed);
            prop_assert_eq!(state.player.pos, if allowed { to } else { from });

            let seats = seated(&state);
            prop_assert_eq!(state.desks.occupied_count(), seats.len());
            for seat in seats {
                prop_assert!(state.desks.is_occupied(seat));
            }
        }
    }

    #[test]
    fn laptop_reopens_only_at_threshold(presses in 0u32..12) {
        let mut state = GameState::new(11);
        state.player.laptop_open = false;
        for _ in 0..presses {
            apply_command(&mut state, Command::Mash);
        }
        prop_assert_eq!(state.player.laptop_open, presses >= MASH_THRESHOLD);
        let expected = if presses >= MASH_THRESHOLD { 0 } else { presses };
        prop_assert_eq!(state.mash_count, expected);
    }

    #[test]
    fn distraction_on_cooldown_is_noop(cooldown in 0.001f32..DISTRACTION_DURATION) {
        let mut state = GameState::new(11);
        state.distraction_cooldown = cooldown;
        prop_assert!(!apply_command(&mut state, Command::Distract));
        prop_assert_eq!(state.distraction_cooldown, cooldown);
        prop_assert!(state.drain_events().is_empty());
    }

    #[test]
    fn score_never_decreases(script in prop::collection::vec(prop::option::of(command()), 1..400)) {
        let mut state = GameState::new(23);
        let mut last = state.score_tenths;
        for step in script {
            if let Some(cmd) = step {
                state.input.push(cmd);
            }
            let was_open = state.player.laptop_open;
            tick(&mut state, SIM_DT);
            prop_assert!(state.score_tenths >= last);
            if !was_open && !state.player.laptop_open {
                prop_assert_eq!(state.score_tenths, last);
            }
            last = state.score_tenths;
        }
    }

    #[test]
    fn same_seed_same_session(
        seed in any::<u64>(),
        script in prop::collection::vec(prop::option::of(command()), 1..300),
    ) {
        let mut a = GameState::new(seed);
        let mut b = GameState::new(seed);
        for step in &script {
            if let Some(cmd) = step {
                a.input.push(*cmd);
                b.input.push(*cmd);
            }
            tick(&mut a, SIM_DT);
            tick(&mut b, SIM_DT);
            prop_assert_eq!(a.drain_events(), b.drain_events());
        }
        prop_assert_eq!(a.lecturer.pos, b.lecturer.pos);
        prop_assert_eq!(a.lecturer.retreat_target, b.lecturer.retreat_target);
        prop_assert_eq!(a.player.pos, b.player.pos);
        prop_assert_eq!(a.score_tenths, b.score_tenths);
    }

    #[test]
    fn open_tick_adds_one_tenth_at_any_score(start in 0u64..1_000_000_000) {
        let mut state = GameState::new(8);
        state.lecturer.cooldown = f32::MAX;
        state.score_tenths = start;
        for n in 1..=20 {
            tick(&mut state, SIM_DT);
            prop_assert_eq!(state.score_tenths, start + n);
        }
        prop_assert_eq!(state.display_score(), (start + 20) / 10);
    }
}

#[test]
fn lecturer_eventually_catches_idle_player() {
    let mut state = GameState::new(3);
    let mut caught_at = None;
    for _ in 0..1_000 {
        tick(&mut state, SIM_DT);
        if state.drain_events().contains(&GameEvent::Caught) {
            caught_at = Some(state.time_ticks);
            break;
        }
    }
    // From (0, 0) to (2, 2) diagonally at 0.015 cells per tick
    let ticks = caught_at.expect("lecturer never reached the player");
    assert!((120..=140).contains(&ticks), "caught after {ticks} ticks");
    assert!(!state.player.laptop_open);
}

#[test]
fn full_session_ends_with_game_over_message() {
    let mut state = GameState::new(99);
    let expected_ticks = (SESSION_SECONDS / SIM_DT).round() as u64;

    while state.phase == GamePhase::Playing {
        // Mash whenever caught so the score keeps moving
        if !state.player.laptop_open {
            state.input.push(Command::Mash);
        }
        tick(&mut state, SIM_DT);
        assert!(state.time_ticks <= expected_ticks + 10, "session overran");
    }

    assert!(state.time_ticks + 10 >= expected_ticks);
    assert!(state.time_left <= 0.0);
    assert_eq!(state.message.text, game_over_message(state.score_tenths / 10));

    let events = state.drain_events();
    assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));

    // Inert from here on
    let before = (state.score_tenths, state.time_left, state.lecturer.pos, state.player.pos);
    state.input.push(Command::Move(Direction::Up));
    for _ in 0..60 {
        tick(&mut state, SIM_DT);
    }
    assert_eq!(
        (state.score_tenths, state.time_left, state.lecturer.pos, state.player.pos),
        before
    );
    assert!(state.drain_events().is_empty());
}

#[test]
fn uncaught_session_scores_a_full_1080() {
    let mut state = GameState::new(41);
    while state.phase == GamePhase::Playing {
        // Keep the lecturer from ever catching
        state.lecturer.cooldown = f32::MAX;
        tick(&mut state, SIM_DT);
    }

    assert_eq!(state.time_ticks, 10_800);
    assert_eq!(state.score_tenths, 10_800);
    assert_eq!(state.message.text, "Game Over! Score: 1080");
    assert_eq!(
        state.drain_events().last(),
        Some(&GameEvent::GameOver { score: 1080 })
    );
}
