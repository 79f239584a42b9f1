//! Classroom scene
//!
//! Pure read of `GameState`: nothing here mutates the simulation.

use glam::Vec2;

use super::{Color, DrawSurface, HudSink, HudSlot};
use crate::Settings;
use crate::cell_center;
use crate::consts::*;
use crate::sim::GameState;

const ICON_PX: f32 = 40.0;
const SPEECH_PX: f32 = 18.0;

const DESK_ICON: &str = "🖥️";
const NPC_OPEN_ICON: &str = "🤓";
const NPC_CLOSED_ICON: &str = "📝";
const PLAYER_OPEN_ICON: &str = "👨🏻‍💻";
const PLAYER_CLOSED_ICON: &str = "😓";
const LECTURER_ICON: &str = "👨‍🏫";

const PANIC_COLOR: Color = Color::rgba(255, 0, 0, 0.4);
const BUBBLE_COLOR: Color = Color::rgba(255, 255, 255, 0.9);

/// Speech bubble box, centered horizontally on the lecturer
const BUBBLE_SIZE: Vec2 = Vec2::new(160.0, 50.0);
/// How far above the lecturer the bubble sits
const BUBBLE_LIFT: f32 = 50.0;

/// Lecturer's vertical stomp offset (pixels) at `time_ms`
pub fn bounce_offset(time_ms: f64, reduced_motion: bool) -> f32 {
    if reduced_motion {
        return 0.0;
    }
    ((time_ms / 200.0).sin() * 5.0) as f32
}

/// Draw one frame of the classroom
pub fn draw_scene<S: DrawSurface + ?Sized>(
    state: &GameState,
    surface: &mut S,
    time_ms: f64,
    settings: &Settings,
) {
    surface.clear();

    for y in 0..state.desks.height() {
        for x in 0..state.desks.width() {
            let center = cell_center(Vec2::new(x as f32, y as f32));
            surface.fill_text(DESK_ICON, center, ICON_PX, Color::WHITE);
        }
    }

    for npc in &state.npcs {
        let icon = if npc.laptop_open {
            NPC_OPEN_ICON
        } else {
            NPC_CLOSED_ICON
        };
        surface.fill_text(icon, cell_center(npc.pos.as_vec2()), ICON_PX, Color::WHITE);
    }

    let player_cell = state.player.pos.as_vec2();
    let player_icon = if state.player.laptop_open {
        PLAYER_OPEN_ICON
    } else {
        PLAYER_CLOSED_ICON
    };
    surface.fill_text(player_icon, cell_center(player_cell), ICON_PX, Color::WHITE);
    if state.player_panicking() {
        surface.fill_rect(player_cell * TILE_SIZE, Vec2::splat(TILE_SIZE), PANIC_COLOR);
    }

    let bounce = bounce_offset(time_ms, settings.reduced_motion);
    let lecturer_at = cell_center(state.lecturer.pos) + Vec2::new(0.0, bounce);
    surface.fill_text(LECTURER_ICON, lecturer_at, ICON_PX, Color::WHITE);

    if state.speech.is_active() {
        let bubble_center = lecturer_at - Vec2::new(0.0, BUBBLE_LIFT);
        let corner = bubble_center - BUBBLE_SIZE / 2.0;
        surface.fill_rect(corner, BUBBLE_SIZE, BUBBLE_COLOR);
        surface.stroke_rect(corner, BUBBLE_SIZE, Color::BLACK, 2.0);
        surface.fill_text(
            &state.speech.text,
            bubble_center + Vec2::new(0.0, 8.0),
            SPEECH_PX,
            Color::BLACK,
        );
    }
}

/// Text for the message slot
pub fn hud_message(state: &GameState) -> String {
    if !state.is_game_over() && !state.player.laptop_open && !state.speech.is_active() {
        return format!("Mash Space ({}/{})", state.mash_count, MASH_THRESHOLD);
    }
    state.message.text.clone()
}

/// Mirror score, clock and message into the HUD
pub fn update_hud<H: HudSink + ?Sized>(state: &GameState, hud: &mut H) {
    hud.set_text(HudSlot::Score, &format!("Score: {}", state.display_score()));
    let secs = state.time_left.max(0.0).ceil() as u32;
    hud.set_text(HudSlot::Time, &format!("Time: {}", secs));
    hud.set_text(HudSlot::Message, &hud_message(state));
}
