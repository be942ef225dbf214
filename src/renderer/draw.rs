//! Frame layout for the intro screen and gameplay

use super::Surface;
use crate::error::Result;
use crate::settings::Icons;
use crate::sim::{EntityKind, GameState};

const LOGO: [&str; 3] = [
    "+-------------------+",
    "|  CROUCH  &  JUMP  |",
    "+-------------------+",
];

fn draw_text<S: Surface>(surface: &mut S, x: i32, y: i32, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        surface.set_cell(x + i as i32, y, ch);
    }
}

/// Border box: rows 0 and `height + 1`, columns 0 and `width`
fn draw_border<S: Surface>(surface: &mut S, state: &GameState, icons: &Icons) {
    let (width, height) = (state.board.width, state.board.height);
    for x in 0..width {
        surface.set_cell(x, 0, icons.border);
        surface.set_cell(x, height + 1, icons.border);
    }
    for y in 0..height + 2 {
        surface.set_cell(0, y, icons.border);
        surface.set_cell(width, y, icons.border);
    }
}

/// Draw and commit one gameplay frame
pub fn draw_frame<S: Surface>(state: &GameState, icons: &Icons, surface: &mut S) -> Result<()> {
    let (width, height) = (state.board.width, state.board.height);

    // Player: body, plus head unless crouching
    let player = &state.player;
    let body_y = height - i32::from(player.height()) - 1;
    surface.set_cell(player.lane, body_y, icons.player);
    if !player.is_crouching() {
        surface.set_cell(player.lane, body_y - 1, icons.player);
    }

    for entity in state.entities.iter().filter(|e| e.is_active()) {
        let glyph = match entity.kind {
            EntityKind::Hazard => icons.hazard,
            EntityKind::Pickup => icons.pickup,
        };
        surface.set_cell(entity.x, height - i32::from(entity.vertical_offset), glyph);
    }

    for x in 0..width {
        surface.set_cell(x, height, icons.ground);
    }

    // HUD on row 1
    draw_text(surface, 2, 1, &format!("Score: {}", state.stats.score));
    for i in 0..i32::from(state.stats.lives) {
        surface.set_cell(width - 4 - i, 1, icons.life);
    }

    draw_border(surface, state, icons);

    surface.commit_frame()
}

/// Draw and commit the intro screen: logo first, then controls
pub fn draw_intro<S: Surface>(
    state: &GameState,
    icons: &Icons,
    logo_ticks: u64,
    surface: &mut S,
) -> Result<()> {
    if state.intro_ticks < logo_ticks {
        draw_border(surface, state, icons);
        let logo_width = LOGO[0].chars().count() as i32;
        let start_x = ((state.board.width - logo_width) / 2).max(1);
        let start_y = ((state.board.height + 2 - LOGO.len() as i32) / 2).max(1);
        for (i, line) in LOGO.iter().enumerate() {
            draw_text(surface, start_x, start_y + i as i32, line);
        }
    } else {
        let lines = [
            "Welcome to Crouch & Jump!".to_string(),
            "Controls:".to_string(),
            "  Up arrow: Jump".to_string(),
            "  Down arrow: Crouch".to_string(),
            "  Escape: Quit game".to_string(),
            format!("High score: {}", state.high_score),
            "Press any key to start the game...".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            draw_text(surface, 2, 2 + i as i32, line);
        }
    }

    surface.commit_frame()
}
