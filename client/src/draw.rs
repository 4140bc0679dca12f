//! All rendering. The session is observed read-only; nothing in here
//! mutates game state.

use game_core::leaderboard::Winner;
use game_core::{MatchPhase, MatchSession, Side};
use macroquad::prelude::*;

use crate::palette::BALL_COLOURS;

pub fn draw_frame(session: &MatchSession, ball_colour: usize) {
    clear_background(WHITE);

    draw_center_line();
    draw_centered_text("PONG", 48.0, 48, DARKGRAY);

    draw_paddle(session, Side::Player, BLUE);
    draw_paddle(session, Side::Opponent, RED);

    let ball = session.ball();
    let colour = BALL_COLOURS
        .get(ball_colour)
        .map(|c| c.colour)
        .unwrap_or(PURPLE);
    draw_circle(ball.pos.x, ball.pos.y, ball.radius, colour);

    let score = session.score();
    draw_text(&format!("Player: {}", score.player), 50.0, 100.0, 28.0, BLUE);
    draw_text(
        &format!("AI: {}", score.opponent),
        screen_width() - 250.0,
        100.0,
        28.0,
        RED,
    );
    draw_text(&format!("FPS: {}", get_fps()), 10.0, 24.0, 20.0, GRAY);

    match session.phase() {
        MatchPhase::Playing => {}
        MatchPhase::StartScreen => draw_start_screen(session, ball_colour),
        MatchPhase::NameEntry => draw_name_entry(session),
    }
}

fn draw_paddle(session: &MatchSession, side: Side, colour: Color) {
    let paddle = session.paddle(side);
    draw_rectangle(
        paddle.pos.x,
        paddle.pos.y,
        paddle.width,
        paddle.height,
        colour,
    );
}

fn draw_center_line() {
    let x = screen_width() / 2.0;
    let mut y = 0.0;
    while y < screen_height() {
        draw_line(x, y, x, y + 10.0, 1.0, LIGHTGRAY);
        y += 20.0;
    }
}

fn draw_start_screen(session: &MatchSession, ball_colour: usize) {
    match session.last_result() {
        Some(Winner::Ai) => {
            draw_centered_text("AI WINS!", 140.0, 40, RED);
            draw_centered_text("Press SPACE to play again", 180.0, 32, DARKGRAY);
        }
        Some(Winner::Player) => {
            draw_centered_text("YOU WIN!", 140.0, 40, GREEN);
            draw_centered_text("Press SPACE to play again", 180.0, 32, DARKGRAY);
        }
        None => draw_centered_text("Press SPACE to play", 180.0, 32, DARKGRAY),
    }

    if let Some(option) = BALL_COLOURS.get(ball_colour) {
        draw_centered_text(
            &format!("Ball colour: {} (LEFT/RIGHT to change)", option.name),
            215.0,
            20,
            GRAY,
        );
    }

    let board = session.leaderboard();
    if board.is_empty() {
        draw_centered_text("No games on the board yet", 280.0, 24, GRAY);
        return;
    }

    draw_centered_text("FASTEST GAMES", 270.0, 28, DARKGRAY);
    for (i, entry) in board.entries().iter().enumerate() {
        let line = format!(
            "{:>2}. {}  {}  {:>8.3}s",
            i + 1,
            entry.initials,
            entry.winner.as_char(),
            entry.seconds
        );
        draw_centered_text(&line, 300.0 + i as f32 * 24.0, 22, DARKGRAY);
    }
}

fn draw_name_entry(session: &MatchSession) {
    draw_centered_text("YOU WIN!", 230.0, 40, GREEN);
    draw_centered_text(
        &format!("Won in {:.1} seconds", session.last_duration()),
        280.0,
        24,
        DARKGRAY,
    );
    draw_centered_text("Enter your initials, then press ENTER", 320.0, 24, GRAY);

    // Show the three slots explicitly so the padding is visible.
    let slots: String = session
        .pending_initials()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .flat_map(|c| [c, ' '])
        .collect();
    draw_centered_text(slots.trim_end(), 370.0, 40, DARKGRAY);
}

fn draw_centered_text(text: &str, y: f32, font_size: u16, colour: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    let x = (screen_width() - dims.width) / 2.0;
    draw_text(text, x, y, font_size as f32, colour);
}
