//! Windowing and input adapter for the Pong core.
//!
//! One `MatchSession` frame per display frame at a 60 FPS target. All game
//! rules live in `game_core`; this binary only translates keys into session
//! calls and draws read-only views of it.

use game_core::{leaderboard, Config, MatchPhase, MatchSession};
use macroquad::prelude::*;

mod draw;
mod palette;

fn window_conf() -> Conf {
    Conf {
        window_title: "Purple - Pong".to_owned(),
        window_width: game_core::Params::SCREEN_WIDTH as i32,
        window_height: game_core::Params::SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    setup_logger();

    let data_dir = leaderboard::default_data_dir();
    log::info!("leaderboard directory: {}", data_dir.display());
    let mut session = MatchSession::new(Config::default(), data_dir);
    let mut ball_colour = 0usize;

    loop {
        match session.phase() {
            MatchPhase::StartScreen => {
                if is_key_pressed(KeyCode::Space) {
                    session.start(get_time());
                }
                if is_key_pressed(KeyCode::Right) {
                    ball_colour = palette::next_index(ball_colour, palette::BALL_COLOURS.len());
                }
                if is_key_pressed(KeyCode::Left) {
                    ball_colour = palette::previous_index(ball_colour, palette::BALL_COLOURS.len());
                }
            }
            MatchPhase::Playing => {
                let dir = if is_key_down(KeyCode::Up) {
                    -1
                } else if is_key_down(KeyCode::Down) {
                    1
                } else {
                    0
                };
                session.frame(dir, get_time());
            }
            MatchPhase::NameEntry => {
                while let Some(c) = get_char_pressed() {
                    session.push_char(c);
                }
                if is_key_pressed(KeyCode::Backspace) {
                    session.backspace();
                }
                if is_key_pressed(KeyCode::Enter) {
                    session.submit_initials();
                }
            }
        }

        draw::draw_frame(&session, ball_colour);
        next_frame().await;
    }
}

fn setup_logger() {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply();
    if let Err(e) = result {
        eprintln!("could not set up logging: {e}");
    }
}
