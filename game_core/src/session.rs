//! Match controller: owns the world, score, timer and leaderboard, and
//! drives the StartScreen -> Playing -> (StartScreen | NameEntry) machine.
//!
//! There is no separate game-over phase: a finished match lands either on
//! the start screen (AI won, entry recorded as "AI") or in initials entry
//! (player won), and the start screen doubles as the leaderboard view.

use std::path::PathBuf;

use hecs::{Entity, World};

use crate::leaderboard::{Leaderboard, Winner};
use crate::{create_ball, create_paddle, step, Ball, Config, Events, Paddle, Score, Side};

/// Phases of the match state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    StartScreen,
    Playing,
    NameEntry,
}

/// A running game session, from process start to shutdown.
pub struct MatchSession {
    world: World,
    ball: Entity,
    player: Entity,
    opponent: Entity,
    config: Config,
    score: Score,
    events: Events,
    phase: MatchPhase,
    speed_multiplier: f32,
    start_time: f64,
    last_duration: f32,
    pending_initials: [char; 3],
    pending_len: usize,
    last_result: Option<Winner>,
    leaderboard: Leaderboard,
    data_dir: PathBuf,
}

impl MatchSession {
    /// Create the session and load any persisted leaderboard from `data_dir`.
    pub fn new(config: Config, data_dir: PathBuf) -> Self {
        let mut world = World::new();
        let ball = create_ball(&mut world, &config);
        let player = create_paddle(&mut world, Side::Player, &config);
        let opponent = create_paddle(&mut world, Side::Opponent, &config);

        let mut leaderboard = Leaderboard::new();
        if let Err(e) = leaderboard.load(&data_dir) {
            log::warn!("could not load leaderboard from {}: {e}", data_dir.display());
        }

        Self {
            world,
            ball,
            player,
            opponent,
            config,
            score: Score::new(),
            events: Events::new(),
            phase: MatchPhase::StartScreen,
            speed_multiplier: 1.0,
            start_time: 0.0,
            last_duration: 0.0,
            pending_initials: [' '; 3],
            pending_len: 0,
            last_result: None,
            leaderboard,
            data_dir,
        }
    }

    /// SPACE on the start screen: reset everything and begin playing.
    pub fn start(&mut self, now: f64) {
        if self.phase != MatchPhase::StartScreen {
            return;
        }
        self.score = Score::new();
        self.speed_multiplier = 1.0;
        self.recenter_paddles();
        self.reset_ball();
        self.start_time = now;
        self.phase = MatchPhase::Playing;
        log::debug!("match started");
    }

    /// Advance one frame of play. `player_dir` is -1/0/1, `now` comes from
    /// the platform's monotonic clock. Does nothing outside Playing.
    pub fn frame(&mut self, player_dir: i8, now: f64) {
        if self.phase != MatchPhase::Playing {
            return;
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            player_dir,
        );

        if !self.events.any_score() {
            return;
        }

        // Mid-match speed growth, never reset until the next match.
        self.speed_multiplier = 1.0 + self.score.total() as f32 * self.config.speed_step;

        match self.score.winner(self.config.points_to_win) {
            Some(Side::Opponent) => {
                self.last_duration = (now - self.start_time) as f32;
                self.last_result = Some(Winner::Ai);
                self.leaderboard.add("AI", Winner::Ai, self.last_duration);
                self.persist();
                self.phase = MatchPhase::StartScreen;
                log::debug!("AI wins in {:.3}s", self.last_duration);
            }
            Some(Side::Player) => {
                self.last_duration = (now - self.start_time) as f32;
                self.last_result = Some(Winner::Player);
                self.pending_initials = [' '; 3];
                self.pending_len = 0;
                self.phase = MatchPhase::NameEntry;
                log::debug!("player wins in {:.3}s", self.last_duration);
            }
            None => self.reset_ball(),
        }
    }

    /// Letter typed while entering initials. Non-letters are ignored.
    pub fn push_char(&mut self, c: char) {
        if self.phase != MatchPhase::NameEntry
            || !c.is_ascii_alphabetic()
            || self.pending_len >= self.pending_initials.len()
        {
            return;
        }
        self.pending_initials[self.pending_len] = c.to_ascii_uppercase();
        self.pending_len += 1;
    }

    /// BACKSPACE while entering initials.
    pub fn backspace(&mut self) {
        if self.phase == MatchPhase::NameEntry && self.pending_len > 0 {
            self.pending_len -= 1;
            self.pending_initials[self.pending_len] = ' ';
        }
    }

    /// ENTER while entering initials: record the win once at least one
    /// character was typed.
    pub fn submit_initials(&mut self) {
        if self.phase != MatchPhase::NameEntry || self.pending_len == 0 {
            return;
        }
        let initials: String = self.pending_initials.iter().collect();
        self.leaderboard
            .add(&initials, Winner::Player, self.last_duration);
        self.persist();
        self.phase = MatchPhase::StartScreen;
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn ball(&self) -> Ball {
        *self.world.get::<&Ball>(self.ball).unwrap()
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        };
        *self.world.get::<&Paddle>(entity).unwrap()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Initials typed so far, space-padded to 3 characters.
    pub fn pending_initials(&self) -> String {
        self.pending_initials.iter().collect()
    }

    pub fn last_duration(&self) -> f32 {
        self.last_duration
    }

    /// Who won the most recent finished match, if any. Drives the
    /// win/lose banner on the start screen.
    pub fn last_result(&self) -> Option<Winner> {
        self.last_result
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    fn reset_ball(&mut self) {
        let multiplier = self.speed_multiplier;
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(&self.config, multiplier);
        }
    }

    fn recenter_paddles(&mut self) {
        let start_y = self.config.paddle_start_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.pos.y = start_y;
            paddle.vel = 0.0;
        }
    }

    /// Best effort: a failed write is logged and the in-memory board stays
    /// authoritative.
    fn persist(&self) {
        if let Err(e) = self.leaderboard.save(&self.data_dir) {
            log::warn!("could not save leaderboard to {}: {e}", self.data_dir.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn session() -> MatchSession {
        let dir = tempfile::tempdir().unwrap();
        MatchSession::new(Config::default(), dir.path().to_path_buf())
    }

    /// Park the ball just past an edge so the next frame scores.
    fn place_ball(session: &mut MatchSession, pos: Vec2, vel: Vec2) {
        let mut ball = session.world.get::<&mut Ball>(session.ball).unwrap();
        ball.pos = pos;
        ball.vel = vel;
    }

    fn score_for(session: &mut MatchSession, side: Side, now: f64) {
        let x = match side {
            Side::Player => 1300.0,
            Side::Opponent => -100.0,
        };
        place_ball(session, Vec2::new(x, 300.0), Vec2::ZERO);
        session.frame(0, now);
    }

    #[test]
    fn test_initial_phase_is_start_screen() {
        let s = session();
        assert_eq!(s.phase(), MatchPhase::StartScreen);
        assert!(s.leaderboard().is_empty());
        assert_eq!(s.last_result(), None, "No match finished yet");
    }

    #[test]
    fn test_frame_is_noop_outside_playing() {
        let mut s = session();
        let ball_before = s.ball();

        s.frame(1, 10.0);

        assert_eq!(s.ball().pos, ball_before.pos, "No simulation on start screen");
    }

    #[test]
    fn test_start_resets_match_state() {
        let mut s = session();
        s.start(5.0);

        assert_eq!(s.phase(), MatchPhase::Playing);
        assert_eq!(s.score().total(), 0);
        assert_eq!(s.speed_multiplier(), 1.0);
        assert_eq!(s.ball().pos, Vec2::new(600.0, 300.0));
        assert_eq!(s.ball().vel, Vec2::new(4.0, 2.0));
        assert_eq!(s.paddle(Side::Player).pos.y, 250.0);
        assert_eq!(s.paddle(Side::Opponent).pos.y, 250.0);
    }

    #[test]
    fn test_scoring_below_threshold_resets_ball_and_grows_speed() {
        let mut s = session();
        s.start(0.0);

        score_for(&mut s, Side::Player, 1.0);

        assert_eq!(s.phase(), MatchPhase::Playing, "Match continues");
        assert_eq!(s.score().player, 1);
        assert_eq!(s.speed_multiplier(), 1.02);
        assert_eq!(s.ball().pos, Vec2::new(600.0, 300.0), "Only the ball resets");
        assert_eq!(s.ball().vel, Vec2::new(4.0, 2.0) * 1.02);
    }

    #[test]
    fn test_speed_multiplier_counts_both_sides() {
        let mut s = session();
        s.start(0.0);

        score_for(&mut s, Side::Player, 1.0);
        score_for(&mut s, Side::Opponent, 2.0);
        score_for(&mut s, Side::Player, 3.0);

        assert_eq!(s.speed_multiplier(), 1.0 + 3.0 * 0.02);
    }

    #[test]
    fn test_opponent_win_records_ai_entry_and_returns_to_start() {
        let mut s = session();
        s.start(10.0);

        for i in 0..5 {
            score_for(&mut s, Side::Opponent, 10.0 + (i + 1) as f64);
        }

        assert_eq!(s.phase(), MatchPhase::StartScreen);
        assert_close(s.last_duration(), 5.0);
        assert_eq!(s.last_result(), Some(Winner::Ai));
        assert_eq!(s.leaderboard().len(), 1);
        let entry = &s.leaderboard().entries()[0];
        assert_eq!(entry.initials, "AI ");
        assert_eq!(entry.winner, Winner::Ai);
    }

    #[test]
    fn test_player_win_enters_name_entry() {
        let mut s = session();
        s.start(0.0);

        for i in 0..5 {
            score_for(&mut s, Side::Player, (i + 1) as f64);
        }

        assert_eq!(s.phase(), MatchPhase::NameEntry);
        assert_eq!(s.pending_initials(), "   ");
        assert_eq!(s.last_result(), Some(Winner::Player));
        assert!(s.leaderboard().is_empty(), "Nothing recorded until ENTER");
    }

    #[test]
    fn test_name_entry_keystrokes() {
        let mut s = win_as_player();

        s.push_char('j');
        s.push_char('1'); // ignored
        s.push_char('d');
        assert_eq!(s.pending_initials(), "JD ");

        s.push_char('x');
        s.push_char('y'); // board full, ignored
        assert_eq!(s.pending_initials(), "JDX");

        s.backspace();
        assert_eq!(s.pending_initials(), "JD ");

        s.backspace();
        s.backspace();
        s.backspace(); // already empty, ignored
        assert_eq!(s.pending_initials(), "   ");
    }

    #[test]
    fn test_submit_requires_at_least_one_char() {
        let mut s = win_as_player();

        s.submit_initials();
        assert_eq!(s.phase(), MatchPhase::NameEntry, "Empty initials stay put");

        s.push_char('q');
        s.submit_initials();

        assert_eq!(s.phase(), MatchPhase::StartScreen);
        let entry = &s.leaderboard().entries()[0];
        assert_eq!(entry.initials, "Q  ");
        assert_eq!(entry.winner, Winner::Player);
    }

    #[test]
    fn test_keystrokes_ignored_outside_name_entry() {
        let mut s = session();
        s.push_char('a');
        s.backspace();
        s.submit_initials();
        assert_eq!(s.phase(), MatchPhase::StartScreen);
        assert!(s.leaderboard().is_empty());
    }

    #[test]
    fn test_win_saves_leaderboard_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = MatchSession::new(Config::default(), dir.path().to_path_buf());
        s.start(0.0);
        for i in 0..5 {
            score_for(&mut s, Side::Opponent, (i + 1) as f64);
        }

        let text =
            std::fs::read_to_string(dir.path().join(crate::leaderboard::LEADERBOARD_FILE)).unwrap();
        assert_eq!(text, "5.000;A;AI \n");

        // A fresh session sees the persisted entry.
        let s2 = MatchSession::new(Config::default(), dir.path().to_path_buf());
        assert_eq!(s2.leaderboard().len(), 1);
    }

    #[test]
    fn test_start_only_valid_from_start_screen() {
        let mut s = session();
        s.start(0.0);
        score_for(&mut s, Side::Player, 1.0);

        s.start(50.0); // mid-match SPACE must not reset
        assert_eq!(s.score().player, 1);
        assert_eq!(s.speed_multiplier(), 1.02);
    }

    fn win_as_player() -> MatchSession {
        let mut s = session();
        s.start(0.0);
        for i in 0..5 {
            score_for(&mut s, Side::Player, (i + 1) as f64);
        }
        assert_eq!(s.phase(), MatchPhase::NameEntry);
        s
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }
}
