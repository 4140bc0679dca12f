use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn total(&self) -> u8 {
        self.player + self.opponent
    }

    pub fn winner(&self, points_to_win: u8) -> Option<Side> {
        if self.player >= points_to_win {
            Some(Side::Player)
        } else if self.opponent >= points_to_win {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any_score(&self) -> bool {
        self.player_scored || self.opponent_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Player);
        score.increment(Side::Opponent);
        assert_eq!(score.player, 2);
        assert_eq!(score.opponent, 1);
        assert_eq!(score.total(), 3);
    }

    #[test]
    fn test_score_winner_player() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment(Side::Player);
        }
        assert_eq!(score.winner(5), Some(Side::Player), "Player wins at 5");
    }

    #[test]
    fn test_score_winner_opponent() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment(Side::Opponent);
        }
        assert_eq!(score.winner(5), Some(Side::Opponent), "Opponent wins at 5");
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let mut score = Score::new();
        for _ in 0..4 {
            score.increment(Side::Player);
        }
        assert_eq!(score.winner(5), None, "No winner below threshold");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.opponent_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.opponent_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.any_score());
    }
}
