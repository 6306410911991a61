/// A finished football game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    host: String,
    away: String,
    score: Score,
}

/// A game's final score, host goals first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    host: u16,
    away: u16,
}

impl Game {
    /// Creates a new game between a host and an away team.
    ///
    /// # Examples
    ///
    /// ```
    /// use football::{Game, Score};
    /// let game = Game::new("Arsenal", "Chelsea", Score::new(2, 1));
    /// ```
    pub fn new(host: &str, away: &str, score: Score) -> Game {
        Game {
            host: host.to_string(),
            away: away.to_string(),
            score: score,
        }
    }

    /// Returns the host team's name.
    ///
    /// # Examples
    ///
    /// ```
    /// use football::{Game, Score};
    /// let game = Game::new("Arsenal", "Chelsea", Score::new(2, 1));
    /// assert_eq!("Arsenal", game.host());
    /// ```
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the away team's name.
    ///
    /// # Examples
    ///
    /// ```
    /// use football::{Game, Score};
    /// let game = Game::new("Arsenal", "Chelsea", Score::new(2, 1));
    /// assert_eq!("Chelsea", game.away());
    /// ```
    pub fn away(&self) -> &str {
        &self.away
    }

    /// Returns this game's final score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the league points a team took from this game.
    ///
    /// Three for a win, one for a draw, zero for a loss or for a team that
    /// did not play in this game. The win branch is checked before the draw
    /// branch, so a game whose two names are somehow equal never scores
    /// twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use football::{Game, Score};
    /// let game = Game::new("Arsenal", "Chelsea", Score::new(2, 1));
    /// assert_eq!(3, game.points_for("Arsenal"));
    /// assert_eq!(0, game.points_for("Chelsea"));
    /// assert_eq!(0, game.points_for("Liverpool"));
    /// ```
    pub fn points_for(&self, team: &str) -> u32 {
        if (self.host == team && self.score.host > self.score.away)
            || (self.away == team && self.score.host < self.score.away)
        {
            3
        } else if self.score.host == self.score.away && (self.host == team || self.away == team) {
            1
        } else {
            0
        }
    }
}

impl Score {
    /// Creates a new score from host and away goal counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use football::Score;
    /// let score = Score::new(2, 1);
    /// ```
    pub fn new(host: u16, away: u16) -> Score {
        Score {
            host: host,
            away: away,
        }
    }

    /// Returns the goals scored by the host team.
    pub fn host(&self) -> u16 {
        self.host
    }

    /// Returns the goals scored by the away team.
    pub fn away(&self) -> u16 {
        self.away
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_loss() {
        let game = Game::new("Arsenal", "Chelsea", Score::new(2, 1));
        assert_eq!(3, game.points_for("Arsenal"));
        assert_eq!(0, game.points_for("Chelsea"));

        let game = Game::new("Arsenal", "Chelsea", Score::new(0, 2));
        assert_eq!(0, game.points_for("Arsenal"));
        assert_eq!(3, game.points_for("Chelsea"));
    }

    #[test]
    fn draw_scores_one_for_either_side() {
        let game = Game::new("Arsenal", "Chelsea", Score::new(1, 1));
        assert_eq!(1, game.points_for("Arsenal"));
        assert_eq!(1, game.points_for("Chelsea"));
    }

    #[test]
    fn other_teams_score_nothing() {
        let game = Game::new("Arsenal", "Chelsea", Score::new(1, 1));
        assert_eq!(0, game.points_for("Liverpool"));
        let game = Game::new("Arsenal", "Chelsea", Score::new(2, 0));
        assert_eq!(0, game.points_for("Liverpool"));
    }

    #[test]
    fn same_name_on_both_sides() {
        let game = Game::new("Arsenal", "Arsenal", Score::new(2, 1));
        assert_eq!(3, game.points_for("Arsenal"));
        let game = Game::new("Arsenal", "Arsenal", Score::new(1, 1));
        assert_eq!(1, game.points_for("Arsenal"));
    }
}
