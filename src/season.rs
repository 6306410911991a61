use super::{Error, Game, Score};
use regex::Regex;
use std::path::Path;
use std::str::FromStr;

/// A season of football results.
///
/// A season is read from a plain-text stats file with one finished match per
/// line:
///
/// ```text
/// Arsenal - Chelsea 2:1
/// ```
///
/// The host team comes before the first ` - `, the away team runs up to the
/// next space, and the rest of the line is the score. Host names may contain
/// spaces; away names cannot, since the first space after the ` - ` ends
/// them.
#[derive(Debug)]
pub struct Season {
    games: Vec<Game>,
}

impl Season {
    /// Reads a season from a path on the filesystem.
    ///
    /// The whole file is read into memory before any line is parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use football::Season;
    /// let season = Season::from_path("tests/data/epl.txt").unwrap();
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Season, failure::Error> {
        use failure::ResultExt;
        use std::fs;

        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|_| format!("could not read stats file: {}", path.display()))?;
        let season: Season = contents.parse()?;
        debug!("read {} games from {}", season.games.len(), path.display());
        Ok(season)
    }

    /// Returns this season's games as a slice, in file order.
    ///
    /// # Examples
    ///
    /// ```
    /// use football::Season;
    /// let season = Season::from_path("tests/data/epl.txt").unwrap();
    /// assert_eq!(18, season.games().len());
    /// ```
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Returns the total league points a team earned over this season.
    ///
    /// Teams that never appear in the season total zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use football::Season;
    /// let season = Season::from_path("tests/data/epl.txt").unwrap();
    /// assert_eq!(7, season.points("Liverpool"));
    /// assert_eq!(0, season.points("Leeds United"));
    /// ```
    pub fn points(&self, team: &str) -> u32 {
        self.games.iter().map(|game| game.points_for(team)).sum()
    }
}

impl FromStr for Season {
    type Err = Error;

    /// Parses a season from newline-separated result lines.
    ///
    /// Zero-length lines are skipped, so a trailing newline is harmless. A
    /// line of only whitespace is not zero-length and fails parsing like any
    /// other malformed line.
    ///
    /// # Examples
    ///
    /// ```
    /// use football::Season;
    /// let season: Season = "Arsenal - Chelsea 2:1".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Season, Error> {
        // The lazy host capture splits at the first ` - `, and the away
        // capture cannot cross a space, so the score capture starts right
        // after the first space following the away name.
        let game_regex = Regex::new(r"^(?P<host>.*?) - (?P<away>[^ ]*) (?P<score>.*)$").unwrap();
        let mut games = Vec::new();
        for line in s.split('\n') {
            if line.is_empty() {
                continue;
            }
            let captures = game_regex
                .captures(line)
                .ok_or_else(|| Error::InvalidResultLine(line.to_string()))?;
            let score = parse_score(&captures["score"])
                .ok_or_else(|| Error::InvalidResultLine(line.to_string()))?;
            games.push(Game::new(&captures["host"], &captures["away"], score));
        }
        Ok(Season { games: games })
    }
}

fn parse_score(s: &str) -> Option<Score> {
    let mut goals = s.split(':');
    let host = goals.next()?.parse().ok()?;
    let away = goals.next()?.parse().ok()?;
    if goals.next().is_some() {
        return None;
    }
    Some(Score::new(host, away))
}
