//! Match-level scorekeeping.
//!
//! The match is an explicit value the orchestration layer threads
//! through its round loop: no globals, no I/O, just scores and the
//! round counter.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rounds needed to win a match.
pub const POINTS_TO_WIN: u8 = 5;

/// Side-neutral identity of a match contender.
///
/// The human is `Human` in both games; `Opponent` is the computer
/// at the tic-tac-toe board and the dealer at the card table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contender {
    /// The human player.
    Human,
    /// The computer or dealer.
    Opponent,
}

/// What one finished round contributes to the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// The round was won by a contender.
    Won(Contender),
    /// The round was drawn or tied; nobody scores.
    Tied,
}

impl RoundResult {
    /// Maps a finished tic-tac-toe round into a match result.
    ///
    /// `human` names the mark the human plays, so either seat
    /// assignment scores correctly. Returns `None` while the round
    /// is still in progress.
    pub fn from_board(status: parlor_tictactoe::GameStatus, human: parlor_tictactoe::Player) -> Option<Self> {
        match status {
            parlor_tictactoe::GameStatus::InProgress => None,
            parlor_tictactoe::GameStatus::Draw => Some(RoundResult::Tied),
            parlor_tictactoe::GameStatus::Won(mark) if mark == human => {
                Some(RoundResult::Won(Contender::Human))
            }
            parlor_tictactoe::GameStatus::Won(_) => Some(RoundResult::Won(Contender::Opponent)),
        }
    }
}

impl From<parlor_twentyone::RoundWinner> for RoundResult {
    fn from(winner: parlor_twentyone::RoundWinner) -> Self {
        match winner {
            parlor_twentyone::RoundWinner::Player => RoundResult::Won(Contender::Human),
            parlor_twentyone::RoundWinner::Dealer => RoundResult::Won(Contender::Opponent),
            parlor_twentyone::RoundWinner::Tie => RoundResult::Tied,
        }
    }
}

/// Running score of a match, first to [`POINTS_TO_WIN`] rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    human_points: u8,
    opponent_points: u8,
    round: u32,
    points_to_win: u8,
}

impl MatchState {
    /// Starts a match to the standard 5-point threshold.
    pub fn new() -> Self {
        Self::to_points(POINTS_TO_WIN)
    }

    /// Starts a match to a custom threshold.
    pub fn to_points(points_to_win: u8) -> Self {
        Self {
            human_points: 0,
            opponent_points: 0,
            round: 1,
            points_to_win,
        }
    }

    /// Current round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Points held by a contender.
    pub fn points(&self, contender: Contender) -> u8 {
        match contender {
            Contender::Human => self.human_points,
            Contender::Opponent => self.opponent_points,
        }
    }

    /// Records a finished round and advances to the next.
    ///
    /// Ties advance the round without scoring. Recording after a
    /// champion exists is a caller bug but harmless; the champion
    /// is whoever reached the threshold first.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Won(Contender::Human) => self.human_points += 1,
            RoundResult::Won(Contender::Opponent) => self.opponent_points += 1,
            RoundResult::Tied => {}
        }
        self.round += 1;
    }

    /// The contender that reached the threshold, if any.
    pub fn champion(&self) -> Option<Contender> {
        if self.human_points >= self.points_to_win {
            Some(Contender::Human)
        } else if self.opponent_points >= self.points_to_win {
            Some(Contender::Opponent)
        } else {
            None
        }
    }

    /// True iff the match has a champion.
    pub fn is_over(&self) -> bool {
        self.champion().is_some()
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
