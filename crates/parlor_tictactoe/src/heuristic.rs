//! Move selection for the computer opponent.

use crate::position::Position;
use crate::types::{Board, Player, Square, WINNING_LINES};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

/// Returns the empty third square of a line the given player has
/// two marks on, if any.
fn at_risk_square(board: &Board, line: &[Position; 3], mark: Player) -> Option<Position> {
    let marked = line
        .iter()
        .filter(|&&pos| board.get(pos) == Square::Occupied(mark))
        .count();
    if marked != 2 {
        return None;
    }
    line.iter().copied().find(|&pos| board.is_empty(pos))
}

/// Chooses the computer's next move.
///
/// A fixed priority cascade:
///
/// 1. Complete any of the computer's own two-in-a-line threats.
/// 2. Block any of the human's two-in-a-line threats.
/// 3. Take the center square.
/// 4. Pick a uniformly random empty square.
///
/// Offense is exhausted across all 8 lines before defense is
/// consulted at all: with both a win and a block available, the
/// computer takes the win. Returns `None` only on a full board.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng>(
    board: &Board,
    computer: Player,
    human: Player,
    rng: &mut R,
) -> Option<Position> {
    // Offense: finish a line.
    for line in &WINNING_LINES {
        if let Some(pos) = at_risk_square(board, line, computer) {
            debug!(square = pos.number(), "completing own line");
            return Some(pos);
        }
    }

    // Defense: block the human's line.
    for line in &WINNING_LINES {
        if let Some(pos) = at_risk_square(board, line, human) {
            debug!(square = pos.number(), "blocking human line");
            return Some(pos);
        }
    }

    // Center.
    if board.is_empty(Position::Center) {
        debug!("taking center");
        return Some(Position::Center);
    }

    // Random fallback.
    board.empty_positions().choose(rng).copied()
}
