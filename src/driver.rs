//! Runs a complete match between two agents.

use alloc::string::String;

use log::info;
use rand::rngs::SmallRng;

use crate::{
    agent::Agent,
    common::GameError,
    game::{Game, MoveOutcome},
    player::Side,
};

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    pub winner: Side,
    pub winner_name: String,
    pub moves: usize,
    /// Hits landed by each side, indexed `[First, Second]`.
    pub hits: [usize; 2],
    /// Shots fired by each side, indexed `[First, Second]`.
    pub shots: [usize; 2],
}

/// Let both agents place their fleets, then alternate their shots through
/// `game` until it ends or `max_moves` resolved moves have been made.
pub fn play_match(
    game: &mut Game,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    rng: &mut SmallRng,
    max_moves: usize,
) -> Result<MatchReport, GameError> {
    let mut agents: [&mut dyn Agent; 2] = [first, second];
    for side in Side::BOTH {
        agents[side.index()].place_fleet(rng, game, side)?;
    }

    let mut hits = [0usize; 2];
    let mut shots = [0usize; 2];
    while game.is_game_in_progress() {
        if game.moves_made() >= max_moves {
            return Err(GameError::MoveLimitExceeded { limit: max_moves });
        }
        let side = game.current_side();
        let agent = &mut agents[side.index()];
        let Some(coord) = agent.select_target(rng, game, side) else {
            return Err(GameError::MoveLimitExceeded { limit: max_moves });
        };
        let outcome = game.fire(coord.0, coord.1)?;
        agent.handle_outcome(coord, outcome);
        if let MoveOutcome::Resolved(result) = outcome {
            shots[side.index()] += 1;
            if result.is_hit() {
                hits[side.index()] += 1;
            }
        }
    }

    let winner = game
        .winning_side()
        .ok_or(GameError::MoveLimitExceeded { limit: max_moves })?;
    let report = MatchReport {
        winner,
        winner_name: game.player(winner).name().into(),
        moves: game.moves_made(),
        hits,
        shots,
    };
    info!(
        "match over: {} won in {} moves",
        report.winner_name, report.moves
    );
    Ok(report)
}
