//! Headless AI-vs-AI play: single games and alternating-side matches.

use serde::Serialize;
use tracing::{debug, info};

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{Board, GameOutcome, GameState, Player};

/// Result of playing a single game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Option<Player>,
    pub moves: Vec<usize>,
    pub final_board: Board,
}

impl GameRecord {
    pub fn game_length(&self) -> usize {
        self.moves.len()
    }
}

/// Play one game to completion; `first` moves as [`Player::One`].
pub fn play_game(first: &mut dyn Agent, second: &mut dyn Agent) -> Result<GameRecord, ArenaError> {
    let mut state = GameState::initial();
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };
        let action = agent
            .select_action(&state)
            .ok_or_else(|| ArenaError::NoMove {
                agent: agent.name().to_string(),
            })?;
        state = state
            .apply_move(action)
            .map_err(|_| ArenaError::IllegalAction {
                action,
                legal: state.legal_actions(),
            })?;
        debug!(player = player.name(), action, "move applied");
        moves.push(action);
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(p)) => Some(p),
        Some(GameOutcome::Draw) => None,
        None => return Err(ArenaError::MissingOutcome),
    };

    Ok(GameRecord {
        winner,
        moves,
        final_board: *state.board(),
    })
}

/// Win/draw tally for two agents across a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchStats {
    pub first_name: String,
    pub second_name: String,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub games: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new(first_name: &str, second_name: &str) -> Self {
        MatchStats {
            first_name: first_name.to_string(),
            second_name: second_name.to_string(),
            ..Default::default()
        }
    }

    /// Record a game in which the match's first agent played `first_side`.
    pub fn record(&mut self, record: &GameRecord, first_side: Player) {
        self.games += 1;
        self.total_moves += record.game_length();
        match record.winner {
            Some(p) if p == first_side => self.first_wins += 1,
            Some(_) => self.second_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn first_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.first_wins as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}

/// Play `games` games, swapping who moves first after every game.
pub fn run_match(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    games: usize,
) -> Result<MatchStats, ArenaError> {
    let mut stats = MatchStats::new(first.name(), second.name());

    for game in 0..games {
        let (record, first_side) = if game % 2 == 0 {
            (play_game(first, second)?, Player::One)
        } else {
            (play_game(second, first)?, Player::Two)
        };
        stats.record(&record, first_side);
        info!(
            game = game + 1,
            winner = record.winner.map(Player::name).unwrap_or("draw"),
            length = record.game_length(),
            "game finished"
        );
    }

    Ok(stats)
}
