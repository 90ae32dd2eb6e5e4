//! Commonly used types and utilities for ease of import.

pub use crate::engine_api::{choose_ai_move, create_game, render_snapshot, submit_move};
pub use crate::{
    AiConfig, Coordinate, Difficulty, GameConfig, GameError, GameResult, GameSession, GameState,
    MoveResult, ParticipantId, PlacementRules, PlacementStrategy, Seat, ShotOutcome,
};

#[cfg(feature = "std")]
pub use crate::session::{spawn_session, GameApi, SessionHandle};
