//! Text-level entry points used by the chat front end.
//!
//! These wrap [`GameSession`] so callers can work with `A1`-style strings and
//! never handle board internals.

use alloc::string::String;

use crate::common::{GameResult, ParticipantId};
use crate::game::{GameConfig, GameSession, MoveResult, SessionSnapshot};

/// Place both fleets and start a game.
pub fn create_game(config: GameConfig) -> GameResult<GameSession> {
    GameSession::create(config)
}

/// Fire `coordinate` (e.g. `"B7"`) on behalf of `participant`.
pub fn submit_move(session: &mut GameSession, participant: ParticipantId, coordinate: &str) -> GameResult<MoveResult> {
    session.submit_text(participant, coordinate)
}

/// Suggested shot for the AI seat, formatted for display.
pub fn choose_ai_move(session: &mut GameSession, participant: ParticipantId) -> GameResult<String> {
    let coord = session.choose_ai_move(participant)?;
    Ok(session.grid().format(coord))
}

/// Read-only view of the game for `viewer`.
pub fn render_snapshot(session: &GameSession, viewer: ParticipantId) -> GameResult<SessionSnapshot> {
    session.snapshot(viewer)
}
