#![cfg(feature = "std")]
//! Single-writer task that owns one [`GameSession`].
//!
//! Chat handlers for the same channel may race; routing their calls through a
//! [`SessionHandle`] serialises them without locking the engine.

use std::string::String;

use tokio::sync::{mpsc, oneshot};

use crate::common::{GameError, GameResult, ParticipantId};
use crate::game::{GameSession, GameState, MoveResult, SessionSnapshot};

const QUEUE_DEPTH: usize = 32;

/// Async access to a running game.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn submit_move(&self, participant: ParticipantId, coordinate: String) -> GameResult<MoveResult>;
    async fn choose_ai_move(&self, participant: ParticipantId) -> GameResult<String>;
    async fn play_ai_turn(&self, participant: ParticipantId) -> GameResult<MoveResult>;
    async fn snapshot(&self, viewer: ParticipantId) -> GameResult<SessionSnapshot>;
    async fn state(&self) -> GameResult<GameState>;
}

enum Command {
    Submit {
        participant: ParticipantId,
        coordinate: String,
        reply: oneshot::Sender<GameResult<MoveResult>>,
    },
    Choose {
        participant: ParticipantId,
        reply: oneshot::Sender<GameResult<String>>,
    },
    PlayAi {
        participant: ParticipantId,
        reply: oneshot::Sender<GameResult<MoveResult>>,
    },
    Snapshot {
        viewer: ParticipantId,
        reply: oneshot::Sender<GameResult<SessionSnapshot>>,
    },
    State {
        reply: oneshot::Sender<GameState>,
    },
}

/// Cloneable handle to a session task. The task stops once every handle is dropped.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Command>,
}

/// Move `session` onto its own task and return a handle to it.
///
/// Must be called from within a tokio runtime; `tokio::spawn` panics otherwise.
pub fn spawn_session(session: GameSession) -> SessionHandle {
    let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
    tokio::spawn(run(session, rx));
    SessionHandle { tx }
}

async fn run(mut session: GameSession, mut rx: mpsc::Receiver<Command>) {
    let [a, b] = session.participants();
    log::debug!("session {} vs {} started", a, b);
    while let Some(cmd) = rx.recv().await {
        match cmd {
            Command::Submit { participant, coordinate, reply } => {
                let res = session.submit_text(participant, &coordinate);
                if let Ok(mv) = &res {
                    log::debug!("{} fired at {}: {:?}", participant, mv.coordinate, mv.outcome);
                }
                let _ = reply.send(res);
            }
            Command::Choose { participant, reply } => {
                let res = session.choose_ai_move(participant).map(|c| session.grid().format(c));
                let _ = reply.send(res);
            }
            Command::PlayAi { participant, reply } => {
                let res = session.play_ai_turn(participant);
                if let Ok(mv) = &res {
                    log::debug!("AI {} fired at {}: {:?}", participant, mv.coordinate, mv.outcome);
                }
                let _ = reply.send(res);
            }
            Command::Snapshot { viewer, reply } => {
                let _ = reply.send(session.snapshot(viewer));
            }
            Command::State { reply } => {
                let _ = reply.send(session.state());
            }
        }
    }
    log::debug!("session {} vs {} closed after {} moves", a, b, session.move_count());
}

impl SessionHandle {
    async fn request<T>(&self, cmd: Command, rx: oneshot::Receiver<T>) -> GameResult<T> {
        self.tx.send(cmd).await.map_err(|_| GameError::SessionClosed)?;
        rx.await.map_err(|_| GameError::SessionClosed)
    }
}

#[async_trait::async_trait]
impl GameApi for SessionHandle {
    async fn submit_move(&self, participant: ParticipantId, coordinate: String) -> GameResult<MoveResult> {
        let (reply, rx) = oneshot::channel();
        self.request(Command::Submit { participant, coordinate, reply }, rx).await?
    }

    async fn choose_ai_move(&self, participant: ParticipantId) -> GameResult<String> {
        let (reply, rx) = oneshot::channel();
        self.request(Command::Choose { participant, reply }, rx).await?
    }

    async fn play_ai_turn(&self, participant: ParticipantId) -> GameResult<MoveResult> {
        let (reply, rx) = oneshot::channel();
        self.request(Command::PlayAi { participant, reply }, rx).await?
    }

    async fn snapshot(&self, viewer: ParticipantId) -> GameResult<SessionSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.request(Command::Snapshot { viewer, reply }, rx).await?
    }

    async fn state(&self) -> GameResult<GameState> {
        let (reply, rx) = oneshot::channel();
        self.request(Command::State { reply }, rx).await
    }
}
