//! Common types for the engine: participant ids, shot outcomes and errors.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::cellset::CellSetError;
use crate::grid::Coordinate;
use crate::ship::Species;

/// Opaque identifier of one of the two participants (e.g. a chat user id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a shot against a board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// Shot hit open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk { species: Species, cells: Vec<Coordinate> },
}

impl ShotOutcome {
    /// True for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotOutcome::Sunk { .. })
    }
}

/// Rule broken by a ship placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementViolation {
    /// The species list was empty.
    NoShips,
    /// A species of size zero was requested.
    ZeroLength { species: &'static str },
    /// Manual placement supplied the wrong number of ships.
    ShipCount { expected: usize, found: usize },
    /// A ship's cell count does not match its species.
    WrongLength { species: &'static str, expected: usize, found: usize },
    /// A ship lists the same cell twice.
    RepeatedCell { species: &'static str, cell: Coordinate },
    /// A ship's cells are not one straight, gap-free line.
    NotStraight { species: &'static str },
    /// A ship cell lies outside the grid.
    OutOfBounds { species: &'static str, cell: Coordinate },
    /// A ship shares a cell with an earlier ship.
    Overlap { species: &'static str, cell: Coordinate },
    /// A ship touches an earlier ship while touching is disallowed.
    Adjacent { species: &'static str, cell: Coordinate },
}

impl fmt::Display for PlacementViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementViolation::NoShips => write!(f, "the fleet has no ships"),
            PlacementViolation::ZeroLength { species } => {
                write!(f, "{} has zero length", species)
            }
            PlacementViolation::ShipCount { expected, found } => {
                write!(f, "expected {} ships, found {}", expected, found)
            }
            PlacementViolation::WrongLength { species, expected, found } => write!(
                f,
                "{} must occupy {} cells, found {}",
                species, expected, found
            ),
            PlacementViolation::RepeatedCell { species, cell } => {
                write!(f, "{} lists {} more than once", species, cell)
            }
            PlacementViolation::NotStraight { species } => {
                write!(f, "{} is not a straight contiguous line", species)
            }
            PlacementViolation::OutOfBounds { species, cell } => {
                write!(f, "{} leaves the board at {}", species, cell)
            }
            PlacementViolation::Overlap { species, cell } => {
                write!(f, "{} overlaps another ship at {}", species, cell)
            }
            PlacementViolation::Adjacent { species, cell } => {
                write!(f, "{} touches another ship at {}", species, cell)
            }
        }
    }
}

/// Broad category of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad coordinates, placements or sizes supplied by the caller.
    Input,
    /// A call made at the wrong time or by the wrong participant.
    Sequencing,
    /// The engine ran out of options (placements, candidates, a live session).
    Resource,
}

/// Errors returned by engine operations. None of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board size outside the supported range.
    InvalidBoardSize { size: usize },
    /// Text could not be parsed as a coordinate on this grid.
    InvalidCoordinate(String),
    /// Coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// The coordinate was already fired at on this board.
    DuplicateShot(Coordinate),
    /// Ship placement broke a fleet rule.
    InvalidPlacement(PlacementViolation),
    /// Random placement could not fit the named species.
    PlacementExhausted { species: &'static str },
    /// Participant tried to move out of turn.
    NotYourTurn { expected: ParticipantId },
    /// The game is over; no further moves are accepted.
    GameAlreadyFinished,
    /// Both seats were given the same participant.
    DuplicateParticipant(ParticipantId),
    /// The participant is not seated in this game.
    UnknownParticipant(ParticipantId),
    /// The participant is not controlled by the AI.
    NotAiControlled(ParticipantId),
    /// Nothing is left to fire at.
    NoCandidatesRemaining,
    /// The task owning the session has stopped.
    SessionClosed,
}

/// Convenience alias used across the engine.
pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidBoardSize { .. }
            | GameError::InvalidCoordinate(_)
            | GameError::OutOfBounds(_)
            | GameError::DuplicateShot(_)
            | GameError::InvalidPlacement(_)
            | GameError::DuplicateParticipant(_) => ErrorKind::Input,
            GameError::NotYourTurn { .. }
            | GameError::GameAlreadyFinished
            | GameError::UnknownParticipant(_)
            | GameError::NotAiControlled(_) => ErrorKind::Sequencing,
            GameError::PlacementExhausted { .. }
            | GameError::NoCandidatesRemaining
            | GameError::SessionClosed => ErrorKind::Resource,
        }
    }
}

impl From<PlacementViolation> for GameError {
    fn from(v: PlacementViolation) -> Self {
        GameError::InvalidPlacement(v)
    }
}

impl From<CellSetError> for GameError {
    fn from(err: CellSetError) -> Self {
        match err {
            CellSetError::OutOfRange(c) => GameError::OutOfBounds(c),
            CellSetError::SizeTooLarge { n, .. } => GameError::InvalidBoardSize { size: n },
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidBoardSize { size } => write!(f, "Unsupported board size {}", size),
            GameError::InvalidCoordinate(text) => write!(f, "Invalid coordinate {:?}", text),
            GameError::OutOfBounds(c) => {
                write!(f, "Coordinate ({}, {}) is off the board", c.row, c.col)
            }
            GameError::DuplicateShot(c) => write!(f, "{} was already fired at", c),
            GameError::InvalidPlacement(v) => write!(f, "Invalid placement: {}", v),
            GameError::PlacementExhausted { species } => {
                write!(f, "No room left on the board for {}", species)
            }
            GameError::NotYourTurn { expected } => {
                write!(f, "Not your turn, waiting on participant {}", expected)
            }
            GameError::GameAlreadyFinished => write!(f, "The game is already finished"),
            GameError::DuplicateParticipant(id) => {
                write!(f, "Participant {} cannot play against themselves", id)
            }
            GameError::UnknownParticipant(id) => write!(f, "Participant {} is not in this game", id),
            GameError::NotAiControlled(id) => write!(f, "Participant {} is not an AI player", id),
            GameError::NoCandidatesRemaining => write!(f, "No untried cells remain"),
            GameError::SessionClosed => write!(f, "The game session has stopped"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
