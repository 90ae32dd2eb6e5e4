//! Two-board game session: turn order, move application and win detection.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ai::{AiConfig, TargetingAi};
use crate::board::{Board, GridSnapshot};
use crate::common::{GameError, GameResult, ParticipantId, ShotOutcome};
use crate::config::{BOARD_SIZE, SHIPS};
use crate::fleet::{Fleet, PlacementRules, PlacementStrategy};
use crate::grid::{Coordinate, Grid};
use crate::ship::Species;

/// Who decides a seat's shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai(AiConfig),
}

/// One side of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub id: ParticipantId,
    pub placement: PlacementStrategy,
    pub controller: Controller,
}

impl Seat {
    pub fn human(id: ParticipantId) -> Self {
        Self {
            id,
            placement: PlacementStrategy::Random,
            controller: Controller::Human,
        }
    }

    pub fn ai(id: ParticipantId, config: AiConfig) -> Self {
        Self {
            id,
            placement: PlacementStrategy::Random,
            controller: Controller::Ai(config),
        }
    }

    pub fn with_placement(mut self, placement: PlacementStrategy) -> Self {
        self.placement = placement;
        self
    }
}

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub species: Vec<Species>,
    pub rules: PlacementRules,
    pub seats: [Seat; 2],
    /// Participant moving first; defaults to the first seat.
    pub first: Option<ParticipantId>,
    /// Seeds random placement and the AI.
    pub seed: u64,
}

impl GameConfig {
    /// Standard 10×10 game with the five-ship fleet.
    pub fn new(first_seat: Seat, second_seat: Seat) -> Self {
        Self {
            board_size: BOARD_SIZE,
            species: SHIPS.to_vec(),
            rules: PlacementRules::default(),
            seats: [first_seat, second_seat],
            first: None,
            seed: 0,
        }
    }

    pub fn board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn species(mut self, species: Vec<Species>) -> Self {
        self.species = species;
        self
    }

    pub fn rules(mut self, rules: PlacementRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn first(mut self, id: ParticipantId) -> Self {
        self.first = Some(id);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    AwaitingMove(ParticipantId),
    Finished { winner: ParticipantId },
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Finished { .. })
    }
}

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MoveResult {
    pub shooter: ParticipantId,
    pub coordinate: Coordinate,
    pub outcome: ShotOutcome,
    pub state: GameState,
    /// 1-based count of accepted moves, this one included.
    pub move_number: u32,
}

impl MoveResult {
    /// The move ended the game.
    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }
}

/// Entry in a session's move log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameEvent {
    GameStarted { first: ParticipantId, second: ParticipantId },
    Shot { shooter: ParticipantId, coordinate: Coordinate, hit: bool },
    Sank { shooter: ParticipantId, species: Species, cells: Vec<Coordinate> },
    TurnPassed { next: ParticipantId },
    GameFinished { winner: ParticipantId },
}

/// Everything one participant may see.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SessionSnapshot {
    pub viewer: ParticipantId,
    /// Viewer's own board, ships revealed.
    pub own: GridSnapshot,
    /// Opponent board, shot outcomes only.
    pub opponent: GridSnapshot,
    pub state: GameState,
    pub moves: u32,
}

#[derive(Debug, Clone)]
struct Side {
    id: ParticipantId,
    board: Board,
    /// Present for AI seats; attacks the other side's board.
    ai: Option<TargetingAi>,
}

/// A running game between two participants.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    sides: [Side; 2],
    state: GameState,
    moves: u32,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Place both fleets and open the game.
    pub fn create(config: GameConfig) -> GameResult<Self> {
        let grid = Grid::new(config.board_size)?;
        let [a, b] = &config.seats;
        if a.id == b.id {
            return Err(GameError::DuplicateParticipant(b.id));
        }
        let first = config.first.unwrap_or(a.id);
        if first != a.id && first != b.id {
            return Err(GameError::UnknownParticipant(first));
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut build = |seat: &Seat| -> GameResult<Side> {
            let fleet = Fleet::place(grid, &config.species, &seat.placement, &config.rules, &mut rng)?;
            let ai = match seat.controller {
                Controller::Human => None,
                Controller::Ai(ai_config) => Some(TargetingAi::new(
                    ai_config.ships_may_touch(config.rules.allow_adjacent),
                    grid,
                    &config.species,
                    rng.random(),
                )),
            };
            Ok(Side {
                id: seat.id,
                board: Board::new(fleet),
                ai,
            })
        };
        let sides = [build(a)?, build(b)?];

        let second = if first == a.id { b.id } else { a.id };
        Ok(GameSession {
            grid,
            sides,
            state: GameState::AwaitingMove(first),
            moves: 0,
            events: alloc::vec![GameEvent::GameStarted { first, second }],
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Accepted moves so far.
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Chronological move log.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn participants(&self) -> [ParticipantId; 2] {
        [self.sides[0].id, self.sides[1].id]
    }

    pub fn winner(&self) -> Option<ParticipantId> {
        match self.state {
            GameState::Finished { winner } => Some(winner),
            GameState::AwaitingMove(_) => None,
        }
    }

    fn seat(&self, id: ParticipantId) -> GameResult<usize> {
        self.sides
            .iter()
            .position(|s| s.id == id)
            .ok_or(GameError::UnknownParticipant(id))
    }

    /// Board owned by `id`.
    pub fn board(&self, id: ParticipantId) -> GameResult<&Board> {
        Ok(&self.sides[self.seat(id)?].board)
    }

    /// Whether `id` is AI controlled.
    pub fn is_ai(&self, id: ParticipantId) -> GameResult<bool> {
        Ok(self.sides[self.seat(id)?].ai.is_some())
    }

    /// Fail unless `id` may move now.
    pub fn ensure_turn(&self, id: ParticipantId) -> GameResult<usize> {
        match self.state {
            GameState::Finished { .. } => Err(GameError::GameAlreadyFinished),
            GameState::AwaitingMove(current) => {
                let seat = self.seat(id)?;
                if current != id {
                    return Err(GameError::NotYourTurn { expected: current });
                }
                Ok(seat)
            }
        }
    }

    /// Fire at the opponent of `participant`.
    pub fn submit_move(&mut self, participant: ParticipantId, coord: Coordinate) -> GameResult<MoveResult> {
        let seat = self.ensure_turn(participant)?;
        let target = 1 - seat;
        let outcome = self.sides[target].board.receive_shot(coord)?;
        self.moves += 1;

        self.events.push(GameEvent::Shot {
            shooter: participant,
            coordinate: coord,
            hit: outcome.is_hit(),
        });
        if let ShotOutcome::Sunk { species, cells } = &outcome {
            self.events.push(GameEvent::Sank {
                shooter: participant,
                species: *species,
                cells: cells.clone(),
            });
        }

        if self.sides[target].board.is_defeated() {
            self.state = GameState::Finished { winner: participant };
            self.events.push(GameEvent::GameFinished { winner: participant });
        } else {
            let next = self.sides[target].id;
            self.state = GameState::AwaitingMove(next);
            self.events.push(GameEvent::TurnPassed { next });
        }

        Ok(MoveResult {
            shooter: participant,
            coordinate: coord,
            outcome,
            state: self.state,
            move_number: self.moves,
        })
    }

    /// Parse `text` and submit it. Turn checks run before parsing.
    pub fn submit_text(&mut self, participant: ParticipantId, text: &str) -> GameResult<MoveResult> {
        self.ensure_turn(participant)?;
        let coord = self.grid.parse(text)?;
        self.submit_move(participant, coord)
    }

    /// Ask the AI seated as `participant` for its next shot without firing it.
    pub fn choose_ai_move(&mut self, participant: ParticipantId) -> GameResult<Coordinate> {
        let seat = self.seat(participant)?;
        let (mine, theirs) = if seat == 0 {
            let (a, b) = self.sides.split_at_mut(1);
            (&mut a[0], &b[0])
        } else {
            let (a, b) = self.sides.split_at_mut(1);
            (&mut b[0], &a[0])
        };
        let ai = mine.ai.as_mut().ok_or(GameError::NotAiControlled(participant))?;
        if self.state.is_finished() || theirs.board.is_defeated() {
            return Err(GameError::NoCandidatesRemaining);
        }
        ai.choose(theirs.board.record())
    }

    /// Choose and fire the AI's shot in one step.
    pub fn play_ai_turn(&mut self, participant: ParticipantId) -> GameResult<MoveResult> {
        self.ensure_turn(participant)?;
        let coord = self.choose_ai_move(participant)?;
        self.submit_move(participant, coord)
    }

    /// What `viewer` may see of both boards.
    pub fn snapshot(&self, viewer: ParticipantId) -> GameResult<SessionSnapshot> {
        let seat = self.seat(viewer)?;
        Ok(SessionSnapshot {
            viewer,
            own: self.sides[seat].board.snapshot(true),
            opponent: self.sides[1 - seat].board.snapshot(false),
            state: self.state,
            moves: self.moves,
        })
    }
}
