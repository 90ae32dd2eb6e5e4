//! Shot selection for AI-controlled participants.
//!
//! The AI only ever sees the opponent's [`ShotRecord`]. It folds new record
//! entries into its own state on every call, so it can be created mid-game and
//! stays consistent if the caller discards a suggestion without firing it.
//!
//! Smart play alternates between two modes. While hunting, it restricts itself
//! to one checkerboard parity class (every ship of length two or more covers a
//! cell of each class) and ranks candidates by how many legal placements of the
//! ships still afloat would cover them. Once a hit lands, it targets the
//! neighbours of live hits, narrowing to the in-line extensions as soon as two
//! hits share a row or column.

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::ShotRecord;
use crate::cellset::Cells;
use crate::common::{GameError, GameResult, ShotOutcome};
use crate::config::{EXHAUSTIVE_HUNT_THRESHOLD, HUNT_PARITY};
use crate::grid::{Coordinate, Grid};
use crate::ship::{Orientation, Species};

/// Strength of the AI opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Uniform over untried cells.
    Random,
    /// Uniform over untried cells of one parity class.
    Parity,
    /// Placement-count hunt with target mode.
    #[default]
    Smart,
}

/// Tunables for [`TargetingAi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// Parity class hunted first, `0` or `1`.
    pub parity: usize,
    /// Untried count at or below which hunting scores every open cell.
    pub exhaustive_threshold: usize,
    /// Mirror of the placement rule; when false, cells touching a sunk ship
    /// are known to be empty.
    pub ships_may_touch: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Smart,
            parity: HUNT_PARITY,
            exhaustive_threshold: EXHAUSTIVE_HUNT_THRESHOLD,
            ships_may_touch: false,
        }
    }
}

impl AiConfig {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn ships_may_touch(mut self, allow: bool) -> Self {
        self.ships_may_touch = allow;
        self
    }
}

/// Whether the AI is searching or finishing off a known ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    Hunt,
    Target,
}

/// What the AI has learned from the record so far.
#[derive(Debug, Clone)]
struct AiState {
    /// Record entries already folded in.
    seen: usize,
    tried: Cells,
    /// Cells no ship can occupy: misses, sunk ships and, when ships may not
    /// touch, their surroundings.
    blocked: Cells,
    /// Hits on ships not yet sunk, oldest first.
    live_hits: Vec<Coordinate>,
    /// Sizes of ships still afloat, one entry per ship.
    afloat: Vec<usize>,
    queue: VecDeque<Coordinate>,
}

/// Stateful shot chooser for one attacked board.
#[derive(Debug, Clone)]
pub struct TargetingAi {
    config: AiConfig,
    grid: Grid,
    rng: SmallRng,
    state: AiState,
}

impl TargetingAi {
    /// Create an AI that attacks a board of `grid` holding `species`.
    pub fn new(config: AiConfig, grid: Grid, species: &[Species], seed: u64) -> Self {
        Self {
            config,
            grid,
            rng: SmallRng::seed_from_u64(seed),
            state: AiState {
                seen: 0,
                tried: Cells::new(),
                blocked: Cells::new(),
                live_hits: Vec::new(),
                afloat: species.iter().map(Species::size).collect(),
                queue: VecDeque::new(),
            },
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Pick the next cell to fire at.
    pub fn choose(&mut self, record: &ShotRecord) -> GameResult<Coordinate> {
        self.sync(record);
        if self.state.afloat.is_empty() || self.state.tried.len() >= self.grid.cell_count() {
            return Err(GameError::NoCandidatesRemaining);
        }
        if self.mode() == AiMode::Target {
            if let Some(&next) = self.state.queue.front() {
                return Ok(next);
            }
        }
        let candidates = self.hunt_candidates_synced();
        let pick = match self.config.difficulty {
            Difficulty::Random | Difficulty::Parity => {
                candidates[self.rng.random_range(0..candidates.len())]
            }
            Difficulty::Smart => self.best_by_placement_count(&candidates),
        };
        Ok(pick)
    }

    /// Current mode after folding in `record`.
    pub fn mode_for(&mut self, record: &ShotRecord) -> AiMode {
        self.sync(record);
        self.mode()
    }

    /// Cells queued for target mode, front first.
    pub fn pending_targets(&mut self, record: &ShotRecord) -> Vec<Coordinate> {
        self.sync(record);
        self.state.queue.iter().copied().collect()
    }

    /// Candidate set hunting would choose from.
    pub fn hunt_candidates(&mut self, record: &ShotRecord) -> Vec<Coordinate> {
        self.sync(record);
        self.hunt_candidates_synced()
    }

    /// Per-cell placement counts, row-major over the grid.
    pub fn placement_counts(&mut self, record: &ShotRecord) -> Vec<usize> {
        self.sync(record);
        self.compute_placement_counts()
    }

    /// Sizes of ships the AI believes are still afloat, in species order.
    pub fn afloat(&self) -> &[usize] {
        &self.state.afloat
    }

    fn mode(&self) -> AiMode {
        if self.config.difficulty == Difficulty::Smart && !self.state.queue.is_empty() {
            AiMode::Target
        } else {
            AiMode::Hunt
        }
    }

    fn sync(&mut self, record: &ShotRecord) {
        let entries = record.entries();
        if self.state.seen >= entries.len() {
            return;
        }
        for (coord, outcome) in &entries[self.state.seen..] {
            self.observe(*coord, outcome);
        }
        self.state.seen = entries.len();
        self.state.queue = self.build_queue();
    }

    fn observe(&mut self, coord: Coordinate, outcome: &ShotOutcome) {
        let state = &mut self.state;
        let _ = state.tried.insert(coord);
        match outcome {
            ShotOutcome::Miss => {
                let _ = state.blocked.insert(coord);
            }
            ShotOutcome::Hit => state.live_hits.push(coord),
            ShotOutcome::Sunk { species, cells } => {
                if let Some(i) = state.afloat.iter().position(|&s| s == species.size()) {
                    state.afloat.remove(i);
                }
                state.live_hits.retain(|c| !cells.contains(c));
                state.queue.clear();
                for &cell in cells {
                    let _ = state.blocked.insert(cell);
                    if !self.config.ships_may_touch {
                        for n in self.grid.neighbors(cell) {
                            let _ = state.blocked.insert(n);
                        }
                    }
                }
            }
        }
    }

    fn is_open(&self, coord: Coordinate) -> bool {
        !self.state.tried.contains(coord) && !self.state.blocked.contains(coord)
    }

    fn build_queue(&self) -> VecDeque<Coordinate> {
        if self.config.difficulty != Difficulty::Smart || self.state.live_hits.is_empty() {
            return VecDeque::new();
        }
        let inline = self.inline_targets();
        if !inline.is_empty() {
            return inline;
        }
        let mut queue = VecDeque::new();
        for &hit in &self.state.live_hits {
            for n in self.grid.neighbors(hit) {
                if self.is_open(n) && !queue.contains(&n) {
                    queue.push_back(n);
                }
            }
        }
        queue
    }

    /// Open cells on the line through the oldest live hit and the hits that
    /// share its row (or column), one step past each end.
    fn inline_targets(&self) -> VecDeque<Coordinate> {
        let hits = &self.state.live_hits;
        let anchor = hits[0];
        let row_mates: Vec<usize> = hits.iter().filter(|h| h.row == anchor.row).map(|h| h.col).collect();
        let col_mates: Vec<usize> = hits.iter().filter(|h| h.col == anchor.col).map(|h| h.row).collect();

        let (orientation, along) = if row_mates.len() >= 2 {
            (Orientation::Horizontal, row_mates)
        } else if col_mates.len() >= 2 {
            (Orientation::Vertical, col_mates)
        } else {
            return VecDeque::new();
        };
        let lo = along.iter().min().copied().unwrap_or(0);
        let hi = along.iter().max().copied().unwrap_or(0);
        let start = lo.saturating_sub(1);
        let end = (hi + 1).min(self.grid.size() - 1);
        (start..=end)
            .map(|k| match orientation {
                Orientation::Horizontal => Coordinate::new(anchor.row, k),
                Orientation::Vertical => Coordinate::new(k, anchor.col),
            })
            .filter(|c| self.is_open(*c))
            .collect()
    }

    fn hunt_candidates_synced(&self) -> Vec<Coordinate> {
        let untried: Vec<Coordinate> = self
            .grid
            .cells()
            .filter(|c| !self.state.tried.contains(*c))
            .collect();
        if self.config.difficulty == Difficulty::Random {
            return untried;
        }
        let exhaustive = self.config.difficulty == Difficulty::Smart
            && untried.len() <= self.config.exhaustive_threshold;
        let open: Vec<Coordinate> = untried.iter().copied().filter(|c| self.is_open(*c)).collect();
        let base = if open.is_empty() { untried } else { open };
        if exhaustive {
            return base;
        }
        let parity: Vec<Coordinate> = base
            .iter()
            .copied()
            .filter(|c| c.parity() == self.config.parity)
            .collect();
        if parity.is_empty() {
            base
        } else {
            parity
        }
    }

    fn compute_placement_counts(&self) -> Vec<usize> {
        let size = self.grid.size();
        let mut counts = vec![0usize; self.grid.cell_count()];
        let mut sizes: Vec<(usize, usize)> = Vec::new();
        for &len in &self.state.afloat {
            match sizes.iter_mut().find(|(l, _)| *l == len) {
                Some((_, n)) => *n += 1,
                None => sizes.push((len, 1)),
            }
        }
        for (len, weight) in sizes {
            if len == 0 || len > size {
                continue;
            }
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let (rows, cols) = match orientation {
                    Orientation::Horizontal => (size, size - len + 1),
                    Orientation::Vertical => (size - len + 1, size),
                };
                for r in 0..rows {
                    for c in 0..cols {
                        let origin = Coordinate::new(r, c);
                        let legal = (0..len)
                            .all(|k| !self.state.blocked.contains(orientation.step(origin, k)));
                        if !legal {
                            continue;
                        }
                        for k in 0..len {
                            let cell = orientation.step(origin, k);
                            if !self.state.tried.contains(cell) {
                                counts[self.grid.index(cell)] += weight;
                            }
                        }
                    }
                }
            }
        }
        counts
    }

    /// Highest placement count wins; ties go to the lowest coordinate.
    fn best_by_placement_count(&self, candidates: &[Coordinate]) -> Coordinate {
        let counts = self.compute_placement_counts();
        let mut best = candidates[0];
        let mut best_count = counts[self.grid.index(best)];
        for &c in &candidates[1..] {
            let n = counts[self.grid.index(c)];
            if n > best_count || (n == best_count && c < best) {
                best = c;
                best_count = n;
            }
        }
        best
    }
}
