//! A fleet plus the chronological record of shots fired at it.

use alloc::vec;
use alloc::vec::Vec;

use crate::cellset::Cells;
use crate::common::{GameError, GameResult, ShotOutcome};
use crate::fleet::Fleet;
use crate::grid::{Coordinate, Grid};

/// What a viewer sees in one cell of a rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// Not fired at, contents hidden from this viewer.
    Unknown,
    /// Not fired at, known to be open water (own board only).
    Empty,
    /// Intact ship segment (own board only).
    Ship,
    Miss,
    /// Struck segment of a ship still afloat.
    Hit,
    /// Segment of a sunk ship.
    Sunk,
}

/// Plain grid of cell views, indexed `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    pub size: usize,
    pub cells: Vec<Vec<CellView>>,
}

impl GridSnapshot {
    pub fn cell(&self, coord: Coordinate) -> Option<CellView> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }
}

/// Shots fired at one board, in the order they were fired.
#[derive(Debug, Clone)]
pub struct ShotRecord {
    grid: Grid,
    entries: Vec<(Coordinate, ShotOutcome)>,
    slots: Vec<Option<usize>>,
    tried: Cells,
    sunk: Cells,
}

impl ShotRecord {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            entries: Vec::new(),
            slots: vec![None; grid.cell_count()],
            tried: Cells::new(),
            sunk: Cells::new(),
        }
    }

    fn record(&mut self, coord: Coordinate, outcome: ShotOutcome) {
        if let ShotOutcome::Sunk { cells, .. } = &outcome {
            for &c in cells {
                let _ = self.sunk.insert(c);
            }
        }
        let _ = self.tried.insert(coord);
        self.slots[self.grid.index(coord)] = Some(self.entries.len());
        self.entries.push((coord, outcome));
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shots in chronological order.
    pub fn entries(&self) -> &[(Coordinate, ShotOutcome)] {
        &self.entries
    }

    /// Most recent shot.
    pub fn last(&self) -> Option<&(Coordinate, ShotOutcome)> {
        self.entries.last()
    }

    /// Outcome recorded at `coord`, `None` while untried.
    pub fn outcome_at(&self, coord: Coordinate) -> Option<&ShotOutcome> {
        if !self.grid.in_bounds(coord) {
            return None;
        }
        self.slots[self.grid.index(coord)].map(|i| &self.entries[i].1)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.tried.contains(coord)
    }

    /// Every cell fired at so far.
    pub fn tried(&self) -> Cells {
        self.tried
    }

    /// Cells belonging to ships reported sunk.
    pub fn sunk_cells(&self) -> Cells {
        self.sunk
    }

    /// What the shooter knows about `coord`.
    pub fn view(&self, coord: Coordinate) -> CellView {
        match self.outcome_at(coord) {
            None => CellView::Unknown,
            Some(ShotOutcome::Miss) => CellView::Miss,
            Some(_) if self.sunk.contains(coord) => CellView::Sunk,
            Some(_) => CellView::Hit,
        }
    }
}

/// One participant's ships and the shots taken at them.
#[derive(Debug, Clone)]
pub struct Board {
    fleet: Fleet,
    record: ShotRecord,
}

impl Board {
    pub fn new(fleet: Fleet) -> Self {
        let record = ShotRecord::new(fleet.grid());
        Board { fleet, record }
    }

    /// Resolve an incoming shot. The record grows by exactly one entry on success
    /// and is untouched on error.
    pub fn receive_shot(&mut self, coord: Coordinate) -> GameResult<ShotOutcome> {
        if !self.grid().in_bounds(coord) {
            return Err(GameError::OutOfBounds(coord));
        }
        if self.record.contains(coord) {
            return Err(GameError::DuplicateShot(coord));
        }
        let outcome = match self.fleet.strike(coord) {
            None => ShotOutcome::Miss,
            Some(ship) if ship.is_sunk() => ShotOutcome::Sunk {
                species: ship.species(),
                cells: ship.cells().to_vec(),
            },
            Some(_) => ShotOutcome::Hit,
        };
        self.record.record(coord, outcome.clone());
        Ok(outcome)
    }

    /// Every ship cell has been hit.
    pub fn is_defeated(&self) -> bool {
        self.fleet.all_sunk()
    }

    /// Cells not yet fired at.
    pub fn shots_remaining(&self) -> usize {
        self.grid().cell_count() - self.record.len()
    }

    /// Ship cells not yet hit.
    pub fn ship_cells_remaining(&self) -> usize {
        self.fleet.cells_remaining()
    }

    pub fn grid(&self) -> Grid {
        self.fleet.grid()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Shot history; this is all an opponent may inspect.
    pub fn record(&self) -> &ShotRecord {
        &self.record
    }

    /// Render the board for its owner (`reveal = true`) or for the opponent.
    pub fn snapshot(&self, reveal: bool) -> GridSnapshot {
        let size = self.grid().size();
        let cells = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| self.cell_view(Coordinate::new(row, col), reveal))
                    .collect()
            })
            .collect();
        GridSnapshot { size, cells }
    }

    fn cell_view(&self, coord: Coordinate, reveal: bool) -> CellView {
        if !reveal {
            return self.record.view(coord);
        }
        match (self.fleet.ship_at(coord), self.record.contains(coord)) {
            (None, false) => CellView::Empty,
            (None, true) => CellView::Miss,
            (Some(_), false) => CellView::Ship,
            (Some(ship), true) if ship.is_sunk() => CellView::Sunk,
            (Some(_), true) => CellView::Hit,
        }
    }
}
