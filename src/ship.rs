//! Ship species and placed ships, with hits tracked in a [`Cells`] set.

use alloc::vec::Vec;
use core::fmt;

use crate::cellset::Cells;
use crate::common::{GameResult, PlacementViolation};
use crate::grid::{Coordinate, Grid};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell `k` steps from `origin` along this orientation.
    pub fn step(self, origin: Coordinate, k: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(origin.row, origin.col + k),
            Orientation::Vertical => Coordinate::new(origin.row + k, origin.col),
        }
    }
}

/// Type of ship: display name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Species {
    name: &'static str,
    size: usize,
}

impl Species {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells a ship of this species occupies.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// A ship placed on the grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    species: Species,
    cells: Vec<Coordinate>,
    mask: Cells,
    struck: Cells,
}

impl Ship {
    /// Lay a ship out from `origin` in `orientation`.
    pub fn new(
        species: Species,
        orientation: Orientation,
        origin: Coordinate,
        grid: &Grid,
    ) -> GameResult<Self> {
        let cells = (0..species.size())
            .map(|k| orientation.step(origin, k))
            .collect();
        Self::from_cells(species, cells, grid)
    }

    /// Build a ship from explicit cells, checking length, bounds and shape.
    /// Cells are stored sorted, so any input order is accepted.
    pub fn from_cells(species: Species, mut cells: Vec<Coordinate>, grid: &Grid) -> GameResult<Self> {
        let name = species.name();
        if species.size() == 0 {
            return Err(PlacementViolation::ZeroLength { species: name }.into());
        }
        if cells.len() != species.size() {
            return Err(PlacementViolation::WrongLength {
                species: name,
                expected: species.size(),
                found: cells.len(),
            }
            .into());
        }
        if let Some(&cell) = cells.iter().find(|c| !grid.in_bounds(**c)) {
            return Err(PlacementViolation::OutOfBounds { species: name, cell }.into());
        }
        cells.sort();
        if let Some(pair) = cells.windows(2).find(|w| w[0] == w[1]) {
            return Err(PlacementViolation::RepeatedCell { species: name, cell: pair[0] }.into());
        }
        let first = cells[0];
        let horizontal = cells
            .iter()
            .enumerate()
            .all(|(k, c)| c.row == first.row && c.col == first.col + k);
        let vertical = cells
            .iter()
            .enumerate()
            .all(|(k, c)| c.col == first.col && c.row == first.row + k);
        if !horizontal && !vertical {
            return Err(PlacementViolation::NotStraight { species: name }.into());
        }

        let mask = Cells::from_cells(cells.iter().copied())?;
        Ok(Ship {
            species,
            cells,
            mask,
            struck: Cells::new(),
        })
    }

    /// Record a hit at `coord`; returns `true` if the ship occupies it.
    pub fn strike(&mut self, coord: Coordinate) -> bool {
        if self.mask.contains(coord) {
            let _ = self.struck.insert(coord);
            true
        } else {
            false
        }
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.struck.len() == self.species.size()
    }

    pub fn species(&self) -> Species {
        self.species
    }

    /// Occupied cells, sorted row-major.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.mask.contains(coord)
    }

    pub fn is_struck(&self, coord: Coordinate) -> bool {
        self.struck.contains(coord)
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> Cells {
        self.mask
    }

    /// Orientation, `None` for single-cell ships.
    pub fn orientation(&self) -> Option<Orientation> {
        match self.cells.as_slice() {
            [a, b, ..] if a.row == b.row => Some(Orientation::Horizontal),
            [_, _, ..] => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", cells: {:?}, hits: {} }}",
            self.species.name(),
            self.cells,
            self.struck.len(),
        )
    }
}
