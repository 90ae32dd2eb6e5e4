//! A participant's fleet and the procedures that lay it out.

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use crate::cellset::Cells;
use crate::common::{GameError, GameResult, PlacementViolation};
use crate::config::{PLACEMENT_ATTEMPTS_PER_SHIP, PLACEMENT_FLEET_RESTARTS};
use crate::grid::{Coordinate, Grid};
use crate::ship::{Orientation, Ship, Species};

/// How a fleet gets onto the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Sample origins and orientations at random.
    Random,
    /// Caller-supplied cells, one list per species in species order.
    Manual(Vec<Vec<Coordinate>>),
}

/// Constraints and limits applied while placing a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRules {
    /// Whether ships may sit orthogonally next to each other.
    pub allow_adjacent: bool,
    pub attempts_per_ship: usize,
    pub fleet_restarts: usize,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            allow_adjacent: false,
            attempts_per_ship: PLACEMENT_ATTEMPTS_PER_SHIP,
            fleet_restarts: PLACEMENT_FLEET_RESTARTS,
        }
    }
}

impl PlacementRules {
    pub fn allow_adjacent(mut self, allow: bool) -> Self {
        self.allow_adjacent = allow;
        self
    }
}

/// Ships of one participant. Layout is fixed once placed; only hits change.
#[derive(Debug, Clone)]
pub struct Fleet {
    grid: Grid,
    ships: Vec<Ship>,
    occupied: Cells,
    index: Vec<Option<usize>>,
}

impl Fleet {
    fn empty(grid: Grid) -> Self {
        Fleet {
            grid,
            ships: Vec::new(),
            occupied: Cells::new(),
            index: vec![None; grid.cell_count()],
        }
    }

    /// Place every species on `grid` using `strategy`.
    pub fn place<R: Rng + ?Sized>(
        grid: Grid,
        species: &[Species],
        strategy: &PlacementStrategy,
        rules: &PlacementRules,
        rng: &mut R,
    ) -> GameResult<Self> {
        if species.is_empty() {
            return Err(PlacementViolation::NoShips.into());
        }
        if let Some(s) = species.iter().find(|s| s.size() == 0) {
            return Err(PlacementViolation::ZeroLength { species: s.name() }.into());
        }
        match strategy {
            PlacementStrategy::Random => Self::place_random(grid, species, rules, rng),
            PlacementStrategy::Manual(layout) => Self::place_manual(grid, species, layout, rules),
        }
    }

    fn place_manual(
        grid: Grid,
        species: &[Species],
        layout: &[Vec<Coordinate>],
        rules: &PlacementRules,
    ) -> GameResult<Self> {
        if layout.len() != species.len() {
            return Err(PlacementViolation::ShipCount {
                expected: species.len(),
                found: layout.len(),
            }
            .into());
        }
        let mut fleet = Fleet::empty(grid);
        for (def, cells) in species.iter().zip(layout) {
            let ship = Ship::from_cells(*def, cells.clone(), &grid)?;
            fleet.add(ship, rules)?;
        }
        Ok(fleet)
    }

    fn place_random<R: Rng + ?Sized>(
        grid: Grid,
        species: &[Species],
        rules: &PlacementRules,
        rng: &mut R,
    ) -> GameResult<Self> {
        if let Some(s) = species.iter().find(|s| s.size() > grid.size()) {
            return Err(GameError::PlacementExhausted { species: s.name() });
        }
        let mut stuck = species[0].name();
        'restart: for _ in 0..=rules.fleet_restarts {
            let mut fleet = Fleet::empty(grid);
            for def in species {
                if !fleet.place_one_random(*def, rules, rng) {
                    stuck = def.name();
                    continue 'restart;
                }
            }
            return Ok(fleet);
        }
        Err(GameError::PlacementExhausted { species: stuck })
    }

    fn place_one_random<R: Rng + ?Sized>(
        &mut self,
        def: Species,
        rules: &PlacementRules,
        rng: &mut R,
    ) -> bool {
        let size = self.grid.size();
        for _ in 0..rules.attempts_per_ship {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (size - 1, size - def.size()),
                Orientation::Vertical => (size - def.size(), size - 1),
            };
            let origin = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let Ok(ship) = Ship::new(def, orient, origin, &self.grid) else {
                continue;
            };
            if self.add(ship, rules).is_ok() {
                return true;
            }
        }
        false
    }

    /// Add a ship if it respects overlap and adjacency rules.
    fn add(&mut self, ship: Ship, rules: &PlacementRules) -> Result<(), PlacementViolation> {
        let name = ship.species().name();
        if ship.mask().intersects(&self.occupied) {
            let cell = (ship.mask() & self.occupied).iter().next().unwrap_or(ship.cells()[0]);
            return Err(PlacementViolation::Overlap { species: name, cell });
        }
        if !rules.allow_adjacent {
            for &cell in ship.cells() {
                if let Some(n) = self.grid.neighbors(cell).into_iter().find(|n| self.occupied.contains(*n)) {
                    return Err(PlacementViolation::Adjacent { species: name, cell: n });
                }
            }
        }
        let slot = self.ships.len();
        for &cell in ship.cells() {
            self.index[self.grid.index(cell)] = Some(slot);
        }
        self.occupied |= ship.mask();
        self.ships.push(ship);
        Ok(())
    }

    /// Ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        if !self.grid.in_bounds(coord) {
            return None;
        }
        self.index[self.grid.index(coord)].map(|i| &self.ships[i])
    }

    /// Strike the ship at `coord`, returning it after the hit is recorded.
    pub(crate) fn strike(&mut self, coord: Coordinate) -> Option<&Ship> {
        if !self.grid.in_bounds(coord) {
            return None;
        }
        let slot = self.index[self.grid.index(coord)]?;
        let ship = &mut self.ships[slot];
        ship.strike(coord);
        Some(&*ship)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Union of every ship's cells.
    pub fn occupied(&self) -> Cells {
        self.occupied
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// True once every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Ship cells not yet hit.
    pub fn cells_remaining(&self) -> usize {
        self.ships
            .iter()
            .map(|s| s.cells().iter().filter(|c| !s.is_struck(**c)).count())
            .sum()
    }
}
