use core::num::Saturating;
use core::ops::Index;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> Playing, only through a reset
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and reveals no longer change any cell.
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Square minesweeper board: owns every cell and the derived game state.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
    state: GameState,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    generation: u64,
    rng: SmallRng,
}

impl Board {
    /// Creates a randomly mined board, seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new(dimension: Coord, bomb_count: CellCount) -> Result<Self> {
        Ok(Self::with_config(BoardConfig::new(dimension, bomb_count)?))
    }

    #[cfg(feature = "std")]
    pub fn with_config(config: BoardConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Same seed and config always produce the same placements, including across resets.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = RandomMinefieldGenerator::new(&mut rng).generate(config);
        Self::build(&layout, rng)
    }

    /// Board with a fixed mine placement. Later resets are seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn from_layout(layout: &MineLayout) -> Self {
        Self::from_layout_with_seed(layout, rand::random())
    }

    /// Board with a fixed mine placement; `seed` drives the placements of later resets.
    pub fn from_layout_with_seed(layout: &MineLayout, seed: u64) -> Self {
        Self::build(layout, SmallRng::seed_from_u64(seed))
    }

    fn build(layout: &MineLayout, rng: SmallRng) -> Self {
        let mut board = Self {
            config: layout.board_config(),
            cells: Array2::default((0, 0)),
            state: GameState::Playing,
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            generation: 0,
            rng,
        };
        board.load_layout(layout);
        board
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn dimension(&self) -> Coord {
        self.config.dimension()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Bumped by every command that changed something a renderer would show.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged_count.0
    }

    pub fn mines_left(&self) -> isize {
        (self.bomb_count() as isize) - (self.flagged_count.0 as isize)
    }

    /// Cell at `coords`.
    ///
    /// # Panics
    ///
    /// If `coords` lies outside the board. Use [`Board::get`] for a checked lookup.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.index_of(coords)
            .map(|_| self.cells[coords.to_nd_index()])
    }

    /// Flat index `x + y * dimension`.
    pub fn index_of(&self, coords: Coord2) -> Option<usize> {
        flat_index(coords, self.dimension())
    }

    pub fn coords_of(&self, index: usize) -> Option<Coord2> {
        coords_of(index, self.dimension())
    }

    /// All cells with their coordinates, in flat index order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| ((x as Coord, y as Coord), cell))
    }

    /// Toggles a flag on a covered cell. Revealed cells and finished games are left alone.
    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;
        use Visibility::*;

        self.validate_coords(coords)?;
        if self.state.is_over() {
            return Ok(NoChange);
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        let outcome = match cell.visibility {
            Covered => {
                cell.visibility = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                cell.visibility = Covered;
                self.flagged_count -= 1;
                Changed
            }
            Visible => NoChange,
        };

        if outcome.has_update() {
            self.generation += 1;
            log::debug!("Toggled flag at {:?}, flags: {}", coords, self.flagged_count.0);
        }
        Ok(outcome)
    }

    /// Reveals a covered cell, flood-filling through cells with no adjacent bombs.
    ///
    /// Out of range coordinates are ignored. The game state is recomputed afterwards in every
    /// case.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let previous_state = self.state;

        let opened = if self.index_of(coords).is_none() {
            log::debug!("Ignoring reveal outside the board at {:?}", coords);
            0
        } else if self.state.is_over() {
            log::debug!("Ignoring reveal at {:?}, game is over", coords);
            0
        } else {
            self.flood_reveal(coords)
        };

        self.state = self.evaluate_state();

        if opened == 0 && self.state == previous_state {
            return RevealOutcome::NoChange;
        }

        self.generation += 1;
        log::debug!(
            "Revealed {} cell(s) from {:?}, state: {:?}",
            opened,
            coords,
            self.state
        );

        match self.state {
            GameState::Playing => RevealOutcome::Revealed,
            GameState::Won => RevealOutcome::Won,
            GameState::Lost => RevealOutcome::HitMine,
        }
    }

    /// Places new mines with the board's own RNG and covers every cell.
    pub fn reset(&mut self) {
        let layout = RandomMinefieldGenerator::new(&mut self.rng).generate(self.config);
        self.load_layout(&layout);
    }

    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
        self.reset();
    }

    fn load_layout(&mut self, layout: &MineLayout) {
        let side = usize::from(layout.dimension());

        self.cells = Array2::from_shape_fn((side, side), |(y, x)| {
            let coords = (x as Coord, y as Coord);
            if layout.contains_mine(coords) {
                Cell::covered(Contents::Bomb)
            } else {
                Cell::covered(Contents::Empty(layout.adjacent_mine_count(coords)))
            }
        });
        self.config = layout.board_config();
        self.state = GameState::Playing;
        self.revealed_count = Saturating(0);
        self.flagged_count = Saturating(0);
        self.generation += 1;

        log::debug!(
            "Board reset: {}x{} with {} bomb(s)",
            side,
            side,
            layout.mine_count()
        );
    }

    /// Opens `start` and everything reachable through zero-count cells. Only covered cells are
    /// ever opened, which also keeps each cell from being expanded twice.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit: SmallVec<[Coord2; 16]> = smallvec![start];

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if !cell.is_covered() {
                continue;
            }

            cell.visibility = Visibility::Visible;
            let contents = cell.contents;
            self.revealed_count += 1;
            opened += 1;
            log::trace!("Opened cell at {:?}: {:?}", coords, contents);

            if contents == Contents::Empty(0) {
                to_visit.extend(self.cells.iter_neighbors(coords));
            }
        }

        opened
    }

    /// Full scan: any visible bomb loses, otherwise every safe cell visible wins.
    fn evaluate_state(&self) -> GameState {
        let mut won = true;
        for cell in self.cells.iter() {
            match (cell.contents, cell.visibility) {
                (Contents::Bomb, Visibility::Visible) => return GameState::Lost,
                (Contents::Empty(_), Visibility::Covered | Visibility::Flagged) => won = false,
                _ => {}
            }
        }

        if won {
            GameState::Won
        } else {
            GameState::Playing
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.index_of(coords).is_some() {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
