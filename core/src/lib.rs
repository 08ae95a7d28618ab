//! Minesweeper board engine.
//!
//! A [`Board`] owns a square grid of [`Cell`]s, places mines with an unbiased shuffle,
//! precomputes adjacency counts, and runs reveal/flag commands. [`GameState`] is derived from
//! the visible cells after every reveal. Presentation layers observe changes through the
//! returned [`RevealOutcome`]/[`MarkOutcome`] or by polling [`Board::generation`].

#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;
mod view;

/// Validated board size and mine count.
///
/// Every value of this type satisfies `dimension >= 1` and `mines <= dimension²`, including
/// deserialized ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    dimension: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawBoardConfig {
    dimension: Coord,
    mines: CellCount,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = GameError;

    fn try_from(raw: RawBoardConfig) -> Result<Self> {
        Self::new(raw.dimension, raw.mines)
    }
}

impl BoardConfig {
    pub fn new(dimension: Coord, mines: CellCount) -> Result<Self> {
        if dimension == 0 {
            return Err(GameError::InvalidDimension);
        }
        if mines > square(dimension) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self { dimension, mines })
    }

    pub const fn beginner() -> Self {
        Self {
            dimension: 9,
            mines: 10,
        }
    }

    pub const fn intermediate() -> Self {
        Self {
            dimension: 16,
            mines: 40,
        }
    }

    pub const fn dimension(&self) -> Coord {
        self.dimension
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.dimension)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            dimension: 8,
            mines: 10,
        }
    }
}

/// Where the mines are on a square board.
///
/// Always square with a side in `1..=Coord::MAX`, and `mine_count` always matches the mask,
/// including for deserialized values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMineLayout")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct RawMineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl TryFrom<RawMineLayout> for MineLayout {
    type Error = GameError;

    fn try_from(raw: RawMineLayout) -> Result<Self> {
        let layout = Self::from_mask(raw.mine_mask)?;
        if layout.mine_count != raw.mine_count {
            return Err(GameError::MineCountMismatch);
        }
        Ok(layout)
    }
}

impl MineLayout {
    /// Checks the mask shape and counts its mines.
    pub fn from_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows != cols || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        if rows == 0 {
            return Err(GameError::InvalidDimension);
        }
        Ok(Self::from_mine_mask(mine_mask))
    }

    /// Caller guarantees a square mask of a valid side.
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        // a valid side has at most 255² cells
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout with mines exactly at `mine_coords`; duplicates count once.
    pub fn from_mine_coords(dimension: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if dimension == 0 {
            return Err(GameError::InvalidDimension);
        }

        let side = usize::from(dimension);
        let mut mine_mask: Array2<bool> = Array2::default((side, side));

        for &coords in mine_coords {
            if coords.0 >= dimension || coords.1 >= dimension {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            dimension: self.dimension(),
            mines: self.mine_count,
        }
    }

    pub fn dimension(&self) -> Coord {
        self.mine_mask.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Result of a reveal, named after the state it left the board in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_dimension() {
        assert_eq!(BoardConfig::new(0, 0), Err(GameError::InvalidDimension));
    }

    #[test]
    fn config_rejects_too_many_mines() {
        assert_eq!(BoardConfig::new(3, 10), Err(GameError::TooManyMines));
        assert!(BoardConfig::new(3, 9).is_ok());
    }

    #[test]
    fn config_counts_cells() {
        let config = BoardConfig::new(4, 3).unwrap();
        assert_eq!(config.total_cells(), 16);
        assert_eq!(config.safe_cells(), 13);
    }

    #[test]
    fn largest_board_fits_cell_count() {
        let config = BoardConfig::new(Coord::MAX, square(Coord::MAX)).unwrap();
        assert_eq!(config.total_cells(), 65025);
        assert_eq!(config.safe_cells(), 0);
    }

    #[test]
    fn layout_from_coords_counts_neighbors() {
        let layout = MineLayout::from_mine_coords(3, &[(0, 0), (2, 0), (0, 0)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.dimension(), 3);
        assert!(layout.contains_mine((2, 0)));
        assert!(!layout.contains_mine((0, 2)));
        assert_eq!(layout.adjacent_mine_count((1, 0)), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 0);
    }

    #[test]
    fn layout_rejects_out_of_range_mines() {
        assert_eq!(
            MineLayout::from_mine_coords(2, &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            MineLayout::from_mine_coords(0, &[]),
            Err(GameError::InvalidDimension)
        );
    }

    #[test]
    fn layout_reports_its_config() {
        let layout = MineLayout::from_mine_coords(5, &[(4, 4)]).unwrap();
        assert_eq!(layout.board_config(), BoardConfig::new(5, 1).unwrap());
    }

    #[test]
    fn layout_from_mask_checks_shape() {
        let mask = Array2::from_shape_vec((2, 2), alloc::vec![true, false, false, true]).unwrap();
        assert_eq!(MineLayout::from_mask(mask).unwrap().mine_count(), 2);

        let wide: Array2<bool> = Array2::default((1, 4));
        assert_eq!(MineLayout::from_mask(wide), Err(GameError::InvalidBoardShape));

        let empty: Array2<bool> = Array2::default((0, 0));
        assert_eq!(MineLayout::from_mask(empty), Err(GameError::InvalidDimension));

        let huge: Array2<bool> = Array2::default((256, 256));
        assert_eq!(MineLayout::from_mask(huge), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn outcomes_report_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::HitMine.has_update());
        assert!(MarkOutcome::Changed.has_update());
        assert!(!MarkOutcome::NoChange.has_update());
    }
}
