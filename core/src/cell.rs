use serde::{Deserialize, Serialize};

/// What a cell holds. Fixed for the lifetime of one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contents {
    Bomb,
    /// Safe cell with the number of bombs among its neighbors.
    Empty(u8),
}

/// What the player has done to a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Covered,
    Flagged,
    Visible,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub contents: Contents,
    pub visibility: Visibility,
}

impl Cell {
    pub const fn covered(contents: Contents) -> Self {
        Self {
            contents,
            visibility: Visibility::Covered,
        }
    }

    pub const fn is_bomb(self) -> bool {
        matches!(self.contents, Contents::Bomb)
    }

    pub const fn is_covered(self) -> bool {
        matches!(self.visibility, Visibility::Covered)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.visibility, Visibility::Flagged)
    }

    pub const fn is_visible(self) -> bool {
        matches!(self.visibility, Visibility::Visible)
    }

    /// Adjacent bomb count, `None` for bombs.
    pub const fn adjacent_bombs(self) -> Option<u8> {
        match self.contents {
            Contents::Bomb => None,
            Contents::Empty(count) => Some(count),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::covered(Contents::Empty(0))
    }
}
