use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer draws inside a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Blank,
    Flag,
    Bomb,
    Count(u8),
}

impl Glyph {
    fn of_contents(contents: Contents) -> Self {
        match contents {
            Contents::Bomb => Self::Bomb,
            Contents::Empty(0) => Self::Blank,
            Contents::Empty(count) => Self::Count(count),
        }
    }
}

/// Background tint of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shade {
    Lost,
    Won,
    Revealed,
    Covered,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub glyph: Glyph,
    pub shade: Shade,
}

impl TileView {
    pub fn of(state: GameState, cell: Cell) -> Self {
        use Visibility::*;

        // contents are shown everywhere once the game is over
        let glyph = match (state.is_over(), cell.visibility) {
            (true, _) | (false, Visible) => Glyph::of_contents(cell.contents),
            (false, Covered) => Glyph::Blank,
            (false, Flagged) => Glyph::Flag,
        };
        let shade = match state {
            GameState::Lost => Shade::Lost,
            GameState::Won => Shade::Won,
            GameState::Playing if cell.is_visible() => Shade::Revealed,
            GameState::Playing => Shade::Covered,
        };

        Self { glyph, shade }
    }
}

impl GameState {
    /// Banner line for the current state, empty while playing.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Playing => "",
            Self::Won => "You won!",
            Self::Lost => "You lost!",
        }
    }
}

impl Board {
    /// # Panics
    ///
    /// If `coords` lies outside the board.
    pub fn view_at(&self, coords: Coord2) -> TileView {
        TileView::of(self.state(), self[coords])
    }
}
