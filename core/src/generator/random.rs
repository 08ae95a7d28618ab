use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use super::*;

/// Uniform mine placement: every arrangement of `mines` mines over the board is equally likely.
///
/// Lays out the mines in the first slots and shuffles the whole board with Fisher-Yates.
#[derive(Debug)]
pub struct RandomMinefieldGenerator<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
}

impl<'r, R: Rng + ?Sized> RandomMinefieldGenerator<'r, R> {
    pub fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> MinefieldGenerator for RandomMinefieldGenerator<'_, R> {
    fn generate(self, config: BoardConfig) -> MineLayout {
        let side = usize::from(config.dimension());
        let mines = usize::from(config.mines());

        let mut slots: Vec<bool> = (0..side * side).map(|i| i < mines).collect();
        slots.shuffle(self.rng);

        let mine_mask = Array2::from_shape_fn((side, side), |(y, x)| slots[x + y * side]);
        let layout = MineLayout::from_mine_mask(mine_mask);

        // double check mine count
        if layout.mine_count() != config.mines() {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines()
            );
        }
        layout
    }
}
