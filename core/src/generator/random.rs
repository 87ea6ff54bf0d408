use super::*;
use ndarray::Array2;

/// Lights each cell independently with the configured start probability,
/// deterministically for a given seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let probability = config.start_probability;

        // degenerate probabilities need no rng at all
        if probability <= 0.0 {
            if probability < 0.0 {
                log::warn!(
                    "Start probability {} below 0, board starts fully unlit",
                    probability
                );
            }
            return Board::unlit(config.size);
        }
        if probability >= 1.0 {
            if probability > 1.0 {
                log::warn!(
                    "Start probability {} above 1, board starts fully lit",
                    probability
                );
            }
            return Board::from_lit_mask(Array2::from_elem(config.size.to_nd_index(), true));
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut lights: Array2<bool> = Array2::default(config.size.to_nd_index());
        for cell in lights.iter_mut() {
            *cell = rng.random::<f32>() < probability;
        }

        Board::from_lit_mask(lights)
    }
}
