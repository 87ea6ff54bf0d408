use crate::*;
pub use random::*;

mod random;

/// Builds the starting board for a game session.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}
