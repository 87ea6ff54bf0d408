use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    InProgress,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Gameplay engine owning the board of a single session.
///
/// `Won` is terminal: once every cell is unlit no further presses are
/// accepted, and the view layer is expected to stop forwarding events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    state: EngineState,
}

impl GameEngine {
    /// Starts already in `Won` when the board comes up fully unlit, which
    /// happens for a zero start probability and occasionally by chance.
    pub fn new(board: Board) -> Self {
        let state = if board.is_cleared() {
            EngineState::Won
        } else {
            EngineState::InProgress
        };
        Self { board, state }
    }

    pub fn from_config(config: GameConfig, generator: impl BoardGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn has_won(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn lit_count(&self) -> CellCount {
        self.board.lit_count()
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.board.is_lit(coords)
    }

    /// Applies the flip cross around `target`. The target may be out of
    /// bounds; only the in-bounds part of the cross flips, and a press whose
    /// cross lies entirely outside the board reports `NoChange`.
    pub fn press(&mut self, target: Coord2) -> Result<ToggleOutcome> {
        use ToggleOutcome::*;

        self.check_in_progress()?;

        let flipped = self.board.flip_around(target);

        Ok(if self.board.is_cleared() {
            self.state = EngineState::Won;
            Won
        } else if flipped == 0 {
            NoChange
        } else {
            Toggled
        })
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
