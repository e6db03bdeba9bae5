use crate::error::StepError;
use crate::game::{Action, Board, Position};

/// What one agent's update contributes to the step: an optional reward
/// vector and a termination request. The driver aggregates these across
/// agents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepEffect {
    pub reward: Option<Vec<f32>>,
    pub terminate: bool,
}

/// Shared contract for any simulated entity that owns a fixed slot in the
/// action batch and the reward vector.
///
/// `index` and `n_unique` are fixed at construction. The action batch passed
/// to [`RewardAgent::update`] must hold at least `index + 1` entries; a
/// shorter batch is reported as [`StepError::ActionBatchTooShort`].
pub trait RewardAgent {
    /// This agent's slot in the action batch and the reward vector.
    fn index(&self) -> usize;

    /// Total number of distinct agents, i.e. the reward vector width.
    fn n_unique(&self) -> usize;

    /// Build a fresh reward vector: zeros everywhere except `value` at this
    /// agent's own slot.
    fn reward(&self, value: f32) -> Vec<f32> {
        let mut vector = vec![0.0; self.n_unique()];
        vector[self.index()] = value;
        vector
    }

    /// Advance this agent by one simulation step. `None` is the initial null
    /// step, which every agent treats as [`Action::Stay`].
    fn update(
        &mut self,
        _actions: Option<&[Action]>,
        _board: &Board,
    ) -> Result<StepEffect, StepError> {
        unimplemented!("update must be implemented by a concrete agent")
    }
}

/// The concrete corridor walker: consumes its indexed action, attempts one
/// horizontal cell of movement, and rewards/terminates at the corridor ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAgent {
    index: usize,
    n_unique: usize,
    marker: char,
    position: Position,
}

impl PlayerAgent {
    pub fn new(index: usize, n_unique: usize, marker: char, position: Position) -> Self {
        PlayerAgent {
            index,
            n_unique,
            marker,
            position,
        }
    }

    /// Current cell
    pub fn position(&self) -> Position {
        self.position
    }

    /// Display character from the board art
    pub fn marker(&self) -> char {
        self.marker
    }

    fn step_west(&mut self, board: &Board) {
        if self.position.col > 0 && !board.is_wall(self.position.row, self.position.col - 1) {
            self.position.col -= 1;
        }
    }

    fn step_east(&mut self, board: &Board) {
        if !board.is_wall(self.position.row, self.position.col + 1) {
            self.position.col += 1;
        }
    }
}

impl RewardAgent for PlayerAgent {
    fn index(&self) -> usize {
        self.index
    }

    fn n_unique(&self) -> usize {
        self.n_unique
    }

    fn update(
        &mut self,
        actions: Option<&[Action]>,
        board: &Board,
    ) -> Result<StepEffect, StepError> {
        let action = match actions {
            None => Action::Stay,
            Some(batch) => *batch
                .get(self.index)
                .ok_or(StepError::ActionBatchTooShort {
                    index: self.index,
                    got: batch.len(),
                })?,
        };

        match action {
            Action::Left => self.step_west(board),
            Action::Right => self.step_east(board),
            // Up and Down are accepted but never move
            Action::Stay | Action::Up | Action::Down => {}
        }

        // Boundary rewards against the current position; left end first
        if self.position.col == 1 {
            Ok(StepEffect {
                reward: Some(self.reward(1.0)),
                terminate: true,
            })
        } else if self.position.col + 2 == board.cols() {
            Ok(StepEffect {
                reward: Some(self.reward(100.0)),
                terminate: true,
            })
        } else {
            Ok(StepEffect::default())
        }
    }
}
