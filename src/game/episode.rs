use crate::error::{BoardError, StepError};
use crate::game::{Action, Board, PlayerAgent, RewardAgent};

/// Result of advancing the episode by one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Board rows with every agent's marker overlaid on its cell.
    pub observation: Vec<String>,
    /// Elementwise sum of the reward vectors emitted this step, if any.
    pub reward: Option<Vec<f32>>,
    /// 1.0 while the episode runs, 0.0 on the terminal step.
    pub discount: f32,
    /// Whether this step ended the episode.
    pub terminated: bool,
}

/// The episode driver: owns the board and the agents, advances them one step
/// at a time in placement order, and aggregates their effects.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    agents: Vec<PlayerAgent>,
    over: bool,
}

impl Game {
    /// Build a game from board art: one agent per digit marker, each holding
    /// its marker's value as index and the marker count as `n_unique`.
    pub fn from_art<S: AsRef<str>>(art: &[S]) -> Result<Game, BoardError> {
        let setup = Board::parse(art)?;
        let n_unique = setup.spawns.len();
        let agents = setup
            .spawns
            .iter()
            .map(|s| PlayerAgent::new(s.index, n_unique, s.marker, s.position))
            .collect();

        Ok(Game {
            board: setup.board,
            agents,
            over: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn agents(&self) -> &[PlayerAgent] {
        &self.agents
    }

    pub fn num_agents(&self) -> usize {
        self.agents.len()
    }

    /// Whether the episode has terminated.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Perform the initial null step: no action batch, so every agent stays
    /// put, but boundary checks and rendering still run.
    pub fn start(&mut self) -> Result<StepResult, StepError> {
        self.advance(None)
    }

    /// Advance one step with an ordered action batch, one entry per agent
    /// index. The batch must hold at least `num_agents` entries.
    pub fn step(&mut self, actions: &[Action]) -> Result<StepResult, StepError> {
        self.advance(Some(actions))
    }

    fn advance(&mut self, actions: Option<&[Action]>) -> Result<StepResult, StepError> {
        if self.over {
            return Err(StepError::EpisodeOver);
        }

        let mut reward: Option<Vec<f32>> = None;
        let mut terminated = false;

        // Placement order, which equals index order after parsing
        for agent in &mut self.agents {
            let effect = agent.update(actions, &self.board)?;
            if let Some(vector) = effect.reward {
                reward = Some(match reward {
                    None => vector,
                    Some(mut total) => {
                        for (slot, value) in total.iter_mut().zip(&vector) {
                            *slot += value;
                        }
                        total
                    }
                });
            }
            terminated |= effect.terminate;
        }

        self.over = terminated;

        Ok(StepResult {
            observation: self.render(),
            reward,
            discount: if terminated { 0.0 } else { 1.0 },
            terminated,
        })
    }

    /// Render the board with agent markers overlaid.
    pub fn render(&self) -> Vec<String> {
        let mut grid = self.board.to_char_rows();
        for agent in &self.agents {
            let position = agent.position();
            grid[position.row][position.col] = agent.marker();
        }
        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}
