use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::game::{Action, Game, StepResult};

pub struct App {
    art: Vec<String>,
    tick_delay: Duration,
    game: Game,
    observation: Vec<String>,
    last_reward: Option<Vec<f32>>,
    steps: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Build the game from board art and perform the initial null step.
    pub fn new(art: Vec<String>, tick_delay_ms: u64) -> Result<App> {
        let mut game = Game::from_art(&art)?;
        let initial = game.start()?;

        Ok(App {
            art,
            tick_delay: Duration::from_millis(tick_delay_ms),
            game,
            observation: initial.observation,
            last_reward: initial.reward,
            steps: 0,
            message: None,
            should_quit: false,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Wait one tick for keyboard input; an elapsed tick steps all agents
    /// with Stay.
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(self.tick_delay)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key)?;
            }
        } else if !self.game.is_over() {
            let batch = self.batch_of_stays();
            self.apply(&batch)?;
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                // First agent walks west, everyone else stays
                let mut batch = self.batch_of_stays();
                batch[0] = Action::Left;
                self.apply(&batch)?;
            }
            KeyCode::Right => {
                // Last agent walks east
                let mut batch = self.batch_of_stays();
                let last = batch.len() - 1;
                batch[last] = Action::Right;
                self.apply(&batch)?;
            }
            KeyCode::Char('r') => {
                self.restart()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn batch_of_stays(&self) -> Vec<Action> {
        vec![Action::Stay; self.game.num_agents()]
    }

    /// Step the episode with a batch, recording the result for rendering.
    fn apply(&mut self, batch: &[Action]) -> Result<()> {
        if self.game.is_over() {
            self.message = Some("Episode over. Press 'r' to restart.".to_string());
            return Ok(());
        }

        let result: StepResult = self.game.step(batch)?;
        self.steps += 1;
        self.observation = result.observation;
        if result.reward.is_some() {
            self.last_reward = result.reward;
        }
        if result.terminated {
            self.message = Some(format!(
                "Episode terminated with reward {:?}. Press 'r' to restart.",
                self.last_reward.as_deref().unwrap_or(&[])
            ));
        }
        Ok(())
    }

    /// Rebuild the episode from the original art.
    fn restart(&mut self) -> Result<()> {
        let mut game = Game::from_art(&self.art)?;
        let initial = game.start()?;
        self.game = game;
        self.observation = initial.observation;
        self.last_reward = initial.reward;
        self.steps = 0;
        self.message = Some("New episode started.".to_string());
        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::board_view::render(
            frame,
            &self.observation,
            self.steps,
            self.game.is_over(),
            &self.last_reward,
            &self.message,
        );
    }
}
