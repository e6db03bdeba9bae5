use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use corridor_world::config::AppConfig;
use corridor_world::game::{Action, Game, StepResult};
use corridor_world::ui::App;

/// Multi-agent corridor demo: indexed actions in, indexed rewards out.
#[derive(Parser)]
#[command(name = "corridor_world", about = "Multi-agent corridor grid-world demo")]
struct Cli {
    /// Render interactively with arrow-key controls
    #[arg(long)]
    live: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if cli.live {
        run_live(config)
    } else {
        run_scripted(config)
    }
}

/// Interactive mode: arrow keys and an idle tick drive the episode.
fn run_live(config: AppConfig) -> Result<()> {
    let mut app = App::new(config.board.art, config.ui.tick_delay_ms)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

/// Scripted mode: the first agent walks west every step, everyone else
/// stays, until the episode terminates.
fn run_scripted(config: AppConfig) -> Result<()> {
    let mut game = Game::from_art(&config.board.art)?;

    let mut batch = vec![Action::Stay; game.num_agents()];
    batch[0] = Action::Left;

    let mut step = 0;
    let result = game.start()?;
    print_step(step, &result);

    while !game.is_over() {
        let result = game.step(&batch)?;
        step += 1;
        print_step(step, &result);
    }

    Ok(())
}

fn print_step(step: usize, result: &StepResult) {
    println!("step {step}");
    for row in &result.observation {
        println!("  {row}");
    }
    match &result.reward {
        Some(vector) => println!("  reward {vector:?}  discount {}", result.discount),
        None => println!("  reward none  discount {}", result.discount),
    }
    println!();
}
