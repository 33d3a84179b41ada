//! Gloomcrawl - Entry Point
//!
//! Initializes logging and the terminal, builds a level sized to fit, and
//! runs the turn loop.

use std::fs::OpenOptions;
use std::io;

use anyhow::{bail, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use gloomcrawl::game::{Game, GameState};
use gloomcrawl::ui::App;
use gloomcrawl::Config;

/// Smallest grid worth playing on
const MIN_WIDTH: i32 = 20;
const MIN_HEIGHT: i32 = 8;

fn main() -> Result<()> {
    // Log to a file so the TUI is left alone
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("gloomcrawl.log")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Gloomcrawl v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    let (cols, rows) = crossterm::terminal::size()?;
    let (fit_width, fit_height) = App::grid_size(Rect::new(0, 0, cols, rows));
    let width = if config.map.width > 0 { config.map.width.min(fit_width) } else { fit_width };
    let height = if config.map.height > 0 { config.map.height.min(fit_height) } else { fit_height };
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        bail!("terminal too small: need a {}x{} grid, have {}x{}", MIN_WIDTH, MIN_HEIGHT, width, height);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let mut game = Game::new(&config, width, height);

    let result = run_game_loop(&mut terminal, &mut app, &mut game);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Gloomcrawl shut down after {} turns", game.turn());
    result
}

/// Turn loop: block on a key, play a turn, repaint
fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    game: &mut Game,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame, game))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not releases
            if key.kind == KeyEventKind::Press {
                match app.handle_input(key, game) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => log::warn!("Input handling error: {}", e),
                }
            }
        }

        if game.state() == GameState::Quit {
            break;
        }
    }

    Ok(())
}
