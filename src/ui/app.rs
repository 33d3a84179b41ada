//! Main UI Application
//!
//! Paints every viewable according to its luminosity and turns key presses
//! into game turns.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ecs::{Luminosity, Position, Renderable, Viewable};
use crate::game::Game;
use crate::world::Direction;

/// Rows taken by the status bar
pub const STATUS_HEIGHT: u16 = 1;

/// Colour for a glyph in the given state, or `None` when it is not drawn
pub fn shade(fg: (u8, u8, u8), luminosity: Luminosity) -> Option<Color> {
    match luminosity {
        Luminosity::Bright => Some(Color::Rgb(fg.0, fg.1, fg.2)),
        Luminosity::Dim => Some(Color::Rgb(fg.0 / 3, fg.1 / 3, fg.2 / 3)),
        Luminosity::Hidden => None,
    }
}

/// Map direction for a key, vi keys or arrows
fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
        _ => None,
    }
}

/// Main UI application
#[derive(Debug, Default)]
pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    /// Size of the playable grid for a terminal of `area`
    pub fn grid_size(area: Rect) -> (i32, i32) {
        let width = area.width.saturating_sub(2);
        let height = area.height.saturating_sub(2 + STATUS_HEIGHT);
        (width as i32, height as i32)
    }

    /// Handle a key press; returns `true` when the game should exit
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => game.quit(),
            KeyCode::Char('v') => game.toggle_strategy(),
            KeyCode::Char('.') | KeyCode::Char(' ') => game.tick(None),
            code => {
                if let Some(direction) = direction_for(code) {
                    game.tick(Some(direction));
                }
            }
        }
        Ok(false)
    }

    pub fn render(&self, frame: &mut Frame, game: &Game) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(STATUS_HEIGHT)])
            .split(frame.area());

        self.render_map(frame, game, chunks[0]);
        self.render_status(frame, game, chunks[1]);
    }

    fn render_map(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Gloomcrawl ")
            .border_style(Style::default().fg(Color::Rgb(90, 80, 70)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Lowest render order first so occupants end up on top of terrain
        let mut glyphs: Vec<(Position, char, Color, i32)> = game
            .world()
            .query::<(&Position, &Renderable, &Viewable)>()
            .iter()
            .filter_map(|(_, (pos, renderable, viewable))| {
                shade(renderable.fg, viewable.luminosity)
                    .map(|color| (*pos, renderable.glyph, color, renderable.render_order))
            })
            .collect();
        glyphs.sort_by_key(|g| g.3);

        let buf = frame.buffer_mut();
        for (pos, glyph, color, _) in glyphs {
            if pos.x < 0 || pos.y < 0 || pos.x >= inner.width as i32 || pos.y >= inner.height as i32 {
                continue;
            }
            let cell_x = inner.x + pos.x as u16;
            let cell_y = inner.y + pos.y as u16;
            buf[(cell_x, cell_y)].set_char(glyph);
            buf[(cell_x, cell_y)].set_fg(color);
        }
    }

    fn render_status(&self, frame: &mut Frame, game: &Game, area: Rect) {
        let pass = game.last_pass();
        let line = Line::from(vec![
            Span::styled(
                format!(" Turn {} ", game.turn()),
                Style::default().fg(Color::Rgb(200, 190, 170)),
            ),
            Span::raw(format!(
                "| {} | {} seen | hjkl/arrows move, v vision, q quit",
                game.vision().strategy().name(),
                pass.seen
            )),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
