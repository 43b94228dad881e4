use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::io::{Stderr, stderr};

use super::canvas::{CellCanvas, CellPaint};
use super::palette::Rgb;
use super::surface::Surface;
use crate::game::{Grid, PixelRect};

/// Surface drawn on the terminal, one grid cell per two character columns
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    canvas: CellCanvas,
    title: String,
    closed: bool,
}

impl TerminalSurface {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    pub fn open(grid: Grid, background: Rgb, title: &str) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            "Opened {}x{} board on the terminal",
            grid.columns(),
            grid.rows()
        );

        Ok(Self {
            terminal,
            canvas: CellCanvas::new(grid, background),
            title: format!(" {} ", title),
            closed: false,
        })
    }

    /// Give the terminal back to the shell
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        info!("Terminal restored");
        Ok(())
    }

    fn render(frame: &mut Frame, canvas: &CellCanvas, title: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(canvas.grid().rows() as u16 + 2), // Board
                Constraint::Length(1),                                 // Footer
                Constraint::Min(0),
            ])
            .split(frame.area());

        let board = Paragraph::new(board_lines(canvas))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title.to_string()),
            )
            .alignment(Alignment::Center);
        frame.render_widget(board, chunks[0]);

        frame.render_widget(controls(), chunks[1]);
    }
}

impl Surface for TerminalSurface {
    fn fill(&mut self, color: Rgb) {
        self.canvas.fill(color);
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.canvas.fill_rect(rect, color);
    }

    fn outline_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.canvas.outline_rect(rect, color);
    }

    fn present(&mut self) -> Result<()> {
        let canvas = &self.canvas;
        let title = &self.title;
        self.terminal
            .draw(|frame| Self::render(frame, canvas, title))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to restore terminal: {:#}", e);
        }
    }
}

/// One styled line per grid row
pub fn board_lines(canvas: &CellCanvas) -> Vec<Line<'static>> {
    canvas
        .rows()
        .map(|row| Line::from(row.iter().map(cell_span).collect::<Vec<_>>()))
        .collect()
}

fn cell_span(cell: &CellPaint) -> Span<'static> {
    let style = Style::default().bg(cell.fill.into());
    match cell.outline {
        Some(outline) => Span::styled("[]", style.fg(outline.into())),
        None => Span::styled("  ", style),
    }
}

fn controls() -> Paragraph<'static> {
    let text = vec![Line::from(vec![
        Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
        Span::raw(" or "),
        Span::styled("WASD", Style::default().fg(Color::Cyan)),
        Span::raw(" to move | "),
        Span::styled("Q", Style::default().fg(Color::Red)),
        Span::raw(" to quit"),
    ])];

    Paragraph::new(text).alignment(Alignment::Center)
}
