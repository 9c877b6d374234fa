//! CodeWindow - ratatui widget for the wrapped rows
//!
//! The frame is a rounded bordered block whose top border carries the
//! traffic lights and title. `InlineRenderer` draws it into an inline
//! viewport below the shell prompt instead of taking over the screen.

use super::frame::{drawn_text, Frame};
use super::renderer::{background, token_style, RendererError, RowRenderer};
use crate::engine::Row;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};
use ratatui::{Terminal, TerminalOptions, Viewport};
use std::io;

pub struct CodeWindow {
    text: Text<'static>,
    title: Line<'static>,
    background: Color,
    border: Color,
    padding: u16,
    width: u16,
    height: u16,
}

impl CodeWindow {
    pub fn new(rows: &[Row], frame: &Frame) -> Result<Self, RendererError> {
        let background: Color = background(frame)?.into();
        let lines = rows
            .iter()
            .map(|row| row_line(row, background))
            .collect::<Result<Vec<_>, _>>()?;

        let mut title = vec![Span::raw(" ")];
        for light in frame.chrome.traffic_lights {
            title.push(Span::styled("● ", Style::default().fg(light.into())));
        }
        if let Some(text) = &frame.title {
            title.push(Span::styled(
                format!("{text} "),
                Style::default().fg(frame.chrome.title_text.into()),
            ));
        }

        let width = frame.content_width(rows) + 2 * frame.padding + 2;

        Ok(Self {
            text: Text::from(lines),
            title: Line::from(title),
            background,
            border: frame.chrome.title_bar.into(),
            padding: clamp_u16(frame.padding),
            width: clamp_u16(width),
            height: clamp_u16(rows.len() + 2),
        })
    }

    /// Cells needed to draw the window without clipping.
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}

impl Widget for CodeWindow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default().bg(self.background);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(base.fg(self.border))
            .title(self.title)
            .padding(Padding::horizontal(self.padding))
            .style(base);
        Paragraph::new(self.text).block(block).render(area, buf);
    }
}

fn row_line(row: &Row, background: Color) -> Result<Line<'static>, RendererError> {
    let mut spans = Vec::with_capacity(row.len());
    for token in row {
        let text = drawn_text(token);
        if text.is_empty() {
            continue;
        }
        let (color, emphasis) = token_style(token)?;
        let mut style = Style::default().fg(color.into()).bg(background);
        if emphasis.is_bold() {
            style = style.add_modifier(Modifier::BOLD);
        }
        if emphasis.is_italic() {
            style = style.add_modifier(Modifier::ITALIC);
        }
        spans.push(Span::styled(text.into_owned(), style));
    }
    Ok(Line::from(spans))
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Draws the code window into an inline viewport on stdout.
pub struct InlineRenderer {
    frame: Frame,
}

impl InlineRenderer {
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }
}

impl RowRenderer for InlineRenderer {
    fn render_rows(&mut self, rows: &[Row]) -> Result<(), RendererError> {
        let window = CodeWindow::new(rows, &self.frame)?;
        let (width, height) = (window.width(), window.height());

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        terminal.draw(|f| {
            let area = f.area();
            let area = Rect {
                width: area.width.min(width),
                ..area
            };
            f.render_widget(window, area);
        })?;
        drop(terminal);
        println!();
        Ok(())
    }
}
