//! AnsiRenderer - draws the code window with 24-bit ANSI escapes
//!
//! Output goes to any `io::Write`, so the same frame can be printed to a
//! terminal, piped, or saved to a file and replayed with `cat`.

use super::frame::{drawn_text, row_display_width, Frame};
use super::renderer::{background, token_style, RendererError, RowRenderer};
use crate::color::Rgba;
use crate::engine::Row;
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use std::io::Write;
use unicode_width::UnicodeWidthChar;

const TRAFFIC_LIGHT: &str = "●";

pub struct AnsiRenderer<W: Write> {
    out: W,
    frame: Frame,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W, frame: Frame) -> Self {
        Self { out, frame }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_title_bar(&mut self, inner_width: usize) -> Result<(), RendererError> {
        let chrome = self.frame.chrome;
        queue!(self.out, SetBackgroundColor(chrome.title_bar.into()), Print(" "))?;
        let mut used = 1;
        for light in chrome.traffic_lights {
            queue!(self.out, SetForegroundColor(light.into()), Print(TRAFFIC_LIGHT), Print(" "))?;
            used += 2;
        }

        if let Some(title) = &self.frame.title {
            let room = inner_width.saturating_sub(used + 1);
            let (title, title_width) = fit_width(title, room);
            queue!(
                self.out,
                SetForegroundColor(chrome.title_text.into()),
                Print(" "),
                Print(title)
            )?;
            used += 1 + title_width;
        }

        queue!(
            self.out,
            Print(" ".repeat(inner_width.saturating_sub(used))),
            ResetColor,
            Print("\n")
        )?;
        Ok(())
    }

    fn write_blank(&mut self, background: Rgba, inner_width: usize) -> Result<(), RendererError> {
        queue!(
            self.out,
            SetBackgroundColor(background.into()),
            Print(" ".repeat(inner_width)),
            ResetColor,
            Print("\n")
        )?;
        Ok(())
    }

    fn write_row(&mut self, row: &Row, background: Rgba, content_width: usize) -> Result<(), RendererError> {
        let padding = " ".repeat(self.frame.padding);
        queue!(self.out, SetBackgroundColor(background.into()), Print(&padding))?;

        for token in row {
            let text = drawn_text(token);
            if text.is_empty() {
                continue;
            }
            let (color, emphasis) = token_style(token)?;
            queue!(
                self.out,
                SetAttribute(Attribute::Reset),
                SetBackgroundColor(background.into()),
                SetForegroundColor(color.into())
            )?;
            if emphasis.is_bold() {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            if emphasis.is_italic() {
                queue!(self.out, SetAttribute(Attribute::Italic))?;
            }
            queue!(self.out, Print(&text))?;
        }

        let fill = content_width.saturating_sub(row_display_width(row)) + self.frame.padding;
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(background.into()),
            Print(" ".repeat(fill)),
            ResetColor,
            Print("\n")
        )?;
        Ok(())
    }
}

/// Longest prefix of `text` that fits in `room` cells, with its width.
fn fit_width(text: &str, room: usize) -> (&str, usize) {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let width = c.width().unwrap_or(0);
        if used + width > room {
            return (&text[..idx], used);
        }
        used += width;
    }
    (text, used)
}

impl<W: Write> RowRenderer for AnsiRenderer<W> {
    fn render_rows(&mut self, rows: &[Row]) -> Result<(), RendererError> {
        let background = background(&self.frame)?;
        let content_width = self.frame.content_width(rows);
        let inner_width = content_width + 2 * self.frame.padding;

        self.write_title_bar(inner_width)?;
        self.write_blank(background, inner_width)?;
        for row in rows {
            self.write_row(row, background, content_width)?;
        }
        self.write_blank(background, inner_width)?;
        self.out.flush()?;
        Ok(())
    }
}
