//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! Raw mode and the alternate screen are acquired in `enter` and must be
//! released by `exit` on every path out of the program; the binary calls
//! `exit` unconditionally after the run function returns.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::frame::{Frame, Glyph};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Full clear-and-redraw of one frame.
    ///
    /// Only called when the loop has flagged the frame dirty, so the cost of
    /// a full redraw is bounded by actual state changes.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<Color> = None;
        for y in 0..frame.height() {
            for glyph in frame.row(y) {
                let color = glyph_color(*glyph);
                if current != Some(color) {
                    self.stdout.queue(SetForegroundColor(color))?;
                    current = Some(color);
                }
                self.stdout.queue(Print(glyph.ch()))?;
            }
            self.stdout.queue(Print("\r\n"))?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(Print("\r\n"))?;
        self.stdout.queue(Print(&frame.status))?;
        self.stdout.queue(Print("\r\n"))?;
        if let Some(message) = &frame.message {
            self.stdout.queue(Print(message))?;
        }
        self.stdout.queue(Print("\r\n"))?;
        self.stdout.queue(Print(&frame.prompt))?;
        self.stdout.queue(Print("\r\n"))?;

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn glyph_color(glyph: Glyph) -> Color {
    match glyph {
        Glyph::Wall => Color::DarkGrey,
        Glyph::Floor => Color::Grey,
        Glyph::Door => Color::Yellow,
        Glyph::Enemy => Color::Red,
        Glyph::Bomb => Color::Magenta,
        Glyph::Cookie => Color::Green,
        Glyph::Player => Color::Cyan,
    }
}
