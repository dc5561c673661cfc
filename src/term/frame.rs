//! Frame: a grid of semantic glyphs plus the text lines below it.
//!
//! The frame knows *what* occupies each cell, not how it is colored; the
//! renderer owns presentation. Keeping the frame semantic makes the view
//! layer assertable in tests.

/// What a rendered cell shows, in increasing display priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Floor,
    Door,
    Enemy,
    Bomb,
    Cookie,
    Player,
}

impl Glyph {
    /// Display character for this glyph
    pub fn ch(self) -> char {
        match self {
            Glyph::Wall => '#',
            Glyph::Floor => '.',
            Glyph::Door => '+',
            Glyph::Enemy => 'E',
            Glyph::Bomb => 'x',
            Glyph::Cookie => 'o',
            Glyph::Player => '@',
        }
    }
}

/// One complete rendered frame: the glyph grid and the lines printed
/// beneath it (status, transient message, prompt or banner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    /// Flat glyph storage, row-major order (y * width + x)
    glyphs: Vec<Glyph>,
    pub status: String,
    pub message: Option<String>,
    pub prompt: String,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![Glyph::Floor; len],
            status: String::new(),
            message: None,
            prompt: String::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    /// Out-of-range writes are silently dropped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// One row of glyphs
    pub fn row(&self, y: u16) -> &[Glyph] {
        let start = (y as usize) * (self.width as usize);
        &self.glyphs[start..start + self.width as usize]
    }

    /// The grid as plain text lines (test and debug aid)
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row(y).iter().map(|g| g.ch()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut frame = Frame::new(4, 3);
        frame.set(2, 1, Glyph::Player);
        assert_eq!(frame.get(2, 1), Some(Glyph::Player));
        assert_eq!(frame.get(0, 0), Some(Glyph::Floor));
        assert_eq!(frame.get(4, 0), None);
        // Out-of-range write is a no-op.
        frame.set(9, 9, Glyph::Wall);
    }

    #[test]
    fn test_to_lines_uses_glyph_chars() {
        let mut frame = Frame::new(3, 1);
        frame.set(0, 0, Glyph::Wall);
        frame.set(1, 0, Glyph::Cookie);
        frame.set(2, 0, Glyph::Player);
        assert_eq!(frame.to_lines(), vec!["#o@".to_string()]);
    }
}
