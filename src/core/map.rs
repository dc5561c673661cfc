//! Grid map module - the immutable tile layout
//!
//! The map is a fixed grid of wall/floor/door tiles parsed once from the
//! built-in level definition. Uses flat row-major storage like a framebuffer.
//! Coordinates: (x, y) with x growing right and y growing down.

use crate::types::Pos;

/// Built-in level, one string per row.
///
/// `#` wall, `.` floor, `+` door. All rows have equal width and the outer
/// border is solid wall, so entities can never leave the grid.
pub const LEVEL_MAP: &[&str] = &[
    "####################",
    "#..................#",
    "#.#####.######.###.#",
    "#.#......+.........#",
    "#.#.####.#####.###.#",
    "#.#....#.....#...#.#",
    "#.#.##.#.###.#.#.#.#",
    "#......#.....#.#...#",
    "#..................#",
    "#.####.######.####.#",
    "#..................#",
    "####################",
];

/// A single map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Door,
}

impl Tile {
    fn from_char(ch: char) -> Self {
        match ch {
            '#' => Tile::Wall,
            '+' => Tile::Door,
            _ => Tile::Floor,
        }
    }

    /// Tiles the player and enemies can stand on
    pub fn is_passable(self) -> bool {
        matches!(self, Tile::Floor | Tile::Door)
    }

    /// Display character for this tile
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Door => '+',
        }
    }
}

/// The static tile grid, immutable for the process lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: i16,
    height: i16,
    /// Flat tile storage, row-major order (y * width + x)
    tiles: Vec<Tile>,
}

impl GridMap {
    /// Parse a map from row strings.
    ///
    /// Rows must be non-empty and of equal width; the built-in level
    /// satisfies this by construction.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i16;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i16;
        debug_assert!(rows.iter().all(|r| r.chars().count() == width as usize));

        let tiles = rows
            .iter()
            .flat_map(|row| row.chars().map(Tile::from_char))
            .collect();

        Self {
            width,
            height,
            tiles,
        }
    }

    /// The built-in level
    pub fn level() -> Self {
        Self::from_rows(LEVEL_MAP)
    }

    pub fn width(&self) -> i16 {
        self.width
    }

    pub fn height(&self) -> i16 {
        self.height
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.x >= self.width || pos.y < 0 || pos.y >= self.height {
            return None;
        }
        Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    /// Tile at position, or `None` outside the grid
    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        self.index(pos).map(|idx| self.tiles[idx])
    }

    /// Whether an entity may occupy this position.
    ///
    /// Out-of-bounds is a valid `false`, not an error.
    pub fn passable(&self, pos: Pos) -> bool {
        self.tile(pos).is_some_and(Tile::is_passable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_dimensions() {
        let map = GridMap::level();
        assert_eq!(map.width(), 20);
        assert_eq!(map.height(), 12);
    }

    #[test]
    fn test_passable_out_of_bounds_is_false() {
        let map = GridMap::level();
        assert!(!map.passable(Pos::new(-1, 0)));
        assert!(!map.passable(Pos::new(0, -1)));
        assert!(!map.passable(Pos::new(map.width(), 0)));
        assert!(!map.passable(Pos::new(0, map.height())));
        assert_eq!(map.tile(Pos::new(-1, 0)), None);
    }

    #[test]
    fn test_walls_floors_and_doors() {
        let map = GridMap::level();
        // Border is wall everywhere.
        for x in 0..map.width() {
            assert_eq!(map.tile(Pos::new(x, 0)), Some(Tile::Wall));
            assert_eq!(map.tile(Pos::new(x, map.height() - 1)), Some(Tile::Wall));
        }
        // The wall/floor pair the player spawn depends on.
        assert!(!map.passable(Pos::new(2, 3)));
        assert!(map.passable(Pos::new(3, 3)));
        // Doors are passable.
        assert_eq!(map.tile(Pos::new(9, 3)), Some(Tile::Door));
        assert!(map.passable(Pos::new(9, 3)));
    }

    #[test]
    fn test_corridor_row_is_open() {
        let map = GridMap::level();
        for x in 1..19 {
            assert!(map.passable(Pos::new(x, 8)), "({}, 8) should be open", x);
        }
    }

    #[test]
    fn test_passable_is_deterministic() {
        let map = GridMap::level();
        for y in -1..=map.height() {
            for x in -1..=map.width() {
                let p = Pos::new(x, y);
                assert_eq!(map.passable(p), map.passable(p));
            }
        }
    }
}
