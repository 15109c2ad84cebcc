//! The tile map: a fixed 10×10 grid read from a whitespace-separated text file.

use macroquad::math::{ivec2, vec2, IVec2, Rect};
use std::path::Path;

use crate::asset::{AssetStatus, SpriteId};
use crate::command::{DrawCommand, Surface};
use crate::error::Error;
use crate::iso::{grid_to_screen, screen_to_grid, TILE_SIZE};

/// Cells per side of the map.
pub const MAP_SIZE: usize = 10;

/// Tile code read from the map file. Zero means no tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TileType(pub i32);

impl TileType {
    /// No tile drawn.
    pub const EMPTY: TileType = TileType(0);

    /// Integer code as read from the file.
    #[inline]
    pub fn raw(self) -> i32 {
        self.0
    }

    /// True for code 0.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Fixed 10×10 grid of tile codes, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapGrid {
    cells: [[TileType; MAP_SIZE]; MAP_SIZE],
    origin: IVec2,
}

impl Default for MapGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl MapGrid {
    /// All-empty grid drawn at the screen origin.
    pub fn new() -> Self {
        MapGrid {
            cells: [[TileType::EMPTY; MAP_SIZE]; MAP_SIZE],
            origin: IVec2::ZERO,
        }
    }

    /// Same grid, drawn shifted by `origin` pixels.
    pub fn with_origin(mut self, origin: IVec2) -> Self {
        self.origin = origin;
        self
    }

    /// Parse map text. Never fails: anything unreadable stays empty.
    ///
    /// The first ten lines are rows 0..10, blank lines included. Each row
    /// takes up to ten integers; the first token that is not an integer
    /// ends the row, after keeping any leading digits it had.
    pub fn parse(txt: &str) -> Self {
        let mut grid = MapGrid::new();
        for (y, line) in txt.lines().take(MAP_SIZE).enumerate() {
            let mut x = 0;
            for token in line.split_whitespace() {
                if x >= MAP_SIZE {
                    break;
                }
                let (value, complete) = scan_int(token);
                match value {
                    Some(v) => {
                        grid.cells[y][x] = TileType(v);
                        x += 1;
                    }
                    None => break,
                }
                if !complete {
                    break;
                }
            }
        }
        grid
    }

    /// Read and parse a map file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let p = path.as_ref();
        let txt = std::fs::read_to_string(p).map_err(|source| Error::Io {
            path: p.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&txt))
    }

    /// Replace the tiles with the contents of `path`.
    ///
    /// An unreadable file is logged and leaves the grid as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> AssetStatus {
        let p = path.as_ref();
        match Self::read_from_file(p) {
            Ok(loaded) => {
                self.cells = loaded.cells;
                log::info!("Loaded map {} ({} tiles)", p.display(), self.occupied());
                AssetStatus::Loaded
            }
            Err(err) => {
                log::warn!("Failed to open map file: {}", err);
                AssetStatus::Missing
            }
        }
    }

    /// Tile at `(x, y)`; empty outside the grid.
    pub fn get(&self, x: i32, y: i32) -> TileType {
        match Self::index(x, y) {
            Some((col, row)) => self.cells[row][col],
            None => TileType::EMPTY,
        }
    }

    /// Set the tile at `(x, y)`. Returns false outside the grid.
    pub fn set(&mut self, x: i32, y: i32, tile: TileType) -> bool {
        match Self::index(x, y) {
            Some((col, row)) => {
                self.cells[row][col] = tile;
                true
            }
            None => false,
        }
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|c| *c < MAP_SIZE)?;
        let row = usize::try_from(y).ok().filter(|r| *r < MAP_SIZE)?;
        Some((col, row))
    }

    /// Grid cell whose drawn diamond covers screen point `screen`, if it is
    /// on the map.
    pub fn cell_at(&self, screen: IVec2) -> Option<IVec2> {
        // Diamonds have their top corner at the middle of the quad's top edge.
        let local = screen - self.origin - ivec2(TILE_SIZE.width / 2, 0);
        let cell = screen_to_grid(local, TILE_SIZE);
        Self::index(cell.x, cell.y).map(|_| cell)
    }

    /// Every cell with its grid coordinate, y outer, x inner.
    pub fn tiles(&self) -> impl Iterator<Item = (IVec2, TileType)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, t)| (ivec2(x as i32, y as i32), *t))
        })
    }

    /// Raw tile codes as `rows[y][x]`.
    pub fn rows(&self) -> [[i32; MAP_SIZE]; MAP_SIZE] {
        self.cells.map(|row| row.map(TileType::raw))
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.tiles().filter(|(_, t)| !t.is_empty()).count()
    }

    /// Draw every non-empty tile, back rows first.
    pub fn render(&self, surface: &mut impl Surface) {
        let size = vec2(TILE_SIZE.width as f32, TILE_SIZE.height as f32);
        for (cell, tile) in self.tiles() {
            if tile.is_empty() {
                continue;
            }
            let pos = grid_to_screen(cell, TILE_SIZE) + self.origin;
            surface.draw(DrawCommand::new(
                SpriteId::Tile,
                Rect::new(pos.x as f32, pos.y as f32, size.x, size.y),
            ));
        }
    }
}

/// Leading integer of `token` and whether it covered the whole token.
fn scan_int(token: &str) -> (Option<i32>, bool) {
    let bytes = token.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return (None, false);
    }
    let end = sign + digits;
    (token[..end].parse().ok(), end == token.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_int_reads_signed_prefixes() {
        assert_eq!(scan_int("42"), (Some(42), true));
        assert_eq!(scan_int("-7"), (Some(-7), true));
        assert_eq!(scan_int("+3"), (Some(3), true));
        assert_eq!(scan_int("12ab"), (Some(12), false));
        assert_eq!(scan_int("ab"), (None, false));
        assert_eq!(scan_int("-"), (None, false));
    }

    #[test]
    fn overflowing_token_ends_the_row_without_storing() {
        let grid = MapGrid::parse("1 99999999999 2");
        assert_eq!(grid.get(0, 0), TileType(1));
        assert_eq!(grid.get(1, 0), TileType::EMPTY);
        assert_eq!(grid.get(2, 0), TileType::EMPTY);
    }

    #[test]
    fn partial_token_keeps_prefix_then_stops() {
        let grid = MapGrid::parse("3 12ab 4");
        assert_eq!(grid.rows()[0][..3], [3, 12, 0]);
    }

    #[test]
    fn out_of_range_access_is_empty_and_ignored() {
        let mut grid = MapGrid::new();
        assert!(!grid.set(10, 0, TileType(1)));
        assert!(!grid.set(0, -1, TileType(1)));
        assert_eq!(grid.get(-1, 3), TileType::EMPTY);
        assert_eq!(grid.occupied(), 0);
    }
}
