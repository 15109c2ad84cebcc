//! Diamond isometric projection between grid cells and screen pixels.
//!
//! Inputs and outputs are `i32`, intermediate math is `i64`, so every input
//! has a result. Division truncates toward zero, so for negative numerators
//! the result rounds up (`-1 * 63 / 2 == -31`). The multiply always happens
//! before the divide. Results outside `-i32::MAX..=i32::MAX` saturate to that
//! range, which keeps `iso_x(x, y) == -iso_x(y, x)` true everywhere.

use macroquad::math::{ivec2, IVec2};

/// Pixel footprint of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    /// Width of the diamond in pixels
    pub width: i32,
    /// Height of the diamond in pixels
    pub height: i32,
}

impl TileSize {
    /// Build a tile size.
    pub const fn new(width: i32, height: i32) -> Self {
        TileSize { width, height }
    }
}

/// Footprint used for map tiles.
pub const TILE_SIZE: TileSize = TileSize::new(64, 32);

#[inline]
fn narrow(v: i64) -> i32 {
    v.clamp(-(i32::MAX as i64), i32::MAX as i64) as i32
}

/// Screen x of grid cell `(x, y)`.
#[inline]
pub fn iso_x(x: i32, y: i32, tile: TileSize) -> i32 {
    narrow((x as i64 - y as i64).saturating_mul(tile.width as i64) / 2)
}

/// Screen y of grid cell `(x, y)`.
#[inline]
pub fn iso_y(x: i32, y: i32, tile: TileSize) -> i32 {
    narrow((x as i64 + y as i64).saturating_mul(tile.height as i64) / 2)
}

/// Top-left screen position of a grid cell.
#[inline]
pub fn grid_to_screen(cell: IVec2, tile: TileSize) -> IVec2 {
    ivec2(iso_x(cell.x, cell.y, tile), iso_y(cell.x, cell.y, tile))
}

/// Grid cell whose projected origin is at or before `screen`.
///
/// Exact inverse of [`grid_to_screen`] for points it produces when the tile
/// dimensions are even and nothing saturated. Other points snap to the cell
/// by floor division, so the cells tile the plane as diamonds whose top
/// corner is the projected origin. Used by [`crate::MapGrid::cell_at`].
pub fn screen_to_grid(screen: IVec2, tile: TileSize) -> IVec2 {
    let half_w = (tile.width / 2).max(1) as i64;
    let half_h = (tile.height / 2).max(1) as i64;
    // sx / hw = x - y, sy / hh = x + y; scale both by hw * hh to stay integral
    let a = screen.x as i64 * half_h;
    let b = screen.y as i64 * half_w;
    let denom = 2 * half_w * half_h;
    ivec2(
        narrow((a + b).div_euclid(denom)),
        narrow((b - a).div_euclid(denom)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_numerators_truncate_toward_zero() {
        let odd = TileSize::new(63, 31);
        assert_eq!(iso_x(0, 1, odd), -31);
        assert_eq!(iso_y(-1, 0, odd), -15);
    }

    #[test]
    fn screen_to_grid_inverts_projection_on_the_map() {
        for y in -3..10 {
            for x in -3..10 {
                let cell = ivec2(x, y);
                let screen = grid_to_screen(cell, TILE_SIZE);
                assert_eq!(screen_to_grid(screen, TILE_SIZE), cell);
            }
        }
    }

    #[test]
    fn extreme_inputs_saturate_instead_of_overflowing() {
        let big = i32::MAX / 2;
        assert_eq!(iso_x(big, -big, TILE_SIZE), i32::MAX);
        assert_eq!(iso_x(-big, big, TILE_SIZE), -i32::MAX);
        assert_eq!(iso_y(i32::MAX, i32::MAX, TILE_SIZE), i32::MAX);
        assert_eq!(iso_x(i32::MAX, i32::MIN, TILE_SIZE), i32::MAX);
        assert_eq!(iso_x(i32::MIN, i32::MAX, TILE_SIZE), -i32::MAX);
        assert_eq!(iso_y(i32::MIN, i32::MIN, TILE_SIZE), -i32::MAX);
        let widest = TileSize::new(i32::MIN, i32::MIN);
        assert_eq!(iso_y(i32::MIN, i32::MIN, widest), i32::MAX);
    }

    #[test]
    fn screen_to_grid_handles_far_points() {
        let cell = screen_to_grid(ivec2(200_000_000, 0), TILE_SIZE);
        assert_eq!(cell, ivec2(3_125_000, -3_125_000));
        assert_eq!(grid_to_screen(cell, TILE_SIZE), ivec2(200_000_000, 0));

        // Nothing to assert beyond not panicking at the corners.
        let _ = screen_to_grid(ivec2(i32::MIN, i32::MAX), TileSize::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn screen_to_grid_snaps_inside_a_tile() {
        let origin = grid_to_screen(ivec2(2, 3), TILE_SIZE);
        let inside = origin + ivec2(3, 2);
        assert_eq!(screen_to_grid(inside, TILE_SIZE), ivec2(2, 3));
    }
}
