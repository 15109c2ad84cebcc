// tests/iso_tests.rs

use king_was_fallen::{grid_to_screen, iso_x, iso_y, TileSize, TILE_SIZE};
use macroquad::math::ivec2;

#[test]
fn projects_cells_onto_the_diamond_grid() {
    assert_eq!(grid_to_screen(ivec2(0, 0), TILE_SIZE), ivec2(0, 0));
    assert_eq!(grid_to_screen(ivec2(1, 0), TILE_SIZE), ivec2(32, 16));
    assert_eq!(grid_to_screen(ivec2(0, 1), TILE_SIZE), ivec2(-32, 16));
    assert_eq!(grid_to_screen(ivec2(3, 2), TILE_SIZE), ivec2(32, 80));
}

#[test]
fn swapping_coordinates_negates_x_and_keeps_y() {
    let tiles = [TileSize::new(64, 32), TileSize::new(63, 31), TileSize::new(2, 7)];
    for tile in tiles {
        for y in -12..12 {
            for x in -12..12 {
                assert_eq!(iso_x(x, y, tile) + iso_x(y, x, tile), 0, "x={x} y={y}");
                assert_eq!(iso_y(x, y, tile), iso_y(y, x, tile), "x={x} y={y}");
            }
        }
    }
}

#[test]
fn transform_is_deterministic() {
    let tile = TileSize::new(48, 24);
    let first = (iso_x(7, -3, tile), iso_y(7, -3, tile));
    let second = (iso_x(7, -3, tile), iso_y(7, -3, tile));
    assert_eq!(first, second);
    assert_eq!(first, (240, 48));
}

#[test]
fn swap_properties_hold_at_the_integer_limits() {
    let edges = [i32::MIN, i32::MIN + 1, -(i32::MAX / 2), -1, 0, 1, i32::MAX / 2, i32::MAX];
    for tile in [TILE_SIZE, TileSize::new(i32::MAX, i32::MAX), TileSize::new(i32::MIN, 3)] {
        for &x in &edges {
            for &y in &edges {
                assert_eq!(iso_x(x, y, tile), -iso_x(y, x, tile), "x={x} y={y}");
                assert_eq!(iso_y(x, y, tile), iso_y(y, x, tile), "x={x} y={y}");
            }
        }
    }
}
