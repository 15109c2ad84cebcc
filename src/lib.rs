#![warn(missing_docs)]

//! Minimal isometric tile map and player scaffold for Macroquad.

pub mod asset;
pub mod command;
pub mod config;
mod error;
pub mod host;
pub mod input;
pub mod iso;
pub mod logging;
pub mod map;
pub mod player;
pub mod scene;

pub use asset::{AssetStatus, Assets, Sprite, SpriteId};
pub use command::{DrawCommand, MacroquadSurface, RecordingSurface, Surface, SurfaceOp};
pub use config::{Settings, SETTINGS_PATH};
pub use error::Error;
pub use input::MoveInput;
pub use iso::{grid_to_screen, iso_x, iso_y, screen_to_grid, TileSize, TILE_SIZE};
pub use map::{MapGrid, TileType, MAP_SIZE};
pub use player::Player;
pub use scene::Scene;
