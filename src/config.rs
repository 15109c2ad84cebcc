//! Game settings, read from an optional JSON file.

use macroquad::math::{ivec2, IVec2};
use macroquad::window::Conf;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Default settings file, relative to the working directory.
pub const SETTINGS_PATH: &str = "game.json";

/// Top-level settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window parameters
    pub window: WindowSettings,
    /// Player start state
    pub player: PlayerSettings,
    /// Resource paths
    pub assets: AssetPaths,
    /// File the log is appended to
    pub log_file: PathBuf,
    /// Draw the tile map each frame
    pub draw_map: bool,
    /// Screen offset of map cell (0, 0)
    pub map_origin: [i32; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window: WindowSettings::default(),
            player: PlayerSettings::default(),
            assets: AssetPaths::default(),
            log_file: PathBuf::from("game.log"),
            draw_map: false,
            map_origin: [0, 0],
        }
    }
}

impl Settings {
    /// Parse settings from JSON text. `path` is only used for errors.
    pub fn from_json(txt: &str, path: &Path) -> Result<Self, Error> {
        serde_json::from_str(txt).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read settings from `path`. `Ok(None)` when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, Error> {
        let p = path.as_ref();
        let txt = match std::fs::read_to_string(p) {
            Ok(txt) => txt,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::Io {
                    path: p.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json(&txt, p).map(Some)
    }

    /// Map origin as a vector.
    pub fn map_origin(&self) -> IVec2 {
        ivec2(self.map_origin[0], self.map_origin[1])
    }
}

/// Window parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Title bar text
    pub title: String,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            title: "Game".to_owned(),
            width: 800,
            height: 600,
        }
    }
}

impl WindowSettings {
    /// Macroquad window configuration. Macroquad centers the window itself.
    pub fn to_conf(&self) -> Conf {
        Conf {
            window_title: self.title.clone(),
            window_width: self.width,
            window_height: self.height,
            window_resizable: false,
            ..Default::default()
        }
    }
}

/// Player start state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Start position in screen pixels
    pub start: [i32; 2],
    /// Pixels moved per frame per held direction
    pub speed: i32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        PlayerSettings {
            start: [100, 100],
            speed: 5,
        }
    }
}

/// Resource paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Player image
    pub player_sprite: String,
    /// Tile image
    pub tile_sprite: String,
    /// Map text file
    pub map: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            player_sprite: "assets/images/player.png".to_owned(),
            tile_sprite: "assets/images/tile.png".to_owned(),
            map: PathBuf::from("assets/maps/level1.txt"),
        }
    }
}
