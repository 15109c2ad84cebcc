//! Texture loading and sprite handles.

use std::collections::HashMap;

use macroquad::texture::{load_texture, FilterMode, Texture2D};

use crate::config::AssetPaths;

/// Textures the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    /// Image shared by every non-empty map tile
    Tile,
    /// Player character
    Player,
}

/// Whether a resource is usable or the owner runs degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    /// Loaded and ready
    Loaded,
    /// Failed to load; drawing it is a no-op
    Missing,
}

/// Handle to a texture plus its load status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Texture key in [`Assets`]
    pub id: SpriteId,
    /// Load outcome
    pub status: AssetStatus,
}

impl Sprite {
    /// Handle to a texture that loaded.
    pub fn loaded(id: SpriteId) -> Self {
        Sprite { id, status: AssetStatus::Loaded }
    }

    /// Handle to a texture that failed to load.
    pub fn missing(id: SpriteId) -> Self {
        Sprite { id, status: AssetStatus::Missing }
    }

    /// True when the texture is usable.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.status == AssetStatus::Loaded
    }
}

/// Loaded textures, keyed by sprite id. Lives as long as the window.
#[derive(Default)]
pub struct Assets {
    textures: HashMap<SpriteId, Texture2D>,
}

impl Assets {
    /// Load every sprite listed in `paths`. Failures are logged and leave
    /// that sprite [`AssetStatus::Missing`].
    pub async fn load(paths: &AssetPaths) -> Self {
        let mut assets = Assets::default();
        assets.load_one(SpriteId::Tile, &paths.tile_sprite).await;
        assets.load_one(SpriteId::Player, &paths.player_sprite).await;
        assets
    }

    async fn load_one(&mut self, id: SpriteId, path: &str) -> AssetStatus {
        match load_texture(path).await {
            Ok(tex) => {
                tex.set_filter(FilterMode::Nearest);
                log::info!("Loaded {:?} texture from {}", id, path);
                self.textures.insert(id, tex);
                AssetStatus::Loaded
            }
            Err(err) => {
                log::warn!("Failed to load {:?} texture from {}: {}", id, path, err);
                AssetStatus::Missing
            }
        }
    }

    /// Texture for `id`, if it loaded.
    pub fn texture(&self, id: SpriteId) -> Option<&Texture2D> {
        self.textures.get(&id)
    }

    /// Handle for `id` carrying its load status.
    pub fn sprite(&self, id: SpriteId) -> Sprite {
        if self.textures.contains_key(&id) {
            Sprite::loaded(id)
        } else {
            Sprite::missing(id)
        }
    }
}
