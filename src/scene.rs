//! Per-frame orchestration.

use macroquad::color::Color;

use crate::asset::Sprite;
use crate::command::Surface;
use crate::config::Settings;
use crate::input::MoveInput;
use crate::map::MapGrid;
use crate::player::Player;

/// Opaque blue.
pub const BACKGROUND: Color = Color::new(0.0, 0.0, 1.0, 1.0);

/// Owns the player and, once attached, the map. Drives one frame at a time.
#[derive(Debug)]
pub struct Scene {
    player: Option<Player>,
    map: Option<MapGrid>,
    background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Empty scene with a blue background.
    pub fn new() -> Self {
        log::debug!("Scene created");
        Scene {
            player: None,
            map: None,
            background: BACKGROUND,
        }
    }

    /// Create the player from settings.
    pub fn init(&mut self, settings: &Settings, player_sprite: Sprite) {
        log::info!("Scene init started");
        self.player = Some(Player::new(&settings.player, player_sprite));
        log::info!("Player created");
    }

    /// Draw `map` under the player from now on.
    pub fn attach_map(&mut self, map: MapGrid) {
        log::info!("Map attached ({} tiles)", map.occupied());
        self.map = Some(map);
    }

    /// The player, once `init` ran.
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// The attached map, if any.
    pub fn map(&self) -> Option<&MapGrid> {
        self.map.as_ref()
    }

    /// Forward this frame's input to the player.
    pub fn handle_input(&mut self, input: MoveInput) {
        if let Some(player) = self.player.as_mut() {
            player.handle_input(input);
        }
    }

    /// Clear, draw the map if attached, draw the player, present.
    pub fn render(&self, surface: &mut impl Surface) {
        log::trace!("Render started");
        surface.clear(self.background);
        let c = self.background;
        log::trace!(
            "Current render color: R={}, G={}, B={}, A={}",
            (c.r * 255.0) as u8,
            (c.g * 255.0) as u8,
            (c.b * 255.0) as u8,
            (c.a * 255.0) as u8
        );

        if let Some(map) = &self.map {
            map.render(surface);
        }

        match &self.player {
            Some(player) => player.render(surface),
            None => log::warn!("Player is absent, nothing to draw"),
        }

        surface.present();
    }
}
