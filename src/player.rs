//! The player character.

use macroquad::math::{ivec2, IVec2, Rect};

use crate::asset::{Sprite, SpriteId};
use crate::command::{DrawCommand, Surface};
use crate::config::PlayerSettings;
use crate::input::MoveInput;

/// Side length of the player quad in pixels.
pub const PLAYER_SIZE: f32 = 64.0;

/// The one movable character. Position is in screen pixels and unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    x: i32,
    y: i32,
    speed: i32,
    sprite: Sprite,
}

impl Player {
    /// Player at the configured start position.
    pub fn new(settings: &PlayerSettings, sprite: Sprite) -> Self {
        if sprite.is_loaded() {
            log::info!("Player texture loaded successfully.");
        } else {
            log::warn!("Player texture missing, player will not be drawn");
        }
        Player {
            x: settings.start[0],
            y: settings.start[1],
            speed: settings.speed,
            sprite,
        }
    }

    /// Move one step per held direction. Diagonals are not normalised.
    pub fn handle_input(&mut self, input: MoveInput) {
        if input.left {
            self.x -= self.speed;
        }
        if input.right {
            self.x += self.speed;
        }
        if input.up {
            self.y -= self.speed;
        }
        if input.down {
            self.y += self.speed;
        }
    }

    /// Current top-left corner in screen pixels.
    pub fn position(&self) -> IVec2 {
        ivec2(self.x, self.y)
    }

    /// Pixels per step.
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Draw the 64×64 sprite at the current position. No-op without a sprite.
    pub fn render(&self, surface: &mut impl Surface) {
        if !self.sprite.is_loaded() {
            return;
        }
        surface.draw(DrawCommand::new(
            SpriteId::Player,
            Rect::new(self.x as f32, self.y as f32, PLAYER_SIZE, PLAYER_SIZE),
        ));
    }
}
