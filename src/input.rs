//! Keyboard sampling.

use std::ops::BitOr;

use macroquad::input::{is_key_down, KeyCode};

/// Directions held during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    /// Left arrow
    pub left: bool,
    /// Right arrow
    pub right: bool,
    /// Up arrow
    pub up: bool,
    /// Down arrow
    pub down: bool,
}

impl MoveInput {
    /// Nothing held.
    pub const NONE: MoveInput = MoveInput { left: false, right: false, up: false, down: false };
    /// Only left held.
    pub const LEFT: MoveInput = MoveInput { left: true, ..MoveInput::NONE };
    /// Only right held.
    pub const RIGHT: MoveInput = MoveInput { right: true, ..MoveInput::NONE };
    /// Only up held.
    pub const UP: MoveInput = MoveInput { up: true, ..MoveInput::NONE };
    /// Only down held.
    pub const DOWN: MoveInput = MoveInput { down: true, ..MoveInput::NONE };

    /// Read the arrow keys from the current keyboard state.
    pub fn sample() -> Self {
        MoveInput {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
        }
    }

    /// True if any direction is held.
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

impl BitOr for MoveInput {
    type Output = MoveInput;

    fn bitor(self, rhs: MoveInput) -> MoveInput {
        MoveInput {
            left: self.left || rhs.left,
            right: self.right || rhs.right,
            up: self.up || rhs.up,
            down: self.down || rhs.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_directions_keeps_both() {
        let held = MoveInput::UP | MoveInput::RIGHT;
        assert!(held.up && held.right);
        assert!(!held.left && !held.down);
        assert!(!MoveInput::NONE.any());
    }
}
