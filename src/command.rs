//! Draw commands and the surfaces that execute them.

use macroquad::color::{Color, WHITE};
use macroquad::math::{vec2, Rect};
use macroquad::texture::{draw_texture_ex, DrawTextureParams};
use macroquad::window::clear_background;

use crate::asset::{Assets, SpriteId};

/// One textured quad to put on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Which loaded texture to draw
    pub sprite: SpriteId,
    /// Screen-space destination rectangle, stretched to fit
    pub dest: Rect,
}

impl DrawCommand {
    /// Command drawing `sprite` into `dest`.
    pub fn new(sprite: SpriteId, dest: Rect) -> Self {
        DrawCommand { sprite, dest }
    }
}

/// Render target the scene draws into.
pub trait Surface {
    /// Fill the whole target with `color`.
    fn clear(&mut self, color: Color);
    /// Queue or execute one draw command.
    fn draw(&mut self, cmd: DrawCommand);
    /// Mark the frame complete.
    fn present(&mut self);
}

/// Operation recorded by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    /// `Surface::clear`
    Clear(Color),
    /// `Surface::draw`
    Draw(DrawCommand),
    /// `Surface::present`
    Present,
}

/// Surface that only records what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Operations in call order
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw commands only, in call order.
    pub fn draws(&self) -> Vec<DrawCommand> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Draw(cmd) => Some(*cmd),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.ops.push(SurfaceOp::Clear(color));
    }

    fn draw(&mut self, cmd: DrawCommand) {
        self.ops.push(SurfaceOp::Draw(cmd));
    }

    fn present(&mut self) {
        self.ops.push(SurfaceOp::Present);
    }
}

/// Surface backed by the Macroquad window.
///
/// Buffers are swapped by `next_frame().await` in the host loop, so
/// `present` only counts finished frames.
pub struct MacroquadSurface<'a> {
    assets: &'a Assets,
    frames: u64,
}

impl<'a> MacroquadSurface<'a> {
    /// Surface drawing with textures from `assets`.
    pub fn new(assets: &'a Assets) -> Self {
        MacroquadSurface { assets, frames: 0 }
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for MacroquadSurface<'_> {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn draw(&mut self, cmd: DrawCommand) {
        // A missing texture draws nothing.
        let Some(tex) = self.assets.texture(cmd.sprite) else {
            return;
        };
        draw_texture_ex(
            tex,
            cmd.dest.x,
            cmd.dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(cmd.dest.w, cmd.dest.h)),
                ..Default::default()
            },
        );
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!("Frame {} presented", self.frames);
    }
}
