//! Window-side loop: poll input, update, draw, wait for the next frame.

use macroquad::input::{
    is_mouse_button_pressed, is_quit_requested, mouse_position, prevent_quit, MouseButton,
};
use macroquad::math::ivec2;
use macroquad::window::next_frame;

use crate::asset::{Assets, SpriteId};
use crate::command::MacroquadSurface;
use crate::config::Settings;
use crate::input::MoveInput;
use crate::map::MapGrid;
use crate::scene::Scene;

/// Run the game until the window is closed.
pub async fn run(settings: Settings) {
    prevent_quit();

    let assets = Assets::load(&settings.assets).await;

    let mut scene = Scene::new();
    scene.init(&settings, assets.sprite(SpriteId::Player));

    if settings.draw_map {
        let mut map = MapGrid::new().with_origin(settings.map_origin());
        map.load(&settings.assets.map);
        scene.attach_map(map);
    }

    let mut surface = MacroquadSurface::new(&assets);
    log::info!("Entering main loop");
    loop {
        if is_quit_requested() {
            break;
        }

        scene.handle_input(MoveInput::sample());
        if is_mouse_button_pressed(MouseButton::Left) {
            log_picked_tile(&scene);
        }
        scene.render(&mut surface);
        log::trace!("Game rendered");

        next_frame().await;
    }
    log::info!("Quit requested after {} frames, shutting down", surface.frames());
}

fn log_picked_tile(scene: &Scene) {
    let Some(map) = scene.map() else {
        return;
    };
    let (mx, my) = mouse_position();
    match map.cell_at(ivec2(mx as i32, my as i32)) {
        Some(cell) => log::info!(
            "Clicked tile ({}, {}) = {}",
            cell.x,
            cell.y,
            map.get(cell.x, cell.y).raw()
        ),
        None => log::debug!("Clicked outside the map at ({}, {})", mx, my),
    }
}
