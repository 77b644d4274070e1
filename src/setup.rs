use crate::camera::spawn_camera;
use crate::hud::spawn_hud;
use bevy::prelude::*;

/// Initial setup system that runs on startup.
pub fn setup(mut commands: Commands) {
    // Spawn the canvas camera
    spawn_camera(&mut commands);

    // Spawn all HUD elements
    spawn_hud(&mut commands);
}
