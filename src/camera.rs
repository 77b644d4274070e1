use crate::theme::CANVAS_SIZE;
use bevy::prelude::*;

/// Marker for the camera that views the design canvas
#[derive(Component)]
pub struct DesignCamera;

/// Spawn the canvas camera.
///
/// The camera is centered on the canvas so that world coordinates match
/// canvas pixels one to one: origin at the bottom-left corner, y up. The
/// same mapping is used for hit-testing and for rendering.
pub fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera2d,
        DesignCamera,
        Transform::from_xyz(CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0, 0.0),
    ));
}

/// Convert a viewport position (origin top-left, y down) to canvas coordinates
pub fn viewport_to_canvas(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    pos: Vec2,
) -> Option<Vec2> {
    camera.viewport_to_world_2d(camera_transform, pos).ok()
}

/// Current cursor position in canvas coordinates, if the cursor is inside the window
pub fn cursor_world_position(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Vec2> {
    window
        .cursor_position()
        .and_then(|pos| viewport_to_canvas(camera, camera_transform, pos))
}
