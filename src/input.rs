//! Translates raw mouse events into `PointEditor` mutations.

use crate::camera::{cursor_world_position, viewport_to_canvas, DesignCamera};
use crate::editor::{EditAction, PointEditor};
use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};

/// System to feed pointer events to the point editor.
///
/// Presses on empty canvas add points, presses near a point arm it for
/// dragging, and a release without a drag deletes it; the editor itself
/// decides which. Everything is converted to canvas coordinates through
/// the design camera, so hit-testing and rendering share one mapping.
pub fn handle_pointer_input(
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<DesignCamera>>,
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    mut cursor_moved_events: EventReader<CursorMoved>,
    mut cursor_left_events: EventReader<CursorLeft>,
    button_query: Query<&Interaction, With<Button>>,
    mut editor: ResMut<PointEditor>,
) {
    // Early return if no window
    let Ok(window) = windows.get_single() else {
        return;
    };

    // Early return if no camera
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };

    // Clicks on HUD buttons must not reach the canvas
    let over_ui = button_query
        .iter()
        .any(|interaction| *interaction != Interaction::None);

    if mouse_button_input.just_pressed(MouseButton::Left) && !over_ui {
        if let Some(pos) = cursor_world_position(window, camera, camera_transform) {
            match editor.pointer_down(to_point(pos)) {
                EditAction::Added(index) => {
                    info!("Added control point {} at ({:.1}, {:.1})", index, pos.x, pos.y);
                }
                EditAction::Grabbed(index) => {
                    debug!("Armed control point {} for dragging", index);
                }
                _ => {}
            }
        }
    }

    for moved in cursor_moved_events.read() {
        if let Some(pos) = viewport_to_canvas(camera, camera_transform, moved.position) {
            editor.pointer_move(to_point(pos));
        }
    }

    if mouse_button_input.just_released(MouseButton::Left) {
        finish_interaction(&mut editor);
    }

    // Leaving the window ends the interaction the same way a release does
    if !cursor_left_events.is_empty() {
        cursor_left_events.clear();
        finish_interaction(&mut editor);
    }
}

fn finish_interaction(editor: &mut PointEditor) {
    match editor.pointer_up() {
        EditAction::Removed(index) => {
            info!("Removed control point {}", index);
        }
        EditAction::Released(index) => {
            debug!("Finished dragging control point {}", index);
        }
        _ => {}
    }
}

fn to_point(pos: Vec2) -> kurbo::Point {
    kurbo::Point::new(pos.x as f64, pos.y as f64)
}
