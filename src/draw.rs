//! Drawing algorithms and helpers
//!
//! Everything is drawn with immediate-mode gizmos, so the scene is rebuilt
//! from the current control points on every frame; there is nothing to
//! invalidate or clean up between redraws.

use crate::cli::CliArgs;
use crate::editor::PointEditor;
use crate::geometry::{elevation_sequence, sample_curve};
use crate::hud::DisplaySettings;
use crate::theme::{
    CANVAS_FRAME_COLOR, CANVAS_SIZE, CONTROL_POINT_COLOR, CONTROL_POINT_RADIUS,
    CONTROL_POLYGON_COLOR, CURVE_COLOR, DEBUG_CROSS_COLOR, ELEVATED_POLYGON_COLOR,
};
use bevy::prelude::*;
use kurbo::Point;

fn to_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// System that draws the canvas frame and optional debug geometry
pub fn draw_canvas_frame(mut gizmos: Gizmos, cli_args: Res<CliArgs>) {
    let center = Vec2::splat(CANVAS_SIZE / 2.0);
    gizmos.rect_2d(center, Vec2::splat(CANVAS_SIZE), CANVAS_FRAME_COLOR);

    // Origin cross for checking the coordinate mapping
    if cli_args.debug {
        gizmos.line_2d(
            Vec2::new(-64.0, 0.0),
            Vec2::new(64.0, 0.0),
            DEBUG_CROSS_COLOR,
        );
        gizmos.line_2d(
            Vec2::new(0.0, -64.0),
            Vec2::new(0.0, 64.0),
            DEBUG_CROSS_COLOR,
        );
    }
}

/// System that draws every control point as a uniform circle marker
pub fn draw_control_points(mut gizmos: Gizmos, editor: Res<PointEditor>) {
    for point in editor.points() {
        gizmos.circle_2d(to_vec2(*point), CONTROL_POINT_RADIUS, CONTROL_POINT_COLOR);
    }
}

/// System that draws the Bézier curve through the current control points
pub fn draw_curve(mut gizmos: Gizmos, editor: Res<PointEditor>, settings: Res<DisplaySettings>) {
    // The curve is undefined below two points
    if editor.len() < 2 {
        return;
    }
    let samples = sample_curve(editor.points(), settings.curve_samples);
    gizmos.linestrip_2d(samples.into_iter().map(to_vec2), CURVE_COLOR);
}

/// System that draws the control polygon and its degree-elevated generations
pub fn draw_elevation_polygons(
    mut gizmos: Gizmos,
    editor: Res<PointEditor>,
    settings: Res<DisplaySettings>,
) {
    if editor.len() < 2 {
        return;
    }
    if !settings.show_control_polygon && !settings.show_elevation_polygons {
        return;
    }

    let generations = elevation_sequence(editor.points(), settings.elevation_steps);

    if settings.show_control_polygon {
        gizmos.linestrip_2d(
            generations[0].iter().copied().map(to_vec2),
            CONTROL_POLYGON_COLOR,
        );
    }

    if settings.show_elevation_polygons {
        for polygon in generations.iter().skip(1) {
            gizmos.linestrip_2d(polygon.iter().copied().map(to_vec2), ELEVATED_POLYGON_COLOR);
        }
    }
}
