// Creates the app and adds the plugins and systems
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};

use crate::cli::CliArgs;
use crate::draw::{draw_canvas_frame, draw_control_points, draw_curve, draw_elevation_polygons};
use crate::editor::PointEditor;
use crate::hud::{
    handle_control_buttons, update_button_colors, update_status_text, DisplaySettings,
};
use crate::input::handle_pointer_input;
use crate::performance::{log_frame_stats, track_frame_times, FrameStats};
use crate::setup::setup;
use crate::theme::{BACKGROUND_COLOR, CANVAS_SIZE, WINDOW_TITLE};

// Create the app and add the plugins and systems
pub fn create_app(args: CliArgs) -> App {
    let mut app = App::new();

    let window_config = Window {
        title: WINDOW_TITLE.into(),
        resolution: (CANVAS_SIZE, CANVAS_SIZE).into(),
        resizable: false,
        ..default()
    };

    let window_plugin = WindowPlugin {
        primary_window: Some(window_config),
        ..default()
    };

    // Sequence of events to start and run the app
    // Pay attention to the order of the systems
    app.insert_resource(WinitSettings {
        // The scene redraws at display cadence, so keep winit running
        // continuously instead of using the reactive desktop preset
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::Continuous,
    })
    .insert_resource(ClearColor(BACKGROUND_COLOR))
    .insert_resource(PointEditor::default())
    .insert_resource(DisplaySettings::from_args(&args))
    .insert_resource(FrameStats::default())
    .insert_resource(args)
    .add_plugins(
        DefaultPlugins
            .set(ImagePlugin::default_nearest())
            .set(window_plugin)
            // The custom tracing subscriber is installed in main
            .disable::<LogPlugin>(),
    )
    // When the app starts, run the setup system and spawn everything
    .add_systems(Startup, setup)
    // Update the app and get input
    .add_systems(
        Update,
        (
            handle_pointer_input,
            handle_control_buttons,
            update_button_colors,
            update_status_text,
            track_frame_times,
            log_frame_stats,
            draw_canvas_frame,
            draw_control_points,
            draw_curve,
            draw_elevation_polygons,
        ),
    );
    app
}
