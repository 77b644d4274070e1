//! HUD: display toggles, elevation step controls, and status readouts.

use crate::cli::CliArgs;
use crate::editor::PointEditor;
use crate::performance::FrameStats;
use crate::theme::{
    get_default_text_style, BUTTON_BORDER_RADIUS, HOVERED_BUTTON, HOVERED_BUTTON_OUTLINE_COLOR,
    NORMAL_BUTTON, NORMAL_BUTTON_OUTLINE_COLOR, PRESSED_BUTTON, PRESSED_BUTTON_OUTLINE_COLOR,
};
use bevy::prelude::*;

/// Display flags and parameters driven by the HUD
#[derive(Resource, Debug)]
pub struct DisplaySettings {
    /// Draw the generation-0 control polygon
    pub show_control_polygon: bool,
    /// Draw the degree-elevated generations
    pub show_elevation_polygons: bool,
    /// How many times to elevate per redraw, never negative
    pub elevation_steps: i32,
    /// Curve sampling resolution, independent of the polygon's degree
    pub curve_samples: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_control_polygon: true,
            show_elevation_polygons: true,
            elevation_steps: 1,
            curve_samples: 100,
        }
    }
}

impl DisplaySettings {
    /// Initial settings from the command line
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            elevation_steps: args.initial_steps(),
            curve_samples: args.samples.max(1),
            ..Default::default()
        }
    }

    /// Set the elevation step count, clamping negative values to 0
    pub fn set_steps(&mut self, steps: i32) {
        self.elevation_steps = steps.max(0);
    }
}

/// Which HUD control a button drives
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    TogglePolygon,
    ToggleElevations,
    StepsDown,
    StepsUp,
    Clear,
}

#[derive(Component)]
pub struct StepsText;

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct PointCountText;

/// Spawns all HUD elements: the button row and the status readouts
pub fn spawn_hud(commands: &mut Commands) {
    const BUTTONS: [(&str, ControlButton); 5] = [
        ("Polygon", ControlButton::TogglePolygon),
        ("Elevations", ControlButton::ToggleElevations),
        ("-", ControlButton::StepsDown),
        ("+", ControlButton::StepsUp),
        ("Clear", ControlButton::Clear),
    ];

    // Button row along the bottom edge
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            left: Val::Px(16.0),
            flex_direction: FlexDirection::Row,
            ..default()
        })
        .with_children(|parent| {
            for (label, button) in BUTTONS {
                parent
                    .spawn(Node {
                        margin: UiRect::all(Val::Px(4.0)),
                        ..default()
                    })
                    .with_children(|button_container| {
                        button_container
                            .spawn((
                                Button,
                                button,
                                Node {
                                    padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                                    border: UiRect::all(Val::Px(2.0)),
                                    justify_content: JustifyContent::Center,
                                    align_items: AlignItems::Center,
                                    ..default()
                                },
                                BorderColor(NORMAL_BUTTON_OUTLINE_COLOR),
                                BorderRadius::all(Val::Px(BUTTON_BORDER_RADIUS)),
                                BackgroundColor(NORMAL_BUTTON),
                            ))
                            .with_children(|button_node| {
                                button_node.spawn((
                                    Text::new(label),
                                    get_default_text_style(),
                                    TextColor(Color::WHITE),
                                ));
                            });
                    });
            }
        });

    // Read-only status displays
    commands.spawn((
        StepsText,
        Text::new("Steps: 0"),
        get_default_text_style(),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            ..default()
        },
    ));
    commands.spawn((
        PointCountText,
        Text::new("Points: 0"),
        get_default_text_style(),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(40.0),
            left: Val::Px(16.0),
            ..default()
        },
    ));
    commands.spawn((
        FpsText,
        Text::new("FPS: 0"),
        get_default_text_style(),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            right: Val::Px(16.0),
            ..default()
        },
    ));
}

/// System that applies button presses to the display settings and the editor
pub fn handle_control_buttons(
    interaction_query: Query<(&Interaction, &ControlButton), (Changed<Interaction>, With<Button>)>,
    mut settings: ResMut<DisplaySettings>,
    mut editor: ResMut<PointEditor>,
) {
    for (interaction, button) in &interaction_query {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            ControlButton::TogglePolygon => {
                settings.show_control_polygon = !settings.show_control_polygon;
            }
            ControlButton::ToggleElevations => {
                settings.show_elevation_polygons = !settings.show_elevation_polygons;
            }
            ControlButton::StepsDown => {
                let steps = settings.elevation_steps - 1;
                settings.set_steps(steps);
            }
            ControlButton::StepsUp => {
                let steps = settings.elevation_steps + 1;
                settings.set_steps(steps);
            }
            ControlButton::Clear => {
                // Clearing an empty canvas is a no-op
                if editor.is_empty() {
                    debug!("Clear pressed with no control points");
                } else {
                    editor.clear();
                    info!("Cleared all control points");
                }
            }
        }
    }
}

/// System that updates button colors from hover state and the active toggles
pub fn update_button_colors(
    mut button_query: Query<
        (
            &Interaction,
            &ControlButton,
            &mut BackgroundColor,
            &mut BorderColor,
        ),
        With<Button>,
    >,
    settings: Res<DisplaySettings>,
) {
    for (interaction, button, mut color, mut border_color) in &mut button_query {
        let is_active = match button {
            ControlButton::TogglePolygon => settings.show_control_polygon,
            ControlButton::ToggleElevations => settings.show_elevation_polygons,
            _ => false,
        };

        match (*interaction, is_active) {
            (Interaction::Pressed, _) | (_, true) => {
                *color = PRESSED_BUTTON.into();
                border_color.0 = PRESSED_BUTTON_OUTLINE_COLOR;
            }
            (Interaction::Hovered, false) => {
                *color = HOVERED_BUTTON.into();
                border_color.0 = HOVERED_BUTTON_OUTLINE_COLOR;
            }
            (Interaction::None, false) => {
                *color = NORMAL_BUTTON.into();
                border_color.0 = NORMAL_BUTTON_OUTLINE_COLOR;
            }
        }
    }
}

/// System that refreshes the steps, point-count, and FPS readouts
pub fn update_status_text(
    settings: Res<DisplaySettings>,
    editor: Res<PointEditor>,
    stats: Res<FrameStats>,
    mut steps_query: Query<&mut Text, (With<StepsText>, Without<FpsText>, Without<PointCountText>)>,
    mut fps_query: Query<&mut Text, (With<FpsText>, Without<StepsText>, Without<PointCountText>)>,
    mut count_query: Query<&mut Text, (With<PointCountText>, Without<StepsText>, Without<FpsText>)>,
) {
    if let Ok(mut text) = steps_query.get_single_mut() {
        text.0 = format!("Steps: {}", settings.elevation_steps);
    }
    if let Ok(mut text) = fps_query.get_single_mut() {
        text.0 = format!("FPS: {:.0}", stats.fps().unwrap_or(0.0));
    }
    if let Ok(mut text) = count_query.get_single_mut() {
        text.0 = format!("Points: {}", editor.len());
    }
}
