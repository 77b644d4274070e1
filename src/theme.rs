use bevy::prelude::*;

// Window
pub const WINDOW_TITLE: &str = "Elevy";

// Canvas
pub const CANVAS_SIZE: f32 = 600.0;

// UI Colors
pub const NORMAL_BUTTON: Color = Color::srgb(0.15, 0.15, 0.15);
pub const HOVERED_BUTTON: Color = Color::srgb(0.25, 0.25, 0.25);
pub const PRESSED_BUTTON: Color = Color::srgb(1.0, 0.6, 0.0);

// Button Outline Colors
pub const NORMAL_BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);
pub const HOVERED_BUTTON_OUTLINE_COLOR: Color = Color::srgb(0.99, 0.99, 0.99);
pub const PRESSED_BUTTON_OUTLINE_COLOR: Color = Color::srgb(1.0, 0.6, 0.0);

// Canvas Drawing
pub const CONTROL_POINT_RADIUS: f32 = 10.0;
pub const CONTROL_POINT_COLOR: Color = Color::srgba(1.0, 0.75, 0.0, 1.0);
pub const CURVE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 1.0);
pub const CONTROL_POLYGON_COLOR: Color = Color::srgb(0.8, 0.0, 0.0);
pub const ELEVATED_POLYGON_COLOR: Color = Color::srgba(0.0, 1.0, 0.4, 1.0);
pub const CANVAS_FRAME_COLOR: Color = Color::srgb(0.3, 0.3, 0.3);
pub const DEBUG_CROSS_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

// Background Color
pub const BACKGROUND_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

// Button Styling
pub const BUTTON_BORDER_RADIUS: f32 = 8.0;

pub fn get_default_text_style() -> TextFont {
    TextFont {
        font_size: 16.0,
        ..default()
    }
}
