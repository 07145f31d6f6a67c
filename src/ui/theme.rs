//! Theme constants for the Octi GUI

use egui::Color32;

use crate::Player;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(200, 200, 200);
pub const GRID_LINE: Color32 = Color32::from_rgb(100, 100, 100);
pub const LABEL: Color32 = Color32::from_rgb(60, 60, 60);

// Base cells
pub const FIRST_BASE: Color32 = Color32::from_rgb(150, 150, 255);
pub const SECOND_BASE: Color32 = Color32::from_rgb(255, 150, 150);

// Pods
pub const FIRST_POD: Color32 = Color32::from_rgb(50, 50, 200);
pub const SECOND_POD: Color32 = Color32::from_rgb(200, 50, 50);
pub const PRONG: Color32 = Color32::from_rgb(255, 220, 0);
pub const PRONG_OUTLINE: Color32 = Color32::from_rgb(90, 70, 0);
pub const TO_MOVE_RING: Color32 = Color32::from_rgb(255, 255, 255);

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(40, 220, 120);
pub const TARGET_DOT: Color32 = Color32::from_rgb(40, 180, 100);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_cell() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 60)
}

pub fn suggestion_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 220, 0, 90)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const POD_RADIUS_RATIO: f32 = 0.28;
pub const PRONG_LENGTH_RATIO: f32 = 0.42;
pub const PRONG_WIDTH: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const TARGET_DOT_RADIUS: f32 = 7.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Pod fill color for a player
pub fn pod_color(player: Player) -> Color32 {
    match player {
        Player::First => FIRST_POD,
        Player::Second => SECOND_POD,
    }
}

/// Base cell tint for a player
pub fn base_color(player: Player) -> Color32 {
    match player {
        Player::First => FIRST_BASE,
        Player::Second => SECOND_BASE,
    }
}

/// Display name for a player
pub fn player_name(player: Player) -> &'static str {
    match player {
        Player::First => "BLUE",
        Player::Second => "RED",
    }
}
