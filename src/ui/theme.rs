//! Theme constants for the checkers GUI

use egui::Color32;

use crate::{Category, Owner};

// Board colors
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(200, 30, 30);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(20, 20, 20);
pub const GRID_LINE: Color32 = Color32::from_rgb(255, 233, 0);

// Markers
pub const DESTINATION_HIGHLIGHT: Color32 = Color32::from_rgb(0, 186, 255);
pub const SELECTED_RING: Color32 = Color32::from_rgb(255, 233, 0);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(80, 200, 120);
pub const SUGGESTION_RING: Color32 = Color32::from_rgb(160, 110, 255);

// Panel colors
pub const SIDE_PANEL_BG: Color32 = Color32::from_rgb(0, 65, 0);
pub const CARD_BG: Color32 = Color32::from_rgb(20, 85, 20);
pub const SCREEN_BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(180, 200, 180);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(130, 160, 130);
pub const TEXT_DARK: Color32 = Color32::from_rgb(0, 0, 0);
pub const WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const BORDER_WIDTH: f32 = 5.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.4;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// How one piece category is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceStyle {
    pub fill: Color32,
    pub rim: Color32,
    /// Glyph drawn on top, e.g. a crown for kings
    pub glyph: Option<&'static str>,
}

/// Visuals for every category, handed to the board view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceStyles {
    pub cpu_man: PieceStyle,
    pub cpu_king: PieceStyle,
    pub human_man: PieceStyle,
    pub human_king: PieceStyle,
}

impl PieceStyles {
    pub fn get(&self, category: Category) -> &PieceStyle {
        match category {
            Category::Man(Owner::Cpu) => &self.cpu_man,
            Category::King(Owner::Cpu) => &self.cpu_king,
            Category::Man(Owner::Human) => &self.human_man,
            Category::King(Owner::Human) => &self.human_king,
        }
    }
}

impl Default for PieceStyles {
    fn default() -> Self {
        let cpu_fill = Color32::from_rgb(235, 235, 240);
        let cpu_rim = Color32::from_rgb(150, 150, 160);
        let human_fill = Color32::from_rgb(220, 40, 40);
        let human_rim = Color32::from_rgb(120, 10, 10);

        Self {
            cpu_man: PieceStyle { fill: cpu_fill, rim: cpu_rim, glyph: None },
            cpu_king: PieceStyle { fill: cpu_fill, rim: cpu_rim, glyph: Some("♛") },
            human_man: PieceStyle { fill: human_fill, rim: human_rim, glyph: None },
            human_king: PieceStyle { fill: human_fill, rim: human_rim, glyph: Some("♛") },
        }
    }
}
