//! Board rendering for the checkers GUI

use crate::rules::{Destination, Move};
use crate::{Piece, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Piece visuals keyed by category
    styles: PieceStyles,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(PieceStyles::default())
    }
}

/// What the board should mark besides the pieces
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlays<'a> {
    pub selected: Option<Pos>,
    pub destinations: &'a [Destination],
    pub last_move: Option<Move>,
    pub suggested_move: Option<Move>,
}

impl BoardView {
    pub fn new(styles: PieceStyles) -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
            styles,
        }
    }

    /// Render the board and return the clicked square if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &crate::Board,
        overlays: Overlays<'_>,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board filling the smaller dimension
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(80.0);
        self.cell_size = board_size / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(board_size, board_size),
            Sense::click(),
        );

        self.board_rect = response.rect;

        self.draw_squares(&painter);

        for dest in overlays.destinations {
            self.fill_cell(&painter, dest.pos, DESTINATION_HIGHLIGHT);
        }

        self.draw_grid(&painter);

        if let Some(mv) = overlays.last_move {
            self.draw_last_move(&painter, mv);
        }

        self.draw_pieces(&painter, board);

        if let Some(pos) = overlays.selected {
            self.draw_ring(&painter, pos, SELECTED_RING);
        }

        if let Some(mv) = overlays.suggested_move {
            self.draw_ring(&painter, mv.from, SUGGESTION_RING);
            self.draw_ring(&painter, mv.to, SUGGESTION_RING);
        }

        if interactive && response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_board(p));
        }

        None
    }

    /// Alternate light and dark squares
    fn draw_squares(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                let color = if pos.is_dark() { DARK_SQUARE } else { LIGHT_SQUARE };
                self.fill_cell(painter, pos, color);
            }
        }
    }

    fn fill_cell(&self, painter: &Painter, pos: Pos, color: Color32) {
        painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, color);
    }

    /// Draw cell dividers and the outer border
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.board_rect.min;
        let size = self.cell_size * BOARD_SIZE as f32;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment([min + Vec2::new(offset, 0.0), min + Vec2::new(offset, size)], stroke);
            painter.line_segment([min + Vec2::new(0.0, offset), min + Vec2::new(size, offset)], stroke);
        }

        let border = Stroke::new(BORDER_WIDTH, GRID_LINE);
        let corners = [
            min,
            min + Vec2::new(size, 0.0),
            min + Vec2::new(size, size),
            min + Vec2::new(0.0, size),
        ];
        for i in 0..4 {
            painter.line_segment([corners[i], corners[(i + 1) % 4]], border);
        }
    }

    /// Draw all pieces
    fn draw_pieces(&self, painter: &Painter, board: &crate::Board) {
        for piece in board.all_pieces() {
            self.draw_piece(painter, piece);
        }
    }

    /// Draw a single piece with its category's style
    fn draw_piece(&self, painter: &Painter, piece: &Piece) {
        let style = self.styles.get(piece.category);
        let center = self.board_to_screen(piece.pos());
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 80),
        );
        painter.circle_filled(center, radius, style.fill);
        painter.circle_stroke(center, radius * 0.8, Stroke::new(radius * 0.08, style.rim));

        if let Some(glyph) = style.glyph {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(radius),
                style.rim,
            );
        }
    }

    fn draw_ring(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 4.0;
        painter.circle_stroke(center, radius, Stroke::new(3.0, color));
    }

    /// Dots on the origin and destination of the last move
    fn draw_last_move(&self, painter: &Painter, mv: Move) {
        for pos in [mv.from, mv.to] {
            let corner = self.cell_rect(pos).min + Vec2::splat(LAST_MOVE_MARKER_RADIUS * 2.0);
            painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
