//! Board rendering for the Octi GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Direction, Move, Player, Pos, BOARD_SIZE};

use super::theme::*;

/// What the board view needs to draw one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub to_move: Player,
    pub selected: Option<Pos>,
    /// Cells the selected pod can reach this turn
    pub targets: &'a [Pos],
    pub last_move: Option<&'a Move>,
    pub suggestion: Option<&'a Move>,
    /// Whether clicks are accepted
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(200.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_bases(&painter, frame.board);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);

        if let Some(mv) = frame.suggestion {
            self.draw_suggestion(&painter, mv);
        }

        self.draw_pods(&painter, frame.board, frame.to_move, frame.selected);

        if let Some(mv) = frame.last_move {
            self.draw_last_move(&painter, mv);
        }

        for &target in frame.targets {
            painter.circle_filled(self.cell_center(target), TARGET_DOT_RADIUS, TARGET_DOT);
        }

        if !frame.interactive {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if let Some(pos) = hovered {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, hover_cell());
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Tint base cells with their owner's color
    fn draw_bases(&self, painter: &Painter, board: &Board) {
        for player in Player::BOTH {
            for pos in board.bases_of(player) {
                painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, base_color(player));
            }
        }
    }

    /// Draw the 8x8 cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw row and column indices (0-7), matching the move notation
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let center = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;
            let label = i.to_string();

            // Column index, top
            let pos = Pos2::new(self.board_rect.min.x + center, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), LABEL);

            // Row index, left
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, self.board_rect.min.y + center);
            painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), LABEL);
        }
    }

    /// Draw all pods with their prongs
    fn draw_pods(&self, painter: &Painter, board: &Board, to_move: Player, selected: Option<Pos>) {
        let radius = self.cell_size * POD_RADIUS_RATIO;

        for player in Player::BOTH {
            for (pos, pod) in board.pods_of(player) {
                let center = self.cell_center(pos);

                // Prongs under the body so the body edge stays clean
                for dir in pod.prongs.iter() {
                    self.draw_prong(painter, center, dir);
                }

                painter.circle_filled(center, radius, pod_color(player));

                // Highlight the side to move
                if player == to_move {
                    painter.circle_stroke(center, radius + 2.0, Stroke::new(2.0, TO_MOVE_RING));
                }
                if selected == Some(pos) {
                    painter.circle_stroke(center, radius + 5.0, Stroke::new(3.0, SELECTED_RING));
                }
            }
        }
    }

    fn draw_prong(&self, painter: &Painter, center: Pos2, dir: Direction) {
        let (dr, dc) = dir.delta();
        let length = self.cell_size * PRONG_LENGTH_RATIO;
        let tip = center + Vec2::new(dc as f32 * length, dr as f32 * length);
        painter.line_segment([center, tip], Stroke::new(PRONG_WIDTH + 2.0, PRONG_OUTLINE));
        painter.line_segment([center, tip], Stroke::new(PRONG_WIDTH, PRONG));
        painter.circle_filled(tip, PRONG_WIDTH, PRONG);
    }

    /// Trace the last move: a line through every landing, a dot at the end
    fn draw_last_move(&self, painter: &Painter, mv: &Move) {
        let stroke = Stroke::new(2.0, LAST_MOVE_MARKER);
        match mv {
            Move::Step { from, to } => {
                painter.line_segment([self.cell_center(*from), self.cell_center(*to)], stroke);
            }
            Move::Jump { from, path } => {
                let mut at = *from;
                for &landing in path {
                    painter.line_segment([self.cell_center(at), self.cell_center(landing)], stroke);
                    at = landing;
                }
            }
            Move::ProngAdd { .. } => {}
        }
        painter.circle_filled(self.cell_center(mv.target()), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Shade the origin and target cells of a suggested move
    fn draw_suggestion(&self, painter: &Painter, mv: &Move) {
        painter.rect_filled(self.cell_rect(mv.origin()), CornerRadius::ZERO, suggestion_fill());
        if mv.target() != mv.origin() {
            painter.rect_filled(self.cell_rect(mv.target()), CornerRadius::ZERO, suggestion_fill());
        }
        if let Move::ProngAdd { at, direction } = mv {
            painter.text(
                self.cell_center(*at) + Vec2::new(0.0, self.cell_size * 0.38),
                egui::Align2::CENTER_CENTER,
                format!("+{}", direction),
                egui::FontId::proportional(12.0),
                LABEL,
            );
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert board position to the screen coordinates of its cell center
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
