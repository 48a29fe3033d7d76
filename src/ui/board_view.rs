//! Board rendering for the morris GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Piece, Pos, BOARD_SIZE, WIN_LINES};
use crate::search::Move;
use crate::BoardState;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Distance between neighboring points
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 150.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked point if any
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &BoardState,
        last_move: Option<Move>,
        selected: Option<Pos>,
        slide_targets: &[Pos],
        winning_line: Option<[Pos; 3]>,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board that fits the panel
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(2.0 * BOARD_MARGIN + 60.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        painter.rect_stroke(
            self.board_rect,
            CornerRadius::same(4),
            Stroke::new(2.0, BOARD_BORDER),
            egui::StrokeKind::Inside,
        );

        self.draw_lines(&painter);
        self.draw_points(&painter);
        self.draw_pieces(&painter, state);

        if let Some(mv) = last_move {
            let pos = match mv {
                Move::Placement(pos) => pos,
                Move::Slide { to, .. } => to,
            };
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(pos) = selected {
            self.draw_selection(&painter, pos);
        }
        for &pos in slide_targets {
            self.draw_slide_target(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !interactive {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let cell = state.board[board_pos.y as usize][board_pos.x as usize];
        if state.is_placement_phase {
            self.draw_hover_preview(&painter, board_pos, state.current_player, cell == Piece::Empty);
        }

        response.clicked().then_some(board_pos)
    }

    /// Rows, columns and the two diagonals through the center
    fn draw_lines(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        for line in WIN_LINES {
            let start = self.board_to_screen(line[0]);
            let end = self.board_to_screen(line[2]);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_points(&self, painter: &Painter) {
        for pos in Pos::all() {
            painter.circle_filled(self.board_to_screen(pos), POINT_RADIUS, POINT_MARKER);
        }
    }

    fn draw_pieces(&self, painter: &Painter, state: &BoardState) {
        for pos in Pos::all() {
            let piece = state.board[pos.y as usize][pos.x as usize];
            if piece != Piece::Empty {
                self.draw_piece(painter, pos, piece);
            }
        }
    }

    /// Draw a single piece with visual polish
    fn draw_piece(&self, painter: &Painter, pos: Pos, piece: Piece) {
        let center = self.board_to_screen(pos);
        let radius = self.piece_radius();
        let shadow_offset = Vec2::new(3.0, 3.0);

        match piece {
            Piece::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_PIECE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_PIECE_HIGHLIGHT);
            }
            Piece::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_PIECE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_PIECE_SHADOW));
            }
            Piece::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_selection(&self, painter: &Painter, pos: Pos) {
        let radius = self.piece_radius() + 5.0;
        painter.circle_stroke(self.board_to_screen(pos), radius, Stroke::new(4.0, SELECTION_RING));
    }

    fn draw_slide_target(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), self.piece_radius() * 0.6, slide_target());
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        painter.line_segment([self.board_to_screen(line[0]), self.board_to_screen(line[2])], stroke);

        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), self.piece_radius() + 4.0, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Piece, is_valid: bool) {
        let color = if is_valid {
            match turn {
                Piece::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Piece::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Piece::Empty => return,
            }
        } else {
            hover_invalid()
        };
        painter.circle_filled(self.board_to_screen(pos), self.piece_radius(), color);
    }

    #[inline]
    fn piece_radius(&self) -> f32 {
        self.cell_size * PIECE_RADIUS_RATIO
    }

    /// Convert screen coordinates to the nearest board point
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        let y = ((relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        Pos::try_new(x, y)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
