//! Board rendering for the Renju GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Pos, Stone};

use super::game_state::GameState;
use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Board side in cells
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            size: crate::BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut GameState) -> Option<Pos> {
        self.size = state.board.size();
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / (self.size as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);

        if state.settings.show_coordinates {
            self.draw_coordinates(&painter);
        }

        for mv in &state.move_history {
            self.draw_stone(&painter, mv.pos, mv.stone);
            if state.settings.show_move_numbers {
                self.draw_move_number(&painter, mv.pos, mv.stone, mv.number);
            }
        }

        if let (Some(pos), false) = (state.last_move, state.settings.show_move_numbers) {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = state.game_over.and_then(|r| r.winning_line) {
            self.draw_winning_line(&painter, &line);
        }

        if state.game_over.is_some() {
            return None;
        }

        if state.settings.mark_forbidden {
            self.draw_forbidden_marks(&painter, state);
        }

        // Handle hover preview and click
        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        if !state.board.is_empty(board_pos) {
            return None;
        }

        let forbidden = state.forbidden_at(board_pos).is_some();
        self.draw_hover_preview(&painter, board_pos, state.current_turn, forbidden);

        // Forbidden clicks still go through so the game can say why
        response.clicked().then_some(board_pos)
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = BOARD_MARGIN + (self.size as f32 - 1.0) * self.cell_size;

        for i in 0..self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for pos in star_points(self.size) {
            painter.circle_filled(self.board_to_screen(pos), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels: letters along the bottom, numbers down the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let bottom = BOARD_MARGIN + (self.size as f32 - 1.0) * self.cell_size + 22.0;

        for i in 0..self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let letter = (b'A' + i as u8) as char;
            let pos = self.board_rect.min + Vec2::new(offset, bottom);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let pos = self.board_rect.min + Vec2::new(BOARD_MARGIN - 22.0, offset);
            painter.text(pos, egui::Align2::CENTER_CENTER, format!("{}", i + 1), font.clone(), GRID_LINE);
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_move_number(&self, painter: &Painter, pos: Pos, stone: Stone, number: usize) {
        painter.text(
            self.board_to_screen(pos),
            egui::Align2::CENTER_CENTER,
            number.to_string(),
            egui::FontId::proportional(self.cell_size * 0.4),
            move_number_color(stone == Stone::Black),
        );
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }

        // Draw circles around winning stones
        for &pos in line {
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Cross out every point Black may not play
    fn draw_forbidden_marks(&self, painter: &Painter, state: &mut GameState) {
        if state.current_turn != Stone::Black {
            return;
        }

        let empties: Vec<Pos> = state
            .board
            .positions()
            .filter(|&pos| state.board.is_empty(pos))
            .collect();

        let arm = self.cell_size * 0.2;
        let stroke = Stroke::new(2.0, FORBIDDEN_MARK);
        for pos in empties {
            if state.forbidden_at(pos).is_none() {
                continue;
            }
            let c = self.board_to_screen(pos);
            painter.line_segment([c + Vec2::new(-arm, -arm), c + Vec2::new(arm, arm)], stroke);
            painter.line_segment([c + Vec2::new(-arm, arm), c + Vec2::new(arm, -arm)], stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone, forbidden: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if forbidden {
            hover_invalid()
        } else {
            match turn {
                Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
                Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
                Stone::Empty => return,
            }
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let n = self.size as i32;
        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if col >= 0 && col < n && row >= 0 && row < n {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
