//! Main application for the Renju GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::rules::OpeningClassification;
use crate::Stone;
use super::board_view::BoardView;
use super::game_state::{GameResult, GameState, WinType};
use super::theme::*;

/// Hot-seat Renju application
pub struct RenjuApp {
    state: GameState,
    board_view: BoardView,
}

impl Default for RenjuApp {
    fn default() -> Self {
        Self::with_state(GameState::new())
    }
}

impl RenjuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self::with_state(state)
    }

    fn with_state(state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
        }
    }

    fn new_game(&mut self) {
        self.state.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.add_enabled(self.state.can_undo(), egui::Button::new("Undo (U)")).clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.add_enabled(self.state.can_redo(), egui::Button::new("Redo (R)")).clicked() {
                        self.state.redo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.add_enabled(self.state.game_over.is_none(), egui::Button::new("Resign")).clicked() {
                        self.state.surrender();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.state.settings.show_move_numbers, "Move numbers");
                    ui.checkbox(&mut self.state.settings.show_coordinates, "Coordinates");
                    ui.checkbox(&mut self.state.settings.mark_forbidden, "Mark forbidden points");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let n = self.state.board.size();
                    ui.label(format!("Hot-seat - {}x{}", n, n));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_opening_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("RENJU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("連珠").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Stone::Black;
            let (stone_char, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black { TEXT_PRIMARY } else { BLACK_STONE };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if is_black {
                        ("To move - restricted", STATUS_WARNING)
                    } else {
                        ("To move", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let elapsed = self.state.move_timer.elapsed();
            ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));

            if let Some(last) = self.state.move_timer.last_move_duration {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last move: {:.1}s", last.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Opening shape of the first three stones
    fn render_opening_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("OPENING").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let text = match self.state.opening {
                OpeningClassification::Matched(pattern) => {
                    RichText::new(pattern.to_string()).size(14.0).strong().color(STATUS_OK)
                }
                OpeningClassification::Unrecognized => {
                    RichText::new("No named opening").size(12.0).color(TEXT_SECONDARY)
                }
                OpeningClassification::Undetermined => {
                    RichText::new("Waiting for 3 stones").size(12.0).color(TEXT_MUTED)
                }
            };
            ui.label(text);
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.add_enabled(self.state.can_undo(), egui::Button::new("Undo")).clicked() {
                    self.state.undo();
                }
                if ui.add_enabled(self.state.can_redo(), egui::Button::new("Redo")).clicked() {
                    self.state.redo();
                }
                if ui.add_enabled(self.state.game_over.is_none(), egui::Button::new("Resign")).clicked() {
                    self.state.surrender();
                }
                if ui.button("New").clicked() {
                    self.new_game();
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.state.move_history.len())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_game_over_card(&self, ui: &mut egui::Ui, result: &GameResult) {
        let (headline, symbol, accent) = match result.winner {
            Stone::Black => ("BLACK WINS", "●", egui::Color32::from_rgb(70, 70, 75)),
            Stone::White => ("WHITE WINS", "○", egui::Color32::from_rgb(220, 220, 225)),
            Stone::Empty => ("DRAW", "●○", TEXT_SECONDARY),
        };
        let how = match result.win_type {
            WinType::FiveInRow => "by five in a row",
            WinType::Resignation => "by resignation",
            WinType::Draw => "board is full",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    });
                    ui.add_space(4.0);
                    ui.label(RichText::new(how).size(11.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new("Press N for a new game").size(10.0).color(TEXT_MUTED));
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0).color(STATUS_WARNING));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            if let Some(pos) = self.board_view.show(ui, &mut self.state) {
                if let Err(err) = self.state.try_place_stone(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, redo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::N),
            )
        });

        if undo {
            self.state.undo();
        }
        if redo {
            self.state.redo();
        }
        if new_game {
            self.new_game();
        }
    }
}

impl eframe::App for RenjuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the timer ticking
        if self.state.game_over.is_none() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
