//! Main application for the morris GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::controller::{GameController, GameMode};
use super::theme::*;
use crate::{EngineConfig, Piece};

/// Main morris application
pub struct MorrisApp {
    state: GameController,
    board_view: BoardView,
    show_debug: bool,
}

impl MorrisApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Self {
        Self {
            state: GameController::new(config, GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvP)").clicked() {
                        self.state.set_mode(GameMode::PvP);
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.state.set_mode(GameMode::PvE { human_color: Piece::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.state.set_mode(GameMode::PvE { human_color: Piece::Black });
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {}", human_color.name()),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and controls
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

                self.render_pieces_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(winner) = self.state.session().get_winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn button_frame() -> Frame {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
    }

    /// Text button in the panel style
    fn panel_button(ui: &mut egui::Ui, text: &str) -> bool {
        Self::button_frame()
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("THREE MEN'S MORRIS").size(20.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let state = self.state.state();
        Self::card_frame().show(ui, |ui| {
            let (accent, symbol_color) = match state.current_player {
                Piece::White => (WHITE_PIECE, BLACK_PIECE),
                _ => (BLACK_PIECE_HIGHLIGHT, TEXT_PRIMARY),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    state.current_player.symbol(),
                    egui::FontId::proportional(24.0),
                    symbol_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(state.current_player.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let phase = if state.is_placement_phase { "Placement phase" } else { "Movement phase" };
                    let (status, color) = if self.state.is_ai_thinking() {
                        ("Computer thinking...", STATUS_BUSY)
                    } else if state.winner.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        (phase, STATUS_READY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Pieces placed per side
    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        let state = self.state.state();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            for (piece, count) in [(Piece::White, state.white_count), (Piece::Black, state.black_count)] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(piece.name()).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}/{}", count, crate::board::PIECES_PER_SIDE))
                                .size(14.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let (min_depth, max_depth) = self.state.depth_bounds();
            let mut depth = self.state.ai_depth();
            if ui
                .add(egui::Slider::new(&mut depth, min_depth..=max_depth).text("Search depth"))
                .changed()
            {
                self.state.set_ai_depth(depth);
            }
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::panel_button(ui, "Computer move") {
                    self.state.start_ai_thinking();
                }
                ui.add_space(4.0);
                if Self::panel_button(ui, "Undo") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if Self::panel_button(ui, "New game") {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.session().game().history_len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last search statistics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("Thinking {:.2}s", elapsed.as_secs_f32()))
                        .size(12.0)
                        .color(STATUS_BUSY),
                );
            }

            match &self.state.last_ai_result {
                Some(result) => {
                    ui.label(RichText::new(format!("Depth {}  Score {}", result.depth, result.score)).size(11.0).strong().color(STATUS_READY));
                    ui.label(
                        RichText::new(format!("{} nodes, {} cutoffs, {}ms", result.nodes, result.cutoffs, result.time_ms))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    if let Some(mv) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(RichText::new(format!("→ {}", mv)).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                }
                None => {
                    ui.label(RichText::new("No computer move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Piece) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(winner.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                    ui.add_space(4.0);
                    ui.label(RichText::new("by three in a row").size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if Self::panel_button(ui, "New Game") {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let state = self.state.state();
            let targets = self.state.slide_targets();
            let winning_line = self.state.winning_line().map(|(_, line)| line);
            let interactive = !self.state.is_game_over() && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &state,
                self.state.last_move,
                self.state.selected,
                &targets,
                winning_line,
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.handle_click(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, computer, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::C),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if computer {
            self.state.start_ai_thinking();
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for MorrisApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
