//! Main application for the checkers GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::rules::{GameStatus, WinReason};
use crate::Owner;
use super::board_view::{BoardView, Overlays};
use super::game_state::{GameConfig, GameState, Screen};
use super::theme::*;

/// Main checkers application
pub struct CheckersApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl CheckersApp {
    /// Create the app with the given session settings
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.start();
                        ui.close_menu();
                    }
                    if ui.button("Hint (H)").clicked() {
                        self.state.request_suggestion();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(SIDE_PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("CHECKERS").size(22.0).strong().color(TEXT_PRIMARY));
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

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (text, color) = if self.state.is_human_turn() {
                match self.state.selected() {
                    Some(pos) => (format!("Move the piece on {}", pos), TEXT_PRIMARY),
                    None => ("Your turn: pick a piece".to_string(), TEXT_PRIMARY),
                }
            } else {
                ("CPU is thinking...".to_string(), WARNING)
            };
            ui.label(RichText::new(text).size(16.0).strong().color(color));
        });
    }

    /// Render remaining piece counts
    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for owner in [Owner::Human, Owner::Cpu] {
                let label = match owner {
                    Owner::Human => "You",
                    Owner::Cpu => "CPU",
                };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(14.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let count = self.state.board.remaining(owner);
                        ui.label(RichText::new(format!("{}/12", count)).size(14.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Hint").clicked() {
                    self.state.request_suggestion();
                }
                if ui.button("New Game").clicked() {
                    self.state.start();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render details of the last CPU decision
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CPU DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.state.last_cpu_choice {
                Some(choice) => {
                    ui.label(RichText::new(format!("{}", choice.mv)).size(12.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!("Score {} ({} tied)", choice.score, choice.candidates))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                }
                None => {
                    ui.label(RichText::new("No CPU move yet").size(10.0).color(TEXT_MUTED));
                }
            }

            if let Some(wait) = self.state.cpu_wait_remaining(Instant::now()) {
                ui.label(
                    RichText::new(format!("Next move in {:.1}s", wait.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let overlays = Overlays {
                selected: self.state.selected(),
                destinations: self.state.highlighted(),
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
            };

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                overlays,
                self.state.is_human_turn(),
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.click_square(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Full-window screen with a headline and a prompt
    fn render_splash(ctx: &Context, headline: &str, detail: Option<&str>, prompt: &str) {
        CentralPanel::default()
            .frame(Frame::new().fill(SCREEN_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.3);
                    ui.label(RichText::new(headline).size(80.0).strong().color(TEXT_DARK));
                    if let Some(detail) = detail {
                        ui.add_space(8.0);
                        ui.label(RichText::new(detail).size(24.0).color(TEXT_DARK));
                    }
                    ui.add_space(24.0);
                    ui.label(RichText::new(prompt).size(40.0).color(TEXT_DARK));
                });
            });
    }

    fn render_game_over(&self, ctx: &Context) {
        let (headline, detail) = match self.state.status {
            GameStatus::Won { winner, reason } => {
                let headline = match winner {
                    Owner::Human => "YOU WIN!",
                    Owner::Cpu => "CPU WINS!",
                };
                let detail = match reason {
                    WinReason::NoPiecesLeft => "No pieces left",
                    WinReason::Blocked => "No moves left",
                };
                (headline, Some(detail))
            }
            GameStatus::InProgress => ("GAME OVER", None),
        };
        Self::render_splash(ctx, headline, detail, "Press Space to Play Again");
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // Space - start or replay from the title and win screens
            if i.key_pressed(egui::Key::Space) && self.state.screen != Screen::Playing {
                self.state.start();
            }

            if self.state.screen == Screen::Playing {
                // N - New game
                if i.key_pressed(egui::Key::N) {
                    self.state.start();
                }

                // H - Hint
                if i.key_pressed(egui::Key::H) {
                    self.state.request_suggestion();
                }
            }

            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
        });
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        match self.state.screen {
            Screen::Title => {
                Self::render_splash(ctx, "CHECKERS", None, "Press Space to Play");
            }
            Screen::Playing => {
                self.state.poll_cpu(Instant::now());

                self.render_menu_bar(ctx);
                self.render_side_panel(ctx);
                self.render_board(ctx);

                if let Some(wait) = self.state.cpu_wait_remaining(Instant::now()) {
                    ctx.request_repaint_after(wait.max(Duration::from_millis(16)));
                } else if self.state.is_cpu_turn() {
                    ctx.request_repaint();
                }
            }
            Screen::GameOver => {
                self.render_game_over(ctx);
            }
        }
    }
}
