//! Main application for the Octi GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardFrame, BoardView};
use super::game_state::{GameMode, GameState, GuiSettings};
use super::theme::*;
use crate::{Direction, DrawReason, Outcome, Player, WinType};

/// Main Octi application
pub struct OctiApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl OctiApp {
    /// Create an app starting in the given mode
    pub fn with_mode(mode: GameMode, settings: GuiSettings) -> Self {
        Self {
            state: GameState::new(mode, settings),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::new(mode, self.state.settings);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Blue)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::First });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Red)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::Second });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP { show_suggestions: false });
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
                    if let GameMode::PvP { show_suggestions } = &mut self.state.mode {
                        ui.checkbox(show_suggestions, "Show Hints");
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {}", player_name(human)),
                        GameMode::PvP { .. } => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
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

                self.render_pods_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_move_log_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.game.outcome() {
                    ui.add_space(10.0);
                    if self.render_game_over_card(ui, outcome) {
                        self.state.reset();
                    }
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

    fn button_frame() -> Frame {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("✚").size(20.0).color(PRONG));
            ui.add_space(4.0);
            ui.label(RichText::new("OCTI").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("pods and prongs").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.current_turn();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, pod_color(player));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player_name(player)).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Waiting", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let limit = self.state.settings.ai_time_limit_ms as f32 / 1000.0;
                let color = if limit <= 0.0 || secs < limit * 0.6 {
                    TIMER_NORMAL
                } else if secs < limit {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render pod and prong counts for both players
    fn render_pods_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PODS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let board = self.state.game.board();
            for player in Player::BOTH {
                let pods = board.pod_count(player);
                let prongs: usize = board.pods_of(player).map(|(_, pod)| pod.prongs.len()).sum();
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(18.0).color(pod_color(player)));
                    ui.label(RichText::new(player_name(player)).size(12.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let color = if pods <= 1 { TIMER_WARNING } else { TEXT_SECONDARY };
                        ui.label(RichText::new(format!("{} pods, {} prongs", pods, prongs)).size(12.0).color(color));
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    /// Render actions card: prong buttons for the selected pod, undo and hint
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            match self.state.selected {
                Some(pos) => {
                    ui.label(RichText::new(format!("Add prong at {}", pos)).size(11.0).color(TEXT_SECONDARY));
                    ui.horizontal(|ui| {
                        for dir in Direction::ALL {
                            let enabled = self.state.can_add_prong(dir);
                            let button = egui::Button::new(RichText::new(dir.to_string()).size(14.0).strong());
                            if ui.add_enabled(enabled, button).clicked() {
                                if let Err(msg) = self.state.try_add_prong(dir) {
                                    self.state.message = Some(msg);
                                }
                            }
                        }
                    });
                }
                None => {
                    ui.label(RichText::new("Click a pod to select it").size(11.0).color(TEXT_SECONDARY));
                }
            }
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                Self::button_frame().show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("↩ Undo").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.state.undo();
                    }
                });

                ui.add_space(4.0);

                if let GameMode::PvP { .. } = self.state.mode {
                    Self::button_frame().show(ui, |ui| {
                        let label = egui::Label::new(RichText::new("Hint").size(12.0).color(TEXT_PRIMARY));
                        if ui.add(label.sense(egui::Sense::click())).clicked() {
                            self.state.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            let played = self.state.game.move_log().len();
            let limit = self.state.game.config().max_moves;
            ui.label(RichText::new(format!("Move {} / {}", played, limit)).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render the move record in notation, newest at the bottom
    fn render_move_log_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical()
                .max_height(160.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for (i, (player, mv)) in self.state.game.move_log().iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(format!("{:>3}.", i + 1)).size(10.0).monospace().color(TEXT_MUTED));
                            ui.label(RichText::new(mv.to_string()).size(11.0).monospace().color(pod_color(*player)));
                        });
                    }
                });
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{:?} (depth {})", result.search_type, result.depth))
                                .size(11.0)
                                .strong()
                                .color(TIMER_NORMAL),
                        );
                        ui.label(RichText::new(format!("Score: {:.1}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                if let Some(mv) = &result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("→ {}", mv)).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            });
    }

    /// Render game over card; returns true when "New Game" is clicked
    fn render_game_over_card(&self, ui: &mut egui::Ui, outcome: Outcome) -> bool {
        let (headline, detail, accent) = match outcome {
            Outcome::Won { winner, win_type } => {
                let how = match win_type {
                    WinType::HomeRow => "reaching the home row",
                    WinType::Elimination => "eliminating every pod",
                };
                (format!("{} WINS!", player_name(winner)), format!("by {}", how), pod_color(winner))
            }
            Outcome::Draw(reason) => {
                let why = match reason {
                    DrawReason::MoveLimit => "move limit reached",
                    DrawReason::NoMoves => "neither side can move",
                };
                ("DRAW".to_string(), why.to_string(), TEXT_SECONDARY)
            }
        };

        let mut clicked = false;
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(accent));
                    ui.add_space(4.0);
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY));
                            clicked = ui.add(label.sense(egui::Sense::click())).clicked();
                        });
                });
            });
        clicked
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let targets = self.state.selected_targets();
            let show_hint = match self.state.mode {
                GameMode::PvP { show_suggestions } => show_suggestions,
                GameMode::PvE { .. } => false,
            };
            let suggestion = self.state.suggested_move.clone().or_else(|| {
                if show_hint {
                    self.state.last_ai_result.as_ref().and_then(|r| r.best_move.clone())
                } else {
                    None
                }
            });

            let frame = BoardFrame {
                board: self.state.game.board(),
                to_move: self.state.current_turn(),
                selected: self.state.selected,
                targets: &targets,
                last_move: self.state.last_move(),
                suggestion: suggestion.as_ref(),
                interactive: !self.state.game.is_over() && self.state.is_human_turn(),
            };
            let clicked = self.board_view.show(ui, &frame);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.click_cell(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (prong, toggle_debug, hint, undo, new_game, deselect) = ctx.input(|i| {
            let prong = [
                (egui::Key::ArrowUp, Direction::N),
                (egui::Key::ArrowDown, Direction::S),
                (egui::Key::ArrowRight, Direction::E),
                (egui::Key::ArrowLeft, Direction::W),
            ]
            .into_iter()
            .find(|(key, _)| i.key_pressed(*key))
            .map(|(_, dir)| dir);
            (
                prong,
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Escape),
            )
        });

        // Arrow keys - attach a prong to the selected pod
        if let Some(dir) = prong {
            if self.state.selected.is_some() {
                if let Err(msg) = self.state.try_add_prong(dir) {
                    self.state.message = Some(msg);
                }
            }
        }
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if hint {
            if let GameMode::PvP { .. } = self.state.mode {
                self.state.request_suggestion();
            }
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.state.reset();
        }
        if deselect {
            self.state.selected = None;
        }
    }
}

impl eframe::App for OctiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.game.is_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the timer ticking
        if self.state.is_ai_thinking() || !self.state.game.is_over() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
