// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the menu link placement form.
//! Handles layout, form controls, and routing of component messages.

pub mod components;

use eframe::egui;

use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::{title_preview, weight_list};

/// Stateful egui application hosting the placement form.
pub struct MenuFormApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl Default for MenuFormApp {
    fn default() -> Self {
        let mut model = AppModel::seeded();
        // Initialize every block present on initial load.
        mvu::attach(&mut model);
        Self {
            model,
            inbox: Vec::new(),
        }
    }
}

impl eframe::App for MenuFormApp {
    // All rendering happens in `update`, which this eframe version still invokes
    // each frame (alongside `ui`). `ui` is a required trait item here, so it is
    // implemented as a no-op to avoid painting the frame twice.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Apply messages gathered during the previous frame.
        let msgs = std::mem::take(&mut self.inbox);
        for msg in msgs {
            mvu::update(&mut self.model, msg);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Menu settings");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_add_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_content_title_input(ui);
                ui.add_space(12.0);

                self.render_blocks(ui);
                ui.add_space(8.0);
            });
        });
    }
}

impl MenuFormApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Button inserting an additional menu link block into the form.
    fn render_add_button(&mut self, ui: &mut egui::Ui) {
        if ui
            .button(format!("{} Add menu link", egui_phosphor::regular::PLUS))
            .clicked()
        {
            self.inbox.push(Msg::AddBlock);
        }
    }

    /// Render the content title field when the form edits a content item.
    fn render_content_title_input(&mut self, ui: &mut egui::Ui) {
        let Some(current) = self.model.content_title.clone() else {
            return;
        };

        ui.label("Title");
        ui.add_space(4.0);
        let mut title = current;
        if ui
            .add(egui::TextEdit::singleline(&mut title).hint_text("e.g., My Article"))
            .changed()
        {
            self.inbox.push(Msg::ContentTitleChanged(title));
        }
    }

    /// Render every menu link block and forward component messages into the
    /// inbox for the next update cycle.
    fn render_blocks(&mut self, ui: &mut egui::Ui) {
        for (index, block) in self.model.blocks.iter().enumerate() {
            ui.push_id(block.id, |ui| {
                egui::CollapsingHeader::new(format!("Menu link {}", index + 1))
                    .default_open(true)
                    .show(ui, |ui| {
                        let msgs = title_preview::view(ui, &block.preview);
                        self.inbox
                            .extend(msgs.into_iter().map(|msg| Msg::Preview { block: index, msg }));

                        // Placement only applies while the link is provided.
                        if block.preview.enabled() {
                            ui.add_space(8.0);
                            let msgs = weight_list::view(
                                ui,
                                &block.placement,
                                &self.model.menu,
                                block.preview.preview(),
                            );
                            self.inbox.extend(
                                msgs.into_iter().map(|msg| Msg::Placement { block: index, msg }),
                            );
                        }

                        ui.add_space(6.0);
                        if ui
                            .button(format!(
                                "{} Remove this link",
                                egui_phosphor::regular::TRASH_SIMPLE
                            ))
                            .clicked()
                        {
                            self.inbox.push(Msg::RemoveBlock(index));
                        }
                    });
            });
            ui.add_space(10.0);
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Form error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
        }
    }
}
