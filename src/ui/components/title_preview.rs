// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Live preview of a menu link's effective title.
//!
//! One link block wires an enabled checkbox, an editable link title, and a
//! read-only preview label. Direct link-title edits always reach the label;
//! content-title changes flow through only while the link is enabled and the
//! title has not been manually overridden.

use eframe::egui;

/// Maximum number of characters shown in the preview label.
pub const PREVIEW_MAX_CHARS: usize = 30;

/// Truncate a title to the preview length on character boundaries.
pub fn preview_text(source: &str) -> String {
    source.chars().take(PREVIEW_MAX_CHARS).collect()
}

/// Per-block state for the preview wiring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TitlePreviewModel {
    enabled: bool,
    link_title: String,
    preview: String,
    overridden: bool,
}

/// Messages emitted by the block's controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TitlePreviewMsg {
    /// The link title field was edited.
    LinkTitleEdited(String),
    /// The form's content title changed; the new value arrives via context.
    ContentTitleEdited,
    /// The enabled checkbox changed state.
    EnabledChanged(bool),
}

impl TitlePreviewModel {
    pub fn new(enabled: bool, link_title: impl Into<String>) -> Self {
        Self {
            enabled,
            link_title: link_title.into(),
            ..Default::default()
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn link_title(&self) -> &str {
        &self.link_title
    }

    /// Current text of the preview label.
    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// Record whether the user has manually diverged the link title.
    /// Written by the form controller; [`update`] only reads it.
    pub fn set_overridden(&mut self, overridden: bool) {
        self.overridden = overridden;
    }
}

/// Initialize a block when it first appears on the form. An empty preview is
/// seeded from the link title; existing content is left untouched.
pub fn attach(model: &mut TitlePreviewModel) {
    if model.preview.is_empty() {
        model.preview = preview_text(&model.link_title);
    }
}

/// Apply a message to the block. `content_title` is the form's content title
/// field, absent on forms that do not edit a content item.
pub fn update(model: &mut TitlePreviewModel, msg: TitlePreviewMsg, content_title: Option<&str>) {
    match msg {
        TitlePreviewMsg::LinkTitleEdited(text) => {
            model.preview = preview_text(&text);
            model.link_title = text;
        }
        TitlePreviewMsg::ContentTitleEdited => {
            if model.enabled
                && !model.overridden
                && let Some(title) = content_title
            {
                model.preview = preview_text(title);
            }
        }
        TitlePreviewMsg::EnabledChanged(enabled) => {
            model.enabled = enabled;
            // Unchecking leaves the preview as-is.
            if enabled
                && !model.overridden
                && let Some(title) = content_title
            {
                model.preview = preview_text(title);
            }
        }
    }
}

/// Render the checkbox, title field, and preview label for one block.
pub fn view(ui: &mut egui::Ui, model: &TitlePreviewModel) -> Vec<TitlePreviewMsg> {
    let mut msgs = Vec::new();

    let mut enabled = model.enabled();
    if ui.checkbox(&mut enabled, "Provide a menu link").changed() {
        msgs.push(TitlePreviewMsg::EnabledChanged(enabled));
    }

    ui.add_space(4.0);
    ui.label("Menu link title");
    let mut title = model.link_title().to_owned();
    if ui
        .add(
            egui::TextEdit::singleline(&mut title)
                .hint_text("Leave empty to use the content title"),
        )
        .changed()
    {
        msgs.push(TitlePreviewMsg::LinkTitleEdited(title));
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Current selection:")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.label(egui::RichText::new(model.preview().to_owned()).strong());
        if model.is_overridden() {
            ui.label(
                egui::RichText::new("(manually set)")
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        }
    });

    msgs
}
