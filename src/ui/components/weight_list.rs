// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Parent selection and sibling ordering for one menu link block.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use uuid::Uuid;

use crate::models::menu::{MenuTree, ParentRef};

/// One row in the ordering table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightRow {
    pub id: Uuid,
    pub title: String,
    /// Whether this row is the link being edited on this form.
    pub current: bool,
}

/// Placement state for one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightListModel {
    current: Uuid,
    parent: Option<ParentRef>,
    rows: Vec<WeightRow>,
}

/// Messages produced by the placement controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WeightListMsg {
    ParentSelected(ParentRef),
    MoveUp(usize),
    MoveDown(usize),
}

impl WeightListModel {
    /// Place the link identified by `current` at the given location.
    pub fn at_parent(menu: &MenuTree, parent: Option<ParentRef>, current: Uuid) -> Self {
        let mut model = Self {
            current,
            parent: None,
            rows: Vec::new(),
        };
        if let Some(parent) = parent {
            model.rebuild(menu, parent);
        }
        model
    }

    pub fn parent(&self) -> Option<&ParentRef> {
        self.parent.as_ref()
    }

    pub fn rows(&self) -> &[WeightRow] {
        &self.rows
    }

    fn rebuild(&mut self, menu: &MenuTree, parent: ParentRef) {
        self.rows = menu
            .children_of(&parent)
            .into_iter()
            .map(|link| WeightRow {
                id: link.id,
                title: link.title.clone(),
                current: false,
            })
            .collect();
        // A link moved to a new location starts below its siblings.
        self.rows.push(WeightRow {
            id: self.current,
            title: String::new(),
            current: true,
        });
        self.parent = Some(parent);
    }
}

/// Apply a message to the placement state.
pub fn update(model: &mut WeightListModel, msg: WeightListMsg, menu: &MenuTree) {
    match msg {
        WeightListMsg::ParentSelected(parent) => {
            // Re-selecting the current location keeps any manual ordering.
            if model.parent.as_ref() == Some(&parent) {
                return;
            }
            model.rebuild(menu, parent);
        }
        WeightListMsg::MoveUp(index) => {
            if index > 0 && index < model.rows.len() {
                model.rows.swap(index - 1, index);
            }
        }
        WeightListMsg::MoveDown(index) => {
            if index + 1 < model.rows.len() {
                model.rows.swap(index, index + 1);
            }
        }
    }
}

/// Render the parent selector and ordering table. `current_label` is the live
/// preview text shown on the current link's row.
pub fn view(
    ui: &mut egui::Ui,
    model: &WeightListModel,
    menu: &MenuTree,
    current_label: &str,
) -> Vec<WeightListMsg> {
    let mut msgs = Vec::new();

    let options = menu.parent_options();
    let selected_label = model
        .parent()
        .and_then(|p| options.iter().find(|(r, _)| r == p))
        .map(|(_, label)| label.clone())
        .unwrap_or_else(|| "No menus available".to_string());

    ui.horizontal(|ui| {
        ui.label("Parent link");
        egui::ComboBox::from_id_salt(("menu_parent", model.current))
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for (parent, label) in &options {
                    let checked = model.parent() == Some(parent);
                    if ui.selectable_label(checked, label.as_str()).clicked() && !checked {
                        msgs.push(WeightListMsg::ParentSelected(parent.clone()));
                    }
                }
            });
    });

    ui.add_space(6.0);
    render_rows(ui, model, current_label, &mut msgs);

    msgs
}

/// Table of links at the chosen location with up/down reordering.
fn render_rows(
    ui: &mut egui::Ui,
    model: &WeightListModel,
    current_label: &str,
    msgs: &mut Vec<WeightListMsg>,
) {
    if model.rows().is_empty() {
        ui.label(
            egui::RichText::new("Pick a parent to position this link.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return;
    }

    let row_count = model.rows().len();
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::remainder())
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.label(egui::RichText::new("Order").small());
            });
            header.col(|ui| {
                ui.label(egui::RichText::new("Link").small());
            });
        })
        .body(|mut body| {
            for (index, row) in model.rows().iter().enumerate() {
                body.row(22.0, |mut table_row| {
                    table_row.col(|ui| {
                        // Key the buttons to the row so identity survives reordering.
                        ui.push_id(row.id, |ui| {
                            ui.horizontal(|ui| {
                                let up =
                                    egui::Button::new(egui_phosphor::regular::ARROW_UP).small();
                                if ui
                                    .add_enabled(index > 0, up)
                                    .on_hover_text("Move up")
                                    .clicked()
                                {
                                    msgs.push(WeightListMsg::MoveUp(index));
                                }
                                let down =
                                    egui::Button::new(egui_phosphor::regular::ARROW_DOWN).small();
                                if ui
                                    .add_enabled(index + 1 < row_count, down)
                                    .on_hover_text("Move down")
                                    .clicked()
                                {
                                    msgs.push(WeightListMsg::MoveDown(index));
                                }
                            });
                        });
                    });
                    table_row.col(|ui| {
                        if row.current {
                            ui.label(egui::RichText::new(current_label).strong());
                            ui.label(
                                egui::RichText::new("(this link)")
                                    .small()
                                    .color(egui::Color32::from_gray(110)),
                            );
                        } else {
                            ui.label(&row.title);
                        }
                    });
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::parse_menu_source;

    fn tree() -> MenuTree {
        parse_menu_source(
            r#"{
                "menus": [{
                    "id": "main",
                    "label": "Main navigation",
                    "links": [
                        { "id": "6f1f2f6e-8f3a-4a57-9b1c-2d0c5a9e4b10", "title": "Home", "weight": -10 },
                        { "id": "a4b2e7c9-13d5-4f02-8e6a-77c41b9d2f33", "title": "About", "weight": 0 },
                        { "id": "b8c7d6e5-f4a3-42b1-90c8-d7e6f5a4b3c2", "title": "Contact", "weight": 10 }
                    ]
                }]
            }"#,
        )
        .unwrap()
    }

    fn root() -> ParentRef {
        ParentRef {
            menu: "main".into(),
            link: None,
        }
    }

    #[test]
    fn new_placement_puts_the_current_link_last() {
        let tree = tree();
        let model = WeightListModel::at_parent(&tree, Some(root()), Uuid::new_v4());

        assert_eq!(model.rows().len(), 4);
        assert!(model.rows().last().unwrap().current);
        assert_eq!(model.rows()[0].title, "Home");
    }

    #[test]
    fn without_a_parent_the_row_list_stays_empty() {
        let tree = MenuTree::default();
        let model = WeightListModel::at_parent(&tree, None, Uuid::new_v4());

        assert!(model.parent().is_none());
        assert!(model.rows().is_empty());
    }

    #[test]
    fn selecting_a_new_parent_rebuilds_the_rows() {
        let tree = tree();
        let mut model = WeightListModel::at_parent(&tree, Some(root()), Uuid::new_v4());

        let about = ParentRef {
            menu: "main".into(),
            link: tree.menus[0]
                .links
                .iter()
                .find(|l| l.title == "About")
                .map(|l| l.id),
        };
        update(&mut model, WeightListMsg::ParentSelected(about.clone()), &tree);

        assert_eq!(model.parent(), Some(&about));
        assert_eq!(model.rows().len(), 1);
        assert!(model.rows()[0].current);
    }

    #[test]
    fn re_selecting_the_same_parent_keeps_manual_ordering() {
        let tree = tree();
        let mut model = WeightListModel::at_parent(&tree, Some(root()), Uuid::new_v4());

        update(&mut model, WeightListMsg::MoveUp(3), &tree);
        assert!(model.rows()[2].current);

        update(&mut model, WeightListMsg::ParentSelected(root()), &tree);
        assert!(model.rows()[2].current, "ordering should survive re-selection");
    }

    #[test]
    fn moves_swap_adjacent_rows_and_clamp_at_the_ends() {
        let tree = tree();
        let mut model = WeightListModel::at_parent(&tree, Some(root()), Uuid::new_v4());

        update(&mut model, WeightListMsg::MoveUp(0), &tree);
        assert_eq!(model.rows()[0].title, "Home", "top row cannot move up");

        update(&mut model, WeightListMsg::MoveDown(3), &tree);
        assert!(model.rows()[3].current, "bottom row cannot move down");

        update(&mut model, WeightListMsg::MoveUp(1), &tree);
        assert_eq!(model.rows()[0].title, "About");
        assert_eq!(model.rows()[1].title, "Home");
    }
}
