// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring form state, messages, and per-block
//! components.

use uuid::Uuid;

use crate::models::menu::{DEMO_MENU_SOURCE, MenuTree, parse_menu_source};
use crate::ui::components::title_preview::{self, TitlePreviewModel, TitlePreviewMsg};
use crate::ui::components::weight_list::{self, WeightListModel, WeightListMsg};

/// One menu link block on the form.
pub struct LinkBlock {
    /// Stable id used for widget scoping and row identity.
    pub id: Uuid,
    /// Checkbox, link title, and preview wiring.
    pub preview: TitlePreviewModel,
    /// Parent selection and sibling ordering.
    pub placement: WeightListModel,
}

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Title of the content item being edited, absent on standalone link forms.
    pub content_title: Option<String>,
    /// Menu structure available for placement.
    pub menu: MenuTree,
    /// Menu link blocks currently on the form.
    pub blocks: Vec<LinkBlock>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
}

/// Application messages routed through the update function.
pub enum Msg {
    ContentTitleChanged(String),
    AddBlock,
    RemoveBlock(usize),
    Preview { block: usize, msg: TitlePreviewMsg },
    Placement { block: usize, msg: WeightListMsg },
    DismissError,
}

impl AppModel {
    /// Form state seeded with the bundled demo menu and one link block.
    pub fn seeded() -> Self {
        let mut model = Self {
            content_title: Some(String::new()),
            ..Default::default()
        };
        match parse_menu_source(DEMO_MENU_SOURCE) {
            Ok(menu) => model.menu = menu,
            Err(err) => {
                model.error = Some(format!("Failed to load menu structure:\n\n{err:#}"));
            }
        }
        model.blocks.push(new_block(&model.menu));
        model
    }
}

/// Build a fresh, disabled block placed under the first available location.
fn new_block(menu: &MenuTree) -> LinkBlock {
    let id = Uuid::new_v4();
    LinkBlock {
        id,
        preview: TitlePreviewModel::new(false, ""),
        placement: WeightListModel::at_parent(menu, menu.first_parent(), id),
    }
}

/// Run per-block initialization for every block currently on the form.
/// Invoked once when the form is first shown; blocks inserted later are
/// attached individually as they are added.
pub fn attach(model: &mut AppModel) {
    for block in &mut model.blocks {
        title_preview::attach(&mut block.preview);
    }
}

/// Update the application model.
pub fn update(model: &mut AppModel, msg: Msg) {
    match msg {
        Msg::ContentTitleChanged(text) => {
            model.content_title = Some(text);
            let title = model.content_title.clone();
            for block in &mut model.blocks {
                title_preview::update(
                    &mut block.preview,
                    TitlePreviewMsg::ContentTitleEdited,
                    title.as_deref(),
                );
            }
        }
        Msg::AddBlock => {
            let mut block = new_block(&model.menu);
            // Blocks inserted after initial load are initialized right away.
            title_preview::attach(&mut block.preview);
            model.blocks.push(block);
            model.status = Some("Menu link added.".to_string());
        }
        Msg::RemoveBlock(index) => {
            if index < model.blocks.len() {
                model.blocks.remove(index);
                model.status = Some("Menu link removed.".to_string());
            }
        }
        Msg::Preview { block, msg } => {
            let content_title = model.content_title.clone();
            if let Some(entry) = model.blocks.get_mut(block) {
                if let TitlePreviewMsg::LinkTitleEdited(text) = &msg {
                    entry
                        .preview
                        .set_overridden(derives_override(text, content_title.as_deref()));
                }
                title_preview::update(&mut entry.preview, msg, content_title.as_deref());
            }
        }
        Msg::Placement { block, msg } => {
            if let Some(entry) = model.blocks.get_mut(block) {
                weight_list::update(&mut entry.placement, msg, &model.menu);
            }
        }
        Msg::DismissError => model.error = None,
    }
}

/// A manually typed title that differs from the content title marks the block
/// as overridden; clearing the field hands control back to the content title.
fn derives_override(link_title: &str, content_title: Option<&str>) -> bool {
    let trimmed = link_title.trim();
    !trimmed.is_empty() && content_title.map(str::trim) != Some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enable_block(model: &mut AppModel, block: usize) {
        update(
            model,
            Msg::Preview {
                block,
                msg: TitlePreviewMsg::EnabledChanged(true),
            },
        );
    }

    #[test]
    fn seeded_form_has_a_menu_and_one_disabled_block() {
        let model = AppModel::seeded();

        assert!(model.error.is_none());
        assert!(!model.menu.menus.is_empty());
        assert_eq!(model.blocks.len(), 1);
        assert!(!model.blocks[0].preview.enabled());
        assert!(model.blocks[0].placement.parent().is_some());
    }

    #[test]
    fn content_title_edit_reaches_an_enabled_block() {
        let mut model = AppModel::seeded();
        enable_block(&mut model, 0);

        update(&mut model, Msg::ContentTitleChanged("My Article".into()));

        assert_eq!(model.blocks[0].preview.preview(), "My Article");
    }

    #[test]
    fn enabling_after_a_content_title_edit_applies_it_immediately() {
        let mut model = AppModel::seeded();

        update(&mut model, Msg::ContentTitleChanged("My Article".into()));
        assert_eq!(model.blocks[0].preview.preview(), "");

        enable_block(&mut model, 0);
        assert_eq!(model.blocks[0].preview.preview(), "My Article");
    }

    #[test]
    fn divergent_manual_edit_sets_the_override_and_stops_mirroring() {
        let mut model = AppModel::seeded();
        enable_block(&mut model, 0);
        update(&mut model, Msg::ContentTitleChanged("Article".into()));

        update(
            &mut model,
            Msg::Preview {
                block: 0,
                msg: TitlePreviewMsg::LinkTitleEdited("Custom".into()),
            },
        );

        assert!(model.blocks[0].preview.is_overridden());
        assert_eq!(model.blocks[0].preview.preview(), "Custom");

        update(&mut model, Msg::ContentTitleChanged("Article Two".into()));
        assert_eq!(model.blocks[0].preview.preview(), "Custom");
    }

    #[test]
    fn clearing_the_link_title_resumes_mirroring() {
        let mut model = AppModel::seeded();
        enable_block(&mut model, 0);
        update(
            &mut model,
            Msg::Preview {
                block: 0,
                msg: TitlePreviewMsg::LinkTitleEdited("Custom".into()),
            },
        );
        assert!(model.blocks[0].preview.is_overridden());

        update(
            &mut model,
            Msg::Preview {
                block: 0,
                msg: TitlePreviewMsg::LinkTitleEdited(String::new()),
            },
        );
        assert!(!model.blocks[0].preview.is_overridden());

        update(&mut model, Msg::ContentTitleChanged("Article Three".into()));
        assert_eq!(model.blocks[0].preview.preview(), "Article Three");
    }

    #[test]
    fn retyping_the_content_title_verbatim_is_not_an_override() {
        let mut model = AppModel::seeded();
        enable_block(&mut model, 0);
        update(&mut model, Msg::ContentTitleChanged("Article".into()));

        update(
            &mut model,
            Msg::Preview {
                block: 0,
                msg: TitlePreviewMsg::LinkTitleEdited("Article".into()),
            },
        );

        assert!(!model.blocks[0].preview.is_overridden());
    }

    #[test]
    fn added_block_is_attached_and_starts_disabled() {
        let mut model = AppModel::seeded();

        update(&mut model, Msg::AddBlock);

        assert_eq!(model.blocks.len(), 2);
        assert_eq!(model.status.as_deref(), Some("Menu link added."));
        let block = &model.blocks[1];
        assert!(!block.preview.enabled());
        assert_eq!(block.preview.preview(), "");
        assert!(block.placement.rows().iter().any(|r| r.current));
    }

    #[test]
    fn blocks_update_independently() {
        let mut model = AppModel::seeded();
        update(&mut model, Msg::AddBlock);
        enable_block(&mut model, 0);

        update(&mut model, Msg::ContentTitleChanged("Shared Title".into()));

        assert_eq!(model.blocks[0].preview.preview(), "Shared Title");
        assert_eq!(model.blocks[1].preview.preview(), "");
    }

    #[test]
    fn out_of_range_block_messages_are_ignored() {
        let mut model = AppModel::seeded();

        update(&mut model, Msg::RemoveBlock(7));
        update(
            &mut model,
            Msg::Preview {
                block: 7,
                msg: TitlePreviewMsg::EnabledChanged(true),
            },
        );

        assert_eq!(model.blocks.len(), 1);
        assert!(!model.blocks[0].preview.enabled());
    }

    #[test]
    fn dismissing_the_error_clears_it() {
        let mut model = AppModel::seeded();
        model.error = Some("boom".into());

        update(&mut model, Msg::DismissError);

        assert!(model.error.is_none());
    }
}
