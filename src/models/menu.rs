// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Menu structure available to the placement form.
//! Parsing is kept pure so the UI shell and tests can reuse it.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use uuid::Uuid;

/// Demo menu structure bundled with the application.
pub const DEMO_MENU_SOURCE: &str = include_str!("demo_menu.json");

/// One stored menu link.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MenuLink {
    pub id: Uuid,
    pub title: String,
    /// Id of the parent link within the same menu; `None` for top level.
    #[serde(default)]
    pub parent: Option<Uuid>,
    #[serde(default)]
    pub weight: i32,
}

/// A named menu holding a flat list of links.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Menu {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub links: Vec<MenuLink>,
}

/// All menus a link may be placed into.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct MenuTree {
    pub menus: Vec<Menu>,
}

/// A selectable placement location: a menu root or a link inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentRef {
    pub menu: String,
    pub link: Option<Uuid>,
}

impl MenuTree {
    /// Flatten the tree into combo-box options with depth-indented labels.
    pub fn parent_options(&self) -> Vec<(ParentRef, String)> {
        let mut options = Vec::new();
        for menu in &self.menus {
            options.push((
                ParentRef {
                    menu: menu.id.clone(),
                    link: None,
                },
                format!("<{}>", menu.label),
            ));
            collect_level(menu, None, 1, &mut options);
        }
        options
    }

    /// Links stored directly under the given location, sorted by weight then title.
    pub fn children_of(&self, parent: &ParentRef) -> Vec<&MenuLink> {
        let Some(menu) = self.menus.iter().find(|m| m.id == parent.menu) else {
            return Vec::new();
        };
        sorted_level(menu, parent.link)
    }

    /// First selectable location, used as the default for new link blocks.
    pub fn first_parent(&self) -> Option<ParentRef> {
        self.menus.first().map(|menu| ParentRef {
            menu: menu.id.clone(),
            link: None,
        })
    }
}

fn sorted_level(menu: &Menu, parent: Option<Uuid>) -> Vec<&MenuLink> {
    let mut level: Vec<&MenuLink> = menu.links.iter().filter(|l| l.parent == parent).collect();
    level.sort_by(|a, b| a.weight.cmp(&b.weight).then_with(|| a.title.cmp(&b.title)));
    level
}

fn collect_level(
    menu: &Menu,
    parent: Option<Uuid>,
    depth: usize,
    options: &mut Vec<(ParentRef, String)>,
) {
    for link in sorted_level(menu, parent) {
        options.push((
            ParentRef {
                menu: menu.id.clone(),
                link: Some(link.id),
            },
            format!("{}{}", "-- ".repeat(depth), link.title),
        ));
        collect_level(menu, Some(link.id), depth + 1, options);
    }
}

/// Parse a menu structure from its JSON source.
pub fn parse_menu_source(json: &str) -> Result<MenuTree> {
    let tree: MenuTree =
        serde_json::from_str(json).context("Menu structure is not valid JSON")?;

    // A parent reference must resolve within the same menu.
    for menu in &tree.menus {
        for link in &menu.links {
            if let Some(parent) = link.parent
                && !menu.links.iter().any(|l| l.id == parent)
            {
                bail!(
                    "Link '{}' in menu '{}' references an unknown parent",
                    link.title,
                    menu.id
                );
            }
        }
    }

    Ok(tree)
}
