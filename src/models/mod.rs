// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: menu structure types shared between UI and form logic.

pub mod menu;
