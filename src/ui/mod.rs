// SPDX-License-Identifier: MPL-2.0
//! UI layer: sections, shared components, styles, and design tokens.

pub mod about_section;
pub mod components;
pub mod design_tokens;
pub mod hero;
pub mod navbar;
pub mod styles;
pub mod system_section;
pub mod theme;
pub mod upload;
pub mod widgets;
