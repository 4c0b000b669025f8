//! Menu Panel Widget
//! Draws the parameter menu and reports leaf selections.

use crate::menu::{MenuRow, MenuState, MenuTree, RowKind};
use crate::theme::Theme;
use egui::{RichText, Sense};

/// Actions triggered by the menu
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    None,
    /// A leaf was clicked; carries its full dotted name
    Select(String),
    /// A group header was clicked and its expansion flipped
    Toggled(String),
}

impl MenuAction {
    /// Rows drawn earlier in the frame still show the old selection or
    /// expansion after any click.
    pub fn needs_repaint(&self) -> bool {
        !matches!(self, MenuAction::None)
    }
}

/// Left-hand menu over a [`MenuTree`].
#[derive(Default)]
pub struct MenuPanel {
    pub state: MenuState,
}

impl MenuPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on one row. Headers flip their group; leaves leave the
    /// menu state alone and hand back their full name.
    pub fn click(&mut self, row: &MenuRow) -> MenuAction {
        match row.kind {
            RowKind::Leaf { .. } => MenuAction::Select(row.name.clone()),
            RowKind::Group { .. } => {
                self.state.toggle(&row.name);
                MenuAction::Toggled(row.name.clone())
            }
        }
    }

    /// Draw the menu for `selected`. Group toggles are applied here; leaf
    /// clicks are handed back for the caller to turn into a new selection.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        tree: &MenuTree,
        selected: &str,
        theme: &Theme,
    ) -> MenuAction {
        let mut action = MenuAction::None;

        if tree.is_empty() {
            ui.label(RichText::new("No parameters").color(theme.dark_gray));
            return action;
        }

        let rows = self.state.layout(tree, selected);
        for row in rows {
            ui.add_space(theme.menu_padding);
            ui.horizontal(|ui| {
                ui.add_space(row.depth as f32 * theme.menu_indent);
                match row.kind {
                    RowKind::Leaf { active } => {
                        let text = if active {
                            format!("{} {}", theme.active_marker, row.label)
                        } else {
                            row.label.clone()
                        };
                        let mut rich = RichText::new(text).size(theme.menu_font_size);
                        if active {
                            rich = rich.color(theme.accent);
                        }
                        let response = ui.add(egui::Label::new(rich).sense(Sense::click()));
                        if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                            action = self.click(&row);
                        }
                    }
                    RowKind::Group { .. } => {
                        let rich = RichText::new(&row.label)
                            .size(theme.menu_font_size)
                            .strong();
                        let response = ui.add(egui::Label::new(rich).sense(Sense::click()));
                        if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                            action = self.click(&row);
                        }
                    }
                }
            });
        }

        if action.needs_repaint() {
            ui.ctx().request_repaint();
        }

        action
    }
}
