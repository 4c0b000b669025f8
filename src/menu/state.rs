//! Menu State Module
//! Expansion state of menu groups, following the selection unless the user
//! toggled a group since the selection last changed.

use super::tree::{MenuNode, MenuTree};
use std::collections::{HashMap, HashSet};

/// Expansion state of a single group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupState {
    pub expanded: bool,
    /// Selection seen on the last pass; a difference triggers a recompute.
    pub last_selected: String,
}

impl GroupState {
    /// State for a group laid out for the first time.
    pub fn mount(name: &str, selected: &str) -> Self {
        Self {
            expanded: selected.starts_with(name),
            last_selected: selected.to_string(),
        }
    }

    /// Recompute from the selection if it moved since the last pass.
    /// Returns true when a recompute happened.
    pub fn sync(&mut self, name: &str, selected: &str) -> bool {
        if self.last_selected == selected {
            return false;
        }
        self.expanded = selected.starts_with(name);
        self.last_selected = selected.to_string();
        true
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// What a visible row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Leaf { active: bool },
    Group { expanded: bool },
}

/// A visible menu row, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub name: String,
    pub label: String,
    pub depth: usize,
    pub kind: RowKind,
}

/// Expansion state for every group currently laid out.
#[derive(Debug, Default)]
pub struct MenuState {
    groups: HashMap<String, GroupState>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay the tree out against `selected` and return the visible rows.
    ///
    /// Groups seen for the first time are seeded from the selection. Groups
    /// not reached on this pass (inside a collapsed ancestor) are dropped and
    /// get seeded again when they reappear.
    pub fn layout(&mut self, tree: &MenuTree, selected: &str) -> Vec<MenuRow> {
        let mut rows = Vec::new();
        let mut visited = HashSet::new();
        for node in &tree.roots {
            self.layout_node(node, selected, 0, &mut rows, &mut visited);
        }
        self.groups.retain(|name, _| visited.contains(name));
        rows
    }

    fn layout_node(
        &mut self,
        node: &MenuNode,
        selected: &str,
        depth: usize,
        rows: &mut Vec<MenuRow>,
        visited: &mut HashSet<String>,
    ) {
        match node {
            MenuNode::Leaf { name, .. } => rows.push(MenuRow {
                name: name.clone(),
                label: node.display_label().to_string(),
                depth,
                kind: RowKind::Leaf {
                    active: name == selected,
                },
            }),
            MenuNode::Group { name, children, .. } => {
                visited.insert(name.clone());
                let expanded = match self.groups.get_mut(name) {
                    Some(state) => {
                        if state.sync(name, selected) {
                            tracing::debug!(group = %name, expanded = state.expanded, "menu group recomputed");
                        }
                        state.expanded
                    }
                    None => {
                        let state = GroupState::mount(name, selected);
                        let expanded = state.expanded;
                        self.groups.insert(name.clone(), state);
                        expanded
                    }
                };

                rows.push(MenuRow {
                    name: name.clone(),
                    label: node.display_label().to_string(),
                    depth,
                    kind: RowKind::Group { expanded },
                });

                if expanded {
                    for child in children {
                        self.layout_node(child, selected, depth + 1, rows, visited);
                    }
                }
            }
        }
    }

    /// Flip a group's expansion. Selection is untouched. Returns false if the
    /// group is not currently laid out.
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.groups.get_mut(name) {
            Some(state) => {
                state.toggle();
                true
            }
            None => false,
        }
    }

    /// Expansion of a laid-out group.
    pub fn is_expanded(&self, name: &str) -> Option<bool> {
        self.groups.get(name).map(|s| s.expanded)
    }

    /// Forget every group, as if the menu was mounted fresh.
    pub fn reset(&mut self) {
        self.groups.clear();
    }
}
