//! Menu Tree Module
//! Raw menu nodes as they arrive in metadata, resolved once into tagged nodes.

use serde::{Deserialize, Serialize};

/// Menu node as found in metadata documents.
///
/// Groups carry `children`, leaves omit it. Every field is optional so that
/// sloppy input still produces a menu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMenuNode {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawMenuNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
}

impl RawMenuNode {
    pub fn leaf(name: impl Into<String>, index: i64) -> Self {
        Self {
            name: name.into(),
            index: Some(index),
            ..Default::default()
        }
    }

    pub fn group(name: impl Into<String>, children: Vec<RawMenuNode>) -> Self {
        Self {
            name: name.into(),
            children: Some(children),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_index(mut self, index: i64) -> Self {
        self.index = Some(index);
        self
    }
}

/// A resolved menu node. Children of a group are already sorted.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuNode {
    Leaf {
        name: String,
        label: Option<String>,
    },
    Group {
        name: String,
        label: Option<String>,
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    /// Resolve a raw node and everything below it.
    pub fn from_raw(raw: &RawMenuNode) -> Self {
        match &raw.children {
            Some(children) => MenuNode::Group {
                name: raw.name.clone(),
                label: raw.label.clone(),
                children: sorted_children(children),
            },
            None => MenuNode::Leaf {
                name: raw.name.clone(),
                label: raw.label.clone(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MenuNode::Leaf { name, .. } | MenuNode::Group { name, .. } => name,
        }
    }

    /// Label, or the last dotted segment of the name when there is none.
    pub fn display_label(&self) -> &str {
        let (name, label) = match self {
            MenuNode::Leaf { name, label } | MenuNode::Group { name, label, .. } => {
                (name, label)
            }
        };
        match label {
            Some(label) => label.as_str(),
            None => last_segment(name),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, MenuNode::Group { .. })
    }
}

/// Last segment of a dotted path.
pub fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Sort by `index`, falling back to array position. `sort_by_key` is stable,
/// so equal indices keep their input order.
fn sorted_children(children: &[RawMenuNode]) -> Vec<MenuNode> {
    let mut keyed: Vec<(i64, &RawMenuNode)> = children
        .iter()
        .enumerate()
        .map(|(pos, child)| (child.index.unwrap_or(pos as i64), child))
        .collect();
    keyed.sort_by_key(|(index, _)| *index);
    keyed
        .into_iter()
        .map(|(_, child)| MenuNode::from_raw(child))
        .collect()
}

/// A whole menu. Top-level entries keep the order they were given in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuTree {
    pub roots: Vec<MenuNode>,
}

impl MenuTree {
    pub fn from_raw(nodes: &[RawMenuNode]) -> Self {
        Self {
            roots: nodes.iter().map(MenuNode::from_raw).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Names of every leaf, depth first.
    pub fn leaf_names(&self) -> Vec<String> {
        fn walk(node: &MenuNode, out: &mut Vec<String>) {
            match node {
                MenuNode::Leaf { name, .. } => out.push(name.clone()),
                MenuNode::Group { children, .. } => {
                    children.iter().for_each(|c| walk(c, out));
                }
            }
        }
        let mut out = Vec::new();
        self.roots.iter().for_each(|n| walk(n, &mut out));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_names(node: &MenuNode) -> Vec<&str> {
        match node {
            MenuNode::Group { children, .. } => children.iter().map(|c| c.name()).collect(),
            MenuNode::Leaf { .. } => Vec::new(),
        }
    }

    #[test]
    fn children_sorted_by_index() {
        let raw = RawMenuNode::group(
            "a",
            vec![
                RawMenuNode::leaf("a.three", 3),
                RawMenuNode::leaf("a.one", 1),
                RawMenuNode::leaf("a.two", 2),
            ],
        );
        let node = MenuNode::from_raw(&raw);
        assert_eq!(child_names(&node), vec!["a.one", "a.two", "a.three"]);
    }

    #[test]
    fn equal_indices_keep_input_order() {
        let raw = RawMenuNode::group(
            "a",
            vec![
                RawMenuNode::leaf("a.x", 1),
                RawMenuNode::leaf("a.y", 0),
                RawMenuNode::leaf("a.z", 1),
                RawMenuNode::leaf("a.w", 1),
            ],
        );
        let node = MenuNode::from_raw(&raw);
        assert_eq!(child_names(&node), vec!["a.y", "a.x", "a.z", "a.w"]);
    }

    #[test]
    fn missing_index_falls_back_to_position() {
        let raw = RawMenuNode::group(
            "a",
            vec![
                RawMenuNode {
                    name: "a.first".into(),
                    ..Default::default()
                },
                RawMenuNode::leaf("a.early", -1),
            ],
        );
        let node = MenuNode::from_raw(&raw);
        assert_eq!(child_names(&node), vec!["a.early", "a.first"]);
    }

    #[test]
    fn label_defaults_to_last_segment() {
        let leaf = MenuNode::from_raw(&RawMenuNode::leaf("gov.tax.rate", 0));
        assert_eq!(leaf.display_label(), "rate");

        let labelled = MenuNode::from_raw(&RawMenuNode::leaf("gov.tax.rate", 0).with_label("Rate"));
        assert_eq!(labelled.display_label(), "Rate");
    }

    #[test]
    fn shape_resolved_from_children_field() {
        let json = r#"[
            {"name": "a", "children": [{"name": "a.b", "index": 0}]},
            {"name": "c"},
            {"label": "nameless"}
        ]"#;
        let raw: Vec<RawMenuNode> = serde_json::from_str(json).unwrap();
        let tree = MenuTree::from_raw(&raw);
        assert!(tree.roots[0].is_group());
        assert!(!tree.roots[1].is_group());
        assert_eq!(tree.roots[2].name(), "");
        assert_eq!(tree.leaf_names(), vec!["a.b", "c", ""]);
    }

    #[test]
    fn empty_children_is_still_a_group() {
        let raw: RawMenuNode = serde_json::from_str(r#"{"name": "g", "children": []}"#).unwrap();
        assert!(MenuNode::from_raw(&raw).is_group());
    }
}
