use policy_explorer::menu::{MenuRow, MenuState, MenuTree, RawMenuNode, RowKind};
use proptest::prelude::*;

fn tree_from_json(json: &str) -> MenuTree {
    let raw: Vec<RawMenuNode> = serde_json::from_str(json).unwrap();
    MenuTree::from_raw(&raw)
}

fn gov_tree() -> MenuTree {
    tree_from_json(
        r#"[
            {"name": "gov", "label": "Government", "children": [
                {"name": "gov.hmrc", "label": "HMRC", "index": 1, "children": [
                    {"name": "gov.hmrc.income_tax", "index": 0, "children": [
                        {"name": "gov.hmrc.income_tax.basic_rate", "label": "Basic rate", "index": 0},
                        {"name": "gov.hmrc.income_tax.higher_rate", "label": "Higher rate", "index": 1}
                    ]},
                    {"name": "gov.hmrc.vat", "label": "VAT", "index": 1}
                ]},
                {"name": "gov.dwp", "label": "DWP", "index": 0, "children": [
                    {"name": "gov.dwp.child_benefit", "label": "Child Benefit", "index": 0}
                ]}
            ]},
            {"name": "household", "children": [
                {"name": "household.children", "index": 0}
            ]}
        ]"#,
    )
}

fn groups(rows: &[MenuRow]) -> Vec<(&str, bool)> {
    rows.iter()
        .filter_map(|r| match r.kind {
            RowKind::Group { expanded } => Some((r.name.as_str(), expanded)),
            RowKind::Leaf { .. } => None,
        })
        .collect()
}

fn active_leaves(rows: &[MenuRow]) -> Vec<&str> {
    rows.iter()
        .filter(|r| r.kind == RowKind::Leaf { active: true })
        .map(|r| r.name.as_str())
        .collect()
}

#[test]
fn two_leaf_example_tree() {
    let tree = tree_from_json(
        r#"[{"name": "a", "children": [{"name": "a.b", "index": 0}, {"name": "a.c", "index": 1}]}]"#,
    );
    let mut state = MenuState::new();
    let rows = state.layout(&tree, "a.c");

    let rendered: Vec<(&str, RowKind)> = rows.iter().map(|r| (r.label.as_str(), r.kind)).collect();
    assert_eq!(
        rendered,
        vec![
            ("a", RowKind::Group { expanded: true }),
            ("b", RowKind::Leaf { active: false }),
            ("c", RowKind::Leaf { active: true }),
        ]
    );
}

#[test]
fn every_ancestor_of_selection_expands() {
    let tree = gov_tree();
    for leaf in tree.leaf_names() {
        let mut state = MenuState::new();
        let rows = state.layout(&tree, &leaf);
        assert_eq!(active_leaves(&rows), vec![leaf.as_str()]);
        for (name, expanded) in groups(&rows) {
            assert_eq!(expanded, leaf.starts_with(name), "group {name} for {leaf}");
        }
    }
}

#[test]
fn toggle_flips_exactly_one_group() {
    let tree = gov_tree();
    let mut state = MenuState::new();
    let before = state.layout(&tree, "gov.dwp.child_benefit");
    let before_groups = groups(&before);

    assert!(state.toggle("gov.hmrc"));
    let after = state.layout(&tree, "gov.dwp.child_benefit");

    for (name, expanded) in before_groups {
        let now = state.is_expanded(name).unwrap();
        if name == "gov.hmrc" {
            assert_eq!(now, !expanded);
        } else {
            assert_eq!(now, expanded, "group {name} changed");
        }
    }
    // The newly opened group shows its children, seeded from the selection.
    assert!(groups(&after).contains(&("gov.hmrc.income_tax", false)));
    assert!(after.iter().any(|r| r.name == "gov.hmrc.vat"));
}

#[test]
fn moving_selection_recomputes_over_manual_state() {
    let tree = gov_tree();
    let mut state = MenuState::new();
    state.layout(&tree, "gov.hmrc.income_tax.basic_rate");

    // Pin DWP open and collapse income tax by hand.
    state.toggle("gov.dwp");
    state.toggle("gov.hmrc.income_tax");
    state.layout(&tree, "gov.hmrc.income_tax.basic_rate");
    assert_eq!(state.is_expanded("gov.dwp"), Some(true));
    assert_eq!(state.is_expanded("gov.hmrc.income_tax"), Some(false));

    let rows = state.layout(&tree, "gov.hmrc.vat");
    assert_eq!(state.is_expanded("gov"), Some(true));
    assert_eq!(state.is_expanded("gov.hmrc"), Some(true));
    assert_eq!(state.is_expanded("gov.dwp"), Some(false));
    assert_eq!(state.is_expanded("gov.hmrc.income_tax"), Some(false));
    assert_eq!(active_leaves(&rows), vec!["gov.hmrc.vat"]);
}

#[test]
fn children_render_in_index_order_regardless_of_input_order() {
    let tree = tree_from_json(
        r#"[{"name": "p", "children": [
            {"name": "p.three", "index": 3},
            {"name": "p.one", "index": 1},
            {"name": "p.two", "index": 2}
        ]}]"#,
    );
    let mut state = MenuState::new();
    let rows = state.layout(&tree, "p.two");
    let names: Vec<&str> = rows.iter().skip(1).map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["p.one", "p.two", "p.three"]);
}

#[test]
fn leaf_rows_carry_full_name_for_selection() {
    let tree = gov_tree();
    let mut state = MenuState::new();
    let rows = state.layout(&tree, "gov.dwp.child_benefit");
    let leaf = rows.iter().find(|r| r.label == "Child Benefit").unwrap();
    assert_eq!(leaf.name, "gov.dwp.child_benefit");

    // Laying out again with the same selection changes nothing.
    let again = state.layout(&tree, "gov.dwp.child_benefit");
    assert_eq!(rows, again);
}

#[test]
fn top_level_order_is_preserved() {
    let tree = gov_tree();
    let mut state = MenuState::new();
    let rows = state.layout(&tree, "");
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["gov", "household"]);
}

#[derive(Debug, Clone)]
enum Shape {
    Leaf,
    Group(Vec<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape::Leaf).prop_recursive(4, 40, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(Shape::Group)
    })
}

/// Single-digit segments keep one sibling's name from prefixing another's.
/// Indices run backwards so every group needs sorting.
fn build(shape: &Shape, name: String, index: i64) -> RawMenuNode {
    match shape {
        Shape::Leaf => RawMenuNode::leaf(name, index),
        Shape::Group(children) => {
            let count = children.len() as i64;
            let built = children
                .iter()
                .enumerate()
                .map(|(i, child)| build(child, format!("{}.n{}", name, i), count - i as i64))
                .collect();
            RawMenuNode::group(name, built).with_index(index)
        }
    }
}

fn generated_tree(shapes: &[Shape]) -> MenuTree {
    let raw: Vec<RawMenuNode> = shapes
        .iter()
        .enumerate()
        .map(|(i, s)| build(s, format!("r{}", i), 0))
        .collect();
    MenuTree::from_raw(&raw)
}

fn assert_selection_drives_expansion(rows: &[MenuRow], leaf: &str) -> Result<(), TestCaseError> {
    prop_assert_eq!(active_leaves(rows), vec![leaf]);
    for (name, expanded) in groups(rows) {
        let ancestor = leaf.starts_with(&format!("{}.", name));
        prop_assert_eq!(expanded, ancestor, "group {} for {}", name, leaf);
    }
    Ok(())
}

proptest! {
    #[test]
    fn selecting_any_leaf_expands_exactly_its_ancestors(
        shapes in prop::collection::vec(shape(), 1..4),
        pick in any::<prop::sample::Index>(),
    ) {
        let tree = generated_tree(&shapes);
        let leaves = tree.leaf_names();
        let leaf = pick.get(&leaves).clone();

        let mut state = MenuState::new();
        let rows = state.layout(&tree, &leaf);
        assert_selection_drives_expansion(&rows, &leaf)?;
    }

    #[test]
    fn new_selection_overrides_manual_toggles(
        shapes in prop::collection::vec(shape(), 1..4),
        first in any::<prop::sample::Index>(),
        second in any::<prop::sample::Index>(),
    ) {
        let tree = generated_tree(&shapes);
        let leaves = tree.leaf_names();
        let before = first.get(&leaves).clone();
        let after = second.get(&leaves).clone();
        prop_assume!(before != after);

        let mut state = MenuState::new();
        let rows = state.layout(&tree, &before);
        for (name, _) in groups(&rows) {
            state.toggle(name);
        }
        state.layout(&tree, &before);

        let rows = state.layout(&tree, &after);
        assert_selection_drives_expansion(&rows, &after)?;
    }
}
