//! Tests for TernaryTree construction and structural queries

use rstest::{fixture, rstest};

use tritree::util::testing;
use tritree::{Branch, Slot, TernaryNode, TernaryTree, TraversalIterator, TreeError};

#[fixture]
fn three_leaves() -> TernaryTree<i32> {
    testing::init_test_setup();
    TernaryTree::from_branches(
        1,
        TernaryTree::with_root(2).into(),
        TernaryTree::with_root(3).into(),
        TernaryTree::with_root(4).into(),
    )
    .unwrap()
}

fn values<'a>(iter: impl Iterator<Item = &'a i32>) -> Vec<i32> {
    iter.copied().collect()
}

// ============================================================
// Scenario Tests
// ============================================================

#[rstest]
fn given_root_with_three_leaves_when_querying_then_matches_expected_shape(
    three_leaves: TernaryTree<i32>,
) {
    assert_eq!(three_leaves.node_count(), 4);
    assert_eq!(three_leaves.height(), Ok(2));
    assert_eq!(values(three_leaves.preorder()), vec![1, 2, 3, 4]);
    assert_eq!(values(three_leaves.level_order()), vec![1, 2, 3, 4]);
    assert_eq!(values(three_leaves.postorder()), vec![2, 3, 4, 1]);
}

#[rstest]
fn given_empty_tree_when_querying_then_reports_empty() {
    let tree: TernaryTree<i32> = TernaryTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.root_data(), Err(TreeError::EmptyTree));
    assert!(!tree.preorder().has_next());
    assert!(!tree.postorder().has_next());
    assert!(!tree.level_order().has_next());
}

#[rstest]
fn given_empty_tree_when_asking_height_then_fails_with_empty_tree() {
    let tree: TernaryTree<String> = TernaryTree::default();
    assert_eq!(tree.height(), Err(TreeError::EmptyTree));
    assert_eq!(tree.node_count(), 0);
}

#[rstest]
fn given_single_node_when_querying_then_is_leaf_of_height_one() {
    let tree = TernaryTree::with_root("x");
    assert_eq!(tree.height(), Ok(1));
    assert_eq!(tree.node_count(), 1);
    assert!(tree.root_node().unwrap().is_leaf());
    assert_eq!(tree.preorder().collect::<Vec<_>>(), vec![&"x"]);
    assert_eq!(tree.postorder().collect::<Vec<_>>(), vec![&"x"]);
    assert_eq!(tree.level_order().collect::<Vec<_>>(), vec![&"x"]);
}

// ============================================================
// Construction Protocol Tests
// ============================================================

#[rstest]
fn given_same_source_for_left_and_middle_when_building_then_branches_are_independent(
    three_leaves: TernaryTree<i32>,
) {
    let mut tree = TernaryTree::from_branches(
        0,
        three_leaves.into(),
        Branch::SameAs(Slot::Left),
        Branch::Empty,
    )
    .unwrap();

    {
        let root = tree.root_node().unwrap();
        assert_eq!(root.child(Slot::Left), root.child(Slot::Middle));
        assert!(!root.has_child(Slot::Right));
    }

    // mutate a grandchild reached through the middle branch only
    tree.root_node_mut()
        .and_then(|root| root.child_mut(Slot::Middle))
        .and_then(|middle| middle.child_mut(Slot::Right))
        .unwrap()
        .set_data(44);

    let root = tree.root_node().unwrap();
    let left = root.child(Slot::Left).unwrap();
    let middle = root.child(Slot::Middle).unwrap();
    assert_eq!(*left.child(Slot::Right).unwrap().data(), 4);
    assert_eq!(*middle.child(Slot::Right).unwrap().data(), 44);
    assert_eq!(values(tree.preorder()), vec![0, 1, 2, 3, 4, 1, 2, 3, 44]);
}

#[rstest]
fn given_same_source_in_all_slots_when_building_then_three_copies_exist() {
    let tree = TernaryTree::from_branches(
        "root".to_string(),
        TernaryTree::with_root("leaf".to_string()).into(),
        Branch::SameAs(Slot::Left),
        Branch::SameAs(Slot::Left),
    )
    .unwrap();
    assert_eq!(tree.node_count(), 4);
    assert_eq!(
        tree.level_order().map(String::as_str).collect::<Vec<_>>(),
        vec!["root", "leaf", "leaf", "leaf"]
    );
}

#[rstest]
fn given_tree_used_as_its_own_subtree_when_rebuilding_then_old_contents_are_moved_down(
    mut three_leaves: TernaryTree<i32>,
) {
    three_leaves
        .set_tree_with(0, Branch::Empty, Branch::Current, Branch::Empty)
        .unwrap();
    assert_eq!(three_leaves.height(), Ok(3));
    assert_eq!(values(three_leaves.preorder()), vec![0, 1, 2, 3, 4]);
    let root = three_leaves.root_node().unwrap();
    assert!(!root.has_child(Slot::Left));
    assert!(root.has_child(Slot::Middle));
}

#[rstest]
fn given_alias_of_later_slot_when_building_then_rejects_and_keeps_tree(
    mut three_leaves: TernaryTree<i32>,
) {
    let result = three_leaves.set_tree_with(
        9,
        Branch::SameAs(Slot::Right),
        Branch::Empty,
        TernaryTree::with_root(1).into(),
    );
    assert_eq!(
        result,
        Err(TreeError::InvalidAlias {
            slot: Slot::Left,
            target: Slot::Right
        })
    );
    assert_eq!(values(three_leaves.preorder()), vec![1, 2, 3, 4]);
}

#[rstest]
fn given_built_tree_when_rebuilt_with_set_tree_then_becomes_single_node(
    mut three_leaves: TernaryTree<i32>,
) {
    three_leaves.set_tree(5);
    assert_eq!(three_leaves.node_count(), 1);
    assert_eq!(three_leaves.root_data(), Ok(&5));
}

#[rstest]
fn given_tree_when_cleared_then_is_empty(mut three_leaves: TernaryTree<i32>) {
    three_leaves.clear();
    assert!(three_leaves.is_empty());
    assert_eq!(three_leaves.root_data(), Err(TreeError::EmptyTree));
}

// ============================================================
// Low-level Access Tests
// ============================================================

#[rstest]
fn given_root_node_when_replaced_then_tree_reflects_new_shape(mut three_leaves: TernaryTree<i32>) {
    let mut root = TernaryNode::new(10);
    root.set_child(Slot::Right, Some(TernaryNode::new(30)));

    let previous = three_leaves.set_root_node(Some(root)).unwrap();
    assert_eq!(previous.node_count(), 4);
    assert_eq!(values(three_leaves.preorder()), vec![10, 30]);

    assert_eq!(three_leaves.set_root_data(11), Ok(10));
    assert_eq!(values(three_leaves.postorder()), vec![30, 11]);
}

#[rstest]
fn given_deep_chain_when_measuring_then_height_counts_every_level() {
    let mut tree = TernaryTree::with_root(0);
    for level in 1..=20 {
        tree.set_tree_with(level, Branch::Empty, Branch::Empty, Branch::Current)
            .unwrap();
    }
    assert_eq!(tree.height(), Ok(21));
    assert_eq!(tree.node_count(), 21);
    assert_eq!(tree.level_order().next(), Some(&20));
    assert_eq!(tree.postorder().next(), Some(&0));
}

#[rstest]
fn given_very_deep_chain_when_cleared_then_releases_all_nodes() {
    testing::init_test_setup();
    let mut tree = TernaryTree::with_root(0u32);
    for level in 1..200_000 {
        tree.set_tree_with(level, Branch::Current, Branch::Empty, Branch::Empty)
            .unwrap();
    }
    assert_eq!(tree.preorder().count(), 200_000);
    assert_eq!(tree.level_order().next(), Some(&199_999));

    tree.clear();
    assert!(tree.is_empty());
}

#[rstest]
fn given_very_deep_chain_when_dropped_then_does_not_overflow() {
    let mut tree = TernaryTree::with_root(0u32);
    for level in 1..200_000 {
        tree.set_tree_with(level, Branch::Empty, Branch::Empty, Branch::Current)
            .unwrap();
    }
    let detached = tree.set_root_node(None).unwrap();
    assert!(tree.is_empty());
    drop(detached);
    drop(tree);
}
