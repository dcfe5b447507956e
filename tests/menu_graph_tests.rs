//! Menu graph linking tests
//!
//! Ring closure, self-loops, shared ancestry and the child-ring overwrite rule.

use rust_morse_input::menu::{ItemId, MenuError, MenuGraph};

/// Walk `next` from `start` until it comes back, collecting the ring.
fn ring_of<const N: usize>(graph: &MenuGraph<N>, start: ItemId) -> Vec<ItemId> {
    let mut ring = vec![start];
    let mut cursor = graph.next(start).expect("start must be in a ring");
    while cursor != start {
        assert!(ring.len() <= N, "ring does not close");
        ring.push(cursor);
        cursor = graph.next(cursor).expect("ring member without next");
    }
    ring
}

fn assert_closed<const N: usize>(graph: &MenuGraph<N>, start: ItemId) {
    for id in ring_of(graph, start) {
        let next = graph.next(id).unwrap();
        let previous = graph.previous(id).unwrap();
        assert_eq!(graph.previous(next), Some(id), "next.previous broken at {:?}", id);
        assert_eq!(graph.next(previous), Some(id), "previous.next broken at {:?}", id);
    }
}

#[test]
fn test_sub_item_starts_self_looped_ring() {
    let mut graph = MenuGraph::<4>::new("Root");
    let root = graph.root();
    let a = graph.add_item("A").unwrap();

    assert_eq!(graph.add_sub_item(root, a), Ok(a));

    assert_eq!(graph.next(a), Some(a));
    assert_eq!(graph.previous(a), Some(a));
    assert_eq!(graph.parent_back(a), Some(root));
    assert_eq!(graph.first_child(root), Some(a));
}

#[test]
fn test_add_next_chain_closes_ring() {
    let mut graph = MenuGraph::<8>::new("Root");
    let root = graph.root();
    let a = graph.insert_sub_item(root, "A").unwrap();
    let b = graph.insert_next(a, "B").unwrap();
    let c = graph.insert_next(b, "C").unwrap();

    assert_eq!(ring_of(&graph, a), vec![a, b, c]);
    assert_closed(&graph, a);

    // The first item's previous was repaired to the last insert
    assert_eq!(graph.previous(a), Some(c));
}

#[test]
fn test_add_next_in_the_middle() {
    let mut graph = MenuGraph::<8>::new("Root");
    let root = graph.root();
    let a = graph.insert_sub_item(root, "A").unwrap();
    let c = graph.insert_next(a, "C").unwrap();
    let b = graph.insert_next(a, "B").unwrap();

    assert_eq!(ring_of(&graph, a), vec![a, b, c]);
    assert_closed(&graph, a);
}

#[test]
fn test_mixed_next_and_previous_inserts() {
    let mut graph = MenuGraph::<8>::new("Root");
    let root = graph.root();
    let b = graph.insert_sub_item(root, "B").unwrap();
    let a = graph.insert_previous(b, "A").unwrap();
    let d = graph.insert_next(b, "D").unwrap();
    let c = graph.insert_previous(d, "C").unwrap();

    assert_eq!(ring_of(&graph, a), vec![a, b, c, d]);
    assert_closed(&graph, a);
    assert_eq!(graph.validate(), Ok(()));
}

#[test]
fn test_siblings_share_parent_back() {
    let mut graph = MenuGraph::<8>::new("Root");
    let root = graph.root();
    let settings = graph.insert_sub_item(root, "Settings").unwrap();
    let beep = graph.insert_sub_item(settings, "Beep").unwrap();
    let caps = graph.insert_next(beep, "Capitalize").unwrap();
    let lang = graph.insert_previous(beep, "Language").unwrap();

    for id in [beep, caps, lang] {
        assert_eq!(graph.parent_back(id), Some(settings));
    }
    assert_eq!(graph.parent_back(settings), Some(root));
}

#[test]
fn test_siblings_of_root_inherit_root_back() {
    let mut graph = MenuGraph::<4>::new("Root");
    let root = graph.root();
    let extra = graph.insert_next(root, "Extra").unwrap();

    assert_eq!(graph.parent_back(extra), Some(root));
    assert_eq!(graph.next(root), Some(extra));
    assert_eq!(graph.previous(root), Some(extra));
    assert_closed(&graph, root);
}

#[test]
fn test_second_sub_item_orphans_first_ring() {
    let mut graph = MenuGraph::<8>::new("Root");
    let root = graph.root();
    let old = graph.insert_sub_item(root, "Old").unwrap();
    let old_sibling = graph.insert_next(old, "OldSibling").unwrap();
    let new = graph.insert_sub_item(root, "New").unwrap();

    assert_eq!(graph.first_child(root), Some(new));

    // The orphaned ring keeps its own wiring
    assert_eq!(ring_of(&graph, old), vec![old, old_sibling]);
    assert_eq!(graph.parent_back(old), Some(root));
    assert_eq!(graph.validate(), Ok(()));
}

#[test]
fn test_linked_item_cannot_be_inserted_again() {
    let mut graph = MenuGraph::<8>::new("Root");
    let root = graph.root();
    let a = graph.insert_sub_item(root, "A").unwrap();
    let b = graph.insert_next(a, "B").unwrap();

    assert_eq!(graph.add_next(a, b), Err(MenuError::AlreadyLinked(b)));
    assert_eq!(graph.add_previous(b, a), Err(MenuError::AlreadyLinked(a)));
    assert_eq!(graph.add_sub_item(b, a), Err(MenuError::AlreadyLinked(a)));
    assert_closed(&graph, a);
}

#[test]
fn test_unknown_id_rejected() {
    let mut big = MenuGraph::<8>::new("Root");
    let root = big.root();
    let a = big.insert_sub_item(root, "A").unwrap();
    let b = big.insert_next(a, "B").unwrap();

    let mut small = MenuGraph::<2>::new("Root");
    let small_root = small.root();
    assert_eq!(small.add_next(small_root, b), Err(MenuError::UnknownItem(b)));
    assert!(small.item(b).is_none());
    assert_eq!(small.next(b), None);
}

#[test]
fn test_insert_reports_full_graph() {
    let mut graph = MenuGraph::<2>::new("Root");
    let root = graph.root();
    graph.insert_sub_item(root, "A").unwrap();

    assert_eq!(graph.insert_sub_item(root, "B"), Err(MenuError::Full));
}

#[test]
fn test_add_alias_matches_add_next() {
    let mut graph = MenuGraph::<4>::new("Root");
    let root = graph.root();
    let a = graph.insert_sub_item(root, "A").unwrap();
    let b = graph.add_item("B").unwrap();

    assert_eq!(graph.add(a, b), Ok(b));
    assert_eq!(graph.next(a), Some(b));
    assert_eq!(graph.previous(a), Some(b));
}

#[test]
fn test_find_by_label() {
    let mut graph = MenuGraph::<4>::new("Root");
    let root = graph.root();
    let a = graph.insert_sub_item(root, "Input").unwrap();

    assert_eq!(graph.find("Input"), Some(a));
    assert_eq!(graph.find("Root"), Some(root));
    assert_eq!(graph.find("Missing"), None);
}

#[test]
fn test_childless_item_has_no_first_child() {
    let mut graph = MenuGraph::<4>::new("Root");
    let root = graph.root();
    let a = graph.insert_sub_item(root, "A").unwrap();

    assert_eq!(graph.first_child(a), None);
    assert!(!graph.item(a).unwrap().has_children());
    assert!(graph.item(root).unwrap().has_children());
}
