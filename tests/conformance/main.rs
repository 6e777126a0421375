//! Cross-implementation conformance suite
//!
//! Every behavioral guarantee of the container contracts, exercised
//! against two different backing structures — the array-backed `VecList`
//! and the deque-backed `ChainList` — plus the immutable `FrozenList`.
//! Client code must not be able to tell conforming implementations
//! apart through the contract surface.

mod chain_list;

use chain_list::ChainList;
use stowage::{Collection, CursorState, FrozenList, List, VecList};

// ========================================================================
// Generic checks, instantiated for both mutable implementations
// ========================================================================

fn check_size_tracks_emptiness<L: List<i32>>(mut list: L) {
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    list.add(7).unwrap();
    assert!(!list.is_empty());
    list.clear().unwrap();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

fn check_remove_if_even<L: List<i32>>(mut list: L) {
    assert!(list.remove_if(&mut |e| e % 2 == 0).unwrap());
    assert_eq!(list.to_vec(), vec![1, 3, 5]);
    assert!(!list.remove_if(&mut |e| e % 2 == 0).unwrap());
}

fn check_fail_fast_cursor<L: List<i32>>(mut list: L) {
    let mut cursor = list.cursor();
    assert_eq!(cursor.advance(&list).unwrap(), Some(&10));

    list.add(99).unwrap();

    let err = cursor.advance(&list).unwrap_err();
    assert!(err.is_concurrent_structural_change());
    assert_eq!(cursor.state(), CursorState::Invalidated);
}

fn check_index_round_trip<L: List<i32>>(mut list: L) {
    let before = list.to_vec();
    for index in 0..list.len() {
        let current = *list.get(index).unwrap();
        assert_eq!(list.set(index, current).unwrap(), current);
    }
    assert_eq!(list.to_vec(), before);

    list.insert(1, 42).unwrap();
    assert_eq!(list.len(), before.len() + 1);
    assert_eq!(list.remove_at(1).unwrap(), 42);
    assert_eq!(list.to_vec(), before);
}

fn check_sort_stability<L: List<(i32, &'static str)>>(mut list: L) {
    list.sort_by(&mut |a, b| a.0.cmp(&b.0)).unwrap();
    assert_eq!(list.to_vec(), vec![(0, "c"), (1, "a"), (1, "b")]);
}

fn check_view_aliases_parent<L: List<i32>>(mut list: L) {
    let mut view = list.view(1, 3).unwrap();
    view.set(&mut list, 0, 20).unwrap();
    assert_eq!(list.to_vec(), vec![1, 20, 3, 4]);

    view.remove_at(&mut list, 1).unwrap();
    assert_eq!(list.to_vec(), vec![1, 20, 4]);

    list.add(5).unwrap();
    assert!(view.get(&list, 0).unwrap_err().is_concurrent_structural_change());
}

#[test]
fn size_tracks_emptiness_on_both_backings() {
    check_size_tracks_emptiness(VecList::new());
    check_size_tracks_emptiness(ChainList::new());
}

#[test]
fn remove_if_behaves_identically_on_both_backings() {
    check_remove_if_even(VecList::from_vec(vec![1, 2, 3, 4, 5]));
    check_remove_if_even(ChainList::from_vec(vec![1, 2, 3, 4, 5]));
}

#[test]
fn cursors_fail_fast_on_both_backings() {
    check_fail_fast_cursor(VecList::from_vec(vec![10, 20, 30]));
    check_fail_fast_cursor(ChainList::from_vec(vec![10, 20, 30]));
}

#[test]
fn index_round_trips_on_both_backings() {
    check_index_round_trip(VecList::from_vec(vec![5, 6, 7]));
    check_index_round_trip(ChainList::from_vec(vec![5, 6, 7]));
}

#[test]
fn sort_is_stable_on_both_backings() {
    let elements = vec![(1, "a"), (1, "b"), (0, "c")];
    check_sort_stability(VecList::from_vec(elements.clone()));
    check_sort_stability(ChainList::from_vec(elements));
}

#[test]
fn views_alias_their_parent_on_both_backings() {
    check_view_aliases_parent(VecList::from_vec(vec![1, 2, 3, 4]));
    check_view_aliases_parent(ChainList::from_vec(vec![1, 2, 3, 4]));
}

// ========================================================================
// Heterogeneous implementations interoperate
// ========================================================================

#[test]
fn equal_content_compares_equal_across_backings() {
    let array_backed = VecList::from_vec(vec![1, 2, 3]);
    let deque_backed = ChainList::from_vec(vec![1, 2, 3]);
    assert!(array_backed.eq_list(&deque_backed));
    assert!(deque_backed.eq_list(&array_backed));
    assert!(!array_backed.eq_list(&ChainList::from_vec(vec![3, 2, 1])));
}

#[test]
fn equal_lists_hash_equal_across_backings_and_runs() {
    let array_backed = VecList::from_vec(vec![1, 2, 3]);
    let deque_backed = ChainList::from_vec(vec![1, 2, 3]);
    let frozen = FrozenList::of([1, 2, 3]);
    assert_eq!(array_backed.list_hash(), deque_backed.list_hash());
    assert_eq!(array_backed.list_hash(), frozen.list_hash());
    assert_ne!(array_backed.list_hash(), FrozenList::of([1, 3, 2]).list_hash());
}

#[test]
fn bulk_set_algebra_crosses_backings() {
    let mut array_backed = VecList::from_vec(vec![1, 2, 3, 4]);
    let deque_backed = ChainList::from_vec(vec![2, 4, 6]);

    assert!(!array_backed.contains_all(&deque_backed));
    assert!(array_backed.retain_all(&deque_backed).unwrap());
    assert_eq!(array_backed.to_vec(), vec![2, 4]);
    assert!(deque_backed.contains_all(&array_backed));

    assert!(array_backed.add_all(&deque_backed).unwrap());
    assert_eq!(array_backed.to_vec(), vec![2, 4, 2, 4, 6]);

    assert!(array_backed.remove_all(&ChainList::from_vec(vec![2])).unwrap());
    assert_eq!(array_backed.to_vec(), vec![4, 4, 6]);
}

#[test]
fn insert_all_accepts_any_source_backing() {
    let mut target = VecList::from_vec(vec![1, 4]);
    let source = ChainList::from_vec(vec![2, 3]);
    assert!(target.insert_all(1, &source).unwrap());
    assert_eq!(target.to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn copy_construction_preserves_traversal_order_and_independence() {
    let source = ChainList::from_vec(vec![3, 1, 2]);
    let mut copy = VecList::copy_of(&source);
    assert_eq!(copy.to_vec(), source.to_vec());

    copy.add(9).unwrap();
    copy.set(0, 0).unwrap();
    assert_eq!(source.to_vec(), vec![3, 1, 2]);
}

// ========================================================================
// Immutable factory
// ========================================================================

#[test]
fn copy_of_is_immutable_but_readable() {
    let source = VecList::from_vec(vec![1, 2, 3]);
    let mut frozen = FrozenList::copy_of(&source);

    let err = frozen.add(4).unwrap_err();
    assert!(err.is_unsupported_operation());
    assert_eq!(frozen.to_vec(), vec![1, 2, 3]);
}

#[test]
fn frozen_list_participates_in_read_only_algebra() {
    let frozen = FrozenList::of([2, 4]);
    let mut mutable = ChainList::from_vec(vec![1, 2, 3, 4]);
    assert!(mutable.contains_all(&frozen));
    assert!(mutable.retain_all(&frozen).unwrap());
    assert_eq!(mutable.to_vec(), vec![2, 4]);
    assert!(mutable.eq_list(&frozen));
}

// ========================================================================
// Determinism of the default algorithms
// ========================================================================

#[test]
fn replace_all_processes_in_traversal_order_on_both_backings() {
    let mut array_backed = VecList::from_vec(vec![1, 2, 3]);
    let mut deque_backed = ChainList::from_vec(vec![1, 2, 3]);
    let mut array_seen = Vec::new();
    let mut deque_seen = Vec::new();

    array_backed
        .replace_all(&mut |e| {
            array_seen.push(e);
            e + 100
        })
        .unwrap();
    deque_backed
        .replace_all(&mut |e| {
            deque_seen.push(e);
            e + 100
        })
        .unwrap();

    assert_eq!(array_seen, deque_seen);
    assert!(array_backed.eq_list(&deque_backed));
}

#[test]
fn positional_search_agrees_across_backings() {
    let array_backed = VecList::from_vec(vec![5, 3, 5, 7]);
    let deque_backed = ChainList::from_vec(vec![5, 3, 5, 7]);
    assert_eq!(array_backed.index_of(&5), deque_backed.index_of(&5));
    assert_eq!(array_backed.last_index_of(&5), deque_backed.last_index_of(&5));
    assert_eq!(array_backed.index_of(&9), deque_backed.index_of(&9));
}
