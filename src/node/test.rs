use compare::{Compare, Natural};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use std::fmt::Debug;

use crate::policy::{Multi, Policy, Unique};
use crate::tree::Tree;

/// An operation on a `Tree`.
#[derive(Clone, Debug)]
enum Op<T> {
    /// Insert an item into the tree.
    Insert(T),
    /// Remove the first item equal to the given one.
    Remove(T),
    /// Erase the item at index `n % tree.len()` through a cursor.
    Erase(usize),
    /// Move the contents of a tree built from the given items into the tree.
    Merge(Vec<T>),
}

impl<T> Arbitrary for Op<T> where T: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self {
        match u8::arbitrary(gen) % 10 {
            0..=4 => Op::Insert(T::arbitrary(gen)),
            5..=6 => Op::Remove(T::arbitrary(gen)),
            7..=8 => Op::Erase(usize::arbitrary(gen)),
            _ => Op::Merge(Vec::arbitrary(gen)),
        }
    }
}

impl<T> Op<T> where T: Ord {
    /// Perform the operation on the given tree.
    fn exec<D: Policy>(self, tree: &mut Tree<T, Natural<T>, D>) {
        match self {
            Op::Insert(item) => { tree.insert(item); }
            Op::Remove(item) => { tree.remove(&item); }
            Op::Erase(n) => if !tree.is_empty() {
                let mut cursor = tree.begin();
                for _ in 0..n % tree.len() { tree.advance(&mut cursor).unwrap(); }
                assert!(tree.erase(cursor).unwrap().is_some());
            },
            Op::Merge(items) => {
                let mut other: Tree<_, Natural<_>, D> = items.into_iter().collect();
                tree.merge(&mut other);
                assert!(other.is_empty());
            }
        }
    }
}

/// Checks that every item of a left subtree is less than its ancestor, that every item of a right
/// subtree is not, and that exactly `len()` live nodes are reachable from the root.
fn assert_search_tree<T, C, D>(tree: &Tree<T, C, D>) where T: Debug, C: Compare<T>, D: Policy {
    let cmp = tree.cmp();
    let mut reachable = 0;
    let mut pending = vec![(tree.root(), None::<&T>, None::<&T>)];

    while let Some((link, lower, upper)) = pending.pop() {
        let handle = match link {
            None => continue,
            Some(handle) => handle,
        };

        reachable += 1;
        assert!(reachable <= tree.live_nodes(), "cycle through {:?}", handle);

        let node = tree.node(handle);
        if let Some(lower) = lower { assert!(!cmp.compares_lt(&node.item, lower)); }
        if let Some(upper) = upper { assert!(cmp.compares_lt(&node.item, upper)); }

        pending.push((node.left, lower, Some(&node.item)));
        pending.push((node.right, Some(&node.item), upper));
    }

    assert_eq!(reachable, tree.len());
    assert_eq!(tree.live_nodes(), tree.len());
    assert_eq!(tree.iter().count(), tree.len());

    let items: Vec<&T> = tree.iter().collect();

    for pair in items.windows(2) {
        if D::duplicates() {
            assert!(!cmp.compares_lt(pair[1], pair[0]), "{:?}", pair);
        } else {
            assert!(cmp.compares_lt(pair[0], pair[1]), "{:?}", pair);
        }
    }
}

#[quickcheck]
fn unique_ops_keep_a_search_tree(ops: Vec<Op<u8>>) {
    let mut tree: Tree<_, _, Unique> = Tree::new();
    for op in ops { op.exec(&mut tree); }
    assert_search_tree(&tree);
}

#[quickcheck]
fn multi_ops_keep_a_search_tree(ops: Vec<Op<u8>>) {
    let mut tree: Tree<_, _, Multi> = Tree::new();
    for op in ops { op.exec(&mut tree); }
    assert_search_tree(&tree);
}

#[quickcheck]
fn cursors_resume_where_found(items: Vec<u8>) {
    let tree: Tree<_, Natural<_>, Multi> = items.iter().copied().collect();

    for (start, item) in tree.iter().enumerate() {
        let mut cursor = tree.lower_bound(item);
        let mut rest = vec![];

        while !cursor.is_end() {
            rest.push(*tree.item(&cursor).unwrap().unwrap());
            tree.advance(&mut cursor).unwrap();
        }

        let first = tree.iter().position(|other| other == item).unwrap();
        assert!(first <= start);
        assert!(tree.iter().skip(first).copied().eq(rest));
    }
}

#[quickcheck]
fn clone_reproduces_the_shape(items: Vec<u16>) {
    let tree: Tree<_> = items.into_iter().collect();
    let copy = tree.clone();
    assert_search_tree(&copy);

    let mut pending = vec![(tree.root(), copy.root())];

    while let Some(pair) = pending.pop() {
        match pair {
            (None, None) => {}
            (Some(l), Some(r)) => {
                let (l, r) = (tree.node(l), copy.node(r));
                assert_eq!(l.item, r.item);
                pending.push((l.left, r.left));
                pending.push((l.right, r.right));
            }
            _ => panic!("shapes differ"),
        }
    }
}

fn complete() -> Tree<u32> {
    [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
}

fn item_at<T: Copy + Ord>(tree: &Tree<T>, link: super::Link) -> Option<T> {
    link.map(|handle| tree.node(handle).item)
}

#[test]
fn erase_leaf() {
    let mut tree = complete();
    let cursor = tree.find(&20);
    assert_eq!(tree.erase(cursor), Ok(Some(20)));

    let thirty = tree.node(tree.root().unwrap()).left.unwrap();
    assert_eq!(tree.node(thirty).left, None);
    assert_eq!(item_at(&tree, tree.node(thirty).right), Some(40));
    assert_search_tree(&tree);
}

#[test]
fn erase_node_with_one_child() {
    let mut tree = complete();
    assert_eq!(tree.remove(&20), Some(20));
    assert_eq!(tree.remove(&40), Some(40));
    assert_eq!(tree.remove(&60), Some(60));

    // 30 has no child left; 70 keeps 80.
    assert_eq!(tree.remove(&70), Some(70));
    let root = tree.node(tree.root().unwrap());
    assert_eq!(item_at(&tree, root.right), Some(80));
    assert_search_tree(&tree);
}

#[test]
fn erase_root_splices_in_the_successor() {
    let mut tree = complete();
    let cursor = tree.find(&50);
    assert_eq!(tree.erase(cursor), Ok(Some(50)));

    let root = tree.node(tree.root().unwrap());
    assert_eq!(root.item, 60);
    assert_eq!(item_at(&tree, root.left), Some(30));
    assert_eq!(item_at(&tree, root.right), Some(70));

    let seventy = tree.node(root.right.unwrap());
    assert_eq!(seventy.left, None);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [20, 30, 40, 60, 70, 80]);
    assert_eq!(tree.len(), 6);
    assert_search_tree(&tree);
}

#[test]
fn erase_with_successor_as_right_child() {
    let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    assert_eq!(tree.remove(&2), Some(2));

    let root = tree.node(tree.root().unwrap());
    assert_eq!(root.item, 3);
    assert_eq!(item_at(&tree, root.left), Some(1));
    assert_eq!(root.right, None);
    assert_search_tree(&tree);
}

#[test]
fn duplicates_go_right() {
    let cmp = |l: &(u8, char), r: &(u8, char)| l.0.cmp(&r.0);
    let mut bag: Tree<_, _, Multi> = Tree::with_cmp(cmp);
    bag.insert((5, 'a'));
    bag.insert((5, 'b'));
    bag.insert((5, 'c'));

    let root = bag.node(bag.root().unwrap());
    assert_eq!(root.left, None);
    assert_eq!(bag.iter().map(|e| e.1).collect::<String>(), "abc");
    assert_eq!(bag.count(&(5, 'z')), 3);
    assert_eq!(bag.get(&(5, 'z')), Some(&(5, 'a')));
}

#[test]
fn deep_trees_do_not_overflow_the_stack() {
    const N: u32 = 20_000;

    let mut tree: Tree<_> = (0..N).collect();
    assert_eq!(tree.len(), N as usize);
    assert_eq!(tree.count(&(N - 1)), 1);
    assert_eq!(tree.last(), Some(&(N - 1)));

    let copy = tree.try_clone().unwrap();
    assert_eq!(copy.len(), tree.len());
    assert!(copy.iter().copied().eq(0..N));

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.live_nodes(), 0);
    drop(copy);
}

#[test]
fn try_insert_of_a_held_item_allocates_nothing() {
    let mut tree = Tree::<u32>::new();
    let mut next = 0;

    // Fill node storage to capacity.
    while next == 0 || tree.spare_nodes() > 0 {
        tree.insert(next);
        next += 1;
    }

    let (cursor, inserted) = tree.try_insert(0).unwrap();
    assert!(!inserted);
    assert_eq!(tree.spare_nodes(), 0);
    assert_eq!(tree.item(&cursor), Ok(Some(&0)));

    assert!(tree.try_insert(next).unwrap().1);
    assert_eq!(tree.len(), next as usize + 1);
}
