use bstree::policy::Multi;
use bstree::project::{First, Projected, Second};
use bstree::{Error, Map, MultiSet, Set, Tree};
use compare::{Compare, natural};
use std::collections::hash_map::DefaultHasher;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

#[test]
fn set_traverses_in_order() {
    let set: Set<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(set.len(), 7);
}

#[test]
fn set_rejects_duplicates() {
    let mut set = Set::new();
    assert!(set.insert(5).1);

    let (cursor, inserted) = set.insert(5);
    assert!(!inserted);
    assert_eq!(set.item(&cursor), Ok(Some(&5)));
    assert_eq!(set.len(), 1);
}

#[test]
fn multiset_keeps_duplicates() {
    let mut bag = MultiSet::new();
    bag.insert(5);
    bag.insert(5);

    assert_eq!(bag.len(), 2);
    assert_eq!(bag.iter().collect::<Vec<_>>(), [&5, &5]);
    assert_eq!(bag.count(&5), 2);
}

#[test]
fn erase_with_two_children() {
    let mut set: Set<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    let cursor = set.find(&50);

    assert_eq!(set.erase(cursor), Ok(Some(50)));
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [20, 30, 40, 60, 70, 80]);
    assert_eq!(set.len(), 6);
}

#[test]
fn erase_end_is_a_no_op() {
    let mut set: Set<_> = [1, 2].into_iter().collect();
    let end = set.end();
    assert_eq!(set.erase(end), Ok(None));
    assert_eq!(set.len(), 2);

    // The set is unchanged, so its cursors survive.
    let begin = set.begin();
    assert_eq!(set.item(&begin), Ok(Some(&1)));
}

#[test]
fn erase_accepts_stale_end_cursors() {
    let mut set = Set::new();
    let end = set.begin();
    set.insert(1);

    assert_eq!(set.item(&end), Err(Error::InvalidCursor));
    assert_eq!(set.erase(end), Ok(None));

    let other: Set<i32> = Set::new();
    assert_eq!(set.erase(other.end()), Ok(None));
    assert_eq!(set.len(), 1);
}

#[test]
fn first_and_last_on_owned_containers() {
    let set: Set<_> = [2, 1, 3].into_iter().collect();
    assert_eq!((set.first(), set.last()), (Some(&1), Some(&3)));

    let bag: MultiSet<_> = [2, 2, 1].into_iter().collect();
    assert_eq!((bag.first(), bag.last()), (Some(&1), Some(&2)));

    let map: Map<_, _> = [(2, 'b'), (1, 'a')].into_iter().collect();
    assert_eq!((map.first(), map.last()), (Some((&1, &'a')), Some((&2, &'b'))));

    let empty: Set<u8> = Set::new();
    assert_eq!(empty.first(), None);
}

#[test]
fn merge_into_empty_moves_everything() {
    let mut source: MultiSet<_> = [1, 2, 2].into_iter().collect();
    let mut target = MultiSet::new();

    target.merge(&mut source);

    assert_eq!(source.len(), 0);
    assert!(source.is_empty());
    assert_eq!(target.len(), 3);
    assert_eq!(target.iter().collect::<Vec<_>>(), [&1, &2, &2]);
}

#[test]
fn merge_into_set_drops_duplicates() {
    let mut source: Set<_> = [2, 3, 4].into_iter().collect();
    let mut target: Set<_> = [1, 2].into_iter().collect();

    target.merge(&mut source);

    assert!(source.is_empty());
    assert_eq!(target.iter().collect::<Vec<_>>(), [&1, &2, &3, &4]);
}

#[test]
fn merge_empty_source_keeps_cursors() {
    let mut target: Set<_> = [1].into_iter().collect();
    let mut source = Set::new();
    let cursor = target.begin();

    target.merge(&mut source);
    assert_eq!(target.item(&cursor), Ok(Some(&1)));
}

#[test]
fn map_insert_or_fetch() {
    let mut map: Map<&str, i32> = Map::new();

    assert_eq!(*map.get_or_insert_default("k"), 0);
    *map.get_or_insert_default("k") = 7;

    assert_eq!(map.at(&"k"), Ok(&7));
    assert_eq!(map.at(&"missing"), Err(Error::KeyNotFound));
    assert_eq!(map.len(), 1);
}

#[test]
fn map_at_mut() {
    let mut map = Map::new();
    map.insert(1, String::from("a"));

    map.at_mut(&1).unwrap().push('b');
    assert_eq!(map[&1], "ab");
    assert_eq!(map.at_mut(&2), Err(Error::KeyNotFound));
}

#[test]
#[should_panic(expected = "key not found")]
fn map_index_panics_on_missing_key() {
    let map: Map<u8, u8> = Map::new();
    let _value = map[&0];
}

#[test]
fn map_entry() {
    let mut map = Map::new();

    match map.entry(1) {
        bstree::map::Entry::Vacant(e) => {
            assert_eq!(*e.key(), 1);
            *e.insert("one") = "uno";
        }
        bstree::map::Entry::Occupied(_) => panic!("entry should be vacant"),
    }

    match map.entry(1) {
        bstree::map::Entry::Occupied(mut e) => {
            assert_eq!(*e.get(), "uno");
            assert_eq!(e.insert("eins"), "uno");
            assert_eq!(e.remove(), (1, "eins"));
        }
        bstree::map::Entry::Vacant(_) => panic!("entry should be occupied"),
    }

    assert!(map.is_empty());
    assert_eq!(*map.entry(2).or_insert_with(|| "two"), "two");
    assert_eq!(*map.entry(2).or_insert("zwei"), "two");
}

#[test]
fn map_insert_does_not_overwrite() {
    let mut map = Map::new();
    map.insert(1, 'a');

    let (cursor, inserted) = map.insert(1, 'b');
    assert!(!inserted);
    assert_eq!(map.key_value(&cursor), Ok(Some((&1, &'a'))));

    let (cursor, inserted) = map.insert_or_assign(1, 'b');
    assert!(!inserted);
    assert_eq!(map.key_value(&cursor), Ok(Some((&1, &'b'))));
}

#[test]
fn map_value_mut_through_cursor() {
    let mut map: Map<_, _> = [(1, 10), (2, 20)].into_iter().collect();
    let mut cursor = map.begin();
    map.advance(&mut cursor).unwrap();

    *map.value_mut(&cursor).unwrap().unwrap() += 1;
    assert_eq!(map.get(&2), Some(&21));
    assert_eq!(map.erase(cursor), Ok(Some((2, 21))));
}

#[test]
fn cursors_walk_in_lockstep() {
    let set: Set<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    let mut a = set.begin();
    let mut b = set.begin();

    while a != set.end() {
        assert_eq!(a, b);
        assert_eq!(set.item(&a), set.item(&b));
        set.advance(&mut a).unwrap();
        set.advance(&mut b).unwrap();
    }

    assert_eq!(b, set.end());
    assert!(a.is_end());

    // Advancing past the end stays there.
    set.advance(&mut a).unwrap();
    assert!(a.is_end());
}

#[test]
fn stale_and_foreign_cursors_are_rejected() {
    let mut a: Set<_> = [1, 2, 3].into_iter().collect();
    let b = a.clone();

    let cursor = a.begin();
    assert_eq!(b.item(&cursor), Err(Error::InvalidCursor));

    let mut stale = a.find(&2);
    assert!(a.remove(&3));
    assert_eq!(a.advance(&mut stale), Err(Error::InvalidCursor));
    assert_eq!(a.erase(stale), Err(Error::InvalidCursor));
    assert_eq!(a.len(), 2);

    // A rejected insertion is not a structural change.
    let fresh = a.find(&2);
    assert!(!a.insert(1).1);
    assert_eq!(a.item(&fresh), Ok(Some(&2)));
}

#[test]
fn swap_exchanges_contents_and_invalidates_cursors() {
    let mut a: Set<_> = [1, 2].into_iter().collect();
    let mut b: Set<_> = [3].into_iter().collect();
    let cursor = a.begin();

    a.swap(&mut b);

    assert_eq!(a.iter().collect::<Vec<_>>(), [&3]);
    assert_eq!(b.iter().collect::<Vec<_>>(), [&1, &2]);
    assert_eq!(a.item(&cursor), Err(Error::InvalidCursor));
    assert_eq!(b.item(&cursor), Err(Error::InvalidCursor));
}

#[test]
fn clear_empties_and_allows_reuse() {
    let mut bag: MultiSet<_> = (0..100).chain(0..100).collect();
    let cursor = bag.begin();

    bag.clear();
    assert!(bag.is_empty());
    assert_eq!(bag.begin(), bag.end());
    assert_eq!(bag.item(&cursor), Err(Error::InvalidCursor));

    bag.insert(1);
    assert_eq!(bag.iter().collect::<Vec<_>>(), [&1]);
}

#[test]
fn projected_set_orders_by_key() {
    let mut set = Set::with_cmp(Projected::new(First, natural()));

    assert!(set.insert((3, "c")).1);
    assert!(set.insert((1, "a")).1);
    assert!(!set.insert((3, "x")).1);

    assert_eq!(set.iter().collect::<Vec<_>>(), [&(1, "a"), &(3, "c")]);

    let by_value: Set<_, _> = {
        let mut set = Set::with_cmp(Projected::new(Second, natural().rev()));
        set.extend([(1, 'a'), (2, 'c'), (3, 'b')]);
        set
    };
    assert_eq!(by_value.iter().map(|e| e.0).collect::<Vec<_>>(), [2, 3, 1]);
}

#[derive(Clone, Default)]
struct ByStr;

impl Compare<String> for ByStr {
    fn compare(&self, l: &String, r: &String) -> Ordering { l.cmp(r) }
}

impl Compare<str, String> for ByStr {
    fn compare(&self, l: &str, r: &String) -> Ordering { l.cmp(r.as_str()) }
}

#[test]
fn lookups_by_borrowed_key() {
    let mut set: Set<String, ByStr> = ["b", "a"].iter().map(|s| s.to_string()).collect();
    assert!(set.contains("a"));
    assert_eq!(set.get("b").map(String::as_str), Some("b"));
    assert!(set.remove("a"));
    assert_eq!(set.find("a"), set.end());

    let mut map: Map<String, u8, ByStr> = Map::with_cmp(ByStr);
    map.insert("x".to_string(), 1);
    assert_eq!(map["x"], 1);
    assert_eq!(map.get("y"), None);
    assert_eq!(map.remove("x"), Some(("x".to_string(), 1)));
}

#[test]
fn generic_tree_with_multi_policy() {
    let mut tree: Tree<_, _, Multi> = Tree::with_cmp(natural().rev());
    tree.insert_many([1, 3, 3, 2]);

    assert_eq!(tree.iter().collect::<Vec<_>>(), [&3, &3, &2, &1]);
    assert_eq!(tree.count(&3), 2);
    assert_eq!(tree.first(), Some(&3));
    assert_eq!(tree.last(), Some(&1));
}

#[test]
fn insert_many_reports_each_item() {
    let mut set = Set::new();
    let results = set.insert_many([2, 1, 2]);

    assert_eq!(results.iter().map(|r| r.1).collect::<Vec<_>>(), [true, true, false]);
    assert_eq!(set.item(&results[2].0), Ok(Some(&2)));

    let mut map = Map::new();
    let results = map.insert_many([(1, 'a'), (1, 'b')]);
    assert_eq!(results.iter().map(|r| r.1).collect::<Vec<_>>(), [true, false]);
    assert_eq!(map[&1], 'a');
}

#[test]
fn containers_compare_and_hash_by_contents() {
    let a: Set<_> = [3, 1, 2].into_iter().collect();
    let b: Set<_> = [1, 2, 3].into_iter().collect();
    let c: Set<_> = [1, 2, 4].into_iter().collect();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert!(a < c);

    let m: Map<_, _> = [(1, 'a'), (2, 'b')].into_iter().collect();
    let n: Map<_, _> = [(2, 'b'), (1, 'a')].into_iter().collect();
    assert_eq!(m, n);
    assert_eq!(format!("{:?}", m), "{1: 'a', 2: 'b'}");
    assert_eq!(format!("{:?}", a), "{1, 2, 3}");
}

#[test]
fn take_leaves_an_empty_container() {
    let mut set: Set<_> = [1, 2].into_iter().collect();
    let taken = std::mem::take(&mut set);

    assert!(set.is_empty());
    assert_eq!(taken.len(), 2);
}

#[test]
fn max_size_is_positive_and_bounded() {
    let set: Set<u64> = Set::new();
    assert!(set.max_size() > 0);
    assert!(set.max_size() <= u32::MAX as usize);
}

#[test]
fn try_insert_succeeds_with_memory_available() {
    let mut bag = MultiSet::new();
    let cursor = bag.try_insert(9).unwrap();
    assert_eq!(bag.item(&cursor), Ok(Some(&9)));
    assert_eq!(bag.try_clone().unwrap(), bag);
}
