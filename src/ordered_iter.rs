use ordered_iter::{OrderedMapIterator, OrderedSetIterator};

use crate::{map, tree};

impl<K, V> OrderedMapIterator for map::IntoIter<K, V> where K: Ord {
    type Key = K;
    type Val = V;
}

impl<'a, K, V> OrderedMapIterator for map::Iter<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}

impl<'a, K, V> OrderedMapIterator for map::IterMut<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a mut V;
}

// Shared by `Set`, `MultiSet` and `Tree`.
impl<T> OrderedSetIterator for tree::IntoIter<T> where T: Ord {}

impl<'a, T> OrderedSetIterator for tree::Iter<'a, T> where T: Ord {}

#[cfg(test)]
mod tests {
    use ordered_iter::{OrderedMapIterator, OrderedSetIterator};

    use crate::{Map, MultiSet, Set};

    fn ordered_set<I: OrderedSetIterator>(it: I) -> Vec<I::Item> { it.collect() }

    fn ordered_map<I: OrderedMapIterator>(it: I) -> Vec<(I::Key, I::Val)> { it.collect() }

    #[test]
    fn containers_yield_ordered_iterators() {
        let set: Set<_> = [3, 1, 2].into_iter().collect();
        assert_eq!(ordered_set(set.iter()), [&1, &2, &3]);
        assert_eq!(ordered_set(set.into_iter()), [1, 2, 3]);

        let bag: MultiSet<_> = [2, 1, 2].into_iter().collect();
        assert_eq!(ordered_set(bag.iter()), [&1, &2, &2]);

        let mut map: Map<_, _> = [(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(ordered_map(map.iter()), [(&1, &'a'), (&2, &'b')]);
        assert_eq!(ordered_map(map.iter_mut()).len(), 2);
        assert_eq!(ordered_map(map.into_iter()), [(1, 'a'), (2, 'b')]);
    }
}
