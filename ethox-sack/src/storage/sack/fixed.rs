use crate::managed::{Key, Partial, SlotMap};

use super::{Block, Order, Store};

/// Inline storage for at most `N` blocks.
///
/// Blocks live in a slot map so that keys stay valid while other blocks are merged away. The
/// recency order is a separate list of keys.
#[derive(Clone, Debug)]
pub struct Fixed<const N: usize> {
    blocks: SlotMap<Block, N>,
    recency: Partial<Key, N>,
}

impl<const N: usize> Fixed<N> {
    /// Create an empty store.
    pub fn new() -> Self {
        Fixed {
            blocks: SlotMap::new(),
            recency: Partial::new(),
        }
    }
}

impl<const N: usize> Default for Fixed<N> {
    fn default() -> Self {
        Fixed::new()
    }
}

impl<const N: usize> Store for Fixed<N> {
    type Key = Key;

    fn capacity(&self) -> usize {
        self.blocks.capacity()
    }

    fn len(&self) -> usize {
        self.blocks.len()
    }

    fn insert(&mut self, block: Block) -> Option<Key> {
        self.blocks.insert(block)
    }

    fn remove(&mut self, key: Key) -> Option<Block> {
        self.blocks.remove(key).map(|block| *block)
    }

    fn get(&self, key: Key) -> Option<&Block> {
        self.blocks.get(key)
    }
}

impl<const N: usize> Order for Fixed<N> {
    fn recency(&self) -> &[Key] {
        self.recency.as_slice()
    }

    fn promote(&mut self, key: Key) {
        self.forget(key);
        match self.recency.insert_at(0) {
            Some(front) => *front = key,
            // There are never more ordered keys than slots.
            None => unreachable!("Recency order exceeds the store capacity"),
        }
    }

    fn forget(&mut self, key: Key) {
        if let Some(pos) = self.recency.iter().position(|&ordered| ordered == key) {
            self.recency.remove_at(pos);
        }
    }

    fn clear(&mut self) {
        self.blocks.clear();
        self.recency.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded() {
        let mut store: Fixed<2> = Fixed::new();
        assert_eq!(store.capacity(), 2);
        assert!(store.is_empty());

        let a = store.insert(Block::from_raw(0, 10)).unwrap();
        let b = store.insert(Block::from_raw(20, 30)).unwrap();
        assert!(store.is_full());
        assert_eq!(store.insert(Block::from_raw(40, 50)), None);
        assert_eq!(store.len(), 2);

        assert_eq!(store.remove(a), Some(Block::from_raw(0, 10)));
        // Stale keys are ignored.
        assert_eq!(store.remove(a), None);
        assert_eq!(store.get(b), Some(&Block::from_raw(20, 30)));
        assert!(!store.is_full());
    }

    #[test]
    fn recency() {
        let mut store: Fixed<3> = Fixed::new();
        let a = store.insert(Block::from_raw(0, 10)).unwrap();
        let b = store.insert(Block::from_raw(20, 30)).unwrap();
        let c = store.insert(Block::from_raw(40, 50)).unwrap();

        store.promote(a);
        store.promote(b);
        store.promote(c);
        assert_eq!(store.recency(), &[c, b, a]);

        store.promote(a);
        assert_eq!(store.recency(), &[a, c, b]);

        store.forget(c);
        assert_eq!(store.recency(), &[a, b]);
        // Forgetting twice is fine.
        store.forget(c);
        assert_eq!(store.recency(), &[a, b]);
    }

    #[test]
    fn clear() {
        let mut store: Fixed<2> = Fixed::new();
        let a = store.insert(Block::from_raw(0, 10)).unwrap();
        let b = store.insert(Block::from_raw(20, 30)).unwrap();
        store.promote(a);
        store.promote(b);

        Order::clear(&mut store);
        assert!(store.is_empty());
        assert!(store.recency().is_empty());
        assert_eq!(store.get(a), None);
        assert_eq!(store.remove(b), None);

        // All slots are available again.
        assert!(store.insert(Block::from_raw(40, 50)).is_some());
        assert!(store.insert(Block::from_raw(60, 70)).is_some());
    }
}
