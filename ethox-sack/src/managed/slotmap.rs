//! A fixed capacity arena with stable, checked keys.

/// The occupation state of one element of a `SlotMap`.
///
/// The benefit of separating this struct from the elements is that it is unconditionally `Copy`
/// and `Default`. It also provides better locality when scanning for a free slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
struct Slot {
    /// The generation of the element occupying this slot, or `None` if it is free.
    ///
    /// If a given out key mismatches the generation then the element was removed already and we
    /// can return `None` on lookup.
    generation: Option<Generation>,
}

/// Provides a slotmap on inline memory.
///
/// A slotmap provides a `Vec`-like interface where each entry is associated with a stable
/// index-like key. Lookup with the key will detect if an entry has been removed but does not
/// require any lifetime relation. Elements never move, inserting or removing one entry does not
/// invalidate the keys of any other.
///
/// ## Usage
///
/// ```
/// # use ethox_sack::managed::SlotMap;
/// let mut map: SlotMap<usize, 4> = SlotMap::new();
///
/// let index = map.insert(42).unwrap();
/// assert_eq!(map.get(index).cloned(), Some(42));
///
/// map.remove(index);
/// assert_eq!(map.get(index), None);
/// ```
#[derive(Clone, Debug)]
pub struct SlotMap<T, const N: usize> {
    elements: [T; N],
    slots: [Slot; N],
    generation: Generation,
    len: usize,
}

/// A key into a slotmap.
///
/// The key remains valid until the entry is removed. Accessing the slotmap with the key after the
/// entry was removed will fail, even if the index where the element was previously stored has been
/// reused for another element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Key {
    idx: usize,
    generation: Generation,
}

/// The generation counter.
///
/// Has strictly positive values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Generation(isize);

impl<T: Copy + Default, const N: usize> SlotMap<T, N> {
    /// Create an empty map with default initialized element storage.
    pub fn new() -> Self {
        SlotMap {
            elements: [T::default(); N],
            slots: [Slot::default(); N],
            generation: Generation::default(),
            len: 0,
        }
    }
}

impl<T, const N: usize> SlotMap<T, N> {
    /// The maximum number of elements.
    pub fn capacity(&self) -> usize {
        N
    }

    /// The number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if all slots are occupied.
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Retrieve a value by key.
    pub fn get(&self, key: Key) -> Option<&T> {
        if !self.is_live(key) {
            return None;
        }

        self.elements.get(key.idx)
    }

    /// Reserve a new entry.
    ///
    /// The element has the value that was last stored in the slot.
    pub fn reserve(&mut self) -> Option<(Key, &mut T)> {
        let idx = self.slots
            .iter()
            .position(|slot| slot.generation.is_none())?;

        let key = Key {
            idx,
            generation: self.generation,
        };

        self.slots[idx].generation = Some(self.generation);
        self.generation.advance();
        self.len += 1;

        Some((key, &mut self.elements[idx]))
    }

    /// Sugar wrapper around `reserve` for inserting values.
    ///
    /// Returns `None` if all slots are occupied, in which case the map is not modified.
    pub fn insert(&mut self, value: T) -> Option<Key> {
        let (key, element) = self.reserve()?;
        *element = value;
        Some(key)
    }

    /// Remove an element.
    ///
    /// If successful, return a mutable reference to the removed element. Returns `None` if the
    /// provided key did not refer to an element that could be freed.
    pub fn remove(&mut self, key: Key) -> Option<&mut T> {
        if !self.is_live(key) {
            return None;
        }

        self.slots[key.idx].generation = None;
        self.len -= 1;

        Some(&mut self.elements[key.idx])
    }

    /// Remove all elements.
    ///
    /// All previously given out keys become invalid.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = Slot::default());
        self.len = 0;
    }

    fn is_live(&self, key: Key) -> bool {
        match self.slots.get(key.idx) {
            Some(slot) => slot.generation == Some(key.generation),
            None => false,
        }
    }
}

impl<T: Copy + Default, const N: usize> Default for SlotMap<T, N> {
    fn default() -> Self {
        SlotMap::new()
    }
}

impl Generation {
    fn advance(&mut self) {
        assert!(self.0 > 0);
        self.0 = self.0.wrapping_add(1).max(1)
    }
}

impl Default for Generation {
    fn default() -> Self {
        Generation(1)
    }
}
