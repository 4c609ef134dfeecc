use core::ops::Deref;

/// Refer to a prefix of an inline array.
///
/// A sort of `Vec` with a capacity fixed in its type. The array is initialized upfront, only the
/// logical length changes when elements are inserted or removed.
///
/// # Usage
///
/// Contrary to `Vec` the method `insert_at` returns a mutable reference to its element after it
/// has succeeded instead of operating on a value. Similarly, `remove_at` returns a reference to
/// the removed element which now lies just past the logical end.
///
/// ```
/// # use ethox_sack::managed::Partial;
/// let mut storage: Partial<u32, 16> = Partial::new();
///
/// for el in 0..10 {
///     *storage.insert_at(0).unwrap() = el;
/// }
///
/// assert_eq!(storage[0], 9);
/// assert_eq!(storage.remove_at(0).copied(), Some(9));
/// assert_eq!(storage.len(), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Partial<T, const N: usize> {
    inner: [T; N],
    end: usize,
}

impl<T: Copy + Default, const N: usize> Partial<T, N> {
    /// Make an empty instance with default initialized backing storage.
    pub fn new() -> Self {
        Partial::from_array([T::default(); N])
    }
}

impl<T, const N: usize> Partial<T, N> {
    /// Make an instance that initially refers to an empty part of `inner`.
    pub fn from_array(inner: [T; N]) -> Self {
        Partial {
            inner,
            end: 0,
        }
    }

    /// Get the logical length.
    pub fn len(&self) -> usize {
        self.end
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.end == 0
    }

    /// Forget all elements.
    ///
    /// The backing storage is not touched, the elements are left as they are.
    pub fn clear(&mut self) {
        self.end = 0;
    }

    /// Get the logically active elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.inner[..self.end]
    }

    /// Insert the next element at some position.
    ///
    /// Elements at and after `pos` move back by one. Returns `None` if the list is full.
    ///
    /// # Panics
    ///
    /// This method panics if the `pos` is larger than the current length.
    pub fn insert_at(&mut self, pos: usize) -> Option<&mut T> {
        assert!(pos <= self.end, "Index out of bounds");
        let new_end = self.end + 1;
        // The unused element just past the end is rotated into place.
        self.inner
            .get_mut(pos..new_end)?
            .rotate_right(1);
        self.end = new_end;
        Some(&mut self.inner[pos])
    }

    /// Remove the element at a position.
    ///
    /// Elements after `pos` move forward by one. Returns `None` if there is no element at `pos`.
    pub fn remove_at(&mut self, pos: usize) -> Option<&mut T> {
        if pos >= self.end {
            return None;
        }

        // Removed element is moved over all remaining elements.
        self.inner[pos..self.end].rotate_left(1);
        self.end -= 1;
        Some(&mut self.inner[self.end])
    }
}

impl<T: Copy + Default, const N: usize> Default for Partial<T, N> {
    fn default() -> Self {
        Partial::new()
    }
}

impl<T, const N: usize> Deref for Partial<T, N> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}
