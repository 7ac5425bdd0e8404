//! Fixed-capacity history buffer with oldest-first eviction.

/// Default capacity for the general-purpose buffer.
pub const DEFAULT_CAPACITY: usize = 20;

/// A fixed-capacity circular buffer of samples, oldest first.
///
/// The buffer allocates `capacity` slots but exposes a *window* of at most
/// `capacity - 1` elements: once the window is full, the most recent enqueue
/// lives in a shadow slot just past the window (reachable via [`newest`])
/// and each further enqueue evicts the current oldest window element. The
/// window length therefore saturates at `capacity - 1` under continuous
/// overflow. This retention policy is load-bearing for downstream smoothing
/// and must not be "fixed" to fill all `capacity` slots.
///
/// Logical index 0 is the oldest retained window element; `get(i)` is O(1)
/// via modular indexing. Iteration walks the window in insertion order and
/// restarts from the current oldest on re-iteration (it borrows the buffer,
/// it is not a snapshot).
///
/// [`newest`]: BoundedHistory::newest
#[derive(Clone, Debug)]
pub struct BoundedHistory<T> {
    slots: Vec<Option<T>>,
    front: usize,
    len: usize,
}

impl<T> BoundedHistory<T> {
    /// Create a buffer with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a buffer with the given number of slots.
    ///
    /// # Panics
    /// Panics if `capacity < 2` (a one-slot buffer has an empty window).
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity >= 2, "history capacity must be at least 2");
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            front: 0,
            len: 0,
        }
    }

    /// Total slot count (the window holds at most `capacity() - 1`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of elements currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append an element, evicting the oldest once saturated. O(1), cannot
    /// fail.
    pub fn enqueue(&mut self, value: T) {
        let cap = self.slots.len();
        if self.len < cap - 1 {
            // Filling phase: grow the window in place.
            let back = (self.front + self.len) % cap;
            self.slots[back] = Some(value);
            self.len += 1;
        } else {
            let shadow = (self.front + self.len) % cap;
            if self.slots[shadow].is_none() {
                // Window full, shadow slot still free: occupy it without
                // evicting anything yet.
                self.slots[shadow] = Some(value);
            } else {
                // Saturated: advance past the oldest and reuse its slot as
                // the new shadow.
                self.front = (self.front + 1) % cap;
                let shadow = (self.front + self.len) % cap;
                self.slots[shadow] = Some(value);
            }
        }
    }

    /// The `index`-th oldest window element.
    ///
    /// # Panics
    /// Panics if `index >= len()`. Out-of-range indexing is a programmer
    /// error and fails fast rather than clamping or returning stale data.
    pub fn get(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "history index {} out of range (len {})",
            index,
            self.len
        );
        let slot = (self.front + index) % self.slots.len();
        // Window slots front..front+len-1 are occupied by construction.
        self.slots[slot].as_ref().expect("occupied window slot")
    }

    /// Oldest window element, or `None` when empty.
    pub fn oldest(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            Some(self.get(0))
        }
    }

    /// Most recently enqueued element, or `None` when nothing was enqueued.
    ///
    /// Once the window is full this is the shadow element one past the
    /// window; until then it is the last window element.
    pub fn newest(&self) -> Option<&T> {
        let shadow = (self.front + self.len) % self.slots.len();
        if let Some(value) = self.slots[shadow].as_ref() {
            return Some(value);
        }
        if self.len == 0 {
            None
        } else {
            Some(self.get(self.len - 1))
        }
    }

    /// Iterate the window, oldest first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            history: self,
            index: 0,
        }
    }
}

impl<T> Default for BoundedHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over the window of a [`BoundedHistory`], oldest first.
pub struct Iter<'a, T> {
    history: &'a BoundedHistory<T>,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.index < self.history.len() {
            let value = self.history.get(self.index);
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.history.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T> IntoIterator for &'a BoundedHistory<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
