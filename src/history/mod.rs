//! Bounded FIFO history of recent values.
//!
//! Drift, Kalman, and complementary-filter plots keep the last few hundred
//! estimates around for drawing. [`History`] stores at most `CAP` entries in
//! a fixed ring; pushing onto a full buffer drops the oldest entry.
//!
//! ```
//! use sigsim::history::History;
//!
//! let mut h = History::<f64, 3>::new();
//! for x in [1.0, 2.0, 3.0, 4.0] {
//!     h.push(x);
//! }
//! assert_eq!(h.len(), 3);
//! assert_eq!(h.iter().copied().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
//! ```


/// Fixed-capacity ring buffer with oldest-first iteration.
#[derive(Debug, Clone, Copy)]
pub struct History<T, const CAP: usize> {
    buf: [T; CAP],
    head: usize, // index of the oldest entry
    len: usize,
}

impl<T: Copy + Default, const CAP: usize> History<T, CAP> {
    pub fn new() -> Self {
        Self {
            buf: [T::default(); CAP],
            head: 0,
            len: 0,
        }
    }

    /// Append `value`, evicting and returning the oldest entry when full.
    ///
    /// With `CAP == 0` nothing is stored and `value` comes straight back.
    pub fn push(&mut self, value: T) -> Option<T> {
        if CAP == 0 {
            return Some(value);
        }
        if self.len < CAP {
            let idx = (self.head + self.len) % CAP;
            self.buf[idx] = value;
            self.len += 1;
            None
        } else {
            let evicted = self.buf[self.head];
            self.buf[self.head] = value;
            self.head = (self.head + 1) % CAP;
            Some(evicted)
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == CAP
    }

    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Entry `i` counted from the oldest (`0`), or `None` past the end.
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            return None;
        }
        Some(&self.buf[(self.head + i) % CAP])
    }

    pub fn oldest(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn newest(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T, CAP> {
        Iter {
            history: self,
            front: 0,
            back: self.len,
        }
    }

    /// Copy the contents, oldest first, into `out`. Returns the number of
    /// entries written (`min(len, out.len())`).
    pub fn copy_to(&self, out: &mut [T]) -> usize {
        let mut n = 0;
        for (slot, v) in out.iter_mut().zip(self.iter()) {
            *slot = *v;
            n += 1;
        }
        n
    }
}

impl<T: Copy + Default, const CAP: usize> Default for History<T, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

/// Oldest-to-newest iterator over a [`History`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T, const CAP: usize> {
    history: &'a History<T, CAP>,
    front: usize,
    back: usize,
}

impl<'a, T: Copy + Default, const CAP: usize> Iterator for Iter<'a, T, CAP> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.history.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T: Copy + Default, const CAP: usize> DoubleEndedIterator for Iter<'_, T, CAP> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.history.get(self.back)
    }
}

impl<T: Copy + Default, const CAP: usize> ExactSizeIterator for Iter<'_, T, CAP> {}

impl<'a, T: Copy + Default, const CAP: usize> IntoIterator for &'a History<T, CAP> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, CAP>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
