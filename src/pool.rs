//! Fixed-capacity ring buffer of particle slots.
//!
//! The pool is a single allocation of `N` slots addressed by two cursors:
//!
//! - `head` - the next slot to hand out
//! - `tail` - the oldest slot still in the active window
//!
//! Slots in `[tail, head)` (circularly) form the *active window*. They hold
//! either live particles or dead ones that have not been reclaimed yet.
//! Everything outside the window is stale and is never read.
//!
//! One slot always stays empty so that `head == tail` unambiguously means
//! "empty"; the pool is full when advancing `head` would land on `tail`.
//! A pool of `N` slots therefore holds at most `N - 1` particles.
//!
//! ```text
//!  tail            head
//!   v               v
//! [ D | L | D | L | . | . | . ]     D = dead, L = live, . = stale
//!   \___________/
//!   active window
//! ```
//!
//! [`ParticlePool::compact`] only ever moves `tail` forward over dead slots,
//! so a dead particle in the middle of the window stays allocated until every
//! particle behind it has died too.

use crate::particle::Particle;

/// Number of slots in the demo's particle pool.
pub const MAX_PARTICLES: usize = 3000;

/// Ring buffer of `N` particle slots.
pub struct ParticlePool<const N: usize = MAX_PARTICLES> {
    slots: Box<[Particle]>,
    head: usize,
    tail: usize,
}

impl<const N: usize> ParticlePool<N> {
    /// Allocate all `N` slots up front. The pool never grows or shrinks.
    pub fn new() -> Self {
        assert!(N >= 2, "a ring pool needs at least two slots");
        Self {
            slots: vec![Particle::default(); N].into_boxed_slice(),
            head: 0,
            tail: 0,
        }
    }

    /// Hand out the slot at `head` and advance `head`.
    ///
    /// Returns `None` without touching the pool when it is full. The caller
    /// must initialize every field of the returned particle; the slot holds
    /// stale data.
    pub fn try_allocate(&mut self) -> Option<&mut Particle> {
        let next_head = (self.head + 1) % N;
        if next_head == self.tail {
            return None;
        }
        let slot = self.head;
        self.head = next_head;
        Some(&mut self.slots[slot])
    }

    /// Advance `tail` past the run of dead particles at the back of the
    /// active window. Returns the number of slots reclaimed.
    ///
    /// Stops at the first live particle; never skips one.
    pub fn compact(&mut self) -> usize {
        let mut reclaimed = 0;
        while self.tail != self.head && !self.slots[self.tail].alive {
            self.tail = (self.tail + 1) % N;
            reclaimed += 1;
        }
        reclaimed
    }

    /// Every slot in the active window, oldest first.
    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> + '_ {
        let (back, front) = self.window_ranges();
        self.slots[back].iter().chain(self.slots[front].iter())
    }

    /// Mutable access to every slot in the active window, oldest first.
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut Particle> + '_ {
        let (back, front) = self.window_ranges();
        // When the window wraps, `front` is `0..head` and `back` is `tail..N`
        let (low, high) = self.slots.split_at_mut(back.start);
        high[..back.end - back.start]
            .iter_mut()
            .chain(low[front].iter_mut())
    }

    /// Live particles only.
    pub fn iter_alive(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.iter_active().filter(|p| p.alive)
    }

    /// The window as at most two contiguous ranges: `tail..` then `..head`.
    fn window_ranges(&self) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        if self.tail <= self.head {
            (self.tail..self.head, 0..0)
        } else {
            (self.tail..N, 0..self.head)
        }
    }

    /// Index of the next slot to hand out.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Index of the oldest slot in the active window.
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Number of slots in the active window, live or not yet reclaimed.
    #[inline]
    pub fn active_len(&self) -> usize {
        (self.head + N - self.tail) % N
    }

    /// Number of live particles in the active window.
    pub fn live_count(&self) -> usize {
        self.iter_alive().count()
    }

    /// Total number of slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Largest number of particles the pool can hold at once.
    #[inline]
    pub const fn usable_capacity(&self) -> usize {
        N - 1
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        (self.head + 1) % N == self.tail
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }
}

impl<const N: usize> Default for ParticlePool<N> {
    fn default() -> Self {
        Self::new()
    }
}
