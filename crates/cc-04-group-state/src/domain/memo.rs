//! # Memoization Primitives
//!
//! Reference-identity memoization for pure derivations over the store.
//!
//! ## Identity, not equality
//!
//! Store writers replace sub-trees wholesale, so an input changed exactly
//! when its `Arc` identity changed. The [`Same`] trait captures that:
//! `Arc` inputs compare by pointer, scalar parameters by value. A memo
//! hit therefore costs a handful of pointer comparisons regardless of
//! entity counts.
//!
//! ## Slots
//!
//! - [`MemoSlot`]: one remembered (inputs, output) pair, for
//!   unparameterized derivations.
//! - [`KeyedMemo`]: one `MemoSlot` per parameter tuple, LRU-bounded.
//!   Evicting a tuple only ever forces a clean recompute on the next
//!   call with that tuple.

use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Identity comparison for memo inputs.
///
/// `same` must be cheap and conservative: returning `false` for equal
/// values only costs a recompute, returning `true` for differing values
/// would serve stale derivations.
pub trait Same {
    fn same(&self, other: &Self) -> bool;
}

/// `Same` by value equality, for scalar parameters.
macro_rules! impl_same_by_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl Same for $t {
                fn same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_same_by_eq!(bool, u32, u64, usize, String);

impl<T: ?Sized> Same for Arc<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Same> Same for Option<T> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! impl_same_for_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Same),+> Same for ($($name,)+) {
            fn same(&self, other: &Self) -> bool {
                $(self.$idx.same(&other.$idx))&&+
            }
        }
    };
}

impl_same_for_tuple!(A: 0);
impl_same_for_tuple!(A: 0, B: 1);
impl_same_for_tuple!(A: 0, B: 1, C: 2);
impl_same_for_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_same_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);

/// Single-slot memo: remembers the inputs and output of the last call.
pub struct MemoSlot<I, O> {
    entry: Option<(I, O)>,
}

impl<I, O> Default for MemoSlot<I, O> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<I: Same, O: Clone> MemoSlot<I, O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached output when `inputs` are identical to the
    /// recorded ones, otherwise recomputes and records.
    pub fn get_or_compute(&mut self, inputs: I, compute: impl FnOnce(&I) -> O) -> O {
        if let Some((recorded, output)) = &self.entry {
            if recorded.same(&inputs) {
                return output.clone();
            }
        }
        let output = compute(&inputs);
        self.entry = Some((inputs, output.clone()));
        output
    }
}

/// Parameterized memo: one slot per distinct parameter tuple, bounded by
/// an LRU over tuples so a long-lived session cannot grow without limit.
pub struct KeyedMemo<K: Hash + Eq, I, O> {
    slots: LruCache<K, MemoSlot<I, O>>,
}

impl<K: Hash + Eq, I: Same, O: Clone> KeyedMemo<K, I, O> {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            slots: LruCache::new(cap),
        }
    }

    /// Memoizes per `key`; within a key, behaves like [`MemoSlot`].
    pub fn get_or_compute(&mut self, key: K, inputs: I, compute: impl FnOnce(&I) -> O) -> O {
        self.slots
            .get_or_insert_mut(key, MemoSlot::new)
            .get_or_compute(inputs, compute)
    }

    /// Number of parameter tuples currently cached.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
