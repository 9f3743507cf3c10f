/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! A re-iterable, possibly infinite, lazily evaluated sequence.

use std::fmt;
use std::sync::Arc;

type Source<T> = dyn Fn() -> Box<dyn Iterator<Item = T>> + Send + Sync;

/// A lazy sequence that can be iterated any number of times.
///
/// A `LazySeq` holds recipes for producing iterators rather than the
/// elements themselves. Nothing is evaluated until [`LazySeq::iter`] is
/// called, and each call starts a fresh pass from the beginning.
/// Cloning is cheap (the recipes are shared).
///
/// Concatenation joins the recipe lists instead of nesting iterators,
/// so a sequence built from many joins iterates without recursion.
///
/// ```
/// use monoids::LazySeq;
///
/// let evens = LazySeq::from_fn(|| (0u32..).step_by(2));
/// assert_eq!(evens.iter().take(3).collect::<Vec<_>>(), vec![0, 2, 4]);
/// // Iterating again starts over.
/// assert_eq!(evens.iter().next(), Some(0));
/// ```
pub struct LazySeq<T> {
    segments: Arc<[Arc<Source<T>>]>,
}

impl<T: 'static> LazySeq<T> {
    /// A sequence produced by calling `f` for every pass.
    pub fn from_fn<F, I>(f: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let source: Arc<Source<T>> =
            Arc::new(move || Box::new(f().into_iter()) as Box<dyn Iterator<Item = T>>);
        Self {
            segments: Arc::new([source]),
        }
    }

    /// The sequence with no elements.
    pub fn empty() -> Self {
        Self {
            segments: Arc::new([]),
        }
    }

    /// A finite sequence over the elements of `items`.
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::from_fn(move || items.clone())
    }

    /// Every sequence of `seqs`, one after another. Nothing is evaluated.
    pub fn concat<I>(seqs: I) -> Self
    where
        I: IntoIterator<Item = LazySeq<T>>,
    {
        let mut segments = Vec::new();
        for seq in seqs {
            segments.extend(seq.segments.iter().cloned());
        }
        Self {
            segments: segments.into(),
        }
    }

    /// Start a new pass over the sequence.
    pub fn iter(&self) -> Box<dyn Iterator<Item = T>> {
        let segments = Arc::clone(&self.segments);
        Box::new((0..segments.len()).flat_map(move |i| (segments[i])()))
    }

    /// `self` followed by `other`. Neither side is evaluated.
    pub fn chain(&self, other: &Self) -> Self {
        Self::concat([self.clone(), other.clone()])
    }

    /// Materialize the sequence. Diverges if the sequence is infinite.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T> Clone for LazySeq<T> {
    fn clone(&self) -> Self {
        Self {
            segments: Arc::clone(&self.segments),
        }
    }
}

impl<T> fmt::Debug for LazySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySeq")
            .field("segments", &self.segments.len())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + Send + Sync + 'static> From<Vec<T>> for LazySeq<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}
