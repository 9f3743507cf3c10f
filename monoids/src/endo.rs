/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Endomorphisms under composition.

use std::fmt;
use std::sync::Arc;

use super::Monoid;
use super::Semigroup;
use super::primitives::phantom_instance;

type Func<A> = dyn Fn(A) -> A + Send + Sync;

/// A function from `A` to `A`.
///
/// Cloning shares the underlying function. A composition keeps its
/// parts in a flat list, so applying the composite of many functions
/// runs them in a loop rather than through nested calls.
pub struct Endo<A> {
    // Outermost first; `apply` runs them back to front.
    fns: Arc<[Arc<Func<A>>]>,
}

impl<A: 'static> Endo<A> {
    /// Wrap a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> A + Send + Sync + 'static,
    {
        let f: Arc<Func<A>> = Arc::new(f);
        Endo {
            fns: Arc::new([f]),
        }
    }

    /// The identity function.
    pub fn identity() -> Self {
        Endo {
            fns: Arc::new([]),
        }
    }

    /// Apply the function.
    pub fn apply(&self, a: A) -> A {
        self.fns.iter().rev().fold(a, |acc, f| f(acc))
    }

    /// `self` after `inner`: `x -> self(inner(x))`.
    pub fn compose(&self, inner: &Endo<A>) -> Self {
        Self::compose_all([self.clone(), inner.clone()])
    }

    /// Compose `endos` so that the last one runs first:
    /// `[f, g, h]` becomes `x -> f(g(h(x)))`.
    pub fn compose_all<I>(endos: I) -> Self
    where
        I: IntoIterator<Item = Endo<A>>,
    {
        let mut fns = Vec::new();
        for endo in endos {
            fns.extend(endo.fns.iter().cloned());
        }
        Endo { fns: fns.into() }
    }
}

impl<A> Clone for Endo<A> {
    fn clone(&self) -> Self {
        Endo {
            fns: Arc::clone(&self.fns),
        }
    }
}

impl<A> fmt::Debug for Endo<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Endo<{}>({} fns)",
            std::any::type_name::<A>(),
            self.fns.len()
        )
    }
}

phantom_instance! {
    /// [`Endo<A>`] under composition.
    ///
    /// - `combine(f, g) = x -> f(g(x))` (`g` runs first)
    /// - `empty` = the identity function
    ///
    /// # Example
    /// ```
    /// use monoids::Endo;
    /// use monoids::Monoid;
    /// use monoids::Semigroup;
    ///
    /// let m = monoids::endo::<i32>();
    /// let double = Endo::new(|x: i32| x * 2);
    /// let inc = Endo::new(|x: i32| x + 1);
    /// assert_eq!(m.combine(&double, &inc).apply(5), 12);
    /// assert_eq!(m.combine(&inc, &double).apply(5), 11);
    /// assert_eq!(m.empty().apply(5), 5);
    /// ```
    EndoMonoid
}

/// The composition monoid on functions `A -> A`.
pub fn endo<A: 'static>() -> EndoMonoid<A> {
    EndoMonoid::new()
}

impl<A: 'static> Semigroup<Endo<A>> for EndoMonoid<A> {
    fn combine(&self, f: &Endo<A>, g: &Endo<A>) -> Endo<A> {
        f.compose(g)
    }
}

impl<A: 'static> Monoid<Endo<A>> for EndoMonoid<A> {
    fn empty(&self) -> Endo<A> {
        Endo::identity()
    }

    fn combine_all_ordered(&self, xs: &[Endo<A>]) -> Endo<A>
    where
        Endo<A>: Clone,
    {
        Endo::compose_all(xs.iter().cloned())
    }

    fn combine_iter(&self, xs: &mut dyn Iterator<Item = Endo<A>>) -> Endo<A> {
        Endo::compose_all(xs)
    }
}
