/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! A value tagged with a phantom type.

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::Serialize;

use super::CommutativeMonoid;
use super::Monoid;
use super::Semigroup;

/// A value of type `A` carrying a phantom tag `T`.
///
/// The tag exists only at the type level; it lets otherwise identical
/// values be kept apart (`Const<u64, Bytes>` vs `Const<u64, Messages>`)
/// without affecting how they combine.
#[derive(Serialize, Deserialize)]
#[serde(bound(serialize = "A: Serialize", deserialize = "A: Deserialize<'de>"))]
pub struct Const<A, T> {
    value: A,
    #[serde(skip)]
    tag: PhantomData<fn() -> T>,
}

impl<A, T> Const<A, T> {
    /// Tag `value`.
    pub fn new(value: A) -> Self {
        Const {
            value,
            tag: PhantomData,
        }
    }

    /// The carried value.
    pub fn value(&self) -> &A {
        &self.value
    }

    /// Drop the tag.
    pub fn into_value(self) -> A {
        self.value
    }

    /// Move the value under a different tag.
    pub fn retag<U>(self) -> Const<A, U> {
        Const::new(self.value)
    }
}

// Manual impls so that the tag type needs no bounds.

impl<A: Clone, T> Clone for Const<A, T> {
    fn clone(&self) -> Self {
        Const::new(self.value.clone())
    }
}

impl<A: Copy, T> Copy for Const<A, T> {}

impl<A: PartialEq, T> PartialEq for Const<A, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<A: Eq, T> Eq for Const<A, T> {}

impl<A: Hash, T> Hash for Const<A, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<A: fmt::Debug, T> fmt::Debug for Const<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Const").field(&self.value).finish()
    }
}

impl<A, T> From<A> for Const<A, T> {
    fn from(value: A) -> Self {
        Const::new(value)
    }
}

/// Monoid over [`Const<A, T>`] that ignores the tag and delegates to
/// an instance for `A`.
///
/// Construct with [`constant`].
///
/// # Example
/// ```
/// use monoids::Const;
/// use monoids::Semigroup;
/// use monoids::catalog;
///
/// struct Bytes;
///
/// let m = monoids::constant(catalog::long());
/// let total: Const<i64, Bytes> = m.combine(&Const::new(512), &Const::new(512));
/// assert_eq!(*total.value(), 1024);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstMonoid<M> {
    inner: M,
}

/// Build the [`Const`] monoid from an instance for the carried type.
pub fn constant<M>(inner: M) -> ConstMonoid<M> {
    ConstMonoid { inner }
}

impl<A, T, M: Semigroup<A>> Semigroup<Const<A, T>> for ConstMonoid<M> {
    fn combine(&self, a: &Const<A, T>, b: &Const<A, T>) -> Const<A, T> {
        Const::new(self.inner.combine(&a.value, &b.value))
    }

    fn combine_assign(&self, a: &mut Const<A, T>, b: &Const<A, T>) {
        self.inner.combine_assign(&mut a.value, &b.value);
    }
}

impl<A, T, M: Monoid<A>> Monoid<Const<A, T>> for ConstMonoid<M> {
    fn empty(&self) -> Const<A, T> {
        Const::new(self.inner.empty())
    }
}

impl<A, T, M: CommutativeMonoid<A>> CommutativeMonoid<Const<A, T>> for ConstMonoid<M> {}
