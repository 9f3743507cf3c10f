/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Monoid over [`Option`], lifted from a semigroup.

use super::Monoid;
use super::Semigroup;

/// `Option<A>` lifts a semigroup on `A` to a monoid by adding `None` as
/// the identity.
///
/// - `None` is the identity
/// - `Some(a).combine(Some(b)) = Some(inner.combine(a, b))`
/// - `None.combine(x) = x.combine(None) = x`
///
/// Construct with [`option`].
///
/// # Example
/// ```
/// use monoids::Semigroup;
/// use monoids::catalog;
///
/// let m = monoids::option(catalog::list());
/// assert_eq!(m.combine(&None, &Some(vec![1])), Some(vec![1]));
/// assert_eq!(m.combine(&Some(vec![1]), &Some(vec![2])), Some(vec![1, 2]));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionMonoid<S> {
    inner: S,
}

/// Build the [`Option`] monoid from a semigroup on the wrapped type.
pub fn option<S>(inner: S) -> OptionMonoid<S> {
    OptionMonoid { inner }
}

impl<S> OptionMonoid<S> {
    /// The semigroup used for `Some`/`Some` pairs.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<A, S> Semigroup<Option<A>> for OptionMonoid<S>
where
    A: Clone,
    S: Semigroup<A>,
{
    fn combine(&self, a: &Option<A>, b: &Option<A>) -> Option<A> {
        match (a, b) {
            (None, x) | (x, None) => x.clone(),
            (Some(x), Some(y)) => Some(self.inner.combine(x, y)),
        }
    }

    fn combine_assign(&self, a: &mut Option<A>, b: &Option<A>) {
        match (a.as_mut(), b) {
            (_, None) => {}
            (None, Some(y)) => *a = Some(y.clone()),
            (Some(x), Some(y)) => self.inner.combine_assign(x, y),
        }
    }
}

impl<A, S> Monoid<Option<A>> for OptionMonoid<S>
where
    A: Clone,
    S: Semigroup<A>,
{
    fn empty(&self) -> Option<A> {
        None
    }
}
