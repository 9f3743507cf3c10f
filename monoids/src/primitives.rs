/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Primitive instances: [`All`], [`Sum`], [`FloatSum`], [`Concat`],
//! [`Append`], [`LazyConcat`].
//!
//! Every instance here is zero-sized and stateless, so it can be
//! copied freely and shared between threads.

use num_traits::Float;
use num_traits::WrappingAdd;
use num_traits::Zero;

use super::CommutativeMonoid;
use super::LazySeq;
use super::Monoid;
use super::Semigroup;

// Instances generic over the value type carry a `PhantomData<fn() -> T>`
// so they stay `Copy + Send + Sync` whatever `T` is. Derives would add
// `T: Trait` bounds, hence the manual impls.
macro_rules! phantom_instance {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T>(::std::marker::PhantomData<fn() -> T>);

        impl<T> $name<T> {
            /// The instance.
            pub const fn new() -> Self {
                $name(::std::marker::PhantomData)
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> PartialEq for $name<T> {
            fn eq(&self, _other: &Self) -> bool {
                true
            }
        }

        impl<T> Eq for $name<T> {}

        impl<T> ::std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}<{}>", stringify!($name), std::any::type_name::<T>())
            }
        }
    };
}

pub(crate) use phantom_instance;

// All: combine = AND

/// `bool` under logical AND.
///
/// - `combine = a && b`
/// - `empty = true`
///
/// # Example
/// ```
/// use monoids::Monoid;
/// use monoids::primitives::All;
///
/// assert!(!All.combine_all_ordered(&[true, true, false]));
/// assert!(All.empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct All;

impl Semigroup<bool> for All {
    fn combine(&self, a: &bool, b: &bool) -> bool {
        *a && *b
    }
}

impl Monoid<bool> for All {
    fn empty(&self) -> bool {
        true
    }
}

impl CommutativeMonoid<bool> for All {}

// Sum<T>: combine = wrapping +

phantom_instance! {
    /// Fixed-width integers under addition, wrapping on overflow.
    ///
    /// - `combine = a.wrapping_add(b)`
    /// - `empty = 0`
    ///
    /// # Example
    /// ```
    /// use monoids::Semigroup;
    /// use monoids::primitives::Sum;
    ///
    /// let bytes = Sum::<i8>::new();
    /// assert_eq!(bytes.combine(&100, &27), 127);
    /// assert_eq!(bytes.combine(&127, &1), i8::MIN);
    /// ```
    Sum
}

impl<T: WrappingAdd> Semigroup<T> for Sum<T> {
    fn combine(&self, a: &T, b: &T) -> T {
        a.wrapping_add(b)
    }
}

impl<T: WrappingAdd + Zero> Monoid<T> for Sum<T> {
    fn empty(&self) -> T {
        T::zero()
    }
}

impl<T: WrappingAdd + Zero> CommutativeMonoid<T> for Sum<T> {}

// FloatSum<T>: combine = IEEE +

phantom_instance! {
    /// Floating point numbers under IEEE addition.
    ///
    /// - `combine = a + b` (NaN propagates, overflow goes to infinity)
    /// - `empty = 0.0`
    ///
    /// Floating point addition is only approximately associative;
    /// rounding can make the two groupings differ in the last bits.
    FloatSum
}

impl<T: Float> Semigroup<T> for FloatSum<T> {
    fn combine(&self, a: &T, b: &T) -> T {
        *a + *b
    }
}

impl<T: Float> Monoid<T> for FloatSum<T> {
    fn empty(&self) -> T {
        T::zero()
    }
}

impl<T: Float> CommutativeMonoid<T> for FloatSum<T> {}

// Concat: String concatenation

/// [`String`] under concatenation.
///
/// - `combine = a` followed by `b`
/// - `empty = ""`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Concat;

impl Semigroup<String> for Concat {
    fn combine(&self, a: &String, b: &String) -> String {
        let mut out = String::with_capacity(a.len() + b.len());
        out.push_str(a);
        out.push_str(b);
        out
    }

    fn combine_assign(&self, a: &mut String, b: &String) {
        a.push_str(b);
    }
}

impl Monoid<String> for Concat {
    fn empty(&self) -> String {
        String::new()
    }
}

// Append<T>: Vec concatenation

phantom_instance! {
    /// [`Vec<T>`] under concatenation.
    ///
    /// - `combine = a` followed by `b`
    /// - `empty = vec![]`
    Append
}

impl<T: Clone> Semigroup<Vec<T>> for Append<T> {
    fn combine(&self, a: &Vec<T>, b: &Vec<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(a.len() + b.len());
        out.extend_from_slice(a);
        out.extend_from_slice(b);
        out
    }

    fn combine_assign(&self, a: &mut Vec<T>, b: &Vec<T>) {
        a.extend_from_slice(b);
    }
}

impl<T: Clone> Monoid<Vec<T>> for Append<T> {
    fn empty(&self) -> Vec<T> {
        Vec::new()
    }
}

// LazyConcat<T>: LazySeq concatenation

phantom_instance! {
    /// [`LazySeq<T>`] under lazy concatenation.
    ///
    /// - `combine = a` followed by `b`; nothing is evaluated until the
    ///   result is iterated, so either side may be infinite.
    /// - `empty` = the empty sequence
    ///
    /// # Example
    /// ```
    /// use monoids::LazySeq;
    /// use monoids::Semigroup;
    /// use monoids::primitives::LazyConcat;
    ///
    /// let naturals = LazySeq::from_fn(|| 0u64..);
    /// let head = LazySeq::from_vec(vec![7u64]);
    /// let joined = LazyConcat::new().combine(&head, &naturals);
    /// assert_eq!(joined.iter().take(3).collect::<Vec<_>>(), vec![7, 0, 1]);
    /// ```
    LazyConcat
}

impl<T: 'static> Semigroup<LazySeq<T>> for LazyConcat<T> {
    fn combine(&self, a: &LazySeq<T>, b: &LazySeq<T>) -> LazySeq<T> {
        a.chain(b)
    }
}

impl<T: 'static> Monoid<LazySeq<T>> for LazyConcat<T> {
    fn empty(&self) -> LazySeq<T> {
        LazySeq::empty()
    }

    // Bulk reductions join every operand in one pass instead of
    // rejoining the growing prefix at each step.
    fn combine_all_ordered(&self, xs: &[LazySeq<T>]) -> LazySeq<T>
    where
        LazySeq<T>: Clone,
    {
        LazySeq::concat(xs.iter().cloned())
    }

    fn combine_iter(&self, xs: &mut dyn Iterator<Item = LazySeq<T>>) -> LazySeq<T> {
        LazySeq::concat(xs)
    }
}
