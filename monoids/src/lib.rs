/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Combine capabilities passed as values.
//!
//! This crate separates *how* values of a type merge from the values
//! themselves. An instance is an ordinary (usually zero-sized) value
//! implementing [`Semigroup<A>`] or [`Monoid<A>`] for some value type
//! `A`; callers hand instances to the code that needs them, and
//! composite constructors build new instances out of existing ones.
//!
//! # Quick Start
//!
//! ```rust
//! use monoids::Monoid;
//! use monoids::Semigroup;
//! use monoids::catalog;
//!
//! let sum = catalog::int();
//! assert_eq!(sum.combine(&2, &3), 5);
//! assert_eq!(sum.combine_all_ordered(&[1, 2, 3, 4]), 10);
//! assert_eq!(sum.combine_all_ordered(&[]), 0);
//!
//! // Composite instances are built from their components.
//! let merge = monoids::option(catalog::string());
//! assert_eq!(
//!     merge.combine(&Some("ab".to_string()), &Some("c".to_string())),
//!     Some("abc".to_string())
//! );
//! assert_eq!(merge.empty(), None);
//! ```
//!
//! # Core Concepts
//!
//! - **Semigroup**: an instance that combines two values associatively
//!   (`combine`). Examples: addition, conjunction, concatenation.
//!
//! - **Monoid**: a semigroup instance with an identity value
//!   (`empty`), which makes reducing an empty collection well defined.
//!
//! - **CommutativeMonoid**: a monoid instance whose combine commutes.
//!
//! # Provided Instances
//!
//! - [`catalog`]: stateless instances for `bool`, the integer and
//!   floating point types, [`String`], [`Vec<T>`] and [`LazySeq<T>`],
//!   looked up by name or by type ([`HasMonoid`]).
//! - Composite constructors: [`either`], [`option`], [`map`],
//!   [`validated`], [`endo`] and [`constant`].
//!
//! # Instances are values
//!
//! A type may have several lawful monoids (`i32` under addition or
//! multiplication, `bool` under `&&` or `||`), so the instance is not
//! tied to the type. References and [`Arc`]s to instances are
//! instances too, which lets one instance back many composites:
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use monoids::Semigroup;
//! use monoids::catalog;
//!
//! let sum = catalog::long();
//! let optional = monoids::option(&sum);
//! let counts = monoids::map(&sum);
//! assert_eq!(optional.combine(&Some(1), &None), Some(1));
//! assert_eq!(
//!     counts.combine(&BTreeMap::from([("a", 1)]), &BTreeMap::from([("a", 2)])),
//!     BTreeMap::from([("a", 3)])
//! );
//! ```

use std::sync::Arc;

pub mod catalog;
mod constant;
mod either;
mod endo;
mod lazy;
mod map;
mod option;
pub mod primitives;
mod validated;

pub use catalog::Catalog;
pub use catalog::CatalogError;
pub use catalog::HasMonoid;
pub use catalog::SharedMonoid;
pub use catalog::monoid;
pub use constant::Const;
pub use constant::ConstMonoid;
pub use constant::constant;
pub use either::EitherMonoid;
pub use either::either;
pub use endo::Endo;
pub use endo::EndoMonoid;
pub use endo::endo;
pub use lazy::LazySeq;
pub use map::MapMonoid;
pub use map::map;
pub use option::OptionMonoid;
pub use option::option;
pub use validated::Validated;
pub use validated::ValidatedMonoid;
pub use validated::validated;

// Semigroup

/// A **semigroup** instance: an associative binary operation on `A`.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `s.combine(&s.combine(&a, &b), &c) == s.combine(&a, &s.combine(&b, &c))`
///
/// # Example
///
/// ```rust
/// use monoids::Semigroup;
///
/// struct Longest;
///
/// impl Semigroup<String> for Longest {
///     fn combine(&self, a: &String, b: &String) -> String {
///         if b.len() > a.len() { b.clone() } else { a.clone() }
///     }
/// }
///
/// let (x, y, z) = ("ab".to_string(), "abc".to_string(), "a".to_string());
/// assert_eq!(
///     Longest.combine(&Longest.combine(&x, &y), &z),
///     Longest.combine(&x, &Longest.combine(&y, &z)),
/// );
/// ```
pub trait Semigroup<A> {
    /// Combine two values associatively.
    fn combine(&self, a: &A, b: &A) -> A;

    /// In-place combine: `*a = combine(a, b)`.
    fn combine_assign(&self, a: &mut A, b: &A) {
        *a = self.combine(a, b);
    }

    /// Combine `a` with `b` when `b` is present; otherwise return `a`
    /// unchanged.
    fn maybe_combine(&self, a: A, b: Option<&A>) -> A {
        match b {
            Some(b) => self.combine(&a, b),
            None => a,
        }
    }
}

// Monoid

/// A **monoid** instance: a semigroup instance with an identity value.
///
/// Laws (not enforced by type system):
///
/// - **Associative**: inherited from [`Semigroup`]
/// - **Left identity**: `m.combine(&m.empty(), &a) == a`
/// - **Right identity**: `m.combine(&a, &m.empty()) == a`
///
/// The bulk operations fold left to right in iteration order and
/// never seed the fold with `empty()` when there is at least one
/// element.
///
/// # Example
///
/// ```rust
/// use monoids::Monoid;
/// use monoids::Semigroup;
///
/// struct Product;
///
/// impl Semigroup<i64> for Product {
///     fn combine(&self, a: &i64, b: &i64) -> i64 {
///         a * b
///     }
/// }
///
/// impl Monoid<i64> for Product {
///     fn empty(&self) -> i64 {
///         1
///     }
/// }
///
/// assert_eq!(Product.combine_all_ordered(&[2, 3, 7]), 42);
/// assert_eq!(Product.combine_all_ordered(&[]), 1);
/// assert_eq!(Product.combine_all(vec![5, 5]), 25);
/// ```
pub trait Monoid<A>: Semigroup<A> {
    /// The identity value.
    fn empty(&self) -> A;

    /// Reduce a sequence in order; an empty slice reduces to `empty()`.
    fn combine_all_ordered(&self, xs: &[A]) -> A
    where
        A: Clone,
    {
        tracing::trace!(len = xs.len(), "combine_all_ordered");
        match xs.split_first() {
            None => self.empty(),
            Some((first, rest)) => rest
                .iter()
                .fold(first.clone(), |acc, x| self.combine(&acc, x)),
        }
    }

    /// Reduce the values pulled from `xs` in order; an exhausted
    /// iterator reduces to `empty()`.
    ///
    /// This is the object-safe form of [`Monoid::combine_all`], and the
    /// method to override when an instance reduces in bulk differently
    /// from a pairwise fold (stopping early, or joining everything in
    /// one pass). Forwarding instances (`&M`, `Arc<M>`) forward it.
    fn combine_iter(&self, xs: &mut dyn Iterator<Item = A>) -> A {
        let mut len = 0usize;
        let reduced = xs.reduce(|acc, x| {
            len += 1;
            self.combine(&acc, &x)
        });
        tracing::trace!(combines = len, "combine_all");
        reduced.unwrap_or_else(|| self.empty())
    }

    /// Reduce any collection of owned values in iteration order; an
    /// empty collection reduces to `empty()`.
    fn combine_all<I>(&self, xs: I) -> A
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        self.combine_iter(&mut xs.into_iter())
    }
}

// CommutativeMonoid

/// A **commutative monoid** instance: a monoid whose combine commutes.
///
/// Laws (not enforced by type system):
///
/// - **Associative**, **Identity**: inherited from [`Monoid`]
/// - **Commutative**: `m.combine(&a, &b) == m.combine(&b, &a)`
pub trait CommutativeMonoid<A>: Monoid<A> {}

/// Combine `a` and `b` through `instance`.
///
/// Equivalent to `instance.combine(a, b)`; useful where the instance
/// is itself a generic parameter and method syntax would be ambiguous.
///
/// ```rust
/// use monoids::catalog;
///
/// assert_eq!(monoids::combine(&catalog::boolean(), &true, &false), false);
/// ```
pub fn combine<A, S>(instance: &S, a: &A, b: &A) -> A
where
    S: Semigroup<A> + ?Sized,
{
    instance.combine(a, b)
}

// Forwarding impls: borrowed and shared instances are instances.

impl<A, S: Semigroup<A> + ?Sized> Semigroup<A> for &S {
    fn combine(&self, a: &A, b: &A) -> A {
        (**self).combine(a, b)
    }

    fn combine_assign(&self, a: &mut A, b: &A) {
        (**self).combine_assign(a, b)
    }

    fn maybe_combine(&self, a: A, b: Option<&A>) -> A {
        (**self).maybe_combine(a, b)
    }
}

impl<A, M: Monoid<A> + ?Sized> Monoid<A> for &M {
    fn empty(&self) -> A {
        (**self).empty()
    }

    fn combine_all_ordered(&self, xs: &[A]) -> A
    where
        A: Clone,
    {
        (**self).combine_all_ordered(xs)
    }

    fn combine_iter(&self, xs: &mut dyn Iterator<Item = A>) -> A {
        (**self).combine_iter(xs)
    }
}

impl<A, M: CommutativeMonoid<A> + ?Sized> CommutativeMonoid<A> for &M {}

impl<A, S: Semigroup<A> + ?Sized> Semigroup<A> for Arc<S> {
    fn combine(&self, a: &A, b: &A) -> A {
        (**self).combine(a, b)
    }

    fn combine_assign(&self, a: &mut A, b: &A) {
        (**self).combine_assign(a, b)
    }

    fn maybe_combine(&self, a: A, b: Option<&A>) -> A {
        (**self).maybe_combine(a, b)
    }
}

impl<A, M: Monoid<A> + ?Sized> Monoid<A> for Arc<M> {
    fn empty(&self) -> A {
        (**self).empty()
    }

    fn combine_all_ordered(&self, xs: &[A]) -> A
    where
        A: Clone,
    {
        (**self).combine_all_ordered(xs)
    }

    fn combine_iter(&self, xs: &mut dyn Iterator<Item = A>) -> A {
        (**self).combine_iter(xs)
    }
}

impl<A, M: CommutativeMonoid<A> + ?Sized> CommutativeMonoid<A> for Arc<M> {}

// Tests
